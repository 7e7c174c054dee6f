//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted file logs
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! The log stream is a write-only diagnostic sink: nothing in the core
//! reads it back. Raw PII values are never logged, only failure types and
//! counts.
//!
//! # Example
//!
//! ```no_run
//! use shroud::logging::init_logging;
//! use shroud::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
