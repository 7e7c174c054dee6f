//! Configuration management for Shroud.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Shroud uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting (an empty file works)
//! - Environment variable overrides (`SHROUD_*` prefix)
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [cache]
//! path = "cache/pii_cache.json"
//! ttl_hours = 24
//!
//! [validation]
//! min_length = 1
//! max_length = 10000
//!
//! [detector]
//! # pattern_library = "patterns/custom_patterns.toml"
//!
//! [classifier]
//! # model_path = "models/classifier.json"
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, CacheConfig, ClassifierConfig, DetectorConfig, LoggingConfig, ShroudConfig,
    ValidationConfig,
};
