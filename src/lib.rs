// Shroud - PII masking tool
// Copyright (c) 2025 Shroud Contributors
// Licensed under the MIT License

//! # Shroud - PII detection and masking
//!
//! Shroud detects personally-identifiable-information substrings in free
//! text, replaces each occurrence with a deterministic pseudonymized token,
//! and memoizes results by content hash with a TTL.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Detecting** PII against a fixed set of category rules
//! - **Masking** matches with stable `[{category}]_{digest}` tokens
//! - **Merging** overlapping match spans before rewriting, so that two
//!   categories matching the same character range cannot corrupt output
//! - **Caching** results by content hash with TTL expiry in a flat file
//!
//! ## Architecture
//!
//! Shroud follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (detection, masking, caching, pipeline)
//! - [`adapters`] - External collaborators (text classifier)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shroud::config::ShroudConfig;
//! use shroud::core::MaskingPipeline;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ShroudConfig::default();
//!     let mut pipeline = MaskingPipeline::from_config(&config)?;
//!
//!     let outcome = pipeline.process_text("Contact John Doe at john.doe@email.com", true);
//!
//!     println!("{}", outcome.masked_text);
//!     println!("{} categories matched", outcome.findings.category_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Fail-open error handling
//!
//! Every stage degrades its own output instead of aborting the request: a
//! detection fault yields no matches, a masking fault yields the unmasked
//! text, a cache fault behaves as a miss, and a classifier fault yields the
//! label `"Unknown"`. Callers always receive a well-formed
//! [`domain::ProcessOutcome`]. Callers requiring strict redaction must
//! check for residual PII themselves.
//!
//! ## Limitations
//!
//! - The backing cache store assumes a single writer; concurrent processes
//!   sharing one store file risk lost updates.
//! - Pseudonym tokens embed hex digits of a content digest and may
//!   themselves re-trigger digit-based rules if masked output is fed back
//!   through the pipeline; masking is not idempotent under recursion.
//! - The standalone 3-digit CVV rule is a deliberately low-precision
//!   heuristic; false positives are expected.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
