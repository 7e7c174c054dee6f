//! Domain models and types for Shroud.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Findings model** ([`PiiCategory`], [`Findings`])
//! - **Response shape** ([`ProcessOutcome`], [`Source`])
//! - **Error types** ([`ShroudError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ShroudError>`]:
//!
//! ```rust
//! use shroud::domain::{Result, ShroudError};
//!
//! fn example(input: &str) -> Result<()> {
//!     if input.is_empty() {
//!         return Err(ShroudError::Validation("empty input".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod findings;
pub mod outcome;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::ShroudError;
pub use findings::{Findings, PiiCategory};
pub use outcome::{ProcessOutcome, Source};
pub use result::Result;
