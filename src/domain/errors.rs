//! Domain error types
//!
//! This module defines the error hierarchy for Shroud. All errors are
//! domain-specific and don't expose third-party types. Every pipeline stage
//! is fail-open at its own boundary: stage faults degrade that stage's
//! output and are reported to the diagnostic sink, never thrown across the
//! public boundary.

use thiserror::Error;

/// Main Shroud error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ShroudError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input validation errors (bad shape or length)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Detection rule evaluation errors
    #[error("Detection error: {0}")]
    Detection(String),

    /// Span resolution / text rewrite errors
    #[error("Masking error: {0}")]
    Masking(String),

    /// Cache I/O or corruption errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// Classifier collaborator errors
    #[error("Classification error: {0}")]
    Classification(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ShroudError {
    fn from(err: std::io::Error) -> Self {
        ShroudError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ShroudError {
    fn from(err: serde_json::Error) -> Self {
        ShroudError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ShroudError {
    fn from(err: toml::de::Error) -> Self {
        ShroudError::Configuration(format!("TOML parse error: {err}"))
    }
}
