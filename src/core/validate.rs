//! Input validation
//!
//! Rejects out-of-range or blank input before it reaches the pipeline.
//! Validation failures are reported to the caller as errors but are never
//! raised into the detection/masking stages.

use crate::domain::{Result, ShroudError};

/// Default minimum accepted text length
pub const DEFAULT_MIN_LENGTH: usize = 1;
/// Default maximum accepted text length
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

/// Validates input text against a configured length range
#[derive(Debug, Clone)]
pub struct InputValidator {
    min_length: usize,
    max_length: usize,
}

impl InputValidator {
    /// Create a validator with the default `[1, 10000]` length range
    pub fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Create a validator with a custom length range
    pub fn with_limits(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// Validate input text
    ///
    /// Text must be within the configured length range (measured in
    /// characters) and contain at least one non-whitespace character.
    pub fn validate_text(&self, text: &str) -> Result<()> {
        let length = text.chars().count();
        if length < self.min_length || length > self.max_length {
            return Err(ShroudError::Validation(format!(
                "text length {length} outside allowed range [{}, {}]",
                self.min_length, self.max_length
            )));
        }

        if text.trim().is_empty() {
            return Err(ShroudError::Validation(
                "text is empty or whitespace".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}
