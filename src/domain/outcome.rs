//! Public response shape of the masking pipeline

use crate::domain::findings::Findings;
use serde::{Deserialize, Serialize};

/// Provenance of a pipeline response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Result served from the TTL cache
    Cache,
    /// Result produced by a fresh detection/masking pass
    Processor,
    /// Request degraded at some stage; the original text is returned
    Error,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cache => f.write_str("cache"),
            Self::Processor => f.write_str("processor"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Structured response returned by `process_text`
///
/// Always well-formed: even when a stage faults, callers receive the
/// original text with empty findings and `source = error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Text with detected PII replaced by pseudonym tokens
    pub masked_text: String,
    /// Detected PII, by category
    pub findings: Findings,
    /// Where the result came from
    pub source: Source,
    /// Label assigned by the text classifier ("Unknown" on failure)
    pub category: String,
}

impl ProcessOutcome {
    /// Build the degraded response for a request that could not be served
    pub fn degraded(text: &str, category: String) -> Self {
        Self {
            masked_text: text.to_string(),
            findings: Findings::new(),
            source: Source::Error,
            category,
        }
    }
}
