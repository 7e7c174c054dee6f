//! Text processing orchestrator
//!
//! Sequences detection and masking for one request. The processor holds no
//! state of its own beyond its collaborators and swallows stage faults:
//! callers always receive a well-formed `(text, findings)` pair, never an
//! error.

use crate::core::detector::PiiDetector;
use crate::core::masker::Masker;
use crate::domain::Findings;

/// Coordinates PII detection and masking
pub struct TextProcessor {
    detector: Box<dyn PiiDetector>,
    masker: Masker,
}

impl TextProcessor {
    /// Create a processor from its collaborators
    pub fn new(detector: Box<dyn PiiDetector>, masker: Masker) -> Self {
        Self { detector, masker }
    }

    /// Detect and mask PII in a text
    ///
    /// On a detection fault the original text is returned with empty
    /// findings; the fault is reported to the diagnostic sink only.
    pub fn process(&mut self, text: &str) -> (String, Findings) {
        let findings = match self.detector.detect(text) {
            Ok(findings) => findings,
            Err(e) => {
                tracing::error!(error = %e, "Text processing fault");
                return (text.to_string(), Findings::new());
            }
        };

        let masked = self.masker.mask(text, &findings);
        (masked, findings)
    }
}
