//! PII masking module
//!
//! Rewrites text by replacing detected PII values with deterministic
//! pseudonym tokens. Masking is fail-open: a rewrite fault returns the
//! original text unchanged, biasing toward data survival over guaranteed
//! redaction. Callers requiring strict redaction must check for residual
//! PII themselves.

pub mod pseudonym;
pub mod span;

use crate::domain::Findings;
use pseudonym::PseudonymTable;
use span::{apply_spans, merge_spans, Span};

/// PII masker with a per-instance pseudonym table
pub struct Masker {
    pseudonyms: PseudonymTable,
}

impl Masker {
    /// Create a masker with an empty pseudonym table
    pub fn new() -> Self {
        Self {
            pseudonyms: PseudonymTable::new(),
        }
    }

    /// Mask every detected PII occurrence in a text
    ///
    /// For each finding value (skipping blank values), every literal
    /// case-sensitive occurrence in the text becomes a replacement span.
    /// Spans from all categories are merged (overlapping or adjacent spans
    /// collapse to the longest member's token) and applied back-to-front.
    ///
    /// On any rewrite fault the original text is returned unchanged.
    pub fn mask(&mut self, text: &str, findings: &Findings) -> String {
        let spans = self.resolve_spans(text, findings);
        let merged = merge_spans(spans);
        self.apply_fail_open(text, &merged)
    }

    /// Number of distinct raw values the masker has assigned tokens for
    pub fn pseudonym_count(&self) -> usize {
        self.pseudonyms.len()
    }

    /// Compute replacement spans for every occurrence of every finding
    fn resolve_spans(&mut self, text: &str, findings: &Findings) -> Vec<Span> {
        let mut spans = Vec::new();

        for (category, values) in findings {
            for value in values {
                if value.trim().is_empty() {
                    continue;
                }

                let token = self.pseudonyms.token_for(*category, value);
                for (start, _) in text.match_indices(value.as_str()) {
                    spans.push(Span::new(
                        start,
                        start + value.len(),
                        token.clone(),
                        category.scan_order(),
                    ));
                }
            }
        }

        spans
    }

    /// Apply resolved spans, falling back to the unmasked text on fault
    pub(crate) fn apply_fail_open(&self, text: &str, spans: &[Span]) -> String {
        match apply_spans(text, spans) {
            Ok(masked) => masked,
            Err(e) => {
                tracing::warn!(error = %e, "Masking fault, returning text unmasked");
                text.to_string()
            }
        }
    }
}

impl Default for Masker {
    fn default() -> Self {
        Self::new()
    }
}
