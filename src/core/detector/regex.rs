//! Regex-based PII detector

use super::{patterns::PatternRegistry, PiiDetector};
use crate::domain::{Findings, PiiCategory, Result, ShroudError};
use std::sync::Arc;

/// Regex-based PII detector
///
/// Scans text against each category's rules independently. A
/// rule-evaluation fault degrades to "no matches for that category" rather
/// than aborting detection.
pub struct RegexDetector {
    pattern_registry: Arc<PatternRegistry>,
}

impl RegexDetector {
    /// Create a new regex detector with default patterns
    pub fn new() -> Result<Self> {
        let registry = PatternRegistry::default_patterns()
            .map_err(|e| ShroudError::Detection(e.to_string()))?;
        Ok(Self {
            pattern_registry: Arc::new(registry),
        })
    }

    /// Create a new regex detector with custom pattern registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            pattern_registry: Arc::new(registry),
        }
    }

    /// Collect every match for one category, in leftmost order
    ///
    /// Returns None when a rule evaluation faults; the category then
    /// contributes no matches.
    fn scan_category(&self, category: PiiCategory, text: &str) -> Option<Vec<String>> {
        let patterns = self.pattern_registry.patterns_for_category(category)?;

        let mut values = Vec::new();
        for pattern in patterns {
            for matched in pattern.regex.find_iter(text) {
                match matched {
                    Ok(m) => values.push(m.as_str().to_string()),
                    Err(e) => {
                        tracing::warn!(
                            category = %category,
                            error = %e,
                            "Rule evaluation fault, dropping category matches"
                        );
                        return None;
                    }
                }
            }
        }

        Some(values)
    }
}

impl PiiDetector for RegexDetector {
    fn detect(&self, text: &str) -> Result<Findings> {
        let mut findings = Findings::new();

        for category in PiiCategory::ALL {
            if let Some(values) = self.scan_category(category, text) {
                findings.insert(category, values);
            }
        }

        Ok(findings)
    }
}
