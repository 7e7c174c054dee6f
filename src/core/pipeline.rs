//! Masking pipeline
//!
//! The top-level service wiring validation, the result cache, the
//! detection/masking processor, and the classifier collaborator into the
//! single public operation [`MaskingPipeline::process_text`].
//!
//! Every stage is fail-open at its own boundary: callers always receive a
//! well-formed [`ProcessOutcome`], never an error.

use crate::adapters::classifier::{Classifier, ModelClassifier, UNKNOWN_LABEL};
use crate::config::ShroudConfig;
use crate::core::cache::CacheManager;
use crate::core::detector::{patterns::PatternRegistry, regex::RegexDetector};
use crate::core::masker::Masker;
use crate::core::processor::TextProcessor;
use crate::core::validate::InputValidator;
use crate::domain::{ProcessOutcome, Result, ShroudError, Source};

/// End-to-end PII masking service
pub struct MaskingPipeline {
    validator: InputValidator,
    processor: TextProcessor,
    cache: CacheManager,
    classifier: Box<dyn Classifier>,
    ttl_hours: i64,
}

impl MaskingPipeline {
    /// Create a pipeline from explicit collaborators
    pub fn new(
        validator: InputValidator,
        processor: TextProcessor,
        cache: CacheManager,
        classifier: Box<dyn Classifier>,
        ttl_hours: i64,
    ) -> Self {
        Self {
            validator,
            processor,
            cache,
            classifier,
            ttl_hours,
        }
    }

    /// Build a pipeline from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the detector pattern library cannot be loaded.
    pub fn from_config(config: &ShroudConfig) -> Result<Self> {
        let detector = match config.detector.pattern_library {
            Some(ref path) => {
                let registry = PatternRegistry::from_file(path)
                    .map_err(|e| ShroudError::Detection(e.to_string()))?;
                RegexDetector::with_registry(registry)
            }
            None => RegexDetector::new()?,
        };

        let classifier: Box<dyn Classifier> = match config.classifier.model_path {
            Some(ref path) => Box::new(ModelClassifier::new(path)),
            None => Box::new(ModelClassifier::unconfigured()),
        };

        Ok(Self::new(
            InputValidator::with_limits(config.validation.min_length, config.validation.max_length),
            TextProcessor::new(Box::new(detector), Masker::new()),
            CacheManager::open(&config.cache.path),
            classifier,
            config.cache.ttl_hours,
        ))
    }

    /// Detect and mask PII in a text, consulting the result cache
    ///
    /// Responses carry a provenance tag: `cache` when served from an
    /// unexpired cache entry, `processor` for a fresh detection/masking
    /// pass, `error` when the input was rejected by validation. Rejected
    /// input never reaches the pipeline stages, classifier included.
    pub fn process_text(&mut self, text: &str, use_cache: bool) -> ProcessOutcome {
        if let Err(e) = self.validator.validate_text(text) {
            tracing::warn!(error = %e, "Input rejected");
            return ProcessOutcome::degraded(text, UNKNOWN_LABEL.to_string());
        }

        let category = self.classifier.predict_category(text);

        if use_cache {
            if let Some(entry) = self.cache.get(text) {
                tracing::debug!("Serving masked text from cache");
                return ProcessOutcome {
                    masked_text: entry.masked,
                    findings: entry.findings,
                    source: Source::Cache,
                    category,
                };
            }
        }

        let (masked_text, findings) = self.processor.process(text);

        if use_cache {
            self.cache
                .put(text, masked_text.clone(), findings.clone(), self.ttl_hours);
        }

        ProcessOutcome {
            masked_text,
            findings,
            source: Source::Processor,
            category,
        }
    }

    /// Access the underlying cache (for status reporting)
    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }
}
