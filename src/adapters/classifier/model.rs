//! Linear model classifier backed by an offline-trained artifact
//!
//! The artifact is a JSON export of a bag-of-n-grams weighting plus a
//! linear classifier: a term vocabulary, one coefficient row per class, and
//! per-class intercepts. Scoring counts unigram and bigram occurrences and
//! takes the argmax class.

use super::{Classifier, UNKNOWN_LABEL};
use crate::domain::{Result, ShroudError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Deserialized model artifact
#[derive(Debug, Deserialize)]
pub struct ModelArtifact {
    /// Class labels, one per coefficient row
    classes: Vec<String>,
    /// Term -> feature index
    vocabulary: HashMap<String, usize>,
    /// Per-class feature weights
    coefficients: Vec<Vec<f64>>,
    /// Per-class intercepts
    intercepts: Vec<f64>,
}

impl ModelArtifact {
    /// Load and validate an artifact from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ShroudError::Classification(format!(
                "failed to read model artifact {}: {e}",
                path.display()
            ))
        })?;

        let artifact: ModelArtifact = serde_json::from_str(&contents)
            .map_err(|e| ShroudError::Classification(format!("invalid model artifact: {e}")))?;

        artifact.validate()?;
        Ok(artifact)
    }

    /// Check internal consistency of the artifact
    fn validate(&self) -> Result<()> {
        if self.classes.len() < 2 {
            return Err(ShroudError::Classification(
                "model artifact must define at least two classes".to_string(),
            ));
        }
        if self.coefficients.len() != self.classes.len()
            || self.intercepts.len() != self.classes.len()
        {
            return Err(ShroudError::Classification(
                "coefficient/intercept rows must match class count".to_string(),
            ));
        }

        let width = self.vocabulary.len();
        if self.coefficients.iter().any(|row| row.len() != width) {
            return Err(ShroudError::Classification(
                "coefficient row width must match vocabulary size".to_string(),
            ));
        }
        if self.vocabulary.values().any(|&idx| idx >= width) {
            return Err(ShroudError::Classification(
                "vocabulary index out of range".to_string(),
            ));
        }

        Ok(())
    }

    /// Score a text and return the best class label
    pub fn predict(&self, text: &str) -> Option<String> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in Self::terms(text) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut best: Option<(usize, f64)> = None;
        for (class_idx, row) in self.coefficients.iter().enumerate() {
            let mut score = self.intercepts[class_idx];
            for (&feature_idx, &count) in &counts {
                score += row[feature_idx] * count;
            }
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((class_idx, score)),
            }
        }

        best.map(|(idx, _)| self.classes[idx].clone())
    }

    /// Lowercased unigrams and bigrams of a text
    fn terms(text: &str) -> Vec<String> {
        let words: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(|w| w.to_lowercase())
            .collect();

        let mut terms = words.clone();
        for pair in words.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }
        terms
    }
}

/// Classifier backed by a lazily-loaded model artifact
///
/// The artifact is read at most once per process: the first prediction
/// acquires the handle and every later call reuses it. A load failure is
/// remembered and the classifier keeps answering with the sentinel label
/// instead of retrying the load.
pub struct ModelClassifier {
    artifact_path: Option<PathBuf>,
    model: OnceLock<Option<ModelArtifact>>,
}

impl ModelClassifier {
    /// Create a classifier reading the artifact at the given path
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: Some(artifact_path.into()),
            model: OnceLock::new(),
        }
    }

    /// Create a classifier with no artifact configured
    ///
    /// Always answers with the sentinel label.
    pub fn unconfigured() -> Self {
        Self {
            artifact_path: None,
            model: OnceLock::new(),
        }
    }

    /// Get the loaded model, acquiring it on first use
    fn model(&self) -> Option<&ModelArtifact> {
        self.model
            .get_or_init(|| {
                let path = self.artifact_path.as_deref()?;
                match ModelArtifact::from_file(path) {
                    Ok(artifact) => {
                        tracing::info!(path = %path.display(), "Classifier model loaded");
                        Some(artifact)
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "Classifier unavailable, degrading to sentinel label"
                        );
                        None
                    }
                }
            })
            .as_ref()
    }
}

impl Classifier for ModelClassifier {
    fn predict_category(&self, text: &str) -> String {
        self.model()
            .and_then(|model| model.predict(text))
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    }
}
