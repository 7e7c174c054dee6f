//! Text classification collaborator
//!
//! Assigns a category label to each processed text. The classifier is
//! consumed as a pure `text -> label` function: model training happens
//! offline and the resulting artifact is loaded read-only. Any failure
//! (missing artifact, corrupt artifact, scoring fault) yields the sentinel
//! label instead of an error.

pub mod model;

pub use model::ModelClassifier;

/// Sentinel label returned when classification is unavailable or faults
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Trait for text classification implementations
pub trait Classifier: Send + Sync {
    /// Predict the category label for a text
    ///
    /// Never fails: implementations degrade to [`UNKNOWN_LABEL`].
    fn predict_category(&self, text: &str) -> String;
}
