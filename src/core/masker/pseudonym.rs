//! Deterministic pseudonym assignment

use crate::domain::PiiCategory;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Number of hex characters of the value digest embedded in a token
const DIGEST_CHARS: usize = 6;

/// Pseudonym table mapping raw PII values to stable tokens
///
/// Owned by one [`Masker`](super::Masker) instance. The table accumulates
/// monotonically for the instance's lifetime with no eviction: the same raw
/// value always maps to the same token for the life of one masker. Tables
/// of unrelated instances are not shared.
///
/// The table is keyed by raw value alone. A value matched under more than
/// one category keeps the token of the category that registered it first.
#[derive(Debug, Default)]
pub struct PseudonymTable {
    entries: HashMap<String, String>,
}

impl PseudonymTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Get the token for a raw value, assigning one if unseen
    ///
    /// Tokens have the form `[{category}]_{6 lowercase hex}`, where the hex
    /// digest is derived deterministically from the raw value alone.
    pub fn token_for(&mut self, category: PiiCategory, value: &str) -> String {
        if let Some(token) = self.entries.get(value) {
            return token.clone();
        }

        let token = format!("[{}]_{}", category.label(), Self::digest(value));
        self.entries.insert(value.to_string(), token.clone());
        token
    }

    /// Number of distinct raw values registered
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no values have been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all registered pseudonyms
    ///
    /// After a reset, previously seen values are assigned fresh (but still
    /// deterministic, hence identical) tokens.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Truncated hex digest of a raw value
    fn digest(value: &str) -> String {
        let digest = Sha256::digest(value.as_bytes());
        let hex = format!("{digest:x}");
        hex[..DIGEST_CHARS].to_string()
    }
}
