//! Cache entry model

use crate::domain::Findings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One memoized masking result
///
/// An entry is only valid while `now < expires`; an expired entry must be
/// treated as absent and removed from the backing store on next access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Masked output text
    pub masked: String,
    /// Findings that produced the masked text
    pub findings: Findings,
    /// Expiry timestamp
    pub expires: DateTime<Utc>,
}

impl CacheEntry {
    /// Create an entry expiring at the given instant
    pub fn new(masked: String, findings: Findings, expires: DateTime<Utc>) -> Self {
        Self {
            masked,
            findings,
            expires,
        }
    }

    /// Whether the entry is still valid at `now`
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires
    }
}
