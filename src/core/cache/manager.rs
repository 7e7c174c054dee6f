//! Cache manager with flat-file persistence

use super::entry::CacheEntry;
use crate::domain::Findings;
use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default entry lifetime
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// Content hash used as the cache key
///
/// Hex-encoded SHA-256 of the input text. Used purely as a lookup key, not
/// as a security boundary.
pub fn content_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    format!("{digest:x}")
}

/// Content-hash-keyed store of prior masking results with TTL expiry
///
/// The table is loaded whole from the backing store on construction and
/// rewritten whole on every mutation. A missing or unreadable store yields
/// an empty table; corruption is reported to the diagnostic sink but is
/// never fatal.
pub struct CacheManager {
    store_path: PathBuf,
    table: HashMap<String, CacheEntry>,
}

impl CacheManager {
    /// Open a cache backed by the given store file
    pub fn open(store_path: impl Into<PathBuf>) -> Self {
        let store_path = store_path.into();

        if let Some(parent) = store_path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::warn!(
                        path = %parent.display(),
                        error = %e,
                        "Failed to create cache directory"
                    );
                }
            }
        }

        let table = Self::load_table(&store_path);
        Self { store_path, table }
    }

    /// Retrieve the cached entry for a text, if present and unexpired
    ///
    /// An expired entry is deleted and the updated table persisted before
    /// "absent" is returned.
    pub fn get(&mut self, text: &str) -> Option<CacheEntry> {
        let key = content_hash(text);

        let expired = match self.table.get(&key) {
            Some(entry) => {
                if entry.is_live(Utc::now()) {
                    return Some(entry.clone());
                }
                true
            }
            None => false,
        };

        if expired {
            tracing::debug!(key = %key, "Evicting expired cache entry");
            self.table.remove(&key);
            self.persist();
        }
        None
    }

    /// Store a masking result with the given TTL and persist the table
    pub fn put(&mut self, text: &str, masked: String, findings: Findings, ttl_hours: i64) {
        let entry = CacheEntry::new(masked, findings, Utc::now() + Duration::hours(ttl_hours));
        self.table.insert(content_hash(text), entry);
        self.persist();
    }

    /// Number of entries currently in the table, expired included
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of entries still within their TTL
    pub fn live_count(&self) -> usize {
        let now = Utc::now();
        self.table.values().filter(|e| e.is_live(now)).count()
    }

    /// Path of the backing store file
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Rewrite the full table to the backing store
    ///
    /// Persist faults degrade to cache-miss behavior on a later run and are
    /// reported to the diagnostic sink only.
    fn persist(&self) {
        let serialized = match serde_json::to_string_pretty(&self.table) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Cache serialization fault");
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.store_path, serialized) {
            tracing::error!(
                path = %self.store_path.display(),
                error = %e,
                "Cache persist fault"
            );
        }
    }

    /// Load the full table, degrading to empty on any fault
    fn load_table(store_path: &Path) -> HashMap<String, CacheEntry> {
        let contents = match std::fs::read_to_string(store_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %store_path.display(), "No cache store, starting empty");
                return HashMap::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %store_path.display(),
                    error = %e,
                    "Failed to read cache store, starting empty"
                );
                return HashMap::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(
                    path = %store_path.display(),
                    error = %e,
                    "Corrupt cache store, starting empty"
                );
                HashMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PiiCategory;
    use tempfile::TempDir;

    fn sample_findings() -> Findings {
        let mut findings = Findings::new();
        findings.insert(PiiCategory::Email, vec!["a@b.com".to_string()]);
        findings
    }

    fn cache_in(dir: &TempDir) -> CacheManager {
        CacheManager::open(dir.path().join("pii_cache.json"))
    }

    #[test]
    fn test_content_hash_is_stable_hex() {
        let first = content_hash("some text");
        let second = content_hash("some text");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_round_trip_within_ttl() {
        let dir = TempDir::new().unwrap();
        let mut cache = cache_in(&dir);

        cache.put("input", "masked".to_string(), sample_findings(), 24);
        let entry = cache.get("input").expect("entry should be live");

        assert_eq!(entry.masked, "masked");
        assert_eq!(entry.findings, sample_findings());
    }

    #[test]
    fn test_expired_entry_absent_and_removed_from_store() {
        let dir = TempDir::new().unwrap();
        let mut cache = cache_in(&dir);

        cache.put("input", "masked".to_string(), sample_findings(), 0);
        assert!(cache.get("input").is_none());
        assert!(cache.is_empty());

        // The eviction is persisted: a fresh manager sees an empty table
        let reopened = cache_in(&dir);
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_table_survives_reopen() {
        let dir = TempDir::new().unwrap();

        {
            let mut cache = cache_in(&dir);
            cache.put("input", "masked".to_string(), sample_findings(), 24);
        }

        let mut reopened = cache_in(&dir);
        let entry = reopened.get("input").expect("persisted entry");
        assert_eq!(entry.masked, "masked");
    }

    #[test]
    fn test_missing_store_yields_empty_table() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_corrupt_store_yields_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pii_cache.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let cache = CacheManager::open(&path);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_persisted_format_keys_and_fields() {
        let dir = TempDir::new().unwrap();
        let mut cache = cache_in(&dir);
        cache.put("input", "masked".to_string(), sample_findings(), 24);

        let raw = std::fs::read_to_string(cache.store_path()).unwrap();
        let table: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &table[content_hash("input")];

        assert_eq!(entry["masked"], "masked");
        assert_eq!(entry["findings"]["email"][0], "a@b.com");
        assert!(entry["expires"].is_string());
    }

    #[test]
    fn test_live_count_ignores_expired_entries() {
        let dir = TempDir::new().unwrap();
        let mut cache = cache_in(&dir);

        cache.put("fresh", "m".to_string(), Findings::new(), 24);
        cache.put("stale", "m".to_string(), Findings::new(), 0);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.live_count(), 1);
    }
}
