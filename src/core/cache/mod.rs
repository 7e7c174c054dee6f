//! TTL result cache
//!
//! Memoizes masking results keyed by a content hash of the input text.
//! The whole table lives in memory and is rewritten to a JSON flat file on
//! every mutation; entries expire by TTL and are evicted lazily on access.
//!
//! Single-writer, single-reader semantics are assumed: concurrent processes
//! sharing one backing store risk lost updates under last-writer-wins
//! full-table overwrite.

pub mod entry;
pub mod manager;

pub use entry::CacheEntry;
pub use manager::{content_hash, CacheManager, DEFAULT_TTL_HOURS};
