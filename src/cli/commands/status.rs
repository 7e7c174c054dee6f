//! Status command implementation
//!
//! Displays the state of the result cache backing store.

use crate::config::load_config_or_default;
use crate::core::cache::CacheManager;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking cache status");

        println!("📊 Cache Status");
        println!();

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let cache = CacheManager::open(&config.cache.path);
        let total = cache.len();
        let live = cache.live_count();

        println!("   Store:   {}", cache.store_path().display());
        println!("   TTL:     {}h", config.cache.ttl_hours);
        println!("   Entries: {total} ({live} live, {} expired)", total - live);

        Ok(0)
    }
}
