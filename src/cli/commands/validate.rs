//! Validate-config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config = %config_path, "Validating configuration");

        println!("🔍 Validating configuration: {config_path}");
        println!();

        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                println!("   Cache store:  {}", config.cache.path.display());
                println!("   Cache TTL:    {}h", config.cache.ttl_hours);
                println!(
                    "   Text length:  [{}, {}]",
                    config.validation.min_length, config.validation.max_length
                );
                match config.detector.pattern_library {
                    Some(ref path) => println!("   Patterns:     {}", path.display()),
                    None => println!("   Patterns:     built-in"),
                }
                match config.classifier.model_path {
                    Some(ref path) => println!("   Classifier:   {}", path.display()),
                    None => println!("   Classifier:   disabled"),
                }
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                Ok(2) // Configuration error exit code
            }
        }
    }
}
