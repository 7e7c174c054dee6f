//! Init command implementation
//!
//! Generates a sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "shroud.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Shroud configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: shroud validate-config");
                println!("  3. Mask some text: shroud mask --text \"Contact John Doe\"");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }

    /// Sample configuration content
    fn sample_config() -> &'static str {
        r#"# Shroud configuration

[application]
log_level = "info"

[cache]
path = "cache/pii_cache.json"
ttl_hours = 24

[validation]
min_length = 1
max_length = 10000

[detector]
# Custom pattern library (TOML). Built-in patterns are used when unset.
# pattern_library = "patterns/custom_patterns.toml"

[classifier]
# Trained model artifact (JSON). Texts are labelled "Unknown" when unset.
# model_path = "models/classifier.json"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}
