//! Mask command implementation
//!
//! Detects and masks PII in text supplied via argument, file, or stdin.

use crate::config::load_config_or_default;
use crate::core::MaskingPipeline;
use crate::domain::Source;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Text to mask
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Bypass the result cache
    #[arg(long)]
    pub no_cache: bool,

    /// Emit the full response as JSON
    #[arg(long)]
    pub json: bool,
}

impl MaskArgs {
    /// Execute the mask command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let mut pipeline = match MaskingPipeline::from_config(&config) {
            Ok(p) => p,
            Err(e) => {
                println!("❌ Failed to initialize masking pipeline");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let text = self.read_input()?;
        let outcome = pipeline.process_text(&text, !self.no_cache);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            println!("{}", outcome.masked_text);
            if !outcome.findings.is_empty() {
                eprintln!();
                eprintln!(
                    "🔎 {} match(es) across {} categor(ies), source: {}",
                    outcome.findings.total_matches(),
                    outcome.findings.category_count(),
                    outcome.source
                );
                for (category, values) in &outcome.findings {
                    eprintln!("   {category}: {}", values.len());
                }
            }
        }

        // A degraded response means the input never reached the pipeline
        if outcome.source == Source::Error {
            return Ok(1);
        }

        Ok(0)
    }

    /// Read input text from the selected source
    fn read_input(&self) -> anyhow::Result<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }

        if let Some(ref path) = self.file {
            return Ok(std::fs::read_to_string(path)?);
        }

        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
