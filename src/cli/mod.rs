//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Shroud using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Shroud - PII masking tool
#[derive(Parser, Debug)]
#[command(name = "shroud")]
#[command(version, about, long_about = None)]
#[command(author = "Shroud Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "shroud.toml", env = "SHROUD_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHROUD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect and mask PII in a text
    Mask(commands::mask::MaskArgs),

    /// Show result cache status
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_mask() {
        let cli = Cli::parse_from(["shroud", "mask", "--text", "hello"]);
        assert_eq!(cli.config, "shroud.toml");
        assert!(matches!(cli.command, Commands::Mask(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["shroud", "--config", "custom.toml", "status"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_cli_parse_mask_flags() {
        let cli = Cli::parse_from(["shroud", "mask", "--text", "hi", "--no-cache", "--json"]);
        if let Commands::Mask(args) = cli.command {
            assert!(args.no_cache);
            assert!(args.json);
        } else {
            panic!("expected mask command");
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["shroud", "init", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert!(args.force);
            assert_eq!(args.output, "shroud.toml");
        } else {
            panic!("expected init command");
        }
    }
}
