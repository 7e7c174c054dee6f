//! Configuration schema types
//!
//! This module defines the configuration structure for Shroud.

use crate::core::cache::DEFAULT_TTL_HOURS;
use crate::core::validate::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Shroud configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional: an empty file yields a working default
/// configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShroudConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Result cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Input validation limits
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Detector settings
    #[serde(default)]
    pub detector: DetectorConfig,

    /// Classifier collaborator settings
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShroudConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.cache.validate()?;
        self.validation.validate()?;
        self.detector.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!(
                "invalid log_level '{other}': must be one of trace, debug, info, warn, error"
            )),
        }
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Result cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Backing store file for the cache table
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,

    /// Entry lifetime in hours
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: i64,
}

impl CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ttl_hours < 1 {
            return Err(format!(
                "cache.ttl_hours must be at least 1, got {}",
                self.ttl_hours
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
            ttl_hours: default_ttl_hours(),
        }
    }
}

/// Input validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum accepted text length in characters
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Maximum accepted text length in characters
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl ValidationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.min_length < 1 {
            return Err("validation.min_length must be at least 1".to_string());
        }
        if self.max_length < self.min_length {
            return Err(format!(
                "validation.max_length ({}) must not be below min_length ({})",
                self.max_length, self.min_length
            ));
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

/// Detector configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Path to a custom pattern library TOML file
    ///
    /// When unset, the built-in pattern library is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_library: Option<PathBuf>,
}

impl DetectorConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(format!(
                    "detector.pattern_library not found: {}",
                    path.display()
                ));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!(
                    "detector.pattern_library must be a TOML file: {}",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

/// Classifier collaborator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Path to the trained model artifact
    ///
    /// When unset, every text is labelled "Unknown".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation: daily or hourly
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(format!(
                "invalid logging.local_rotation '{other}': must be daily or hourly"
            )),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("cache/pii_cache.json")
}

fn default_ttl_hours() -> i64 {
    DEFAULT_TTL_HOURS
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
