//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ShroudConfig;
use crate::domain::errors::ShroudError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into ShroudConfig
/// 4. Applies environment variable overrides (`SHROUD_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use shroud::config::load_config;
///
/// let config = load_config("shroud.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ShroudConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ShroudError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ShroudError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ShroudConfig = toml::from_str(&contents)
        .map_err(|e| ShroudError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ShroudError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Load configuration from a file if it exists, defaults otherwise
///
/// Used by commands that should work out of the box without a config file.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ShroudConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        Ok(ShroudConfig::default())
    }
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid substitution pattern");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ShroudError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the SHROUD_* prefix
fn apply_env_overrides(config: &mut ShroudConfig) {
    if let Ok(val) = std::env::var("SHROUD_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("SHROUD_CACHE_PATH") {
        config.cache.path = val.into();
    }
    if let Ok(val) = std::env::var("SHROUD_CACHE_TTL_HOURS") {
        if let Ok(ttl) = val.parse() {
            config.cache.ttl_hours = ttl;
        }
    }
    if let Ok(val) = std::env::var("SHROUD_PATTERN_LIBRARY") {
        config.detector.pattern_library = Some(val.into());
    }
    if let Ok(val) = std::env::var("SHROUD_CLASSIFIER_MODEL") {
        config.classifier.model_path = Some(val.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_minimal_config() {
        let file = write_config(
            r#"
            [cache]
            ttl_hours = 12
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.cache.ttl_hours, 12);
        assert_eq!(config.validation.max_length, 10_000);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = load_config("/nonexistent/shroud.toml");
        assert!(matches!(result, Err(ShroudError::Configuration(_))));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = load_config_or_default("/nonexistent/shroud.toml").unwrap();
        assert_eq!(config.cache.ttl_hours, 24);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config(
            r#"
            [cache]
            ttl_hours = 0
            "#,
        );

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SHROUD_TEST_CACHE_DIR", "/tmp/shroud-test");
        let file = write_config(
            r#"
            [cache]
            path = "${SHROUD_TEST_CACHE_DIR}/pii_cache.json"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(
            config.cache.path.to_string_lossy(),
            "/tmp/shroud-test/pii_cache.json"
        );
        std::env::remove_var("SHROUD_TEST_CACHE_DIR");
    }

    #[test]
    fn test_missing_env_var_errors() {
        let file = write_config(
            r#"
            [cache]
            path = "${SHROUD_DEFINITELY_UNSET_VAR}/pii_cache.json"
            "#,
        );

        let result = load_config(file.path());
        assert!(matches!(result, Err(ShroudError::Configuration(_))));
    }

    #[test]
    fn test_substitution_skips_comments() {
        let file = write_config(
            r#"
            # path = "${SHROUD_COMMENTED_UNSET_VAR}/cache.json"
            [cache]
            ttl_hours = 24
            "#,
        );

        assert!(load_config(file.path()).is_ok());
    }
}
