//! Pattern library for PII detection

use crate::domain::PiiCategory;
use anyhow::{Context, Result};
use fancy_regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this category
    pub patterns: Vec<String>,
    /// PII category label
    pub category: String,
}

/// Compiled pattern with metadata
#[derive(Debug)]
pub struct CompiledPattern {
    /// Compiled regex
    pub regex: Regex,
    /// PII category
    pub category: PiiCategory,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Pattern registry for PII detection
///
/// Patterns are grouped by category; lookups and iteration follow the fixed
/// category scan order regardless of the order entries appear in the TOML.
pub struct PatternRegistry {
    patterns_by_category: BTreeMap<PiiCategory, Vec<CompiledPattern>>,
}

impl PatternRegistry {
    /// Create a new pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        let mut patterns_by_category: BTreeMap<PiiCategory, Vec<CompiledPattern>> = BTreeMap::new();

        for (name, def) in library.patterns {
            let category = Self::parse_category(&def.category).with_context(|| {
                format!("Invalid category in pattern '{}': {}", name, def.category)
            })?;

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str)
                    .with_context(|| format!("Invalid regex in pattern '{name}': {pattern_str}"))?;

                patterns_by_category
                    .entry(category)
                    .or_default()
                    .push(CompiledPattern { regex, category });
            }
        }

        Ok(Self {
            patterns_by_category,
        })
    }

    /// Create a default pattern registry with built-in patterns
    pub fn default_patterns() -> Result<Self> {
        // Use embedded default patterns
        let default_toml = include_str!("../../../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Get patterns for a specific category
    pub fn patterns_for_category(&self, category: PiiCategory) -> Option<&[CompiledPattern]> {
        self.patterns_by_category
            .get(&category)
            .map(|v| v.as_slice())
    }

    /// Total number of compiled patterns
    pub fn pattern_count(&self) -> usize {
        self.patterns_by_category.values().map(Vec::len).sum()
    }

    /// Parse category string to PiiCategory enum
    fn parse_category(s: &str) -> Result<PiiCategory> {
        match s.to_lowercase().as_str() {
            "full_name" | "name" => Ok(PiiCategory::FullName),
            "email" => Ok(PiiCategory::Email),
            "phone_number" | "phone" => Ok(PiiCategory::PhoneNumber),
            "dob" | "date_of_birth" => Ok(PiiCategory::Dob),
            "aadhar_num" | "aadhar" => Ok(PiiCategory::AadharNum),
            "credit_debit_no" | "card" => Ok(PiiCategory::CreditDebitNo),
            "cvv_no" | "cvv" => Ok(PiiCategory::CvvNo),
            "expiry_no" | "expiry" => Ok(PiiCategory::ExpiryNo),
            _ => anyhow::bail!("Unknown PII category: {s}"),
        }
    }
}
