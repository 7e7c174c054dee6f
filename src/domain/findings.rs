//! PII category and findings data models

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// PII category enumeration
///
/// Variants are declared in scan order. The derived `Ord` follows
/// declaration order, which is what gives "earliest-registered category
/// wins" tie-breaking during span merging its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// Capitalized word sequences (first and last name)
    FullName,
    /// Email addresses
    Email,
    /// Phone numbers (Indian numbering plan)
    PhoneNumber,
    /// Dates of birth (DD/MM/YYYY or DD-MM-YYYY)
    Dob,
    /// 12-digit Aadhaar numbers, optionally grouped
    AadharNum,
    /// 13-16 digit payment card numbers with optional separators
    CreditDebitNo,
    /// Standalone 3-digit runs (CVV heuristic, low precision)
    CvvNo,
    /// Card expiry dates (MM/YY or MM/YYYY)
    ExpiryNo,
}

impl PiiCategory {
    /// All categories in scan order
    pub const ALL: [PiiCategory; 8] = [
        Self::FullName,
        Self::Email,
        Self::PhoneNumber,
        Self::Dob,
        Self::AadharNum,
        Self::CreditDebitNo,
        Self::CvvNo,
        Self::ExpiryNo,
    ];

    /// Get the wire label for the category
    ///
    /// This is the label embedded in pseudonym tokens and used as the key
    /// in serialized findings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::Dob => "dob",
            Self::AadharNum => "aadhar_num",
            Self::CreditDebitNo => "credit_debit_no",
            Self::CvvNo => "cvv_no",
            Self::ExpiryNo => "expiry_no",
        }
    }

    /// Position of this category in the fixed scan order
    pub fn scan_order(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Detected PII findings for one text
///
/// A typed mapping from category to the ordered list of matched raw
/// substrings. Duplicates are preserved; order is leftmost-match order
/// within each category's scan. Categories with zero matches are never
/// present. Iteration follows category scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Findings(BTreeMap<PiiCategory, Vec<String>>);

impl Findings {
    /// Create an empty findings set
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record the matched values for a category
    ///
    /// Empty value lists are dropped, keeping the no-empty-entries
    /// invariant.
    pub fn insert(&mut self, category: PiiCategory, values: Vec<String>) {
        if !values.is_empty() {
            self.0.insert(category, values);
        }
    }

    /// Get the matched values for a category, if any
    pub fn get(&self, category: PiiCategory) -> Option<&[String]> {
        self.0.get(&category).map(|v| v.as_slice())
    }

    /// Iterate categories and their matches in scan order
    pub fn iter(&self) -> btree_map::Iter<'_, PiiCategory, Vec<String>> {
        self.0.iter()
    }

    /// Number of categories with at least one match
    pub fn category_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of matched values across all categories
    pub fn total_matches(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Check whether no PII was found
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Findings {
    type Item = (&'a PiiCategory, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, PiiCategory, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
