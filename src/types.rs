//! Core data types used throughout envform.
//!
//! This module defines the fundamental data structures for representing:
//! - Variables parsed from a `.env` file
//! - The full variable set handed to the emitters
//! - The summary of a completed generation run

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A single variable parsed from a `.env` file.
///
/// Captures the key, the raw value, and the trailing comment (if any),
/// which becomes the variable description in `variables.tf`.
///
/// # Example line
///
/// ```text
/// PORT=8080 # http listen port
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvEntry {
    /// The variable name (e.g., "PORT")
    pub key: String,

    /// The trimmed text after `=` and before any `#`
    pub value: String,

    /// The trimmed text after the first `#` in the value part, if present
    /// and non-empty
    pub description: Option<String>,
}

/// The full set of variables from one parse.
///
/// Backed by a `BTreeMap`, so iteration (and therefore emission) is
/// lexicographic by key and reproducible across runs. Inserting a key that
/// already exists replaces the earlier entry, which gives `.env` files
/// their usual last-declaration-wins semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvSet {
    entries: BTreeMap<String, EnvEntry>,
}

impl EnvSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry with the same key.
    ///
    /// Returns the replaced entry, if there was one.
    pub fn insert(&mut self, entry: EnvEntry) -> Option<EnvEntry> {
        self.entries.insert(entry.key.clone(), entry)
    }

    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EnvEntry> {
        self.entries.get(key)
    }

    /// Number of variables in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &EnvEntry> {
        self.entries.values()
    }
}

impl FromIterator<EnvEntry> for EnvSet {
    fn from_iter<I: IntoIterator<Item = EnvEntry>>(iter: I) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

/// Fallback used when a variable has no trailing comment.
///
/// Both behaviors shipped in earlier revisions of the tool; the choice is
/// exposed as configuration rather than hard-coded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionFallback {
    /// Emit an empty description string.
    #[default]
    Empty,

    /// Emit the literal text `No description available`.
    Placeholder,
}

impl DescriptionFallback {
    /// The text emitted for a variable without a description.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Placeholder => "No description available",
        }
    }
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateOutcome {
    /// Number of variables emitted
    pub variables: usize,

    /// Path of the written `.tfvars` file
    pub tfvars_path: PathBuf,

    /// Path of the written `variables.tf` file, if one was requested
    pub variables_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> EnvEntry {
        EnvEntry {
            key: key.to_string(),
            value: value.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_iteration_is_sorted_by_key() {
        let set: EnvSet = [entry("ZED", "3"), entry("ALPHA", "1"), entry("MID", "2")]
            .into_iter()
            .collect();

        let keys: Vec<&str> = set.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["ALPHA", "MID", "ZED"]);
    }

    #[test]
    fn test_insert_replaces_earlier_entry() {
        let mut set = EnvSet::new();
        set.insert(entry("PORT", "8080"));
        let replaced = set.insert(entry("PORT", "9090"));

        assert_eq!(replaced.unwrap().value, "8080");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("PORT").unwrap().value, "9090");
    }

    #[test]
    fn test_description_fallback_text() {
        assert_eq!(DescriptionFallback::Empty.text(), "");
        assert_eq!(
            DescriptionFallback::Placeholder.text(),
            "No description available"
        );
    }
}
