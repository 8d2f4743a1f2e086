use std::{fs, path::Path};

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Caller-supplied texts and attributes to leave alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct IgnorePatternSet {
    /// Texts ignored when they match exactly.
    pub exact: Vec<String>,
    /// Texts ignored when they match ignoring case.
    pub exact_insensitive: Vec<String>,
    /// Substrings that mark a text as ignored.
    pub contains: Vec<String>,
    /// Attribute names never extracted, even when checked.
    pub ignore_attributes: Vec<String>,
}

impl IgnorePatternSet {
    /// Loads a standalone ignore-pattern file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read ignore patterns file: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse ignore patterns file: {:?}", path))
    }

    /// Appends every pattern of `other`.
    pub fn merge(&mut self, other: IgnorePatternSet) {
        self.exact.extend(other.exact);
        self.exact_insensitive.extend(other.exact_insensitive);
        self.contains.extend(other.contains);
        self.ignore_attributes.extend(other.ignore_attributes);
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
            && self.exact_insensitive.is_empty()
            && self.contains.is_empty()
            && self.ignore_attributes.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        if self.exact.iter().any(|p| p == text) {
            return true;
        }
        if !self.exact_insensitive.is_empty() {
            let lower = text.to_lowercase();
            if self
                .exact_insensitive
                .iter()
                .any(|p| p.to_lowercase() == lower)
            {
                return true;
            }
        }
        self.contains
            .iter()
            .any(|p| !p.is_empty() && text.contains(p.as_str()))
    }

    pub fn ignores_attribute(&self, name: &str) -> bool {
        self.ignore_attributes
            .iter()
            .any(|a| a.eq_ignore_ascii_case(name))
    }
}
