use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::{
    classify::RejectReason,
    pipeline::{KeyedCandidate, LocaleSyncReport},
};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyTextParams {
    /// Texts to classify
    pub texts: Vec<String>,
    /// Project root whose ignore patterns apply; built-in rules only when omitted
    pub project_root_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanStringsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only list strings that would get a new key (default: false)
    pub new_only: Option<bool>,
    /// Page size (default 50, max 200)
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncLocalesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Write the locale files (default: dry run)
    pub apply: Option<bool>,
}

// ============================================================
// Results
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: Config,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedItem {
    pub text: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyTextResult {
    pub accepted_count: usize,
    pub rejected_count: usize,
    pub items: Vec<ClassifiedItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub files_processed: usize,
    pub skipped_files: usize,
    pub accepted: usize,
    pub rejected: BTreeMap<RejectReason, usize>,
    pub new_keys: usize,
    pub conflicts: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanStringsResult {
    pub base_locale: String,
    pub stats: ScanStats,
    /// Number of items before pagination
    pub total_count: usize,
    pub items: Vec<KeyedCandidate>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncLocalesResult {
    pub base_locale: String,
    pub applied: bool,
    pub locales: Vec<LocaleSyncReport>,
    /// Files that change (or changed, when applied)
    pub files: Vec<String>,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
