use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{classify::IgnorePatternSet, store::LocaleLayout, store::SlugOptions};

pub const CONFIG_FILE_NAME: &str = ".harvestrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
    "**/__mocks__/**",
];

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_base_locale", alias = "primaryLocale")]
    pub base_locale: String,
    /// Locales to keep in sync; empty means every locale found under `messagesRoot`.
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default)]
    pub layout: LocaleLayout,
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    #[serde(default = "default_checked_attributes")]
    pub checked_attributes: Vec<String>,
    #[serde(default)]
    pub ignore_patterns: IgnorePatternSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_patterns_file: Option<String>,
    #[serde(default = "default_slug_words")]
    pub slug_words: usize,
    #[serde(default = "default_slug_max_length")]
    pub slug_max_length: usize,
}

fn default_includes() -> Vec<String> {
    ["src", "app", "pages", "components"]
        .map(String::from)
        .to_vec()
}

fn default_checked_attributes() -> Vec<String> {
    [
        "placeholder",
        "title",
        "alt",
        "aria-label",
        "aria-description",
        "aria-placeholder",
        "label",
    ]
    .map(String::from)
    .to_vec()
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_base_locale() -> String {
    "en".to_string()
}

fn default_workers() -> usize {
    4
}

fn default_max_file_size() -> u64 {
    1024 * 1024
}

fn default_slug_words() -> usize {
    SlugOptions::default().words
}

fn default_slug_max_length() -> usize {
    SlugOptions::default().max_length
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
            source_root: default_source_root(),
            messages_root: default_messages_root(),
            base_locale: default_base_locale(),
            locales: Vec::new(),
            layout: LocaleLayout::default(),
            workers: default_workers(),
            max_file_size: default_max_file_size(),
            checked_attributes: default_checked_attributes(),
            ignore_patterns: IgnorePatternSet::default(),
            ignore_patterns_file: None,
            slug_words: default_slug_words(),
            slug_max_length: default_slug_max_length(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, a zero worker count or a zero slug limit.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Includes without wildcards are literal directories.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.workers == 0 {
            bail!("'workers' must be at least 1");
        }
        if self.slug_words == 0 || self.slug_max_length == 0 {
            bail!("'slugWords' and 'slugMaxLength' must be at least 1");
        }
        if self.base_locale.trim().is_empty() {
            bail!("'baseLocale' must not be empty");
        }

        Ok(())
    }

    pub fn slug_options(&self) -> SlugOptions {
        SlugOptions {
            words: self.slug_words,
            max_length: self.slug_max_length,
        }
    }

    /// Inline ignore patterns merged with the ones from `ignorePatternsFile`.
    ///
    /// A relative file path is resolved against `base_dir`.
    pub fn resolved_ignore_patterns(&self, base_dir: &Path) -> Result<IgnorePatternSet> {
        let mut patterns = self.ignore_patterns.clone();
        if let Some(file) = &self.ignore_patterns_file {
            patterns.merge(IgnorePatternSet::load(&base_dir.join(file))?);
        }
        Ok(patterns)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Directory that relative paths in the config are resolved against.
    pub fn base_dir(&self, fallback: &Path) -> PathBuf {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| fallback.to_path_buf(), Path::to_path_buf)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
