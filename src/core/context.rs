use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;

use crate::{
    config::{Config, load_config},
    core::{
        classify::Classifier,
        file_scanner::{ScanResult, scan_files},
        store::LocaleStore,
    },
};

/// Values given on the command line (or by an MCP client) that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Where to start looking for `.harvestrc.json`, and the directory scanned.
    pub source_root: Option<PathBuf>,
    pub messages_root: Option<PathBuf>,
    pub base_locale: Option<String>,
    pub workers: Option<usize>,
}

/// Everything a harvesting run needs to know before touching any file.
///
/// Configuration priority, highest first: overrides, `.harvestrc.json`, built-in defaults.
pub struct HarvestContext {
    pub config: Config,
    /// Directory relative paths in the config are resolved against.
    pub project_dir: PathBuf,
    /// Directory that includes and namespaces are relative to.
    pub source_dir: PathBuf,
    pub messages_dir: PathBuf,
    pub classifier: Classifier,
    pub verbose: bool,
}

impl HarvestContext {
    pub fn new(overrides: &Overrides, verbose: bool) -> Result<Self> {
        let start_dir = overrides
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let loaded = load_config(&start_dir)?;
        if verbose && !loaded.from_file() {
            eprintln!("Note: No .harvestrc.json found, using default configuration");
        }
        let project_dir = loaded.base_dir(&start_dir);
        let mut config = loaded.config;

        if let Some(base_locale) = &overrides.base_locale {
            config.base_locale = base_locale.clone();
        }
        if let Some(workers) = overrides.workers {
            config.workers = workers;
        }
        if let Some(messages_root) = &overrides.messages_root {
            config.messages_root = messages_root.to_string_lossy().to_string();
        }
        config.validate()?;

        let source_dir = match &overrides.source_root {
            Some(root) => root.clone(),
            None => project_dir.join(&config.source_root),
        };
        let messages_dir = match &overrides.messages_root {
            Some(root) => root.clone(),
            None => resolve(&project_dir, &config.messages_root),
        };

        Self::build(config, project_dir, source_dir, messages_dir, verbose)
    }

    /// A context over an explicit configuration, with every path taken relative to `project_dir`.
    pub fn from_config(config: Config, project_dir: &Path, verbose: bool) -> Result<Self> {
        config.validate()?;
        let source_dir = resolve(project_dir, &config.source_root);
        let messages_dir = resolve(project_dir, &config.messages_root);
        Self::build(
            config,
            project_dir.to_path_buf(),
            source_dir,
            messages_dir,
            verbose,
        )
    }

    fn build(
        config: Config,
        project_dir: PathBuf,
        source_dir: PathBuf,
        messages_dir: PathBuf,
        verbose: bool,
    ) -> Result<Self> {
        let ignore_patterns = config.resolved_ignore_patterns(&project_dir)?;
        Ok(Self {
            config,
            project_dir,
            source_dir,
            messages_dir,
            classifier: Classifier::new(ignore_patterns),
            verbose,
        })
    }

    pub fn locale_store(&self) -> LocaleStore {
        LocaleStore::new(&self.messages_dir, self.config.layout)
    }

    pub fn scan(&self) -> Result<ScanResult> {
        let base_dir = self
            .source_dir
            .to_str()
            .ok_or_else(|| anyhow!("Invalid path: {:?}", self.source_dir))?;
        Ok(scan_files(
            base_dir,
            &self.config.includes,
            &self.config.ignores,
            self.config.ignore_test_files,
            self.verbose,
        ))
    }

    /// Path of a scanned file relative to the source directory, with `/` separators.
    pub fn relative_path(&self, file: &str) -> String {
        let path = Path::new(file);
        path.strip_prefix(&self.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// Locales other than the base one that should mirror its structure.
    pub fn target_locales(&self) -> Result<Vec<String>> {
        let mut locales = if self.config.locales.is_empty() {
            self.locale_store().discover_locales().with_context(|| {
                format!(
                    "Failed to discover locales in {}",
                    self.messages_dir.display()
                )
            })?
        } else {
            self.config.locales.clone()
        };
        locales.retain(|l| l != &self.config.base_locale);
        locales.sort();
        locales.dedup();
        Ok(locales)
    }

    /// Prints the aggregate warning for skipped files; details only go out with `-v`.
    pub fn report_skipped(&self, count: usize) {
        if count > 0 {
            eprintln!(
                "{} {} file(s) skipped{}",
                "warning:".bold().yellow(),
                count,
                if self.verbose {
                    String::new()
                } else {
                    format!(" (use {} for details)", "-v".cyan())
                }
            );
        }
    }

    pub fn warn_verbose(&self, message: impl std::fmt::Display) {
        if self.verbose {
            eprintln!("{} {}", "warning:".bold().yellow(), message);
        }
    }
}

fn resolve(base: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p.strip_prefix(".").unwrap_or(p))
    }
}
