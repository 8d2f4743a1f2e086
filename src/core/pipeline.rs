//! The harvesting run: scan, extract in parallel, register keys, sync locales.
//!
//! Nothing is written until every step has succeeded. Without `apply` a run only
//! reports the files it would change.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context as _, Result, bail};
use colored::Colorize;
use rayon::{ThreadPoolBuilder, prelude::*};
use schemars::JsonSchema;
use serde::Serialize;

use crate::core::{
    HarvestContext,
    classify::RejectReason,
    data::{ExtractedCandidate, FileExtraction},
    extract::{ExtractOptions, ExtractorRegistry},
    store::{
        AddedKey, KeyStore, LocaleStore, LocaleTree, NamespaceResolver, PendingWrite, StoreError,
        commit, fill,
    },
};

/// An accepted candidate together with the key it was stored under.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyedCandidate {
    pub key: String,
    /// False when the text was already stored under this key before the run.
    pub is_new: bool,
    #[serde(flatten)]
    pub candidate: ExtractedCandidate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleSyncReport {
    pub locale: String,
    /// Leaves copied from the base locale.
    pub added: usize,
    /// Set when the locale could not be read; it is left untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct ExtractReport {
    pub base_locale: String,
    pub files_processed: usize,
    pub skipped_files: usize,
    pub accepted: usize,
    pub rejected: BTreeMap<RejectReason, usize>,
    /// Candidates dropped because their key path is blocked.
    pub conflicts: usize,
    pub candidates: Vec<KeyedCandidate>,
    pub new_keys: Vec<AddedKey>,
    pub locales: Vec<LocaleSyncReport>,
    /// Files whose content changes, whether or not they were written.
    pub writes: Vec<PendingWrite>,
    pub applied: bool,
}

impl ExtractReport {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}

#[derive(Debug, Default)]
pub struct SyncReport {
    pub base_locale: String,
    pub locales: Vec<LocaleSyncReport>,
    pub writes: Vec<PendingWrite>,
    pub applied: bool,
}

enum FileOutcome {
    Extracted {
        relative: String,
        extraction: FileExtraction,
    },
    Skipped(anyhow::Error),
}

/// Runs the whole pipeline and, with `apply`, commits the locale files.
pub fn extract(ctx: &HarvestContext, apply: bool) -> Result<ExtractReport> {
    let store = ctx.locale_store();
    let base_tree = store.load(&ctx.config.base_locale)?;

    let scan = ctx.scan()?;
    let files: Vec<String> = scan.files.into_iter().collect();
    let outcomes = extract_files(ctx, &files)?;

    let mut report = ExtractReport {
        base_locale: ctx.config.base_locale.clone(),
        skipped_files: scan.skipped_count,
        ..Default::default()
    };
    let mut keys = KeyStore::primed(base_tree.clone(), ctx.config.slug_options());
    let mut resolver = NamespaceResolver::new(base_tree);
    for outcome in &outcomes {
        if let FileOutcome::Extracted {
            relative,
            extraction,
        } = outcome
        {
            resolver.observe(relative, &extraction.candidates);
        }
    }

    // Sequential and in file order, so key numbering is stable between runs.
    for outcome in outcomes {
        let (relative, extraction) = match outcome {
            FileOutcome::Extracted {
                relative,
                extraction,
            } => (relative, extraction),
            FileOutcome::Skipped(err) => {
                report.skipped_files += 1;
                ctx.warn_verbose(format!("{:#}", err));
                continue;
            }
        };

        report.files_processed += 1;
        for rejection in &extraction.rejections {
            *report.rejected.entry(rejection.reason).or_default() += 1;
        }
        if extraction.candidates.is_empty() {
            continue;
        }

        let namespace = resolver.resolve(&relative);
        for candidate in extraction.candidates {
            report.accepted += 1;
            let known = keys.added().len();
            match keys.register(&namespace, candidate.kind, &candidate.text) {
                Ok(key) => report.candidates.push(KeyedCandidate {
                    key: key.full_key(),
                    is_new: keys.added().len() > known,
                    candidate,
                }),
                Err(err @ StoreError::PathConflict { .. }) => {
                    report.conflicts += 1;
                    ctx.warn_verbose(format!("{}: {}", relative, err));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
    ctx.report_skipped(report.skipped_files);

    report.new_keys = keys.added().to_vec();
    let base_tree = keys.into_tree();

    report.writes = pending_changes(&store, &ctx.config.base_locale, &base_tree);
    let (locales, writes) = sync_targets(ctx, &store, &base_tree)?;
    report.locales = locales;
    report.writes.extend(writes);

    if apply {
        commit(&report.writes)?;
        report.applied = true;
    }
    Ok(report)
}

/// Propagates the base locale's structure to every other locale.
pub fn sync(ctx: &HarvestContext, apply: bool) -> Result<SyncReport> {
    let store = ctx.locale_store();
    let base_tree = store.load(&ctx.config.base_locale)?;
    if base_tree.is_empty() && !store.locale_path(&ctx.config.base_locale).exists() {
        bail!(
            "Base locale '{}' not found in {}",
            ctx.config.base_locale,
            ctx.messages_dir.display()
        );
    }

    let (locales, writes) = sync_targets(ctx, &store, &base_tree)?;
    if apply {
        commit(&writes)?;
    }
    Ok(SyncReport {
        base_locale: ctx.config.base_locale.clone(),
        locales,
        writes,
        applied: apply,
    })
}

fn extract_files(ctx: &HarvestContext, files: &[String]) -> Result<Vec<FileOutcome>> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(ctx.config.workers)
        .build()
        .context("Failed to start worker pool")?;

    Ok(pool.install(|| files.par_iter().map(|file| extract_file(ctx, file)).collect()))
}

fn extract_file(ctx: &HarvestContext, file: &str) -> FileOutcome {
    let source = match read_source(file, ctx.config.max_file_size) {
        Ok(source) => source,
        Err(err) => return FileOutcome::Skipped(err),
    };

    let relative = ctx.relative_path(file);
    let options = ExtractOptions {
        file_path: &relative,
        classifier: &ctx.classifier,
        checked_attributes: &ctx.config.checked_attributes,
    };
    let extraction = ExtractorRegistry
        .extract_file(Path::new(file), &source, &options)
        .unwrap_or_default();

    FileOutcome::Extracted {
        relative,
        extraction,
    }
}

fn read_source(file: &str, max_file_size: u64) -> Result<String> {
    let size = fs::metadata(file)
        .with_context(|| format!("Failed to read file: {}", file))?
        .len();
    if size > max_file_size {
        bail!(
            "Skipping {}: {} bytes exceeds maxFileSize ({} bytes)",
            file,
            size,
            max_file_size
        );
    }
    fs::read_to_string(file).with_context(|| format!("Failed to read file: {}", file))
}

fn sync_targets(
    ctx: &HarvestContext,
    store: &LocaleStore,
    base: &LocaleTree,
) -> Result<(Vec<LocaleSyncReport>, Vec<PendingWrite>)> {
    let mut reports = Vec::new();
    let mut writes = Vec::new();

    for locale in ctx.target_locales()? {
        match store.load(&locale) {
            Ok(target) => {
                let outcome = fill(base, &target);
                writes.extend(pending_changes(store, &locale, &outcome.tree));
                reports.push(LocaleSyncReport {
                    locale,
                    added: outcome.added,
                    error: None,
                });
            }
            Err(err) => {
                eprintln!(
                    "{} {}; locale '{}' left untouched",
                    "warning:".bold().yellow(),
                    err,
                    locale
                );
                reports.push(LocaleSyncReport {
                    locale,
                    added: 0,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    Ok((reports, writes))
}

/// Files that need rewriting for `tree` to be persisted as `locale`.
fn pending_changes(store: &LocaleStore, locale: &str, tree: &LocaleTree) -> Vec<PendingWrite> {
    if tree.is_empty() {
        return Vec::new();
    }
    store
        .render(locale, tree)
        .into_iter()
        .filter(PendingWrite::is_change)
        .collect()
}
