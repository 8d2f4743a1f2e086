//! Report formatting and printing utilities.
//!
//! Results go to stdout in cargo style; warnings have already gone to stderr.
//! Separate from core logic so harvest can be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{ClassifiedText, CommandResult, CommandSummary, InitSummary};
use crate::core::{
    pipeline::{ExtractReport, KeyedCandidate, LocaleSyncReport, SyncReport},
    store::PendingWrite,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Extract(report) => print_extract(report, verbose, writer),
        CommandSummary::Sync(report) => print_sync(report, writer),
        CommandSummary::Classify(items) => print_classify(items, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_extract<W: Write>(report: &ExtractReport, verbose: bool, writer: &mut W) {
    let listed: Vec<&KeyedCandidate> = report
        .candidates
        .iter()
        .filter(|c| verbose || c.is_new)
        .collect();

    if !listed.is_empty() {
        let verb = if report.applied {
            "Added".green().bold()
        } else {
            "Would add".yellow().bold()
        };
        let _ = writeln!(
            writer,
            "{} {} key(s) to {}:",
            verb,
            report.candidates.iter().filter(|c| c.is_new).count(),
            report.base_locale
        );
        print_candidates(&listed, writer);
    }

    print_locale_additions(&report.locales, report.applied, writer);
    print_writes(&report.writes, report.applied, writer);

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Processed {} file(s): {} accepted, {} rejected, {} skipped",
            report.files_processed,
            report.accepted,
            report.rejected_total(),
            report.skipped_files
        )
        .green()
    );

    if !report.rejected.is_empty() {
        let reasons: Vec<String> = report
            .rejected
            .iter()
            .map(|(reason, count)| format!("{} {}", reason, count))
            .collect();
        let _ = writeln!(writer, "  rejected: {}", reasons.join(", "));
    }

    if report.conflicts > 0 {
        let _ = writeln!(
            writer,
            "{} {} candidate(s) skipped because their key path is taken{}",
            "warning:".bold().yellow(),
            report.conflicts,
            if verbose { "" } else { " (use -v for details)" }
        );
    }
}

fn print_candidates<W: Write>(candidates: &[&KeyedCandidate], writer: &mut W) {
    let key_width = candidates
        .iter()
        .map(|c| c.key.width())
        .max()
        .unwrap_or(0);
    let quoted: Vec<String> = candidates
        .iter()
        .map(|c| format!("\"{}\"", c.candidate.text))
        .collect();
    let text_width = quoted.iter().map(|q| q.width()).max().unwrap_or(0);

    for (candidate, text) in candidates.iter().zip(&quoted) {
        let marker = if candidate.is_new { "+" } else { "=" };
        let location = candidate
            .candidate
            .source_location
            .as_ref()
            .map(|l| format!("{}:{}", l.file_path, l.line))
            .unwrap_or_default();
        let line = format!(
            "  {} {}  {}  {}",
            marker,
            pad(&candidate.key, key_width),
            pad(text, text_width),
            location.dimmed()
        );
        let _ = writeln!(writer, "{}", line.trim_end());
    }
}

fn print_locale_additions<W: Write>(locales: &[LocaleSyncReport], applied: bool, writer: &mut W) {
    for locale in locales.iter().filter(|l| l.added > 0) {
        let verb = if applied {
            "Added".green().bold()
        } else {
            "Would add".yellow().bold()
        };
        let _ = writeln!(
            writer,
            "{} {} key(s) to {}",
            verb, locale.added, locale.locale
        );
    }
}

fn print_writes<W: Write>(writes: &[PendingWrite], applied: bool, writer: &mut W) {
    if writes.is_empty() {
        return;
    }

    let verb = if applied {
        "Updated".green().bold()
    } else {
        "Would update".yellow().bold()
    };
    let _ = writeln!(writer, "{} {} file(s):", verb, writes.len());
    for write in writes {
        let _ = writeln!(writer, "  {}", display_path(&write.path));
    }
    if !applied {
        let _ = writeln!(writer, "Run with {} to write these changes.", "--apply".cyan());
    }
}

fn print_sync<W: Write>(report: &SyncReport, writer: &mut W) {
    print_locale_additions(&report.locales, report.applied, writer);
    print_writes(&report.writes, report.applied, writer);

    let synced = report.locales.iter().filter(|l| l.error.is_none()).count();
    let failed = report.locales.len() - synced;
    if failed > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} locale(s) could not be read and were left untouched", failed).red()
        );
    }
    let message = if report.writes.is_empty() || report.applied {
        format!(
            "{} locale(s) in sync with {}",
            synced, report.base_locale
        )
    } else {
        format!(
            "{} locale(s) behind {}",
            report.locales.iter().filter(|l| l.added > 0).count(),
            report.base_locale
        )
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

fn print_classify<W: Write>(items: &[ClassifiedText], writer: &mut W) {
    let quoted: Vec<String> = items.iter().map(|i| format!("\"{}\"", i.text)).collect();
    let width = quoted.iter().map(|q| q.width()).max().unwrap_or(0);

    for (item, text) in items.iter().zip(&quoted) {
        let line = match item.result.reason {
            None => format!("{} {}  {}", SUCCESS_MARK.green(), pad(text, width), "accepted".green()),
            Some(reason) => format!(
                "{} {}  {} ({})",
                FAILURE_MARK.red(),
                pad(text, width),
                "rejected".red(),
                reason
            ),
        };
        let _ = writeln!(writer, "{}", line);
    }

    let rejected = items.iter().filter(|i| !i.result.accepted).count();
    let _ = writeln!(
        writer,
        "{} text(s) classified, {} rejected",
        items.len(),
        rejected
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.config_path).green()
    );
}

/// Left-aligns `text` to a display width, counting wide characters as two columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn display_path(path: &Path) -> String {
    let shown = path.strip_prefix(".").unwrap_or(path);
    shown.to_string_lossy().replace('\\', "/")
}
