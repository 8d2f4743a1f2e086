//! Candidate extraction.
//!
//! Each supported dialect has one extractor. The registry holds them in a fixed
//! priority order and the first extractor that can handle a file wins:
//!
//! 1. [`VueExtractor`] for single-file components
//! 2. [`SvelteExtractor`] for Svelte components
//! 3. [`MarkupExtractor`] for HTML, Angular and Handlebars templates
//! 4. [`ScriptExtractor`] for JavaScript and TypeScript, with or without JSX

mod calls;
mod kind;
mod line_scan;
mod markup;
mod script;
mod svelte;
mod vue;

use std::path::Path;

use enum_dispatch::enum_dispatch;

pub use calls::{is_diagnostic_call, is_non_text_call, is_translation_call};
pub use kind::{kind_for_attribute, kind_for_callee, kind_for_identifier, kind_for_tag};
pub use markup::MarkupExtractor;
pub use script::ScriptExtractor;
pub use svelte::SvelteExtractor;
pub use vue::VueExtractor;

use crate::core::{
    classify::Classifier,
    data::{ExtractedCandidate, FileExtraction, Kind, Rejection, SourceLocation},
};
use crate::utils::{contains_alphabetic, normalize_text};

/// File dialect as far as it can be told from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectHint {
    extension: String,
}

impl DialectHint {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self { extension }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn is_one_of(&self, extensions: &[&str]) -> bool {
        extensions.contains(&self.extension.as_str())
    }
}

/// Settings shared by every extractor for one file.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions<'a> {
    /// Path recorded in candidate locations.
    pub file_path: &'a str,
    pub classifier: &'a Classifier,
    /// Attribute names whose values are candidates.
    pub checked_attributes: &'a [String],
}

impl ExtractOptions<'_> {
    /// True if the attribute is checked and not explicitly ignored.
    pub fn checks_attribute(&self, name: &str) -> bool {
        self.checked_attributes
            .iter()
            .any(|a| a.eq_ignore_ascii_case(name))
            && !self.classifier.ignore_patterns().ignores_attribute(name)
    }
}

#[enum_dispatch]
pub trait Extractor {
    fn name(&self) -> &'static str;

    fn can_handle(&self, hint: &DialectHint) -> bool;

    fn extract(&self, source: &str, options: &ExtractOptions) -> FileExtraction;
}

#[enum_dispatch(Extractor)]
#[derive(Debug, Clone, Copy)]
pub enum SourceExtractor {
    VueExtractor,
    SvelteExtractor,
    MarkupExtractor,
    ScriptExtractor,
}

/// Extractors in priority order.
const EXTRACTORS: [SourceExtractor; 4] = [
    SourceExtractor::VueExtractor(VueExtractor),
    SourceExtractor::SvelteExtractor(SvelteExtractor),
    SourceExtractor::MarkupExtractor(MarkupExtractor),
    SourceExtractor::ScriptExtractor(ScriptExtractor),
];

/// Every file extension some extractor handles.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "vue",
    "svelte",
    "html",
    "htm",
    "hbs",
    "handlebars",
    "js",
    "jsx",
    "ts",
    "tsx",
    "mjs",
    "cjs",
    "mts",
    "cts",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractorRegistry;

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn extractors(&self) -> &'static [SourceExtractor] {
        &EXTRACTORS
    }

    /// The first extractor that handles the hint.
    pub fn find(&self, hint: &DialectHint) -> Option<&'static SourceExtractor> {
        EXTRACTORS.iter().find(|e| e.can_handle(hint))
    }

    /// Extracts one file, or `None` if no extractor handles its dialect.
    pub fn extract_file(
        &self,
        path: &Path,
        source: &str,
        options: &ExtractOptions,
    ) -> Option<FileExtraction> {
        let extractor = self.find(&DialectHint::from_path(path))?;
        Some(extractor.extract(source, options))
    }
}

/// Classifies offered strings and sorts them into candidates and rejections.
pub(crate) struct Collector<'a> {
    options: &'a ExtractOptions<'a>,
    line_offset: usize,
    out: FileExtraction,
}

impl<'a> Collector<'a> {
    pub(crate) fn new(options: &'a ExtractOptions<'a>) -> Self {
        Self {
            options,
            line_offset: 0,
            out: FileExtraction::default(),
        }
    }

    pub(crate) fn options(&self) -> &ExtractOptions<'a> {
        self.options
    }

    /// Runs `f` with line numbers shifted by `lines`, for embedded blocks.
    pub(crate) fn shifted(&mut self, lines: usize, f: impl FnOnce(&mut Self)) {
        self.line_offset += lines;
        f(self);
        self.line_offset -= lines;
    }

    /// Classifies a string found at `line` (1-based, relative to the current block).
    ///
    /// Strings without a single letter are dropped silently.
    pub(crate) fn offer(
        &mut self,
        text: &str,
        kind: Kind,
        parent_context: Option<&str>,
        attribute_name: Option<&str>,
        line: usize,
    ) {
        let text = normalize_text(text);
        if !contains_alphabetic(&text) {
            return;
        }

        let line = line + self.line_offset;
        let result = self.options.classifier.classify(&text);
        match result.reason {
            None => self.out.candidates.push(ExtractedCandidate {
                text,
                kind,
                parent_context: parent_context.map(str::to_string),
                attribute_name: attribute_name.map(str::to_string),
                source_location: Some(SourceLocation {
                    file_path: self.options.file_path.to_string(),
                    line,
                }),
            }),
            Some(reason) => self.out.rejections.push(Rejection { text, reason, line }),
        }
    }

    pub(crate) fn finish(self) -> FileExtraction {
        self.out
    }
}
