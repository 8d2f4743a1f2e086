//! Layered content classifier.
//!
//! Decides whether an extracted string is prose worth translating or incidental
//! technical content. Each layer is a pure predicate in its own module; the
//! [`classify`] pipeline runs them in a fixed order and the first rejection wins:
//!
//! 1. basic requirements (`basic`)
//! 2. balanced delimiters (`basic`)
//! 3. placeholder-only strings (`placeholder`)
//! 4. common UI allowlist, which skips step 5 (`allowlist`)
//! 5. structural detectors (`styling`, `code`, `markup`, `technical`)
//! 6. caller-supplied ignore set (`ignore`)
//! 7. human-text gate (`human`)

pub mod allowlist;
pub mod basic;
pub mod code;
pub mod human;
pub mod ignore;
pub mod markup;
pub mod placeholder;
pub mod styling;
pub mod technical;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use ignore::IgnorePatternSet;

use crate::utils::normalize_text;

/// Why a string was not accepted for translation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    TooShort,
    NoLetters,
    NonTranslatableWord,
    UnbalancedDelimiters,
    PlaceholderOnly,
    CssContent,
    SpreadsheetReference,
    CodeContent,
    EventHandler,
    HtmlContent,
    TechnicalContent,
    IgnoredPattern,
    NotHumanText,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::TooShort => "too_short",
            RejectReason::NoLetters => "no_letters",
            RejectReason::NonTranslatableWord => "non_translatable_word",
            RejectReason::UnbalancedDelimiters => "unbalanced_delimiters",
            RejectReason::PlaceholderOnly => "placeholder_only",
            RejectReason::CssContent => "css_content",
            RejectReason::SpreadsheetReference => "spreadsheet_reference",
            RejectReason::CodeContent => "code_content",
            RejectReason::EventHandler => "event_handler",
            RejectReason::HtmlContent => "html_content",
            RejectReason::TechnicalContent => "technical_content",
            RejectReason::IgnoredPattern => "ignored_pattern",
            RejectReason::NotHumanText => "not_human_text",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
}

impl ClassificationResult {
    pub fn accept() -> Self {
        Self {
            accepted: true,
            reason: None,
        }
    }

    pub fn reject(reason: RejectReason) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
        }
    }
}

type Detector = fn(&str) -> bool;

/// Structural detectors in pipeline order.
const STRUCTURAL_DETECTORS: &[(Detector, RejectReason)] = &[
    (styling::is_css_content, RejectReason::CssContent),
    (
        styling::is_spreadsheet_reference,
        RejectReason::SpreadsheetReference,
    ),
    (code::is_code_content, RejectReason::CodeContent),
    (code::is_event_handler, RejectReason::EventHandler),
    (markup::is_markup_content, RejectReason::HtmlContent),
    (technical::is_technical_content, RejectReason::TechnicalContent),
];

/// Classifies one string against the given ignore set.
pub fn classify(text: &str, ignore: &IgnorePatternSet) -> ClassificationResult {
    let text = normalize_text(text);

    if let Some(reason) = basic::check_basic_requirements(&text) {
        return ClassificationResult::reject(reason);
    }
    if !basic::has_balanced_delimiters(&text) {
        return ClassificationResult::reject(RejectReason::UnbalancedDelimiters);
    }
    if placeholder::is_placeholder_only(&text) {
        return ClassificationResult::reject(RejectReason::PlaceholderOnly);
    }

    let allowlisted = allowlist::is_common_ui_string(&text)
        && !allowlist::has_unambiguous_code_shape(&text);

    if !allowlisted {
        let masked = placeholder::mask_placeholders(&text);
        for (detector, reason) in STRUCTURAL_DETECTORS {
            if detector(&masked) {
                return ClassificationResult::reject(*reason);
            }
        }
    }

    if ignore.matches(&text) {
        return ClassificationResult::reject(RejectReason::IgnoredPattern);
    }

    if !allowlisted && !human::looks_like_human_text(&text) {
        return ClassificationResult::reject(RejectReason::NotHumanText);
    }

    ClassificationResult::accept()
}

/// A classifier bound to one ignore set.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    ignore: IgnorePatternSet,
}

impl Classifier {
    pub fn new(ignore: IgnorePatternSet) -> Self {
        Self { ignore }
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        classify(text, &self.ignore)
    }

    pub fn ignore_patterns(&self) -> &IgnorePatternSet {
        &self.ignore
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn reason(text: &str) -> Option<RejectReason> {
        classify(text, &IgnorePatternSet::default()).reason
    }

    #[test]
    fn test_boundary_rejections() {
        assert_eq!(
            reason("flex items-center justify-between"),
            Some(RejectReason::CssContent)
        );
        assert_eq!(reason("console.log(x)"), Some(RejectReason::CodeContent));
        assert_eq!(
            reason("https://example.com/path"),
            Some(RejectReason::TechnicalContent)
        );
        assert_eq!(reason("#3B82F6"), Some(RejectReason::TechnicalContent));
        assert_eq!(reason("{{ count }}"), Some(RejectReason::PlaceholderOnly));
    }

    #[test]
    fn test_boundary_acceptances() {
        assert_eq!(reason("Are you sure you want to delete this file?"), None);
        assert_eq!(reason("Save changes"), None);
    }

    #[test]
    fn test_basic_layers_come_first() {
        assert_eq!(reason("a"), Some(RejectReason::TooShort));
        assert_eq!(reason("  "), Some(RejectReason::TooShort));
        assert_eq!(reason("123-456"), Some(RejectReason::NoLetters));
        assert_eq!(reason("null"), Some(RejectReason::NonTranslatableWord));
        assert_eq!(
            reason("Open (settings"),
            Some(RejectReason::UnbalancedDelimiters)
        );
    }

    #[test]
    fn test_structural_reasons() {
        assert_eq!(reason("A1:B12"), Some(RejectReason::SpreadsheetReference));
        assert_eq!(reason("handleSubmit"), Some(RejectReason::EventHandler));
        assert_eq!(
            reason("<strong>Bold</strong> move"),
            Some(RejectReason::HtmlContent)
        );
        assert_eq!(
            reason("const total = items.length"),
            Some(RejectReason::CodeContent)
        );
        assert_eq!(reason("API_BASE_URL"), Some(RejectReason::TechnicalContent));
    }

    #[test]
    fn test_placeholders_do_not_trip_detectors() {
        assert_eq!(reason("Hello {name}, welcome back"), None);
        assert_eq!(reason("{count} items"), None);
        assert_eq!(reason("Found {count} items"), None);
    }

    #[test]
    fn test_human_gate() {
        assert_eq!(reason("userName"), Some(RejectReason::NotHumanText));
        assert_eq!(reason("Dashboard"), None);
        assert_eq!(reason("FAQ"), None);
        assert_eq!(reason("cancel"), None);
        assert_eq!(reason("保存する"), None);
    }

    #[test]
    fn test_ignore_set_overrides_allowlist() {
        let ignore = IgnorePatternSet {
            exact: vec!["Save changes".to_string()],
            ..Default::default()
        };
        let result = classify("Save changes", &ignore);
        assert_eq!(result, ClassificationResult::reject(RejectReason::IgnoredPattern));
    }

    #[test]
    fn test_deterministic() {
        let ignore = IgnorePatternSet::default();
        for text in ["Save changes", "console.log(x)", "Welcome back"] {
            assert_eq!(classify(text, &ignore), classify(text, &ignore));
        }
    }

    #[test]
    fn test_reason_wire_format() {
        let json = serde_json::to_string(&ClassificationResult::reject(
            RejectReason::NonTranslatableWord,
        ))
        .unwrap();
        assert_eq!(json, r#"{"accepted":false,"reason":"non_translatable_word"}"#);
        let json = serde_json::to_string(&ClassificationResult::accept()).unwrap();
        assert_eq!(json, r#"{"accepted":true}"#);
    }
}
