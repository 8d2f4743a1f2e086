use std::sync::LazyLock;

use regex::Regex;

use crate::utils::contains_alphabetic;

/// Share of the text above which a string counts as placeholder-only.
const PLACEHOLDER_SHARE_LIMIT: f64 = 0.7;

/// Mustache, `${}` substitutions, ICU-style `{name}` / `{n, plural, ...}`,
/// positional `{0}` and printf-style conversions.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\{\{[^{}]*\}\}|\$\{[^{}]*\}|\{[A-Za-z_$][\w$.]*(?:\s*,[^{}]*)?\}|\{\d+\}|%(?:\d+\$)?[sdifuxXoj@]",
    )
    .unwrap()
});

pub fn has_placeholders(text: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(text)
}

/// Fraction of characters covered by placeholders.
pub fn placeholder_share(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let covered: usize = PLACEHOLDER_REGEX
        .find_iter(text)
        .map(|m| m.as_str().chars().count())
        .sum();
    covered as f64 / total as f64
}

/// Removes every placeholder.
pub fn strip_placeholders(text: &str) -> String {
    PLACEHOLDER_REGEX.replace_all(text, "").into_owned()
}

/// Replaces placeholders with a neutral letterless token for the structural detectors.
pub fn mask_placeholders(text: &str) -> String {
    PLACEHOLDER_REGEX.replace_all(text, "0").into_owned()
}

pub fn is_placeholder_only(text: &str) -> bool {
    placeholder_share(text) > PLACEHOLDER_SHARE_LIMIT
        || !contains_alphabetic(&strip_placeholders(text))
}
