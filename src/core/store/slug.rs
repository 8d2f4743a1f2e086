//! Human-readable key segments derived from UI text.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Slug used when the text has no ASCII letters or digits left.
pub const FALLBACK_SLUG: &str = "text";

/// Derives the base slug for a text, before collision suffixes.
///
/// ```
/// use harvest::core::store::derive_base_slug;
///
/// assert_eq!(derive_base_slug("Save changes!", 4, 40), "save_changes");
/// assert_eq!(derive_base_slug("Crème brûlée", 4, 40), "creme_brulee");
/// assert_eq!(derive_base_slug("保存", 4, 40), "text");
/// ```
pub fn derive_base_slug(text: &str, max_words: usize, max_length: usize) -> String {
    let folded: String = text
        .trim()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    let joined = folded
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .take(max_words)
        .collect::<Vec<_>>()
        .join("_");

    // ASCII only at this point, so byte truncation is a char boundary.
    let truncated = &joined[..joined.len().min(max_length)];
    let slug = truncated.trim_matches('_');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// The `n`th slug candidate: `slug`, `slug_2`, `slug_3`, ...
pub fn numbered_slug(base: &str, n: usize) -> String {
    if n <= 1 {
        base.to_string()
    } else {
        format!("{base}_{n}")
    }
}
