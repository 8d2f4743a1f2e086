//! Common utility functions shared across the codebase.

use unicode_normalization::UnicodeNormalization;

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use harvest::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("你好"));
/// assert!(!contains_alphabetic("123-456"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Collapses every run of whitespace into a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// NFC-normalizes the text and collapses whitespace.
///
/// This is the canonical form every candidate string is classified and stored in.
pub fn normalize_text(text: &str) -> String {
    let composed: String = text.nfc().collect();
    collapse_whitespace(&composed)
}

/// Converts a path segment into a PascalCase namespace segment.
///
/// Separators (`-`, `_`, `.`, spaces) start a new word, route decorations such as
/// `[id]` or `(auth)` are dropped, and existing inner capitals are preserved.
///
/// ```
/// use harvest::utils::to_pascal_case;
///
/// assert_eq!(to_pascal_case("user-profile"), "UserProfile");
/// assert_eq!(to_pascal_case("[locale]"), "Locale");
/// assert_eq!(to_pascal_case("billingPage"), "BillingPage");
/// ```
pub fn to_pascal_case(segment: &str) -> String {
    segment
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Returns the 1-based line number of a byte offset.
pub fn line_at(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use crate::utils::*;

    #[test]
    fn test_contains_alphabetic() {
        assert!(contains_alphabetic("Hello"));
        assert!(contains_alphabetic("你好"));
        assert!(contains_alphabetic("Hello123"));
        assert!(contains_alphabetic("  abc  "));

        assert!(!contains_alphabetic("123"));
        assert!(!contains_alphabetic("---"));
        assert!(!contains_alphabetic("$100"));
        assert!(!contains_alphabetic("   "));
        assert!(!contains_alphabetic(""));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Save \n\t changes  "), "Save changes");
        assert_eq!(collapse_whitespace("\n\n"), "");
    }

    #[test]
    fn test_normalize_text_composes_characters() {
        // "e" followed by a combining acute accent
        let decomposed = "Caf\u{0065}\u{0301}  menu";
        assert_eq!(normalize_text(decomposed), "Caf\u{00e9} menu");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("settings"), "Settings");
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("(auth)"), "Auth");
        assert_eq!(to_pascal_case("Billing"), "Billing");
        assert_eq!(to_pascal_case("---"), "");
    }

    #[test]
    fn test_line_at() {
        let text = "a\nb\nc";
        assert_eq!(line_at(text, 0), 1);
        assert_eq!(line_at(text, 2), 2);
        assert_eq!(line_at(text, 4), 3);
        assert_eq!(line_at(text, 100), 3);
    }
}
