use std::sync::LazyLock;

use regex::Regex;

use super::RejectReason;
use crate::utils::contains_alphabetic;

/// Lowercase single words that are never worth translating.
const NEVER_TRANSLATE: &[&str] = &[
    "true",
    "false",
    "null",
    "nil",
    "none",
    "undefined",
    "nan",
    "void",
    "px",
    "em",
    "rem",
    "vh",
    "vw",
    "pt",
    "xs",
    "sm",
    "md",
    "lg",
    "xl",
    "xxl",
    "2xl",
    "auto",
    "inherit",
    "initial",
    "unset",
    "div",
    "span",
    "id",
    "src",
    "href",
    "ltr",
    "rtl",
    "utf-8",
    "utf8",
    "json",
    "get",
    "post",
    "put",
    "patch",
    "localhost",
];

/// Leading enumerators such as `1)` or `a)` that legitimately open no parenthesis.
static ENUMERATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d{1,3}|[A-Za-z])\)\s").unwrap());

/// Rejects strings that are too short, letterless, or a never-translate word.
pub fn check_basic_requirements(text: &str) -> Option<RejectReason> {
    if text.chars().count() < 2 {
        return Some(RejectReason::TooShort);
    }
    if !contains_alphabetic(text) {
        return Some(RejectReason::NoLetters);
    }
    if is_non_translatable_word(text) {
        return Some(RejectReason::NonTranslatableWord);
    }
    None
}

/// Matches exact lowercase vocabulary only, so `None` as a menu option survives.
pub fn is_non_translatable_word(text: &str) -> bool {
    !text.contains(char::is_whitespace) && NEVER_TRANSLATE.contains(&text)
}

/// Checks that brackets and quote pairs balance.
pub fn has_balanced_delimiters(text: &str) -> bool {
    let body = match ENUMERATOR_REGEX.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };

    let mut stack = Vec::new();
    for ch in body.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' | ']' | '}' => {
                let expected = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }
    if !stack.is_empty() {
        return false;
    }

    let count = |c: char| body.chars().filter(|&x| x == c).count();
    if count('"') % 2 != 0 || count('`') % 2 != 0 {
        return false;
    }
    if count('\u{201c}') != count('\u{201d}') || count('\u{ab}') != count('\u{bb}') {
        return false;
    }
    // Apostrophes are everywhere in prose; only a leading quote needs a partner.
    if let Some(rest) = body.strip_prefix('\'') {
        return rest.contains('\'');
    }
    true
}
