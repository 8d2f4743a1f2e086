//! Final gate: does the string read like something a person would see?

use super::placeholder::{has_placeholders, strip_placeholders};

/// Lowercase single words that are plainly UI copy.
const UI_ACTION_WORDS: &[&str] = &[
    "add", "apply", "back", "cancel", "close", "confirm", "continue", "copy", "create", "delete",
    "done", "download", "edit", "filter", "finish", "go", "help", "hide", "home", "loading",
    "login", "logout", "menu", "more", "new", "next", "no", "ok", "okay", "open", "pause", "play",
    "prev", "previous", "profile", "redo", "refresh", "remove", "reset", "retry", "save", "search",
    "select", "send", "settings", "share", "show", "signin", "signup", "skip", "sort", "start",
    "stop", "submit", "undo", "update", "upload", "view", "yes",
];

pub fn looks_like_human_text(text: &str) -> bool {
    let stripped = strip_placeholders(text);
    let words: Vec<&str> = stripped
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.chars().any(char::is_alphabetic))
        .collect();

    match words.as_slice() {
        [] => false,
        [word] if !has_placeholders(text) => is_human_word(word),
        _ => {
            let prose = words.iter().filter(|w| is_prose_word(w)).count();
            prose * 2 >= words.len()
        }
    }
}

/// A word with at least two characters and a vowel, or any non-Latin word.
pub fn is_prose_word(word: &str) -> bool {
    if !is_latin(word) {
        return true;
    }
    word.chars().count() >= 2 && word.chars().any(is_vowel)
}

/// Single-word acceptance: capitalized, UI action word, ALL-CAPS, or non-Latin script.
pub fn is_human_word(word: &str) -> bool {
    if !is_latin(word) {
        return true;
    }
    if word.contains('_') {
        return false;
    }
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase()) {
        return true;
    }
    if UI_ACTION_WORDS.contains(&word.to_lowercase().as_str()) {
        return true;
    }
    let capitalized = word.chars().next().is_some_and(char::is_uppercase);
    capitalized && !has_inner_capital(word) && !word.chars().any(|c| c.is_ascii_digit())
}

/// camelCase / PascalCase identifiers have an uppercase letter after a lowercase one.
fn has_inner_capital(word: &str) -> bool {
    word.chars()
        .zip(word.chars().skip(1))
        .any(|(a, b)| a.is_lowercase() && b.is_uppercase())
}

fn is_latin(word: &str) -> bool {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .all(|c| c.is_ascii_alphabetic() || ('\u{00c0}'..='\u{024f}').contains(&c))
}

fn is_vowel(c: char) -> bool {
    matches!(
        c.to_ascii_lowercase(),
        'a' | 'e' | 'i' | 'o' | 'u' | 'y'
    ) || ('\u{00c0}'..='\u{024f}').contains(&c)
}
