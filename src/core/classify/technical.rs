//! URLs, paths, identifiers and other machine-oriented strings.

use std::sync::LazyLock;

use regex::Regex;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-z][a-z0-9+.-]*://|www\.|mailto:|tel:|data:)\S+$").unwrap()
});

static EMBEDDED_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?|ftp|wss?)://\S+|\bwww\.\S+\.\S+").unwrap());

static TECHNICAL_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // email address
        r"^[\w.+-]+@[\w-]+(?:\.[\w-]+)+$",
        // absolute and relative paths
        r"^(?:\.{1,2}/|~/|/|[A-Za-z]:\\)\S*$",
        r"^[\w.@-]+(?:/[\w.@-]+)+/?$",
        // file names
        r"(?i)^[\w.-]+\.(?:png|jpe?g|gif|svg|webp|ico|css|scss|less|js|mjs|cjs|ts|tsx|jsx|vue|svelte|html?|json|ya?ml|toml|md|txt|pdf|csv|xml|zip|woff2?|ttf|mp[34]|wav)$",
        // environment variables and constants
        r"^[A-Z][A-Z0-9]*(?:_[A-Z0-9]+)+$",
        // UUIDs
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
        // colors
        r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$",
        r"^(?:rgba?|hsla?)\([\d\s.,%/]+\)$",
        // query strings
        r"^\??[\w.\[\]-]+=[^&\s]*(?:&[\w.\[\]-]+=[^&\s]*)+$",
        r"^\?[\w.\[\]-]+=\S*$",
        // versions
        r"^v?\d+(?:\.\d+){1,3}(?:[-+][\w.]+)?$",
        // dimensions and durations
        r"^-?\d+(?:\.\d+)?(?:px|em|rem|%|vh|vw|pt|ms|s|deg|fr)$",
        // domains
        r"(?i)^(?:[a-z0-9-]+\.)+(?:com|org|net|io|dev|app|co|edu|gov|info|biz|ai|me|us|uk|de|fr|jp|cn)$",
        // MIME types
        r"^(?:application|text|image|audio|video|font|multipart)/[\w.+-]+$",
        // hashes
        r"(?i)^[0-9a-f]{32,}$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static DATE_FORMAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let token = r"(?:YYYY|YY|MMMM|MMM|MM|M|DD|Do|D|dddd|ddd|dd|HH|H|hh|h|mm|m|ss|s|SSS|A|a|ZZ|Z|yyyy)";
    Regex::new(&format!(r"^{token}(?:[\s/.:,-]+{token})+$")).unwrap()
});

static BASE64_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/]{20,}={0,2}$").unwrap());

/// Returns true if the text contains a URL anywhere.
pub fn is_url(text: &str) -> bool {
    EMBEDDED_URL_REGEX.is_match(text)
}

pub fn is_technical_content(text: &str) -> bool {
    URL_REGEX.is_match(text)
        || TECHNICAL_REGEXES.iter().any(|re| re.is_match(text))
        || DATE_FORMAT_REGEX.is_match(text)
        || is_encoded_blob(text)
        || is_mixed_identifier(text)
}

/// Base64 or hex blobs: long, unbroken, and mixing digits with letters.
fn is_encoded_blob(text: &str) -> bool {
    BASE64_REGEX.is_match(text)
        && text.chars().any(|c| c.is_ascii_digit() || c == '+' || c == '/')
        && text.chars().any(|c| c.is_ascii_uppercase())
        && text.chars().any(|c| c.is_ascii_lowercase())
}

/// Long single tokens that alternate between letters and digits, like `a1b2c3d4`.
fn is_mixed_identifier(text: &str) -> bool {
    let len = text.chars().count();
    if len < 8 || !text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return false;
    }
    let digits = text.chars().filter(char::is_ascii_digit).count();
    if digits == 0 || digits == len {
        return false;
    }
    let switches = text
        .chars()
        .zip(text.chars().skip(1))
        .filter(|(a, b)| a.is_ascii_digit() != b.is_ascii_digit())
        .count();
    switches >= 3 || (len >= 16 && digits * 4 >= len)
}
