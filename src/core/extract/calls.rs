//! Call sites whose string arguments are never UI text.

use std::sync::LazyLock;

use regex::Regex;

/// Functions that already look a key up.
const TRANSLATION_FUNCTIONS: &[&str] = &[
    "t",
    "$t",
    "tc",
    "$tc",
    "te",
    "$te",
    "translate",
    "$translate",
    "formatMessage",
    "gettext",
    "ngettext",
    "__",
];

/// Receivers whose methods write developer diagnostics.
const DIAGNOSTIC_RECEIVERS: &[&str] = &["console", "logger", "log", "debug", "Sentry"];

/// Functions whose arguments are selectors, event names, storage keys and the like.
const NON_TEXT_FUNCTIONS: &[&str] = &[
    "require",
    "fetch",
    "querySelector",
    "querySelectorAll",
    "getElementById",
    "getElementsByClassName",
    "getElementsByTagName",
    "addEventListener",
    "removeEventListener",
    "dispatchEvent",
    "createElement",
    "setAttribute",
    "getAttribute",
    "removeAttribute",
    "hasAttribute",
    "getItem",
    "setItem",
    "removeItem",
    "emit",
    "$emit",
    "matchMedia",
    "postMessage",
    "defineEmits",
    "inject",
    "provide",
    "includes",
    "startsWith",
    "endsWith",
    "split",
    "join",
    "replace",
    "replaceAll",
    "indexOf",
    "lastIndexOf",
    "match",
    "matchAll",
    "localeCompare",
    "get",
    "has",
];

/// Constructors whose arguments are patterns, addresses or developer messages.
const NON_TEXT_CONSTRUCTORS: &[&str] = &[
    "RegExp",
    "URL",
    "URLSearchParams",
    "Date",
    "Worker",
    "WebSocket",
    "EventSource",
    "Event",
    "CustomEvent",
    "Request",
];

/// Property and variable names whose values are identifiers, not text.
const NON_TEXT_NAMES: &[&str] = &[
    "id",
    "key",
    "type",
    "class",
    "classname",
    "style",
    "styles",
    "href",
    "src",
    "url",
    "path",
    "to",
    "route",
    "icon",
    "component",
    "variant",
    "color",
    "size",
    "method",
    "mode",
    "target",
    "rel",
    "role",
    "ref",
    "slot",
    "as",
    "lang",
    "locale",
    "format",
    "pattern",
    "selector",
    "template",
    "templateurl",
    "styleurl",
    "styleurls",
    "testid",
    "datatestid",
    "innerhtml",
    "endpoint",
];

/// Name endings that mark identifier-like values (`userId`, `api_url`).
const NON_TEXT_SUFFIXES: &[&str] = &["id", "url", "path", "key", "class", "color", "icon", "type"];

/// Matches an expression that calls a translation function or pipe.
static TRANSLATION_EXPR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[^\w$.])(?:[\w$]+\.)*(?:\$?tc?|\$?te|\$?translate|formatMessage)\s*\(|\|\s*translate\b",
    )
    .unwrap()
});

fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

/// `path` is a dotted callee such as `i18n.t` or `this.$t`.
pub fn is_translation_call(path: &str) -> bool {
    TRANSLATION_FUNCTIONS.contains(&last_segment(path))
}

pub fn is_diagnostic_call(path: &str) -> bool {
    let path = path.strip_prefix("this.").unwrap_or(path);
    path.split('.')
        .next()
        .is_some_and(|receiver| DIAGNOSTIC_RECEIVERS.contains(&receiver))
        && path.contains('.')
}

pub fn is_non_text_call(path: &str) -> bool {
    NON_TEXT_FUNCTIONS.contains(&last_segment(path)) || path.contains("classList.")
}

pub fn is_non_text_constructor(path: &str) -> bool {
    let name = last_segment(path);
    name.ends_with("Error") || NON_TEXT_CONSTRUCTORS.contains(&name)
}

/// True for names like `className`, `userId` or `api_url`.
pub fn is_non_text_name(name: &str) -> bool {
    let folded: String = name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    if NON_TEXT_NAMES.contains(&folded.as_str()) {
        return true;
    }
    NON_TEXT_SUFFIXES.iter().any(|suffix| {
        let lower = name.to_lowercase();
        let boundary = name.len().checked_sub(suffix.len()).filter(|&at| at > 0);
        lower.ends_with(suffix)
            && boundary.is_some_and(|at| {
                name.is_char_boundary(at)
                    && (name[at..].starts_with(|c: char| c.is_uppercase())
                        || name[..at].ends_with(['_', '-']))
            })
    })
}

/// True if a template expression calls a translation function anywhere.
pub fn calls_translation(expression: &str) -> bool {
    TRANSLATION_EXPR_REGEX.is_match(expression)
}
