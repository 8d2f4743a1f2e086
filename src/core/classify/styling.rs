//! CSS declarations, utility-class lists and spreadsheet references.

use std::sync::LazyLock;

use regex::Regex;

const CSS_PROPERTIES: &[&str] = &[
    "align-items",
    "background",
    "background-color",
    "border",
    "border-radius",
    "bottom",
    "box-shadow",
    "color",
    "content",
    "cursor",
    "display",
    "flex",
    "font-family",
    "font-size",
    "font-weight",
    "gap",
    "height",
    "justify-content",
    "left",
    "line-height",
    "margin",
    "max-height",
    "max-width",
    "min-height",
    "min-width",
    "opacity",
    "overflow",
    "padding",
    "position",
    "right",
    "text-align",
    "top",
    "transform",
    "transition",
    "visibility",
    "width",
    "z-index",
];

/// Utility classes that carry no dash.
const STANDALONE_UTILITIES: &[&str] = &[
    "absolute",
    "active",
    "antialiased",
    "block",
    "border",
    "btn",
    "capitalize",
    "clearfix",
    "col",
    "container",
    "disabled",
    "fixed",
    "flex",
    "grid",
    "grow",
    "hidden",
    "inline",
    "invisible",
    "italic",
    "lowercase",
    "relative",
    "rounded",
    "row",
    "shadow",
    "shrink",
    "static",
    "sticky",
    "transition",
    "truncate",
    "underline",
    "uppercase",
    "visible",
];

/// First segment of common utility classes (`mt-4`, `text-gray-500`, `items-center`).
const UTILITY_PREFIXES: &[&str] = &[
    "align", "bg", "border", "bottom", "btn", "col", "content", "cursor", "d", "delay", "divide",
    "duration", "ease", "fill", "flex", "font", "from", "fs", "fw", "gap", "grid", "h", "inset",
    "items", "justify", "leading", "left", "lh", "m", "max", "mb", "me", "min", "ml", "mr", "ms",
    "mt", "mx", "my", "opacity", "order", "outline", "overflow", "p", "pb", "pe", "pl", "place",
    "pr", "ps", "pt", "px", "py", "right", "ring", "rotate", "rounded", "row", "scale", "self",
    "shadow", "space", "stroke", "text", "to", "top", "tracking", "translate", "via", "w", "z",
];

static DECLARATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(--[\w-]+|[a-z][a-z-]*)\s*:\s*\S").unwrap());

static UTILITY_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9-]+:)*!?-?([a-z]+)(?:-[a-z0-9./\[\]#%()]+)+$").unwrap()
});

static SPREADSHEET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:=?\$?[A-Z]{1,3}\$?[0-9]{1,7}(?::\$?[A-Z]{1,3}\$?[0-9]{1,7})?|=[A-Z]+\(.*\))$",
    )
    .unwrap()
});

pub fn is_css_content(text: &str) -> bool {
    is_css_declarations(text) || is_utility_class_list(text)
}

/// `color: red; margin: 0` style declarations.
///
/// A lone `name: value` pair only counts for known properties, so URLs and
/// "Note: ..." prose stay out.
pub fn is_css_declarations(text: &str) -> bool {
    let declarations: Vec<&str> = text
        .split(';')
        .filter(|d| !d.trim().is_empty())
        .collect();
    if declarations.is_empty() {
        return false;
    }
    let has_separator = text.contains(';');
    declarations.iter().all(|decl| {
        DECLARATION_REGEX.captures(decl).is_some_and(|caps| {
            let property = caps.get(1).map_or("", |m| m.as_str());
            has_separator || property.starts_with("--") || CSS_PROPERTIES.contains(&property)
        })
    })
}

/// Whitespace-separated class lists such as `flex items-center justify-between`.
pub fn is_utility_class_list(text: &str) -> bool {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 {
        return false;
    }
    let mut utility_count = 0;
    let mut anchored = false;
    for token in &tokens {
        if STANDALONE_UTILITIES.contains(token) {
            utility_count += 1;
            anchored = true;
        } else if let Some(caps) = UTILITY_TOKEN_REGEX.captures(token) {
            utility_count += 1;
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            if UTILITY_PREFIXES.contains(&prefix)
                || token.contains(':')
                || token.chars().any(|c| c.is_ascii_digit())
            {
                anchored = true;
            }
        }
    }
    anchored && utility_count >= 2 && utility_count * 2 >= tokens.len()
}

pub fn is_spreadsheet_reference(text: &str) -> bool {
    SPREADSHEET_REGEX.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_declarations() {
        assert!(is_css_content("color: red"));
        assert!(is_css_content("margin: 0; padding: 4px;"));
        assert!(is_css_content("--brand-color: #fff"));
        assert!(!is_css_content("https://example.com"));
        assert!(!is_css_content("Note: changes are saved"));
        assert!(!is_css_content("Warning: Disk full; retry"));
    }

    #[test]
    fn test_utility_classes() {
        assert!(is_css_content("flex items-center justify-between"));
        assert!(is_css_content("mt-4 text-gray-500"));
        assert!(is_css_content("hover:bg-blue-600 rounded"));
        assert!(is_css_content("w-1/2 md:w-1/3"));
        assert!(!is_css_content("well-known sign-in"));
        assert!(!is_css_content("flex"));
        assert!(!is_css_content("Flexible layout options"));
    }

    #[test]
    fn test_spreadsheet_references() {
        assert!(is_spreadsheet_reference("A1"));
        assert!(is_spreadsheet_reference("$B$12"));
        assert!(is_spreadsheet_reference("A1:C20"));
        assert!(is_spreadsheet_reference("=SUM(A1:A9)"));
        assert!(!is_spreadsheet_reference("Apple"));
        assert!(!is_spreadsheet_reference("ABCD1"));
    }
}
