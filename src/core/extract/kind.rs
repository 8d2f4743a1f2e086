//! Semantic kind inference from structural context.

use crate::core::data::Kind;

/// Kind implied by an attribute name.
pub fn kind_for_attribute(name: &str) -> Option<Kind> {
    match name.to_ascii_lowercase().as_str() {
        "placeholder" | "aria-placeholder" => Some(Kind::Placeholder),
        "title" | "tooltip" => Some(Kind::Title),
        "alt" => Some(Kind::Alt),
        "aria-label" | "aria-description" | "arialabel" => Some(Kind::AriaLabel),
        "label" => Some(Kind::Label),
        _ => None,
    }
}

/// Kind implied by an element name.
pub fn kind_for_tag(tag: &str) -> Option<Kind> {
    let tag = tag.to_ascii_lowercase();
    match tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(Kind::Heading),
        "a" | "link" | "router-link" | "routerlink" | "nuxt-link" | "nuxtlink" => Some(Kind::Link),
        "label" | "legend" => Some(Kind::Label),
        "title" | "caption" | "figcaption" => Some(Kind::Title),
        "alert" => Some(Kind::Toast),
        _ if tag.ends_with("button") || tag.ends_with("btn") => Some(Kind::Button),
        _ if tag.contains("toast") || tag.ends_with("-alert") => Some(Kind::Toast),
        _ => None,
    }
}

/// Kind implied by an ARIA role.
pub fn kind_for_role(role: &str) -> Option<Kind> {
    match role.trim().to_ascii_lowercase().as_str() {
        "alert" | "status" | "alertdialog" => Some(Kind::Toast),
        "button" => Some(Kind::Button),
        "heading" => Some(Kind::Heading),
        "link" => Some(Kind::Link),
        _ => None,
    }
}

/// Kind implied by a variable or property name such as `pageTitle` or `submit_label`.
pub fn kind_for_identifier(name: &str) -> Option<Kind> {
    let lower: String = name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();

    if lower.contains("placeholder") {
        Some(Kind::Placeholder)
    } else if lower.contains("arialabel") {
        Some(Kind::AriaLabel)
    } else if lower.contains("tooltip") || lower.ends_with("title") {
        Some(Kind::Title)
    } else if lower.contains("heading") || lower.ends_with("header") {
        Some(Kind::Heading)
    } else if lower.contains("label") {
        Some(Kind::Label)
    } else if lower == "alt" || lower.ends_with("alttext") {
        Some(Kind::Alt)
    } else if lower.contains("toast") || lower.contains("notification") || lower.contains("snackbar")
    {
        Some(Kind::Toast)
    } else if lower.contains("button") || lower.ends_with("btn") || lower == "cta" {
        Some(Kind::Button)
    } else if lower.ends_with("link") {
        Some(Kind::Link)
    } else {
        None
    }
}

/// Kind implied by a callee such as `toast.success` or `notify`.
pub fn kind_for_callee(path: &str) -> Option<Kind> {
    const TOAST_CALLEES: &[&str] = &[
        "toast",
        "$toast",
        "notify",
        "$notify",
        "notification",
        "snackbar",
        "enqueuesnackbar",
        "alert",
        "$message",
    ];
    path.split('.')
        .any(|segment| TOAST_CALLEES.contains(&segment.to_ascii_lowercase().as_str()))
        .then_some(Kind::Toast)
}
