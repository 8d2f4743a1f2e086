//! Detection of source code and event-handler identifiers.

use std::sync::LazyLock;

use regex::Regex;

/// "Click (here)" style prose: capitalized phrase followed by a parenthetical.
static PAREN_PHRASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{Lu}[\p{L}\p{N}\s'\u{2019},-]*\s\([^(){}=;<>]*\)[.!?:]?$").unwrap()
});

static FUNCTION_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_$][\w$]*(?:\??\.[A-Za-z_$][\w$]*)*)\(([^()]*)\)").unwrap()
});

static ARROW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\([^()]*\)|\b[A-Za-z_$][\w$]*)\s*=>").unwrap()
});

static MEMBER_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][\w$]*(?:\??\.[A-Za-z_$][\w$]*)+$").unwrap()
});

/// Declarations and statements that only occur in code.
static STATEMENT_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(?:const|let|var)\s+[A-Za-z_$][\w$]*\s*(?::\s*[^=]+)?=",
        r"\bfunction\s*[\w$]*\s*\(",
        r"^\s*(?:import|export)\s+(?:default\b|\{|\*|type\s|const\s|function\s|class\s|[\w$]+\s+from\b)",
        r"^\s*(?:return|throw|await|yield)\s+\S.*;\s*$",
        r"\bnew\s+[A-Z][\w$]*\s*\(",
        r"^\s*(?:if|for|while|switch)\s*\(.*\)\s*\{?",
        r"\bclass\s+[A-Z][\w$]*\s*(?:extends\s+[\w$.]+\s*)?\{",
        r"\bthis\.[A-Za-z_$][\w$]*",
        r"\b(?:typeof|instanceof)\s+[\w$]",
        r"^\s*(?:break|continue|return)\s*;\s*$",
        r"^\s*[A-Za-z_$][\w$.]*\s*(?:\+\+|--)\s*;?\s*$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static ASSIGNMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*|\[[^\]]+\])*\s*(?:=|\+=|-=|\*=|/=|\|\|=|&&=|\?\?=)\s*[^=\s]",
    )
    .unwrap()
});

static LOGICAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\w$.)\]]\s*(?:&&|\|\||\?\?|===|!==|==|!=)\s*[\w$.!(\[\x22'`]").unwrap()
});

static TERNARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^!?[A-Za-z_$][\w$.]*(?:\(\))?\s+\?\s+(.+?)\s+:\s+(.+)$").unwrap()
});

static TERNARY_BRANCH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:'[^']*'|"[^"]*"|`[^`]*`|[\w$.]+)$"#).unwrap()
});

static REGEX_LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:\\.|[^/\s])*[\\^$*+?()\[\]|](?:\\.|[^/\s])*/[dgimsuy]*$").unwrap()
});

static JSON_LIKE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:\{\s*"?[\w$-]+"?\s*:.*\}|\[\s*(?:"|'|\d|\{|\[|true|false|null).*\])\s*$"#)
        .unwrap()
});

static EVENT_HANDLER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:on[A-Z][A-Za-z0-9]*|on_[a-z][a-z0-9_]*|handle[A-Z][A-Za-z0-9]*|@[a-z][\w.:-]*|on:[a-z][\w|]*|v-on:[a-z][\w.:-]*|\([a-z][\w.]*\))$",
    )
    .unwrap()
});

/// Returns true if the text contains a function call that reads as code.
///
/// A call counts when it is a member call, has empty or code-like arguments,
/// or is the whole string. `file(s)` style pluralization never counts.
pub fn has_function_call(text: &str) -> bool {
    let whole = text.trim().trim_end_matches(';');
    FUNCTION_CALL_REGEX.captures_iter(text).any(|caps| {
        let call = caps.get(0).map_or("", |m| m.as_str());
        let callee = caps.get(1).map_or("", |m| m.as_str());
        let args = caps.get(2).map_or("", |m| m.as_str()).trim();
        if matches!(args, "s" | "es") {
            return false;
        }
        let code_like_args = args.is_empty()
            || args.contains(['"', '\'', '`', ',', '=', '>', '{', '['])
            || MEMBER_PATH_REGEX.is_match(args);
        callee.contains('.') || code_like_args || call == whole
    })
}

pub fn has_arrow_function(text: &str) -> bool {
    ARROW_REGEX.is_match(text)
}

/// Dotted identifier paths such as `user.profile.name`.
pub fn is_member_path(text: &str) -> bool {
    MEMBER_PATH_REGEX.is_match(text)
}

fn is_ternary(text: &str) -> bool {
    TERNARY_REGEX.captures(text).is_some_and(|caps| {
        let branch = |i: usize| caps.get(i).is_some_and(|m| TERNARY_BRANCH_REGEX.is_match(m.as_str()));
        branch(1) && branch(2)
    })
}

pub fn is_code_content(text: &str) -> bool {
    if PAREN_PHRASE_REGEX.is_match(text) && !text.contains('.') {
        return false;
    }

    has_function_call(text)
        || has_arrow_function(text)
        || is_member_path(text)
        || STATEMENT_REGEXES.iter().any(|re| re.is_match(text))
        || ASSIGNMENT_REGEX.is_match(text)
        || LOGICAL_REGEX.is_match(text)
        || is_ternary(text)
        || REGEX_LITERAL_REGEX.is_match(text)
        || JSON_LIKE_REGEX.is_match(text)
}

pub fn is_event_handler(text: &str) -> bool {
    EVENT_HANDLER_REGEX.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_content() {
        assert!(is_code_content("console.log(x)"));
        assert!(is_code_content("alert(1)"));
        assert!(is_code_content("getUser()"));
        assert!(is_code_content("(e) => setOpen(false)"));
        assert!(is_code_content("const x = 1"));
        assert!(is_code_content("user.profile.name"));
        assert!(is_code_content("isOpen && showMenu"));
        assert!(is_code_content("isAdmin ? 'Admin' : 'User'"));
        assert!(is_code_content("count = count + 1"));
        assert!(is_code_content("/^\\d+$/g"));
        assert!(is_code_content(r#"{"key": "value"}"#));
        assert!(is_code_content("this.title"));
        assert!(is_code_content("return value;"));
        assert!(is_code_content("submitForm(data);"));
        assert!(is_code_content("count++;"));
        assert!(is_code_content("break;"));
    }

    #[test]
    fn test_prose_is_not_code() {
        assert!(!is_code_content("Click (here)"));
        assert!(!is_code_content("Select file(s) to upload"));
        assert!(!is_code_content("Are you sure? This cannot be undone."));
        assert!(!is_code_content("Terms and conditions"));
        assert!(!is_code_content("Note: your changes are saved"));
        assert!(!is_code_content("Use the Settings (gear) icon"));
        assert!(!is_code_content("Need help? Contact us"));
        assert!(!is_code_content("Warning: Disk full;"));
        assert!(!is_code_content("Saved; see details below;"));
    }

    #[test]
    fn test_event_handlers() {
        assert!(is_event_handler("onClick"));
        assert!(is_event_handler("handleSubmit"));
        assert!(is_event_handler("@click"));
        assert!(is_event_handler("on:submit"));
        assert!(is_event_handler("(click)"));
        assert!(!is_event_handler("Online"));
        assert!(!is_event_handler("handle with care"));
    }
}
