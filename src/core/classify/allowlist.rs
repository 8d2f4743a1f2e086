//! Common UI strings that are accepted before the structural detectors run.

use std::sync::LazyLock;

use regex::Regex;

use super::{code, markup, technical};

static IMPERATIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:Add|Apply|Approve|Back|Browse|Cancel|Change|Check|Choose|Clear|Click|Close|Confirm|Continue|Copy|Create|Decline|Delete|Disable|Discard|Dismiss|Download|Edit|Enable|Enter|Export|Filter|Finish|Go|Hide|Import|Invite|Join|Learn|Leave|Load|Log|Manage|Next|Open|Pause|Preview|Previous|Print|Publish|Refresh|Reject|Remove|Rename|Reply|Reset|Restore|Retry|Return|Save|Search|See|Select|Send|Share|Show|Sign|Skip|Sort|Start|Stop|Submit|Subscribe|Try|Undo|Unsubscribe|Update|Upload|View)\b[\p{L}\p{N}\s'\u{2019},.!?\u{2026}&-]*$",
    )
    .unwrap()
});

static COUNTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:Found|Showing|Loaded|Deleted|Saved|Selected|Updated|Added|Removed|Imported|Exported|Uploaded|Processed)\s+(?:\{[\w.$]+\}|\d+)\s+\p{L}[\p{L}\s]*[.!]?$",
    )
    .unwrap()
});

static DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:\{[\w.$]+\}|\d+|an?|one)\s+(?:second|minute|hour|day|week|month|year)s?(?:\s+(?:ago|left|remaining))?|just now|today|yesterday|tomorrow)$",
    )
    .unwrap()
});

static SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\p{L}[\p{L}\p{N}\s'\u{2019},-]*\s\((?:recommended|optional|required|default|beta|new|experimental|deprecated)\)$",
    )
    .unwrap()
});

/// Returns true for strings shaped like everyday UI copy.
pub fn is_common_ui_string(text: &str) -> bool {
    IMPERATIVE_REGEX.is_match(text)
        || COUNTER_REGEX.is_match(text)
        || DURATION_REGEX.is_match(text)
        || SUFFIX_REGEX.is_match(text)
}

/// Code, markup or URL shapes that override the allowlist.
pub fn has_unambiguous_code_shape(text: &str) -> bool {
    technical::is_url(text)
        || markup::has_tag(text)
        || code::has_function_call(text)
        || code::has_arrow_function(text)
        || code::is_member_path(text)
}
