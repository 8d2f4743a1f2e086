//! Fallback for scripts swc cannot parse: quoted literals, line by line.

use std::sync::LazyLock;

use regex::Regex;

use super::{Collector, calls::calls_translation, kind::kind_for_identifier};
use crate::core::data::Kind;

static STRING_LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""((?:[^"\\\n]|\\.)*)"|'((?:[^'\\\n]|\\.)*)'|`((?:[^`\\\n$]|\\.)*)`"#).unwrap()
});

static ASSIGNED_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_$][\w$]*)\s*[:=]\s*$").unwrap());

static SKIPPED_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:import\b|export\s+(?:\*|\{[^}]*\})\s+from\b)|\brequire\s*\(|\b(?:console|logger)\.\w+\s*\(")
        .unwrap()
});

const COMPARISON_OPERATORS: [&str; 4] = ["===", "!==", "==", "!="];

pub(crate) fn extract_lines(source: &str, collector: &mut Collector) {
    let mut in_block_comment = false;

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        let code = match strip_comments(line, &mut in_block_comment) {
            Some(code) => code,
            None => continue,
        };
        if SKIPPED_LINE_REGEX.is_match(&code) || calls_translation(&code) {
            continue;
        }

        for caps in STRING_LITERAL_REGEX.captures_iter(&code) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let before = code[..whole.start()].trim_end();
            let after = code[whole.end()..].trim_start();
            if COMPARISON_OPERATORS
                .iter()
                .any(|op| before.ends_with(op) || after.starts_with(op))
                || before.ends_with("case")
            {
                continue;
            }
            let Some(value) = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)) else {
                continue;
            };

            let kind = ASSIGNED_NAME_REGEX
                .captures(before)
                .and_then(|c| c.get(1))
                .and_then(|name| kind_for_identifier(name.as_str()))
                .unwrap_or(Kind::Text);
            collector.offer(&unescape(value.as_str()), kind, None, None, line_number);
        }
    }
}

/// Removes comments from one line, tracking `/* */` blocks across lines.
///
/// Returns `None` when nothing but comment remains.
fn strip_comments(line: &str, in_block_comment: &mut bool) -> Option<String> {
    let mut rest = line;
    let mut code = String::new();

    loop {
        if *in_block_comment {
            match rest.find("*/") {
                Some(end) => {
                    *in_block_comment = false;
                    rest = &rest[end + 2..];
                }
                None => break,
            }
        }
        match rest.find("/*") {
            Some(start) => {
                code.push_str(&rest[..start]);
                *in_block_comment = true;
                rest = &rest[start + 2..];
            }
            None => {
                code.push_str(rest);
                break;
            }
        }
    }

    if let Some(comment) = code.find("//").filter(|&at| !code[..at].ends_with(':')) {
        code.truncate(comment);
    }
    (!code.trim().is_empty()).then_some(code)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_strip_comments() {
        let mut in_block = false;
        assert_eq!(strip_comments("// note", &mut in_block), None);
        assert_eq!(
            strip_comments("a = 1; /* start", &mut in_block).as_deref(),
            Some("a = 1; ")
        );
        assert!(in_block);
        assert_eq!(strip_comments("still comment", &mut in_block), None);
        assert_eq!(
            strip_comments("end */ b = 2; // tail", &mut in_block).as_deref(),
            Some(" b = 2; ")
        );
        assert!(!in_block);
        assert_eq!(
            strip_comments("const u = 'https://x.dev';", &mut in_block).as_deref(),
            Some("const u = 'https://x.dev';")
        );
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r#"Don\'t \"stop\""#), r#"Don't "stop""#);
    }
}
