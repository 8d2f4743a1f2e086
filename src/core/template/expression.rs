//! Quote-aware scanning of embedded template expressions.
//!
//! Expressions open with one or two braces depending on the dialect. The scanner
//! counts braces from the opening delimiter and ignores everything inside
//! `'`, `"` and backtick strings, so `{{ a ? '}' : 'x' }}` ends at the real
//! closing delimiter.

/// An embedded expression located in a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionSpan {
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset just past the closing delimiter.
    pub end: usize,
    /// Source between the delimiters, trimmed.
    pub source: String,
}

/// A string literal found inside an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    /// Byte offset of the opening quote within the expression.
    pub start: usize,
    /// Byte offset just past the closing quote.
    pub end: usize,
}

/// Scans an expression whose opening delimiter starts at `start`.
///
/// Returns the byte offset just past the closing delimiter, or `None` when the
/// expression is never closed.
pub fn scan_expression(text: &str, start: usize, width: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = width;
    let mut quote: Option<u8> = None;
    let mut prev = 0u8;
    let mut i = start + width;

    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == q && prev != b'\\' {
                    quote = None;
                }
            }
            None => match b {
                b'\'' | b'"' | b'`' => quote = Some(b),
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i + 1);
                    }
                }
                _ => {}
            },
        }
        // An escaped backslash must not escape the following quote.
        prev = if prev == b'\\' && b == b'\\' { 0 } else { b };
        i += 1;
    }

    None
}

/// Finds every embedded expression in `text`.
///
/// Scanning stops at the first unterminated expression; spans found before it
/// are still returned.
pub fn find_expressions(text: &str, width: usize) -> Vec<ExpressionSpan> {
    let opener = "{".repeat(width);
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(&opener) {
        let start = cursor + offset;
        let Some(end) = scan_expression(text, start, width) else {
            break;
        };
        spans.push(ExpressionSpan {
            start,
            end,
            source: text[start + width..end - width].trim().to_string(),
        });
        cursor = end;
    }

    spans
}

/// Collects the string literals of an expression, in source order.
///
/// Template literals keep their text with `${...}` substitutions replaced by
/// normalized placeholders.
pub fn string_literals(expression: &str) -> Vec<StringLiteral> {
    let bytes = expression.as_bytes();
    let mut literals = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let q = bytes[i];
        if !matches!(q, b'\'' | b'"' | b'`') {
            i += 1;
            continue;
        }
        let start = i;
        let mut j = i + 1;
        let mut closed = false;
        while j < bytes.len() {
            if bytes[j] == b'\\' {
                j += 2;
                continue;
            }
            if bytes[j] == q {
                closed = true;
                break;
            }
            j += 1;
        }
        if !closed {
            break;
        }
        let raw = &expression[start + 1..j];
        let value = if q == b'`' {
            replace_substitutions(raw)
        } else {
            unescape(raw)
        };
        literals.push(StringLiteral {
            value,
            start,
            end: j + 1,
        });
        i = j + 1;
    }

    literals
}

/// Returns true if the literal is an operand of an equality comparison.
pub fn is_comparison_operand(expression: &str, literal: &StringLiteral) -> bool {
    let before = expression[..literal.start].trim_end();
    let after = expression[literal.end..].trim_start();
    const OPERATORS: [&str; 4] = ["===", "!==", "==", "!="];
    OPERATORS
        .iter()
        .any(|op| before.ends_with(op) || after.starts_with(op))
}

/// Returns the placeholder name for an embedded expression.
///
/// Simple member paths keep their last segment (`user.name` becomes `name`);
/// anything else becomes its positional index.
pub fn placeholder_name(expression: &str, index: usize) -> String {
    let expression = expression.trim();
    let is_path = !expression.is_empty() && expression.split('.').all(is_identifier);
    match expression.rsplit('.').next() {
        Some(last) if is_path => last.to_string(),
        _ => index.to_string(),
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

fn replace_substitutions(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut index = 0;
    let mut cursor = 0;
    while let Some(offset) = raw[cursor..].find("${") {
        let start = cursor + offset;
        out.push_str(&unescape(&raw[cursor..start]));
        match scan_expression(raw, start + 1, 1) {
            Some(end) => {
                let name = placeholder_name(&raw[start + 2..end - 1], index);
                out.push('{');
                out.push_str(&name);
                out.push('}');
                index += 1;
                cursor = end;
            }
            None => {
                cursor = start;
                break;
            }
        }
    }
    out.push_str(&unescape(&raw[cursor..]));
    out
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
            Some('n') | Some('t') | Some('r') => out.push(' '),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
