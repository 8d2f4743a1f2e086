//! Template scanning primitives.
//!
//! - `tokenizer`: state machine turning markup into [`TemplateEvent`]s
//! - `expression`: quote-aware `{{ }}` / `{ }` expression scanning
//! - `container`: depth-tracked extraction of container elements

mod container;
mod expression;
mod tokenizer;

pub use container::{ContainerSpan, extract_container};
pub use expression::{
    ExpressionSpan, StringLiteral, find_expressions, is_comparison_operand, placeholder_name,
    scan_expression, string_literals,
};
pub use tokenizer::{TemplateEvent, TemplateSyntax, Tokenizer, scan};

/// Decodes the HTML entities that commonly appear in UI text.
///
/// Unknown named entities are left as they are.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "hellip" => '\u{2026}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        "middot" => '\u{b7}',
        "bull" => '\u{2022}',
        "times" => '\u{d7}',
        "euro" => '\u{20ac}',
        _ => return None,
    };
    Some(c)
}
