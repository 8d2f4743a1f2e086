/// The inner content of a container element such as a Vue `<template>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSpan<'a> {
    pub inner: &'a str,
    /// Byte offset of `inner` within the scanned source.
    pub start: usize,
}

/// Extracts the inner content of the first `<tag>` element, honoring nesting.
///
/// Depth goes up on each further `<tag` followed by whitespace, `>` or `/`, and
/// down on each `</tag>`. Without a balancing close tag the content runs to the
/// last `</tag>` in the document.
pub fn extract_container<'a>(source: &'a str, tag: &str) -> Option<ContainerSpan<'a>> {
    let close = format!("</{tag}>");
    let open_at = find_open_tag(source, tag, 0)?;
    let (content_start, self_closing) = end_of_open_tag(source, open_at)?;
    if self_closing {
        return None;
    }

    let mut depth = 1usize;
    let mut cursor = content_start;
    loop {
        let next_close = source[cursor..].find(&close).map(|i| cursor + i);
        let next_open = find_open_tag(source, tag, cursor);

        match (next_open, next_close) {
            (Some(open), Some(close_at)) if open < close_at => {
                match end_of_open_tag(source, open) {
                    Some((after, false)) => {
                        depth += 1;
                        cursor = after;
                    }
                    Some((after, true)) => cursor = after,
                    None => break,
                }
            }
            (_, Some(close_at)) => {
                depth -= 1;
                if depth == 0 {
                    return Some(ContainerSpan {
                        inner: &source[content_start..close_at],
                        start: content_start,
                    });
                }
                cursor = close_at + close.len();
            }
            _ => break,
        }
    }

    let last_close = source.rfind(&close)?;
    (last_close >= content_start).then(|| ContainerSpan {
        inner: &source[content_start..last_close],
        start: content_start,
    })
}

fn find_open_tag(source: &str, tag: &str, from: usize) -> Option<usize> {
    let needle = format!("<{tag}");
    let mut cursor = from;
    while let Some(i) = source[cursor..].find(&needle) {
        let at = cursor + i;
        let after = at + needle.len();
        match source[after..].chars().next() {
            Some(c) if c.is_whitespace() || c == '>' || c == '/' => return Some(at),
            _ => cursor = after,
        }
    }
    None
}

/// Returns the offset just past the opening tag's `>` and whether it self-closes.
fn end_of_open_tag(source: &str, open_at: usize) -> Option<(usize, bool)> {
    let bytes = source.as_bytes();
    let mut quote: Option<u8> = None;
    for (i, &b) in bytes.iter().enumerate().skip(open_at + 1) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => return Some((i + 1, i > 0 && bytes[i - 1] == b'/')),
                _ => {}
            },
        }
    }
    None
}
