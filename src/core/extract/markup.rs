//! Markup templates: plain HTML, Angular component templates, Handlebars.

use super::{
    Collector, DialectHint, ExtractOptions, Extractor,
    calls::calls_translation,
    kind::{kind_for_attribute, kind_for_role, kind_for_tag},
    script,
};
use crate::core::{
    classify::placeholder::strip_placeholders,
    data::{FileExtraction, Kind},
    template::{
        TemplateEvent, TemplateSyntax, decode_entities, find_expressions, is_comparison_operand,
        placeholder_name, scan, string_literals,
    },
};
use crate::utils::contains_alphabetic;

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupExtractor;

impl Extractor for MarkupExtractor {
    fn name(&self) -> &'static str {
        "markup"
    }

    fn can_handle(&self, hint: &DialectHint) -> bool {
        hint.is_one_of(&["html", "htm", "hbs", "handlebars"])
    }

    fn extract(&self, source: &str, options: &ExtractOptions) -> FileExtraction {
        let mut collector = Collector::new(options);
        extract_template(source, TemplateSyntax::MUSTACHE, &mut collector);
        collector.finish()
    }
}

/// Leading characters of block helpers and control-flow expressions, which split
/// text runs instead of joining them.
const BLOCK_PREFIXES: &[char] = &['#', '/', ':', '@', '^', '!', '>', '~'];

/// An element on the open-tag stack, with the role it declared.
#[derive(Debug)]
struct Scope {
    tag: String,
    role: Option<String>,
}

enum RunPart {
    Text(String),
    Expression(String),
}

/// Walks one template and offers its text runs and checked attributes.
pub(crate) fn extract_template(template: &str, syntax: TemplateSyntax, collector: &mut Collector) {
    let mut walker = TemplateWalker {
        syntax,
        scopes: Vec::new(),
        run: Vec::new(),
        run_line: 1,
        last_open_scoped: false,
    };
    for event in scan(template, syntax) {
        walker.on_event(event, collector);
    }
    walker.flush(collector);
}

struct TemplateWalker {
    syntax: TemplateSyntax,
    scopes: Vec<Scope>,
    run: Vec<RunPart>,
    run_line: usize,
    /// Whether the most recent open tag was pushed on `scopes`.
    last_open_scoped: bool,
}

impl TemplateWalker {
    fn on_event(&mut self, event: TemplateEvent, collector: &mut Collector) {
        match event {
            TemplateEvent::OpenTag {
                name, self_closing, ..
            } => {
                self.flush(collector);
                self.last_open_scoped = !self_closing && opens_scope(&name);
                if self.last_open_scoped {
                    self.scopes.push(Scope {
                        tag: name,
                        role: None,
                    });
                }
            }
            TemplateEvent::CloseTag { name, .. } => {
                self.flush(collector);
                if let Some(depth) = self.scopes.iter().rposition(|s| s.tag == name) {
                    self.scopes.truncate(depth);
                }
            }
            TemplateEvent::Attribute {
                tag,
                name,
                value,
                line,
                ..
            } => {
                if name.eq_ignore_ascii_case("role")
                    && self.last_open_scoped
                    && let Some(scope) = self.scopes.last_mut()
                {
                    scope.role = value.clone();
                }
                if let Some(value) = value {
                    self.on_attribute(&tag, &name, &value, line, collector);
                }
            }
            TemplateEvent::Text { text, line, .. } => {
                if self.run.is_empty() {
                    self.run_line = line;
                }
                self.run.push(RunPart::Text(decode_entities(&text)));
            }
            TemplateEvent::Expression { source, line, .. } => {
                if is_block_expression(&source) {
                    self.flush(collector);
                    return;
                }
                if self.run.is_empty() {
                    self.run_line = line;
                }
                self.run.push(RunPart::Expression(source));
            }
            TemplateEvent::Raw { tag, content, line } => {
                self.flush(collector);
                if tag == "script" && is_script_content(&content) {
                    collector.shifted(line - 1, |c| script::extract_script(&content, c));
                }
            }
        }
    }

    fn kind(&self) -> Kind {
        self.scopes
            .iter()
            .rev()
            .find_map(|s| s.role.as_deref().and_then(kind_for_role).or_else(|| kind_for_tag(&s.tag)))
            .unwrap_or(Kind::Text)
    }

    fn parent(&self) -> Option<&str> {
        self.scopes.last().map(|s| s.tag.as_str())
    }

    /// Offers the current text run: first the literals inside its expressions,
    /// then the text itself with expressions turned into placeholders.
    fn flush(&mut self, collector: &mut Collector) {
        if self.run.is_empty() {
            return;
        }
        let run = std::mem::take(&mut self.run);
        let kind = self.kind();
        let parent = self.parent().map(str::to_string);
        let parent = parent.as_deref();

        let mut text = String::new();
        let mut index = 0;
        for part in &run {
            match part {
                RunPart::Text(t) => text.push_str(t),
                RunPart::Expression(expr) => {
                    offer_literals(expr, kind, parent, None, self.run_line, collector);
                    push_placeholder(&mut text, expr, &mut index);
                }
            }
        }
        offer_text(&text, index > 0, kind, parent, None, self.run_line, collector);
    }

    fn on_attribute(
        &mut self,
        tag: &str,
        name: &str,
        value: &str,
        line: usize,
        collector: &mut Collector,
    ) {
        let (base, bound) = match bound_attribute_name(name) {
            Some(base) => (base, true),
            None => (name, false),
        };
        if !collector.options().checks_attribute(base) {
            return;
        }

        let kind = kind_for_attribute(base)
            .or_else(|| kind_for_tag(tag))
            .unwrap_or(Kind::Text);
        let parent = Some(tag);
        let attribute = Some(base);

        if bound {
            offer_literals(value, kind, parent, attribute, line, collector);
            return;
        }

        let trimmed = value.trim();
        let width = self.syntax.expression_width;
        let spans = find_expressions(trimmed, width);
        if let [span] = spans.as_slice()
            && span.start == 0
            && span.end == trimmed.len()
        {
            offer_literals(&span.source, kind, parent, attribute, line, collector);
            return;
        }

        let mut text = String::new();
        let mut index = 0;
        let mut cursor = 0;
        for span in &spans {
            text.push_str(&trimmed[cursor..span.start]);
            offer_literals(&span.source, kind, parent, attribute, line, collector);
            push_placeholder(&mut text, &span.source, &mut index);
            cursor = span.end;
        }
        text.push_str(&trimmed[cursor..]);
        let text = decode_entities(&text);
        offer_text(&text, index > 0, kind, parent, attribute, line, collector);
    }
}

/// Base name of a bound attribute (`:title`, `v-bind:title`, `[title]`, `[attr.title]`).
fn bound_attribute_name(name: &str) -> Option<&str> {
    if let Some(rest) = name.strip_prefix("v-bind:") {
        return Some(rest);
    }
    if let Some(rest) = name.strip_prefix(':') {
        return Some(rest);
    }
    let inner = name.strip_prefix('[')?.strip_suffix(']')?;
    Some(inner.strip_prefix("attr.").unwrap_or(inner))
}

fn opens_scope(tag: &str) -> bool {
    const VOID_OR_VERBATIM: &[&str] = &[
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr", "script", "style", "code",
    ];
    !VOID_OR_VERBATIM.contains(&tag.to_ascii_lowercase().as_str())
}

fn is_block_expression(source: &str) -> bool {
    source.starts_with(BLOCK_PREFIXES) || source == "else" || source.starts_with("else ")
}

/// Skips JSON, templates and other non-JavaScript script blocks.
fn is_script_content(content: &str) -> bool {
    let trimmed = content.trim_start();
    !trimmed.is_empty() && !trimmed.starts_with(['{', '[', '<'])
}

fn push_placeholder(text: &mut String, expression: &str, index: &mut usize) {
    text.push('{');
    text.push_str(&placeholder_name(expression, *index));
    text.push('}');
    *index += 1;
}

/// Offers the string literals of an expression unless it calls a translation function.
pub(crate) fn offer_literals(
    expression: &str,
    kind: Kind,
    parent: Option<&str>,
    attribute: Option<&str>,
    line: usize,
    collector: &mut Collector,
) {
    if calls_translation(expression) {
        return;
    }
    for literal in string_literals(expression) {
        if is_comparison_operand(expression, &literal) {
            continue;
        }
        collector.offer(&literal.value, kind, parent, attribute, line);
    }
}

/// Offers text that may contain placeholders. Runs that are nothing but
/// placeholders and punctuation are not offered.
pub(crate) fn offer_text(
    text: &str,
    has_placeholders: bool,
    kind: Kind,
    parent: Option<&str>,
    attribute: Option<&str>,
    line: usize,
    collector: &mut Collector,
) {
    if has_placeholders && !contains_alphabetic(&strip_placeholders(text)) {
        return;
    }
    collector.offer(text, kind, parent, attribute, line);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::extract::test_support::{extract, extract_texts};

    #[test]
    fn test_text_runs_and_placeholders() {
        let texts = extract_texts(
            MarkupExtractor,
            "<div><p>Hello {{ user.name }}, welcome back</p><p>{{ count }}</p></div>",
        );
        assert_eq!(texts, vec!["Hello {name}, welcome back"]);
    }

    #[test]
    fn test_ternary_literals() {
        let texts = extract_texts(
            MarkupExtractor,
            "<span>{{ saved ? 'All changes saved' : 'Saving changes' }}</span>",
        );
        assert_eq!(texts, vec!["All changes saved", "Saving changes"]);
    }

    #[test]
    fn test_skips_translation_calls_and_comparisons() {
        let texts = extract_texts(
            MarkupExtractor,
            "<p>{{ $t('home.title') }}</p><p>{{ 'home.subtitle' | translate }}</p>\
             <p>{{ status === 'Archived items' ? 'Restore item' : '' }}</p>",
        );
        assert_eq!(texts, vec!["Restore item"]);
    }

    #[test]
    fn test_attributes_and_kinds() {
        let result = extract(
            MarkupExtractor,
            r#"<form>
  <input placeholder="Search projects" class="w-full px-2">
  <img alt="Company logo" src="/logo.png">
  <button [title]="'Close dialog'" (click)="close()">Close</button>
  <h2>Account settings</h2>
  <div role="alert">Payment failed</div>
</form>"#,
        );
        let found: Vec<(&str, Kind, usize)> = result
            .candidates
            .iter()
            .map(|c| {
                let line = c.source_location.as_ref().map_or(0, |l| l.line);
                (c.text.as_str(), c.kind, line)
            })
            .collect();
        assert_eq!(
            found,
            vec![
                ("Search projects", Kind::Placeholder, 2),
                ("Company logo", Kind::Alt, 3),
                ("Close dialog", Kind::Title, 4),
                ("Close", Kind::Button, 4),
                ("Account settings", Kind::Heading, 5),
                ("Payment failed", Kind::Toast, 6),
            ]
        );
        assert_eq!(
            result.candidates[0].attribute_name.as_deref(),
            Some("placeholder")
        );
    }

    #[test]
    fn test_entities_are_decoded() {
        let texts = extract_texts(MarkupExtractor, "<p>Terms &amp; conditions</p>");
        assert_eq!(texts, vec!["Terms & conditions"]);
    }

    #[test]
    fn test_block_helpers_split_runs() {
        let texts = extract_texts(
            MarkupExtractor,
            "<p>{{#if user}}Signed in{{else}}Please sign in{{/if}}</p>",
        );
        assert_eq!(texts, vec!["Signed in", "Please sign in"]);
    }

    #[test]
    fn test_inline_script_is_extracted() {
        let result = extract(
            MarkupExtractor,
            "<p>Intro text</p>\n<script>\nconst title = \"Dashboard overview\";\n</script>",
        );
        let found: Vec<(&str, usize)> = result
            .candidates
            .iter()
            .map(|c| (c.text.as_str(), c.source_location.as_ref().map_or(0, |l| l.line)))
            .collect();
        assert_eq!(found, vec![("Intro text", 1), ("Dashboard overview", 3)]);
    }

    #[test]
    fn test_rejections_are_recorded() {
        let result = extract(MarkupExtractor, r#"<p>flex items-center justify-between</p>"#);
        assert!(result.candidates.is_empty());
        assert_eq!(result.rejections.len(), 1);
    }
}
