//! Character-level template tokenizer.
//!
//! Turns one markup template into a flat list of [`TemplateEvent`]s. The scanner
//! is an explicit state machine that never looks more than a few characters
//! ahead and never fails: malformed input simply ends the scan early.

use super::expression::scan_expression;

/// Elements that never have children and are never pushed on the tag stack.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is passed through untouched as a `Raw` event.
const VERBATIM_ELEMENTS: &[&str] = &["script", "style", "code"];

/// Expression delimiter flavor of a template dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSyntax {
    /// Number of braces that open an expression.
    pub expression_width: usize,
}

impl TemplateSyntax {
    /// `{{ expr }}` as used by Vue, Angular and Handlebars.
    pub const MUSTACHE: Self = Self {
        expression_width: 2,
    };
    /// `{expr}` as used by Svelte.
    pub const SINGLE_BRACE: Self = Self {
        expression_width: 1,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateEvent {
    OpenTag {
        name: String,
        self_closing: bool,
        line: usize,
    },
    CloseTag {
        name: String,
        line: usize,
    },
    Attribute {
        tag: String,
        name: String,
        value: Option<String>,
        line: usize,
        enclosing: Vec<String>,
    },
    Text {
        text: String,
        line: usize,
        enclosing: Vec<String>,
    },
    Expression {
        source: String,
        line: usize,
        enclosing: Vec<String>,
    },
    Raw {
        tag: String,
        content: String,
        line: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueQuote {
    Quoted(char),
    Unquoted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    TagName,
    TagSpace,
    AttrName,
    AttrValue(ValueQuote),
    TagClose,
    Comment(&'static str),
    Verbatim,
}

/// Scans a template into events.
pub fn scan(template: &str, syntax: TemplateSyntax) -> Vec<TemplateEvent> {
    Tokenizer::new(template, syntax).run()
}

pub struct Tokenizer<'a> {
    src: &'a str,
    syntax: TemplateSyntax,
    pos: usize,
    line: usize,
    state: State,
    halted: bool,
    stack: Vec<String>,
    events: Vec<TemplateEvent>,
    text: String,
    text_line: usize,
    tag: String,
    tag_line: usize,
    attrs: Vec<(String, Option<String>, usize)>,
    attr_name: String,
    attr_value: String,
    attr_line: usize,
    verbatim_tag: String,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str, syntax: TemplateSyntax) -> Self {
        Self {
            src,
            syntax,
            pos: 0,
            line: 1,
            state: State::Text,
            halted: false,
            stack: Vec::new(),
            events: Vec::new(),
            text: String::new(),
            text_line: 1,
            tag: String::new(),
            tag_line: 1,
            attrs: Vec::new(),
            attr_name: String::new(),
            attr_value: String::new(),
            attr_line: 1,
            verbatim_tag: String::new(),
        }
    }

    pub fn run(mut self) -> Vec<TemplateEvent> {
        while !self.halted {
            let Some(ch) = self.peek() else {
                break;
            };
            match self.state {
                State::Text => self.on_text(ch),
                State::TagName => self.on_tag_name(ch),
                State::TagSpace => self.on_tag_space(ch),
                State::AttrName => self.on_attr_name(ch),
                State::AttrValue(quote) => self.on_attr_value(ch, quote),
                State::TagClose => self.on_tag_close(ch),
                State::Comment(end) => self.on_comment(end),
                State::Verbatim => self.on_verbatim(),
            }
        }
        // A partial tag at end of input carries no usable information.
        if self.state == State::Text {
            self.flush_text();
        }
        self.events
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            if ch == '\n' {
                self.line += 1;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn advance_to(&mut self, target: usize) {
        let target = target.min(self.src.len());
        self.line += self.src[self.pos..target].matches('\n').count();
        self.pos = target;
    }

    fn on_text(&mut self, ch: char) {
        let rest = &self.src[self.pos..];
        if ch == '<' {
            match self.peek_next() {
                Some('/') => {
                    self.flush_text();
                    self.tag.clear();
                    self.advance_to(self.pos + 2);
                    self.state = State::TagClose;
                    return;
                }
                Some('!') if rest.starts_with("<!--") => {
                    self.flush_text();
                    self.advance_to(self.pos + 4);
                    self.state = State::Comment("-->");
                    return;
                }
                Some('!') | Some('?') => {
                    self.flush_text();
                    self.advance_to(self.pos + 2);
                    self.state = State::Comment(">");
                    return;
                }
                Some(c) if c.is_ascii_alphabetic() => {
                    self.flush_text();
                    self.tag.clear();
                    self.attrs.clear();
                    self.tag_line = self.line;
                    self.bump();
                    self.state = State::TagName;
                    return;
                }
                _ => {}
            }
        }

        let width = self.syntax.expression_width;
        if ch == '{' && rest.starts_with(&"{".repeat(width)) {
            self.flush_text();
            match scan_expression(self.src, self.pos, width) {
                Some(end) => {
                    let source = self.src[self.pos + width..end - width].trim().to_string();
                    self.events.push(TemplateEvent::Expression {
                        source,
                        line: self.line,
                        enclosing: self.stack.clone(),
                    });
                    self.advance_to(end);
                }
                None => self.halted = true,
            }
            return;
        }

        if self.text.is_empty() {
            self.text_line = self.line;
        }
        self.text.push(ch);
        self.bump();
    }

    fn on_tag_name(&mut self, ch: char) {
        match ch {
            '>' => {
                self.bump();
                self.finish_open_tag(false);
            }
            '/' => self.state = State::TagSpace,
            c if c.is_whitespace() => {
                self.bump();
                self.state = State::TagSpace;
            }
            c => {
                self.tag.push(c);
                self.bump();
            }
        }
    }

    fn on_tag_space(&mut self, ch: char) {
        match ch {
            '>' => {
                self.bump();
                self.finish_open_tag(false);
            }
            '/' if self.peek_next() == Some('>') => {
                self.advance_to(self.pos + 2);
                self.finish_open_tag(true);
            }
            c if c.is_whitespace() || c == '/' => self.bump(),
            _ => {
                self.attr_name.clear();
                self.attr_value.clear();
                self.attr_line = self.line;
                self.state = State::AttrName;
            }
        }
    }

    fn on_attr_name(&mut self, ch: char) {
        match ch {
            '=' => {
                self.bump();
                while self.peek().is_some_and(char::is_whitespace) {
                    self.bump();
                }
                match self.peek() {
                    Some(q @ ('"' | '\'')) => {
                        self.bump();
                        self.state = State::AttrValue(ValueQuote::Quoted(q));
                    }
                    Some('{') if self.on_expression_value() => {}
                    _ => self.state = State::AttrValue(ValueQuote::Unquoted),
                }
            }
            c if c.is_whitespace() => {
                let rest = self.src[self.pos..].trim_start();
                if rest.starts_with('=') {
                    self.advance_to(self.src.len() - rest.len());
                } else {
                    self.finish_attribute(None);
                    self.state = State::TagSpace;
                }
            }
            '>' | '/' => {
                self.finish_attribute(None);
                self.state = State::TagSpace;
            }
            c => {
                self.attr_name.push(c);
                self.bump();
            }
        }
    }

    /// Takes an unquoted `{expr}` value whole, spaces included.
    fn on_expression_value(&mut self) -> bool {
        let width = self.syntax.expression_width;
        if !self.src[self.pos..].starts_with(&"{".repeat(width)) {
            return false;
        }
        let Some(end) = scan_expression(self.src, self.pos, width) else {
            return false;
        };
        let value = self.src[self.pos..end].to_string();
        self.advance_to(end);
        self.finish_attribute(Some(value));
        self.state = State::TagSpace;
        true
    }

    fn on_attr_value(&mut self, ch: char, quote: ValueQuote) {
        let ends = match quote {
            ValueQuote::Quoted(q) => ch == q,
            ValueQuote::Unquoted => ch.is_whitespace() || ch == '>',
        };
        if !ends {
            self.attr_value.push(ch);
            self.bump();
            return;
        }
        if ch != '>' {
            self.bump();
        }
        let value = std::mem::take(&mut self.attr_value);
        self.finish_attribute(Some(value));
        self.state = State::TagSpace;
    }

    fn on_tag_close(&mut self, ch: char) {
        self.bump();
        if ch != '>' {
            self.tag.push(ch);
            return;
        }
        let name = self.tag.trim().to_string();
        if let Some(depth) = self.stack.iter().rposition(|open| *open == name) {
            self.stack.truncate(depth);
        }
        self.events.push(TemplateEvent::CloseTag {
            name,
            line: self.line,
        });
        self.state = State::Text;
    }

    fn on_comment(&mut self, end: &'static str) {
        match self.src[self.pos..].find(end) {
            Some(offset) => {
                self.advance_to(self.pos + offset + end.len());
                self.state = State::Text;
            }
            None => self.halted = true,
        }
    }

    fn on_verbatim(&mut self) {
        let needle = format!("</{}", self.verbatim_tag);
        let rest = &self.src[self.pos..];
        let line = self.line;
        match rest.to_ascii_lowercase().find(&needle) {
            Some(offset) => {
                self.events.push(TemplateEvent::Raw {
                    tag: self.verbatim_tag.clone(),
                    content: rest[..offset].to_string(),
                    line,
                });
                self.advance_to(self.pos + offset + 2);
                self.tag.clear();
                self.state = State::TagClose;
            }
            None => {
                self.events.push(TemplateEvent::Raw {
                    tag: self.verbatim_tag.clone(),
                    content: rest.to_string(),
                    line,
                });
                self.halted = true;
            }
        }
    }

    fn finish_attribute(&mut self, value: Option<String>) {
        if !self.attr_name.is_empty() {
            let name = std::mem::take(&mut self.attr_name);
            self.attrs.push((name, value, self.attr_line));
        }
    }

    fn finish_open_tag(&mut self, self_closing: bool) {
        let name = std::mem::take(&mut self.tag);
        let lower = name.to_ascii_lowercase();
        self.events.push(TemplateEvent::OpenTag {
            name: name.clone(),
            self_closing,
            line: self.tag_line,
        });
        for (attr, value, line) in std::mem::take(&mut self.attrs) {
            self.events.push(TemplateEvent::Attribute {
                tag: name.clone(),
                name: attr,
                value,
                line,
                enclosing: self.stack.clone(),
            });
        }

        if self_closing || VOID_ELEMENTS.contains(&lower.as_str()) {
            self.state = State::Text;
        } else if VERBATIM_ELEMENTS.contains(&lower.as_str()) {
            self.verbatim_tag = lower;
            self.state = State::Verbatim;
        } else {
            self.stack.push(name);
            self.state = State::Text;
        }
    }

    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        self.events.push(TemplateEvent::Text {
            text,
            line: self.text_line,
            enclosing: self.stack.clone(),
        });
    }
}
