use std::sync::LazyLock;

use regex::Regex;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][\w:-]*(?:\s[^<>]*)?/?>").unwrap());

static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)[\w:@.#\[\]()-]+\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap()
});

static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#\d+|#x[0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]{1,31});").unwrap()
});

/// Framework directives: Vue, Angular, Alpine, Livewire and htmx.
static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|\s)(?:v-(?:if|else-if|else|for|show|model|bind|on|html|text|slot|cloak|once|pre|memo)\b|[:@#][A-Za-z][\w.:-]*=|\*ng[A-Z]\w*|\[\(?[\w.-]+\)?\]=|x-(?:data|show|bind|on|if|for|model|text)\b|wire:\w+|hx-\w+=)",
    )
    .unwrap()
});

/// Template-language blocks: Svelte, Jinja/Liquid, ERB, Handlebars, Angular, Blade.
static BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\{[#/:@](?:if|each|await|else|then|catch|html|const|debug|key|snippet|render)\b|\{%-?\s*\w+.*%\}|<%.*%>|\{\{[#/^>!]|@(?:if|for|switch|case|defer|else)\s*\(|@(?:foreach|section|yield|include|extends)\b",
    )
    .unwrap()
});

pub fn has_tag(text: &str) -> bool {
    TAG_REGEX.is_match(text)
}

pub fn is_markup_content(text: &str) -> bool {
    has_tag(text)
        || ATTRIBUTE_REGEX.is_match(text)
        || ENTITY_REGEX.is_match(text)
        || DIRECTIVE_REGEX.is_match(text)
        || BLOCK_REGEX.is_match(text)
}
