use super::{Collector, DialectHint, ExtractOptions, Extractor, markup::extract_template, script};
use crate::core::{
    data::FileExtraction,
    template::{TemplateSyntax, extract_container},
};
use crate::utils::line_at;

/// Vue single-file components.
///
/// The outer `<template>` is scanned as mustache markup (nested `<template>`
/// slots stay inside it) and every `<script>` block goes through the script
/// extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct VueExtractor;

impl Extractor for VueExtractor {
    fn name(&self) -> &'static str {
        "vue"
    }

    fn can_handle(&self, hint: &DialectHint) -> bool {
        hint.is_one_of(&["vue"])
    }

    fn extract(&self, source: &str, options: &ExtractOptions) -> FileExtraction {
        let mut collector = Collector::new(options);

        if let Some(template) = extract_container(source, "template") {
            let offset = line_at(source, template.start) - 1;
            collector.shifted(offset, |c| {
                extract_template(template.inner, TemplateSyntax::MUSTACHE, c)
            });
        }

        let mut cursor = 0;
        while let Some(block) = extract_container(&source[cursor..], "script") {
            let start = cursor + block.start;
            let offset = line_at(source, start) - 1;
            collector.shifted(offset, |c| script::extract_script(block.inner, c));
            cursor = start + block.inner.len();
        }

        collector.finish()
    }
}
