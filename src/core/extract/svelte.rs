use super::{Collector, DialectHint, ExtractOptions, Extractor, markup::extract_template};
use crate::core::{data::FileExtraction, template::TemplateSyntax};

/// Svelte components: single-brace markup, with `<script>` blocks handed to the
/// script extractor as they are met.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvelteExtractor;

impl Extractor for SvelteExtractor {
    fn name(&self) -> &'static str {
        "svelte"
    }

    fn can_handle(&self, hint: &DialectHint) -> bool {
        hint.is_one_of(&["svelte"])
    }

    fn extract(&self, source: &str, options: &ExtractOptions) -> FileExtraction {
        let mut collector = Collector::new(options);
        extract_template(source, TemplateSyntax::SINGLE_BRACE, &mut collector);
        collector.finish()
    }
}
