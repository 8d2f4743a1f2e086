use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::classify::RejectReason;

/// Semantic role of an extracted string, used as the second-to-last key segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Text,
    Heading,
    Button,
    Label,
    Placeholder,
    Title,
    Alt,
    AriaLabel,
    Toast,
    Link,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Text => "text",
            Kind::Heading => "heading",
            Kind::Button => "button",
            Kind::Label => "label",
            Kind::Placeholder => "placeholder",
            Kind::Title => "title",
            Kind::Alt => "alt",
            Kind::AriaLabel => "aria_label",
            Kind::Toast => "toast",
            Kind::Link => "link",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
}

/// A string accepted by the classifier, before it has a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedCandidate {
    pub text: String,
    pub kind: Kind,
    pub parent_context: Option<String>,
    pub attribute_name: Option<String>,
    pub source_location: Option<SourceLocation>,
}

/// A string the classifier turned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub text: String,
    pub reason: RejectReason,
    pub line: usize,
}

/// Everything one extractor produced for one file.
#[derive(Debug, Default)]
pub struct FileExtraction {
    pub candidates: Vec<ExtractedCandidate>,
    pub rejections: Vec<Rejection>,
}
