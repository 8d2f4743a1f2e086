//! Data types passed between the extraction and key-assignment stages.

mod candidate;

pub use candidate::{ExtractedCandidate, FileExtraction, Kind, Rejection, SourceLocation};
