//! Harvesting engine.
//!
//! Data flows leaves-first through these modules:
//!
//! - `file_scanner`: finds source files under the configured includes
//! - `template` / `parsers`: turn markup and script source into events or ASTs
//! - `classify`: decides whether a string is prose worth translating
//! - `extract`: per-dialect extractors producing candidates
//! - `store`: key assignment, locale trees on disk, synchronization
//! - `pipeline`: the batch run tying everything together

pub mod classify;
mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod pipeline;
pub mod store;
pub mod template;

pub use context::{HarvestContext, Overrides};
