//! Harvest - translatable string extraction for UI codebases
//!
//! Harvest finds human-facing text in Vue, Svelte, HTML/Handlebars and
//! JavaScript/TypeScript sources, decides which strings need translation,
//! assigns each one a stable hierarchical key and keeps every locale file in
//! step with the base locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Tokenizer, classifier, extractors, key store and the batch pipeline
//! - `mcp`: Model Context Protocol server implementation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod utils;
