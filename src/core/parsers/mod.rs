//! Source parsers.
//!
//! - `script`: JavaScript/TypeScript (with or without JSX) via swc

pub mod script;
