//! Key assignment and multi-locale storage.
//!
//! - `tree`: in-memory locale trees and their JSON form
//! - `key_store`: collision-safe key registry for the base locale
//! - `namespace`: source path to namespace resolution
//! - `sync`: non-destructive propagation to other locales
//! - `files`: `file` and `directory` layouts on disk

mod error;
mod files;
mod key_store;
mod namespace;
mod slug;
mod sync;
mod tree;

pub use error::StoreError;
pub use files::{LocaleLayout, LocaleStore, PendingWrite, commit};
pub use key_store::{AddedKey, DEFAULT_NAMESPACE, KeyStore, SlugOptions, TranslationKey};
pub use namespace::{NAMESPACE_ROOTS, NamespaceResolver, grouping_key};
pub use slug::{FALLBACK_SLUG, derive_base_slug, numbered_slug};
pub use sync::{SyncOutcome, fill};
pub use tree::{LocaleNode, LocaleTree};
