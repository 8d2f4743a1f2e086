use std::collections::HashMap;

use schemars::JsonSchema;
use serde::Serialize;

use super::{
    LocaleNode, LocaleTree, StoreError,
    slug::{derive_base_slug, numbered_slug},
};
use crate::core::data::Kind;

/// Namespace used when none could be derived.
pub const DEFAULT_NAMESPACE: &str = "Common";

/// Limits applied when deriving a slug from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugOptions {
    pub words: usize,
    pub max_length: usize,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            words: 4,
            max_length: 40,
        }
    }
}

/// A key of the form `namespace.kind.slug`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub struct TranslationKey {
    pub namespace: String,
    pub kind: String,
    pub slug: String,
}

impl TranslationKey {
    pub fn full_key(&self) -> String {
        format!("{}.{}.{}", self.namespace, self.kind, self.slug)
    }
}

/// A key written during this run, with the text stored under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedKey {
    pub key: TranslationKey,
    pub text: String,
}

/// Registry of base-locale keys.
///
/// Each distinct `(namespace, kind, text)` triple gets exactly one key. Slugs that
/// are already taken by a different text in the same bucket get a `_2`, `_3`, ...
/// suffix, so registering the same inputs in the same order always yields the
/// same keys.
#[derive(Debug, Default)]
pub struct KeyStore {
    tree: LocaleTree,
    keys: HashMap<String, TranslationKey>,
    options: SlugOptions,
    added: Vec<AddedKey>,
}

impl KeyStore {
    pub fn new(options: SlugOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Builds a store on top of a persisted base tree.
    ///
    /// Every leaf at least three segments deep is remembered under its content id;
    /// when the same text appears under several slugs, the first in key order wins.
    pub fn primed(tree: LocaleTree, options: SlugOptions) -> Self {
        let mut keys = HashMap::new();
        for (path, value) in tree.leaves() {
            let [namespace @ .., kind, slug] = path.as_slice() else {
                continue;
            };
            if namespace.is_empty() {
                continue;
            }
            let namespace = namespace.join(".");
            keys.entry(content_id(&namespace, kind, &value))
                .or_insert_with(|| TranslationKey {
                    namespace,
                    kind: kind.clone(),
                    slug: slug.clone(),
                });
        }

        Self {
            tree,
            keys,
            options,
            added: Vec::new(),
        }
    }

    /// Returns the key for a text, writing a new leaf on first sight.
    pub fn register(
        &mut self,
        namespace: &str,
        kind: Kind,
        text: &str,
    ) -> Result<TranslationKey, StoreError> {
        let namespace = normalize_namespace(namespace);
        let text = text.trim();
        let id = content_id(&namespace, kind.as_str(), text);
        if let Some(key) = self.keys.get(&id) {
            return Ok(key.clone());
        }

        let base = derive_base_slug(text, self.options.words, self.options.max_length);
        let mut n = 1;
        let (slug, inserted) = loop {
            let slug = numbered_slug(&base, n);
            let path = key_path(&namespace, kind.as_str(), &slug);
            match self.tree.get_path(&path) {
                None => {
                    self.tree.insert_leaf(&path, text.to_string())?;
                    break (slug, true);
                }
                Some(LocaleNode::Leaf(existing)) if existing == text => break (slug, false),
                Some(_) => n += 1,
            }
        };

        let key = TranslationKey {
            namespace,
            kind: kind.as_str().to_string(),
            slug,
        };
        if inserted {
            self.added.push(AddedKey {
                key: key.clone(),
                text: text.to_string(),
            });
        }
        self.keys.insert(id, key.clone());
        Ok(key)
    }

    /// Keys written by [`KeyStore::register`] since the store was created.
    pub fn added(&self) -> &[AddedKey] {
        &self.added
    }

    pub fn tree(&self) -> &LocaleTree {
        &self.tree
    }

    pub fn into_tree(self) -> LocaleTree {
        self.tree
    }
}

fn key_path(namespace: &str, kind: &str, slug: &str) -> Vec<String> {
    namespace
        .split('.')
        .chain([kind, slug])
        .map(str::to_string)
        .collect()
}

pub(super) fn content_id(namespace: &str, kind: &str, text: &str) -> String {
    format!("{namespace}|{kind}|{}", text.trim())
}

fn normalize_namespace(namespace: &str) -> String {
    let joined = namespace
        .split('.')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".");
    if joined.is_empty() {
        DEFAULT_NAMESPACE.to_string()
    } else {
        joined
    }
}
