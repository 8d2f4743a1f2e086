use std::collections::{HashMap, HashSet};

use super::{
    LocaleTree,
    key_store::{DEFAULT_NAMESPACE, content_id},
};
use crate::{core::data::ExtractedCandidate, utils::to_pascal_case};

/// Directory names that usually start the part of a path worth naming, most
/// specific first.
pub const NAMESPACE_ROOTS: &[&str] = &["pages", "app", "views", "screens", "components", "src"];

/// Maps source files to key namespaces.
///
/// Files in the same grouping key (path without extension and without a trailing
/// `index`) always share a namespace. A candidate that already stores texts of
/// the group wins over one that merely holds more leaves, so a group keeps its
/// namespace from one run to the next. The first decision for a grouping key is
/// cached and never revisited during a run.
#[derive(Debug, Default)]
pub struct NamespaceResolver {
    existing: LocaleTree,
    stored: HashSet<String>,
    texts: HashMap<String, Vec<(String, String)>>,
    cache: HashMap<String, String>,
}

impl NamespaceResolver {
    /// `existing` is the base tree as it was on disk before this run.
    pub fn new(existing: LocaleTree) -> Self {
        let stored = existing
            .leaves()
            .into_iter()
            .filter_map(|(path, value)| match path.as_slice() {
                [namespace @ .., kind, _] if !namespace.is_empty() => {
                    Some(content_id(&namespace.join("."), kind, &value))
                }
                _ => None,
            })
            .collect();
        Self {
            existing,
            stored,
            ..Default::default()
        }
    }

    /// Records the texts a file contributes to its group.
    ///
    /// Call for every file before the first [`NamespaceResolver::resolve`].
    pub fn observe(&mut self, relative_path: &str, candidates: &[ExtractedCandidate]) {
        let texts = self.texts.entry(grouping_key(relative_path)).or_default();
        texts.extend(
            candidates
                .iter()
                .map(|c| (c.kind.as_str().to_string(), c.text.trim().to_string())),
        );
    }

    /// Resolves the namespace for a path relative to the source root.
    pub fn resolve(&mut self, relative_path: &str) -> String {
        let key = grouping_key(relative_path);
        if let Some(namespace) = self.cache.get(&key) {
            return namespace.clone();
        }

        let texts = self.texts.get(&key).map(Vec::as_slice).unwrap_or_default();
        let mut best: Option<(&String, (usize, usize))> = None;
        let candidates = candidate_namespaces(&key);
        for candidate in &candidates {
            let own = texts
                .iter()
                .filter(|(kind, text)| self.stored.contains(&content_id(candidate, kind, text)))
                .count();
            let segments: Vec<&str> = candidate.split('.').collect();
            let score = (own, self.existing.leaf_count_at(&segments));
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((candidate, score));
            }
        }
        let namespace = best
            .map(|(candidate, _)| candidate.clone())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        self.cache.insert(key, namespace.clone());
        namespace
    }
}

/// Path without extension and trailing `index`, with `/` separators.
pub fn grouping_key(relative_path: &str) -> String {
    let normalized = relative_path.replace('\\', "/");
    let mut segments: Vec<&str> = normalized
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    if let Some(last) = segments.last_mut()
        && let Some((stem, _)) = last.split_once('.')
    {
        *last = stem;
    }
    if segments.last() == Some(&"index") {
        segments.pop();
    }
    segments.join("/")
}

/// One candidate namespace per root found in the grouping key, in preference
/// order, followed by the whole path.
fn candidate_namespaces(grouping_key: &str) -> Vec<String> {
    let segments: Vec<&str> = grouping_key.split('/').filter(|s| !s.is_empty()).collect();
    let mut candidates: Vec<String> = Vec::new();

    for root in NAMESPACE_ROOTS {
        let Some(pos) = segments.iter().position(|s| s == root) else {
            continue;
        };
        let rest = &segments[pos + 1..];
        let namespace = if rest.is_empty() {
            to_pascal_case(root)
        } else {
            pascal_path(rest)
        };
        push_unique(&mut candidates, namespace);
    }
    push_unique(&mut candidates, pascal_path(&segments));

    if candidates.is_empty() {
        candidates.push(DEFAULT_NAMESPACE.to_string());
    }
    candidates
}

fn pascal_path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| to_pascal_case(s))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

fn push_unique(candidates: &mut Vec<String>, namespace: String) {
    if !namespace.is_empty() && !candidates.contains(&namespace) {
        candidates.push(namespace);
    }
}
