//! In-memory form of one locale file.

use std::{collections::BTreeMap, path::Path};

use serde::Serialize;
use serde_json::Value;

use super::StoreError;

/// Recursive map of string leaves, kept in lexicographic key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocaleTree {
    entries: BTreeMap<String, LocaleNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocaleNode {
    Leaf(String),
    Branch(LocaleTree),
}

impl LocaleNode {
    pub fn leaf_count(&self) -> usize {
        match self {
            LocaleNode::Leaf(_) => 1,
            LocaleNode::Branch(tree) => tree.leaf_count(),
        }
    }
}

impl LocaleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses locale JSON. `origin` is only used for error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, StoreError> {
        let parse_error = |message: String| StoreError::Parse {
            path: origin.to_path_buf(),
            message,
        };
        let value: Value = serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        Self::from_value(&value, &mut Vec::new()).map_err(parse_error)
    }

    fn from_value(value: &Value, path: &mut Vec<String>) -> Result<Self, String> {
        let Value::Object(map) = value else {
            return Err(if path.is_empty() {
                "top-level value must be an object".to_string()
            } else {
                format!("`{}` must be a string or an object", path.join("."))
            });
        };

        let mut tree = LocaleTree::new();
        for (key, child) in map {
            path.push(key.clone());
            let node = match child {
                Value::String(s) => LocaleNode::Leaf(s.clone()),
                Value::Object(_) => LocaleNode::Branch(Self::from_value(child, path)?),
                other => {
                    return Err(format!(
                        "`{}` holds {}, expected a string or an object",
                        path.join("."),
                        describe(other)
                    ));
                }
            };
            path.pop();
            tree.entries.insert(key.clone(), node);
        }
        Ok(tree)
    }

    /// Pretty JSON with 2-space indentation and a trailing newline.
    pub fn to_json_string(&self) -> String {
        let mut out = serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &LocaleNode)> {
        self.entries.iter()
    }

    pub fn get(&self, key: &str) -> Option<&LocaleNode> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut LocaleNode> {
        self.entries.get_mut(key)
    }

    pub fn insert(&mut self, key: String, node: LocaleNode) -> Option<LocaleNode> {
        self.entries.insert(key, node)
    }

    /// Looks up a node by path segments.
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&LocaleNode> {
        let (last, parents) = path.split_last()?;
        let mut tree = self;
        for segment in parents {
            match tree.entries.get(segment.as_ref())? {
                LocaleNode::Branch(child) => tree = child,
                LocaleNode::Leaf(_) => return None,
            }
        }
        tree.entries.get(last.as_ref())
    }

    /// Number of leaves under a path; the whole tree for an empty path.
    pub fn leaf_count_at<S: AsRef<str>>(&self, path: &[S]) -> usize {
        if path.is_empty() {
            return self.leaf_count();
        }
        self.get_path(path).map_or(0, LocaleNode::leaf_count)
    }

    pub fn leaf_count(&self) -> usize {
        self.entries.values().map(LocaleNode::leaf_count).sum()
    }

    /// Writes a leaf, creating intermediate objects as needed.
    ///
    /// Fails without modifying the tree when a prefix is already a string or the
    /// full path is already an object.
    pub fn insert_leaf<S: AsRef<str>>(&mut self, path: &[S], value: String) -> Result<(), StoreError> {
        let conflict = |depth: usize| StoreError::PathConflict {
            key: join(path, path.len()),
            blocked_by: join(path, depth),
        };

        // Validate first so a failure leaves no empty branches behind.
        let mut tree: &LocaleTree = self;
        for (depth, segment) in path.iter().enumerate() {
            match tree.entries.get(segment.as_ref()) {
                None => break,
                Some(LocaleNode::Branch(child)) if depth + 1 < path.len() => tree = child,
                Some(LocaleNode::Leaf(_)) if depth + 1 == path.len() => break,
                Some(_) => return Err(conflict(depth + 1)),
            }
        }

        let Some((last, parents)) = path.split_last() else {
            return Ok(());
        };
        let mut tree = self;
        for (depth, segment) in parents.iter().enumerate() {
            let node = tree
                .entries
                .entry(segment.as_ref().to_string())
                .or_insert_with(|| LocaleNode::Branch(LocaleTree::new()));
            match node {
                LocaleNode::Branch(child) => tree = child,
                LocaleNode::Leaf(_) => return Err(conflict(depth + 1)),
            }
        }
        tree.entries
            .insert(last.as_ref().to_string(), LocaleNode::Leaf(value));
        Ok(())
    }

    /// Every leaf as (path segments, value), in lexicographic order.
    pub fn leaves(&self) -> Vec<(Vec<String>, String)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut Vec::new(), &mut out);
        out
    }

    fn collect_leaves(&self, prefix: &mut Vec<String>, out: &mut Vec<(Vec<String>, String)>) {
        for (key, node) in &self.entries {
            prefix.push(key.clone());
            match node {
                LocaleNode::Leaf(value) => out.push((prefix.clone(), value.clone())),
                LocaleNode::Branch(child) => child.collect_leaves(prefix, out),
            }
            prefix.pop();
        }
    }
}

fn join<S: AsRef<str>>(path: &[S], depth: usize) -> String {
    path[..depth]
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::Array(_) => "an array",
        Value::String(_) => "a string",
        Value::Object(_) => "an object",
    }
}
