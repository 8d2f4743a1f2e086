//! Propagates base-locale structure into the other locales.

use super::{LocaleNode, LocaleTree};

/// Result of filling one target tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub tree: LocaleTree,
    /// Leaves copied from the base tree.
    pub added: usize,
}

/// Copies every key missing from `target` out of `base`.
///
/// Existing target leaves are never overwritten, even when the base holds a branch
/// at the same key, and keys only the target has are kept.
pub fn fill(base: &LocaleTree, target: &LocaleTree) -> SyncOutcome {
    let mut tree = target.clone();
    let added = fill_into(base, &mut tree);
    SyncOutcome { tree, added }
}

fn fill_into(base: &LocaleTree, target: &mut LocaleTree) -> usize {
    let mut added = 0;
    for (key, base_node) in base.entries() {
        if target.get(key).is_none() {
            added += base_node.leaf_count();
            target.insert(key.clone(), base_node.clone());
            continue;
        }
        if let (LocaleNode::Branch(base_child), Some(LocaleNode::Branch(target_child))) =
            (base_node, target.get_mut(key))
        {
            added += fill_into(base_child, target_child);
        }
    }
    added
}
