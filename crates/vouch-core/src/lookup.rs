//! Labeled path lookup
//!
//! A path is an ordered list of labels. At each step the fork spine below the
//! current node is flattened into its non-fork nodes (left to right) and the
//! first `Labeled` node whose label matches byte for byte is descended into.
//! Once the path is exhausted, the node found must be a `Leaf`.
//!
//! Pruned nodes on the spine are opaque and never match, so a lookup through a
//! pruned region reports "not found" rather than an error. Well-formed trees
//! never repeat a label within one fork level; if they do, the leftmost wins.

use crate::tree::HashTree;

/// Resolve `path` against `tree`, returning the leaf value it names.
///
/// Any other outcome (missing label, path ends on a non-leaf, pruned region)
/// is `None`.
pub fn lookup_path<'t, L>(path: &[L], tree: &'t HashTree) -> Option<&'t [u8]>
where
    L: AsRef<[u8]>,
{
    let mut node = tree;
    for label in path {
        node = find_label(label.as_ref(), node)?;
    }
    match node {
        HashTree::Leaf(value) => Some(value),
        _ => None,
    }
}

/// Find the subtree under the first `Labeled` node matching `label` on the
/// fork spine of `tree`.
pub fn find_label<'t>(label: &[u8], tree: &'t HashTree) -> Option<&'t HashTree> {
    flatten_forks(tree)
        .into_iter()
        .find_map(|node| match node {
            HashTree::Labeled(l, subtree) if l.as_slice() == label => Some(subtree.as_ref()),
            _ => None,
        })
}

/// Flatten the fork spine of `tree` into its non-fork nodes, left to right.
///
/// `Empty` contributes nothing; every other non-fork node contributes itself.
pub fn flatten_forks(tree: &HashTree) -> Vec<&HashTree> {
    let mut out = Vec::new();
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        match node {
            HashTree::Empty => {}
            HashTree::Fork(left, right) => {
                stack.push(right.as_ref());
                stack.push(left.as_ref());
            }
            other => out.push(other),
        }
    }
    out
}
