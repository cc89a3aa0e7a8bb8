//! Hash tree data model
//!
//! A hash tree is a binary tree of forks whose non-fork nodes are labeled
//! edges, leaf values, empty markers, or pruned digests standing in for a
//! subtree the sender chose not to disclose. Each node owns its children.

use crate::hash::Digest;
use crate::reconstruct::reconstruct;

/// A possibly pruned, labeled Merkle hash tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HashTree {
    /// An empty subtree
    #[default]
    Empty,
    /// Two subtrees, hashed left then right
    Fork(Box<HashTree>, Box<HashTree>),
    /// A subtree reached through a byte-string label
    Labeled(Vec<u8>, Box<HashTree>),
    /// A disclosed value
    Leaf(Vec<u8>),
    /// The digest of a subtree that was removed before sending
    Pruned(Digest),
}

impl HashTree {
    /// Create a fork of two subtrees
    pub fn fork(left: HashTree, right: HashTree) -> Self {
        Self::Fork(Box::new(left), Box::new(right))
    }

    /// Create a labeled edge to `subtree`
    pub fn labeled(label: impl Into<Vec<u8>>, subtree: HashTree) -> Self {
        Self::Labeled(label.into(), Box::new(subtree))
    }

    /// Create a leaf holding `value`
    pub fn leaf(value: impl Into<Vec<u8>>) -> Self {
        Self::Leaf(value.into())
    }

    /// Create a pruned node carrying `digest`
    pub fn pruned(digest: Digest) -> Self {
        Self::Pruned(digest)
    }

    /// Root digest of this tree under the default hash algorithm
    pub fn digest(&self) -> Digest {
        reconstruct(self)
    }

    /// Replace this whole tree by its digest.
    ///
    /// The result reconstructs to the same root digest but discloses nothing.
    pub fn prune(&self) -> Self {
        Self::Pruned(self.digest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_box_children() {
        let tree = HashTree::fork(HashTree::leaf(b"a".to_vec()), HashTree::Empty);
        match tree {
            HashTree::Fork(left, right) => {
                assert_eq!(*left, HashTree::Leaf(b"a".to_vec()));
                assert_eq!(*right, HashTree::Empty);
            }
            other => panic!("expected fork, got {other:?}"),
        }
    }

    #[test]
    fn test_prune_preserves_digest() {
        let tree = HashTree::labeled("a", HashTree::leaf(vec![1, 2, 3]));
        let pruned = tree.prune();
        assert!(matches!(pruned, HashTree::Pruned(_)));
        assert_eq!(pruned.digest(), tree.digest());
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(HashTree::default(), HashTree::Empty);
    }
}
