//! Root digest reconstruction
//!
//! Computes the domain-separated digest a hash tree commits to:
//!
//! - `Empty`            → `H(sep("ic-hashtree-empty"))`
//! - `Pruned(d)`        → `d`
//! - `Leaf(v)`          → `H(sep("ic-hashtree-leaf") ‖ v)`
//! - `Labeled(l, t)`    → `H(sep("ic-hashtree-labeled") ‖ l ‖ reconstruct(t))`
//! - `Fork(a, b)`       → `H(sep("ic-hashtree-fork") ‖ reconstruct(a) ‖ reconstruct(b))`
//!
//! The traversal uses an explicit work stack, so adversarially deep trees cost
//! heap rather than call stack.

use crate::hash::{
    hash_with_domain, Digest, HashAlgorithm, ALGORITHM, EMPTY_TAG, FORK_TAG, LABELED_TAG, LEAF_TAG,
};
use crate::tree::HashTree;

enum Step<'a> {
    Visit(&'a HashTree),
    CombineLabeled(&'a [u8]),
    CombineFork,
}

/// Reconstruct the root digest of `tree` with the default hash algorithm
pub fn reconstruct(tree: &HashTree) -> Digest {
    reconstruct_with(tree, &ALGORITHM)
}

/// Reconstruct the root digest of `tree` with an injected hash algorithm
pub fn reconstruct_with<H>(tree: &HashTree, algorithm: &H) -> Digest
where
    H: HashAlgorithm + ?Sized,
{
    let mut work = vec![Step::Visit(tree)];
    let mut digests: Vec<Digest> = Vec::new();

    while let Some(step) = work.pop() {
        match step {
            Step::Visit(HashTree::Empty) => {
                digests.push(hash_with_domain(algorithm, EMPTY_TAG, &[]));
            }
            Step::Visit(HashTree::Pruned(digest)) => digests.push(*digest),
            Step::Visit(HashTree::Leaf(value)) => {
                digests.push(hash_with_domain(algorithm, LEAF_TAG, &[value.as_slice()]));
            }
            Step::Visit(HashTree::Labeled(label, subtree)) => {
                work.push(Step::CombineLabeled(label));
                work.push(Step::Visit(subtree));
            }
            Step::Visit(HashTree::Fork(left, right)) => {
                // Left is visited first, so its digest lands below the right one.
                work.push(Step::CombineFork);
                work.push(Step::Visit(right));
                work.push(Step::Visit(left));
            }
            Step::CombineLabeled(label) => {
                let Some(subtree) = digests.pop() else {
                    unreachable!("labeled node combined before its subtree")
                };
                digests.push(hash_with_domain(
                    algorithm,
                    LABELED_TAG,
                    &[label, subtree.as_slice()],
                ));
            }
            Step::CombineFork => {
                let (Some(right), Some(left)) = (digests.pop(), digests.pop()) else {
                    unreachable!("fork combined before both children")
                };
                digests.push(hash_with_domain(
                    algorithm,
                    FORK_TAG,
                    &[left.as_slice(), right.as_slice()],
                ));
            }
        }
    }

    match digests.pop() {
        Some(root) => root,
        None => unreachable!("reconstruction always yields a root digest"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{domain_sep, hash};

    #[test]
    fn test_empty_digest() {
        assert_eq!(reconstruct(&HashTree::Empty), hash(&domain_sep(EMPTY_TAG)));
    }

    #[test]
    fn test_pruned_is_returned_verbatim() {
        let digest = [0x42u8; 32];
        assert_eq!(reconstruct(&HashTree::Pruned(digest)), digest);
    }

    #[test]
    fn test_leaf_digest() {
        let mut msg = domain_sep(LEAF_TAG);
        msg.extend_from_slice(b"hello");
        assert_eq!(reconstruct(&HashTree::leaf(b"hello".to_vec())), hash(&msg));
    }

    #[test]
    fn test_labeled_digest() {
        let sub = HashTree::leaf(vec![1, 2, 3]);
        let mut msg = domain_sep(LABELED_TAG);
        msg.extend_from_slice(b"a");
        msg.extend_from_slice(&reconstruct(&sub));
        assert_eq!(reconstruct(&HashTree::labeled("a", sub)), hash(&msg));
    }

    #[test]
    fn test_fork_order_matters() {
        let a = HashTree::leaf(b"a".to_vec());
        let b = HashTree::leaf(b"b".to_vec());
        let ab = reconstruct(&HashTree::fork(a.clone(), b.clone()));
        let ba = reconstruct(&HashTree::fork(b.clone(), a.clone()));
        assert_ne!(ab, ba);

        let mut msg = domain_sep(FORK_TAG);
        msg.extend_from_slice(&reconstruct(&a));
        msg.extend_from_slice(&reconstruct(&b));
        assert_eq!(ab, hash(&msg));
    }

    #[test]
    fn test_deep_tree_does_not_overflow_stack() {
        let mut tree = HashTree::leaf(b"bottom".to_vec());
        for _ in 0..50_000 {
            tree = HashTree::labeled("x", tree);
        }
        let digest = reconstruct(&tree);
        assert_eq!(digest.len(), 32);
        // Unwind iteratively so the test itself does not recurse on drop.
        let mut node = tree;
        while let HashTree::Labeled(_, sub) = node {
            node = *sub;
        }
    }
}
