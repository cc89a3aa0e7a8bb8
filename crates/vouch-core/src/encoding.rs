//! Tagged-array serde encoding of hash trees
//!
//! Every node is a sequence whose first element is an integer tag:
//!
//! | tag | node      | remaining elements       |
//! |-----|-----------|--------------------------|
//! | 0   | `Empty`   | none                     |
//! | 1   | `Fork`    | left subtree, right subtree |
//! | 2   | `Labeled` | label bytes, subtree     |
//! | 3   | `Leaf`    | value bytes              |
//! | 4   | `Pruned`  | 32 digest bytes          |
//!
//! Byte fields go through `serde_bytes` so binary formats emit byte strings.
//! Nested trees are decoded recursively; the depth bound comes from the
//! format's own recursion limit.

use crate::hash::Digest;
use crate::tree::HashTree;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Deserializer, Serialize};
use serde_bytes::{ByteBuf, Bytes};
use std::fmt;

const TAG_EMPTY: u8 = 0;
const TAG_FORK: u8 = 1;
const TAG_LABELED: u8 = 2;
const TAG_LEAF: u8 = 3;
const TAG_PRUNED: u8 = 4;

impl Serialize for HashTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HashTree::Empty => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(&TAG_EMPTY)?;
                seq.end()
            }
            HashTree::Fork(left, right) => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element(&TAG_FORK)?;
                seq.serialize_element(left.as_ref())?;
                seq.serialize_element(right.as_ref())?;
                seq.end()
            }
            HashTree::Labeled(label, subtree) => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element(&TAG_LABELED)?;
                seq.serialize_element(Bytes::new(label))?;
                seq.serialize_element(subtree.as_ref())?;
                seq.end()
            }
            HashTree::Leaf(value) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(&TAG_LEAF)?;
                seq.serialize_element(Bytes::new(value))?;
                seq.end()
            }
            HashTree::Pruned(digest) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(&TAG_PRUNED)?;
                seq.serialize_element(Bytes::new(digest))?;
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for HashTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(HashTreeVisitor)
    }
}

struct HashTreeVisitor;

impl<'de> Visitor<'de> for HashTreeVisitor {
    type Value = HashTree;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a tagged hash tree node")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<HashTree, A::Error> {
        let tag: u8 = next(&mut seq, 0)?;
        let node = match tag {
            TAG_EMPTY => HashTree::Empty,
            TAG_FORK => {
                let left: HashTree = next(&mut seq, 1)?;
                let right: HashTree = next(&mut seq, 2)?;
                HashTree::fork(left, right)
            }
            TAG_LABELED => {
                let label: ByteBuf = next(&mut seq, 1)?;
                let subtree: HashTree = next(&mut seq, 2)?;
                HashTree::labeled(label.into_vec(), subtree)
            }
            TAG_LEAF => {
                let value: ByteBuf = next(&mut seq, 1)?;
                HashTree::Leaf(value.into_vec())
            }
            TAG_PRUNED => {
                let bytes: ByteBuf = next(&mut seq, 1)?;
                let digest: Digest = bytes.as_slice().try_into().map_err(|_| {
                    de::Error::invalid_length(bytes.len(), &"a 32-byte pruned digest")
                })?;
                HashTree::Pruned(digest)
            }
            other => {
                return Err(de::Error::invalid_value(
                    de::Unexpected::Unsigned(u64::from(other)),
                    &"a hash tree tag between 0 and 4",
                ))
            }
        };

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(format!(
                "trailing elements in hash tree node with tag {tag}"
            )));
        }
        Ok(node)
    }
}

fn next<'de, A, T>(seq: &mut A, index: usize) -> Result<T, A::Error>
where
    A: SeqAccess<'de>,
    T: Deserialize<'de>,
{
    seq.next_element()?
        .ok_or_else(|| de::Error::invalid_length(index, &"a complete hash tree node"))
}
