//! Hash capability and domain separation
//!
//! Hashing is a pure, synchronous operation, so it is modelled as a plain trait
//! rather than an async capability. Every digest the hash tree produces is
//! domain separated: the hashed message is prefixed with a one-byte length and
//! the bytes of a fixed context tag. The tags and the prefixing scheme are part
//! of the wire protocol and must not change.
//!
//! Current default algorithm: **SHA-256** (32-byte output).

use sha2::{Digest as _, Sha256};
use std::fmt;

/// A 32-byte hash digest
pub type Digest = [u8; 32];

/// Domain tag for `Empty` nodes
pub const EMPTY_TAG: &str = "ic-hashtree-empty";
/// Domain tag for `Fork` nodes
pub const FORK_TAG: &str = "ic-hashtree-fork";
/// Domain tag for `Labeled` nodes
pub const LABELED_TAG: &str = "ic-hashtree-labeled";
/// Domain tag for `Leaf` nodes
pub const LEAF_TAG: &str = "ic-hashtree-leaf";
/// Domain tag for the message signed over a state root
pub const STATE_ROOT_TAG: &str = "ic-state-root";

/// Synchronous trait for cryptographic hashing
///
/// Implementations must be deterministic: the same input always produces the
/// same digest.
pub trait HashAlgorithm: Send + Sync + fmt::Debug {
    /// Hash arbitrary bytes to a 32-byte digest
    fn hash(&self, data: &[u8]) -> Digest;

    /// Create an incremental hasher for multi-part hashing
    fn hasher(&self) -> Box<dyn Hasher>;
}

/// Trait for incremental hashing of multi-part data
pub trait Hasher: Send {
    /// Update the hasher with more data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hasher and return the 32-byte digest
    fn finalize(self: Box<Self>) -> Digest;
}

/// SHA-256 hash implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Algorithm;

impl HashAlgorithm for Sha256Algorithm {
    fn hash(&self, data: &[u8]) -> Digest {
        Sha256::digest(data).into()
    }

    fn hasher(&self) -> Box<dyn Hasher> {
        Box::new(Sha256Hasher(Sha256::new()))
    }
}

struct Sha256Hasher(Sha256);

impl Hasher for Sha256Hasher {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Digest {
        self.0.finalize().into()
    }
}

/// The default hash algorithm used when none is injected.
pub const ALGORITHM: Sha256Algorithm = Sha256Algorithm;

/// Hash `data` with the default algorithm
#[inline]
pub fn hash(data: &[u8]) -> Digest {
    ALGORITHM.hash(data)
}

/// Create an incremental hasher with the default algorithm
#[inline]
pub fn hasher() -> Box<dyn Hasher> {
    ALGORITHM.hasher()
}

/// Build the domain separator for `tag`: one length byte followed by the tag bytes.
///
/// # Panics
/// Panics if `tag` is longer than 255 bytes. Tags are protocol constants, so a
/// longer tag is a programming error rather than bad input.
pub fn domain_sep(tag: &str) -> Vec<u8> {
    let len = u8::try_from(tag.len())
        .unwrap_or_else(|_| panic!("domain tag {tag:?} exceeds 255 bytes"));
    let mut out = Vec::with_capacity(1 + tag.len());
    out.push(len);
    out.extend_from_slice(tag.as_bytes());
    out
}

/// Hash `domain_sep(tag)` followed by each of `parts`, in order.
pub fn hash_with_domain<H>(algorithm: &H, tag: &str, parts: &[&[u8]]) -> Digest
where
    H: HashAlgorithm + ?Sized,
{
    let mut h = algorithm.hasher();
    h.update(&domain_sep(tag));
    for part in parts {
        h.update(part);
    }
    h.finalize()
}
