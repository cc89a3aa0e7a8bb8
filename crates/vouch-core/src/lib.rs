//! Vouch Core - Hash Tree Foundation
//!
//! Pure data model and algorithms for the labeled Merkle hash trees carried by
//! state certificates. Nothing in this crate performs signature checks or I/O;
//! it only answers two questions about a tree:
//!
//! - what root digest does it commit to (`reconstruct`), and
//! - what value sits under a given label path (`lookup_path`).
//!
//! Both work over partially pruned trees, which is what makes selective
//! disclosure possible: any subtree off the queried path can be replaced by its
//! digest without changing the root.
//!
//! Hashing goes through the [`HashAlgorithm`] trait so callers can inject the
//! primitive; [`ALGORITHM`] (SHA-256) is the default.

#![forbid(unsafe_code)]

/// Hash capability and domain separation
pub mod hash;

/// Hash tree data model
pub mod tree;

/// Tagged-array serde encoding of hash trees
mod encoding;

/// Root digest reconstruction
pub mod reconstruct;

/// Labeled path lookup
pub mod lookup;

/// Human-readable tree rendering
mod display;

pub use hash::{
    domain_sep, hash, hash_with_domain, hasher, Digest, HashAlgorithm, Hasher, Sha256Algorithm,
    ALGORITHM,
};
pub use lookup::{find_label, flatten_forks, lookup_path};
pub use reconstruct::{reconstruct, reconstruct_with};
pub use tree::HashTree;
