//! Certificate envelope types and decoding
//!
//! The envelope is a map with a `tree`, a `signature` byte string, and an
//! optional `delegation` whose `certificate` field is itself an encoded
//! envelope. Decoding is a capability ([`CertificateDecoder`]) so the binary
//! format stays outside the verification logic; [`CborDecoder`] is the default.

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use vouch_core::HashTree;

/// A decoded certificate. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cert {
    /// The (possibly pruned) state tree
    pub tree: HashTree,
    /// Signature over the domain-separated root digest
    #[serde(with = "serde_bytes")]
    pub signature: Vec<u8>,
    /// Delegation from the root authority, absent for root-signed certificates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegation: Option<Delegation>,
}

/// A signed grant letting a subnet sign certificates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    /// Subnet the grant is for
    #[serde(with = "serde_bytes")]
    pub subnet_id: Vec<u8>,
    /// Encoded certificate carrying the subnet's public key
    #[serde(with = "serde_bytes")]
    pub certificate: Vec<u8>,
}

/// Decodes raw envelope bytes into a [`Cert`]
pub trait CertificateDecoder: Send + Sync {
    /// Decode `bytes`, failing with `CertificateError::Decode` on malformed input
    fn decode(&self, bytes: &[u8]) -> Result<Cert>;
}

/// CBOR envelope decoder
///
/// A leading self-describing tag (55799) is accepted and ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CborDecoder;

impl CertificateDecoder for CborDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Cert> {
        Ok(serde_cbor::from_slice(bytes)?)
    }
}

/// Encode `cert` as CBOR
pub fn encode_cert(cert: &Cert) -> Result<Vec<u8>> {
    Ok(serde_cbor::to_vec(cert)?)
}
