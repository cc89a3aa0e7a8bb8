//! DER public key unwrapping
//!
//! Subnet and root keys travel as a fixed ASN.1 `SubjectPublicKeyInfo` whose
//! algorithm identifier names BLS12-381 G2. Only that exact wrapper is
//! accepted; anything else is rejected rather than guessed at.

use crate::errors::{CertificateError, Result};
use std::fmt;

/// Length of a raw BLS12-381 G2 public key
pub const KEY_LENGTH: usize = 96;

/// ASN.1 prefix for a BLS12-381 G2 key:
/// `SEQUENCE { SEQUENCE { OID bls-signature, OID bls12-381-g2 }, BIT STRING }`
pub const DER_PREFIX: [u8; 37] = [
    0x30, 0x81, 0x82, 0x30, 0x1d, 0x06, 0x0d, 0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0xdc, 0x7c, 0x05,
    0x03, 0x01, 0x02, 0x01, 0x06, 0x0c, 0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0xdc, 0x7c, 0x05, 0x03,
    0x02, 0x01, 0x03, 0x61, 0x00,
];

/// A raw 96-byte BLS12-381 G2 public key
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; KEY_LENGTH]);

impl PublicKey {
    /// Wrap raw key bytes
    pub fn from_raw(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Unwrap a DER-encoded key
    pub fn from_der(der: &[u8]) -> Result<Self> {
        extract_der(der)
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// DER encoding of this key
    pub fn to_der(&self) -> Vec<u8> {
        wrap_der(self)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}…)", hex::encode(&self.0[..8]))
    }
}

/// Validate the fixed DER wrapper and return the 96 raw key bytes.
pub fn extract_der(der: &[u8]) -> Result<PublicKey> {
    let expected = DER_PREFIX.len() + KEY_LENGTH;
    if der.len() != expected {
        return Err(CertificateError::malformed_key(format!(
            "expected {expected} bytes, got {}",
            der.len()
        )));
    }

    let (prefix, key) = der.split_at(DER_PREFIX.len());
    if prefix != DER_PREFIX.as_slice() {
        return Err(CertificateError::malformed_key(
            "DER prefix does not name a BLS12-381 G2 key",
        ));
    }

    let mut raw = [0u8; KEY_LENGTH];
    raw.copy_from_slice(key);
    Ok(PublicKey(raw))
}

/// Wrap a raw key in the DER prefix accepted by [`extract_der`].
pub fn wrap_der(key: &PublicKey) -> Vec<u8> {
    let mut der = Vec::with_capacity(DER_PREFIX.len() + KEY_LENGTH);
    der.extend_from_slice(&DER_PREFIX);
    der.extend_from_slice(&key.0);
    der
}
