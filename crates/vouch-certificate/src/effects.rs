//! External capabilities consumed by certificate verification
//!
//! Pairing arithmetic and wall-clock time are injected rather than linked, so
//! verification logic stays deterministic and testable without a crypto
//! backend. Hashing and envelope decoding are injected the same way through
//! `vouch_core::HashAlgorithm` and [`crate::CertificateDecoder`].

use crate::der::PublicKey;
use async_trait::async_trait;
use std::time::SystemTime;

/// BLS signature verification capability
///
/// Returns `false` for any signature that does not verify, including
/// signatures that fail to parse. A `false` here is a normal outcome, never an
/// error.
#[async_trait]
pub trait SignatureVerifier: Send + Sync {
    /// Verify `signature` over `message` under `public_key`
    async fn verify(&self, public_key: &PublicKey, signature: &[u8], message: &[u8]) -> bool;
}

/// Wall-clock capability used for certificate freshness checks
pub trait Clock: Send + Sync {
    /// Current time
    fn now(&self) -> SystemTime;
}

/// Clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
