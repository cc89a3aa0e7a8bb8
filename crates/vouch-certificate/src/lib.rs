//! State certificate verification for Vouch
//!
//! Proves that values in a signed, possibly pruned hash tree belong to a root
//! digest that a trusted authority signed, following an optional delegation
//! from the root authority to a subnet. Values are only readable after that
//! proof succeeds.
//!
//! ```ignore
//! let context = Arc::new(TrustContext::new(verifier).with_root_key(root_key));
//! let mut certificate = Certificate::from_bytes(&response, context)?;
//! if certificate.verify().await? {
//!     let status = certificate.lookup(&[b"request_status".as_slice(), id, b"status"])?;
//! }
//! ```

#![forbid(unsafe_code)]

/// Verification state machine and gated lookup
pub mod certificate;
/// Verification configuration
pub mod config;
/// Trust anchor, limits and injected capabilities
pub mod context;
mod delegation;
/// DER public key unwrapping
pub mod der;
/// Injected signature and clock capabilities
pub mod effects;
/// Certificate envelope types and decoding
pub mod envelope;
/// Error types
pub mod errors;
/// Certificate time and freshness
pub mod time;

pub use certificate::{Certificate, VerificationState, VerifiedCertificate};
pub use config::{ConfigError, VerificationConfig};
pub use context::TrustContext;
pub use der::{extract_der, wrap_der, PublicKey, DER_PREFIX, KEY_LENGTH};
pub use effects::{Clock, SignatureVerifier, SystemClock};
pub use envelope::{encode_cert, CborDecoder, Cert, CertificateDecoder, Delegation};
pub use errors::{CertificateError, Result};
