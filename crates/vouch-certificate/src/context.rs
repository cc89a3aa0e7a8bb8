//! Trust context shared by a certificate and its delegates
//!
//! Holds the trust anchor, the verification limits, and every injected
//! capability. Nothing here is global: each caller builds its own context and
//! shares it through an `Arc`.

use crate::config::{ConfigError, VerificationConfig, DEFAULT_MAX_DELEGATION_DEPTH};
use crate::der::PublicKey;
use crate::effects::{Clock, SignatureVerifier, SystemClock};
use crate::envelope::{CborDecoder, CertificateDecoder};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use vouch_core::{HashAlgorithm, Sha256Algorithm};

/// Trust anchor, limits and capabilities for certificate verification
#[derive(Clone)]
pub struct TrustContext {
    root_key: Option<PublicKey>,
    max_delegation_depth: usize,
    max_certificate_age: Option<Duration>,
    hasher: Arc<dyn HashAlgorithm>,
    decoder: Arc<dyn CertificateDecoder>,
    signatures: Arc<dyn SignatureVerifier>,
    clock: Arc<dyn Clock>,
}

impl TrustContext {
    /// Create a context with no root key, default limits, SHA-256, CBOR
    /// decoding and the system clock.
    pub fn new(signatures: Arc<dyn SignatureVerifier>) -> Self {
        Self {
            root_key: None,
            max_delegation_depth: DEFAULT_MAX_DELEGATION_DEPTH,
            max_certificate_age: None,
            hasher: Arc::new(Sha256Algorithm),
            decoder: Arc::new(CborDecoder),
            signatures,
            clock: Arc::new(SystemClock),
        }
    }

    /// Build a context from validated configuration
    pub fn from_config(
        config: &VerificationConfig,
        signatures: Arc<dyn SignatureVerifier>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut context = Self::new(signatures);
        context.root_key = config.root_public_key()?;
        context.max_delegation_depth = config.max_delegation_depth;
        context.max_certificate_age = config.max_certificate_age();
        Ok(context)
    }

    /// Set the trust anchor for root-signed certificates
    pub fn with_root_key(mut self, key: PublicKey) -> Self {
        self.root_key = Some(key);
        self
    }

    /// Set the maximum delegation chain length
    pub fn with_max_delegation_depth(mut self, depth: usize) -> Self {
        self.max_delegation_depth = depth;
        self
    }

    /// Reject outer certificates older than `max_age`
    pub fn with_max_certificate_age(mut self, max_age: Duration) -> Self {
        self.max_certificate_age = Some(max_age);
        self
    }

    /// Inject a hash algorithm
    pub fn with_hasher(mut self, hasher: Arc<dyn HashAlgorithm>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Inject an envelope decoder
    pub fn with_decoder(mut self, decoder: Arc<dyn CertificateDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    /// Inject a clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Configured trust anchor
    pub fn root_key(&self) -> Option<&PublicKey> {
        self.root_key.as_ref()
    }

    /// Maximum delegation chain length
    pub fn max_delegation_depth(&self) -> usize {
        self.max_delegation_depth
    }

    /// Freshness window for outer certificates
    pub fn max_certificate_age(&self) -> Option<Duration> {
        self.max_certificate_age
    }

    pub(crate) fn hasher(&self) -> &dyn HashAlgorithm {
        self.hasher.as_ref()
    }

    pub(crate) fn decoder(&self) -> &dyn CertificateDecoder {
        self.decoder.as_ref()
    }

    pub(crate) fn signatures(&self) -> &dyn SignatureVerifier {
        self.signatures.as_ref()
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl fmt::Debug for TrustContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrustContext")
            .field("root_key", &self.root_key)
            .field("max_delegation_depth", &self.max_delegation_depth)
            .field("max_certificate_age", &self.max_certificate_age)
            .field("hasher", &self.hasher)
            .finish_non_exhaustive()
    }
}
