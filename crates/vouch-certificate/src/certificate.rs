//! Certificate verification state machine
//!
//! A [`Certificate`] starts `Unverified`. Each `verify()` call runs the whole
//! protocol and leaves it `Verified` or `Failed`:
//!
//! 1. reconstruct the root digest of the tree,
//! 2. resolve the trusted key (root anchor or verified delegation),
//! 3. check the signature over `sep("ic-state-root") ‖ root`,
//! 4. optionally check freshness of the outermost certificate.
//!
//! Lookups are refused with `UnverifiedAccess` unless the last `verify()`
//! succeeded. [`VerifiedCertificate`] is the typed alternative: it can only be
//! obtained from a verified certificate, so its lookups cannot fail that way.

use crate::context::TrustContext;
use crate::der::PublicKey;
use crate::envelope::Cert;
use crate::errors::{CertificateError, Result};
use crate::time::{certificate_time, check_freshness};
use futures::future::BoxFuture;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::SystemTime;
use vouch_core::hash::STATE_ROOT_TAG;
use vouch_core::{domain_sep, lookup_path, reconstruct_with, Digest, HashTree};

/// Where a certificate is in its verification lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationState {
    /// Decoded, not yet verified
    Unverified,
    /// The last `verify()` succeeded under `public_key`
    Verified {
        /// Key the signature was checked against
        public_key: PublicKey,
    },
    /// The last `verify()` returned `false` or failed
    Failed,
}

/// A decoded certificate bound to a trust context
#[derive(Debug)]
pub struct Certificate {
    cert: Cert,
    context: Arc<TrustContext>,
    state: VerificationState,
    pub(crate) trusted_key: OnceCell<PublicKey>,
}

impl Certificate {
    /// Decode `bytes` with the context's decoder. Does not verify anything.
    pub fn from_bytes(bytes: &[u8], context: Arc<TrustContext>) -> Result<Self> {
        let cert = context.decoder().decode(bytes)?;
        Ok(Self::new(cert, context))
    }

    /// Wrap an already decoded certificate
    pub fn new(cert: Cert, context: Arc<TrustContext>) -> Self {
        Self {
            cert,
            context,
            state: VerificationState::Unverified,
            trusted_key: OnceCell::new(),
        }
    }

    /// The decoded payload
    pub fn cert(&self) -> &Cert {
        &self.cert
    }

    /// The trust context this certificate verifies against
    pub fn context(&self) -> &Arc<TrustContext> {
        &self.context
    }

    /// Current verification state
    pub fn state(&self) -> VerificationState {
        self.state
    }

    /// Whether the last `verify()` succeeded
    pub fn is_verified(&self) -> bool {
        matches!(self.state, VerificationState::Verified { .. })
    }

    /// Root digest of the tree under the context's hash algorithm
    pub fn root_digest(&self) -> Digest {
        reconstruct_with(&self.cert.tree, self.context.hasher())
    }

    /// Run the verification protocol.
    ///
    /// Resolves to `Ok(false)` when the signature does not match, and to an
    /// error when the certificate cannot be checked at all. Either way the
    /// state becomes `Failed`.
    pub async fn verify(&mut self) -> Result<bool> {
        self.verify_at_depth(0).await
    }

    pub(crate) fn verify_at_depth(&mut self, depth: usize) -> BoxFuture<'_, Result<bool>> {
        Box::pin(async move {
            let outcome = self.run_protocol(depth).await;
            self.state = match &outcome {
                Ok(Some(public_key)) => VerificationState::Verified {
                    public_key: *public_key,
                },
                Ok(None) | Err(_) => VerificationState::Failed,
            };
            if let Err(err) = &outcome {
                tracing::warn!(depth, error = %err, "Certificate verification failed");
            }
            outcome.map(|key| key.is_some())
        })
    }

    async fn run_protocol(&self, depth: usize) -> Result<Option<PublicKey>> {
        let root_digest = self.root_digest();
        tracing::debug!(
            depth,
            root_digest = %hex::encode(root_digest),
            "Reconstructed certificate root"
        );

        let public_key = self.resolve_trusted_key(depth).await?;

        let mut message = domain_sep(STATE_ROOT_TAG);
        message.extend_from_slice(&root_digest);
        let valid = self
            .context
            .signatures()
            .verify(&public_key, &self.cert.signature, &message)
            .await;
        if !valid {
            tracing::warn!(depth, "Certificate signature does not match root digest");
            return Ok(None);
        }

        if depth == 0 {
            if let Some(max_age) = self.context.max_certificate_age() {
                check_freshness(&self.cert.tree, self.context.clock().now(), max_age)?;
            }
        }

        tracing::debug!(depth, ?public_key, "Certificate verified");
        Ok(Some(public_key))
    }

    /// Look up the leaf at `path`. Fails with `UnverifiedAccess` unless verified.
    pub fn lookup<L: AsRef<[u8]>>(&self, path: &[L]) -> Result<Option<&[u8]>> {
        Ok(lookup_path(path, self.verified_tree()?))
    }

    /// Certified time of the tree. Fails with `UnverifiedAccess` unless verified.
    pub fn time(&self) -> Result<Option<SystemTime>> {
        certificate_time(self.verified_tree()?)
    }

    /// Convert into a [`VerifiedCertificate`], or fail with `UnverifiedAccess`.
    pub fn into_verified(self) -> Result<VerifiedCertificate> {
        match self.state {
            VerificationState::Verified { public_key } => Ok(VerifiedCertificate {
                cert: self.cert,
                public_key,
            }),
            _ => Err(CertificateError::UnverifiedAccess),
        }
    }

    fn verified_tree(&self) -> Result<&HashTree> {
        match self.state {
            VerificationState::Verified { .. } => Ok(&self.cert.tree),
            _ => Err(CertificateError::UnverifiedAccess),
        }
    }
}

/// A certificate whose signature has been checked
#[derive(Debug, Clone)]
pub struct VerifiedCertificate {
    cert: Cert,
    public_key: PublicKey,
}

impl VerifiedCertificate {
    /// Look up the leaf at `path`
    pub fn lookup<L: AsRef<[u8]>>(&self, path: &[L]) -> Option<&[u8]> {
        lookup_path(path, &self.cert.tree)
    }

    /// Certified time of the tree, if it carries one
    pub fn time(&self) -> Result<Option<SystemTime>> {
        certificate_time(&self.cert.tree)
    }

    /// Key that produced the verified signature
    pub fn signing_key(&self) -> &PublicKey {
        &self.public_key
    }
}
