//! Delegation resolution
//!
//! A certificate without a delegation is signed by the root key from the trust
//! context. One with a delegation is signed by a subnet key, which is trusted
//! only after the embedded delegation certificate verifies in its own right
//! and certifies that key at `["subnet", subnet_id, "public_key"]`. There is
//! no fallback to the root key.

use crate::certificate::Certificate;
use crate::der::{extract_der, PublicKey};
use crate::envelope::Delegation;
use crate::errors::{CertificateError, Result};
use std::sync::Arc;

impl Certificate {
    /// Resolve the key this certificate must be signed by.
    ///
    /// The first successful resolution is cached for later `verify()` calls.
    pub(crate) async fn resolve_trusted_key(&self, depth: usize) -> Result<PublicKey> {
        if let Some(key) = self.trusted_key.get() {
            return Ok(*key);
        }

        let key = match &self.cert().delegation {
            None => *self
                .context()
                .root_key()
                .ok_or(CertificateError::MissingRootKey)?,
            Some(delegation) => self.resolve_delegation(delegation, depth).await?,
        };
        Ok(*self.trusted_key.get_or_init(|| key))
    }

    async fn resolve_delegation(&self, delegation: &Delegation, depth: usize) -> Result<PublicKey> {
        let max = self.context().max_delegation_depth();
        if depth >= max {
            return Err(CertificateError::DelegationDepthExceeded { max });
        }

        let mut delegate =
            Certificate::from_bytes(&delegation.certificate, Arc::clone(self.context()))?;
        tracing::debug!(
            depth = depth + 1,
            subnet_id = %hex::encode(&delegation.subnet_id),
            "Verifying delegation certificate"
        );

        if !delegate.verify_at_depth(depth + 1).await? {
            return Err(CertificateError::delegation_failed(&delegation.subnet_id));
        }

        let path: [&[u8]; 3] = [b"subnet", delegation.subnet_id.as_slice(), b"public_key"];
        let der = delegate
            .lookup(&path)?
            .ok_or_else(|| CertificateError::subnet_key_not_found(&delegation.subnet_id))?;
        extract_der(der)
    }
}
