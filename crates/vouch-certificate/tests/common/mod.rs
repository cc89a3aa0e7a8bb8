//! Shared fixtures for certificate verification tests.
//!
//! Pairing arithmetic is out of reach here, so signatures come from a keyed
//! hash: `sig = SHA-256(key ‖ message)`. The verification logic only sees the
//! `SignatureVerifier` capability, so this exercises the same code paths.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use vouch_certificate::time::encode_leb128;
use vouch_certificate::{
    encode_cert, CborDecoder, Cert, CertificateDecoder, Clock, Delegation, PublicKey, Result,
    SignatureVerifier, TrustContext, KEY_LENGTH,
};
use vouch_core::hash::STATE_ROOT_TAG;
use vouch_core::{domain_sep, hash, HashTree};

pub const ROOT_KEY: [u8; KEY_LENGTH] = [1u8; KEY_LENGTH];
pub const SUBNET_KEY: [u8; KEY_LENGTH] = [2u8; KEY_LENGTH];
pub const OTHER_KEY: [u8; KEY_LENGTH] = [3u8; KEY_LENGTH];
pub const SUBNET_ID: &[u8] = b"subnet-0001";

/// Certificate time used by fixtures: 2024-01-01T00:00:00Z
pub const CERT_TIME_SECS: u64 = 1_704_067_200;

/// Keyed-hash stand-in for BLS verification
#[derive(Debug, Default)]
pub struct HashSignatures;

#[async_trait]
impl SignatureVerifier for HashSignatures {
    async fn verify(&self, public_key: &PublicKey, signature: &[u8], message: &[u8]) -> bool {
        signature == sign(public_key, message).as_slice()
    }
}

pub fn sign(key: &PublicKey, message: &[u8]) -> Vec<u8> {
    let mut input = key.as_bytes().to_vec();
    input.extend_from_slice(message);
    hash(&input).to_vec()
}

/// Sign the root of `tree` the way a subnet or root authority would
pub fn sign_tree(key: &PublicKey, tree: &HashTree) -> Vec<u8> {
    let mut message = domain_sep(STATE_ROOT_TAG);
    message.extend_from_slice(&tree.digest());
    sign(key, &message)
}

/// Clock pinned to a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

pub fn at_secs(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

/// Decoder that counts how many envelopes it has decoded
#[derive(Debug, Default)]
pub struct CountingDecoder {
    pub calls: AtomicUsize,
}

impl CertificateDecoder for CountingDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Cert> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        CborDecoder.decode(bytes)
    }
}

pub fn root_key() -> PublicKey {
    PublicKey::from_raw(ROOT_KEY)
}

pub fn subnet_key() -> PublicKey {
    PublicKey::from_raw(SUBNET_KEY)
}

pub fn other_key() -> PublicKey {
    PublicKey::from_raw(OTHER_KEY)
}

/// Context trusting [`root_key`]
pub fn context() -> Arc<TrustContext> {
    Arc::new(TrustContext::new(Arc::new(HashSignatures)).with_root_key(root_key()))
}

pub fn time_leaf(secs: u64) -> HashTree {
    let nanos = u64::try_from(Duration::from_secs(secs).as_nanos()).unwrap_or(u64::MAX);
    HashTree::labeled("time", HashTree::leaf(encode_leb128(nanos)))
}

/// A small state tree: a request status plus the certificate time
pub fn state_tree() -> HashTree {
    HashTree::fork(
        HashTree::labeled(
            "request_status",
            HashTree::labeled(
                b"req-1".to_vec(),
                HashTree::fork(
                    HashTree::labeled("reply", HashTree::leaf(b"DIDL\x00\x00".to_vec())),
                    HashTree::labeled("status", HashTree::leaf(b"replied".to_vec())),
                ),
            ),
        ),
        time_leaf(CERT_TIME_SECS),
    )
}

/// Tree certifying `subnet_key_der` for `subnet_id`
pub fn subnet_tree(subnet_id: &[u8], subnet_key_der: Vec<u8>) -> HashTree {
    HashTree::fork(
        HashTree::labeled(
            "subnet",
            HashTree::labeled(
                subnet_id.to_vec(),
                HashTree::fork(
                    HashTree::labeled("canister_ranges", HashTree::leaf(vec![0x80])),
                    HashTree::labeled("public_key", HashTree::leaf(subnet_key_der)),
                ),
            ),
        ),
        time_leaf(CERT_TIME_SECS - 86_400),
    )
}

pub fn signed_cert(tree: HashTree, key: &PublicKey, delegation: Option<Delegation>) -> Cert {
    Cert {
        signature: sign_tree(key, &tree),
        tree,
        delegation,
    }
}

/// Delegation to `subnet_key` signed by `signer`
pub fn delegation(subnet_key: &PublicKey, signer: &PublicKey) -> Delegation {
    let cert = signed_cert(subnet_tree(SUBNET_ID, subnet_key.to_der()), signer, None);
    Delegation {
        subnet_id: SUBNET_ID.to_vec(),
        certificate: encode_cert(&cert).unwrap_or_default(),
    }
}

/// State tree signed by the subnet key under a root-signed delegation
pub fn delegated_cert() -> Cert {
    signed_cert(
        state_tree(),
        &subnet_key(),
        Some(delegation(&subnet_key(), &root_key())),
    )
}
