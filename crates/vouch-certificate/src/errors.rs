//! Certificate verification errors
//!
//! Every variant aborts the enclosing `verify()` call. A signature that simply
//! does not match is *not* an error: `verify()` resolves to `Ok(false)` for
//! that case, so callers can tell "inauthentic" apart from "unusable".

/// Errors raised while decoding, verifying, or reading a certificate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CertificateError {
    /// A lookup was attempted before a successful `verify()`
    #[error("Certificate has not been verified")]
    UnverifiedAccess,

    /// The envelope or tree could not be decoded
    #[error("Decode error: {message}")]
    Decode {
        /// Error message from the decoder
        message: String,
    },

    /// No delegation and no trust anchor configured
    #[error("No root key configured for a root-signed certificate")]
    MissingRootKey,

    /// The delegation's embedded certificate did not verify
    #[error("Delegation certificate for subnet {subnet_id} failed verification")]
    DelegationVerificationFailed {
        /// Hex-encoded subnet id of the delegation
        subnet_id: String,
    },

    /// The verified delegate tree has no key for the delegated subnet
    #[error("Public key for subnet {subnet_id} not found in delegation certificate")]
    SubnetKeyNotFound {
        /// Hex-encoded subnet id of the delegation
        subnet_id: String,
    },

    /// A DER-wrapped public key had the wrong length or prefix
    #[error("Malformed public key: {message}")]
    MalformedPublicKey {
        /// Description of the mismatch
        message: String,
    },

    /// The delegation chain is longer than the configured limit
    #[error("Delegation chain exceeds maximum depth {max}")]
    DelegationDepthExceeded {
        /// Configured maximum depth
        max: usize,
    },

    /// Freshness checking is enabled but the tree carries no time
    #[error("Certificate time not found")]
    MissingTime,

    /// The certificate time leaf is not a valid LEB128 value
    #[error("Invalid certificate time: {message}")]
    InvalidTime {
        /// Description of the encoding problem
        message: String,
    },

    /// The certificate time is further ahead of the clock than the allowed skew
    #[error("Certificate is {ahead_secs}s in the future, maximum skew is {max_skew_secs}s")]
    FutureCertificate {
        /// How far the certificate time is ahead of now, in seconds
        ahead_secs: u64,
        /// Allowed clock skew in seconds
        max_skew_secs: u64,
    },

    /// The certificate is older than the configured maximum age
    #[error("Certificate is {age_secs}s old, maximum allowed is {max_age_secs}s")]
    StaleCertificate {
        /// Age of the certificate in seconds
        age_secs: u64,
        /// Configured maximum age in seconds
        max_age_secs: u64,
    },
}

impl CertificateError {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a malformed public key error
    pub fn malformed_key(message: impl Into<String>) -> Self {
        Self::MalformedPublicKey {
            message: message.into(),
        }
    }

    /// Create an invalid time error
    pub fn invalid_time(message: impl Into<String>) -> Self {
        Self::InvalidTime {
            message: message.into(),
        }
    }

    /// Create a delegation verification failure for `subnet_id`
    pub fn delegation_failed(subnet_id: &[u8]) -> Self {
        Self::DelegationVerificationFailed {
            subnet_id: hex::encode(subnet_id),
        }
    }

    /// Create a missing subnet key error for `subnet_id`
    pub fn subnet_key_not_found(subnet_id: &[u8]) -> Self {
        Self::SubnetKeyNotFound {
            subnet_id: hex::encode(subnet_id),
        }
    }
}

impl From<serde_cbor::Error> for CertificateError {
    fn from(err: serde_cbor::Error) -> Self {
        Self::decode(err.to_string())
    }
}

/// Standard Result type for certificate operations
pub type Result<T> = std::result::Result<T, CertificateError>;
