//! Verification configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! # DER-encoded root key, hex
//! root_key = "308182301d060d2b0601040182dc7c0503010201060c2b0601040182dc7c05030201036100..."
//! max_delegation_depth = 1
//! max_certificate_age_secs = 300
//! ```

use crate::der::PublicKey;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default maximum delegation chain length.
///
/// Root-issued delegations are one level deep, so anything longer fails closed.
pub const DEFAULT_MAX_DELEGATION_DEPTH: usize = 1;

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to load
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is not acceptable
    #[error("Invalid config value for {field}: {message}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        message: String,
    },
}

/// Settings that shape how certificates are verified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerificationConfig {
    /// Hex-encoded, DER-wrapped root public key
    pub root_key: Option<String>,
    /// Maximum number of nested delegations to follow
    pub max_delegation_depth: usize,
    /// Reject outer certificates older than this many seconds
    pub max_certificate_age_secs: Option<u64>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            root_key: None,
            max_delegation_depth: DEFAULT_MAX_DELEGATION_DEPTH,
            max_certificate_age_secs: None,
        }
    }
}

impl VerificationConfig {
    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check limits and decode the root key
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_delegation_depth == 0 {
            return Err(ConfigError::Invalid {
                field: "max_delegation_depth",
                message: "must be at least 1".to_string(),
            });
        }
        if self.max_certificate_age_secs == Some(0) {
            return Err(ConfigError::Invalid {
                field: "max_certificate_age_secs",
                message: "must be positive when set".to_string(),
            });
        }
        self.root_public_key()?;
        Ok(())
    }

    /// Decode the configured root key, if any
    pub fn root_public_key(&self) -> Result<Option<PublicKey>, ConfigError> {
        let Some(encoded) = &self.root_key else {
            return Ok(None);
        };
        let der = hex::decode(encoded.trim()).map_err(|e| ConfigError::Invalid {
            field: "root_key",
            message: format!("not valid hex: {e}"),
        })?;
        let key = PublicKey::from_der(&der).map_err(|e| ConfigError::Invalid {
            field: "root_key",
            message: e.to_string(),
        })?;
        Ok(Some(key))
    }

    /// Configured freshness window
    pub fn max_certificate_age(&self) -> Option<Duration> {
        self.max_certificate_age_secs.map(Duration::from_secs)
    }
}
