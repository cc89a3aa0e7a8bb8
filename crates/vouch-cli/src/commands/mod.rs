pub mod config;
pub mod digest;
pub mod inspect;

use anyhow::Context;
use std::path::Path;
use vouch_certificate::{CborDecoder, Cert, CertificateDecoder};

/// Read and decode a certificate file, raw CBOR or hex text
pub fn load_certificate(path: &Path, is_hex: bool) -> anyhow::Result<Cert> {
    let raw = std::fs::read(path)
        .with_context(|| format!("Failed to read certificate file {}", path.display()))?;
    let bytes = if is_hex {
        let text = String::from_utf8(raw).context("Hex certificate is not UTF-8")?;
        let compact: String = text.split_whitespace().collect();
        hex::decode(compact).context("Certificate file is not valid hex")?
    } else {
        raw
    };
    tracing::debug!(bytes = bytes.len(), path = %path.display(), "Decoding certificate");
    Ok(CborDecoder.decode(&bytes)?)
}
