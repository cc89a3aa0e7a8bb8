//! Print the reconstructed root digest of a certificate

use std::path::Path;

pub fn run(path: &Path, is_hex: bool) -> anyhow::Result<String> {
    let cert = super::load_certificate(path, is_hex)?;
    Ok(hex::encode(cert.tree.digest()))
}
