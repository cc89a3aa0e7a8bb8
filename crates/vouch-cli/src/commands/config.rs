//! Validate a verification config file

use anyhow::Context;
use std::fmt::Write;
use std::path::Path;
use vouch_certificate::VerificationConfig;

pub fn run(path: &Path) -> anyhow::Result<String> {
    let config = VerificationConfig::load(path)
        .with_context(|| format!("Config {} is not usable", path.display()))?;
    tracing::info!(path = %path.display(), "Config is valid");

    let mut out = String::new();
    match config.root_public_key()? {
        Some(key) => writeln!(out, "Root key: {}", hex::encode(key.as_bytes()))?,
        None => writeln!(out, "Root key: not set")?,
    }
    writeln!(out, "Max delegation depth: {}", config.max_delegation_depth)?;
    match config.max_certificate_age_secs {
        Some(secs) => writeln!(out, "Max certificate age: {secs}s")?,
        None => writeln!(out, "Max certificate age: unchecked")?,
    }
    Ok(out)
}
