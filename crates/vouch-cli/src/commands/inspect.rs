//! Decode a certificate and describe it without verifying anything

use std::fmt::Write;
use std::path::Path;
use vouch_certificate::{CborDecoder, Cert, CertificateDecoder};

/// Delegation levels decoded and shown before the report stops descending
const MAX_SHOWN_DELEGATIONS: usize = 4;

pub fn run(path: &Path, is_hex: bool) -> anyhow::Result<String> {
    let cert = super::load_certificate(path, is_hex)?;
    describe(&cert, 0)
}

fn describe(cert: &Cert, level: usize) -> anyhow::Result<String> {
    let pad = "  ".repeat(level);
    let mut out = String::new();
    writeln!(out, "{pad}Root digest: {}", hex::encode(cert.tree.digest()))?;
    writeln!(out, "{pad}Signature: {} bytes", cert.signature.len())?;
    match &cert.delegation {
        None => writeln!(out, "{pad}Delegation: none")?,
        Some(delegation) => {
            writeln!(out, "{pad}Delegation: subnet {}", hex::encode(&delegation.subnet_id))?;
            if level >= MAX_SHOWN_DELEGATIONS {
                writeln!(out, "{pad}  <nested delegation not shown>")?;
            } else {
                match CborDecoder.decode(&delegation.certificate) {
                    Ok(inner) => out.push_str(&describe(&inner, level + 1)?),
                    Err(e) => {
                        tracing::warn!(error = %e, "Delegation certificate does not decode");
                        writeln!(out, "{pad}  <undecodable: {e}>")?;
                    }
                }
            }
        }
    }
    writeln!(out, "{pad}Tree:")?;
    for line in cert.tree.to_string().lines() {
        writeln!(out, "{pad}  {line}")?;
    }
    Ok(out)
}
