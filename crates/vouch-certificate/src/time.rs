//! Certificate time
//!
//! Certified trees carry a `["time"]` leaf: nanoseconds since the Unix epoch
//! as unsigned LEB128.

use crate::errors::{CertificateError, Result};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use vouch_core::{lookup_path, HashTree};

/// Label path of the certificate time leaf
pub const TIME_PATH: [&[u8]; 1] = [b"time"];

/// Decode an unsigned LEB128 value that must consume all of `bytes`.
pub fn decode_leb128(bytes: &[u8]) -> Result<u64> {
    let mut value: u64 = 0;
    for (i, byte) in bytes.iter().enumerate() {
        let shift = 7 * i;
        let chunk = u64::from(byte & 0x7f);
        if shift >= 64 || (shift > 0 && chunk >> (64 - shift) != 0) {
            return Err(CertificateError::invalid_time("LEB128 value overflows u64"));
        }
        value |= chunk << shift;
        if byte & 0x80 == 0 {
            if i + 1 != bytes.len() {
                return Err(CertificateError::invalid_time("trailing bytes after LEB128 value"));
            }
            return Ok(value);
        }
    }
    Err(CertificateError::invalid_time("truncated LEB128 value"))
}

/// Read the certificate time from `tree`, if present.
pub fn certificate_time(tree: &HashTree) -> Result<Option<SystemTime>> {
    let Some(bytes) = lookup_path(&TIME_PATH, tree) else {
        return Ok(None);
    };
    let nanos = decode_leb128(bytes)?;
    Ok(Some(UNIX_EPOCH + Duration::from_nanos(nanos)))
}

/// How far a certificate time may run ahead of the local clock
pub const MAX_CLOCK_SKEW: Duration = Duration::from_secs(5 * 60);

/// Check that `tree` was certified no more than `max_age` before `now`.
///
/// Times up to [`MAX_CLOCK_SKEW`] ahead of `now` count as age zero; anything
/// further ahead is rejected.
pub fn check_freshness(tree: &HashTree, now: SystemTime, max_age: Duration) -> Result<()> {
    let certified_at = certificate_time(tree)?.ok_or(CertificateError::MissingTime)?;
    let age = match now.duration_since(certified_at) {
        Ok(age) => age,
        Err(ahead) => {
            let ahead = ahead.duration();
            if ahead > MAX_CLOCK_SKEW {
                return Err(CertificateError::FutureCertificate {
                    ahead_secs: ahead.as_secs(),
                    max_skew_secs: MAX_CLOCK_SKEW.as_secs(),
                });
            }
            Duration::ZERO
        }
    };
    if age > max_age {
        return Err(CertificateError::StaleCertificate {
            age_secs: age.as_secs(),
            max_age_secs: max_age.as_secs(),
        });
    }
    Ok(())
}

/// Encode `value` as unsigned LEB128
pub fn encode_leb128(mut value: u64) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}
