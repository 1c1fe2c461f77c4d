// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::KeyMaterialError;
use crate::keys::EncodedSecret;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;
use time::OffsetDateTime;

/// Width of every code placed in a barcode payload.
pub const CODE_DIGITS: u32 = 6;

/// Validity window of a single code. Barcode refresh is aligned to the same
/// cadence so a displayed code is never stale for longer than one window.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(15);

type HmacSha1 = Hmac<Sha1>;

/// A fixed-width numeric one-time code. Valid for a single time window,
/// never persisted and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatingCode(String);

impl RotatingCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RotatingCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Counter value shared by every code generated within the same window.
pub fn code_window(period: Duration, at: OffsetDateTime) -> u64 {
    let ts = at.unix_timestamp();

    // just panic on pre-1970 timestamps...
    assert!(ts >= 0);

    ts as u64 / period.as_secs()
}

/// RFC 4226 HMAC-based one-time code over an explicit counter value.
pub fn hotp_sha1(key: &[u8], counter: u64, digits: u32) -> RotatingCode {
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha1::new_from_slice(key)
        .expect("HMAC should be able to take key of any size!");
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // dynamic truncation (RFC 4226 §5.3): low nibble of the final byte picks
    // the offset of a 31-bit big-endian word within the digest
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let truncated = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);

    let code = truncated % 10u32.pow(digits);
    RotatingCode(format!("{code:0width$}", width = digits as usize))
}

/// Time-based code for the window containing `at`, per RFC 6238 conventions.
///
/// For a fixed secret, period and digit count the output is identical for any
/// two instants within the same window, which is what lets an independent
/// verifier holding the same secret and clock recompute it.
pub fn rotating_code(
    secret: &EncodedSecret,
    period: Duration,
    digits: u32,
    at: OffsetDateTime,
) -> Result<RotatingCode, KeyMaterialError> {
    let key = secret.decode()?;
    Ok(hotp_sha1(key.as_bytes(), code_window(period, at), digits))
}
