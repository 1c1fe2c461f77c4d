// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::KeyMaterialError;
use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Behaviour applied when operator-supplied key material contains an odd
/// number of hex digits after normalisation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum OddLengthHexPolicy {
    /// Refuse the key material outright.
    #[default]
    Reject,

    /// Drop the trailing nibble. This reproduces the behaviour of the legacy
    /// issuer and is only needed for compatibility with tickets it produced.
    TruncateFinalNibble,
}

/// Raw HMAC key material backing one rotating-code stream.
///
/// The bytes never leave this boundary; only the base32 rendering
/// ([EncodedSecret]) and codes derived from it do.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Normalise operator-supplied hex into key material. Anything that is
    /// not a hex digit is discarded before decoding.
    pub fn from_hex(raw: &str, policy: OddLengthHexPolicy) -> Result<Self, KeyMaterialError> {
        let mut filtered: String = raw.chars().filter(char::is_ascii_hexdigit).collect();

        if filtered.len() % 2 == 1 {
            match policy {
                OddLengthHexPolicy::Reject => {
                    return Err(KeyMaterialError::OddHexLength {
                        digits: filtered.len(),
                    })
                }
                OddLengthHexPolicy::TruncateFinalNibble => {
                    filtered.pop();
                }
            }
        }

        if filtered.is_empty() {
            return Err(KeyMaterialError::EmptyKeyMaterial);
        }

        Ok(Secret(hex::decode(&filtered)?))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, KeyMaterialError> {
        if bytes.is_empty() {
            return Err(KeyMaterialError::EmptyKeyMaterial);
        }
        Ok(Secret(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// One-time conversion into the text form consumed by the code generator.
    pub fn encode(&self) -> EncodedSecret {
        EncodedSecret(BASE32_NOPAD.encode(&self.0))
    }
}

/// Unpadded RFC 4648 base32 rendering of a [Secret], produced once per ticket
/// and cached for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedSecret(String);

impl EncodedSecret {
    /// Normalise and encode operator-supplied hex key material in one step.
    pub fn from_hex(raw: &str, policy: OddLengthHexPolicy) -> Result<Self, KeyMaterialError> {
        Ok(Secret::from_hex(raw, policy)?.encode())
    }

    /// Recover the exact key bytes this secret was produced from.
    pub fn decode(&self) -> Result<Secret, KeyMaterialError> {
        Secret::from_bytes(BASE32_NOPAD.decode(self.0.as_bytes())?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EncodedSecret {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn encoding_round_trips_to_original_bytes() {
        let bytes = hex!("6dfb0b853dbfa5309a9763d3c0fdd2727de9b2e6");
        let encoded = EncodedSecret::from_hex(
            "6dfb0b853dbfa5309a9763d3c0fdd2727de9b2e6",
            OddLengthHexPolicy::Reject,
        )
        .unwrap();

        assert_eq!(bytes.as_ref(), encoded.decode().unwrap().as_bytes());
    }

    #[test]
    fn twenty_byte_key_encodes_to_32_unpadded_characters() {
        let encoded = EncodedSecret::from_hex(
            "6dfb0b853dbfa5309a9763d3c0fdd2727de9b2e6",
            OddLengthHexPolicy::Reject,
        )
        .unwrap();

        assert_eq!("NX5QXBJ5X6STBGUXMPJ4B7OSOJ66TMXG", encoded.as_str());
        assert_eq!(32, encoded.as_str().len());
        assert!(!encoded.as_str().contains('='));
    }

    #[test]
    fn non_hex_characters_are_discarded_before_decoding() {
        let plain =
            EncodedSecret::from_hex("deadbeef", OddLengthHexPolicy::Reject).unwrap();
        let noisy =
            EncodedSecret::from_hex("de:ad be-efZZ", OddLengthHexPolicy::Reject).unwrap();

        assert_eq!(plain, noisy);
    }

    #[test]
    fn case_is_normalised() {
        let lower = EncodedSecret::from_hex("f03c6f06", OddLengthHexPolicy::Reject).unwrap();
        let upper = EncodedSecret::from_hex("F03C6F06", OddLengthHexPolicy::Reject).unwrap();

        assert_eq!(lower, upper);
    }

    #[test]
    fn empty_key_material_is_rejected() {
        assert!(matches!(
            EncodedSecret::from_hex("", OddLengthHexPolicy::Reject),
            Err(KeyMaterialError::EmptyKeyMaterial)
        ));

        // nothing left after filtering
        assert!(matches!(
            EncodedSecret::from_hex("ZZZZ-????", OddLengthHexPolicy::Reject),
            Err(KeyMaterialError::EmptyKeyMaterial)
        ));
    }

    #[test]
    fn odd_length_hex_is_rejected_by_default() {
        assert!(matches!(
            EncodedSecret::from_hex("abcde", OddLengthHexPolicy::Reject),
            Err(KeyMaterialError::OddHexLength { digits: 5 })
        ));
    }

    #[test]
    fn odd_length_hex_can_drop_the_trailing_nibble() {
        let truncated =
            EncodedSecret::from_hex("abcde", OddLengthHexPolicy::TruncateFinalNibble).unwrap();
        let even = EncodedSecret::from_hex("abcd", OddLengthHexPolicy::Reject).unwrap();

        assert_eq!(even, truncated);
    }

    #[test]
    fn single_nibble_truncates_to_nothing() {
        assert!(matches!(
            EncodedSecret::from_hex("a", OddLengthHexPolicy::TruncateFinalNibble),
            Err(KeyMaterialError::EmptyKeyMaterial)
        ));
    }
}
