// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyMaterialError {
    #[error("provided key material was empty after hex normalisation")]
    EmptyKeyMaterial,

    #[error("provided key material has an odd number of hex digits ({digits})")]
    OddHexLength { digits: usize },

    #[error("provided key material is not valid hex: {source}")]
    MalformedHex {
        #[from]
        source: hex::FromHexError,
    },

    #[error("the encoded secret is not valid unpadded base32: {source}")]
    MalformedSecret {
        #[from]
        source: data_encoding::DecodeError,
    },
}
