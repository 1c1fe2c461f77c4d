// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use rotapass_crypto::KeyMaterialError;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;
use thiserror::Error;

/// The two independently-keyed code streams combined into one payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyRole {
    Customer,
    Event,
}

impl Display for KeyRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Customer => "customer".fmt(f),
            KeyRole::Event => "event".fmt(f),
        }
    }
}

#[derive(Debug, Error)]
pub enum IssuanceError {
    #[error("requested batch of {size} tickets is outside the allowed range of 1-8")]
    InvalidBatchSize { size: usize },

    #[error("invalid {role} key material for ticket at index {ticket}: {source}")]
    InvalidKeyMaterial {
        ticket: usize,
        role: KeyRole,
        source: KeyMaterialError,
    },

    #[error("raw token for ticket at index {ticket} contains the ':' payload separator")]
    DisallowedTokenCharacter { ticket: usize },
}

#[derive(Debug, Error)]
pub enum PayloadParseError {
    #[error("the payload does not contain all four colon-separated fields")]
    MissingFields,

    #[error("the payload raw token is empty")]
    EmptyRawToken,

    #[error("the {role} code '{code}' is not a 6-digit value")]
    MalformedCode { role: KeyRole, code: String },

    #[error("the payload timestamp '{raw}' is not a valid unix timestamp: {source}")]
    MalformedTimestamp { raw: String, source: ParseIntError },
}
