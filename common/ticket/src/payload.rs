// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::{KeyRole, PayloadParseError};
use crate::ticket::Ticket;
use rotapass_crypto::{rotating_code, KeyMaterialError, CODE_DIGITS, ROTATION_PERIOD};
use std::fmt::{self, Display, Formatter};
use time::OffsetDateTime;

/// Field delimiter of the barcode wire format. Forbidden inside raw tokens
/// at derivation time, which is what keeps parsing unambiguous.
pub const PAYLOAD_SEPARATOR: char = ':';

/// The plaintext string handed to the barcode renderer:
/// `{rawToken}:{customerCode}:{eventCode}:{unixSeconds}`.
///
/// Ephemeral by design: constructed once per refresh tick, rendered, then
/// discarded. Field order and delimiter are part of the external contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodePayload(String);

impl BarcodePayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn parse(&self) -> Result<ParsedPayload, PayloadParseError> {
        parse_payload(&self.0)
    }
}

impl Display for BarcodePayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A barcode payload split back into its wire fields, as a scanning system
/// holding the same secrets would see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPayload {
    pub raw_token: String,
    pub customer_code: String,
    pub event_code: String,
    pub timestamp: i64,
}

/// Assemble the payload for one ticket at the given instant.
///
/// Both codes are derived from the same reference instant so they always
/// roll over in lockstep.
pub fn assemble(ticket: &Ticket, at: OffsetDateTime) -> Result<BarcodePayload, KeyMaterialError> {
    let customer_code = rotating_code(&ticket.customer_secret, ROTATION_PERIOD, CODE_DIGITS, at)?;
    let event_code = rotating_code(&ticket.event_secret, ROTATION_PERIOD, CODE_DIGITS, at)?;

    Ok(BarcodePayload(format!(
        "{}{PAYLOAD_SEPARATOR}{customer_code}{PAYLOAD_SEPARATOR}{event_code}{PAYLOAD_SEPARATOR}{}",
        ticket.raw_token,
        at.unix_timestamp()
    )))
}

fn validate_code(code: &str, role: KeyRole) -> Result<String, PayloadParseError> {
    if code.len() != CODE_DIGITS as usize || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(PayloadParseError::MalformedCode {
            role,
            code: code.to_string(),
        });
    }
    Ok(code.to_string())
}

/// Split a payload string back into its fields.
pub fn parse_payload(raw: &str) -> Result<ParsedPayload, PayloadParseError> {
    // raw tokens cannot contain the separator, so the three rightmost fields
    // are always the codes and the timestamp
    let mut fields = raw.rsplitn(4, PAYLOAD_SEPARATOR);

    let (Some(timestamp), Some(event_code), Some(customer_code), Some(raw_token)) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(PayloadParseError::MissingFields);
    };

    if raw_token.is_empty() {
        return Err(PayloadParseError::EmptyRawToken);
    }

    let timestamp: i64 =
        timestamp
            .parse()
            .map_err(|source| PayloadParseError::MalformedTimestamp {
                raw: timestamp.to_string(),
                source,
            })?;

    Ok(ParsedPayload {
        raw_token: raw_token.to_string(),
        customer_code: validate_code(customer_code, KeyRole::Customer)?,
        event_code: validate_code(event_code, KeyRole::Event)?,
        timestamp,
    })
}
