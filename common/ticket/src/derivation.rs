// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::defaults::{
    DEFAULT_CUSTOMER_KEY_HEX, DEFAULT_EVENT_KEY_HEX, DEFAULT_RAW_TOKEN, MAX_BATCH_SIZE,
    MIN_BATCH_SIZE,
};
use crate::error::{IssuanceError, KeyRole};
use crate::payload::PAYLOAD_SEPARATOR;
use crate::ticket::{seat_id, Ticket, TicketDetails};
use rotapass_crypto::{EncodedSecret, OddLengthHexPolicy};
use tracing::{debug, info};

/// Operator-supplied credential fields for one ticket slot. Any field left
/// empty falls back to the fixed defaults during derivation.
#[derive(Debug, Clone, Default)]
pub struct TicketKeyFields {
    pub raw_token: Option<String>,
    pub customer_key: Option<String>,
    pub event_key: Option<String>,
}

/// Event-level attributes shared by every ticket of a batch.
#[derive(Debug, Clone, Default)]
pub struct EventDetails {
    pub event_name: String,
    pub event_location: String,
    pub event_datetime: String,
    pub section: String,
    pub row: String,
}

/// A request to issue one batch of seat credentials.
#[derive(Debug, Clone)]
pub struct IssuanceRequest {
    /// Seat number assigned to the first ticket of the batch.
    pub start_seat: u32,

    /// Credential fields per ticket slot; the batch size is the length of
    /// this vector.
    pub keys: Vec<TicketKeyFields>,

    pub details: EventDetails,

    /// How operator hex keys with an odd number of digits are treated.
    pub odd_hex_policy: OddLengthHexPolicy,
}

impl Default for IssuanceRequest {
    fn default() -> Self {
        IssuanceRequest {
            start_seat: 1,
            keys: Vec::new(),
            details: EventDetails::default(),
            odd_hex_policy: OddLengthHexPolicy::default(),
        }
    }
}

/// Credentials resolved for a single seat.
#[derive(Debug, Clone)]
pub struct ResolvedCredentials {
    pub raw_token: String,
    pub customer_secret: EncodedSecret,
    pub event_secret: EncodedSecret,
}

/// Resolve the credential triple for one ticket slot.
///
/// The seat suffix is appended to both supplied and defaulted base tokens;
/// it is what guarantees per-seat uniqueness when an operator reuses a
/// single base token across the whole batch.
pub fn resolve_credentials(
    ticket_index: usize,
    fields: &TicketKeyFields,
    seat_number: u32,
    policy: OddLengthHexPolicy,
) -> Result<ResolvedCredentials, IssuanceError> {
    let base_token = fields.raw_token.as_deref().unwrap_or(DEFAULT_RAW_TOKEN);
    if base_token.contains(PAYLOAD_SEPARATOR) {
        return Err(IssuanceError::DisallowedTokenCharacter {
            ticket: ticket_index,
        });
    }
    let raw_token = format!("{base_token}-seat{seat_number}");

    let customer_hex = fields
        .customer_key
        .as_deref()
        .unwrap_or(DEFAULT_CUSTOMER_KEY_HEX);
    let event_hex = fields.event_key.as_deref().unwrap_or(DEFAULT_EVENT_KEY_HEX);

    let customer_secret = EncodedSecret::from_hex(customer_hex, policy).map_err(|source| {
        IssuanceError::InvalidKeyMaterial {
            ticket: ticket_index,
            role: KeyRole::Customer,
            source,
        }
    })?;
    let event_secret = EncodedSecret::from_hex(event_hex, policy).map_err(|source| {
        IssuanceError::InvalidKeyMaterial {
            ticket: ticket_index,
            role: KeyRole::Event,
            source,
        }
    })?;

    Ok(ResolvedCredentials {
        raw_token,
        customer_secret,
        event_secret,
    })
}

/// Derive all tickets of an issuance request.
///
/// All-or-nothing: the first slot with unusable key material fails the whole
/// batch so that no subset of the requested seats is ever issued.
pub fn derive_batch(request: &IssuanceRequest) -> Result<Vec<Ticket>, IssuanceError> {
    let batch_size = request.keys.len();
    if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&batch_size) {
        return Err(IssuanceError::InvalidBatchSize { size: batch_size });
    }

    let mut tickets = Vec::with_capacity(batch_size);
    for (index, fields) in request.keys.iter().enumerate() {
        let seat_number = request.start_seat + index as u32;
        let resolved = resolve_credentials(index, fields, seat_number, request.odd_hex_policy)?;
        debug!("resolved credentials for seat{seat_number}");

        tickets.push(Ticket {
            seat_id: seat_id(seat_number),
            raw_token: resolved.raw_token,
            customer_secret: resolved.customer_secret,
            event_secret: resolved.event_secret,
            details: TicketDetails {
                event_name: request.details.event_name.clone(),
                event_location: request.details.event_location.clone(),
                event_datetime: request.details.event_datetime.clone(),
                section: request.details.section.clone(),
                row: request.details.row.clone(),
                seat: seat_number,
            },
        });
    }

    info!(
        "issued {batch_size} tickets starting at seat {}",
        request.start_seat
    );
    Ok(tickets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotapass_crypto::KeyMaterialError;

    fn request_of(keys: Vec<TicketKeyFields>) -> IssuanceRequest {
        IssuanceRequest {
            keys,
            ..Default::default()
        }
    }

    #[test]
    fn defaulted_token_gets_the_seat_suffix() {
        let request = IssuanceRequest {
            start_seat: 1,
            keys: vec![TicketKeyFields::default(); 3],
            ..Default::default()
        };

        let tickets = derive_batch(&request).unwrap();
        assert_eq!(
            format!("{DEFAULT_RAW_TOKEN}-seat3"),
            tickets[2].raw_token,
            "seat number must be start_seat + index"
        );
    }

    #[test]
    fn supplied_token_gets_the_seat_suffix_too() {
        let fields = TicketKeyFields {
            raw_token: Some("tok".to_string()),
            ..Default::default()
        };
        let resolved =
            resolve_credentials(0, &fields, 7, OddLengthHexPolicy::Reject).unwrap();

        assert_eq!("tok-seat7", resolved.raw_token);
    }

    #[test]
    fn shared_base_token_still_yields_unique_raw_tokens() {
        let fields = TicketKeyFields {
            raw_token: Some("shared".to_string()),
            ..Default::default()
        };
        let tickets = derive_batch(&request_of(vec![fields; 4])).unwrap();

        for window in tickets.windows(2) {
            assert_ne!(window[0].raw_token, window[1].raw_token);
        }
    }

    #[test]
    fn invalid_key_on_one_slot_fails_the_entire_batch() {
        let mut keys = vec![TicketKeyFields::default(); 5];
        keys[1].customer_key = Some("zzzz".to_string());

        let err = derive_batch(&request_of(keys)).unwrap_err();
        assert!(matches!(
            err,
            IssuanceError::InvalidKeyMaterial {
                ticket: 1,
                role: KeyRole::Customer,
                source: KeyMaterialError::EmptyKeyMaterial,
            }
        ));
    }

    #[test]
    fn event_key_failures_name_the_event_role() {
        let mut keys = vec![TicketKeyFields::default(); 2];
        keys[0].event_key = Some("abc".to_string());

        let err = derive_batch(&request_of(keys)).unwrap_err();
        assert!(matches!(
            err,
            IssuanceError::InvalidKeyMaterial {
                ticket: 0,
                role: KeyRole::Event,
                source: KeyMaterialError::OddHexLength { digits: 3 },
            }
        ));
    }

    #[test]
    fn batch_size_is_bounded() {
        assert!(matches!(
            derive_batch(&request_of(Vec::new())),
            Err(IssuanceError::InvalidBatchSize { size: 0 })
        ));
        assert!(matches!(
            derive_batch(&request_of(vec![TicketKeyFields::default(); 9])),
            Err(IssuanceError::InvalidBatchSize { size: 9 })
        ));

        assert!(derive_batch(&request_of(vec![TicketKeyFields::default(); 8])).is_ok());
    }

    #[test]
    fn tokens_containing_the_separator_are_rejected() {
        let fields = TicketKeyFields {
            raw_token: Some("amb:iguous".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            resolve_credentials(3, &fields, 4, OddLengthHexPolicy::Reject),
            Err(IssuanceError::DisallowedTokenCharacter { ticket: 3 })
        ));
    }

    #[test]
    fn derived_secrets_decode_to_the_supplied_hex() {
        let fields = TicketKeyFields {
            customer_key: Some("00ff10ab".to_string()),
            ..Default::default()
        };
        let resolved =
            resolve_credentials(0, &fields, 1, OddLengthHexPolicy::Reject).unwrap();

        assert_eq!(
            vec![0x00, 0xff, 0x10, 0xab],
            resolved.customer_secret.decode().unwrap().as_bytes()
        );
    }
}
