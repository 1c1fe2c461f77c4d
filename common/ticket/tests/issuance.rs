// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use rotapass_crypto::{OddLengthHexPolicy, Secret};
use rotapass_ticket::defaults::DEFAULT_RAW_TOKEN;
use rotapass_ticket::{
    assemble, derive_batch, seat_id, Event, IssuanceError, IssuanceRequest, TicketKeyFields,
};
use time::OffsetDateTime;

fn default_request(count: usize) -> IssuanceRequest {
    IssuanceRequest {
        start_seat: 1,
        keys: vec![TicketKeyFields::default(); count],
        ..Default::default()
    }
}

#[test]
fn issue_then_display_full_flow() {
    // issue a batch with an operator-supplied base token and customer key
    let fields = TicketKeyFields {
        raw_token: Some("tok".to_string()),
        customer_key: Some("6dfb0b853dbfa5309a9763d3c0fdd2727de9b2e6".to_string()),
        event_key: None,
    };
    let request = IssuanceRequest {
        start_seat: 1,
        keys: vec![fields],
        ..Default::default()
    };
    let tickets = derive_batch(&request).unwrap();
    let ticket = &tickets[0];

    // the supplied 20-byte customer key encodes to 32 unpadded base32 characters
    assert_eq!(32, ticket.customer_secret.as_str().len());

    // a verifier holding the same key material derives the same encoded secret
    let independent = Secret::from_hex(
        "6dfb0b853dbfa5309a9763d3c0fdd2727de9b2e6",
        OddLengthHexPolicy::Reject,
    )
    .unwrap()
    .encode();
    assert_eq!(independent, ticket.customer_secret);

    // assemble at a fixed instant and check the wire shape end to end
    let at = OffsetDateTime::from_unix_timestamp(1732650000).unwrap();
    let payload = assemble(ticket, at).unwrap();
    let parsed = payload.parse().unwrap();

    assert_eq!("tok-seat1", parsed.raw_token);
    assert_eq!(6, parsed.customer_code.len());
    assert_eq!(6, parsed.event_code.len());
    assert_eq!(1732650000, parsed.timestamp);
    // codes independently recomputed for both keys in this window
    assert_eq!("tok-seat1:775044:094989:1732650000", payload.as_str());
}

#[test]
fn defaulted_third_seat_of_three_gets_the_expected_token() {
    let tickets = derive_batch(&default_request(3)).unwrap();

    assert_eq!(format!("{DEFAULT_RAW_TOKEN}-seat3"), tickets[2].raw_token);
    assert_eq!(seat_id(3), tickets[2].seat_id);
}

#[test]
fn a_bad_key_in_the_middle_issues_nothing() {
    let mut request = default_request(5);
    request.keys[1].customer_key = Some("xyz".to_string());

    // nothing is partially issued: the whole call fails with a single error
    let err = derive_batch(&request).unwrap_err();
    assert!(matches!(
        err,
        IssuanceError::InvalidKeyMaterial { ticket: 1, .. }
    ));
}

#[test]
fn issued_event_serialises_for_the_event_store() {
    let event = Event {
        event_id: "cardinalsvsdolphins-7a1b2c3d".to_string(),
        note: "Sold to John".to_string(),
        tickets: derive_batch(&default_request(2)).unwrap(),
    };

    let json = serde_json::to_string_pretty(&event).unwrap();
    let restored: Event = serde_json::from_str(&json).unwrap();

    assert_eq!(event.event_id, restored.event_id);
    assert_eq!(event.note, restored.note);
    assert!(restored.ticket("seat2").is_some());
}
