// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use rotapass_crypto::EncodedSecret;
use serde::{Deserialize, Serialize};

/// Stable identifier of one seat within an event, e.g. `seat3`.
pub fn seat_id(seat_number: u32) -> String {
    format!("seat{seat_number}")
}

/// Display-only ticket attributes. None of these carry any security weight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketDetails {
    pub event_name: String,
    pub event_location: String,
    pub event_datetime: String,
    pub section: String,
    pub row: String,
    pub seat: u32,
}

/// A single issued seat credential.
///
/// The encoded secrets are derived once at issuance and owned by the ticket
/// for its whole lifetime; the raw token is unique per ticket because of the
/// mandatory seat suffix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub seat_id: String,
    pub raw_token: String,
    pub customer_secret: EncodedSecret,
    pub event_secret: EncodedSecret,

    #[serde(flatten)]
    pub details: TicketDetails,
}

/// An issued event together with all of its tickets, as handed out by the
/// external event store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,

    #[serde(default)]
    pub note: String,

    pub tickets: Vec<Ticket>,
}

impl Event {
    pub fn ticket(&self, seat_id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.seat_id == seat_id)
    }
}
