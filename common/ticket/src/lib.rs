// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod defaults;
pub mod derivation;
pub mod error;
pub mod payload;
pub mod ticket;

pub use derivation::{derive_batch, EventDetails, IssuanceRequest, TicketKeyFields};
pub use error::{IssuanceError, KeyRole, PayloadParseError};
pub use payload::{assemble, parse_payload, BarcodePayload, ParsedPayload, PAYLOAD_SEPARATOR};
pub use ticket::{seat_id, Event, Ticket, TicketDetails};
