// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use rotapass_crypto::KeyMaterialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("event {event_id} was not found in the local store")]
    MissingEvent { event_id: String },

    #[error("seat {seat_id} does not exist for event {event_id}")]
    MissingSeat { event_id: String, seat_id: String },

    #[error("stored secret for seat {seat_id} could not be decoded: {source}")]
    InvalidTicketSecret {
        seat_id: String,
        source: KeyMaterialError,
    },

    #[error("the barcode renderer failed: {source}")]
    RenderFailure { source: crate::renderer::RenderError },
}
