// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::clock::Clock;
use crate::error::DisplayError;
use crate::refresher::start_barcode_refresher;
use crate::renderer::BarcodeRenderer;
use rotapass_ticket::{Event, Ticket};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Look up one ticket of one event the way the display route does, surfacing
/// "not found" states instead of panicking on bad identifiers.
pub fn find_ticket<'a>(
    events: &'a [Event],
    event_id: &str,
    seat_id: &str,
) -> Result<&'a Ticket, DisplayError> {
    let event = events
        .iter()
        .find(|event| event.event_id == event_id)
        .ok_or_else(|| DisplayError::MissingEvent {
            event_id: event_id.to_string(),
        })?;

    event.ticket(seat_id).ok_or_else(|| DisplayError::MissingSeat {
        event_id: event_id.to_string(),
        seat_id: seat_id.to_string(),
    })
}

struct ActiveDisplay {
    seat_id: String,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// One viewer's display surface. Owns the refresh task of the currently
/// shown ticket; at most one refresh cycle is ever in flight per session.
///
/// Sessions are plain values: several independent sessions can run
/// concurrently, each with its own timer.
#[derive(Default)]
pub struct DisplaySession {
    active: Option<ActiveDisplay>,
}

impl DisplaySession {
    pub fn new() -> Self {
        DisplaySession::default()
    }

    /// Seat currently being displayed, if any.
    pub fn active_seat(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.seat_id.as_str())
    }

    /// Show the given ticket, replacing whatever was displayed before.
    ///
    /// The previous refresher is cancelled and awaited before the new one
    /// starts, so no payload for the old ticket can be rendered after this
    /// returns, and the new ticket's first payload is generated immediately
    /// rather than after a full window.
    pub async fn switch_to<R, C>(&mut self, ticket: Ticket, renderer: R, clock: C)
    where
        R: BarcodeRenderer,
        C: Clock,
    {
        self.close().await;

        let seat_id = ticket.seat_id.clone();
        debug!("switching display to {seat_id}");

        let cancel = CancellationToken::new();
        let handle = start_barcode_refresher(ticket, renderer, clock, cancel.clone());
        self.active = Some(ActiveDisplay {
            seat_id,
            cancel,
            handle,
        });
    }

    /// Tear the display down. Idempotent; the refresh timer is stopped on
    /// every exit path before the session is considered closed.
    pub async fn close(&mut self) {
        if let Some(active) = self.active.take() {
            active.cancel.cancel();
            if let Err(err) = active.handle.await {
                warn!("refresher task for {} failed to join: {err}", active.seat_id);
            }
        }
    }
}
