// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::clock::Clock;
use crate::error::DisplayError;
use crate::renderer::BarcodeRenderer;
use rotapass_crypto::ROTATION_PERIOD;
use rotapass_ticket::{assemble, Ticket};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// Periodic driver that regenerates the barcode payload of a single ticket
/// on the code rotation cadence and hands each payload to the renderer.
///
/// Generation is pure computation over immutable secrets, so the refresher
/// owns everything it touches and no locking is involved; cancellation is
/// the only shared state.
pub struct BarcodeRefresher<R, C> {
    ticket: Ticket,
    renderer: R,
    clock: C,
}

impl<R, C> BarcodeRefresher<R, C>
where
    R: BarcodeRenderer,
    C: Clock,
{
    pub fn new(ticket: Ticket, renderer: R, clock: C) -> Self {
        BarcodeRefresher {
            ticket,
            renderer,
            clock,
        }
    }

    fn refresh(&mut self) -> Result<(), DisplayError> {
        let payload = assemble(&self.ticket, self.clock.now()).map_err(|source| {
            DisplayError::InvalidTicketSecret {
                seat_id: self.ticket.seat_id.clone(),
                source,
            }
        })?;
        trace!("rendering fresh payload for {}", self.ticket.seat_id);
        self.renderer
            .render(&payload)
            .map_err(|source| DisplayError::RenderFailure { source })
    }

    pub async fn run(mut self, shutdown: CancellationToken) {
        debug!("barcode refresher for {} is running", self.ticket.seat_id);

        // the first tick completes immediately so a newly displayed ticket is
        // never left showing a stale (or absent) barcode for a full window
        let mut refresh_interval = tokio::time::interval(ROTATION_PERIOD);
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    trace!("BarcodeRefresher: Received shutdown");
                    break;
                }
                _ = refresh_interval.tick() => {
                    if let Err(err) = self.refresh() {
                        // transient failures recover on the next window; the
                        // cadence itself already throttles retries
                        warn!("failed to refresh barcode for {}: {err}", self.ticket.seat_id);
                    }
                }
            }
        }
        debug!("BarcodeRefresher: Exiting");
    }
}

/// Spawn a refresher for the given ticket, bound to the provided
/// cancellation token.
pub fn start_barcode_refresher<R, C>(
    ticket: Ticket,
    renderer: R,
    clock: C,
    cancel_token: CancellationToken,
) -> JoinHandle<()>
where
    R: BarcodeRenderer,
    C: Clock,
{
    debug!("creating barcode refresher for {}", ticket.seat_id);
    let refresher = BarcodeRefresher::new(ticket, renderer, clock);
    tokio::spawn(refresher.run(cancel_token))
}
