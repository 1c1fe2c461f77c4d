// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use anyhow::bail;
use clap::Parser;
use rotapass_display::{find_ticket, BarcodeRenderer, DisplaySession, RenderError, SystemClock};
use rotapass_ticket::{BarcodePayload, Event};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
pub(crate) struct Args {
    /// Path to the event JSON produced by `issue`
    #[clap(long)]
    event_file: PathBuf,

    /// Seat to display, e.g. `seat3`. Defaults to the first ticket of the
    /// event
    #[clap(long)]
    seat: Option<String>,
}

/// Renderer standing in for the barcode symbology encoder: each refreshed
/// payload is written to stdout as-is.
struct StdoutRenderer;

impl BarcodeRenderer for StdoutRenderer {
    fn render(&mut self, payload: &BarcodePayload) -> Result<(), RenderError> {
        println!("{payload}");
        Ok(())
    }
}

pub(crate) async fn execute(args: Args) -> anyhow::Result<()> {
    let event: Event = serde_json::from_str(&fs::read_to_string(&args.event_file)?)?;

    let ticket = match &args.seat {
        Some(seat_id) => {
            find_ticket(std::slice::from_ref(&event), &event.event_id, seat_id)?.clone()
        }
        None => match event.tickets.first() {
            Some(ticket) => ticket.clone(),
            None => bail!("event {} has no tickets", event.event_id),
        },
    };

    info!(
        "displaying {} for {} ({} - {})",
        ticket.seat_id, ticket.details.event_name, ticket.details.section, ticket.details.row
    );

    let mut session = DisplaySession::new();
    session.switch_to(ticket, StdoutRenderer, SystemClock).await;

    tokio::signal::ctrl_c().await?;
    info!("received interrupt, closing display session");
    session.close().await;

    Ok(())
}
