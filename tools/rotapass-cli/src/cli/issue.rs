// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use rotapass_crypto::OddLengthHexPolicy;
use rotapass_ticket::{derive_batch, Event, EventDetails, IssuanceRequest, TicketKeyFields};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
pub(crate) struct Args {
    /// Event name, e.g. "Cardinals vs Dolphins"
    #[clap(long)]
    event_name: String,

    /// Event location, e.g. "Hard Rock Stadium"
    #[clap(long)]
    event_location: String,

    /// Human-readable date and time, e.g. "Sun, Oct 27, 2024, 1:00 PM"
    #[clap(long)]
    event_datetime: String,

    #[clap(long)]
    section: String,

    #[clap(long)]
    row: String,

    /// Seat number assigned to the first ticket
    #[clap(long, default_value_t = 1)]
    start_seat: u32,

    /// Number of tickets to issue (1-8)
    #[clap(long, default_value_t = 1)]
    count: usize,

    /// Free-form note attached to the event, e.g. "Sold to John"
    #[clap(long)]
    note: Option<String>,

    /// Base raw token shared by every seat of the batch; the per-seat suffix
    /// keeps the resulting credentials unique
    #[clap(long)]
    raw_token: Option<String>,

    /// Customer key material (hex) shared by every seat of the batch
    #[clap(long)]
    customer_key: Option<String>,

    /// Event key material (hex) shared by every seat of the batch
    #[clap(long)]
    event_key: Option<String>,

    /// Replicate the legacy issuer's behaviour of silently dropping a
    /// trailing hex nibble instead of rejecting odd-length keys
    #[clap(long)]
    truncate_odd_hex: bool,

    /// Write the issued event to this file instead of stdout
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn execute(args: Args) -> anyhow::Result<()> {
    let slot = TicketKeyFields {
        raw_token: args.raw_token,
        customer_key: args.customer_key,
        event_key: args.event_key,
    };

    let request = IssuanceRequest {
        start_seat: args.start_seat,
        keys: vec![slot; args.count],
        details: EventDetails {
            event_name: args.event_name.clone(),
            event_location: args.event_location,
            event_datetime: args.event_datetime,
            section: args.section,
            row: args.row,
        },
        odd_hex_policy: if args.truncate_odd_hex {
            OddLengthHexPolicy::TruncateFinalNibble
        } else {
            OddLengthHexPolicy::Reject
        },
    };

    let tickets = derive_batch(&request)?;

    let slug: String = args
        .event_name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let event = Event {
        event_id: format!("{slug}-{:08x}", rand::random::<u32>()),
        note: args.note.unwrap_or_default(),
        tickets,
    };

    let json = serde_json::to_string_pretty(&event)?;
    match args.output {
        Some(path) => {
            fs::write(&path, json)?;
            info!("issued event {} written to {}", event.event_id, path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
