// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, Subcommand};

pub(crate) mod display;
pub(crate) mod issue;

#[derive(Debug, Parser)]
#[clap(author = "Nymtech", version, about = "rotating entry-pass issuance and display")]
pub(crate) struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Derive a batch of seat credentials and write the event as JSON
    Issue(issue::Args),

    /// Drive the rotating barcode display for one seat of an issued event
    Display(display::Args),
}

impl Cli {
    pub(crate) async fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Issue(args) => issue::execute(args),
            Commands::Display(args) => display::execute(args).await,
        }
    }
}
