// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Practice time

use crate::output::format_seconds;
use crate::session::CliApp;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum PracticeCommand {
    /// Add practice time
    Add {
        /// Seconds practiced
        seconds: u64,
    },
}

pub async fn handle(command: PracticeCommand, app: &CliApp) -> anyhow::Result<()> {
    match command {
        PracticeCommand::Add { seconds } => {
            let total = app.ledger().add_practice_time(seconds).await?;
            println!("Total practice: {}", format_seconds(total));
        }
    }
    Ok(())
}
