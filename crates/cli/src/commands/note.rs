// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-module notes

use crate::error::AfError;
use crate::session::CliApp;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum NoteCommand {
    /// Replace the note for a module
    Set {
        /// Module id
        module: String,
        /// Note text
        text: String,
    },
    /// Show one note, or all of them
    Show {
        /// Module id
        module: Option<String>,
    },
}

pub async fn handle(command: NoteCommand, app: &CliApp) -> anyhow::Result<()> {
    match command {
        NoteCommand::Set { module, text } => {
            app.ledger().save_note(&module, &text).await?;
            println!("Saved note for module {}", module);
        }
        NoteCommand::Show { module: Some(module) } => {
            let state = app.ledger().snapshot().await;
            let note = state
                .note(&module)
                .ok_or_else(|| AfError::new(format!("no note for module {}", module)))?;
            println!("{}", note);
        }
        NoteCommand::Show { module: None } => {
            let state = app.ledger().snapshot().await;
            if state.notes.is_empty() {
                println!("No notes");
            }
            for (module, text) in &state.notes {
                println!("[{}] {}", module, text);
            }
        }
    }
    Ok(())
}
