// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lesson completion

use crate::config::Config;
use crate::error::AfError;
use crate::session::CliApp;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum LessonCommand {
    /// Mark a lesson as complete
    Complete {
        /// Module id
        module: String,
        /// Lesson index within the module, starting at 0
        index: u32,
    },
}

pub async fn handle(command: LessonCommand, app: &CliApp, config: &Config) -> anyhow::Result<()> {
    match command {
        LessonCommand::Complete { module, index } => {
            let entry = config
                .catalog
                .get(&module)
                .ok_or_else(|| AfError::unknown_module(&module))?;
            if index >= entry.lessons {
                return Err(AfError::lesson_out_of_range(&module, index, entry.lessons).into());
            }

            let newly = app.ledger().mark_lesson_complete(&module, index).await?;
            let done = app.ledger().snapshot().await.module_progress(&module);
            if newly {
                println!(
                    "Completed lesson {}-{} ({}/{} in module {})",
                    module, index, done, entry.lessons, module
                );
            } else {
                println!("Lesson {}-{} was already complete", module, index);
            }
        }
    }
    Ok(())
}
