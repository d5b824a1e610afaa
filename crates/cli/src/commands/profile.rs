// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Learner profile and preferences

use crate::output::{self, OutputFormat};
use crate::session::CliApp;
use af_core::Profile;
use clap::Subcommand;
use serde::Serialize;
use std::fmt;

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Set the learner's name and email
    Set {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Mark onboarding as finished
    Onboard,
    /// Toggle dark mode
    DarkMode,
    /// Show the profile
    Show,
}

#[derive(Serialize)]
#[serde(transparent)]
struct ProfileView(Profile);

impl fmt::Display for ProfileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
        writeln!(f, "Name:       {}", or_dash(&self.0.name))?;
        writeln!(f, "Email:      {}", or_dash(&self.0.email))?;
        writeln!(f, "Enrolled:   {}", or_dash(&self.0.enrollment_date))?;
        writeln!(f, "Onboarded:  {}", if self.0.onboarded { "yes" } else { "no" })?;
        writeln!(f, "Dark mode:  {}", if self.0.dark_mode { "on" } else { "off" })
    }
}

pub async fn handle(
    command: ProfileCommand,
    app: &CliApp,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let ledger = app.ledger();
    match command {
        ProfileCommand::Set { name, email } => {
            ledger.set_user(&name, &email).await?;
            println!("Profile saved");
        }
        ProfileCommand::Onboard => {
            ledger.set_onboarded(true).await?;
            println!("Onboarding complete");
        }
        ProfileCommand::DarkMode => {
            let enabled = ledger.toggle_dark_mode().await?;
            println!("Dark mode {}", if enabled { "on" } else { "off" });
        }
        ProfileCommand::Show => {
            output::print(&ProfileView(ledger.snapshot().await.profile), format);
        }
    }
    Ok(())
}
