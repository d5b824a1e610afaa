// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Learner access: redeeming a code and checking what can be viewed

use crate::error::AfError;
use crate::output::{self, OutputFormat};
use crate::session::CliApp;
use af_core::Feature;
use clap::Subcommand;
use serde::Serialize;
use std::fmt;

#[derive(Subcommand)]
pub enum AccessCommand {
    /// Redeem an access code and unlock the program
    Redeem {
        /// Access code, e.g. AF-7K2M9P
        code: String,
        /// Who is redeeming (defaults to the profile email)
        #[arg(long)]
        email: Option<String>,
    },
    /// Show the local access state
    Status,
    /// Check whether a feature can be viewed
    Check {
        /// Feature name
        #[arg(default_value = "program")]
        feature: String,
        /// The feature needs the premium tier
        #[arg(long)]
        premium: bool,
    },
}

#[derive(Serialize)]
struct StatusView {
    has_access: bool,
    access_code: String,
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_access {
            writeln!(f, "Access: granted ({})", self.access_code)
        } else {
            writeln!(f, "Access: none")
        }
    }
}

pub async fn handle(
    command: AccessCommand,
    app: &CliApp,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match command {
        AccessCommand::Redeem { code, email } => {
            let identifier = match email {
                Some(email) => email,
                None => app.ledger().snapshot().await.profile.email,
            };
            let code = app
                .redeem_access(&code, &identifier)
                .await
                .map_err(AfError::from_access)?;
            println!("Access granted with {}", code);
        }
        AccessCommand::Status => {
            let access = app.ledger().snapshot().await.access;
            output::print(
                &StatusView {
                    has_access: access.has_access,
                    access_code: access.access_code,
                },
                format,
            );
        }
        AccessCommand::Check { feature, premium } => {
            let feature = if premium {
                Feature::premium(feature)
            } else {
                Feature::program(feature)
            };
            if !app.can_view(&feature).await {
                let mut err = AfError::new(format!("{} is locked", feature.name));
                if !app.ledger().has_access().await {
                    err = err
                        .with_context("No access code has been redeemed")
                        .with_suggestion("Redeem one: af access redeem <CODE>");
                } else {
                    err = err.with_context(format!(
                        "Requires the '{}' entitlement",
                        app.gate().entitlement()
                    ));
                }
                return Err(err.into());
            }
            println!("{} is unlocked", feature.name);
        }
    }
    Ok(())
}
