// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Access code administration

use crate::config::Config;
use crate::error::AfError;
use crate::output::{self, OutputFormat};
use crate::session::{self, CliApp};
use af_core::{normalize, AccessCode, CodeStats};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct CodeArgs {
    /// Admin password (falls back to AF_ADMIN_PASSWORD)
    #[arg(long, global = true)]
    admin_password: Option<String>,

    #[command(subcommand)]
    command: CodeCommand,
}

#[derive(Subcommand)]
pub enum CodeCommand {
    /// Issue new access codes
    Generate {
        /// How many codes to issue
        #[arg(long, short = 'n', default_value_t = 1)]
        count: u32,
    },
    /// List all codes, available first
    List,
    /// Show code counts
    Stats,
    /// Check whether a code can still be redeemed
    Validate {
        /// Access code (case and surrounding whitespace are ignored)
        code: String,
    },
    /// Delete a code, redeemed or not
    Delete {
        /// Access code
        code: String,
    },
}

#[derive(Serialize)]
struct CodeRow {
    code: String,
    status: &'static str,
    created_at: String,
    redeemed_by: Option<String>,
    redeemed_at: Option<String>,
}

impl From<AccessCode> for CodeRow {
    fn from(c: AccessCode) -> Self {
        Self {
            status: if c.is_redeemed() { "used" } else { "available" },
            created_at: c.created_at.format("%Y-%m-%d %H:%M").to_string(),
            redeemed_by: c.redeemed_by,
            redeemed_at: c.redeemed_at.map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
            code: c.code,
        }
    }
}

impl fmt::Display for CodeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<11} {:<10} {:<17} {}",
            self.code,
            self.status,
            self.created_at,
            self.redeemed_by
                .as_deref()
                .filter(|who| !who.is_empty())
                .unwrap_or("-")
        )
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct StatsView(CodeStats);

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total:     {}", self.0.total)?;
        writeln!(f, "Available: {}", self.0.available)?;
        writeln!(f, "Used:      {}", self.0.redeemed)
    }
}

pub async fn handle(
    args: CodeArgs,
    app: &CliApp,
    config: &Config,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let registry = app.registry();

    // Validation is open to learners; everything else is administration
    if let CodeCommand::Validate { code } = &args.command {
        let canonical = normalize(code);
        if !registry.is_valid(code).await {
            return Err(AfError::new(format!("{} is not a valid access code", canonical))
                .with_context("It may not exist, or it has already been used")
                .into());
        }
        println!("{} is valid", canonical);
        return Ok(());
    }

    session::unlock_admin(app, config, args.admin_password)?;

    match args.command {
        CodeCommand::Generate { count } => {
            let mut issued = Vec::new();
            for _ in 0..count {
                issued.push(registry.generate().await.map_err(AfError::from_registry)?);
            }
            match format {
                OutputFormat::Text => issued.iter().for_each(|c| println!("{}", c)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&issued)?),
            }
        }
        CodeCommand::List => {
            let rows: Vec<CodeRow> = registry
                .codes()
                .await
                .map_err(AfError::from_registry)?
                .into_iter()
                .map(CodeRow::from)
                .collect();
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                OutputFormat::Text if rows.is_empty() => println!("No access codes"),
                OutputFormat::Text => {
                    println!("{:<11} {:<10} {:<17} USED BY", "CODE", "STATUS", "CREATED");
                    for row in &rows {
                        println!("{}", row);
                    }
                }
            }
        }
        CodeCommand::Stats => {
            let stats = registry.stats().await.map_err(AfError::from_registry)?;
            output::print(&StatsView(stats), format);
        }
        CodeCommand::Delete { code } => {
            let canonical = normalize(&code);
            if !registry.delete(&code).await.map_err(AfError::from_registry)? {
                return Err(AfError::new(format!("access code {} not found", canonical))
                    .with_suggestion("List codes: af code list")
                    .into());
            }
            println!("Deleted {}", canonical);
        }
        CodeCommand::Validate { .. } => {}
    }
    Ok(())
}
