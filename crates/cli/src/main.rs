// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! af - AFeeree learner and access code CLI

mod commands;
mod config;
mod error;
mod output;
mod session;

use clap::{Parser, Subcommand};
use commands::{access, code, lesson, note, practice, profile, progress};
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "af", version, about = "AFeeree - access codes and learner progress")]
struct Cli {
    /// Data directory (defaults to AF_DATA_DIR, then the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Access code administration
    Code(code::CodeArgs),
    /// Redeem a code and check access
    #[command(subcommand)]
    Access(access::AccessCommand),
    /// Lesson completion
    #[command(subcommand)]
    Lesson(lesson::LessonCommand),
    /// Show progress and achievements
    Progress(progress::ProgressArgs),
    /// Per-module notes
    #[command(subcommand)]
    Note(note::NoteCommand),
    /// Practice time
    #[command(subcommand)]
    Practice(practice::PracticeCommand),
    /// Learner profile and preferences
    #[command(subcommand)]
    Profile(profile::ProfileCommand),
    /// Clear all learner data on this device
    Logout,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", error::render(&e));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so command output stays clean; `RUST_LOG` overrides the level
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.data_dir)?;
    let app = session::open(&config).await?;
    let format = cli.format;

    match cli.command {
        Commands::Code(args) => code::handle(args, &app, &config, format).await,
        Commands::Access(command) => access::handle(command, &app, format).await,
        Commands::Lesson(command) => lesson::handle(command, &app, &config).await,
        Commands::Progress(args) => progress::handle(args, &app, &config, format).await,
        Commands::Note(command) => note::handle(command, &app).await,
        Commands::Practice(command) => practice::handle(command, &app).await,
        Commands::Profile(command) => profile::handle(command, &app, format).await,
        Commands::Logout => {
            app.ledger().logout().await?;
            println!("Logged out");
            Ok(())
        }
    }
}
