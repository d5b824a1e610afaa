// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress report and achievements

use crate::config::Config;
use crate::output::{self, format_seconds, OutputFormat};
use crate::session::CliApp;
use af_core::{Achievement, ProgressReport};
use clap::Args;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ProgressArgs {
    /// Graded assignments to count toward achievements
    #[arg(long, default_value_t = 0)]
    graded: u32,
}

#[derive(Serialize)]
struct ProgressView {
    #[serde(flatten)]
    report: ProgressReport,
    overall_percent: u8,
    completed_modules: u32,
    practice_seconds: u64,
    achievements: Vec<Achievement>,
}

impl fmt::Display for ProgressView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<4} {:<34} {:>7} {:>5}", "ID", "MODULE", "DONE", "%")?;
        for m in &self.report.modules {
            writeln!(
                f,
                "{:<4} {:<34} {:>7} {:>4}%",
                m.module_id,
                m.title,
                format!("{}/{}", m.completed.min(m.total), m.total),
                m.percent()
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Overall: {}% ({} lessons, {} modules complete)",
            self.overall_percent, self.report.completed_lessons, self.completed_modules
        )?;
        writeln!(f, "Practice: {}", format_seconds(self.practice_seconds))?;
        writeln!(f)?;
        writeln!(f, "Achievements:")?;
        for a in &self.achievements {
            let mark = if a.earned { "x" } else { " " };
            writeln!(f, "  [{}] {} ({}/{})", mark, a.title, a.value.min(a.threshold), a.threshold)?;
        }
        Ok(())
    }
}

pub async fn handle(
    args: ProgressArgs,
    app: &CliApp,
    config: &Config,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let ledger = app.ledger();
    let report = ledger.report(&config.catalog).await;
    let view = ProgressView {
        overall_percent: report.overall_percent(),
        completed_modules: report.completed_modules(),
        practice_seconds: ledger.snapshot().await.practice_seconds,
        achievements: ledger.achievements(&config.catalog, args.graded).await,
        report,
    };
    output::print(&view, format);
    Ok(())
}
