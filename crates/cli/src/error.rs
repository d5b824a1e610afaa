// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Engine errors are mapped here to a message, the likely cause, and the
//! command that fixes it.

use af_core::RedeemError;
use af_engine::{AccessError, RegistryError};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct AfError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl AfError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn admin_locked(configured: bool) -> Self {
        let err = AfError::new("admin mode is locked");
        if configured {
            err.with_context("No admin password was given, or it did not match")
                .with_suggestion("Pass --admin-password <PASSWORD>")
                .with_suggestion("Or set AF_ADMIN_PASSWORD in the environment")
        } else {
            err.with_context("No admin password is configured for this data directory")
                .with_suggestion("Add admin_password = \"...\" to config.toml in the data directory")
        }
    }

    pub fn unknown_module(module_id: &str) -> Self {
        AfError::new(format!("unknown module '{}'", module_id))
            .with_suggestion("List modules and their lesson counts: af progress")
    }

    pub fn lesson_out_of_range(module_id: &str, index: u32, lessons: u32) -> Self {
        AfError::new(format!(
            "module '{}' has no lesson {}",
            module_id, index
        ))
        .with_context(format!(
            "Lessons are numbered from 0 to {}",
            lessons.saturating_sub(1)
        ))
    }

    pub fn from_redeem(err: &RedeemError) -> Self {
        match err {
            RedeemError::Malformed(candidate) => {
                AfError::new(format!("'{}' is not an access code", candidate.trim()))
                    .with_context("Codes look like AF-7K2M9P")
            }
            RedeemError::NotFound(code) => AfError::new(format!("access code {} not found", code))
                .with_context("The code may have been mistyped or deleted")
                .with_suggestion("Check the code with whoever issued it"),
            RedeemError::AlreadyRedeemed { code, .. } => {
                AfError::new(format!("access code {} has already been used", code))
                    .with_context("Each code can be redeemed once")
                    .with_suggestion("Ask for a new code")
            }
        }
    }

    pub fn from_registry(err: RegistryError) -> anyhow::Error {
        match err {
            RegistryError::Redeem(e) => AfError::from_redeem(&e).into(),
            RegistryError::CodeSpaceExhausted { attempts } => {
                AfError::new("could not generate an unused access code")
                    .with_context(format!("{} draws all collided with existing codes", attempts))
                    .with_suggestion("Delete redeemed codes: af code list, then af code delete <CODE>")
                    .into()
            }
            other => anyhow::Error::new(other),
        }
    }

    pub fn from_access(err: AccessError) -> anyhow::Error {
        match err {
            AccessError::Registry(e) => AfError::from_registry(e),
            AccessError::Grant { code, source } => {
                AfError::new(format!("code {} was redeemed but access was not saved", code))
                    .with_context(source.to_string())
                    .with_suggestion("Check that the data directory is writable")
                    .into()
            }
        }
    }
}

impl fmt::Display for AfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for AfError {}

/// Render any command failure for stderr
pub fn render(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AfError>() {
        Some(af) => af.to_string(),
        None => format!("error: {:#}\n", err),
    }
}
