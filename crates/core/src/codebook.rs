// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory set of issued access codes
//!
//! Pure state: no I/O. Every lookup normalizes the candidate first, so
//! `" af-7k2m9p"` and `"AF-7K2M9P"` address the same record.

use crate::code::{is_well_formed, normalize, AccessCode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Why a redemption did not happen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedeemError {
    #[error("malformed access code: {0:?}")]
    Malformed(String),
    #[error("access code not found: {0}")]
    NotFound(String),
    #[error("access code {code} already redeemed by {by:?}")]
    AlreadyRedeemed { code: String, by: String },
}

/// Counts shown on the admin overview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CodeStats {
    pub total: usize,
    pub available: usize,
    pub redeemed: usize,
}

/// Ordered collection of access codes, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBook {
    codes: Vec<AccessCode>,
}

impl CodeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_codes(codes: Vec<AccessCode>) -> Self {
        Self { codes }
    }

    pub fn codes(&self) -> &[AccessCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Find a record by user-entered candidate
    pub fn find(&self, candidate: &str) -> Option<&AccessCode> {
        let code = normalize(candidate);
        self.codes.iter().find(|c| c.code == code)
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.find(candidate).is_some()
    }

    /// A code is valid if it exists and has not been redeemed
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.find(candidate).is_some_and(|c| !c.is_redeemed())
    }

    /// Append a code. Returns false (and leaves the book unchanged) if the code is already present.
    pub fn insert(&mut self, code: AccessCode) -> bool {
        if self.contains(&code.code) {
            return false;
        }
        self.codes.push(code);
        true
    }

    /// Redeem a code for `identifier`, returning the canonical code on success
    pub fn redeem(
        &mut self,
        candidate: &str,
        identifier: &str,
        at: DateTime<Utc>,
    ) -> Result<String, RedeemError> {
        let code = normalize(candidate);
        if !is_well_formed(&code) {
            return Err(RedeemError::Malformed(candidate.to_string()));
        }

        let record = self
            .codes
            .iter_mut()
            .find(|c| c.code == code)
            .ok_or_else(|| RedeemError::NotFound(code.clone()))?;

        if let Some(by) = &record.redeemed_by {
            return Err(RedeemError::AlreadyRedeemed {
                code,
                by: by.clone(),
            });
        }

        record.mark_redeemed(identifier, at);
        Ok(code)
    }

    /// Remove a code regardless of its redemption state. Returns whether anything was removed.
    pub fn remove(&mut self, candidate: &str) -> bool {
        let code = normalize(candidate);
        let before = self.codes.len();
        self.codes.retain(|c| c.code != code);
        self.codes.len() != before
    }

    /// Available codes first, then redeemed ones; creation order within each group
    pub fn listing(&self) -> Vec<&AccessCode> {
        let (available, redeemed): (Vec<_>, Vec<_>) =
            self.codes.iter().partition(|c| !c.is_redeemed());
        available.into_iter().chain(redeemed).collect()
    }

    pub fn stats(&self) -> CodeStats {
        let redeemed = self.codes.iter().filter(|c| c.is_redeemed()).count();
        CodeStats {
            total: self.codes.len(),
            available: self.codes.len() - redeemed,
            redeemed,
        }
    }
}

#[cfg(test)]
#[path = "codebook_tests.rs"]
mod tests;
