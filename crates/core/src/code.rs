// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Access code records and the user-facing code format
//!
//! Codes look like `AF-7K2M9P`: a fixed prefix followed by six characters
//! from an alphabet without `0/O` or `1/I`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix every issued code starts with
pub const CODE_PREFIX: &str = "AF-";

/// Characters a code suffix is drawn from
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Number of characters after the prefix
pub const SUFFIX_LEN: usize = 6;

/// Canonical form of a user-entered code: surrounding whitespace trimmed, uppercased
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_uppercase()
}

/// Whether an already-normalized code matches `AF-` + six alphabet characters
pub fn is_well_formed(code: &str) -> bool {
    let Some(suffix) = code.strip_prefix(CODE_PREFIX) else {
        return false;
    };
    suffix.len() == SUFFIX_LEN && suffix.bytes().all(|b| CODE_ALPHABET.contains(&b))
}

/// A single access code and its redemption state
///
/// `redeemed_by` and `redeemed_at` are either both set or both empty.
/// Field names on the wire match the payloads written by earlier clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCode {
    pub code: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "usedBy")]
    pub redeemed_by: Option<String>,
    #[serde(rename = "usedAt")]
    pub redeemed_at: Option<DateTime<Utc>>,
}

impl AccessCode {
    pub fn new(code: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            created_at,
            redeemed_by: None,
            redeemed_at: None,
        }
    }

    pub fn is_redeemed(&self) -> bool {
        self.redeemed_by.is_some()
    }

    /// Record the redemption. Callers check `is_redeemed` first.
    pub(crate) fn mark_redeemed(&mut self, identifier: &str, at: DateTime<Utc>) {
        self.redeemed_by = Some(identifier.to_string());
        self.redeemed_at = Some(at);
    }
}

#[cfg(test)]
#[path = "code_tests.rs"]
mod tests;
