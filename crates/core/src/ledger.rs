// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Learner ledger state
//!
//! Pure in-memory model of everything the progress ledger owns. Persistence
//! lives in the engine; transitions here never fail.

use crate::completion::{CompletionSet, LessonKey};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Locally cached outcome of a successful code redemption
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccessState {
    pub has_access: bool,
    pub access_code: String,
}

/// Learner identity and preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    /// RFC 3339 timestamp of the first `set_user`, empty before that
    pub enrollment_date: String,
    pub onboarded: bool,
    pub dark_mode: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerState {
    pub completed: CompletionSet,
    /// Completed-lesson count per module; always equal to `completed.module_counts()`
    pub module_progress: BTreeMap<String, u32>,
    pub notes: BTreeMap<String, String>,
    pub practice_seconds: u64,
    pub access: AccessState,
    pub profile: Profile,
}

impl LedgerState {
    /// Mark a lesson complete. Returns false when it already was.
    pub fn mark_lesson_complete(&mut self, key: &LessonKey) -> bool {
        if !self.completed.insert(key) {
            return false;
        }
        let count = self.completed.count_for_module(&key.module_id);
        self.module_progress.insert(key.module_id.clone(), count);
        true
    }

    pub fn module_progress(&self, module_id: &str) -> u32 {
        self.module_progress.get(module_id).copied().unwrap_or(0)
    }

    /// Rebuild the progress map from the completion set
    pub fn rederive_progress(&mut self) {
        self.module_progress = self.completed.module_counts();
    }

    pub fn save_note(&mut self, module_id: &str, text: &str) {
        self.notes.insert(module_id.to_string(), text.to_string());
    }

    pub fn note(&self, module_id: &str) -> Option<&str> {
        self.notes.get(module_id).map(String::as_str)
    }

    /// Add to the practice accumulator, returning the new total
    pub fn add_practice_time(&mut self, seconds: u64) -> u64 {
        self.practice_seconds = self.practice_seconds.saturating_add(seconds);
        self.practice_seconds
    }

    pub fn set_access(&mut self, has_access: bool, code: &str) {
        self.access = AccessState {
            has_access,
            access_code: code.to_string(),
        };
    }

    /// Set name and email; the enrollment date is stamped only once
    pub fn set_user(&mut self, name: &str, email: &str, now: DateTime<Utc>) {
        self.profile.name = name.to_string();
        self.profile.email = email.to_string();
        if self.profile.enrollment_date.is_empty() {
            self.profile.enrollment_date = now.to_rfc3339();
        }
    }

    pub fn set_onboarded(&mut self, onboarded: bool) {
        self.profile.onboarded = onboarded;
    }

    /// Flip dark mode, returning the new value
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.profile.dark_mode = !self.profile.dark_mode;
        self.profile.dark_mode
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
