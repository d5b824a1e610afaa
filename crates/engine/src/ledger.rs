// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress ledger
//!
//! Sole writer of the learner keys (see `af_core::keys::LEDGER_KEYS`).
//! Mutations run under one lock and commit to memory only after their
//! primary key is written, so the cached state never runs ahead of storage.

use crate::error::LedgerError;
use af_core::{
    evaluate_achievements, keys, Achievement, Catalog, Clock, CompletionSet, LedgerState,
    LessonKey, ProgressMetrics, ProgressReport,
};
use af_storage::{codec, DurableStore};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Learner-side state: completions, notes, practice time, access flag and profile
#[derive(Clone)]
pub struct ProgressLedger<S, C> {
    store: S,
    clock: C,
    state: Arc<Mutex<LedgerState>>,
}

impl<S, C> ProgressLedger<S, C>
where
    S: DurableStore,
    C: Clock,
{
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            state: Arc::new(Mutex::new(LedgerState::default())),
        }
    }

    /// Rehydrate every field concurrently.
    ///
    /// Each key falls back to its own default when missing, unreadable or
    /// corrupt. The progress map is rebuilt from the completion set.
    pub async fn load(&self) -> LedgerState {
        let mut state = self.state.lock().await;
        let loaded = self.read_stored().await;
        tracing::debug!(
            completed = loaded.completed.len(),
            has_access = loaded.access.has_access,
            "ledger loaded"
        );
        *state = loaded.clone();
        loaded
    }

    async fn read_stored(&self) -> LedgerState {
        let s = &self.store;
        let (
            completed,
            progress,
            notes,
            practice,
            has_access,
            access_code,
            name,
            email,
            enrolled,
            onboarded,
            dark_mode,
        ) = tokio::join!(
            codec::fetch(s, keys::COMPLETED_LESSONS),
            codec::fetch(s, keys::MODULE_PROGRESS),
            codec::fetch(s, keys::NOTES),
            codec::fetch(s, keys::PRACTICE_TIME),
            codec::fetch(s, keys::HAS_ACCESS),
            codec::fetch(s, keys::ACCESS_CODE),
            codec::fetch(s, keys::USER_NAME),
            codec::fetch(s, keys::USER_EMAIL),
            codec::fetch(s, keys::ENROLLMENT_DATE),
            codec::fetch(s, keys::ONBOARDING_COMPLETE),
            codec::fetch(s, keys::DARK_MODE),
        );

        let mut loaded = LedgerState {
            completed: codec::decode_json::<CompletionSet>(
                keys::COMPLETED_LESSONS,
                completed.as_deref(),
            ),
            module_progress: codec::decode_json::<BTreeMap<String, u32>>(
                keys::MODULE_PROGRESS,
                progress.as_deref(),
            ),
            notes: codec::decode_json(keys::NOTES, notes.as_deref()),
            practice_seconds: codec::decode_u64(keys::PRACTICE_TIME, practice.as_deref()),
            ..LedgerState::default()
        };
        loaded.set_access(
            codec::decode_bool(has_access.as_deref()),
            access_code.as_deref().unwrap_or_default(),
        );
        loaded.profile.name = name.unwrap_or_default();
        loaded.profile.email = email.unwrap_or_default();
        loaded.profile.enrollment_date = enrolled.unwrap_or_default();
        loaded.profile.onboarded = codec::decode_bool(onboarded.as_deref());
        loaded.profile.dark_mode = codec::decode_bool(dark_mode.as_deref());

        let cached = std::mem::take(&mut loaded.module_progress);
        loaded.rederive_progress();
        if cached != loaded.module_progress {
            tracing::warn!("stored module progress disagrees with completions, rebuilt");
        }
        loaded
    }

    /// Record a lesson as complete. Returns false if it already was.
    pub async fn mark_lesson_complete(
        &self,
        module_id: &str,
        lesson_index: u32,
    ) -> Result<bool, LedgerError> {
        if module_id.is_empty() {
            return Err(LedgerError::EmptyModuleId);
        }
        let key = LessonKey::new(module_id, lesson_index);
        let mut state = self.state.lock().await;

        let mut next = state.clone();
        if !next.mark_lesson_complete(&key) {
            return Ok(false);
        }
        self.store
            .set(keys::COMPLETED_LESSONS, &codec::encode_json(&next.completed)?)
            .await?;

        // The progress map is rebuilt on load, so a failure here is not fatal
        let progress = codec::encode_json(&next.module_progress)?;
        if let Err(e) = self.store.set(keys::MODULE_PROGRESS, &progress).await {
            tracing::warn!(error = %e, "module progress not persisted, will be rebuilt on load");
        }
        *state = next;

        tracing::info!(
            lesson = %key,
            module_progress = state.module_progress(module_id),
            "lesson completed"
        );
        Ok(true)
    }

    /// Replace the note for a module
    pub async fn save_note(&self, module_id: &str, text: &str) -> Result<(), LedgerError> {
        if module_id.is_empty() {
            return Err(LedgerError::EmptyModuleId);
        }
        let mut state = self.state.lock().await;

        let mut next = state.clone();
        next.save_note(module_id, text);
        self.store
            .set(keys::NOTES, &codec::encode_json(&next.notes)?)
            .await?;
        *state = next;

        tracing::info!(module_id, chars = text.chars().count(), "note saved");
        Ok(())
    }

    /// Add practice seconds, returning the new total
    pub async fn add_practice_time(&self, seconds: u64) -> Result<u64, LedgerError> {
        let mut state = self.state.lock().await;

        let mut next = state.clone();
        let total = next.add_practice_time(seconds);
        self.store
            .set(keys::PRACTICE_TIME, &total.to_string())
            .await?;
        *state = next;

        tracing::info!(seconds, total, "practice time added");
        Ok(total)
    }

    pub async fn set_access(&self, has_access: bool, code: &str) -> Result<(), LedgerError> {
        let mut state = self.state.lock().await;

        // The flag is the commit point, so it is written last
        self.store.set(keys::ACCESS_CODE, code).await?;
        state.access.access_code = code.to_string();
        self.store
            .set(keys::HAS_ACCESS, codec::encode_bool(has_access))
            .await?;
        state.access.has_access = has_access;

        tracing::info!(has_access, "access state recorded");
        Ok(())
    }

    /// Set name and email, stamping the enrollment date on first call
    pub async fn set_user(&self, name: &str, email: &str) -> Result<(), LedgerError> {
        let mut state = self.state.lock().await;

        // Each field lands in memory as soon as its key is written
        let mut next = state.clone();
        next.set_user(name, email, self.clock.now());
        self.store.set(keys::USER_NAME, &next.profile.name).await?;
        state.profile.name = next.profile.name;
        self.store.set(keys::USER_EMAIL, &next.profile.email).await?;
        state.profile.email = next.profile.email;
        if next.profile.enrollment_date != state.profile.enrollment_date {
            self.store
                .set(keys::ENROLLMENT_DATE, &next.profile.enrollment_date)
                .await?;
            state.profile.enrollment_date = next.profile.enrollment_date;
        }

        tracing::info!(enrollment_date = %state.profile.enrollment_date, "learner profile set");
        Ok(())
    }

    pub async fn set_onboarded(&self, onboarded: bool) -> Result<(), LedgerError> {
        let mut state = self.state.lock().await;
        self.store
            .set(keys::ONBOARDING_COMPLETE, codec::encode_bool(onboarded))
            .await?;
        state.set_onboarded(onboarded);
        Ok(())
    }

    /// Flip dark mode, returning the new setting
    pub async fn toggle_dark_mode(&self) -> Result<bool, LedgerError> {
        let mut state = self.state.lock().await;
        let enabled = !state.profile.dark_mode;
        self.store
            .set(keys::DARK_MODE, codec::encode_bool(enabled))
            .await?;
        state.toggle_dark_mode();
        Ok(enabled)
    }

    /// Forget the learner: every ledger key is removed and memory reset.
    ///
    /// Removal can stop partway, so on failure memory is re-read from
    /// whatever keys remain.
    pub async fn logout(&self) -> Result<(), LedgerError> {
        let mut state = self.state.lock().await;
        if let Err(e) = self.store.remove_many(keys::LEDGER_KEYS).await {
            *state = self.read_stored().await;
            tracing::error!(error = %e, "logout incomplete, ledger reloaded from storage");
            return Err(e.into());
        }
        *state = LedgerState::default();

        tracing::info!("learner logged out");
        Ok(())
    }

    pub async fn snapshot(&self) -> LedgerState {
        self.state.lock().await.clone()
    }

    pub async fn has_access(&self) -> bool {
        self.state.lock().await.access.has_access
    }

    pub async fn report(&self, catalog: &Catalog) -> ProgressReport {
        let state = self.state.lock().await;
        ProgressReport::build(catalog, &state.completed)
    }

    /// Achievement ladder, recomputed on every call
    pub async fn achievements(&self, catalog: &Catalog, graded_assignments: u32) -> Vec<Achievement> {
        let report = self.report(catalog).await;
        evaluate_achievements(&ProgressMetrics::from_report(&report, graded_assignments))
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
