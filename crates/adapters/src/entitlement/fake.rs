// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake entitlement adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{EntitlementAdapter, EntitlementError};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Recorded entitlement check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitlementCall {
    pub name: String,
}

#[derive(Default)]
struct FakeState {
    granted: HashSet<String>,
    failure: Option<EntitlementError>,
    calls: Vec<EntitlementCall>,
}

/// Fake entitlement adapter for testing
#[derive(Clone, Default)]
pub struct FakeEntitlementAdapter {
    state: Arc<Mutex<FakeState>>,
}

impl FakeEntitlementAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded checks
    pub fn calls(&self) -> Vec<EntitlementCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Grant or revoke an entitlement
    pub fn set_entitled(&self, name: &str, entitled: bool) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if entitled {
            state.granted.insert(name.to_string());
        } else {
            state.granted.remove(name);
        }
    }

    /// Make every check fail with the given error, or clear the failure
    pub fn set_failure(&self, failure: Option<EntitlementError>) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .failure = failure;
    }
}

#[async_trait]
impl EntitlementAdapter for FakeEntitlementAdapter {
    async fn check(&self, name: &str) -> Result<bool, EntitlementError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(EntitlementCall {
            name: name.to_string(),
        });
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        Ok(state.granted.contains(name))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
