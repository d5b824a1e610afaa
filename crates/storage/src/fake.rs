// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::memory::MemoryStore;
use crate::store::{DurableStore, StoreError};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Recorded store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Get { key: String },
    Set { key: String, value: String },
    Remove { key: String },
    RemoveMany { keys: Vec<String> },
}

#[derive(Default)]
struct FakeState {
    calls: Vec<StoreCall>,
    fail_reads: bool,
    fail_writes: bool,
    failing_keys: HashSet<String>,
    write_delay: Option<Duration>,
}

/// In-memory store with call recording and failure injection
#[derive(Clone, Default)]
pub struct FakeStore {
    inner: MemoryStore,
    state: Arc<Mutex<FakeState>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Values passed to `set` for one key, oldest first
    pub fn writes_to(&self, key: &str) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                StoreCall::Set { key: k, value } if k == key => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Copy of every stored entry
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.inner.snapshot()
    }

    /// Current value, bypassing call recording and failure injection
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.snapshot().get(key).cloned()
    }

    /// Seed a value (for example a corrupt payload) without recording a call
    pub fn put_raw(&self, key: &str, value: &str) {
        self.inner.insert(key, value);
    }

    /// Make every read fail
    pub fn set_fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    /// Make every write and remove fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Make writes to one key fail
    pub fn fail_writes_to(&self, key: &str) {
        self.lock().failing_keys.insert(key.to_string());
    }

    /// Sleep before applying each write, widening race windows
    pub fn set_write_delay(&self, delay: Option<Duration>) {
        self.lock().write_delay = delay;
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: StoreCall) {
        self.lock().calls.push(call);
    }

    fn check_write(&self, key: &str) -> Result<Option<Duration>, StoreError> {
        let state = self.lock();
        if state.fail_writes || state.failing_keys.contains(key) {
            return Err(StoreError::Unavailable(format!("write to {} failed", key)));
        }
        Ok(state.write_delay)
    }
}

#[async_trait]
impl DurableStore for FakeStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.record(StoreCall::Get {
            key: key.to_string(),
        });
        if self.lock().fail_reads {
            return Err(StoreError::Unavailable(format!("read of {} failed", key)));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.record(StoreCall::Set {
            key: key.to_string(),
            value: value.to_string(),
        });
        let delay = self.check_write(key)?;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.record(StoreCall::Remove {
            key: key.to_string(),
        });
        self.check_write(key)?;
        self.inner.remove(key).await
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StoreError> {
        self.record(StoreCall::RemoveMany {
            keys: keys.iter().map(|k| k.to_string()).collect(),
        });
        // One key at a time, like the default, so a failure can land midway
        for key in keys {
            self.check_write(key)?;
            self.inner.remove(key).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
