// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrapper for consistent observability

use crate::store::{DurableStore, StoreError};
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any DurableStore
#[derive(Clone)]
pub struct TracedStore<S> {
    inner: S,
}

impl<S> TracedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: DurableStore> DurableStore for TracedStore<S> {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        async {
            let result = self.inner.get(key).await;
            match &result {
                Ok(Some(value)) => tracing::debug!(len = value.len(), "read"),
                Ok(None) => tracing::debug!("missing"),
                Err(e) => tracing::warn!(error = %e, "read failed"),
            }
            result
        }
        .instrument(tracing::debug_span!("store.get", key))
        .await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.set(key, value).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::debug!(
                    len = value.len(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "written"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "write failed"
                ),
            }
            result
        }
        .instrument(tracing::info_span!("store.set", key))
        .await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        async {
            let result = self.inner.remove(key).await;
            match &result {
                Ok(()) => tracing::debug!("removed"),
                Err(e) => tracing::error!(error = %e, "remove failed"),
            }
            result
        }
        .instrument(tracing::info_span!("store.remove", key))
        .await
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StoreError> {
        async {
            let result = self.inner.remove_many(keys).await;
            match &result {
                Ok(()) => tracing::info!("removed"),
                Err(e) => tracing::error!(error = %e, "remove failed"),
            }
            result
        }
        .instrument(tracing::info_span!("store.remove_many", count = keys.len()))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
