// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::entitlement::{EntitlementAdapter, EntitlementError};
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any EntitlementAdapter
#[derive(Clone)]
pub struct TracedEntitlementAdapter<E> {
    inner: E,
}

impl<E> TracedEntitlementAdapter<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<E: EntitlementAdapter> EntitlementAdapter for TracedEntitlementAdapter<E> {
    async fn check(&self, name: &str) -> Result<bool, EntitlementError> {
        async {
            // Precondition: provider identifiers are never blank
            if name.trim().is_empty() {
                tracing::error!("entitlement name is empty");
                return Err(EntitlementError::InvalidName(name.to_string()));
            }

            let start = std::time::Instant::now();
            let result = self.inner.check(name).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(entitled) => tracing::info!(
                    entitled,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "entitlement checked"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "entitlement check failed"
                ),
            }
            result
        }
        .instrument(tracing::info_span!("entitlement.check", name))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
