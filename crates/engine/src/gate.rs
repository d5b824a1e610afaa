// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entitlement gate
//!
//! Combines the local access flag with the remote premium entitlement.
//! Evaluated on every attempt; nothing is cached.

use af_adapters::EntitlementAdapter;
use af_core::gate::needs_entitlement;
use af_core::Feature;

#[derive(Clone)]
pub struct EntitlementGate<E> {
    adapter: E,
    entitlement: String,
}

impl<E: EntitlementAdapter> EntitlementGate<E> {
    /// `entitlement` is the provider's name for the premium tier
    pub fn new(adapter: E, entitlement: impl Into<String>) -> Self {
        Self {
            adapter,
            entitlement: entitlement.into(),
        }
    }

    pub fn entitlement(&self) -> &str {
        &self.entitlement
    }

    /// Remote premium check; any failure counts as not entitled
    pub async fn is_premium_entitled(&self) -> bool {
        match self.adapter.check(&self.entitlement).await {
            Ok(entitled) => entitled,
            Err(e) => {
                tracing::warn!(
                    entitlement = %self.entitlement,
                    error = %e,
                    "entitlement check failed, treating as not entitled"
                );
                false
            }
        }
    }

    pub async fn can_view(&self, has_access: bool, feature: &Feature) -> bool {
        let entitled = if needs_entitlement(has_access, feature) {
            self.is_premium_entitled().await
        } else {
            false
        };
        let allowed = af_core::can_view(has_access, entitled, feature);
        tracing::debug!(feature = %feature.name, has_access, entitled, allowed, "gate evaluated");
        allowed
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
