// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Composition root owning the registry, the ledger and the gate

use crate::error::AccessError;
use crate::gate::EntitlementGate;
use crate::ledger::ProgressLedger;
use crate::registry::CredentialRegistry;
use af_adapters::EntitlementAdapter;
use af_core::{Clock, CodeGen, Feature};
use af_storage::DurableStore;

/// One learner session over a shared store
#[derive(Clone)]
pub struct App<S, C, G, E> {
    registry: CredentialRegistry<S, C, G>,
    ledger: ProgressLedger<S, C>,
    gate: EntitlementGate<E>,
}

impl<S, C, G, E> App<S, C, G, E>
where
    S: DurableStore,
    C: Clock,
    G: CodeGen,
    E: EntitlementAdapter,
{
    /// Registry and ledger share the store; their keys never overlap
    pub fn new(store: S, clock: C, codegen: G, gate: EntitlementGate<E>) -> Self {
        Self {
            registry: CredentialRegistry::new(store.clone(), clock.clone(), codegen),
            ledger: ProgressLedger::new(store, clock),
            gate,
        }
    }

    pub fn with_admin_password(mut self, password: impl Into<String>) -> Self {
        self.registry = self.registry.with_admin_password(password);
        self
    }

    pub async fn load(&self) {
        let (codes, state) = tokio::join!(self.registry.load(), self.ledger.load());
        tracing::debug!(codes, completed = state.completed.len(), "session loaded");
    }

    pub fn registry(&self) -> &CredentialRegistry<S, C, G> {
        &self.registry
    }

    pub fn ledger(&self) -> &ProgressLedger<S, C> {
        &self.ledger
    }

    pub fn gate(&self) -> &EntitlementGate<E> {
        &self.gate
    }

    /// Redeem a code and record local access, returning the canonical code.
    ///
    /// The registry validates and redeems under its own lock, so there is no
    /// window between checking a code and consuming it.
    pub async fn redeem_access(
        &self,
        candidate: &str,
        identifier: &str,
    ) -> Result<String, AccessError> {
        let code = self.registry.redeem(candidate, identifier).await?;
        if let Err(source) = self.ledger.set_access(true, &code).await {
            tracing::error!(code = %code, error = %source, "code consumed but access not recorded");
            return Err(AccessError::Grant { code, source });
        }
        Ok(code)
    }

    pub async fn can_view(&self, feature: &Feature) -> bool {
        let has_access = self.ledger.has_access().await;
        self.gate.can_view(has_access, feature).await
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
