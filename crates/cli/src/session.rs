// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wiring the engine to the file-backed store for one invocation

use crate::config::Config;
use af_adapters::{StaticEntitlementAdapter, TracedEntitlementAdapter};
use af_core::{RandomCodeGen, SystemClock};
use af_engine::{App, EntitlementGate};
use af_storage::{FileStore, TracedStore};

pub type CliApp = App<
    TracedStore<FileStore>,
    SystemClock,
    RandomCodeGen,
    TracedEntitlementAdapter<StaticEntitlementAdapter>,
>;

/// Open the store under the data directory and load all state
pub async fn open(config: &Config) -> anyhow::Result<CliApp> {
    let store = TracedStore::new(FileStore::open(config.data_dir.join("store"))?);
    let entitlements = TracedEntitlementAdapter::new(StaticEntitlementAdapter::new(
        config.premium_entitlements.iter().cloned(),
    ));
    let gate = EntitlementGate::new(entitlements, config.entitlement.clone());

    let mut app = App::new(store, SystemClock, RandomCodeGen, gate);
    if let Some(password) = &config.admin_password {
        app = app.with_admin_password(password.clone());
    }
    app.load().await;
    Ok(app)
}

/// Unlock admin mode with the operator's attempt, if any
pub fn unlock_admin(app: &CliApp, config: &Config, attempt: Option<String>) -> anyhow::Result<()> {
    let attempt = attempt.or_else(|| std::env::var(crate::config::ADMIN_PASSWORD_ENV).ok());
    match attempt {
        Some(password) if app.registry().unlock_admin(&password) => Ok(()),
        _ => Err(crate::error::AfError::admin_locked(config.admin_password.is_some()).into()),
    }
}
