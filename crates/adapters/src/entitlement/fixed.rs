// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entitlements granted from configuration

use super::{EntitlementAdapter, EntitlementError};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Reports a fixed set of entitlement names as active
#[derive(Clone, Debug, Default)]
pub struct StaticEntitlementAdapter {
    granted: Arc<BTreeSet<String>>,
}

impl StaticEntitlementAdapter {
    pub fn new<I, S>(granted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: Arc::new(granted.into_iter().map(Into::into).collect()),
        }
    }
}

#[async_trait]
impl EntitlementAdapter for StaticEntitlementAdapter {
    async fn check(&self, name: &str) -> Result<bool, EntitlementError> {
        Ok(self.granted.contains(name))
    }
}
