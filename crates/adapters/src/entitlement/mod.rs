// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote entitlement adapters

mod fixed;

pub use fixed::StaticEntitlementAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{EntitlementCall, FakeEntitlementAdapter};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from entitlement checks
///
/// Callers gating content treat every variant as "not entitled".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntitlementError {
    #[error("invalid entitlement name: {0:?}")]
    InvalidName(String),
    #[error("entitlement provider unavailable: {0}")]
    Unavailable(String),
    #[error("entitlement check timed out")]
    Timeout,
}

/// Adapter for the subscription provider's entitlement check
#[async_trait]
pub trait EntitlementAdapter: Clone + Send + Sync + 'static {
    /// Whether the named entitlement is currently active for this device
    async fn check(&self, name: &str) -> Result<bool, EntitlementError>;
}
