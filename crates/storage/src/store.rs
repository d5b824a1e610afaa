// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable key-value store contract

use async_trait::async_trait;
use thiserror::Error;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid key: {0:?}")]
    InvalidKey(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// String-keyed, string-valued persistence
///
/// Single-key writes are atomic; nothing spans keys. Values are opaque text,
/// callers own their encoding.
#[async_trait]
pub trait DurableStore: Clone + Send + Sync + 'static {
    /// Read a value, `None` if the key was never written or was removed
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key; removing a missing key succeeds
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Remove several keys, stopping at the first failure
    async fn remove_many(&self, keys: &[&str]) -> Result<(), StoreError> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }
}

/// Keys are used as file names by the file store, so keep them plain
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
