// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Value encoding for persisted aggregates
//!
//! Collections are JSON, flags are `"true"`/`"false"`, counters are decimal.
//! Decoding never fails: a missing key yields the default and a corrupt
//! payload (for example a write cut short by a crash) is logged and also
//! yields the default.

use crate::store::{DurableStore, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn encode_json<T: Serialize>(value: &T) -> Result<String, StoreError> {
    Ok(serde_json::to_string(value)?)
}

pub fn decode_json<T: DeserializeOwned + Default>(key: &str, raw: Option<&str>) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "corrupt payload, using empty default");
            T::default()
        }
    }
}

pub fn encode_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Anything other than exactly `"true"` is false
pub fn decode_bool(raw: Option<&str>) -> bool {
    raw == Some("true")
}

pub fn decode_u64(key: &str, raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "corrupt counter, using zero");
            0
        }
    }
}

/// Read a key, treating read failures as absence
pub async fn fetch<S: DurableStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "read failed, using default");
            None
        }
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
