// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine

use af_core::RedeemError;
use af_storage::StoreError;
use thiserror::Error;

/// Errors from the credential registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error(transparent)]
    Redeem(#[from] RedeemError),
    #[error("admin mode required")]
    AdminRequired,
    #[error("no unused access code found after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },
}

/// Errors from the progress ledger
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("module id must not be empty")]
    EmptyModuleId,
}

/// Errors from redeeming a code and granting access in one step
#[derive(Debug, Error)]
pub enum AccessError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("code {code} was redeemed but access could not be recorded: {source}")]
    Grant { code: String, source: LedgerError },
}
