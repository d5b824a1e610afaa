// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! AFeeree engine: code registry, progress ledger and content gate over a durable store

mod app;
mod error;
mod gate;
mod ledger;
mod registry;

pub use app::App;
pub use error::{AccessError, LedgerError, RegistryError};
pub use gate::EntitlementGate;
pub use ledger::ProgressLedger;
pub use registry::{CredentialRegistry, MAX_GENERATE_ATTEMPTS};
