// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod access;
pub mod code;
pub mod lesson;
pub mod note;
pub mod practice;
pub mod profile;
pub mod progress;
