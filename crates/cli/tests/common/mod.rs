// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

pub const ADMIN_PASSWORD: &str = "letmein";

/// Data directory with a config.toml that enables admin mode and premium
pub fn setup_data_dir() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::write(
        temp.path().join("config.toml"),
        format!(
            "admin_password = \"{}\"\npremium_entitlements = [\"premium\"]\n",
            ADMIN_PASSWORD
        ),
    )
    .expect("Failed to write config.toml");
    temp
}

/// `af` bound to a data directory, isolated from the caller's environment
pub fn af(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("af").expect("af binary should build");
    cmd.arg("--data-dir")
        .arg(dir.path())
        .env_remove("AF_DATA_DIR")
        .env_remove("AF_ADMIN_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Issue one code and return it
pub fn generate_code(dir: &TempDir) -> String {
    let output = af(dir)
        .args(["code", "generate", "--admin-password", ADMIN_PASSWORD])
        .output()
        .expect("Failed to run af code generate");
    assert!(output.status.success(), "generate failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
