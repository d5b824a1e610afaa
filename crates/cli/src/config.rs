// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration: data directory, optional `config.toml`, built-in curriculum

use af_core::{Catalog, ModuleSpec};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DATA_DIR_ENV: &str = "AF_DATA_DIR";
pub const ADMIN_PASSWORD_ENV: &str = "AF_ADMIN_PASSWORD";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_ENTITLEMENT: &str = "premium";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a data directory")]
    NoDataDir,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("module {0:?} is listed more than once")]
    DuplicateModule(String),
}

/// Contents of `config.toml`; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    admin_password: Option<String>,
    entitlement: Option<String>,
    premium_entitlements: Vec<String>,
    modules: Vec<ModuleSpec>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Password that unlocks admin mode; none means admin mode stays locked
    pub admin_password: Option<String>,
    /// Provider name of the premium tier
    pub entitlement: String,
    /// Entitlements reported as active by the local provider
    pub premium_entitlements: Vec<String>,
    pub catalog: Catalog,
}

impl Config {
    /// Resolve the data directory (flag, then `AF_DATA_DIR`, then the platform
    /// data dir) and read `config.toml` from it if present.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let data_dir = data_dir
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .or_else(|| dirs::data_dir().map(|d| d.join("afeeree")))
            .ok_or(ConfigError::NoDataDir)?;
        let file = read_file_config(&data_dir.join(CONFIG_FILE))?;
        Self::from_file(data_dir, file)
    }

    fn from_file(data_dir: PathBuf, file: FileConfig) -> Result<Self, ConfigError> {
        let catalog = if file.modules.is_empty() {
            default_catalog()
        } else {
            let mut seen = std::collections::HashSet::new();
            for module in &file.modules {
                if !seen.insert(module.id.as_str()) {
                    return Err(ConfigError::DuplicateModule(module.id.clone()));
                }
            }
            Catalog::new(file.modules)
        };

        Ok(Self {
            data_dir,
            admin_password: file.admin_password.filter(|p| !p.is_empty()),
            entitlement: file
                .entitlement
                .unwrap_or_else(|| DEFAULT_ENTITLEMENT.to_string()),
            premium_entitlements: file.premium_entitlements,
            catalog,
        })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The nine-module AFeeree curriculum
pub fn default_catalog() -> Catalog {
    Catalog::new(vec![
        ModuleSpec::new("1", "Kunindi (Awakening)", 8),
        ModuleSpec::new("2", "Torso Development", 6),
        ModuleSpec::new("3", "Foot Rhythms & Isolation", 7),
        ModuleSpec::new("4", "Traditional Squats", 5),
        ModuleSpec::new("5", "Bala-Lapi (On Beat)", 12),
        ModuleSpec::new("6", "Saba-Semboo (Stretch & Strength)", 10),
        ModuleSpec::new("7", "Flat Backs with Ripples", 6),
        ModuleSpec::new("8", "Barente (Move)", 15),
        ModuleSpec::new("9", "Seven Foundational Principles", 7),
    ])
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
