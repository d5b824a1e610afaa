// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Module catalog and derived progress
//!
//! The catalog (module ids and lesson counts) is supplied by the content
//! layer. Everything here is recomputed from the completion set on demand.

use crate::completion::CompletionSet;
use serde::{Deserialize, Serialize};

/// One module of the curriculum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub lessons: u32,
}

impl ModuleSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>, lessons: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            lessons,
        }
    }
}

/// Ordered list of modules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    modules: Vec<ModuleSpec>,
}

impl Catalog {
    pub fn new(modules: Vec<ModuleSpec>) -> Self {
        Self { modules }
    }

    pub fn modules(&self) -> &[ModuleSpec] {
        &self.modules
    }

    pub fn get(&self, module_id: &str) -> Option<&ModuleSpec> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    pub fn total_lessons(&self) -> u32 {
        self.modules.iter().map(|m| m.lessons).sum()
    }
}

fn ratio(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(completed) / f64::from(total)).min(1.0)
}

fn as_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Progress through a single module
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleProgress {
    pub module_id: String,
    pub title: String,
    pub completed: u32,
    pub total: u32,
}

impl ModuleProgress {
    /// Completed share in `0.0..=1.0`; zero for a module without lessons
    pub fn fraction(&self) -> f64 {
        ratio(self.completed, self.total)
    }

    pub fn percent(&self) -> u8 {
        as_percent(self.fraction())
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

/// Progress across the whole catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub modules: Vec<ModuleProgress>,
    /// Every completed lesson key, including ones outside the catalog
    pub completed_lessons: u32,
}

impl ProgressReport {
    pub fn build(catalog: &Catalog, completions: &CompletionSet) -> Self {
        let counts = completions.module_counts();
        let modules = catalog
            .modules()
            .iter()
            .map(|m| ModuleProgress {
                module_id: m.id.clone(),
                title: m.title.clone(),
                completed: counts.get(&m.id).copied().unwrap_or(0),
                total: m.lessons,
            })
            .collect();

        Self {
            modules,
            completed_lessons: completions.len() as u32,
        }
    }

    pub fn module(&self, module_id: &str) -> Option<&ModuleProgress> {
        self.modules.iter().find(|m| m.module_id == module_id)
    }

    pub fn completed_modules(&self) -> u32 {
        self.modules.iter().filter(|m| m.is_complete()).count() as u32
    }

    /// Overall share; lessons beyond a module's total do not count
    pub fn overall_fraction(&self) -> f64 {
        let total: u32 = self.modules.iter().map(|m| m.total).sum();
        let done: u32 = self.modules.iter().map(|m| m.completed.min(m.total)).sum();
        ratio(done, total)
    }

    pub fn overall_percent(&self) -> u8 {
        as_percent(self.overall_fraction())
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
