// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lesson completion records
//!
//! A completed lesson is stored as the composite key `"{module_id}-{lesson_index}"`.
//! Keys are only ever added; the set is cleared as a whole on logout.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid lesson key: {0:?}")]
pub struct LessonKeyError(String);

/// Identifies one lesson within one module
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LessonKey {
    pub module_id: String,
    pub lesson_index: u32,
}

impl LessonKey {
    pub fn new(module_id: impl Into<String>, lesson_index: u32) -> Self {
        Self {
            module_id: module_id.into(),
            lesson_index,
        }
    }
}

impl fmt::Display for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.module_id, self.lesson_index)
    }
}

impl FromStr for LessonKey {
    type Err = LessonKeyError;

    // Split on the last '-' so module ids may themselves contain dashes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (module_id, index) = s
            .rsplit_once('-')
            .ok_or_else(|| LessonKeyError(s.to_string()))?;
        if module_id.is_empty() {
            return Err(LessonKeyError(s.to_string()));
        }
        let lesson_index = index
            .parse()
            .map_err(|_| LessonKeyError(s.to_string()))?;
        Ok(Self::new(module_id, lesson_index))
    }
}

/// Set of completed lesson keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet {
    keys: BTreeSet<String>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a lesson. Returns false if it was already complete.
    pub fn insert(&mut self, key: &LessonKey) -> bool {
        self.keys.insert(key.to_string())
    }

    pub fn contains(&self, key: &LessonKey) -> bool {
        self.keys.contains(&key.to_string())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of completed lessons belonging to `module_id`
    pub fn count_for_module(&self, module_id: &str) -> u32 {
        self.parsed()
            .filter(|key| key.module_id == module_id)
            .count() as u32
    }

    /// Completed-lesson count per module, derived from the keys
    pub fn module_counts(&self) -> BTreeMap<String, u32> {
        let mut counts = BTreeMap::new();
        for key in self.parsed() {
            *counts.entry(key.module_id).or_insert(0) += 1;
        }
        counts
    }

    // Keys that fail to parse come from corrupted payloads; they count toward nothing.
    fn parsed(&self) -> impl Iterator<Item = LessonKey> + '_ {
        self.keys.iter().filter_map(|k| k.parse().ok())
    }
}

impl FromIterator<LessonKey> for CompletionSet {
    fn from_iter<T: IntoIterator<Item = LessonKey>>(iter: T) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.insert(&key);
        }
        set
    }
}

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;
