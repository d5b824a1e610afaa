// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Access code generation abstractions

use crate::code::{CODE_ALPHABET, CODE_PREFIX, SUFFIX_LEN};
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Generates candidate access codes in canonical `AF-XXXXXX` form
pub trait CodeGen: Clone + Send + Sync {
    fn next(&self) -> String;
}

/// Random code generator for production use
#[derive(Clone, Default)]
pub struct RandomCodeGen;

impl CodeGen for RandomCodeGen {
    fn next(&self) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        format!("{}{}", CODE_PREFIX, suffix)
    }
}

/// Generator replaying a fixed list of suffixes, for testing
///
/// Cycles back to the first suffix once the list is exhausted.
#[derive(Clone)]
pub struct ScriptedCodeGen {
    suffixes: Arc<Vec<String>>,
    cursor: Arc<AtomicUsize>,
}

impl ScriptedCodeGen {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: Arc::new(suffixes.into_iter().map(Into::into).collect()),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Default for ScriptedCodeGen {
    fn default() -> Self {
        Self::new(["7K2M9P"])
    }
}

impl CodeGen for ScriptedCodeGen {
    fn next(&self) -> String {
        if self.suffixes.is_empty() {
            return format!("{}{}", CODE_PREFIX, "A".repeat(SUFFIX_LEN));
        }
        let n = self.cursor.fetch_add(1, Ordering::SeqCst);
        format!("{}{}", CODE_PREFIX, self.suffixes[n % self.suffixes.len()])
    }
}

#[cfg(test)]
#[path = "codegen_tests.rs"]
mod tests;
