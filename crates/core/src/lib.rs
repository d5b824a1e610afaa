// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! af-core: Core library for the AFeeree learner client
//!
//! This crate provides:
//! - Access code format, normalization and generation
//! - Pure state for the code registry and the learner ledger
//! - Progress and achievement derivation over a module catalog
//! - The content unlock rule

pub mod clock;
pub mod code;
pub mod codegen;
pub mod keys;

// Pure state (order matters for dependencies)
pub mod codebook;
pub mod completion;
pub mod progress;
pub mod achievement;
pub mod ledger;
pub mod gate;

// Re-exports
pub use achievement::{evaluate as evaluate_achievements, Achievement, Metric, ProgressMetrics};
pub use clock::{Clock, FakeClock, SystemClock};
pub use code::{is_well_formed, normalize, AccessCode};
pub use codebook::{CodeBook, CodeStats, RedeemError};
pub use codegen::{CodeGen, RandomCodeGen, ScriptedCodeGen};
pub use completion::{CompletionSet, LessonKey, LessonKeyError};
pub use gate::{can_view, Feature};
pub use ledger::{AccessState, LedgerState, Profile};
pub use progress::{Catalog, ModuleProgress, ModuleSpec, ProgressReport};
