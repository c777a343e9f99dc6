//! # stayzup-engine
//!
//! The progression engine an application calls into. Every mutation
//! (habit completion, task completion, manual grant, reset) runs as one
//! atomic unit against a [`ProgressionStore`](stayzup_core::traits::ProgressionStore);
//! events fire only after it commits.

pub mod badges;
pub mod completion;
pub mod engine;
pub mod ledger;
pub mod outcome;
pub mod stats;

pub use engine::ProgressionEngine;
pub use outcome::{CompletionOutcome, GrantReport, TaskOutcome};
pub use stats::CompletionCalendar;
