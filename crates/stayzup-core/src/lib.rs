//! # stayzup-core
//!
//! Foundation crate for the StayzUp progression engine.
//! Defines models, the pure progression rules (level, rank, streak, badges),
//! errors, config, events, tracing setup, and the store traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod progression;
pub mod traits;
pub mod tracing;

pub use config::StayzupConfig;
pub use errors::{ProgressionError, ProgressionResult, StorageError};
pub use models::{
    Badge, BadgeCondition, Habit, HabitCompletion, Task, TaskStatus, UserBadge, UserStats,
    XpGrant, XpSource,
};
pub use progression::{LevelProgress, Rank};
