//! Domain records shared by the engine and the store.

pub mod badge;
pub mod completion;
pub mod habit;
pub mod stats;
pub mod task;
pub mod xp_grant;

pub use badge::{Badge, BadgeCondition, UserBadge};
pub use completion::{format_completion_date, parse_completion_date, HabitCompletion};
pub use habit::{Habit, HabitStatus};
pub use stats::{GrantOutcome, StatsRecord, UserStats};
pub use task::{Task, TaskStatus};
pub use xp_grant::{NewXpGrant, XpGrant, XpSource};
