//! Badge definitions and ownership records.

use serde::{Deserialize, Serialize};

/// Unlock condition of a badge. Closed set: the store keeps the string tag,
/// anything unrecognised lands in `Unsupported` and never unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeCondition {
    TaskCompleted(i64),
    StreakDays(i64),
    TotalXp(i64),
    Level(i64),
    /// No stored stat backs this one.
    ActiveHabits(i64),
    /// No stored stat backs this one.
    CompletionRate(i64),
    Unsupported { condition_type: String, value: i64 },
}

impl BadgeCondition {
    pub fn from_parts(condition_type: &str, value: i64) -> Self {
        match condition_type {
            "task_completed" => Self::TaskCompleted(value),
            "streak_days" => Self::StreakDays(value),
            "total_xp" => Self::TotalXp(value),
            "level" => Self::Level(value),
            "active_habits" => Self::ActiveHabits(value),
            "completion_rate" => Self::CompletionRate(value),
            other => Self::Unsupported {
                condition_type: other.to_string(),
                value,
            },
        }
    }

    pub fn condition_type(&self) -> &str {
        match self {
            Self::TaskCompleted(_) => "task_completed",
            Self::StreakDays(_) => "streak_days",
            Self::TotalXp(_) => "total_xp",
            Self::Level(_) => "level",
            Self::ActiveHabits(_) => "active_habits",
            Self::CompletionRate(_) => "completion_rate",
            Self::Unsupported { condition_type, .. } => condition_type,
        }
    }

    pub fn condition_value(&self) -> i64 {
        match self {
            Self::TaskCompleted(v)
            | Self::StreakDays(v)
            | Self::TotalXp(v)
            | Self::Level(v)
            | Self::ActiveHabits(v)
            | Self::CompletionRate(v) => *v,
            Self::Unsupported { value, .. } => *value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub condition: BadgeCondition,
}

/// Ownership row, created once per (user, badge) and never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBadge {
    pub user_id: String,
    pub badge_id: String,
    /// Unix seconds.
    pub unlocked_at: i64,
}
