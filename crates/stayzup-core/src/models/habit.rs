//! Habits are owned by the application; the engine reads them and mutates
//! only the two streak fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitStatus {
    #[default]
    Active,
    Paused,
    Completed,
    Archived,
}

impl HabitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "completed" => Some(Self::Completed),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub user_id: String,
    pub title: String,
    /// Base XP granted per completion.
    pub xp_reward: u32,
    /// Extra XP granted when the streak hits a bonus milestone.
    pub streak_bonus_xp: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub status: HabitStatus,
}

impl Habit {
    /// A fresh active habit with no streak history.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        title: impl Into<String>,
        xp_reward: u32,
        streak_bonus_xp: u32,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            title: title.into(),
            xp_reward,
            streak_bonus_xp,
            current_streak: 0,
            longest_streak: 0,
            status: HabitStatus::Active,
        }
    }
}
