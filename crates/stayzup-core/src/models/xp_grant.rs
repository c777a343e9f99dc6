//! XP ledger records. Grants are append-only and never mutated.

use serde::{Deserialize, Serialize};

/// What produced an XP grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpSource {
    Habit,
    Task,
    StreakBonus,
    Manual,
}

impl XpSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Habit => "habit",
            Self::Task => "task",
            Self::StreakBonus => "streak_bonus",
            Self::Manual => "manual",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "habit" => Some(Self::Habit),
            "task" => Some(Self::Task),
            "streak_bonus" => Some(Self::StreakBonus),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }
}

impl std::fmt::Display for XpSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grant about to be appended to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewXpGrant {
    pub user_id: String,
    pub amount: u64,
    pub source: XpSource,
    pub source_id: Option<String>,
    pub description: Option<String>,
    /// Unix seconds.
    pub created_at: i64,
}

/// A persisted ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpGrant {
    pub id: i64,
    pub user_id: String,
    pub amount: u64,
    pub source: XpSource,
    pub source_id: Option<String>,
    pub description: Option<String>,
    pub created_at: i64,
}
