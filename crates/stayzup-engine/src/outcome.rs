//! Results handed back to callers for presentation.

use chrono::NaiveDate;
use stayzup_core::models::{Badge, GrantOutcome};
use stayzup_core::progression::Rank;

/// Result of completing a habit for a day.
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    pub habit_id: String,
    pub date: NaiveDate,
    /// Base reward plus the streak bonus when it fired.
    pub xp_granted: u32,
    pub new_streak: u32,
    pub longest_streak: u32,
    pub streak_bonus_applied: bool,
    pub grant: GrantOutcome,
    pub newly_unlocked_badges: Vec<Badge>,
}

impl CompletionOutcome {
    pub fn leveled_up(&self) -> bool {
        self.grant.leveled_up
    }

    pub fn new_level(&self) -> Option<u32> {
        self.grant.level_up().map(|(level, _)| level)
    }

    pub fn new_rank(&self) -> Option<Rank> {
        self.grant.level_up().map(|(_, rank)| rank)
    }
}

/// Result of completing a one-off task.
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    pub task_id: String,
    pub grant: GrantOutcome,
    pub newly_unlocked_badges: Vec<Badge>,
}

/// Result of a direct XP grant.
#[derive(Debug, Clone)]
pub struct GrantReport {
    /// Ledger id of the appended grant.
    pub grant_id: i64,
    pub grant: GrantOutcome,
    pub newly_unlocked_badges: Vec<Badge>,
}
