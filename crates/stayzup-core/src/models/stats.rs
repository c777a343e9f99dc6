//! UserStats: the per-user progression aggregate.
//!
//! All mutation goes through [`UserStats::apply_xp_grant`],
//! [`UserStats::apply_streak_update`] and [`UserStats::reset`], which keep
//! `current_level`/`current_rank` derived from `total_xp` and
//! `longest_streak >= current_streak`.

use serde::{Deserialize, Serialize};

use super::xp_grant::XpSource;
use crate::constants::STARTING_LEVEL;
use crate::progression::{level_from_xp, Rank};

/// Flat persisted form of [`UserStats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub user_id: String,
    pub total_xp: u64,
    pub current_level: u32,
    pub current_rank: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_habits_completed: u64,
    pub total_tasks_completed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    user_id: String,
    total_xp: u64,
    current_level: u32,
    current_rank: Rank,
    current_streak: u32,
    longest_streak: u32,
    total_habits_completed: u64,
    total_tasks_completed: u64,
}

/// Result of applying one grant to the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantOutcome {
    pub amount: u64,
    pub previous_total: u64,
    pub new_total: u64,
    pub previous_level: u32,
    pub new_level: u32,
    pub new_rank: Rank,
    pub leveled_up: bool,
}

impl GrantOutcome {
    /// `Some((level, rank))` only when the grant crossed a level boundary.
    pub fn level_up(&self) -> Option<(u32, Rank)> {
        self.leveled_up.then_some((self.new_level, self.new_rank))
    }
}

impl UserStats {
    /// Defaults for a user seen for the first time.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            total_xp: 0,
            current_level: STARTING_LEVEL,
            current_rank: Rank::for_level(STARTING_LEVEL),
            current_streak: 0,
            longest_streak: 0,
            total_habits_completed: 0,
            total_tasks_completed: 0,
        }
    }

    /// Rebuild from a stored row. Level and rank are re-derived from
    /// `total_xp` so a stale row can't break the invariants.
    pub fn from_record(record: StatsRecord) -> Self {
        let level = level_from_xp(record.total_xp);
        Self {
            user_id: record.user_id,
            total_xp: record.total_xp,
            current_level: level,
            current_rank: Rank::for_level(level),
            current_streak: record.current_streak,
            longest_streak: record.longest_streak.max(record.current_streak),
            total_habits_completed: record.total_habits_completed,
            total_tasks_completed: record.total_tasks_completed,
        }
    }

    pub fn to_record(&self) -> StatsRecord {
        StatsRecord {
            user_id: self.user_id.clone(),
            total_xp: self.total_xp,
            current_level: self.current_level,
            current_rank: self.current_rank.label().to_string(),
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            total_habits_completed: self.total_habits_completed,
            total_tasks_completed: self.total_tasks_completed,
        }
    }

    /// Add `amount` XP, recompute level/rank, and bump the completion
    /// counter matching `source`.
    pub fn apply_xp_grant(&mut self, amount: u64, source: XpSource) -> GrantOutcome {
        let previous_total = self.total_xp;
        let previous_level = self.current_level;

        self.total_xp = self.total_xp.saturating_add(amount);
        self.current_level = level_from_xp(self.total_xp);
        self.current_rank = Rank::for_level(self.current_level);

        match source {
            XpSource::Habit => self.total_habits_completed += 1,
            XpSource::Task => self.total_tasks_completed += 1,
            XpSource::StreakBonus | XpSource::Manual => {}
        }

        GrantOutcome {
            amount,
            previous_total,
            new_total: self.total_xp,
            previous_level,
            new_level: self.current_level,
            new_rank: self.current_rank,
            leveled_up: self.current_level > previous_level,
        }
    }

    /// Fold one habit's streak into the user-level streaks. The stats keep
    /// the best streak across all habits, not the last one touched.
    pub fn apply_streak_update(&mut self, habit_current: u32, habit_longest: u32) {
        self.current_streak = self.current_streak.max(habit_current);
        self.longest_streak = self
            .longest_streak
            .max(habit_longest)
            .max(self.current_streak);
    }

    /// Full data wipe: every field back to its initial value.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.user_id));
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn total_xp(&self) -> u64 {
        self.total_xp
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn current_rank(&self) -> Rank {
        self.current_rank
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    pub fn total_habits_completed(&self) -> u64 {
        self.total_habits_completed
    }

    pub fn total_tasks_completed(&self) -> u64 {
        self.total_tasks_completed
    }
}
