//! Event payload types.

use chrono::NaiveDate;

use crate::models::XpSource;
use crate::progression::Rank;

/// Payload for `on_habit_completed`.
#[derive(Debug, Clone)]
pub struct HabitCompletedEvent {
    pub user_id: String,
    pub habit_id: String,
    pub date: NaiveDate,
    pub xp_granted: u32,
    pub new_streak: u32,
    pub streak_bonus_applied: bool,
}

/// Payload for `on_xp_granted`.
#[derive(Debug, Clone)]
pub struct XpGrantedEvent {
    pub user_id: String,
    pub amount: u64,
    pub source: XpSource,
    pub new_total: u64,
}

/// Payload for `on_level_up`.
#[derive(Debug, Clone)]
pub struct LevelUpEvent {
    pub user_id: String,
    pub previous_level: u32,
    pub new_level: u32,
    pub rank: Rank,
}

/// Payload for `on_badge_unlocked`.
#[derive(Debug, Clone)]
pub struct BadgeUnlockedEvent {
    pub user_id: String,
    pub badge_id: String,
    pub badge_name: String,
}

/// Payload for `on_stats_reset`.
#[derive(Debug, Clone)]
pub struct StatsResetEvent {
    pub user_id: String,
}
