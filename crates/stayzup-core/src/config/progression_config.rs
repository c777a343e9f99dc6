//! Progression rule configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HISTORY_WINDOW_DAYS, DEFAULT_STREAK_BONUS_PERIOD, DEFAULT_XP_HISTORY_LIMIT,
};

/// Tunables for streak bonuses and history windows.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Streak length at which the habit's bonus XP fires (and every multiple). Default: 7.
    pub streak_bonus_period: Option<u32>,
    /// Days covered by the recent completion calendar. Default: 30.
    pub history_window_days: Option<u32>,
    /// Default number of XP ledger entries returned by history queries. Default: 50.
    pub xp_history_limit: Option<u32>,
}

impl ProgressionConfig {
    pub fn effective_streak_bonus_period(&self) -> u32 {
        self.streak_bonus_period.unwrap_or(DEFAULT_STREAK_BONUS_PERIOD)
    }

    pub fn effective_history_window_days(&self) -> u32 {
        self.history_window_days.unwrap_or(DEFAULT_HISTORY_WINDOW_DAYS)
    }

    pub fn effective_xp_history_limit(&self) -> u32 {
        self.xp_history_limit.unwrap_or(DEFAULT_XP_HISTORY_LIMIT)
    }
}
