//! Per-habit daily streak state machine and the streak bonus rule.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    pub current: u32,
    pub longest: u32,
}

impl StreakState {
    pub fn new(current: u32, longest: u32) -> Self {
        Self { current, longest }
    }

    /// State after completing a day. The streak extends only when the
    /// previous calendar day was completed; otherwise it restarts at 1.
    pub fn advance(self, previous_day_completed: bool) -> Self {
        let current = if previous_day_completed {
            self.current.saturating_add(1)
        } else {
            1
        };
        Self {
            current,
            longest: current.max(self.longest),
        }
    }
}

/// True on every `period`-th consecutive day (7, 14, 21, ... for period 7).
pub fn streak_bonus_due(streak: u32, period: u32) -> bool {
    period > 0 && streak > 0 && streak % period == 0
}

/// XP granted for one habit completion: base reward, plus the habit's bonus
/// when the new streak lands on a milestone.
pub fn habit_completion_xp(base_reward: u32, streak_bonus: u32, new_streak: u32, period: u32) -> u32 {
    if streak_bonus_due(new_streak, period) {
        base_reward.saturating_add(streak_bonus)
    } else {
        base_reward
    }
}
