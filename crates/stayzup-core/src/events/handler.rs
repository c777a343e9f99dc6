//! ProgressionEventHandler trait, all methods no-op by default.

use super::types::*;

/// Receives progression events after the owning transaction has committed.
///
/// Handlers only override what they care about (notifications, confetti,
/// cache invalidation). `Send + Sync` so one engine can be shared across threads.
pub trait ProgressionEventHandler: Send + Sync {
    fn on_habit_completed(&self, _event: &HabitCompletedEvent) {}
    fn on_xp_granted(&self, _event: &XpGrantedEvent) {}
    fn on_level_up(&self, _event: &LevelUpEvent) {}
    fn on_badge_unlocked(&self, _event: &BadgeUnlockedEvent) {}
    fn on_stats_reset(&self, _event: &StatsResetEvent) {}
}
