//! Badge unlock predicates evaluated against the stored aggregate.

use std::collections::HashSet;

use crate::models::{Badge, BadgeCondition, UserStats};

impl BadgeCondition {
    /// Whether the stats currently satisfy this condition.
    pub fn is_satisfied(&self, stats: &UserStats) -> bool {
        match self {
            Self::TaskCompleted(min) => at_least(stats.total_tasks_completed(), *min),
            Self::StreakDays(min) => at_least(u64::from(stats.longest_streak()), *min),
            Self::TotalXp(min) => at_least(stats.total_xp(), *min),
            Self::Level(min) => at_least(u64::from(stats.current_level()), *min),
            Self::ActiveHabits(_) | Self::CompletionRate(_) | Self::Unsupported { .. } => false,
        }
    }
}

fn at_least(value: u64, min: i64) -> bool {
    // Negative thresholds are trivially met.
    u64::try_from(min).map_or(true, |min| value >= min)
}

/// Badges not yet owned whose condition now holds, in catalog order.
pub fn newly_unlocked<'a>(
    catalog: &'a [Badge],
    owned: &HashSet<String>,
    stats: &UserStats,
) -> Vec<&'a Badge> {
    catalog
        .iter()
        .filter(|badge| !owned.contains(&badge.id))
        .filter(|badge| badge.condition.is_satisfied(stats))
        .collect()
}
