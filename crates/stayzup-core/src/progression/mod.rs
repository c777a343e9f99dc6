//! Pure progression rules: level curve, rank tiers, streaks, badge predicates.
//! Nothing here touches storage.

pub mod badges;
pub mod level;
pub mod rank;
pub mod streak;

pub use badges::newly_unlocked;
pub use level::{level_from_xp, xp_for_level, LevelProgress};
pub use rank::Rank;
pub use streak::{habit_completion_xp, streak_bonus_due, StreakState};
