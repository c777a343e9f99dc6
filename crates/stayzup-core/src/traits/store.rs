//! Data-shape contract with the persistent store.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::errors::{ProgressionResult, StorageError};
use crate::models::{
    Badge, Habit, HabitCompletion, NewXpGrant, Task, UserBadge, UserStats, XpGrant,
};

/// Read side of the store.
pub trait StoreReader {
    fn get_habit(&self, habit_id: &str, user_id: &str) -> Result<Option<Habit>, StorageError>;
    fn get_task(&self, task_id: &str, user_id: &str) -> Result<Option<Task>, StorageError>;
    fn get_user_stats(&self, user_id: &str) -> Result<Option<UserStats>, StorageError>;
    fn get_completion(
        &self,
        habit_id: &str,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<HabitCompletion>, StorageError>;
    /// Completions on or after `from`, oldest first.
    fn list_completions_since(
        &self,
        user_id: &str,
        from: NaiveDate,
    ) -> Result<Vec<HabitCompletion>, StorageError>;
    fn list_badges(&self) -> Result<Vec<Badge>, StorageError>;
    fn list_owned_badge_ids(&self, user_id: &str) -> Result<HashSet<String>, StorageError>;
    fn list_user_badges(&self, user_id: &str) -> Result<Vec<UserBadge>, StorageError>;
    /// Newest first.
    fn recent_xp_grants(&self, user_id: &str, limit: usize) -> Result<Vec<XpGrant>, StorageError>;
    /// Sum of grants appended since the user's last reset.
    fn ledger_total(&self, user_id: &str) -> Result<u64, StorageError>;
}

/// Write side of the store. Only ever handed out inside an atomic unit.
pub trait StoreWriter: StoreReader {
    fn insert_habit(&self, habit: &Habit) -> Result<(), StorageError>;
    fn insert_task(&self, task: &Task) -> Result<(), StorageError>;
    fn insert_badge(&self, badge: &Badge) -> Result<(), StorageError>;
    /// Fails with `StorageError::ConstraintViolation` when a completion for
    /// the same (habit, user, day) already exists.
    fn insert_completion(
        &self,
        completion: &HabitCompletion,
        created_at: i64,
    ) -> Result<(), StorageError>;
    /// Returns whether a row was removed.
    fn delete_completion(
        &self,
        habit_id: &str,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<bool, StorageError>;
    fn update_habit_streaks(
        &self,
        habit_id: &str,
        current: u32,
        longest: u32,
    ) -> Result<(), StorageError>;
    fn mark_task_completed(&self, task_id: &str, completed_at: i64) -> Result<(), StorageError>;
    fn upsert_user_stats(&self, stats: &UserStats, updated_at: i64) -> Result<(), StorageError>;
    /// Move the ledger floor past every existing grant of the user.
    fn reset_ledger_floor(&self, user_id: &str) -> Result<(), StorageError>;
    /// Append a grant, returning its ledger id.
    fn insert_xp_grant(&self, grant: &NewXpGrant) -> Result<i64, StorageError>;
    /// Insert ownership rows, skipping pairs that already exist. Returns rows inserted.
    fn insert_user_badges(&self, rows: &[UserBadge]) -> Result<usize, StorageError>;
}

/// A store able to run closures atomically.
///
/// `write` must serialise against every other `write` on the same data
/// (including from other processes) and commit only when the closure
/// returns `Ok`; any error leaves the store untouched.
pub trait ProgressionStore: Send + Sync {
    fn read<T, F>(&self, f: F) -> ProgressionResult<T>
    where
        F: FnOnce(&dyn StoreReader) -> ProgressionResult<T>;

    fn write<T, F>(&self, f: F) -> ProgressionResult<T>
    where
        F: FnOnce(&dyn StoreWriter) -> ProgressionResult<T>;
}
