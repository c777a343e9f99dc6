//! `ProgressionStore` backed by SQLite.
//!
//! Reads run on the pool. Writes take the writer mutex and run inside a
//! `BEGIN IMMEDIATE` transaction that commits only when the closure succeeds.

use std::collections::HashSet;

use chrono::NaiveDate;
use rusqlite::Connection;
use stayzup_core::errors::{ProgressionResult, StorageError};
use stayzup_core::models::{
    Badge, Habit, HabitCompletion, NewXpGrant, Task, UserBadge, UserStats, XpGrant,
};
use stayzup_core::traits::{ProgressionStore, StoreReader, StoreWriter};

use crate::connection::writer::with_immediate_transaction;
use crate::connection::DatabaseManager;
use crate::queries::{badges, completions, habits, tasks, user_stats, xp_grants};

/// Store view over one connection. Inside `write` that connection is an open
/// transaction, so everything done through it commits or rolls back together.
pub struct SqliteStoreTx<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStoreTx<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl StoreReader for SqliteStoreTx<'_> {
    fn get_habit(&self, habit_id: &str, user_id: &str) -> Result<Option<Habit>, StorageError> {
        habits::get_habit(self.conn, habit_id, user_id)
    }

    fn get_task(&self, task_id: &str, user_id: &str) -> Result<Option<Task>, StorageError> {
        tasks::get_task(self.conn, task_id, user_id)
    }

    fn get_user_stats(&self, user_id: &str) -> Result<Option<UserStats>, StorageError> {
        user_stats::get_user_stats(self.conn, user_id)
    }

    fn get_completion(
        &self,
        habit_id: &str,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<HabitCompletion>, StorageError> {
        completions::get_completion(self.conn, habit_id, user_id, date)
    }

    fn list_completions_since(
        &self,
        user_id: &str,
        from: NaiveDate,
    ) -> Result<Vec<HabitCompletion>, StorageError> {
        completions::list_since(self.conn, user_id, from)
    }

    fn list_badges(&self) -> Result<Vec<Badge>, StorageError> {
        badges::list_badges(self.conn)
    }

    fn list_owned_badge_ids(&self, user_id: &str) -> Result<HashSet<String>, StorageError> {
        badges::list_owned_ids(self.conn, user_id)
    }

    fn list_user_badges(&self, user_id: &str) -> Result<Vec<UserBadge>, StorageError> {
        badges::list_user_badges(self.conn, user_id)
    }

    fn recent_xp_grants(&self, user_id: &str, limit: usize) -> Result<Vec<XpGrant>, StorageError> {
        xp_grants::query_recent(self.conn, user_id, limit)
    }

    fn ledger_total(&self, user_id: &str) -> Result<u64, StorageError> {
        xp_grants::ledger_total(self.conn, user_id)
    }
}

impl StoreWriter for SqliteStoreTx<'_> {
    fn insert_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        habits::insert_habit(self.conn, habit, chrono::Utc::now().timestamp())
    }

    fn insert_task(&self, task: &Task) -> Result<(), StorageError> {
        tasks::insert_task(self.conn, task)
    }

    fn insert_badge(&self, badge: &Badge) -> Result<(), StorageError> {
        badges::insert_badge(self.conn, badge)
    }

    fn insert_completion(
        &self,
        completion: &HabitCompletion,
        created_at: i64,
    ) -> Result<(), StorageError> {
        completions::insert_completion(self.conn, completion, created_at)
    }

    fn delete_completion(
        &self,
        habit_id: &str,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<bool, StorageError> {
        completions::delete_completion(self.conn, habit_id, user_id, date)
    }

    fn update_habit_streaks(
        &self,
        habit_id: &str,
        current: u32,
        longest: u32,
    ) -> Result<(), StorageError> {
        habits::update_streaks(self.conn, habit_id, current, longest)
    }

    fn mark_task_completed(&self, task_id: &str, completed_at: i64) -> Result<(), StorageError> {
        tasks::mark_completed(self.conn, task_id, completed_at)
    }

    fn upsert_user_stats(&self, stats: &UserStats, updated_at: i64) -> Result<(), StorageError> {
        user_stats::upsert_user_stats(self.conn, stats, updated_at)
    }

    fn reset_ledger_floor(&self, user_id: &str) -> Result<(), StorageError> {
        user_stats::reset_ledger_floor(self.conn, user_id)
    }

    fn insert_xp_grant(&self, grant: &NewXpGrant) -> Result<i64, StorageError> {
        xp_grants::insert_grant(self.conn, grant)
    }

    fn insert_user_badges(&self, rows: &[UserBadge]) -> Result<usize, StorageError> {
        badges::insert_user_badges(self.conn, rows)
    }
}

impl ProgressionStore for DatabaseManager {
    fn read<T, F>(&self, f: F) -> ProgressionResult<T>
    where
        F: FnOnce(&dyn StoreReader) -> ProgressionResult<T>,
    {
        self.with_reader_as(|conn| f(&SqliteStoreTx::new(conn)))
    }

    fn write<T, F>(&self, f: F) -> ProgressionResult<T>
    where
        F: FnOnce(&dyn StoreWriter) -> ProgressionResult<T>,
    {
        let guard = self.lock_writer()?;
        with_immediate_transaction(&guard, |tx| f(&SqliteStoreTx::new(tx)))
    }
}
