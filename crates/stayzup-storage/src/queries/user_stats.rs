//! Queries for the user_stats table.

use rusqlite::{params, Connection, OptionalExtension};
use stayzup_core::errors::StorageError;
use stayzup_core::models::{StatsRecord, UserStats};

use crate::connection::sqlite_error;

pub fn get_user_stats(conn: &Connection, user_id: &str) -> Result<Option<UserStats>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT user_id, total_xp, current_level, current_rank, current_streak,
                    longest_streak, total_habits_completed, total_tasks_completed
             FROM user_stats WHERE user_id = ?1",
        )
        .map_err(sqlite_error)?;

    let record = stmt
        .query_row(params![user_id], |row| {
            Ok(StatsRecord {
                user_id: row.get(0)?,
                total_xp: row.get(1)?,
                current_level: row.get(2)?,
                current_rank: row.get(3)?,
                current_streak: row.get(4)?,
                longest_streak: row.get(5)?,
                total_habits_completed: row.get(6)?,
                total_tasks_completed: row.get(7)?,
            })
        })
        .optional()
        .map_err(sqlite_error)?;

    Ok(record.map(UserStats::from_record))
}

/// Insert or overwrite the aggregate. `ledger_floor` is left untouched.
pub fn upsert_user_stats(
    conn: &Connection,
    stats: &UserStats,
    updated_at: i64,
) -> Result<(), StorageError> {
    let record = stats.to_record();
    conn.execute(
        "INSERT INTO user_stats
            (user_id, total_xp, current_level, current_rank, current_streak, longest_streak,
             total_habits_completed, total_tasks_completed, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(user_id) DO UPDATE SET
            total_xp = excluded.total_xp,
            current_level = excluded.current_level,
            current_rank = excluded.current_rank,
            current_streak = excluded.current_streak,
            longest_streak = excluded.longest_streak,
            total_habits_completed = excluded.total_habits_completed,
            total_tasks_completed = excluded.total_tasks_completed,
            updated_at = excluded.updated_at",
        params![
            record.user_id,
            record.total_xp,
            record.current_level,
            record.current_rank,
            record.current_streak,
            record.longest_streak,
            record.total_habits_completed,
            record.total_tasks_completed,
            updated_at,
        ],
    )
    .map_err(sqlite_error)?;
    Ok(())
}

/// Exclude every existing grant of the user from `ledger_total`.
pub fn reset_ledger_floor(conn: &Connection, user_id: &str) -> Result<(), StorageError> {
    conn.execute(
        "UPDATE user_stats
         SET ledger_floor = (SELECT COALESCE(MAX(id), 0) FROM xp_grants WHERE user_id = ?1)
         WHERE user_id = ?1",
        params![user_id],
    )
    .map_err(sqlite_error)?;
    Ok(())
}
