//! Queries for the habit_completions table.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use stayzup_core::constants::COMPLETION_DATE_FORMAT;
use stayzup_core::errors::StorageError;
use stayzup_core::models::{format_completion_date, HabitCompletion};

use crate::connection::sqlite_error;

/// Insert a completion. A duplicate (habit, user, day) surfaces as
/// `StorageError::ConstraintViolation` from the unique index.
pub fn insert_completion(
    conn: &Connection,
    completion: &HabitCompletion,
    created_at: i64,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO habit_completions (habit_id, user_id, completion_date, xp_gained, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            completion.habit_id,
            completion.user_id,
            format_completion_date(completion.completion_date),
            completion.xp_gained,
            created_at,
        ],
    )
    .map_err(sqlite_error)?;
    Ok(())
}

pub fn get_completion(
    conn: &Connection,
    habit_id: &str,
    user_id: &str,
    date: NaiveDate,
) -> Result<Option<HabitCompletion>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT habit_id, user_id, completion_date, xp_gained
             FROM habit_completions
             WHERE habit_id = ?1 AND user_id = ?2 AND completion_date = ?3",
        )
        .map_err(sqlite_error)?;

    stmt.query_row(
        params![habit_id, user_id, format_completion_date(date)],
        read_completion,
    )
    .optional()
    .map_err(sqlite_error)
}

/// Remove the completion for one day. Returns whether a row existed.
pub fn delete_completion(
    conn: &Connection,
    habit_id: &str,
    user_id: &str,
    date: NaiveDate,
) -> Result<bool, StorageError> {
    let deleted = conn
        .execute(
            "DELETE FROM habit_completions
             WHERE habit_id = ?1 AND user_id = ?2 AND completion_date = ?3",
            params![habit_id, user_id, format_completion_date(date)],
        )
        .map_err(sqlite_error)?;
    Ok(deleted > 0)
}

/// All completions of a user on or after `from`, oldest first.
pub fn list_since(
    conn: &Connection,
    user_id: &str,
    from: NaiveDate,
) -> Result<Vec<HabitCompletion>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT habit_id, user_id, completion_date, xp_gained
             FROM habit_completions
             WHERE user_id = ?1 AND completion_date >= ?2
             ORDER BY completion_date, habit_id",
        )
        .map_err(sqlite_error)?;

    let rows = stmt
        .query_map(params![user_id, format_completion_date(from)], read_completion)
        .map_err(sqlite_error)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_error)
}

/// Count completion rows for a habit (all users, all days).
pub fn count_for_habit(conn: &Connection, habit_id: &str) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM habit_completions WHERE habit_id = ?1",
        params![habit_id],
        |row| row.get(0),
    )
    .map_err(sqlite_error)
}

fn read_completion(row: &Row<'_>) -> rusqlite::Result<HabitCompletion> {
    let raw_date: String = row.get(2)?;
    // ISO dates compare correctly as TEXT; parse back for the model.
    let completion_date = NaiveDate::parse_from_str(&raw_date, COMPLETION_DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(HabitCompletion {
        habit_id: row.get(0)?,
        user_id: row.get(1)?,
        completion_date,
        xp_gained: row.get(3)?,
    })
}
