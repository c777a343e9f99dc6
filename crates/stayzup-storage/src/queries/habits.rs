//! Queries for the habits table.

use rusqlite::{params, Connection, OptionalExtension};
use stayzup_core::errors::StorageError;
use stayzup_core::models::{Habit, HabitStatus};

use crate::connection::sqlite_error;

pub fn insert_habit(conn: &Connection, habit: &Habit, created_at: i64) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO habits
            (id, user_id, title, xp_reward, streak_bonus_xp, current_streak, longest_streak, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            habit.id,
            habit.user_id,
            habit.title,
            habit.xp_reward,
            habit.streak_bonus_xp,
            habit.current_streak,
            habit.longest_streak,
            habit.status.as_str(),
            created_at,
        ],
    )
    .map_err(sqlite_error)?;
    Ok(())
}

/// Look up a habit owned by `user_id`. Someone else's habit reads as absent.
pub fn get_habit(
    conn: &Connection,
    habit_id: &str,
    user_id: &str,
) -> Result<Option<Habit>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, user_id, title, xp_reward, streak_bonus_xp, current_streak, longest_streak, status
             FROM habits WHERE id = ?1 AND user_id = ?2",
        )
        .map_err(sqlite_error)?;

    let row = stmt
        .query_row(params![habit_id, user_id], |row| {
            Ok((
                Habit {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    title: row.get(2)?,
                    xp_reward: row.get(3)?,
                    streak_bonus_xp: row.get(4)?,
                    current_streak: row.get(5)?,
                    longest_streak: row.get(6)?,
                    status: HabitStatus::Active,
                },
                row.get::<_, String>(7)?,
            ))
        })
        .optional()
        .map_err(sqlite_error)?;

    row.map(|(mut habit, status)| {
        habit.status = HabitStatus::parse(&status)
            .ok_or_else(|| StorageError::sqlite(format!("unknown habit status {status:?}")))?;
        Ok(habit)
    })
    .transpose()
}

pub fn update_streaks(
    conn: &Connection,
    habit_id: &str,
    current: u32,
    longest: u32,
) -> Result<(), StorageError> {
    let updated = conn
        .execute(
            "UPDATE habits SET current_streak = ?1, longest_streak = ?2 WHERE id = ?3",
            params![current, longest, habit_id],
        )
        .map_err(sqlite_error)?;
    if updated == 0 {
        return Err(StorageError::sqlite(format!(
            "habit {habit_id} disappeared during streak update"
        )));
    }
    Ok(())
}
