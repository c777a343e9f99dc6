//! Queries for the tasks table.

use rusqlite::{params, Connection, OptionalExtension};
use stayzup_core::errors::StorageError;
use stayzup_core::models::{Task, TaskStatus};

use crate::connection::sqlite_error;

pub fn insert_task(conn: &Connection, task: &Task) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO tasks (id, user_id, title, xp_reward, status, completed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            task.id,
            task.user_id,
            task.title,
            task.xp_reward,
            task.status.as_str(),
            task.completed_at,
        ],
    )
    .map_err(sqlite_error)?;
    Ok(())
}

pub fn get_task(
    conn: &Connection,
    task_id: &str,
    user_id: &str,
) -> Result<Option<Task>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, user_id, title, xp_reward, status, completed_at
             FROM tasks WHERE id = ?1 AND user_id = ?2",
        )
        .map_err(sqlite_error)?;

    let row = stmt
        .query_row(params![task_id, user_id], |row| {
            Ok((
                Task {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    title: row.get(2)?,
                    xp_reward: row.get(3)?,
                    status: TaskStatus::Todo,
                    completed_at: row.get(5)?,
                },
                row.get::<_, String>(4)?,
            ))
        })
        .optional()
        .map_err(sqlite_error)?;

    row.map(|(mut task, status)| {
        task.status = TaskStatus::parse(&status)
            .ok_or_else(|| StorageError::sqlite(format!("unknown task status {status:?}")))?;
        Ok(task)
    })
    .transpose()
}

pub fn mark_completed(conn: &Connection, task_id: &str, completed_at: i64) -> Result<(), StorageError> {
    conn.execute(
        "UPDATE tasks SET status = 'completed', completed_at = ?1 WHERE id = ?2",
        params![completed_at, task_id],
    )
    .map_err(sqlite_error)?;
    Ok(())
}
