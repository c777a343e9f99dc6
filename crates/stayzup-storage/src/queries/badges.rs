//! Queries for the badges catalog and user_badges ownership rows.

use std::collections::HashSet;

use rusqlite::{params, Connection};
use stayzup_core::errors::StorageError;
use stayzup_core::models::{Badge, BadgeCondition, UserBadge};

use crate::connection::sqlite_error;

pub fn insert_badge(conn: &Connection, badge: &Badge) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO badges (id, name, description, condition_type, condition_value)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            badge.id,
            badge.name,
            badge.description,
            badge.condition.condition_type(),
            badge.condition.condition_value(),
        ],
    )
    .map_err(sqlite_error)?;
    Ok(())
}

/// Whole catalog, ordered by id.
pub fn list_badges(conn: &Connection) -> Result<Vec<Badge>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, name, description, condition_type, condition_value
             FROM badges ORDER BY id",
        )
        .map_err(sqlite_error)?;

    let rows = stmt
        .query_map([], |row| {
            let condition_type: String = row.get(3)?;
            Ok(Badge {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                condition: BadgeCondition::from_parts(&condition_type, row.get(4)?),
            })
        })
        .map_err(sqlite_error)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_error)
}

pub fn list_owned_ids(conn: &Connection, user_id: &str) -> Result<HashSet<String>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT badge_id FROM user_badges WHERE user_id = ?1")
        .map_err(sqlite_error)?;

    let rows = stmt
        .query_map(params![user_id], |row| row.get::<_, String>(0))
        .map_err(sqlite_error)?;

    rows.collect::<Result<HashSet<_>, _>>().map_err(sqlite_error)
}

pub fn list_user_badges(conn: &Connection, user_id: &str) -> Result<Vec<UserBadge>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT user_id, badge_id, unlocked_at FROM user_badges
             WHERE user_id = ?1 ORDER BY unlocked_at, badge_id",
        )
        .map_err(sqlite_error)?;

    let rows = stmt
        .query_map(params![user_id], |row| {
            Ok(UserBadge {
                user_id: row.get(0)?,
                badge_id: row.get(1)?,
                unlocked_at: row.get(2)?,
            })
        })
        .map_err(sqlite_error)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_error)
}

/// Insert ownership rows; pairs already present are skipped. Returns rows inserted.
pub fn insert_user_badges(conn: &Connection, rows: &[UserBadge]) -> Result<usize, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT OR IGNORE INTO user_badges (user_id, badge_id, unlocked_at) VALUES (?1, ?2, ?3)",
        )
        .map_err(sqlite_error)?;

    let mut inserted = 0;
    for row in rows {
        inserted += stmt
            .execute(params![row.user_id, row.badge_id, row.unlocked_at])
            .map_err(sqlite_error)?;
    }
    Ok(inserted)
}
