//! Queries for the append-only xp_grants ledger.

use rusqlite::{params, Connection};
use stayzup_core::errors::StorageError;
use stayzup_core::models::{NewXpGrant, XpGrant, XpSource};

use crate::connection::sqlite_error;

/// Append a grant. Returns the ledger id.
pub fn insert_grant(conn: &Connection, grant: &NewXpGrant) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO xp_grants (user_id, amount, source_type, source_id, description, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            grant.user_id,
            grant.amount,
            grant.source.as_str(),
            grant.source_id,
            grant.description,
            grant.created_at,
        ],
    )
    .map_err(sqlite_error)?;
    Ok(conn.last_insert_rowid())
}

/// Most recent grants of a user, newest first.
pub fn query_recent(
    conn: &Connection,
    user_id: &str,
    limit: usize,
) -> Result<Vec<XpGrant>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, user_id, amount, source_type, source_id, description, created_at
             FROM xp_grants WHERE user_id = ?1 ORDER BY id DESC LIMIT ?2",
        )
        .map_err(sqlite_error)?;

    let rows = stmt
        .query_map(params![user_id, limit as i64], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<String>>(5)?,
                row.get::<_, i64>(6)?,
            ))
        })
        .map_err(sqlite_error)?;

    let mut grants = Vec::new();
    for row in rows {
        let (id, user_id, amount, source_type, source_id, description, created_at) =
            row.map_err(sqlite_error)?;
        let source = XpSource::parse(&source_type).ok_or_else(|| {
            StorageError::sqlite(format!("unknown XP source {source_type:?} in grant {id}"))
        })?;
        grants.push(XpGrant {
            id,
            user_id,
            amount,
            source,
            source_id,
            description,
            created_at,
        });
    }
    Ok(grants)
}

/// Sum of grants appended after the user's ledger floor.
pub fn ledger_total(conn: &Connection, user_id: &str) -> Result<u64, StorageError> {
    conn.query_row(
        "SELECT COALESCE(SUM(amount), 0) FROM xp_grants
         WHERE user_id = ?1
           AND id > COALESCE((SELECT ledger_floor FROM user_stats WHERE user_id = ?1), 0)",
        params![user_id],
        |row| row.get(0),
    )
    .map_err(sqlite_error)
}

/// Count all ledger rows of a user, including those before a reset.
pub fn count_for_user(conn: &Connection, user_id: &str) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM xp_grants WHERE user_id = ?1",
        params![user_id],
        |row| row.get(0),
    )
    .map_err(sqlite_error)
}
