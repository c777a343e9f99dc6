//! Schema migrations using PRAGMA user_version.

pub mod v001_habits;
pub mod v002_progression;

use rusqlite::Connection;
use stayzup_core::errors::StorageError;

use crate::connection::sqlite_error;

const MIGRATIONS: &[(&str, u32)] = &[
    (v001_habits::MIGRATION_SQL, 1),
    (v002_progression::MIGRATION_SQL, 2),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Run all pending migrations. Each one applies atomically with its version bump.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current_version = current_version(conn).map_err(|e| StorageError::MigrationFailed {
        version: 0,
        message: e.to_string(),
    })?;

    for (sql, version) in MIGRATIONS {
        if current_version >= *version {
            continue;
        }
        let batch = format!("BEGIN IMMEDIATE;\n{sql}\nPRAGMA user_version = {version};\nCOMMIT;");
        if let Err(e) = conn.execute_batch(&batch) {
            // Leave the connection usable; the failed migration is not recorded.
            let _ = conn.execute_batch("ROLLBACK;");
            return Err(StorageError::MigrationFailed {
                version: *version,
                message: e.to_string(),
            });
        }
        tracing::info!(version = version, "applied migration");
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(sqlite_error)
}
