//! Storage-layer errors for SQLite operations.

use super::error_code::{self, ErrorCode};

/// Errors raised by the persistence layer. Connectivity and lock failures
/// propagate to the caller untransformed; the engine never retries.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("Database busy: {message}")]
    Busy { message: String },
}

impl StorageError {
    /// Convenience constructor used by query modules.
    pub fn sqlite(message: impl Into<String>) -> Self {
        Self::SqliteError {
            message: message.into(),
        }
    }
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::ConstraintViolation { .. } => error_code::CONSTRAINT_VIOLATION,
            Self::Busy { .. } => error_code::DB_BUSY,
        }
    }
}
