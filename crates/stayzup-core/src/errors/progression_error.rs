//! Errors surfaced by the progression engine.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, StorageError};

/// Errors that can occur while applying completions, grants, and resets.
///
/// `AlreadyCompleted` is a no-op signal rather than a failure: nothing was
/// written and the caller should render "already done". Use [`Self::is_no_op`].
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} {id} already completed on {date}")]
    AlreadyCompleted {
        entity: &'static str,
        id: String,
        date: String,
    },

    #[error("constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("invalid input for {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type ProgressionResult<T> = Result<T, ProgressionError>;

impl ProgressionError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn already_completed(
        entity: &'static str,
        id: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self::AlreadyCompleted {
            entity,
            id: id.into(),
            date: date.into(),
        }
    }

    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// True when the error means "nothing happened, nothing to do".
    pub fn is_no_op(&self) -> bool {
        matches!(self, Self::AlreadyCompleted { .. })
    }
}

impl ErrorCode for ProgressionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::AlreadyCompleted { .. } => error_code::ALREADY_COMPLETED,
            Self::ConstraintViolation { .. } => error_code::CONSTRAINT_VIOLATION,
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
