//! Error code and no-op classification tests.

use stayzup_core::errors::{ConfigError, ErrorCode, ProgressionError, StorageError};

#[test]
fn already_completed_is_a_no_op() {
    let err = ProgressionError::already_completed("habit", "h1", "2024-03-01");
    assert!(err.is_no_op());
    assert_eq!(err.error_code(), "ALREADY_COMPLETED");
    assert_eq!(
        err.surface_string(),
        "[ALREADY_COMPLETED] habit h1 already completed on 2024-03-01"
    );
}

#[test]
fn hard_errors_are_not_no_ops() {
    let not_found = ProgressionError::not_found("habit", "h9");
    assert!(!not_found.is_no_op());
    assert_eq!(not_found.error_code(), "NOT_FOUND");
    assert_eq!(not_found.to_string(), "habit not found: h9");

    let invalid = ProgressionError::invalid_input("amount", "must be positive");
    assert_eq!(invalid.error_code(), "INVALID_INPUT");
}

#[test]
fn wrapped_errors_keep_their_codes() {
    let busy: ProgressionError = StorageError::Busy {
        message: "locked".into(),
    }
    .into();
    assert_eq!(busy.error_code(), "DB_BUSY");

    let migration: ProgressionError = StorageError::MigrationFailed {
        version: 2,
        message: "boom".into(),
    }
    .into();
    assert_eq!(migration.error_code(), "MIGRATION_FAILED");

    let config: ProgressionError = ConfigError::FileNotFound {
        path: "x".into(),
    }
    .into();
    assert_eq!(config.error_code(), "CONFIG_ERROR");
}
