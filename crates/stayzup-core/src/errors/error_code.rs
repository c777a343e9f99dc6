//! ErrorCode trait for outer-surface error rendering.

/// Every error enum implements this to expose a stable code string that
/// callers (UI, CLI, bindings) can match on without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted surface string: `[ERROR_CODE] message`.
    fn surface_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const ALREADY_COMPLETED: &str = "ALREADY_COMPLETED";
pub const CONSTRAINT_VIOLATION: &str = "CONSTRAINT_VIOLATION";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DB_BUSY: &str = "DB_BUSY";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
