//! Error handling for StayzUp.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod progression_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use progression_error::{ProgressionError, ProgressionResult};
pub use storage_error::StorageError;
