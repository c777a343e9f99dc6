//! Configuration system for StayzUp.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod progression_config;
pub mod stayzup_config;
pub mod storage_config;

pub use progression_config::ProgressionConfig;
pub use stayzup_config::{CliOverrides, StayzupConfig};
pub use storage_config::StorageConfig;
