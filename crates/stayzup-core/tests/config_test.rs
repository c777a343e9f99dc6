//! Tests for the layered configuration system.

use std::sync::Mutex;

use stayzup_core::config::{CliOverrides, StayzupConfig};
use stayzup_core::errors::ConfigError;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_stayzup_env_vars() {
    for key in [
        "STAYZUP_STREAK_BONUS_PERIOD",
        "STAYZUP_HISTORY_WINDOW_DAYS",
        "STAYZUP_DATABASE_PATH",
        "STAYZUP_READ_POOL_SIZE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn layered_resolution_cli_over_env_over_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_stayzup_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("stayzup.toml"),
        r#"
[progression]
streak_bonus_period = 10
history_window_days = 14

[storage]
database_path = "project.db"
"#,
    )
    .unwrap();

    std::env::set_var("STAYZUP_DATABASE_PATH", "env.db");
    std::env::set_var("STAYZUP_HISTORY_WINDOW_DAYS", "60");

    let cli = CliOverrides {
        streak_bonus_period: Some(5),
        ..Default::default()
    };
    let config = StayzupConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.progression.effective_streak_bonus_period(), 5);
    assert_eq!(config.progression.effective_history_window_days(), 60);
    assert_eq!(
        config.storage.effective_database_path(),
        std::path::PathBuf::from("env.db")
    );

    clear_stayzup_env_vars();
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_stayzup_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = StayzupConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.progression.effective_streak_bonus_period(), 7);
    assert_eq!(config.progression.effective_history_window_days(), 30);
    assert_eq!(config.progression.effective_xp_history_limit(), 50);
    assert_eq!(config.storage.effective_read_pool_size(), 4);
    assert_eq!(
        config.storage.effective_database_path(),
        std::path::PathBuf::from("stayzup.db")
    );
}

#[test]
fn unparseable_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_stayzup_env_vars();

    std::env::set_var("STAYZUP_STREAK_BONUS_PERIOD", "weekly");
    let dir = tempfile::TempDir::new().unwrap();
    let config = StayzupConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.progression.streak_bonus_period, None);

    clear_stayzup_env_vars();
}

#[test]
fn zero_bonus_period_is_rejected() {
    let err = StayzupConfig::from_toml("[progression]\nstreak_bonus_period = 0\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "progression.streak_bonus_period")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn read_pool_size_out_of_range_is_rejected() {
    let err = StayzupConfig::from_toml("[storage]\nread_pool_size = 9\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn invalid_project_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_stayzup_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("stayzup.toml"), "[progression\nnope").unwrap();
    let err = StayzupConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_keys_are_ignored_and_toml_roundtrips() {
    let config = StayzupConfig::from_toml(
        "[progression]\nstreak_bonus_period = 3\nconfetti = true\n[theme]\nmode = \"dark\"\n",
    )
    .unwrap();
    assert_eq!(config.progression.streak_bonus_period, Some(3));

    let rendered = config.to_toml().unwrap();
    let reparsed = StayzupConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.progression.streak_bonus_period, Some(3));
}
