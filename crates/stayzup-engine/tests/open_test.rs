//! Opening the engine from configuration.

mod common;

use common::*;
use stayzup_core::config::{CliOverrides, StayzupConfig};
use stayzup_core::errors::{ErrorCode, ProgressionError};
use stayzup_core::models::{Habit, XpSource};
use stayzup_engine::ProgressionEngine;
use tempfile::TempDir;

fn config_for(dir: &TempDir, extra: &str) -> StayzupConfig {
    let db = dir.path().join("progress.db");
    StayzupConfig::from_toml(&format!(
        "[storage]\ndatabase_path = {:?}\nread_pool_size = 2\n{extra}",
        db.display().to_string()
    ))
    .unwrap()
}

#[test]
fn progress_survives_reopening() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, "");
    {
        let engine = ProgressionEngine::open(&config).unwrap();
        assert_eq!(engine.store().read_pool_size(), 2);
        engine
            .grant_xp(USER, 420, XpSource::Manual, None, None)
            .unwrap();
    }

    let engine = ProgressionEngine::open(&config).unwrap();
    let stats = engine.user_stats(USER).unwrap();
    assert_eq!(stats.total_xp(), 420);
    assert_eq!(stats.current_level(), 3);
    assert!(engine.verify_ledger(USER).unwrap());
}

#[test]
fn progression_section_drives_the_bonus_period() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, "[progression]\nstreak_bonus_period = 2\n");
    let engine = ProgressionEngine::open(&config).unwrap();
    assert_eq!(engine.config().effective_streak_bonus_period(), 2);

    engine
        .insert_habit(&Habit::new("habit-1", USER, "Walk", 10, 5))
        .unwrap();
    let xp: Vec<u32> = consecutive_days(day("2024-03-01"), 4)
        .into_iter()
        .map(|d| engine.complete_habit_today("habit-1", USER, d).unwrap().xp_granted)
        .collect();
    assert_eq!(xp, vec![10, 15, 10, 15]);
}

#[test]
fn open_at_applies_cli_overrides() {
    let dir = TempDir::new().unwrap();
    let cli = CliOverrides {
        database_path: Some(dir.path().join("cli.db").display().to_string()),
        read_pool_size: Some(1),
        streak_bonus_period: Some(3),
    };
    let engine = ProgressionEngine::open_at(dir.path(), Some(&cli)).unwrap();
    assert!(dir.path().join("cli.db").exists());
    assert_eq!(engine.store().read_pool_size(), 1);
    assert_eq!(engine.config().effective_streak_bonus_period(), 3);
}

#[test]
fn invalid_project_config_surfaces_as_config_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("stayzup.toml"),
        "[progression]\nstreak_bonus_period = 0\n",
    )
    .unwrap();
    let cli = CliOverrides {
        database_path: Some(dir.path().join("never.db").display().to_string()),
        ..CliOverrides::default()
    };

    let err = ProgressionEngine::open_at(dir.path(), Some(&cli))
        .err()
        .unwrap();
    assert!(matches!(err, ProgressionError::Config(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
