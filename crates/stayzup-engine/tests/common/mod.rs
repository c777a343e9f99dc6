#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{Days, NaiveDate};
use stayzup_core::config::ProgressionConfig;
use stayzup_core::events::*;
use stayzup_core::models::{Badge, BadgeCondition, Habit};
use stayzup_engine::ProgressionEngine;
use stayzup_storage::connection::sqlite_error;
use stayzup_storage::queries::{completions, xp_grants};
use stayzup_storage::DatabaseManager;

pub const USER: &str = "user-1";

pub fn engine() -> ProgressionEngine<DatabaseManager> {
    stayzup_core::tracing::init_tracing();
    ProgressionEngine::new(
        DatabaseManager::open_in_memory().unwrap(),
        ProgressionConfig::default(),
    )
}

pub fn engine_with_habit(xp_reward: u32, streak_bonus_xp: u32) -> ProgressionEngine<DatabaseManager> {
    let engine = engine();
    engine
        .insert_habit(&Habit::new("habit-1", USER, "Read 20 pages", xp_reward, streak_bonus_xp))
        .unwrap();
    engine
}

pub fn day(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

/// `start`, `start + 1`, ... `start + (n - 1)`.
pub fn consecutive_days(start: NaiveDate, n: u64) -> Vec<NaiveDate> {
    (0..n).map(|i| start + Days::new(i)).collect()
}

/// Load the JSON badge catalog fixture into the engine.
pub fn load_catalog(engine: &ProgressionEngine<DatabaseManager>) {
    for fixture in test_fixtures::badge_catalog() {
        engine
            .insert_badge(&Badge {
                id: fixture.id,
                name: fixture.name,
                description: fixture.description,
                condition: BadgeCondition::from_parts(&fixture.condition_type, fixture.condition_value),
            })
            .unwrap();
    }
}

pub fn completion_rows(db: &DatabaseManager, habit_id: &str) -> i64 {
    db.with_reader(|conn| completions::count_for_habit(conn, habit_id))
        .unwrap()
}

pub fn ledger_rows(db: &DatabaseManager, user_id: &str) -> i64 {
    db.with_reader(|conn| xp_grants::count_for_user(conn, user_id))
        .unwrap()
}

pub fn stored_habit_streaks(db: &DatabaseManager, habit_id: &str) -> (u32, u32) {
    db.with_reader(|conn| {
        conn.query_row(
            "SELECT current_streak, longest_streak FROM habits WHERE id = ?1",
            [habit_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .map_err(sqlite_error)
    })
    .unwrap()
}

/// Records every event it sees, by name.
#[derive(Default)]
pub struct RecordingHandler {
    pub seen: Mutex<Vec<String>>,
}

impl RecordingHandler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn names(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    fn push(&self, name: String) {
        self.seen.lock().unwrap().push(name);
    }
}

impl ProgressionEventHandler for RecordingHandler {
    fn on_habit_completed(&self, event: &HabitCompletedEvent) {
        self.push(format!("habit_completed:{}:{}", event.habit_id, event.new_streak));
    }

    fn on_xp_granted(&self, event: &XpGrantedEvent) {
        self.push(format!("xp_granted:{}", event.amount));
    }

    fn on_level_up(&self, event: &LevelUpEvent) {
        self.push(format!("level_up:{}", event.new_level));
    }

    fn on_badge_unlocked(&self, event: &BadgeUnlockedEvent) {
        self.push(format!("badge_unlocked:{}", event.badge_id));
    }

    fn on_stats_reset(&self, event: &StatsResetEvent) {
        self.push(format!("stats_reset:{}", event.user_id));
    }
}
