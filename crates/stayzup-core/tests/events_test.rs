//! Tests for the progression event dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use stayzup_core::events::*;
use stayzup_core::models::XpSource;
use stayzup_core::progression::Rank;

#[derive(Default)]
struct CountingHandler {
    completed: AtomicUsize,
    granted: AtomicUsize,
    level_ups: AtomicUsize,
}

impl ProgressionEventHandler for CountingHandler {
    fn on_habit_completed(&self, _event: &HabitCompletedEvent) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_xp_granted(&self, _event: &XpGrantedEvent) {
        self.granted.fetch_add(1, Ordering::Relaxed);
    }

    fn on_level_up(&self, _event: &LevelUpEvent) {
        self.level_ups.fetch_add(1, Ordering::Relaxed);
    }
}

struct PanickingHandler;

impl ProgressionEventHandler for PanickingHandler {
    fn on_xp_granted(&self, _event: &XpGrantedEvent) {
        panic!("handler blew up");
    }
}

fn xp_event() -> XpGrantedEvent {
    XpGrantedEvent {
        user_id: "u1".into(),
        amount: 10,
        source: XpSource::Habit,
        new_total: 10,
    }
}

#[test]
fn empty_dispatcher_is_a_no_op() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_xp_granted(&xp_event());
    dispatcher.emit_stats_reset(&StatsResetEvent { user_id: "u1".into() });
}

#[test]
fn handlers_receive_events() {
    let handler = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(handler.clone());

    dispatcher.emit_habit_completed(&HabitCompletedEvent {
        user_id: "u1".into(),
        habit_id: "h1".into(),
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        xp_granted: 10,
        new_streak: 1,
        streak_bonus_applied: false,
    });
    dispatcher.emit_xp_granted(&xp_event());
    dispatcher.emit_level_up(&LevelUpEvent {
        user_id: "u1".into(),
        previous_level: 1,
        new_level: 2,
        rank: Rank::Debutant,
    });
    // not overridden: default no-op
    dispatcher.emit_badge_unlocked(&BadgeUnlockedEvent {
        user_id: "u1".into(),
        badge_id: "b1".into(),
        badge_name: "First".into(),
    });

    assert_eq!(handler.completed.load(Ordering::Relaxed), 1);
    assert_eq!(handler.granted.load(Ordering::Relaxed), 1);
    assert_eq!(handler.level_ups.load(Ordering::Relaxed), 1);
}

#[test]
fn panicking_handler_does_not_block_others() {
    let counter = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_xp_granted(&xp_event());
    assert_eq!(counter.granted.load(Ordering::Relaxed), 1);
}
