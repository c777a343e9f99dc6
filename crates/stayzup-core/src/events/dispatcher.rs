//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::ProgressionEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ProgressionEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn ProgressionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// A panicking handler is logged and skipped; later handlers still run.
    fn emit<F: Fn(&dyn ProgressionEventHandler)>(&self, event_name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event = event_name, "progression event handler panicked");
            }
        }
    }

    pub fn emit_habit_completed(&self, event: &HabitCompletedEvent) {
        self.emit("habit_completed", |h| h.on_habit_completed(event));
    }

    pub fn emit_xp_granted(&self, event: &XpGrantedEvent) {
        self.emit("xp_granted", |h| h.on_xp_granted(event));
    }

    pub fn emit_level_up(&self, event: &LevelUpEvent) {
        self.emit("level_up", |h| h.on_level_up(event));
    }

    pub fn emit_badge_unlocked(&self, event: &BadgeUnlockedEvent) {
        self.emit("badge_unlocked", |h| h.on_badge_unlocked(event));
    }

    pub fn emit_stats_reset(&self, event: &StatsResetEvent) {
        self.emit("stats_reset", |h| h.on_stats_reset(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
