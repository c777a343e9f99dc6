//! Stats reads, the XP bar, the completion calendar, and full resets.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Days, NaiveDate};
use stayzup_core::errors::ProgressionResult;
use stayzup_core::events::StatsResetEvent;
use stayzup_core::models::UserStats;
use stayzup_core::progression::LevelProgress;
use stayzup_core::traits::ProgressionStore;

use crate::engine::{unix_now, ProgressionEngine};

/// Habit ids completed per day, days ascending.
pub type CompletionCalendar = BTreeMap<NaiveDate, BTreeSet<String>>;

impl<S: ProgressionStore> ProgressionEngine<S> {
    /// Stats for the user, creating the default row on first access.
    pub fn user_stats(&self, user_id: &str) -> ProgressionResult<UserStats> {
        if let Some(stats) = self.store().read(|store| Ok(store.get_user_stats(user_id)?))? {
            return Ok(stats);
        }
        self.store().write(|store| {
            // Another writer may have created it since the read.
            if let Some(stats) = store.get_user_stats(user_id)? {
                return Ok(stats);
            }
            let stats = UserStats::new(user_id);
            store.upsert_user_stats(&stats, unix_now())?;
            tracing::debug!(user_id, "created default stats");
            Ok(stats)
        })
    }

    pub fn level_progress(&self, user_id: &str) -> ProgressionResult<LevelProgress> {
        Ok(LevelProgress::from_total(self.user_stats(user_id)?.total_xp()))
    }

    /// Wipe the user's stats back to level 1 with zero XP and counters.
    ///
    /// The ledger keeps its rows; its floor moves so `ledger_total` restarts
    /// at zero too. Badges, completions, and habits are left alone.
    pub fn reset_user(&self, user_id: &str) -> ProgressionResult<UserStats> {
        let stats = self.store().write(|store| {
            let mut stats = store
                .get_user_stats(user_id)?
                .unwrap_or_else(|| UserStats::new(user_id));
            stats.reset();
            store.upsert_user_stats(&stats, unix_now())?;
            store.reset_ledger_floor(user_id)?;
            Ok(stats)
        })?;

        tracing::info!(user_id, "stats reset");
        self.events().emit_stats_reset(&StatsResetEvent {
            user_id: user_id.to_string(),
        });
        Ok(stats)
    }

    /// Completions on or after `from`, grouped by day.
    pub fn completion_calendar(
        &self,
        user_id: &str,
        from: NaiveDate,
    ) -> ProgressionResult<CompletionCalendar> {
        let completions = self
            .store()
            .read(|store| Ok(store.list_completions_since(user_id, from)?))?;

        let mut calendar = CompletionCalendar::new();
        for completion in completions {
            calendar
                .entry(completion.completion_date)
                .or_default()
                .insert(completion.habit_id);
        }
        Ok(calendar)
    }

    /// Calendar of the configured history window ending at `today`.
    pub fn recent_completion_calendar(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> ProgressionResult<CompletionCalendar> {
        let window = self.config().effective_history_window_days().max(1);
        let from = today
            .checked_sub_days(Days::new(u64::from(window - 1)))
            .unwrap_or(NaiveDate::MIN);
        self.completion_calendar(user_id, from)
    }
}
