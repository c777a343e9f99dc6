//! Habit and task completion flows.

use chrono::{DateTime, NaiveDate, Utc};
use stayzup_core::errors::{ProgressionError, ProgressionResult, StorageError};
use stayzup_core::events::HabitCompletedEvent;
use stayzup_core::models::{
    format_completion_date, HabitCompletion, HabitStatus, NewXpGrant, TaskStatus, XpSource,
};
use stayzup_core::progression::{habit_completion_xp, streak_bonus_due, StreakState};
use stayzup_core::traits::ProgressionStore;

use crate::badges::scan_badges;
use crate::engine::{load_stats, unix_now, ProgressionEngine};
use crate::outcome::{CompletionOutcome, TaskOutcome};

fn already_completed(habit_id: &str, date: NaiveDate) -> ProgressionError {
    ProgressionError::already_completed("habit", habit_id, format_completion_date(date))
}

impl<S: ProgressionStore> ProgressionEngine<S> {
    /// Mark a habit done for `today`. Only active habits can be completed.
    ///
    /// Records the completion, advances the habit streak, grants the base
    /// reward (plus the streak bonus on every bonus-period day), updates the
    /// stats, and scans badges, all in one transaction. A second call for
    /// the same day fails with `AlreadyCompleted` and changes nothing.
    pub fn complete_habit_today(
        &self,
        habit_id: &str,
        user_id: &str,
        today: NaiveDate,
    ) -> ProgressionResult<CompletionOutcome> {
        let period = self.streak_bonus_period();

        let outcome = self.store().write(|store| {
            let habit = store
                .get_habit(habit_id, user_id)?
                .ok_or_else(|| ProgressionError::not_found("habit", habit_id))?;
            if habit.status != HabitStatus::Active {
                return Err(ProgressionError::invalid_input(
                    "habit_status",
                    format!(
                        "habit {habit_id} is {}, only active habits can be completed",
                        habit.status.as_str()
                    ),
                ));
            }

            if store.get_completion(habit_id, user_id, today)?.is_some() {
                return Err(already_completed(habit_id, today));
            }

            let previous_day_completed = match today.pred_opt() {
                Some(yesterday) => store.get_completion(habit_id, user_id, yesterday)?.is_some(),
                None => false,
            };
            let streak = StreakState::new(habit.current_streak, habit.longest_streak)
                .advance(previous_day_completed);
            let streak_bonus_applied =
                habit.streak_bonus_xp > 0 && streak_bonus_due(streak.current, period);
            let xp_granted = habit_completion_xp(
                habit.xp_reward,
                habit.streak_bonus_xp,
                streak.current,
                period,
            );

            let now = unix_now();
            let completion = HabitCompletion {
                habit_id: habit_id.to_string(),
                user_id: user_id.to_string(),
                completion_date: today,
                xp_gained: xp_granted,
            };
            match store.insert_completion(&completion, now) {
                Ok(()) => {}
                // Lost a race with a concurrent completion of the same day.
                Err(StorageError::ConstraintViolation { .. }) => {
                    return Err(already_completed(habit_id, today))
                }
                Err(e) => return Err(e.into()),
            }
            store.update_habit_streaks(habit_id, streak.current, streak.longest)?;

            let mut stats = load_stats(store, user_id)?;
            stats.apply_streak_update(streak.current, streak.longest);

            if xp_granted > 0 {
                let description = if streak_bonus_applied {
                    format!("{} (streak bonus, day {})", habit.title, streak.current)
                } else {
                    habit.title.clone()
                };
                store.insert_xp_grant(&NewXpGrant {
                    user_id: user_id.to_string(),
                    amount: u64::from(xp_granted),
                    source: XpSource::Habit,
                    source_id: Some(habit_id.to_string()),
                    description: Some(description),
                    created_at: now,
                })?;
            }
            let grant = stats.apply_xp_grant(u64::from(xp_granted), XpSource::Habit);
            store.upsert_user_stats(&stats, now)?;
            let newly_unlocked_badges = scan_badges(store, &stats, now)?;

            Ok(CompletionOutcome {
                habit_id: habit_id.to_string(),
                date: today,
                xp_granted,
                new_streak: streak.current,
                longest_streak: streak.longest,
                streak_bonus_applied,
                grant,
                newly_unlocked_badges,
            })
        })?;

        tracing::debug!(
            habit_id,
            user_id,
            xp = outcome.xp_granted,
            streak = outcome.new_streak,
            "habit completed"
        );
        self.events().emit_habit_completed(&HabitCompletedEvent {
            user_id: user_id.to_string(),
            habit_id: habit_id.to_string(),
            date: today,
            xp_granted: outcome.xp_granted,
            new_streak: outcome.new_streak,
            streak_bonus_applied: outcome.streak_bonus_applied,
        });
        self.announce_grant(user_id, XpSource::Habit, &outcome.grant);
        self.announce_badges(user_id, &outcome.newly_unlocked_badges);
        Ok(outcome)
    }

    /// Remove the completion of `date`. Returns whether one existed.
    ///
    /// XP, counters, and streaks are left as they are.
    pub fn uncomplete_habit(
        &self,
        habit_id: &str,
        user_id: &str,
        date: NaiveDate,
    ) -> ProgressionResult<bool> {
        let removed = self.store().write(|store| {
            if store.get_habit(habit_id, user_id)?.is_none() {
                return Err(ProgressionError::not_found("habit", habit_id));
            }
            Ok(store.delete_completion(habit_id, user_id, date)?)
        })?;
        tracing::debug!(habit_id, user_id, %date, removed, "habit uncompleted");
        Ok(removed)
    }

    /// Complete a one-off task and grant its reward. Cancelled tasks are rejected.
    pub fn complete_task(
        &self,
        task_id: &str,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> ProgressionResult<TaskOutcome> {
        let outcome = self.store().write(|store| {
            let task = store
                .get_task(task_id, user_id)?
                .ok_or_else(|| ProgressionError::not_found("task", task_id))?;
            if task.status == TaskStatus::Completed {
                let date = task
                    .completed_at
                    .and_then(|at| DateTime::from_timestamp(at, 0))
                    .map(|at| format_completion_date(at.date_naive()))
                    .unwrap_or_else(|| "an unknown date".to_string());
                return Err(ProgressionError::already_completed("task", task_id, date));
            }
            if task.status == TaskStatus::Cancelled {
                return Err(ProgressionError::invalid_input(
                    "task_status",
                    format!("task {task_id} is cancelled"),
                ));
            }

            let at = now.timestamp();
            store.mark_task_completed(task_id, at)?;

            let amount = u64::from(task.xp_reward);
            if amount > 0 {
                store.insert_xp_grant(&NewXpGrant {
                    user_id: user_id.to_string(),
                    amount,
                    source: XpSource::Task,
                    source_id: Some(task_id.to_string()),
                    description: Some(task.title.clone()),
                    created_at: at,
                })?;
            }
            let mut stats = load_stats(store, user_id)?;
            let grant = stats.apply_xp_grant(amount, XpSource::Task);
            store.upsert_user_stats(&stats, at)?;
            let newly_unlocked_badges = scan_badges(store, &stats, at)?;

            Ok(TaskOutcome {
                task_id: task_id.to_string(),
                grant,
                newly_unlocked_badges,
            })
        })?;

        tracing::debug!(task_id, user_id, xp = outcome.grant.amount, "task completed");
        self.announce_grant(user_id, XpSource::Task, &outcome.grant);
        self.announce_badges(user_id, &outcome.newly_unlocked_badges);
        Ok(outcome)
    }
}
