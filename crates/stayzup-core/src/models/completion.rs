//! Habit completions: at most one per (habit, user, calendar day).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::COMPLETION_DATE_FORMAT;
use crate::errors::{ProgressionError, ProgressionResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitCompletion {
    pub habit_id: String,
    pub user_id: String,
    pub completion_date: NaiveDate,
    pub xp_gained: u32,
}

/// Parse a `YYYY-MM-DD` day, rejecting anything else as `InvalidInput`.
pub fn parse_completion_date(raw: &str) -> ProgressionResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), COMPLETION_DATE_FORMAT).map_err(|e| {
        ProgressionError::invalid_input("completion_date", format!("{raw:?}: {e}"))
    })
}

pub fn format_completion_date(date: NaiveDate) -> String {
    date.format(COMPLETION_DATE_FORMAT).to_string()
}
