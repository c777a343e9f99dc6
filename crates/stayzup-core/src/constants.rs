//! Progression constants shared across the workspace.

/// XP unit of the quadratic level curve: level `n` starts at `XP_CURVE_UNIT * (n-1)^2`.
pub const XP_CURVE_UNIT: u64 = 100;

/// Level every user starts at.
pub const STARTING_LEVEL: u32 = 1;

/// Default streak-bonus period in days (bonus on day 7, 14, 21, ...).
pub const DEFAULT_STREAK_BONUS_PERIOD: u32 = 7;

/// Default calendar window, in days, for recent completion lookups.
pub const DEFAULT_HISTORY_WINDOW_DAYS: u32 = 30;

/// Default number of ledger entries returned by XP history queries.
pub const DEFAULT_XP_HISTORY_LIMIT: u32 = 50;

/// Default SQLite database file name.
pub const DEFAULT_DATABASE_PATH: &str = "stayzup.db";

/// Default and maximum read pool sizes.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const MAX_READ_POOL_SIZE: usize = 8;

/// Date format used for completion days at every boundary.
pub const COMPLETION_DATE_FORMAT: &str = "%Y-%m-%d";
