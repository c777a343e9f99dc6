//! V001: application-owned rows the engine reads: habits, tasks, completions.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS habits (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    title TEXT NOT NULL,
    xp_reward INTEGER NOT NULL DEFAULT 0 CHECK (xp_reward >= 0),
    streak_bonus_xp INTEGER NOT NULL DEFAULT 0 CHECK (streak_bonus_xp >= 0),
    current_streak INTEGER NOT NULL DEFAULT 0,
    longest_streak INTEGER NOT NULL DEFAULT 0,
    status TEXT NOT NULL DEFAULT 'active',
    created_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_habits_user ON habits(user_id, status);

CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    title TEXT NOT NULL,
    xp_reward INTEGER NOT NULL DEFAULT 0 CHECK (xp_reward >= 0),
    status TEXT NOT NULL DEFAULT 'todo',
    completed_at INTEGER
) STRICT;

CREATE INDEX IF NOT EXISTS idx_tasks_user ON tasks(user_id, status);

-- One row per habit per calendar day. The unique index is what makes
-- concurrent "mark done" submissions safe.
CREATE TABLE IF NOT EXISTS habit_completions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    habit_id TEXT NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
    user_id TEXT NOT NULL,
    completion_date TEXT NOT NULL,
    xp_gained INTEGER NOT NULL DEFAULT 0 CHECK (xp_gained >= 0),
    created_at INTEGER NOT NULL
) STRICT;

CREATE UNIQUE INDEX IF NOT EXISTS idx_habit_completions_day
    ON habit_completions(habit_id, user_id, completion_date);
CREATE INDEX IF NOT EXISTS idx_habit_completions_user_date
    ON habit_completions(user_id, completion_date);
"#;
