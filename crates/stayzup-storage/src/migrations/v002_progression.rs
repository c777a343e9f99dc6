//! V002: progression state: stats aggregate, XP ledger, badges.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS user_stats (
    user_id TEXT PRIMARY KEY,
    total_xp INTEGER NOT NULL DEFAULT 0 CHECK (total_xp >= 0),
    current_level INTEGER NOT NULL DEFAULT 1 CHECK (current_level >= 1),
    current_rank TEXT NOT NULL DEFAULT 'Débutant',
    current_streak INTEGER NOT NULL DEFAULT 0,
    longest_streak INTEGER NOT NULL DEFAULT 0,
    total_habits_completed INTEGER NOT NULL DEFAULT 0,
    total_tasks_completed INTEGER NOT NULL DEFAULT 0,
    -- Ledger ids <= ledger_floor predate the last reset.
    ledger_floor INTEGER NOT NULL DEFAULT 0,
    updated_at INTEGER NOT NULL,
    CHECK (longest_streak >= current_streak)
) STRICT;

-- Append-only XP ledger.
CREATE TABLE IF NOT EXISTS xp_grants (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    amount INTEGER NOT NULL CHECK (amount > 0),
    source_type TEXT NOT NULL,
    source_id TEXT,
    description TEXT,
    created_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_xp_grants_user ON xp_grants(user_id, id DESC);

CREATE TRIGGER IF NOT EXISTS trg_xp_grants_no_update
    BEFORE UPDATE ON xp_grants
BEGIN
    SELECT RAISE(ABORT, 'xp_grants is append-only');
END;

CREATE TRIGGER IF NOT EXISTS trg_xp_grants_no_delete
    BEFORE DELETE ON xp_grants
BEGIN
    SELECT RAISE(ABORT, 'xp_grants is append-only');
END;

CREATE TABLE IF NOT EXISTS badges (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    condition_type TEXT NOT NULL,
    condition_value INTEGER NOT NULL
) STRICT;

CREATE TABLE IF NOT EXISTS user_badges (
    user_id TEXT NOT NULL,
    badge_id TEXT NOT NULL REFERENCES badges(id),
    unlocked_at INTEGER NOT NULL,
    PRIMARY KEY (user_id, badge_id)
) STRICT;
"#;
