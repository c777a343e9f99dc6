//! ProgressionEngine: owns the store, the progression config, and the
//! event dispatcher.

use std::path::Path;
use std::sync::Arc;

use stayzup_core::config::{CliOverrides, ProgressionConfig, StayzupConfig};
use stayzup_core::errors::{ProgressionResult, StorageError};
use stayzup_core::events::{EventDispatcher, ProgressionEventHandler};
use stayzup_core::models::{Habit, Task, UserStats};
use stayzup_core::traits::{ProgressionStore, StoreReader};
use stayzup_storage::DatabaseManager;

/// Entry point for every progression operation.
///
/// Generic over the store so tests and embedders can swap persistence.
/// The engine holds no per-user state of its own; every call reads the
/// store.
pub struct ProgressionEngine<S: ProgressionStore> {
    store: S,
    config: ProgressionConfig,
    events: EventDispatcher,
}

impl<S: ProgressionStore> ProgressionEngine<S> {
    pub fn new(store: S, config: ProgressionConfig) -> Self {
        Self {
            store,
            config,
            events: EventDispatcher::new(),
        }
    }

    /// Register a handler for progression events.
    pub fn register_handler(&mut self, handler: Arc<dyn ProgressionEventHandler>) {
        self.events.register(handler);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Store a habit row owned by the embedding application.
    pub fn insert_habit(&self, habit: &Habit) -> ProgressionResult<()> {
        self.store.write(|store| Ok(store.insert_habit(habit)?))
    }

    /// Store a task row owned by the embedding application.
    pub fn insert_task(&self, task: &Task) -> ProgressionResult<()> {
        self.store.write(|store| Ok(store.insert_task(task)?))
    }

    pub(crate) fn events(&self) -> &EventDispatcher {
        &self.events
    }

    pub(crate) fn streak_bonus_period(&self) -> u32 {
        self.config.effective_streak_bonus_period()
    }
}

impl ProgressionEngine<DatabaseManager> {
    /// Open the SQLite store named by `[storage]` and build an engine over it.
    pub fn open(config: &StayzupConfig) -> ProgressionResult<Self> {
        let store = DatabaseManager::open_with_config(&config.storage)?;
        Ok(Self::new(store, config.progression.clone()))
    }

    /// Resolve layered config rooted at `root` and open the engine it describes.
    pub fn open_at(root: &Path, cli_overrides: Option<&CliOverrides>) -> ProgressionResult<Self> {
        let config = StayzupConfig::load(root, cli_overrides)?;
        tracing::debug!(
            database = %config.storage.effective_database_path().display(),
            streak_bonus_period = config.progression.effective_streak_bonus_period(),
            "opening progression engine"
        );
        Self::open(&config)
    }
}

/// Stats for `user_id`, or the defaults when the user has none yet.
pub(crate) fn load_stats<R: StoreReader + ?Sized>(
    store: &R,
    user_id: &str,
) -> Result<UserStats, StorageError> {
    Ok(store
        .get_user_stats(user_id)?
        .unwrap_or_else(|| UserStats::new(user_id)))
}

pub(crate) fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
