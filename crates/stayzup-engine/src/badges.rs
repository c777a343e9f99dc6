//! Badge scanning, run after every stats mutation inside the same transaction.

use stayzup_core::errors::{ProgressionResult, StorageError};
use stayzup_core::events::BadgeUnlockedEvent;
use stayzup_core::models::{Badge, UserBadge, UserStats};
use stayzup_core::progression::newly_unlocked;
use stayzup_core::traits::{ProgressionStore, StoreWriter};

use crate::engine::{load_stats, unix_now, ProgressionEngine};

/// Insert ownership rows for every badge the stats now satisfy and the user
/// doesn't own yet. Returns the badges actually inserted.
pub(crate) fn scan_badges<W: StoreWriter + ?Sized>(
    store: &W,
    stats: &UserStats,
    unlocked_at: i64,
) -> Result<Vec<Badge>, StorageError> {
    let catalog = store.list_badges()?;
    if catalog.is_empty() {
        return Ok(Vec::new());
    }
    let owned = store.list_owned_badge_ids(stats.user_id())?;
    let candidates = newly_unlocked(&catalog, &owned, stats);
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    // One row per insert so rows ignored as already owned are not reported.
    let mut unlocked = Vec::with_capacity(candidates.len());
    for badge in &candidates {
        let row = UserBadge {
            user_id: stats.user_id().to_string(),
            badge_id: badge.id.clone(),
            unlocked_at,
        };
        if store.insert_user_badges(std::slice::from_ref(&row))? == 1 {
            unlocked.push((*badge).clone());
        }
    }
    tracing::debug!(
        user_id = stats.user_id(),
        candidates = candidates.len(),
        inserted = unlocked.len(),
        "badge scan"
    );

    Ok(unlocked)
}

impl<S: ProgressionStore> ProgressionEngine<S> {
    /// Evaluate the catalog against the user's current stats and record any
    /// newly satisfied badges. Useful after the catalog grows.
    pub fn evaluate_badges(&self, user_id: &str) -> ProgressionResult<Vec<Badge>> {
        let unlocked = self.store().write(|store| {
            let stats = load_stats(store, user_id)?;
            Ok(scan_badges(store, &stats, unix_now())?)
        })?;
        self.announce_badges(user_id, &unlocked);
        Ok(unlocked)
    }

    /// Badges the user owns, oldest unlock first.
    pub fn user_badges(&self, user_id: &str) -> ProgressionResult<Vec<UserBadge>> {
        self.store()
            .read(|store| Ok(store.list_user_badges(user_id)?))
    }

    /// Add a badge definition to the catalog.
    pub fn insert_badge(&self, badge: &Badge) -> ProgressionResult<()> {
        self.store().write(|store| Ok(store.insert_badge(badge)?))
    }

    pub(crate) fn announce_badges(&self, user_id: &str, unlocked: &[Badge]) {
        for badge in unlocked {
            tracing::info!(user_id, badge_id = %badge.id, "badge unlocked");
            self.events().emit_badge_unlocked(&BadgeUnlockedEvent {
                user_id: user_id.to_string(),
                badge_id: badge.id.clone(),
                badge_name: badge.name.clone(),
            });
        }
    }
}
