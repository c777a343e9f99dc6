//! XP ledger operations: direct grants, history, and ledger verification.

use stayzup_core::errors::{ProgressionError, ProgressionResult};
use stayzup_core::events::{LevelUpEvent, XpGrantedEvent};
use stayzup_core::models::{GrantOutcome, NewXpGrant, XpGrant, XpSource};
use stayzup_core::traits::ProgressionStore;

use crate::badges::scan_badges;
use crate::engine::{load_stats, unix_now, ProgressionEngine};
use crate::outcome::GrantReport;

impl<S: ProgressionStore> ProgressionEngine<S> {
    /// Append a grant to the ledger and fold it into the user's stats.
    ///
    /// `amount` must be positive. A `Habit` or `Task` source also bumps the
    /// matching completion counter.
    pub fn grant_xp(
        &self,
        user_id: &str,
        amount: i64,
        source: XpSource,
        source_id: Option<&str>,
        description: Option<&str>,
    ) -> ProgressionResult<GrantReport> {
        let amount = u64::try_from(amount)
            .ok()
            .filter(|amount| *amount > 0)
            .ok_or_else(|| {
                ProgressionError::invalid_input("amount", format!("must be positive, got {amount}"))
            })?;

        let report = self.store().write(|store| {
            let now = unix_now();
            let grant_id = store.insert_xp_grant(&NewXpGrant {
                user_id: user_id.to_string(),
                amount,
                source,
                source_id: source_id.map(str::to_string),
                description: description.map(str::to_string),
                created_at: now,
            })?;

            let mut stats = load_stats(store, user_id)?;
            let grant = stats.apply_xp_grant(amount, source);
            store.upsert_user_stats(&stats, now)?;
            let newly_unlocked_badges = scan_badges(store, &stats, now)?;

            Ok(GrantReport {
                grant_id,
                grant,
                newly_unlocked_badges,
            })
        })?;

        tracing::debug!(user_id, amount, source = %source, "xp granted");
        self.announce_grant(user_id, source, &report.grant);
        self.announce_badges(user_id, &report.newly_unlocked_badges);
        Ok(report)
    }

    /// Most recent `limit` ledger entries, newest first.
    pub fn xp_history(&self, user_id: &str, limit: usize) -> ProgressionResult<Vec<XpGrant>> {
        self.store()
            .read(|store| Ok(store.recent_xp_grants(user_id, limit)?))
    }

    /// `xp_history` with the configured default limit.
    pub fn recent_xp_history(&self, user_id: &str) -> ProgressionResult<Vec<XpGrant>> {
        let limit = self.config().effective_xp_history_limit() as usize;
        self.xp_history(user_id, limit)
    }

    /// Sum of ledger grants recorded since the user's last reset.
    pub fn ledger_total(&self, user_id: &str) -> ProgressionResult<u64> {
        self.store().read(|store| Ok(store.ledger_total(user_id)?))
    }

    /// Whether the ledger and the stats aggregate agree on total XP.
    pub fn verify_ledger(&self, user_id: &str) -> ProgressionResult<bool> {
        let (ledger, stats_total) = self.store().read(|store| {
            let ledger = store.ledger_total(user_id)?;
            let stats_total = load_stats(store, user_id)?.total_xp();
            Ok((ledger, stats_total))
        })?;
        if ledger != stats_total {
            tracing::warn!(user_id, ledger, stats_total, "xp ledger and stats disagree");
        }
        Ok(ledger == stats_total)
    }

    pub(crate) fn announce_grant(&self, user_id: &str, source: XpSource, grant: &GrantOutcome) {
        if grant.amount > 0 {
            self.events().emit_xp_granted(&XpGrantedEvent {
                user_id: user_id.to_string(),
                amount: grant.amount,
                source,
                new_total: grant.new_total,
            });
        }
        if let Some((new_level, rank)) = grant.level_up() {
            tracing::info!(user_id, new_level, rank = %rank, "level up");
            self.events().emit_level_up(&LevelUpEvent {
                user_id: user_id.to_string(),
                previous_level: grant.previous_level,
                new_level,
                rank,
            });
        }
    }
}
