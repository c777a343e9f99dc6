//! Named rank tiers, a step function over level.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Debutant,
    Motive,
    Discipline,
    Expert,
    Maitre,
    Legende,
    Immortel,
}

/// Ascending (minimum level, rank) tiers.
const RANK_TIERS: [(u32, Rank); 7] = [
    (1, Rank::Debutant),
    (5, Rank::Motive),
    (10, Rank::Discipline),
    (20, Rank::Expert),
    (35, Rank::Maitre),
    (50, Rank::Legende),
    (75, Rank::Immortel),
];

impl Rank {
    /// Highest tier whose threshold is `<= level`. Levels below 1 map to the first tier.
    pub fn for_level(level: u32) -> Self {
        RANK_TIERS
            .iter()
            .rev()
            .find(|(min_level, _)| *min_level <= level)
            .map_or(Rank::Debutant, |(_, rank)| *rank)
    }

    /// Minimum level of this tier.
    pub fn min_level(&self) -> u32 {
        RANK_TIERS
            .iter()
            .find(|(_, rank)| rank == self)
            .map_or(1, |(min_level, _)| *min_level)
    }

    /// The tier after this one, or `None` at the top.
    pub fn next(&self) -> Option<Self> {
        RANK_TIERS
            .iter()
            .map(|(_, rank)| *rank)
            .find(|rank| rank > self)
    }

    /// Display label, as stored in `user_stats.current_rank`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Debutant => "Débutant",
            Self::Motive => "Motivé",
            Self::Discipline => "Discipliné",
            Self::Expert => "Expert",
            Self::Maitre => "Maître",
            Self::Legende => "Légende",
            Self::Immortel => "Immortel",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        RANK_TIERS
            .iter()
            .map(|(_, rank)| *rank)
            .find(|rank| rank.label() == label)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
