//! Quadratic level curve: level `n` starts at `100 * (n-1)^2` cumulative XP.

use serde::{Deserialize, Serialize};

use super::rank::Rank;
use crate::constants::{STARTING_LEVEL, XP_CURVE_UNIT};

/// `floor(sqrt(total_xp / 100)) + 1`. Total and monotonic over all inputs.
pub fn level_from_xp(total_xp: u64) -> u32 {
    // floor(sqrt(floor(y))) == floor(sqrt(y)) for y >= 0, so integer division is exact here.
    let steps = isqrt(total_xp / XP_CURVE_UNIT);
    u32::try_from(steps)
        .unwrap_or(u32::MAX)
        .saturating_add(STARTING_LEVEL)
}

/// Cumulative XP at which `level` begins. Saturates for absurd levels.
pub fn xp_for_level(level: u32) -> u64 {
    let steps = u64::from(level.max(STARTING_LEVEL) - STARTING_LEVEL);
    steps.saturating_mul(steps).saturating_mul(XP_CURVE_UNIT)
}

fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // f64 gets within one of the answer; correct in integers.
    let mut x = (n as f64).sqrt() as u64;
    while x.checked_mul(x).map_or(true, |sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).is_some_and(|sq| sq <= n) {
        x += 1;
    }
    x
}

/// Position inside the current level, as shown on an XP bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub total_xp: u64,
    pub level: u32,
    pub rank: Rank,
    pub xp_into_level: u64,
    pub xp_needed_for_next: u64,
    /// 0.0 ..= 100.0
    pub progress_percent: f64,
    /// Next tier and the cumulative XP it starts at. `None` once the top rank is reached.
    pub next_rank: Option<(Rank, u64)>,
}

impl LevelProgress {
    pub fn from_total(total_xp: u64) -> Self {
        let level = level_from_xp(total_xp);
        let floor = xp_for_level(level);
        let ceiling = xp_for_level(level.saturating_add(1));
        let xp_into_level = total_xp - floor;
        let xp_needed_for_next = ceiling.saturating_sub(floor);
        let progress_percent = if xp_needed_for_next == 0 {
            100.0
        } else {
            (xp_into_level as f64 / xp_needed_for_next as f64 * 100.0).clamp(0.0, 100.0)
        };
        let rank = Rank::for_level(level);
        let next_rank = rank
            .next()
            .map(|next| (next, xp_for_level(next.min_level())));
        Self {
            total_xp,
            level,
            rank,
            xp_into_level,
            xp_needed_for_next,
            progress_percent,
            next_rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_exact_around_squares() {
        for n in 0u64..2000 {
            let r = isqrt(n);
            assert!(r * r <= n && (r + 1) * (r + 1) > n, "n={n} r={r}");
        }
        assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn level_starts_match_curve() {
        for level in 1..200u32 {
            assert_eq!(level_from_xp(xp_for_level(level)), level);
            if level > 1 {
                assert_eq!(level_from_xp(xp_for_level(level) - 1), level - 1);
            }
        }
    }
}
