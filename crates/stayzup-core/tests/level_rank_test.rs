//! Level curve and rank tier tests.

use proptest::prelude::*;
use stayzup_core::progression::{level_from_xp, xp_for_level, LevelProgress, Rank};

#[test]
fn level_anchor_points() {
    assert_eq!(level_from_xp(0), 1);
    assert_eq!(level_from_xp(99), 1);
    assert_eq!(level_from_xp(100), 2);
    assert_eq!(level_from_xp(399), 2);
    assert_eq!(level_from_xp(400), 3);
    assert_eq!(level_from_xp(900), 4);
}

#[test]
fn level_is_total_at_the_top() {
    let level = level_from_xp(u64::MAX);
    assert!(level > 400_000_000);
    assert_eq!(Rank::for_level(level), Rank::Immortel);
}

#[test]
fn xp_for_level_is_quadratic() {
    assert_eq!(xp_for_level(1), 0);
    assert_eq!(xp_for_level(2), 100);
    assert_eq!(xp_for_level(3), 400);
    assert_eq!(xp_for_level(10), 8_100);
    assert_eq!(xp_for_level(0), 0);
}

#[test]
fn rank_thresholds() {
    assert_eq!(Rank::for_level(1), Rank::Debutant);
    assert_eq!(Rank::for_level(4), Rank::Debutant);
    assert_eq!(Rank::for_level(5), Rank::Motive);
    assert_eq!(Rank::for_level(9), Rank::Motive);
    assert_eq!(Rank::for_level(10), Rank::Discipline);
    assert_eq!(Rank::for_level(20), Rank::Expert);
    assert_eq!(Rank::for_level(35), Rank::Maitre);
    assert_eq!(Rank::for_level(50), Rank::Legende);
    assert_eq!(Rank::for_level(74), Rank::Legende);
    assert_eq!(Rank::for_level(75), Rank::Immortel);
    assert_eq!(Rank::for_level(1000), Rank::Immortel);
}

#[test]
fn rank_of_xp_derived_levels() {
    // level 4 needs 900 XP, level 5 needs 1600
    assert_eq!(Rank::for_level(level_from_xp(900)), Rank::Debutant);
    assert_eq!(Rank::for_level(level_from_xp(1600)), Rank::Motive);
    assert_eq!(Rank::for_level(level_from_xp(xp_for_level(75))), Rank::Immortel);
}

#[test]
fn rank_labels_roundtrip() {
    for level in [1, 5, 10, 20, 35, 50, 75] {
        let rank = Rank::for_level(level);
        assert_eq!(rank.min_level(), level);
        assert_eq!(Rank::from_label(rank.label()), Some(rank));
    }
    assert_eq!(Rank::Debutant.label(), "Débutant");
    assert_eq!(Rank::from_label("Novice"), None);
}

#[test]
fn level_progress_inside_level() {
    let progress = LevelProgress::from_total(250);
    assert_eq!(progress.level, 2);
    assert_eq!(progress.xp_into_level, 150);
    assert_eq!(progress.xp_needed_for_next, 300);
    assert!((progress.progress_percent - 50.0).abs() < 1e-9);

    let fresh = LevelProgress::from_total(0);
    assert_eq!(fresh.level, 1);
    assert_eq!(fresh.xp_needed_for_next, 100);
    assert_eq!(fresh.progress_percent, 0.0);
}

#[test]
fn level_progress_points_at_next_rank() {
    // Débutant -> Motivé at level 5, which starts at 1600 XP
    let fresh = LevelProgress::from_total(0);
    assert_eq!(fresh.next_rank, Some((Rank::Motive, 1600)));

    let motive = LevelProgress::from_total(1600);
    assert_eq!(motive.rank, Rank::Motive);
    assert_eq!(motive.next_rank, Some((Rank::Discipline, xp_for_level(10))));

    let top = LevelProgress::from_total(xp_for_level(80));
    assert_eq!(top.rank, Rank::Immortel);
    assert_eq!(top.next_rank, None);
}

#[test]
fn rank_next_walks_tiers_in_order() {
    let mut rank = Rank::Debutant;
    let mut seen = vec![rank];
    while let Some(next) = rank.next() {
        assert!(next.min_level() > rank.min_level());
        rank = next;
        seen.push(rank);
    }
    assert_eq!(seen.len(), 7);
    assert_eq!(rank, Rank::Immortel);
}

proptest! {
    #[test]
    fn level_is_monotonic(a in any::<u64>(), b in any::<u64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(level_from_xp(lo) <= level_from_xp(hi));
        prop_assert!(Rank::for_level(level_from_xp(lo)) <= Rank::for_level(level_from_xp(hi)));
    }

    #[test]
    fn level_matches_float_formula(xp in 0u64..10_000_000_000) {
        let expected = ((xp as f64 / 100.0).sqrt().floor() as u32) + 1;
        prop_assert_eq!(level_from_xp(xp), expected);
    }

    #[test]
    fn level_bracket_contains_total(xp in 0u64..1_000_000_000_000) {
        let level = level_from_xp(xp);
        prop_assert!(xp_for_level(level) <= xp);
        prop_assert!(xp < xp_for_level(level + 1));
    }
}
