// ABOUTME: Integration tests for eligibility and deterministic showcase selection
// ABOUTME: Covers reference picks, determinism, and the coach-sanity exclusion rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use showcase_core::models::{DemandVector, RaceProfile};
use showcase_intelligence::{
    DeterministicPick, DigestPick, EligibilityEvaluator, EligibilityRuleTable, ShowcaseConfig,
    ShowcaseEngine,
};
use std::collections::HashSet;

fn engine() -> ShowcaseEngine {
    ShowcaseEngine::standard(ShowcaseConfig::default()).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn profile(
    slug: &str,
    distance_mi: f64,
    elevation_ft: f64,
    tier: f64,
    prestige: f64,
    field_depth: f64,
    technicality: f64,
    climate: f64,
    altitude: f64,
    elevation: f64,
) -> RaceProfile {
    RaceProfile {
        distance_mi,
        elevation_ft,
        tier,
        prestige_rating: prestige,
        field_depth_rating: field_depth,
        technicality_rating: technicality,
        climate_rating: climate,
        altitude_rating: altitude,
        elevation_rating: elevation,
        ..RaceProfile::new(slug)
    }
}

fn picks(engine: &ShowcaseEngine, race: &RaceProfile) -> Vec<String> {
    engine
        .evaluate(race)
        .showcase
        .workouts()
        .map(str::to_owned)
        .collect()
}

const NEVER_SHOWCASE: [&str; 5] = [
    "Pre-Race Openers",
    "MAF Capped Ride",
    "LT1 Assessment",
    "Easy Spin",
    "Active Recovery",
];

/// Synthetic grid spanning short to ultra-distance races
fn race_grid() -> Vec<RaceProfile> {
    let distances = [
        20.0, 46.0, 59.0, 60.0, 99.0, 100.0, 150.0, 199.0, 200.0, 201.0, 300.0, 301.0, 450.0,
        2745.0,
    ];
    let elevations = [0.0, 1_500.0, 6_000.0, 15_000.0, 90_000.0];
    let mut grid = Vec::new();
    for (d, &distance) in distances.iter().enumerate() {
        for (e, &elevation_ft) in elevations.iter().enumerate() {
            for tier in 1..=4 {
                let rating = f64::from((d + e + tier) as u32 % 6);
                let mut race = profile(
                    &format!("grid-{d}-{e}-{tier}"),
                    distance,
                    elevation_ft,
                    f64::from(tier as u32),
                    rating,
                    5.0 - rating,
                    rating,
                    f64::from((d * e) as u32 % 6),
                    f64::from(e as u32),
                    rating,
                );
                if d % 3 == 0 {
                    race.discipline = "bikepacking".to_owned();
                }
                grid.push(race);
            }
        }
    }
    grid
}

// === Reference picks ===

#[test]
fn test_unbound_reference_showcase() {
    let mut race = profile("unbound-200", 200.0, 11_000.0, 1.0, 5.0, 5.0, 4.0, 5.0, 1.0, 3.0);
    race.climate_challenges = vec![
        "Heat adaptation critical".to_owned(),
        "Wind exposure".to_owned(),
    ];
    assert_eq!(
        picks(&engine(), &race),
        vec![
            "Tired VO2max",
            "Surge and Settle",
            "Breakaway Simulation",
            "Terrain Simulation Z2",
            "Back-to-Back Long",
        ]
    );
}

#[test]
fn test_rasputitsa_reference_showcase() {
    let mut race = profile("rasputitsa", 46.0, 4_200.0, 3.0, 3.0, 3.0, 4.0, 2.0, 1.0, 3.0);
    race.rider_commentary = Some("Mud season on dirt roads".to_owned());
    race.climate_challenges = vec!["Snow and ice on climbs".to_owned()];
    assert_eq!(
        picks(&engine(), &race),
        vec![
            "Surge and Settle",
            "Breakaway Simulation",
            "W-Prime Depletion",
            "5x3 VO2 Classic",
            "Classic Over-Unders",
        ]
    );
}

#[test]
fn test_tour_divide_reference_showcase() {
    let mut race = profile("tour-divide", 2745.0, 200_000.0, 1.0, 5.0, 3.0, 3.0, 3.0, 4.0, 5.0);
    race.discipline = "bikepacking".to_owned();
    race.rider_commentary = Some("Self-supported along the Great Divide".to_owned());
    race.climate_challenges = vec![
        "Extreme heat in New Mexico".to_owned(),
        "Cold nights".to_owned(),
    ];
    assert_eq!(
        picks(&engine(), &race),
        vec![
            "Progressive Fatigue",
            "Terrain Simulation Z2",
            "Ladder Over-Unders",
            "Variable Grade Simulation",
            "Single Sustained Threshold",
        ]
    );
}

#[test]
fn test_picks_record_category_provenance() {
    let race = profile("leadville-100", 104.0, 11_900.0, 1.0, 5.0, 5.0, 4.0, 4.0, 5.0, 5.0);
    let result = engine().evaluate(&race);
    for pick in result.showcase.picks() {
        let category = result
            .category_scores
            .iter()
            .find(|score| score.category == pick.category)
            .unwrap();
        assert_eq!(category.score, pick.score);
        assert!(category.workouts.contains(&pick.workout));
    }
}

// === Determinism ===

#[test]
fn test_selection_is_deterministic() {
    let engine = engine();
    for race in race_grid() {
        assert_eq!(engine.evaluate(&race), engine.evaluate(&race), "{}", race.slug);
    }
}

#[test]
fn test_race_identity_changes_picks() {
    let engine = engine();
    let race = profile("base", 100.0, 6_000.0, 2.0, 4.0, 4.0, 3.0, 3.0, 1.0, 3.0);
    let distinct: HashSet<Vec<String>> = (0..20)
        .map(|i| engine.evaluate_as(&format!("race-{i}"), &race).showcase.combination_key())
        .collect();
    assert!(distinct.len() > 1);
}

#[test]
fn test_digest_pick_matches_reference_prefix() {
    // first 16 bytes of sha256("abc") = ba7816bf8f01cfea414140de5dae2223
    assert_eq!(
        DigestPick::seed_value("abc"),
        0xba78_16bf_8f01_cfea_4141_40de_5dae_2223
    );
    assert_eq!(DigestPick.pick("abc", 1), Some(0));
}

#[test]
fn test_digest_pick_uses_the_whole_prefix() {
    // residues of the full 128-bit prefix, not of a truncated 64-bit word
    let picks: Vec<Option<usize>> = [2, 3, 5, 7, 13]
        .into_iter()
        .map(|len| DigestPick.pick("abc", len))
        .collect();
    assert_eq!(picks, vec![Some(1), Some(2), Some(1), Some(4), Some(7)]);
    assert_eq!(DigestPick.pick("abc", 0), None);
}

// === Coach-sanity invariants ===

#[test]
fn test_never_showcase_workouts_never_appear() {
    let engine = engine();
    for race in race_grid() {
        let result = engine.evaluate(&race);
        for workout in NEVER_SHOWCASE {
            assert!(
                !result.showcase.contains(workout),
                "{workout} shown for {}",
                race.slug
            );
        }
    }
}

#[test]
fn test_distance_and_climbing_gates_hold() {
    let engine = engine();
    for race in race_grid() {
        let result = engine.evaluate(&race);
        let distance = race.distance_mi;
        for workout in result.showcase.workouts() {
            if workout == "Double Day Simulation" {
                assert!(distance >= 200.0, "{workout} for {distance}mi");
            }
            if ["Breakaway Simulation", "Variable Pace Chaos", "Sector Simulation"]
                .contains(&workout)
            {
                assert!(distance <= 300.0, "{workout} for {distance}mi");
            }
            if ["2min Killers", "Attack Repeats"].contains(&workout) {
                assert!(distance <= 200.0, "{workout} for {distance}mi");
            }
            if ["Seated/Standing Climbs", "Variable Grade Simulation"].contains(&workout) {
                assert!(result.demands.climbing >= 5, "{workout} for {}", race.slug);
            }
            if workout == "Tired VO2max" {
                assert!(distance >= 60.0, "{workout} for {distance}mi");
            }
        }
    }
}

#[test]
fn test_grid_always_fills_showcase() {
    let engine = engine();
    for race in race_grid() {
        let result = engine.evaluate(&race);
        assert_eq!(result.showcase.len(), 5, "{} came back short", race.slug);
    }
}

#[test]
fn test_eligibility_evaluator_public_contract() {
    let rules = EligibilityRuleTable::standard();
    let evaluator = EligibilityEvaluator::new(&rules);
    let low = DemandVector {
        climbing: 4,
        ..DemandVector::default()
    };
    let high = DemandVector {
        climbing: 5,
        ..DemandVector::default()
    };
    assert!(!evaluator.is_eligible("Double Day Simulation", 199.0, &low));
    assert!(evaluator.is_eligible("Double Day Simulation", 200.0, &low));
    assert!(!evaluator.is_eligible("Sector Simulation", 300.5, &low));
    assert!(!evaluator.is_eligible("Seated/Standing Climbs", 100.0, &low));
    assert!(evaluator.is_eligible("Seated/Standing Climbs", 100.0, &high));
    assert!(!evaluator.is_eligible("Easy Spin", 100.0, &high));
}
