// ABOUTME: Race demand analyzer mapping a race profile onto eight bounded demand scores
// ABOUTME: One pure function per dimension; out-of-range inputs are clamped, never rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demand Analyzer
//!
//! Every dimension is an integer in `0..=10`. Inputs are editorial ratings on a
//! 0-5 scale plus course vitals; fractional ratings are truncated toward zero
//! before clamping, except where a dimension rounds explicitly.

use showcase_core::constants::{demand, heat, race_defaults};
use showcase_core::models::{DemandVector, RaceProfile};

/// Calibration constants for the climbing blend
///
/// Climbing sums a saturating elevation-gain term with an editorial-rating
/// term whose multiplier grows with elevation. The constants are fit to a
/// reference corpus of known courses and are tuning data, not structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimbingCalibration {
    /// Asymptote of the elevation-gain term
    pub gain_ceiling: f64,
    /// Elevation (ft) controlling how quickly the gain term saturates
    pub gain_scale_ft: f64,
    /// Rating multiplier on a flat course
    pub rating_base: f64,
    /// Extra rating multiplier reached at `rating_ramp_ft`
    pub rating_ramp: f64,
    /// Elevation (ft) at which the rating multiplier stops growing
    pub rating_ramp_ft: f64,
}

impl ClimbingCalibration {
    /// Shipped calibration; saturates near 75% of the dimension ceiling
    pub const STANDARD: Self = Self {
        gain_ceiling: 7.5,
        gain_scale_ft: 30_000.0,
        rating_base: 1.5,
        rating_ramp: 0.3,
        rating_ramp_ft: 30_000.0,
    };

    /// Unclamped climbing value for a course
    #[must_use]
    pub fn blend(&self, elevation_ft: f64, elevation_rating: f64) -> f64 {
        let elevation_ft = elevation_ft.max(0.0);
        let gain = self.gain_ceiling * (1.0 - (-elevation_ft / self.gain_scale_ft).exp());
        let ramp = elevation_ft.min(self.rating_ramp_ft) / self.rating_ramp_ft;
        let multiplier = self.rating_ramp.mul_add(ramp, self.rating_base);
        elevation_rating.mul_add(multiplier, gain)
    }
}

impl Default for ClimbingCalibration {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Truncate toward zero and clamp into the demand range
///
/// NaN maps to the floor of the range.
#[must_use]
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return demand::MIN_SCORE;
    }
    let bounded = value
        .trunc()
        .clamp(f64::from(demand::MIN_SCORE), f64::from(demand::MAX_SCORE));
    bounded as u8
}

/// Fatigue resistance from distance, plus two for multi-day bikepacking
#[must_use]
pub fn durability(distance_mi: f64, discipline: &str) -> u8 {
    let base: u8 = if distance_mi >= 200.0 {
        10
    } else if distance_mi >= 150.0 {
        8
    } else if distance_mi >= 100.0 {
        6
    } else if distance_mi >= 75.0 {
        4
    } else if distance_mi >= 50.0 {
        2
    } else {
        1
    };
    let bonus = if discipline.eq_ignore_ascii_case(race_defaults::BIKEPACKING) {
        2
    } else {
        0
    };
    (base + bonus).min(demand::MAX_SCORE)
}

/// Climbing demand using the shipped calibration
#[must_use]
pub fn climbing(elevation_ft: f64, elevation_rating: f64) -> u8 {
    climbing_with(&ClimbingCalibration::STANDARD, elevation_ft, elevation_rating)
}

/// Climbing demand using an explicit calibration
#[must_use]
pub fn climbing_with(
    calibration: &ClimbingCalibration,
    elevation_ft: f64,
    elevation_rating: f64,
) -> u8 {
    clamp_score(calibration.blend(elevation_ft, elevation_rating).round_ties_even())
}

/// High-end power for deep, prestigious fields
#[must_use]
pub fn vo2_power(field_depth_rating: f64, prestige_rating: f64) -> u8 {
    clamp_score(field_depth_rating + prestige_rating)
}

/// Sustained power; mid-length races demand the most
#[must_use]
pub fn threshold(distance_mi: f64, elevation_rating: f64) -> u8 {
    let base: u8 = if (75.0..=150.0).contains(&distance_mi) {
        7
    } else if (50.0..75.0).contains(&distance_mi) {
        5
    } else if distance_mi > 150.0 {
        4
    } else {
        3
    };
    // climbing makes threshold efforts harder
    let bonus = u8::from(elevation_rating >= 3.0);
    (base + bonus).clamp(demand::MIN_SCORE, demand::MAX_SCORE)
}

/// Bike handling and surges
#[must_use]
pub fn technical(technicality_rating: f64) -> u8 {
    clamp_score(technicality_rating * 2.0)
}

/// Heat adaptation from climate severity and heat mentions
///
/// Commentary mentions add two, challenge mentions add one; both apply even
/// when the climate base is zero.
#[must_use]
pub fn heat_resilience(climate_rating: f64, commentary: Option<&str>, challenges: &[String]) -> u8 {
    let base: u8 = if climate_rating >= 5.0 {
        10
    } else if climate_rating >= 4.0 {
        6
    } else {
        0
    };
    let commentary_bonus = if commentary.is_some_and(mentions_heat) { 2 } else { 0 };
    let challenge_bonus = u8::from(challenges.iter().any(|phrase| mentions_heat(phrase)));
    (base + commentary_bonus + challenge_bonus).min(demand::MAX_SCORE)
}

/// Altitude adaptation
#[must_use]
pub fn altitude(altitude_rating: f64) -> u8 {
    clamp_score(altitude_rating * 2.0)
}

/// Value of race-simulation practice; higher for top tiers and prestige
#[must_use]
pub fn race_specificity(tier: f64, prestige_rating: f64) -> u8 {
    clamp_score((5.0 - tier).mul_add(2.0, prestige_rating).round_ties_even())
}

/// Case-insensitive substring match against the heat vocabulary
#[must_use]
pub fn mentions_heat(text: &str) -> bool {
    let lowered = text.to_lowercase();
    heat::KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Full demand vector for a race profile
#[must_use]
pub fn analyze(profile: &RaceProfile) -> DemandVector {
    DemandVector {
        durability: durability(profile.distance_mi, &profile.discipline),
        climbing: climbing(profile.elevation_ft, profile.elevation_rating),
        vo2_power: vo2_power(profile.field_depth_rating, profile.prestige_rating),
        threshold: threshold(profile.distance_mi, profile.elevation_rating),
        technical: technical(profile.technicality_rating),
        heat_resilience: heat_resilience(
            profile.climate_rating,
            profile.rider_commentary.as_deref(),
            &profile.climate_challenges,
        ),
        altitude: altitude(profile.altitude_rating),
        race_specificity: race_specificity(profile.tier, profile.prestige_rating),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score_truncates_and_bounds() {
        assert_eq!(clamp_score(9.99), 9);
        assert_eq!(clamp_score(-3.0), 0);
        assert_eq!(clamp_score(f64::INFINITY), 10);
        assert_eq!(clamp_score(f64::NAN), 0);
    }

    #[test]
    fn test_durability_steps() {
        assert_eq!(durability(49.9, "gravel"), 1);
        assert_eq!(durability(50.0, "gravel"), 2);
        assert_eq!(durability(75.0, "gravel"), 4);
        assert_eq!(durability(150.0, "gravel"), 8);
        assert_eq!(durability(250.0, "bikepacking"), 10);
    }

    #[test]
    fn test_threshold_window() {
        assert_eq!(threshold(150.0, 0.0), 7);
        assert_eq!(threshold(150.1, 0.0), 4);
        assert_eq!(threshold(74.9, 3.0), 6);
        assert_eq!(threshold(20.0, 0.0), 3);
    }

    #[test]
    fn test_climbing_blend_saturates() {
        let calibration = ClimbingCalibration::STANDARD;
        assert!(calibration.blend(1_000_000.0, 0.0) < 7.5);
        assert_eq!(climbing(0.0, 0.0), 0);
    }

    #[test]
    fn test_race_specificity_rounds_half_to_even() {
        // (5 - 2.75) * 2 + 0 = 4.5
        assert_eq!(race_specificity(2.75, 0.0), 4);
        // (5 - 2.25) * 2 + 0 = 5.5
        assert_eq!(race_specificity(2.25, 0.0), 6);
    }
}
