// ABOUTME: Per-workout eligibility rules as a tagged variant
// ABOUTME: Distance bounds, climbing gates, or permanent exclusion from showcases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use showcase_core::models::DemandVector;
use std::collections::BTreeMap;

/// Eligibility constraint attached to a workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EligibilityRule {
    /// Shown for any race
    Unconstrained,
    /// Shown only when race distance (miles) lies within the bounds
    DistanceBounded {
        /// Inclusive lower bound
        min: Option<f64>,
        /// Inclusive upper bound
        max: Option<f64>,
    },
    /// Shown only when the race's climbing demand reaches `min`
    ClimbingGated {
        /// Minimum climbing score (0-10)
        min: u8,
    },
    /// Recovery, assessment, and taper sessions never represent a race
    NeverShowcase,
}

impl EligibilityRule {
    /// Minimum distance only
    #[must_use]
    pub const fn min_distance(min: f64) -> Self {
        Self::DistanceBounded {
            min: Some(min),
            max: None,
        }
    }

    /// Maximum distance only
    #[must_use]
    pub const fn max_distance(max: f64) -> Self {
        Self::DistanceBounded {
            min: None,
            max: Some(max),
        }
    }

    /// Whether the rule admits a race with this distance and demand vector
    #[must_use]
    pub fn permits(&self, distance_mi: f64, demands: &DemandVector) -> bool {
        match *self {
            Self::Unconstrained => true,
            Self::DistanceBounded { min, max } => {
                min.is_none_or(|min| distance_mi >= min) && max.is_none_or(|max| distance_mi <= max)
            }
            Self::ClimbingGated { min } => demands.climbing >= min,
            Self::NeverShowcase => false,
        }
    }

    /// Whether the workout may ever appear in a showcase
    #[must_use]
    pub const fn is_showcasable(&self) -> bool {
        !matches!(self, Self::NeverShowcase)
    }
}

/// Shipped rules; every catalog workout has an entry
const STANDARD_RULES: &[(&str, EligibilityRule)] = &[
    // Durability
    ("Tired VO2max", EligibilityRule::min_distance(60.0)),
    ("Double Day Simulation", EligibilityRule::min_distance(200.0)),
    ("Progressive Fatigue", EligibilityRule::Unconstrained),
    // VO2max
    ("5x3 VO2 Classic", EligibilityRule::max_distance(400.0)),
    ("Descending VO2 Pyramid", EligibilityRule::max_distance(400.0)),
    ("Norwegian 4x8", EligibilityRule::max_distance(400.0)),
    // HVLI_Extended
    ("HVLI Extended Z2", EligibilityRule::min_distance(80.0)),
    ("Multi-Hour Z2", EligibilityRule::min_distance(100.0)),
    ("Back-to-Back Long", EligibilityRule::min_distance(120.0)),
    // Race_Simulation
    ("Breakaway Simulation", EligibilityRule::max_distance(300.0)),
    ("Variable Pace Chaos", EligibilityRule::max_distance(300.0)),
    ("Sector Simulation", EligibilityRule::max_distance(300.0)),
    // TT_Threshold
    ("Single Sustained Threshold", EligibilityRule::Unconstrained),
    ("Threshold Ramps", EligibilityRule::Unconstrained),
    ("Descending Threshold", EligibilityRule::Unconstrained),
    // G_Spot
    ("G-Spot Standard", EligibilityRule::Unconstrained),
    ("G-Spot Extended", EligibilityRule::min_distance(60.0)),
    ("Criss-Cross", EligibilityRule::Unconstrained),
    // Mixed_Climbing
    ("Seated/Standing Climbs", EligibilityRule::ClimbingGated { min: 5 }),
    ("Variable Grade Simulation", EligibilityRule::ClimbingGated { min: 5 }),
    // Over_Under
    ("Classic Over-Unders", EligibilityRule::Unconstrained),
    ("Ladder Over-Unders", EligibilityRule::Unconstrained),
    // Gravel_Specific
    ("Surge and Settle", EligibilityRule::max_distance(300.0)),
    ("Terrain Microbursts", EligibilityRule::max_distance(300.0)),
    // Endurance
    ("Pre-Race Openers", EligibilityRule::NeverShowcase),
    ("Terrain Simulation Z2", EligibilityRule::Unconstrained),
    // Critical_Power
    ("Above CP Repeats", EligibilityRule::max_distance(300.0)),
    ("W-Prime Depletion", EligibilityRule::max_distance(300.0)),
    // Anaerobic_Capacity
    ("2min Killers", EligibilityRule::max_distance(200.0)),
    ("90sec Repeats", EligibilityRule::max_distance(200.0)),
    // Sprint_Neuromuscular
    ("Attack Repeats", EligibilityRule::max_distance(200.0)),
    ("Sprint Buildups", EligibilityRule::max_distance(200.0)),
    // Norwegian_Double
    ("Norwegian 4x8 Classic", EligibilityRule::max_distance(400.0)),
    ("Double Threshold", EligibilityRule::max_distance(400.0)),
    // SFR_Muscle_Force
    ("SFR Low Cadence", EligibilityRule::Unconstrained),
    ("Force Repeats", EligibilityRule::Unconstrained),
    // Cadence_Work
    ("High Cadence Drills", EligibilityRule::Unconstrained),
    ("Cadence Pyramids", EligibilityRule::Unconstrained),
    // Blended
    ("Z2 + VO2 Combo", EligibilityRule::max_distance(300.0)),
    ("Endurance with Spikes", EligibilityRule::Unconstrained),
    // Tempo
    ("Tempo Blocks", EligibilityRule::Unconstrained),
    ("Extended Tempo", EligibilityRule::min_distance(60.0)),
    // LT1_MAF
    ("MAF Capped Ride", EligibilityRule::NeverShowcase),
    ("LT1 Assessment", EligibilityRule::NeverShowcase),
    // Recovery
    ("Easy Spin", EligibilityRule::NeverShowcase),
    ("Active Recovery", EligibilityRule::NeverShowcase),
];

/// Immutable workout → rule table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EligibilityRuleTable {
    rules: BTreeMap<String, EligibilityRule>,
}

impl EligibilityRuleTable {
    /// The shipped rule table
    #[must_use]
    pub fn standard() -> Self {
        Self::from_rules(
            STANDARD_RULES
                .iter()
                .map(|(workout, rule)| ((*workout).to_owned(), *rule)),
        )
    }

    /// Build a table from (workout, rule) pairs; later entries replace earlier ones
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (String, EligibilityRule)>,
    {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Rule for a workout, if it has an entry
    #[must_use]
    pub fn get(&self, workout: &str) -> Option<&EligibilityRule> {
        self.rules.get(workout)
    }

    /// All entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EligibilityRule)> {
        self.rules.iter().map(|(workout, rule)| (workout.as_str(), rule))
    }

    /// Workouts that can never be showcased
    pub fn never_showcase(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, rule)| !rule.is_showcasable())
            .map(|(workout, _)| workout)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
