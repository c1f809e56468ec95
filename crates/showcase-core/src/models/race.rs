// ABOUTME: Race profile model supplied by the data-loading layer
// ABOUTME: Every field has a documented default so missing data never blocks evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::race_defaults;
use serde::{Deserialize, Serialize};

/// Structured description of a race as consumed by the demand analyzer
///
/// Ratings are editorial scores on a 0-5 scale. They are kept as `f64` because
/// source documents occasionally carry fractional ratings; the analyzer clamps
/// every derived dimension, so out-of-range ratings are tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceProfile {
    /// Stable race identifier, used as the selection seed
    pub slug: String,
    /// Canonical race name
    pub name: Option<String>,
    /// Marketing name preferred for display
    pub display_name: Option<String>,
    /// Course distance in miles
    pub distance_mi: f64,
    /// Total elevation gain in feet
    pub elevation_ft: f64,
    /// Tier from 1 (most prestigious) to 4
    pub tier: f64,
    /// Prestige rating (0-5)
    pub prestige_rating: f64,
    /// Depth of the competitive field (0-5)
    pub field_depth_rating: f64,
    /// Technicality of the course (0-5)
    pub technicality_rating: f64,
    /// Climate severity (0-5)
    pub climate_rating: f64,
    /// Altitude difficulty (0-5)
    pub altitude_rating: f64,
    /// Editorial elevation difficulty (0-5)
    pub elevation_rating: f64,
    /// Discipline label such as "gravel" or "bikepacking"
    pub discipline: String,
    /// Free-text rider commentary
    pub rider_commentary: Option<String>,
    /// Structured climate challenge phrases
    pub climate_challenges: Vec<String>,
    /// Human readable location
    pub location: Option<String>,
    /// Primary terrain description
    pub terrain_primary: Option<String>,
    /// Terrain type labels
    pub terrain_types: Vec<String>,
}

impl Default for RaceProfile {
    fn default() -> Self {
        Self {
            slug: race_defaults::UNKNOWN_SLUG.to_owned(),
            name: None,
            display_name: None,
            distance_mi: 0.0,
            elevation_ft: 0.0,
            tier: race_defaults::TIER,
            prestige_rating: 0.0,
            field_depth_rating: 0.0,
            technicality_rating: 0.0,
            climate_rating: 0.0,
            altitude_rating: 0.0,
            elevation_rating: 0.0,
            discipline: race_defaults::DISCIPLINE.to_owned(),
            rider_commentary: None,
            climate_challenges: Vec::new(),
            location: None,
            terrain_primary: None,
            terrain_types: Vec::new(),
        }
    }
}

impl RaceProfile {
    /// Create an otherwise-default profile for the given slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// Display name, falling back to the canonical name and then the slug
    #[must_use]
    pub fn race_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.name.as_deref().filter(|name| !name.is_empty()))
            .unwrap_or(self.slug.as_str())
    }
}
