// ABOUTME: Constants for demand scoring, showcase selection, and race-document defaults
// ABOUTME: Pure data constants organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Demand vector bounds
pub mod demand {
    /// Lowest score any demand dimension can take
    pub const MIN_SCORE: u8 = 0;
    /// Highest score any demand dimension can take
    pub const MAX_SCORE: u8 = 10;
    /// Number of demand dimensions
    pub const DIMENSION_COUNT: usize = 8;
}

/// Category score normalization
pub mod scoring {
    /// Score assigned to the strongest category for a non-zero demand vector
    pub const NORMALIZED_MAX: u32 = 100;
}

/// Showcase selection sizes
pub mod selection {
    /// Workouts shown per race
    pub const SHOWCASE_SIZE: usize = 5;
    /// Default number of top categories listed in a preview
    pub const TOP_N_DEFAULT: usize = 8;
    /// Minimum number of top categories listed in a preview
    pub const TOP_N_MIN: usize = 5;
    /// A category may be reachable from at most this many demand dimensions
    pub const MAX_DIMENSIONS_PER_CATEGORY: usize = 4;
    /// The rule table must leave at least this many workouts showcasable
    pub const MIN_SHOWCASABLE_WORKOUTS: usize = 20;
    /// Separator between race identifier and category name in pick seeds
    pub const SEED_SEPARATOR: char = ':';
}

/// Corpus-wide validation limits
pub mod corpus {
    /// Minimum share of races that must receive a distinct workout combination
    pub const MIN_UNIQUE_RATIO: f64 = 0.75;
    /// No workout combination may be shared by more races than this
    pub const MAX_DUPLICATE_COMBOS: usize = 5;
}

/// Race-document defaults applied when fields are missing or malformed
pub mod race_defaults {
    /// Tier assumed when neither `tier` nor `display_tier` is usable
    pub const TIER: f64 = 4.0;
    /// Discipline assumed when none is given
    pub const DISCIPLINE: &str = "gravel";
    /// Discipline label that adds multi-day durability load
    pub const BIKEPACKING: &str = "bikepacking";
    /// Slug used when a document carries none
    pub const UNKNOWN_SLUG: &str = "unknown";
}

/// Heat-related vocabulary matched against commentary and climate challenges
pub mod heat {
    /// Case-insensitive substring keywords that indicate heat stress
    pub const KEYWORDS: &[&str] = &[
        "heat",
        "hot",
        "hydration",
        "sun exposure",
        "humidity",
        "heat adaptation",
        "overheating",
    ];
}
