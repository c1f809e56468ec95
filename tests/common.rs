// ABOUTME: Shared fixtures for integration tests: a reference corpus of real-world-shaped races
// ABOUTME: Provides RaceProfile builders and nested race documents for driver tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use serde_json::{json, Value};
use showcase_core::models::RaceProfile;
use showcase_intelligence::{ShowcaseConfig, ShowcaseEngine};

/// One row of the reference corpus
pub struct RaceRow {
    pub slug: &'static str,
    pub distance_mi: f64,
    pub elevation_ft: f64,
    pub tier: f64,
    pub prestige: f64,
    pub field_depth: f64,
    pub technicality: f64,
    pub climate: f64,
    pub altitude: f64,
    pub elevation: f64,
    pub discipline: &'static str,
    pub commentary: &'static str,
    pub challenges: &'static [&'static str],
}

/// Reference corpus spanning sprint gravel to multi-week bikepacking
#[rustfmt::skip]
pub const REFERENCE_CORPUS: &[RaceRow] = &[
    RaceRow { slug: "unbound-200", distance_mi: 200.0, elevation_ft: 11000.0, tier: 1.0, prestige: 5.0, field_depth: 5.0, technicality: 4.0, climate: 5.0, altitude: 1.0, elevation: 3.0, discipline: "gravel", commentary: "", challenges: &["Heat adaptation critical", "Wind exposure"] },
    RaceRow { slug: "leadville-100", distance_mi: 104.0, elevation_ft: 11900.0, tier: 1.0, prestige: 5.0, field_depth: 5.0, technicality: 4.0, climate: 4.0, altitude: 5.0, elevation: 5.0, discipline: "mtb", commentary: "", challenges: &["Afternoon thunderstorms", "Cold mornings"] },
    RaceRow { slug: "mid-south", distance_mi: 100.0, elevation_ft: 4500.0, tier: 2.0, prestige: 4.0, field_depth: 4.0, technicality: 3.0, climate: 5.0, altitude: 1.0, elevation: 2.0, discipline: "gravel", commentary: "Red clay turns to peanut butter when wet", challenges: &[] },
    RaceRow { slug: "rasputitsa", distance_mi: 46.0, elevation_ft: 4200.0, tier: 3.0, prestige: 3.0, field_depth: 3.0, technicality: 4.0, climate: 2.0, altitude: 1.0, elevation: 3.0, discipline: "gravel", commentary: "Mud season on dirt roads", challenges: &["Snow and ice on climbs"] },
    RaceRow { slug: "tour-divide", distance_mi: 2745.0, elevation_ft: 200000.0, tier: 1.0, prestige: 5.0, field_depth: 3.0, technicality: 3.0, climate: 3.0, altitude: 4.0, elevation: 5.0, discipline: "bikepacking", commentary: "Self-supported along the Great Divide", challenges: &["Extreme heat in New Mexico", "Cold nights"] },
    RaceRow { slug: "trans-am-bike-race", distance_mi: 4233.0, elevation_ft: 180000.0, tier: 2.0, prestige: 4.0, field_depth: 3.0, technicality: 1.0, climate: 3.0, altitude: 2.0, elevation: 4.0, discipline: "bikepacking", commentary: "Riders fight hot afternoons in Kansas", challenges: &["Heat", "Headwinds"] },
    RaceRow { slug: "atlas-mountain-race", distance_mi: 750.0, elevation_ft: 80000.0, tier: 2.0, prestige: 3.0, field_depth: 2.0, technicality: 4.0, climate: 2.0, altitude: 4.0, elevation: 5.0, discipline: "bikepacking", commentary: "", challenges: &["Extreme heat", "Cold nights"] },
    RaceRow { slug: "bwr-california", distance_mi: 131.0, elevation_ft: 11000.0, tier: 1.0, prestige: 5.0, field_depth: 5.0, technicality: 5.0, climate: 3.0, altitude: 1.0, elevation: 4.0, discipline: "gravel", commentary: "", challenges: &[] },
    RaceRow { slug: "chequamegon-mtb", distance_mi: 40.0, elevation_ft: 2500.0, tier: 2.0, prestige: 4.0, field_depth: 5.0, technicality: 3.0, climate: 2.0, altitude: 1.0, elevation: 2.0, discipline: "mtb", commentary: "", challenges: &[] },
    RaceRow { slug: "sbt-grvl", distance_mi: 142.0, elevation_ft: 9000.0, tier: 1.0, prestige: 5.0, field_depth: 5.0, technicality: 2.0, climate: 3.0, altitude: 4.0, elevation: 3.0, discipline: "gravel", commentary: "", challenges: &["Altitude", "Afternoon storms"] },
    RaceRow { slug: "big-sugar", distance_mi: 104.0, elevation_ft: 9000.0, tier: 2.0, prestige: 4.0, field_depth: 4.0, technicality: 3.0, climate: 3.0, altitude: 1.0, elevation: 3.0, discipline: "gravel", commentary: "", challenges: &[] },
    RaceRow { slug: "gravel-worlds", distance_mi: 150.0, elevation_ft: 9000.0, tier: 2.0, prestige: 4.0, field_depth: 3.0, technicality: 2.0, climate: 4.0, altitude: 1.0, elevation: 3.0, discipline: "gravel", commentary: "The heat in Nebraska in August is real", challenges: &[] },
    RaceRow { slug: "steamboat-gravel", distance_mi: 141.0, elevation_ft: 9000.0, tier: 2.0, prestige: 4.0, field_depth: 4.0, technicality: 2.0, climate: 2.0, altitude: 3.0, elevation: 3.0, discipline: "gravel", commentary: "", challenges: &[] },
    RaceRow { slug: "the-rift", distance_mi: 124.0, elevation_ft: 6500.0, tier: 2.0, prestige: 4.0, field_depth: 4.0, technicality: 3.0, climate: 1.0, altitude: 1.0, elevation: 2.0, discipline: "gravel", commentary: "", challenges: &["Volcanic ash", "Cold rain"] },
    RaceRow { slug: "badlands", distance_mi: 466.0, elevation_ft: 52000.0, tier: 2.0, prestige: 4.0, field_depth: 2.0, technicality: 3.0, climate: 5.0, altitude: 2.0, elevation: 5.0, discipline: "bikepacking", commentary: "Desert heat and long climbs", challenges: &["Extreme heat", "Water scarcity"] },
    RaceRow { slug: "crusher-in-the-tushar", distance_mi: 70.0, elevation_ft: 10000.0, tier: 2.0, prestige: 4.0, field_depth: 4.0, technicality: 4.0, climate: 3.0, altitude: 4.0, elevation: 5.0, discipline: "gravel", commentary: "", challenges: &[] },
    RaceRow { slug: "grinduro-california", distance_mi: 62.0, elevation_ft: 7000.0, tier: 3.0, prestige: 3.0, field_depth: 3.0, technicality: 4.0, climate: 3.0, altitude: 1.0, elevation: 4.0, discipline: "gravel", commentary: "", challenges: &[] },
    RaceRow { slug: "land-run-100", distance_mi: 106.0, elevation_ft: 4000.0, tier: 3.0, prestige: 3.0, field_depth: 3.0, technicality: 2.0, climate: 3.0, altitude: 1.0, elevation: 1.0, discipline: "gravel", commentary: "", challenges: &[] },
    RaceRow { slug: "barry-roubaix", distance_mi: 62.0, elevation_ft: 3500.0, tier: 2.0, prestige: 4.0, field_depth: 4.0, technicality: 2.0, climate: 2.0, altitude: 1.0, elevation: 2.0, discipline: "gravel", commentary: "", challenges: &["Cold temperatures"] },
    RaceRow { slug: "gravel-locos", distance_mi: 152.0, elevation_ft: 7000.0, tier: 3.0, prestige: 3.0, field_depth: 3.0, technicality: 3.0, climate: 5.0, altitude: 1.0, elevation: 2.0, discipline: "gravel", commentary: "Texas heat", challenges: &["Heat"] },
    RaceRow { slug: "rooted-vermont", distance_mi: 72.0, elevation_ft: 7500.0, tier: 3.0, prestige: 3.0, field_depth: 3.0, technicality: 3.0, climate: 2.0, altitude: 1.0, elevation: 3.0, discipline: "gravel", commentary: "", challenges: &[] },
    RaceRow { slug: "dirty-reiver", distance_mi: 124.0, elevation_ft: 7200.0, tier: 2.0, prestige: 3.0, field_depth: 3.0, technicality: 3.0, climate: 2.0, altitude: 1.0, elevation: 3.0, discipline: "gravel", commentary: "", challenges: &["Wind", "Rain"] },
    RaceRow { slug: "highland-trail-550", distance_mi: 550.0, elevation_ft: 49000.0, tier: 3.0, prestige: 3.0, field_depth: 2.0, technicality: 4.0, climate: 2.0, altitude: 1.0, elevation: 5.0, discipline: "bikepacking", commentary: "", challenges: &["Midges", "Rain"] },
    RaceRow { slug: "arkansas-high-country", distance_mi: 1037.0, elevation_ft: 81000.0, tier: 3.0, prestige: 2.0, field_depth: 1.0, technicality: 3.0, climate: 4.0, altitude: 1.0, elevation: 5.0, discipline: "bikepacking", commentary: "Hot and humid summer", challenges: &["Heat and humidity"] },
    RaceRow { slug: "lost-and-found", distance_mi: 100.0, elevation_ft: 6500.0, tier: 3.0, prestige: 3.0, field_depth: 3.0, technicality: 3.0, climate: 3.0, altitude: 3.0, elevation: 3.0, discipline: "gravel", commentary: "", challenges: &[] },
    RaceRow { slug: "oregon-trail-gravel", distance_mi: 345.0, elevation_ft: 34000.0, tier: 3.0, prestige: 3.0, field_depth: 2.0, technicality: 3.0, climate: 3.0, altitude: 2.0, elevation: 4.0, discipline: "gravel", commentary: "", challenges: &[] },
    RaceRow { slug: "gravel-earth", distance_mi: 160.0, elevation_ft: 8000.0, tier: 2.0, prestige: 3.0, field_depth: 3.0, technicality: 3.0, climate: 3.0, altitude: 1.0, elevation: 3.0, discipline: "gravel", commentary: "", challenges: &[] },
    RaceRow { slug: "iowa-wind-and-rock", distance_mi: 340.0, elevation_ft: 14000.0, tier: 3.0, prestige: 2.0, field_depth: 2.0, technicality: 2.0, climate: 3.0, altitude: 1.0, elevation: 2.0, discipline: "gravel", commentary: "", challenges: &["Wind"] },
    RaceRow { slug: "small-local-race", distance_mi: 30.0, elevation_ft: 1200.0, tier: 4.0, prestige: 1.0, field_depth: 1.0, technicality: 1.0, climate: 2.0, altitude: 1.0, elevation: 1.0, discipline: "gravel", commentary: "", challenges: &[] },
    RaceRow { slug: "flat-century", distance_mi: 100.0, elevation_ft: 1500.0, tier: 4.0, prestige: 2.0, field_depth: 2.0, technicality: 1.0, climate: 3.0, altitude: 1.0, elevation: 1.0, discipline: "gravel", commentary: "", challenges: &[] },
];

impl RaceRow {
    pub fn profile(&self) -> RaceProfile {
        RaceProfile {
            distance_mi: self.distance_mi,
            elevation_ft: self.elevation_ft,
            tier: self.tier,
            prestige_rating: self.prestige,
            field_depth_rating: self.field_depth,
            technicality_rating: self.technicality,
            climate_rating: self.climate,
            altitude_rating: self.altitude,
            elevation_rating: self.elevation,
            discipline: self.discipline.to_owned(),
            rider_commentary: (!self.commentary.is_empty()).then(|| self.commentary.to_owned()),
            climate_challenges: self.challenges.iter().map(|c| (*c).to_owned()).collect(),
            ..RaceProfile::new(self.slug)
        }
    }

    /// Nested race document as stored in the race-data directory
    pub fn document(&self) -> Value {
        json!({
            "race": {
                "slug": self.slug,
                "name": self.slug.replace('-', " "),
                "vitals": {
                    "distance_mi": self.distance_mi,
                    "elevation_ft": format!("{}", self.elevation_ft),
                    "location": "Somewhere Rural",
                    "terrain_types": ["Gravel roads"]
                },
                "gravel_god_rating": {
                    "tier": self.tier,
                    "prestige": self.prestige,
                    "field_depth": self.field_depth,
                    "technicality": self.technicality,
                    "climate": self.climate,
                    "altitude": self.altitude,
                    "elevation": self.elevation,
                    "discipline": self.discipline
                },
                "climate": { "challenges": self.challenges },
                "youtube_data": { "rider_intel": { "search_text": self.commentary } }
            }
        })
    }
}

pub fn corpus_profiles() -> Vec<RaceProfile> {
    REFERENCE_CORPUS.iter().map(RaceRow::profile).collect()
}

pub fn find(slug: &str) -> &'static RaceRow {
    REFERENCE_CORPUS
        .iter()
        .find(|row| row.slug == slug)
        .unwrap_or_else(|| panic!("{slug} missing from reference corpus"))
}

pub fn standard_engine() -> ShowcaseEngine {
    ShowcaseEngine::standard(ShowcaseConfig::default()).unwrap()
}
