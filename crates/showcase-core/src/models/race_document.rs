// ABOUTME: Lenient conversion from nested race JSON documents into race profiles
// ABOUTME: Wrong types, nulls, and missing blocks fall back to defaults instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RaceProfile;
use crate::constants::race_defaults;
use serde_json::Value;

static NULL: Value = Value::Null;

impl RaceProfile {
    /// Build a profile from a race document of the form `{"race": {...}}`
    ///
    /// Reads `vitals`, `gravel_god_rating`, `terrain`, `climate`, and
    /// `youtube_data.rider_intel`. Numeric fields accept numbers or strings
    /// such as `"4,500-9,116"` (commas stripped, first number of a range).
    #[must_use]
    pub fn from_race_document(document: &Value) -> Self {
        let race = document.get("race").unwrap_or(&NULL);
        let vitals = race.get("vitals").unwrap_or(&NULL);
        let rating = race.get("gravel_god_rating").unwrap_or(&NULL);
        let number =
            |block: &Value, key: &str| block.get(key).and_then(lenient_number).unwrap_or(0.0);

        let tier = rating
            .get("tier")
            .and_then(lenient_number)
            .or_else(|| rating.get("display_tier").and_then(lenient_number))
            .unwrap_or(race_defaults::TIER);

        Self {
            slug: text(race, "slug").unwrap_or_else(|| race_defaults::UNKNOWN_SLUG.to_owned()),
            name: text(race, "name"),
            display_name: text(race, "display_name"),
            distance_mi: number(vitals, "distance_mi"),
            elevation_ft: number(vitals, "elevation_ft"),
            tier,
            prestige_rating: number(rating, "prestige"),
            field_depth_rating: number(rating, "field_depth"),
            technicality_rating: number(rating, "technicality"),
            climate_rating: number(rating, "climate"),
            altitude_rating: number(rating, "altitude"),
            elevation_rating: number(rating, "elevation"),
            discipline: text(rating, "discipline")
                .unwrap_or_else(|| race_defaults::DISCIPLINE.to_owned()),
            rider_commentary: race
                .get("youtube_data")
                .and_then(|youtube| youtube.get("rider_intel"))
                .and_then(|intel| text(intel, "search_text")),
            climate_challenges: string_list(race.get("climate").and_then(|c| c.get("challenges"))),
            location: text(vitals, "location"),
            terrain_primary: race.get("terrain").and_then(|terrain| text(terrain, "primary")),
            terrain_types: string_list(vitals.get("terrain_types")),
        }
    }
}

/// Number from a JSON number or a numeric-looking string
///
/// Strings have commas removed and keep only the part before the first `-`,
/// so `"4,500-9,116"` reads as 4500. Anything else is `None`.
#[must_use]
pub fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => {
            let cleaned = raw.replace(',', "");
            cleaned.split('-').next()?.trim().parse().ok()
        }
        _ => None,
    }
}

fn text(block: &Value, key: &str) -> Option<String> {
    block
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
