// ABOUTME: One-sentence training pack summary built from top categories and course vitals
// ABOUTME: Falls back to generic phrasing for missing terrain, location, or distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use showcase_core::models::{CategoryScore, RaceProfile};

const FOCUS_FALLBACK: &str = "targeted training";
const DISTANCE_FALLBACK: &str = "the full distance";
const TERRAIN_FALLBACK: &str = "mixed terrain";
const LOCATION_FALLBACK: &str = "the course";
const FOCUS_CATEGORIES: usize = 3;

/// Build the pack summary sentence for a race
#[must_use]
pub fn generate_pack_summary(profile: &RaceProfile, top_categories: &[CategoryScore]) -> String {
    let names: Vec<String> = top_categories
        .iter()
        .take(FOCUS_CATEGORIES)
        .map(|entry| entry.category.replace('_', " "))
        .collect();

    let focus = match names.as_slice() {
        [] => FOCUS_FALLBACK.to_owned(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [first, second, third, ..] => format!("{first}, {second}, and {third}"),
    };

    let distance = if profile.distance_mi >= 1.0 {
        format!("{} miles", profile.distance_mi.trunc() as u64)
    } else {
        DISTANCE_FALLBACK.to_owned()
    };

    let terrain = terrain_phrase(profile);
    let location = non_empty(profile.location.as_deref()).unwrap_or(LOCATION_FALLBACK);

    format!(
        "This 10-workout pack focuses on {focus} to prepare you for {distance} of {terrain} \
         in {location}."
    )
}

fn terrain_phrase(profile: &RaceProfile) -> String {
    let raw = non_empty(profile.terrain_primary.as_deref())
        .or_else(|| non_empty(profile.terrain_types.first().map(String::as_str)))
        .unwrap_or(TERRAIN_FALLBACK);
    raw.trim_end_matches('.').to_lowercase()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
