// ABOUTME: Race pack preview assembly and JSON artifact writing
// ABOUTME: Combines demands, top categories, showcase picks, and the pack summary per race
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use showcase_core::errors::{AppError, AppResult};
use showcase_core::models::{CategoryScore, DemandVector, RaceProfile, WorkoutSelection};
use showcase_intelligence::{generate_pack_summary, ShowcaseEngine};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Preview artifact consumed by the race-pack page generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePackPreview {
    /// Race slug
    pub slug: String,
    /// Display name
    pub race_name: String,
    /// Course distance in miles, as recorded in the race document
    pub distance_mi: f64,
    /// Demand vector
    pub demands: DemandVector,
    /// Highest-scoring categories with candidate workouts
    ///
    /// Holds the configured number of leading categories, followed in rank
    /// order by any lower-ranked category that produced a showcase pick.
    pub top_categories: Vec<CategoryScore>,
    /// Showcased workouts with category provenance
    pub showcase: WorkoutSelection,
    /// One-sentence pack description
    pub pack_summary: String,
    /// Generation date, supplied by the caller
    pub generated_at: NaiveDate,
}

impl RacePackPreview {
    /// Evaluate a race and assemble its preview
    #[must_use]
    pub fn build(engine: &ShowcaseEngine, profile: &RaceProfile, generated_at: NaiveDate) -> Self {
        let result = engine.evaluate(profile);
        let mut top_categories = engine.preview_categories(&result.demands);
        for pick in result.showcase.picks() {
            if top_categories.iter().any(|c| c.category == pick.category) {
                continue;
            }
            if let Some(score) = result
                .category_scores
                .iter()
                .find(|c| c.category == pick.category)
            {
                top_categories.push(score.clone());
            }
        }
        let pack_summary = generate_pack_summary(profile, &top_categories);

        Self {
            slug: profile.slug.clone(),
            race_name: profile.race_name().to_owned(),
            distance_mi: profile.distance_mi.max(0.0),
            demands: result.demands,
            top_categories,
            showcase: result.showcase,
            pack_summary,
            generated_at,
        }
    }
}

/// Write a preview as pretty JSON to `<output_dir>/<slug>.json`
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written
pub fn write_preview(preview: &RacePackPreview, output_dir: &Path) -> AppResult<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| {
        AppError::from(e).with_context(format!("creating {}", output_dir.display()))
    })?;

    let path = output_dir.join(format!("{}.json", preview.slug));
    let mut json = serde_json::to_string_pretty(preview)?;
    json.push('\n');
    fs::write(&path, json)
        .map_err(|e| AppError::from(e).with_context(format!("writing {}", path.display())))?;

    info!(slug = %preview.slug, path = %path.display(), "Wrote race pack preview");
    Ok(path)
}
