// ABOUTME: Category scorer turning a demand vector into ranked, normalized category affinities
// ABOUTME: Accumulates weighted demand per category and scales the strongest to 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Category Scorer
//!
//! `raw[category] += clamp(demand, 0, 10) * weight` over every matrix entry,
//! then `score = round_half_even(raw / max_raw * 100)`. Ranking is by score
//! descending; equal scores keep the order in which categories were first
//! reached, which for a full demand vector is the matrix order.

use crate::catalog::{Catalog, WeightMatrix};
use showcase_core::constants::{demand, scoring, selection};
use showcase_core::models::{CategoryScore, DemandDimension, DemandVector};

/// Scores demand vectors against a weight matrix and catalog
#[derive(Debug, Clone, Copy)]
pub struct CategoryScorer<'a> {
    matrix: &'a WeightMatrix,
    catalog: &'a Catalog,
}

impl<'a> CategoryScorer<'a> {
    /// Create a scorer over borrowed content tables
    #[must_use]
    pub const fn new(matrix: &'a WeightMatrix, catalog: &'a Catalog) -> Self {
        Self { matrix, catalog }
    }

    /// Ranked scores for a full demand vector
    ///
    /// Every weighted category receives an entry. An all-zero vector scores
    /// every category 0.
    #[must_use]
    pub fn calculate_category_scores(&self, demands: &DemandVector) -> Vec<CategoryScore> {
        self.score_pairs(
            demands
                .entries()
                .map(|(dimension, value)| (dimension.name(), f64::from(value))),
        )
    }

    /// Ranked scores for a loosely keyed demand mapping
    ///
    /// Keys that are not demand dimensions are ignored. Values are clamped to
    /// 0-10 before weighting. Only categories reachable from a supplied
    /// dimension get an entry, so an empty mapping yields an empty table.
    pub fn score_pairs<I, K>(&self, demands: I) -> Vec<CategoryScore>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut raw: Vec<(&str, f64)> = Vec::new();

        for (key, value) in demands {
            let Ok(dimension) = key.as_ref().parse::<DemandDimension>() else {
                continue;
            };
            let clamped = clamp_demand(value);
            for entry in self.matrix.row(dimension) {
                let contribution = clamped * entry.weight;
                if let Some(slot) = raw.iter_mut().find(|(name, _)| *name == entry.category) {
                    slot.1 += contribution;
                } else {
                    raw.push((entry.category.as_str(), contribution));
                }
            }
        }

        let max_raw = raw.iter().map(|(_, value)| *value).fold(0.0_f64, f64::max);
        let mut scores: Vec<CategoryScore> = raw
            .into_iter()
            .map(|(category, value)| CategoryScore {
                category: category.to_owned(),
                score: normalize(value, max_raw),
                workouts: self
                    .catalog
                    .workouts(category)
                    .map(<[String]>::to_vec)
                    .unwrap_or_default(),
            })
            .collect();

        // stable: equal scores keep first-reached order
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores
    }

    /// Top `n` categories with their candidate workouts
    ///
    /// `n` is clamped to at least the minimum preview size and at most the
    /// number of scored categories.
    #[must_use]
    pub fn get_top_categories(&self, demands: &DemandVector, n: usize) -> Vec<CategoryScore> {
        let mut scores = self.calculate_category_scores(demands);
        let n = n.max(selection::TOP_N_MIN).min(scores.len());
        scores.truncate(n);
        scores
    }
}

fn clamp_demand(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(f64::from(demand::MIN_SCORE), f64::from(demand::MAX_SCORE))
}

fn normalize(value: f64, max_raw: f64) -> u32 {
    if max_raw <= 0.0 {
        return 0;
    }
    let scaled = (value / max_raw * f64::from(scoring::NORMALIZED_MAX)).round_ties_even();
    scaled.clamp(0.0, f64::from(scoring::NORMALIZED_MAX)) as u32
}
