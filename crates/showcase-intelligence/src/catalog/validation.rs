// ABOUTME: Static consistency checks across the weight matrix, catalog, and rule table
// ABOUTME: Run once at engine construction so inconsistent content fails before any race
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Catalog, EligibilityRule, EligibilityRuleTable, WeightMatrix};
use crate::config::ConfigError;
use showcase_core::constants::{demand, selection};
use std::collections::HashSet;
use tracing::warn;

/// Validate the three content tables against each other
///
/// # Errors
///
/// Returns the first inconsistency found:
/// - a non-positive or non-finite weight
/// - a weighted category missing from the catalog
/// - a category reachable from more than four dimensions
/// - a workout listed under two categories
/// - a catalog workout without a rule entry
/// - a rule that can never admit a race
/// - fewer showcasable workouts than selections need
pub fn validate_tables(
    matrix: &WeightMatrix,
    catalog: &Catalog,
    rules: &EligibilityRuleTable,
) -> Result<(), ConfigError> {
    validate_weights(matrix, catalog)?;
    validate_catalog(catalog, rules)?;
    validate_rules(rules)?;

    let showcasable = catalog
        .all_workouts()
        .filter(|workout| rules.get(workout).is_some_and(EligibilityRule::is_showcasable))
        .count();
    if showcasable < selection::MIN_SHOWCASABLE_WORKOUTS {
        return Err(ConfigError::TooFewShowcasable {
            found: showcasable,
            required: selection::MIN_SHOWCASABLE_WORKOUTS,
        });
    }

    Ok(())
}

fn validate_weights(matrix: &WeightMatrix, catalog: &Catalog) -> Result<(), ConfigError> {
    for (dimension, weights) in matrix.rows() {
        for entry in weights {
            if !entry.weight.is_finite() || entry.weight <= 0.0 {
                return Err(ConfigError::InvalidWeight {
                    dimension: dimension.name(),
                    category: entry.category.clone(),
                    weight: entry.weight,
                });
            }
        }
    }

    for category in matrix.categories() {
        if !catalog.contains_category(category) {
            return Err(ConfigError::UnknownCategory(category.to_owned()));
        }
        let dimensions = matrix.dimensions_reaching(category).len();
        if dimensions > selection::MAX_DIMENSIONS_PER_CATEGORY {
            return Err(ConfigError::OverReachableCategory {
                category: category.to_owned(),
                dimensions,
                max: selection::MAX_DIMENSIONS_PER_CATEGORY,
            });
        }
    }

    Ok(())
}

fn validate_catalog(catalog: &Catalog, rules: &EligibilityRuleTable) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for workout in catalog.all_workouts() {
        if !seen.insert(workout) {
            return Err(ConfigError::DuplicateWorkout(workout.to_owned()));
        }
        if rules.get(workout).is_none() {
            return Err(ConfigError::MissingRule(workout.to_owned()));
        }
    }

    for (workout, _) in rules.iter() {
        if !seen.contains(workout) {
            warn!(workout, "Eligibility rule has no catalog workout");
        }
    }

    Ok(())
}

fn validate_rules(rules: &EligibilityRuleTable) -> Result<(), ConfigError> {
    for (workout, rule) in rules.iter() {
        let contradictory = match *rule {
            EligibilityRule::DistanceBounded { min, max } => {
                let bad_bound =
                    |bound: Option<f64>| bound.is_some_and(|v| !v.is_finite() || v < 0.0);
                let inverted = matches!((min, max), (Some(min), Some(max)) if min > max);
                (min.is_none() && max.is_none()) || bad_bound(min) || bad_bound(max) || inverted
            }
            EligibilityRule::ClimbingGated { min } => min > demand::MAX_SCORE,
            EligibilityRule::Unconstrained | EligibilityRule::NeverShowcase => false,
        };
        if contradictory {
            return Err(ConfigError::ContradictoryRule(workout.to_owned()));
        }
    }
    Ok(())
}
