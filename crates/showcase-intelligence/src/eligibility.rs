// ABOUTME: Eligibility evaluator deciding whether a workout may represent a given race
// ABOUTME: Looks up the workout's rule and applies distance and climbing constraints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::EligibilityRuleTable;
use showcase_core::models::DemandVector;

/// Applies an eligibility rule table to races
#[derive(Debug, Clone, Copy)]
pub struct EligibilityEvaluator<'a> {
    rules: &'a EligibilityRuleTable,
}

impl<'a> EligibilityEvaluator<'a> {
    /// Create an evaluator over a borrowed rule table
    #[must_use]
    pub const fn new(rules: &'a EligibilityRuleTable) -> Self {
        Self { rules }
    }

    /// Whether the workout passes its rule for this race
    ///
    /// A workout without a rule entry is unconstrained here, but see
    /// [`Self::is_showcasable`]: only workouts with an entry are candidates.
    #[must_use]
    pub fn is_eligible(&self, workout: &str, distance_mi: f64, demands: &DemandVector) -> bool {
        self.rules
            .get(workout)
            .is_none_or(|rule| rule.permits(distance_mi, demands))
    }

    /// Whether the workout has an entry and is not permanently excluded
    #[must_use]
    pub fn is_showcasable(&self, workout: &str) -> bool {
        self.rules
            .get(workout)
            .is_some_and(|rule| rule.is_showcasable())
    }

    /// Showcasable workouts from `candidates` that pass eligibility, in order
    pub fn eligible_candidates<'c>(
        &self,
        candidates: &'c [String],
        distance_mi: f64,
        demands: &DemandVector,
    ) -> Vec<&'c str> {
        candidates
            .iter()
            .map(String::as_str)
            .filter(|workout| {
                self.is_showcasable(workout) && self.is_eligible(workout, distance_mi, demands)
            })
            .collect()
    }
}
