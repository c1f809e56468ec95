// ABOUTME: Showcase engine wiring analyzer, scorer, and selector over validated content tables
// ABOUTME: Construction validates tables once; per-race evaluation is pure and infallible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::{validate_tables, Catalog, EligibilityRuleTable, WeightMatrix};
use crate::category_scorer::CategoryScorer;
use crate::config::{ConfigError, ShowcaseConfig};
use crate::demand_analyzer;
use crate::eligibility::EligibilityEvaluator;
use crate::selection::WorkoutSelector;
use serde::{Deserialize, Serialize};
use showcase_core::models::{CategoryScore, DemandVector, RaceProfile, WorkoutSelection};
use tracing::debug;

/// Everything the pipeline derives for one race
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseResult {
    /// Eight-dimension demand profile
    pub demands: DemandVector,
    /// Every scored category, ranked
    pub category_scores: Vec<CategoryScore>,
    /// Selected workouts with provenance
    pub showcase: WorkoutSelection,
}

/// Immutable showcase pipeline
#[derive(Debug, Clone)]
pub struct ShowcaseEngine {
    matrix: WeightMatrix,
    catalog: Catalog,
    rules: EligibilityRuleTable,
    config: ShowcaseConfig,
}

impl ShowcaseEngine {
    /// Engine over the shipped content tables
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or the shipped tables are inconsistent
    pub fn standard(config: ShowcaseConfig) -> Result<Self, ConfigError> {
        Self::from_tables(
            WeightMatrix::standard(),
            Catalog::standard(),
            EligibilityRuleTable::standard(),
            config,
        )
    }

    /// Engine over explicit content tables
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the tables fail
    /// consistency validation
    pub fn from_tables(
        matrix: WeightMatrix,
        catalog: Catalog,
        rules: EligibilityRuleTable,
        config: ShowcaseConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_tables(&matrix, &catalog, &rules)?;
        Ok(Self {
            matrix,
            catalog,
            rules,
            config,
        })
    }

    /// Active tunables
    #[must_use]
    pub const fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Workout catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Eligibility rule table
    #[must_use]
    pub const fn rules(&self) -> &EligibilityRuleTable {
        &self.rules
    }

    /// Category scorer bound to this engine's tables
    #[must_use]
    pub const fn scorer(&self) -> CategoryScorer<'_> {
        CategoryScorer::new(&self.matrix, &self.catalog)
    }

    /// Eligibility evaluator bound to this engine's rules
    #[must_use]
    pub const fn eligibility(&self) -> EligibilityEvaluator<'_> {
        EligibilityEvaluator::new(&self.rules)
    }

    /// Run the pipeline for a race, seeding selection with its slug
    #[must_use]
    pub fn evaluate(&self, profile: &RaceProfile) -> ShowcaseResult {
        self.evaluate_as(&profile.slug, profile)
    }

    /// Run the pipeline with an explicit race identifier as the selection seed
    #[must_use]
    pub fn evaluate_as(&self, race_id: &str, profile: &RaceProfile) -> ShowcaseResult {
        let demands = demand_analyzer::analyze(profile);
        let category_scores = self.scorer().calculate_category_scores(&demands);
        let selector = WorkoutSelector::new(self.eligibility(), self.config.showcase_size);
        let showcase = selector.select(race_id, profile.distance_mi, &demands, &category_scores);

        debug!(
            race_id,
            demand_total = demands.total(),
            selected = showcase.len(),
            "Evaluated race showcase"
        );

        ShowcaseResult {
            demands,
            category_scores,
            showcase,
        }
    }

    /// Top categories for a preview, sized by configuration
    #[must_use]
    pub fn preview_categories(&self, demands: &DemandVector) -> Vec<CategoryScore> {
        self.scorer()
            .get_top_categories(demands, self.config.top_categories)
    }
}
