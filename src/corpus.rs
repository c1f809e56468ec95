// ABOUTME: Corpus-wide showcase validation across every race in the catalog
// ABOUTME: Catches short selections, exclusion leaks, and low combination variety before deploy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use showcase_core::errors::{AppError, AppResult};
use showcase_core::models::RaceProfile;
use showcase_intelligence::{ShowcaseConfig, ShowcaseEngine};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// A race whose showcase came back short
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortShowcase {
    /// Race slug
    pub slug: String,
    /// Workouts actually selected
    pub selected: usize,
}

/// A never-showcase workout that reached a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionLeak {
    /// Race slug
    pub slug: String,
    /// Offending workout
    pub workout: String,
}

/// A workout combination and the races sharing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedCombination {
    /// Sorted workout names
    pub workouts: Vec<String>,
    /// Races producing this combination
    pub races: Vec<String>,
}

/// Result of evaluating a whole race corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    /// Races evaluated
    pub races: usize,
    /// Races with fewer picks than the showcase size
    pub short: Vec<ShortShowcase>,
    /// Never-showcase workouts found in selections
    pub leaks: Vec<ExclusionLeak>,
    /// Number of distinct combinations
    pub unique_combinations: usize,
    /// Distinct combinations divided by races (1.0 for an empty corpus)
    pub unique_ratio: f64,
    /// Combination shared by the most races
    pub most_duplicated: Option<SharedCombination>,
}

impl CorpusReport {
    /// Human-readable reasons the corpus fails the configured limits
    #[must_use]
    pub fn failures(&self, config: &ShowcaseConfig) -> Vec<String> {
        let mut failures: Vec<String> = self
            .short
            .iter()
            .map(|short| {
                format!(
                    "{} has {} of {} workouts",
                    short.slug, short.selected, config.showcase_size
                )
            })
            .collect();

        failures.extend(
            self.leaks
                .iter()
                .map(|leak| format!("{} shows excluded workout '{}'", leak.slug, leak.workout)),
        );

        if self.unique_ratio < config.min_unique_ratio {
            failures.push(format!(
                "only {:.0}% of races have a distinct combination (need {:.0}%)",
                self.unique_ratio * 100.0,
                config.min_unique_ratio * 100.0
            ));
        }

        if let Some(shared) = &self.most_duplicated {
            if shared.races.len() > config.max_duplicate_combos {
                failures.push(format!(
                    "{} races share one combination (max {}): {}",
                    shared.races.len(),
                    config.max_duplicate_combos,
                    shared.races.join(", ")
                ));
            }
        }

        failures
    }

    /// Fail with every violated limit listed
    ///
    /// # Errors
    ///
    /// Returns a corpus validation error if any limit is violated
    pub fn ensure_valid(&self, config: &ShowcaseConfig) -> AppResult<()> {
        let failures = self.failures(config);
        if failures.is_empty() {
            return Ok(());
        }
        for failure in &failures {
            warn!(failure = %failure, "Corpus validation failure");
        }
        Err(AppError::corpus_validation(failures.join("; ")))
    }
}

/// Evaluate every race and summarize showcase quality across the corpus
#[must_use]
pub fn validate_corpus(engine: &ShowcaseEngine, races: &[RaceProfile]) -> CorpusReport {
    let size = engine.config().showcase_size;
    let eligibility = engine.eligibility();
    let mut short = Vec::new();
    let mut leaks = Vec::new();
    let mut combinations: BTreeMap<Vec<String>, Vec<String>> = BTreeMap::new();

    for race in races {
        let showcase = engine.evaluate(race).showcase;
        if showcase.len() < size {
            short.push(ShortShowcase {
                slug: race.slug.clone(),
                selected: showcase.len(),
            });
        }
        leaks.extend(
            showcase
                .workouts()
                .filter(|workout| !eligibility.is_showcasable(workout))
                .map(|workout| ExclusionLeak {
                    slug: race.slug.clone(),
                    workout: workout.to_owned(),
                }),
        );
        combinations
            .entry(showcase.combination_key())
            .or_default()
            .push(race.slug.clone());
    }

    let unique_combinations = combinations.len();
    let unique_ratio = if races.is_empty() {
        1.0
    } else {
        unique_combinations as f64 / races.len() as f64
    };

    // first maximum in key order keeps the report deterministic
    let most_duplicated = combinations
        .into_iter()
        .fold(None::<SharedCombination>, |best, (workouts, slugs)| match best {
            Some(current) if current.races.len() >= slugs.len() => Some(current),
            _ => Some(SharedCombination {
                workouts,
                races: slugs,
            }),
        });

    info!(
        races = races.len(),
        unique_combinations,
        short = short.len(),
        leaks = leaks.len(),
        "Corpus validation complete"
    );

    CorpusReport {
        races: races.len(),
        short,
        leaks,
        unique_combinations,
        unique_ratio,
        most_duplicated,
    }
}
