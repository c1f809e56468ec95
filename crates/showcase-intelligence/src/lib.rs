// ABOUTME: Race demand profiling and deterministic workout showcase engine
// ABOUTME: Pure pipeline from race profile to demand vector, category scores, and selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Showcase Intelligence
//!
//! The engine behind race training-pack previews. Data flows one way:
//!
//! 1. [`demand_analyzer`] maps a `RaceProfile` to a `DemandVector`
//! 2. [`category_scorer`] weights demands into ranked category affinities
//! 3. [`eligibility`] filters workouts that make no sense for the race
//! 4. [`selection`] deterministically picks the showcase
//!
//! Content tables live in [`catalog`] and are validated once when a
//! [`ShowcaseEngine`] is built. Nothing here performs I/O.

/// Static weight matrix, catalog, and eligibility rules
pub mod catalog;
/// Category scoring and ranking
pub mod category_scorer;
/// Engine tunables and configuration errors
pub mod config;
/// Per-dimension demand functions
pub mod demand_analyzer;
/// Workout eligibility evaluation
pub mod eligibility;
/// Pipeline entry point
pub mod engine;
/// Pack summary prose
pub mod pack_summary;
/// Deterministic workout selection
pub mod selection;

pub use catalog::{Catalog, EligibilityRule, EligibilityRuleTable, WeightMatrix};
pub use category_scorer::CategoryScorer;
pub use config::{ConfigError, ShowcaseConfig};
pub use demand_analyzer::{analyze, ClimbingCalibration};
pub use eligibility::EligibilityEvaluator;
pub use engine::{ShowcaseEngine, ShowcaseResult};
pub use pack_summary::generate_pack_summary;
pub use selection::{DeterministicPick, DigestPick, WorkoutSelector};
