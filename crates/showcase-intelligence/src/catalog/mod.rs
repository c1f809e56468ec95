// ABOUTME: Static content tables for the showcase engine
// ABOUTME: Weight matrix, workout catalog, eligibility rules, and their consistency checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Content tables
//!
//! The tables are hand-curated constants. Each is exposed as an immutable
//! value object with a `standard()` constructor for the shipped content and a
//! plain constructor for alternative tables in tests and tooling. Changing
//! the content is a tuning change; [`validate_tables`] keeps it consistent.

mod rules;
mod validation;
mod weights;
mod workouts;

pub use rules::{EligibilityRule, EligibilityRuleTable};
pub use validation::validate_tables;
pub use weights::{CategoryWeight, WeightMatrix};
pub use workouts::{Catalog, CatalogEntry};
