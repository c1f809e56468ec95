// ABOUTME: Configuration error types for showcase engine validation
// ABOUTME: Covers tunable ranges, env overrides, and static table consistency failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for showcase engine validation.

use showcase_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., ratio not between 0-1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Override variable is set but is not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// A weight in the matrix is zero, negative, or not finite
    #[error("Invalid weight {weight} for category '{category}' under '{dimension}'")]
    InvalidWeight {
        /// Dimension row holding the weight
        dimension: &'static str,
        /// Category receiving the weight
        category: String,
        /// Offending value
        weight: f64,
    },

    /// Weight matrix references a category with no catalog entry
    #[error("Category '{0}' is weighted but missing from the catalog")]
    UnknownCategory(String),

    /// A category is reachable from too many demand dimensions
    #[error("Category '{category}' is reachable from {dimensions} dimensions (max {max})")]
    OverReachableCategory {
        /// Category name
        category: String,
        /// Number of dimensions reaching it
        dimensions: usize,
        /// Allowed maximum
        max: usize,
    },

    /// A catalog workout has no eligibility rule entry
    #[error("Workout '{0}' is listed in the catalog but has no eligibility rule")]
    MissingRule(String),

    /// A workout is listed under more than one category
    #[error("Workout '{0}' appears in more than one catalog category")]
    DuplicateWorkout(String),

    /// A rule can never admit any race
    #[error("Eligibility rule for '{0}' is contradictory")]
    ContradictoryRule(String),

    /// Too few showcasable workouts to fill selections reliably
    #[error("Only {found} showcasable workouts in the catalog (need at least {required})")]
    TooFewShowcasable {
        /// Showcasable workouts found
        found: usize,
        /// Required minimum
        required: usize,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::InvalidRange(_) => ErrorCode::ValueOutOfRange,
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => {
                return Self::config(error.to_string()).with_source(error);
            }
            ConfigError::InvalidWeight { .. }
            | ConfigError::UnknownCategory(_)
            | ConfigError::OverReachableCategory { .. }
            | ConfigError::MissingRule(_)
            | ConfigError::DuplicateWorkout(_)
            | ConfigError::ContradictoryRule(_)
            | ConfigError::TooFewShowcasable { .. } => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
