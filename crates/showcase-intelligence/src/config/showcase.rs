// ABOUTME: Tunable showcase settings with defaults, env overrides, and validation
// ABOUTME: Loaded once by the driver and passed explicitly into the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use serde::{Deserialize, Serialize};
use showcase_core::constants::{corpus, selection};
use std::env::{self, VarError};
use std::str::FromStr;

/// Runtime tunables for the showcase pipeline
///
/// The weight matrix, catalog, and rule table are not part of this struct;
/// they ship as static content with the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Workouts per selection
    pub showcase_size: usize,
    /// Categories listed in a preview's top-category block
    pub top_categories: usize,
    /// Minimum share of races with a distinct combination
    pub min_unique_ratio: f64,
    /// Maximum races allowed to share one combination
    pub max_duplicate_combos: usize,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            showcase_size: selection::SHOWCASE_SIZE,
            top_categories: selection::TOP_N_DEFAULT,
            min_unique_ratio: corpus::MIN_UNIQUE_RATIO,
            max_duplicate_combos: corpus::MAX_DUPLICATE_COMBOS,
        }
    }
}

impl ShowcaseConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any tunable is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.showcase_size == 0 {
            return Err(ConfigError::InvalidRange("showcase_size must be at least 1"));
        }
        if self.top_categories < selection::TOP_N_MIN {
            return Err(ConfigError::InvalidRange(
                "top_categories must be at least the minimum category count",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_unique_ratio) {
            return Err(ConfigError::InvalidRange(
                "min_unique_ratio must be between 0.0 and 1.0",
            ));
        }
        if self.max_duplicate_combos == 0 {
            return Err(ConfigError::InvalidRange(
                "max_duplicate_combos must be at least 1",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("RACE_SHOWCASE_SIZE", &mut self.showcase_size)?;
        Self::apply_env_var("RACE_SHOWCASE_TOP_CATEGORIES", &mut self.top_categories)?;
        Self::apply_env_var("RACE_SHOWCASE_MIN_UNIQUE_RATIO", &mut self.min_unique_ratio)?;
        Self::apply_env_var(
            "RACE_SHOWCASE_MAX_DUPLICATE_COMBOS",
            &mut self.max_duplicate_combos,
        )?;
        Ok(self)
    }
}
