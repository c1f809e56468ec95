// ABOUTME: Category score and workout selection models produced by the engine
// ABOUTME: Selections are derived artifacts with category/score provenance per pick
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Normalized affinity of one workout category for a demand vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category name from the weight matrix
    pub category: String,
    /// Normalized score in 0-100
    pub score: u32,
    /// Candidate workouts from the catalog, in catalog order
    pub workouts: Vec<String>,
}

/// One showcased workout and the category that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcasePick {
    /// Workout name
    pub workout: String,
    /// Category the workout was drawn from
    pub category: String,
    /// Score of that category for this race
    pub score: u32,
}

/// Ordered, duplicate-free showcase for one race
///
/// Serialized as a plain array of picks. Deserializing goes through
/// [`WorkoutSelection::push`], so an array naming a workout twice is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkoutSelection {
    picks: Vec<ShowcasePick>,
}

impl WorkoutSelection {
    /// Empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self { picks: Vec::new() }
    }

    /// Append a pick unless the workout is already selected
    ///
    /// Returns whether the pick was added.
    pub fn push(&mut self, pick: ShowcasePick) -> bool {
        if self.contains(&pick.workout) {
            return false;
        }
        self.picks.push(pick);
        true
    }

    /// Whether a workout is already part of the selection
    #[must_use]
    pub fn contains(&self, workout: &str) -> bool {
        self.picks.iter().any(|pick| pick.workout == workout)
    }

    /// Picks in selection order
    #[must_use]
    pub fn picks(&self) -> &[ShowcasePick] {
        &self.picks
    }

    /// Workout names in selection order
    pub fn workouts(&self) -> impl Iterator<Item = &str> {
        self.picks.iter().map(|pick| pick.workout.as_str())
    }

    /// Number of picks
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Whether nothing was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Order-independent key identifying the workout combination
    #[must_use]
    pub fn combination_key(&self) -> Vec<String> {
        let mut names: Vec<String> = self.workouts().map(str::to_owned).collect();
        names.sort_unstable();
        names
    }
}

impl TryFrom<Vec<ShowcasePick>> for WorkoutSelection {
    type Error = AppError;

    fn try_from(picks: Vec<ShowcasePick>) -> Result<Self, Self::Error> {
        let mut selection = Self::new();
        for pick in picks {
            let workout = pick.workout.clone();
            if !selection.push(pick) {
                return Err(AppError::invalid_input(format!(
                    "workout '{workout}' is selected more than once"
                )));
            }
        }
        Ok(selection)
    }
}

impl<'de> Deserialize<'de> for WorkoutSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let picks = Vec::<ShowcasePick>::deserialize(deserializer)?;
        Self::try_from(picks).map_err(D::Error::custom)
    }
}
