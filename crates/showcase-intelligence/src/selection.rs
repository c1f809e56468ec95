// ABOUTME: Deterministic workout selector filling a showcase from ranked categories
// ABOUTME: Hash-seeded picks keep output stable per race while varying across races
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout Selector
//!
//! A single pass over ranked categories. For each category the eligible
//! candidates are filtered, one is chosen by a [`DeterministicPick`] seeded
//! with `"{race_id}:{category}"`, and it is appended unless already present.
//! The pass stops once the showcase is full.

use crate::eligibility::EligibilityEvaluator;
use sha2::{Digest, Sha256};
use showcase_core::constants::selection;
use showcase_core::models::{CategoryScore, DemandVector, ShowcasePick, WorkoutSelection};
use tracing::{debug, warn};

/// Strategy mapping a seed onto an index in `0..len`
///
/// Implementations must be pure: the same seed and length always give the
/// same index, on any machine.
pub trait DeterministicPick {
    /// Index into a candidate list of length `len`, or `None` when empty
    fn pick(&self, seed: &str, len: usize) -> Option<usize>;
}

/// SHA-256 pick: the first 128 bits of the digest, big-endian, modulo `len`
///
/// SHA-256 is used as a stable, widely available mixing function. Only the
/// 128-bit prefix being identical across platforms and releases matters;
/// nothing here relies on cryptographic strength, and any hash with a fixed
/// published output would serve.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestPick;

impl DigestPick {
    /// 128-bit value derived from the seed
    #[must_use]
    pub fn seed_value(seed: &str) -> u128 {
        let digest = Sha256::digest(seed.as_bytes());
        let mut prefix = [0_u8; 16];
        prefix.copy_from_slice(&digest[..16]);
        u128::from_be_bytes(prefix)
    }
}

impl DeterministicPick for DigestPick {
    fn pick(&self, seed: &str, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = Self::seed_value(seed) % len as u128;
        Some(index as usize)
    }
}

/// Seed for one (race, category) decision
#[must_use]
pub fn pick_seed(race_id: &str, category: &str) -> String {
    format!("{race_id}{}{category}", selection::SEED_SEPARATOR)
}

/// Fills a showcase from ranked categories
#[derive(Debug, Clone, Copy)]
pub struct WorkoutSelector<'a, P = DigestPick> {
    eligibility: EligibilityEvaluator<'a>,
    picker: P,
    size: usize,
}

impl<'a> WorkoutSelector<'a, DigestPick> {
    /// Selector using the SHA-256 pick
    #[must_use]
    pub const fn new(eligibility: EligibilityEvaluator<'a>, size: usize) -> Self {
        Self::with_picker(eligibility, DigestPick, size)
    }
}

impl<'a, P: DeterministicPick> WorkoutSelector<'a, P> {
    /// Selector using a custom pick strategy
    #[must_use]
    pub const fn with_picker(
        eligibility: EligibilityEvaluator<'a>,
        picker: P,
        size: usize,
    ) -> Self {
        Self {
            eligibility,
            picker,
            size,
        }
    }

    /// Select up to `size` distinct workouts for a race
    ///
    /// Categories are consumed in the order given, which should be score
    /// descending. A category with no eligible candidate is skipped without
    /// consuming a slot.
    pub fn select(
        &self,
        race_id: &str,
        distance_mi: f64,
        demands: &DemandVector,
        ranked: &[CategoryScore],
    ) -> WorkoutSelection {
        let mut showcase = WorkoutSelection::new();

        for category in ranked {
            if showcase.len() >= self.size {
                break;
            }
            let eligible =
                self.eligibility
                    .eligible_candidates(&category.workouts, distance_mi, demands);
            let seed = pick_seed(race_id, &category.category);
            let Some(workout) = self
                .picker
                .pick(&seed, eligible.len())
                .and_then(|index| eligible.get(index))
            else {
                debug!(race_id, category = %category.category, "No eligible workout in category");
                continue;
            };

            let added = showcase.push(ShowcasePick {
                workout: (*workout).to_owned(),
                category: category.category.clone(),
                score: category.score,
            });
            if !added {
                debug!(race_id, workout, category = %category.category, "Workout already selected");
            }
        }

        if showcase.len() < self.size {
            warn!(
                race_id,
                selected = showcase.len(),
                required = self.size,
                "Showcase is short of the configured size"
            );
        }

        showcase
    }
}
