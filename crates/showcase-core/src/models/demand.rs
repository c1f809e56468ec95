// ABOUTME: Demand dimension enumeration and the eight-field demand vector
// ABOUTME: Scores are integers clamped to 0-10 regardless of input extremity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::demand::{DIMENSION_COUNT, MAX_SCORE, MIN_SCORE};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One physiological capacity a race can stress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandDimension {
    /// Fatigue resistance needed (distance-driven)
    Durability,
    /// Sustained climbing power (elevation-driven)
    Climbing,
    /// High-end aerobic power for competitive fields
    Vo2Power,
    /// Sustained sub-maximal power
    Threshold,
    /// Bike handling and surges
    Technical,
    /// Heat adaptation
    HeatResilience,
    /// High-altitude adaptation
    Altitude,
    /// How much race-simulation practice matters
    RaceSpecificity,
}

impl DemandDimension {
    /// All dimensions in canonical order
    pub const ALL: [Self; DIMENSION_COUNT] = [
        Self::Durability,
        Self::Climbing,
        Self::Vo2Power,
        Self::Threshold,
        Self::Technical,
        Self::HeatResilience,
        Self::Altitude,
        Self::RaceSpecificity,
    ];

    /// Snake-case name used in documents and weight tables
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Durability => "durability",
            Self::Climbing => "climbing",
            Self::Vo2Power => "vo2_power",
            Self::Threshold => "threshold",
            Self::Technical => "technical",
            Self::HeatResilience => "heat_resilience",
            Self::Altitude => "altitude",
            Self::RaceSpecificity => "race_specificity",
        }
    }
}

impl fmt::Display for DemandDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemandDimension {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.name() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown demand dimension: '{s}'")))
    }
}

/// Eight-dimension demand profile of a race
///
/// Field order matches `DemandDimension::ALL`, which keeps serialized output
/// and CSV columns stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DemandVector {
    /// Fatigue resistance
    pub durability: u8,
    /// Sustained climbing power
    pub climbing: u8,
    /// High-end aerobic power
    pub vo2_power: u8,
    /// Sustained sub-maximal power
    pub threshold: u8,
    /// Bike handling and surges
    pub technical: u8,
    /// Heat adaptation
    pub heat_resilience: u8,
    /// High-altitude adaptation
    pub altitude: u8,
    /// Race-simulation practice
    pub race_specificity: u8,
}

impl DemandVector {
    /// Score for one dimension
    #[must_use]
    pub const fn get(&self, dimension: DemandDimension) -> u8 {
        match dimension {
            DemandDimension::Durability => self.durability,
            DemandDimension::Climbing => self.climbing,
            DemandDimension::Vo2Power => self.vo2_power,
            DemandDimension::Threshold => self.threshold,
            DemandDimension::Technical => self.technical,
            DemandDimension::HeatResilience => self.heat_resilience,
            DemandDimension::Altitude => self.altitude,
            DemandDimension::RaceSpecificity => self.race_specificity,
        }
    }

    /// Set one dimension, clamping the value into range
    pub fn set(&mut self, dimension: DemandDimension, value: u8) {
        let value = value.clamp(MIN_SCORE, MAX_SCORE);
        match dimension {
            DemandDimension::Durability => self.durability = value,
            DemandDimension::Climbing => self.climbing = value,
            DemandDimension::Vo2Power => self.vo2_power = value,
            DemandDimension::Threshold => self.threshold = value,
            DemandDimension::Technical => self.technical = value,
            DemandDimension::HeatResilience => self.heat_resilience = value,
            DemandDimension::Altitude => self.altitude = value,
            DemandDimension::RaceSpecificity => self.race_specificity = value,
        }
    }

    /// (dimension, score) pairs in canonical order
    #[must_use]
    pub fn entries(&self) -> [(DemandDimension, u8); DIMENSION_COUNT] {
        DemandDimension::ALL.map(|dimension| (dimension, self.get(dimension)))
    }

    /// Sum of all dimension scores (0-80)
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries()
            .iter()
            .map(|(_, score)| u32::from(*score))
            .sum()
    }
}
