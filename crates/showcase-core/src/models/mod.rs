// ABOUTME: Core data models for race demand profiling and showcase selection
// ABOUTME: Re-exports RaceProfile, DemandVector, CategoryScore and WorkoutSelection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The pipeline flows strictly left to right over these types:
//!
//! - `RaceProfile`: the externally supplied race description, optionally
//!   read leniently from a nested race document
//! - `DemandVector`: eight bounded integer demand scores
//! - `CategoryScore`: a normalized category affinity with its candidate workouts
//! - `WorkoutSelection`: the ordered showcase picks with category provenance

mod demand;
mod race;
mod race_document;
mod showcase;

pub use demand::{DemandDimension, DemandVector};
pub use race::RaceProfile;
pub use race_document::lenient_number;
pub use showcase::{CategoryScore, ShowcasePick, WorkoutSelection};
