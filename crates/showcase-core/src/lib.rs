// ABOUTME: Core types and constants for the race showcase engine
// ABOUTME: Foundation crate with the data model, error handling, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Showcase Core
//!
//! Foundation crate providing shared types and constants for race demand
//! profiling and workout showcase selection. This crate is designed to change
//! infrequently so the engine and driver crates can build on a stable model.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Scoring bounds, selection sizes, and keyword vocabularies
//! - **models**: `RaceProfile`, `DemandVector`, `CategoryScore`, `WorkoutSelection`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (race profile, demand vector, category scores, selections)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
