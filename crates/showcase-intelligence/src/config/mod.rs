// ABOUTME: Showcase engine configuration module
// ABOUTME: Re-exports tunables and the configuration error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Showcase configuration
//!
//! - `showcase` - selection size, preview length, and corpus validation limits
//! - `error` - configuration and table consistency errors

pub mod error;
pub mod showcase;

pub use error::ConfigError;
pub use showcase::ShowcaseConfig;
