// ABOUTME: Main library entry point for the race showcase driver
// ABOUTME: Loads race documents, builds previews, validates the corpus, and configures logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Race Showcase
//!
//! Thin outer layer around the pure `showcase-intelligence` engine. The
//! engine never touches the filesystem; this crate does:
//!
//! - **`race_data`**: lenient loading of per-race JSON documents
//! - **`preview`**: race pack preview assembly and artifact writing
//! - **`corpus`**: corpus-wide showcase validation before deployment
//! - **`logging`**: tracing subscriber setup for the CLI

/// Corpus-wide showcase validation
pub mod corpus;
/// Structured logging configuration
pub mod logging;
/// Race pack preview artifacts
pub mod preview;
/// Race document loading
pub mod race_data;

pub use corpus::{validate_corpus, CorpusReport};
pub use preview::{write_preview, RacePackPreview};
pub use showcase_core::{AppError, AppResult, ErrorCode};
pub use showcase_intelligence::{ShowcaseConfig, ShowcaseEngine, ShowcaseResult};
