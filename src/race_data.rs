// ABOUTME: Race data loading from per-race JSON documents on disk
// ABOUTME: Resolves slugs to files, lists a data directory, and parses documents leniently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use showcase_core::constants::race_defaults;
use showcase_core::errors::{AppError, AppResult};
use showcase_core::models::RaceProfile;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const RACE_FILE_EXTENSION: &str = "json";

/// Path of a race document inside a data directory
#[must_use]
pub fn race_path(data_dir: &Path, slug: &str) -> PathBuf {
    data_dir.join(format!("{slug}.{RACE_FILE_EXTENSION}"))
}

/// All race documents in a directory, sorted by file name
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn list_race_files(data_dir: &Path) -> AppResult<Vec<PathBuf>> {
    let entries = fs::read_dir(data_dir).map_err(|e| {
        AppError::from(e).with_context(format!("reading {}", data_dir.display()))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|extension| extension == RACE_FILE_EXTENSION)
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load a race profile from a JSON document
///
/// Structural problems inside the document fall back to defaults. When the
/// document carries no slug, the file stem is used instead.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not valid JSON
pub fn load_race(path: &Path) -> AppResult<RaceProfile> {
    if !path.exists() {
        return Err(AppError::not_found(format!("Race file {}", path.display())));
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_context(format!("reading {}", path.display())))?;
    let document: Value = serde_json::from_str(&raw)
        .map_err(|e| AppError::from(e).with_context(format!("parsing {}", path.display())))?;

    let mut profile = RaceProfile::from_race_document(&document);
    if profile.slug == race_defaults::UNKNOWN_SLUG {
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            stem.clone_into(&mut profile.slug);
        }
    }
    debug!(slug = %profile.slug, path = %path.display(), "Loaded race profile");
    Ok(profile)
}

/// Load every race in a directory, skipping files that fail to load
///
/// Returns the loaded profiles and the failures, so batch callers can
/// report problems without aborting.
///
/// # Errors
///
/// Returns an error only if the directory itself cannot be read
pub fn load_all(data_dir: &Path) -> AppResult<(Vec<RaceProfile>, Vec<(PathBuf, AppError)>)> {
    let mut races = Vec::new();
    let mut failures = Vec::new();
    for path in list_race_files(data_dir)? {
        match load_race(&path) {
            Ok(profile) => races.push(profile),
            Err(error) => failures.push((path, error)),
        }
    }
    Ok((races, failures))
}

/// Whole-number tier used for tier filtering
#[must_use]
pub fn race_tier(profile: &RaceProfile) -> u8 {
    profile.tier.trunc().clamp(0.0, f64::from(u8::MAX)) as u8
}
