// ABOUTME: Race showcase CLI for generating previews, printing demands, and validating the corpus
// ABOUTME: Reads race JSON documents from a data directory and writes preview artifacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Preview one race
//! race-showcase --data-dir race-data preview --slug unbound-200
//!
//! # Preview every tier-1 race
//! race-showcase preview --tier 1 --out-dir web/race-packs
//!
//! # Demand CSV for every race
//! race-showcase demands --all > demands.csv
//!
//! # Fail the build if showcases are short or repetitive
//! race-showcase validate
//! ```

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use race_showcase::logging::LoggingConfig;
use race_showcase::race_data::{load_all, load_race, race_path, race_tier};
use race_showcase::{validate_corpus, write_preview, AppError, RacePackPreview};
use showcase_core::models::{DemandDimension, DemandVector, RaceProfile};
use showcase_intelligence::demand_analyzer::analyze;
use showcase_intelligence::{ShowcaseConfig, ShowcaseEngine};
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "race-showcase",
    about = "Race demand profiling and training pack previews",
    long_about = "Scores every race's physiological demands, ranks workout categories, \
                  and selects a deterministic showcase of workouts per race."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding one `<slug>.json` document per race
    #[arg(long, global = true, default_value = "race-data")]
    data_dir: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate race pack preview JSON
    Preview {
        #[command(flatten)]
        target: PreviewTarget,

        /// Output directory for preview artifacts
        #[arg(long, default_value = "web/race-packs")]
        out_dir: PathBuf,

        /// Generation date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print demand vectors
    Demands {
        #[command(flatten)]
        target: DemandTarget,
    },

    /// Validate showcase coverage and variety across every race
    Validate,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct PreviewTarget {
    /// Race slug (e.g. unbound-200)
    #[arg(long)]
    slug: Option<String>,

    /// Every race in the data directory
    #[arg(long)]
    all: bool,

    /// Only races of this tier
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    tier: Option<u8>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct DemandTarget {
    /// Race slug; prints a table
    #[arg(long)]
    slug: Option<String>,

    /// Every race; prints CSV
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let engine = ShowcaseConfig::load()
        .and_then(ShowcaseEngine::standard)
        .map_err(AppError::from)?;

    match cli.command {
        Command::Preview { target, out_dir, date } => {
            let generated_at = date.unwrap_or_else(|| Local::now().date_naive());
            run_preview(&engine, &cli.data_dir, &target, &out_dir, generated_at)
        }
        Command::Demands { target } => run_demands(&cli.data_dir, &target),
        Command::Validate => run_validate(&engine, &cli.data_dir),
    }
}

fn run_preview(
    engine: &ShowcaseEngine,
    data_dir: &Path,
    target: &PreviewTarget,
    out_dir: &Path,
    generated_at: NaiveDate,
) -> Result<()> {
    if let Some(slug) = &target.slug {
        let profile = load_race(&race_path(data_dir, slug))?;
        let preview = RacePackPreview::build(engine, &profile, generated_at);
        let written = write_preview(&preview, out_dir)?;
        println!("Wrote {}", written.display());
        print_preview_summary(&preview);
        return Ok(());
    }

    let (races, failures) = load_all(data_dir)?;
    let mut generated = 0_usize;
    let mut errors = failures.len();
    for (path, failure) in &failures {
        error!(path = %path.display(), error = %failure, "Failed to load race");
    }

    for profile in races
        .iter()
        .filter(|profile| target.tier.is_none_or(|tier| race_tier(profile) == tier))
    {
        let preview = RacePackPreview::build(engine, profile, generated_at);
        match write_preview(&preview, out_dir) {
            Ok(_) => generated += 1,
            Err(failure) => {
                error!(slug = %profile.slug, error = %failure, "Failed to write preview");
                errors += 1;
            }
        }
    }

    info!(generated, errors, out_dir = %out_dir.display(), "Preview generation complete");
    println!("Generated {generated} previews to {}", out_dir.display());
    if errors > 0 {
        eprintln!("Errors: {errors}");
    }
    Ok(())
}

fn run_demands(data_dir: &Path, target: &DemandTarget) -> Result<()> {
    if let Some(slug) = &target.slug {
        let profile = load_race(&race_path(data_dir, slug))?;
        print_demand_table(&profile.slug, &analyze(&profile));
        return Ok(());
    }

    let (races, failures) = load_all(data_dir)?;
    for (path, failure) in &failures {
        error!(path = %path.display(), error = %failure, "Failed to load race");
    }

    let header: Vec<&str> = DemandDimension::ALL.iter().map(DemandDimension::name).collect();
    println!("slug,{},total", header.join(","));
    for profile in &races {
        println!("{}", demand_csv_row(profile));
    }
    Ok(())
}

fn run_validate(engine: &ShowcaseEngine, data_dir: &Path) -> Result<()> {
    let (races, failures) = load_all(data_dir)?;
    if !failures.is_empty() {
        for (path, failure) in &failures {
            error!(path = %path.display(), error = %failure, "Failed to load race");
        }
        bail!("{} race documents failed to load", failures.len());
    }

    let report = validate_corpus(engine, &races);
    println!(
        "{} races, {} distinct combinations ({:.1}% unique)",
        report.races,
        report.unique_combinations,
        report.unique_ratio * 100.0
    );
    if let Some(shared) = &report.most_duplicated {
        println!(
            "Most shared combination: {} races [{}]",
            shared.races.len(),
            shared.workouts.join(", ")
        );
    }
    report.ensure_valid(engine.config())?;
    println!("Corpus validation passed");
    Ok(())
}

fn demand_csv_row(profile: &RaceProfile) -> String {
    let demands = analyze(profile);
    let scores: Vec<String> = demands
        .entries()
        .iter()
        .map(|(_, score)| score.to_string())
        .collect();
    format!("{},{},{}", profile.slug, scores.join(","), demands.total())
}

fn score_bar(score: u8) -> String {
    let filled = usize::from(score.min(10));
    format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled))
}

fn print_demand_table(slug: &str, demands: &DemandVector) {
    let rule = "=".repeat(50);
    println!("\n{rule}\n  {slug}\n{rule}");
    println!("  {:<20} {:>5}", "Dimension", "Score");
    for (dimension, score) in demands.entries() {
        println!("  {:<20} {score:>5}  [{}]", dimension.name(), score_bar(score));
    }
    println!("  {:<20} {:>5}  / {}", "TOTAL", demands.total(), DemandDimension::ALL.len() * 10);
}

fn print_preview_summary(preview: &RacePackPreview) {
    let rule = "=".repeat(60);
    println!("\n{rule}\n  {}\n{rule}", preview.race_name);
    println!("\n  Demand Vector:");
    for (dimension, score) in preview.demands.entries() {
        println!("    {:<20} [{}] {score}/10", dimension.name(), score_bar(score));
    }
    println!("\n  Top Categories:");
    for category in &preview.top_categories {
        println!("    {:<22} {:>3}", category.category, category.score);
    }
    println!("\n  Showcase:");
    for pick in preview.showcase.picks() {
        println!("    {} ({}, {})", pick.workout, pick.category, pick.score);
    }
    println!("\n  Summary: {}", preview.pack_summary);
}
