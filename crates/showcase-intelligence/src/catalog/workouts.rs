// ABOUTME: Category to candidate-workout catalog
// ABOUTME: Ordered categories each holding an ordered list of prescribable sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Shipped catalog in category order
const STANDARD_CATALOG: &[(&str, &[&str])] = &[
    (
        "Durability",
        &["Tired VO2max", "Double Day Simulation", "Progressive Fatigue"],
    ),
    (
        "VO2max",
        &["5x3 VO2 Classic", "Descending VO2 Pyramid", "Norwegian 4x8"],
    ),
    (
        "HVLI_Extended",
        &["HVLI Extended Z2", "Multi-Hour Z2", "Back-to-Back Long"],
    ),
    (
        "Race_Simulation",
        &["Breakaway Simulation", "Variable Pace Chaos", "Sector Simulation"],
    ),
    (
        "TT_Threshold",
        &[
            "Single Sustained Threshold",
            "Threshold Ramps",
            "Descending Threshold",
        ],
    ),
    (
        "G_Spot",
        &["G-Spot Standard", "G-Spot Extended", "Criss-Cross"],
    ),
    (
        "Mixed_Climbing",
        &["Seated/Standing Climbs", "Variable Grade Simulation"],
    ),
    ("Over_Under", &["Classic Over-Unders", "Ladder Over-Unders"]),
    ("Gravel_Specific", &["Surge and Settle", "Terrain Microbursts"]),
    ("Endurance", &["Pre-Race Openers", "Terrain Simulation Z2"]),
    ("Critical_Power", &["Above CP Repeats", "W-Prime Depletion"]),
    ("Anaerobic_Capacity", &["2min Killers", "90sec Repeats"]),
    ("Sprint_Neuromuscular", &["Attack Repeats", "Sprint Buildups"]),
    (
        "Norwegian_Double",
        &["Norwegian 4x8 Classic", "Double Threshold"],
    ),
    ("SFR_Muscle_Force", &["SFR Low Cadence", "Force Repeats"]),
    ("Cadence_Work", &["High Cadence Drills", "Cadence Pyramids"]),
    ("Blended", &["Z2 + VO2 Combo", "Endurance with Spikes"]),
    ("Tempo", &["Tempo Blocks", "Extended Tempo"]),
    ("LT1_MAF", &["MAF Capped Ride", "LT1 Assessment"]),
    ("Recovery", &["Easy Spin", "Active Recovery"]),
];

/// One catalog category and its candidate workouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Category name
    pub category: String,
    /// Candidate workouts in presentation order
    pub workouts: Vec<String>,
}

/// Immutable category → workouts table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The shipped catalog
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_CATALOG.iter().map(|(category, workouts)| {
            (
                (*category).to_owned(),
                workouts.iter().map(|name| (*name).to_owned()).collect(),
            )
        }))
    }

    /// Build a catalog from (category, workouts) pairs
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(category, workouts)| CatalogEntry { category, workouts })
                .collect(),
        }
    }

    /// Candidate workouts of a category
    #[must_use]
    pub fn workouts(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.workouts.as_slice())
    }

    /// Whether the catalog has an entry for the category
    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.workouts(category).is_some()
    }

    /// Entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Every workout name across all categories
    pub fn all_workouts(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|entry| entry.workouts.iter().map(String::as_str))
    }
}
