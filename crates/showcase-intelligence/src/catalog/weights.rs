// ABOUTME: Demand-to-category weight matrix used by the category scorer
// ABOUTME: Each dimension row maps categories to positive weights in a fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use showcase_core::models::DemandDimension;

/// Shipped weight rows, in dimension order
///
/// Within a row, categories are listed strongest first. The order of first
/// appearance across rows defines the tie-break order of the scorer.
const STANDARD_WEIGHTS: &[(DemandDimension, &[(&str, f64)])] = &[
    (
        DemandDimension::Durability,
        &[
            ("Durability", 3.0),
            ("HVLI_Extended", 2.5),
            ("Endurance", 2.0),
            ("Blended", 1.5),
            ("Tempo", 1.0),
        ],
    ),
    (
        DemandDimension::Climbing,
        &[
            ("Mixed_Climbing", 3.0),
            ("Over_Under", 2.5),
            ("SFR_Muscle_Force", 2.0),
            ("TT_Threshold", 1.5),
            ("G_Spot", 1.0),
        ],
    ),
    (
        DemandDimension::Vo2Power,
        &[
            ("VO2max", 3.0),
            ("Anaerobic_Capacity", 2.0),
            ("Critical_Power", 1.5),
            ("Sprint_Neuromuscular", 1.0),
        ],
    ),
    (
        DemandDimension::Threshold,
        &[
            ("TT_Threshold", 3.0),
            ("G_Spot", 2.5),
            ("Norwegian_Double", 2.0),
            ("Over_Under", 1.5),
            ("Tempo", 1.0),
        ],
    ),
    (
        DemandDimension::Technical,
        &[
            ("Gravel_Specific", 3.0),
            ("Cadence_Work", 2.0),
            ("Critical_Power", 2.0),
            ("Race_Simulation", 1.5),
            ("Anaerobic_Capacity", 1.0),
        ],
    ),
    (
        DemandDimension::HeatResilience,
        &[("Durability", 2.0), ("Endurance", 1.5), ("HVLI_Extended", 1.0)],
    ),
    (
        DemandDimension::Altitude,
        &[("VO2max", 2.5), ("Endurance", 1.5), ("LT1_MAF", 1.0)],
    ),
    (
        DemandDimension::RaceSpecificity,
        &[
            ("Race_Simulation", 3.0),
            ("Gravel_Specific", 2.0),
            ("Durability", 1.5),
            ("Blended", 1.0),
        ],
    ),
];

/// Weight of one category under one dimension
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeight {
    /// Category name
    pub category: String,
    /// Positive contribution per demand point
    pub weight: f64,
}

/// Immutable dimension → (category → weight) table
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    rows: Vec<(DemandDimension, Vec<CategoryWeight>)>,
}

impl WeightMatrix {
    /// The shipped weight matrix
    #[must_use]
    pub fn standard() -> Self {
        Self::from_rows(STANDARD_WEIGHTS.iter().map(|(dimension, weights)| {
            (
                *dimension,
                weights
                    .iter()
                    .map(|(category, weight)| ((*category).to_owned(), *weight))
                    .collect::<Vec<_>>(),
            )
        }))
    }

    /// Build a matrix from explicit rows
    ///
    /// Rows are kept in the given order; consistency is checked separately by
    /// [`crate::catalog::validate_tables`].
    pub fn from_rows<I, W>(rows: I) -> Self
    where
        I: IntoIterator<Item = (DemandDimension, W)>,
        W: IntoIterator<Item = (String, f64)>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|(dimension, weights)| {
                    (
                        dimension,
                        weights
                            .into_iter()
                            .map(|(category, weight)| CategoryWeight { category, weight })
                            .collect(),
                    )
                })
                .collect(),
        }
    }

    /// Weights for one dimension, empty if the dimension has no row
    #[must_use]
    pub fn row(&self, dimension: DemandDimension) -> &[CategoryWeight] {
        self.rows
            .iter()
            .find(|(row_dimension, _)| *row_dimension == dimension)
            .map(|(_, weights)| weights.as_slice())
            .unwrap_or_default()
    }

    /// All rows in matrix order
    pub fn rows(&self) -> impl Iterator<Item = (DemandDimension, &[CategoryWeight])> {
        self.rows
            .iter()
            .map(|(dimension, weights)| (*dimension, weights.as_slice()))
    }

    /// Distinct categories in order of first appearance
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for (_, weights) in &self.rows {
            for entry in weights {
                if !categories.contains(&entry.category.as_str()) {
                    categories.push(&entry.category);
                }
            }
        }
        categories
    }

    /// Dimensions that contribute to a category
    #[must_use]
    pub fn dimensions_reaching(&self, category: &str) -> Vec<DemandDimension> {
        self.rows
            .iter()
            .filter(|(_, weights)| weights.iter().any(|entry| entry.category == category))
            .map(|(dimension, _)| *dimension)
            .collect()
    }
}
