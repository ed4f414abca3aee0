// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Errors surfaced by the road graph

use thiserror::Error;

/// Failures of graph mutation and snapshot decoding.
///
/// Benign absence (adding a city twice, removing an unknown city, querying
/// a path to an unknown city) is not an error and never produces one.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A city that must exist for the operation is missing
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// A snapshot blob is not a map of city to `[neighbor, weight]` pairs
    #[error("Malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
