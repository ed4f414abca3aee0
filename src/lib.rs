// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Roadgraph library - weighted road network with shortest-path queries
//!
//! This crate maintains an undirected graph of cities joined by weighted
//! roads, answers weighted and hop-based shortest-path queries over it,
//! and round-trips the adjacency map through a flat JSON snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod path;
pub mod snapshot;

/// Core data types shared by the store, the queries and the codec
pub mod types {
    use serde::{Deserialize, Serialize};

    /// Road length. Unsigned, so a negative road can never be stored.
    pub type Weight = u64;

    /// Weight used when a road is added without one
    pub const DEFAULT_WEIGHT: Weight = 1;

    // =========================================================================
    // Adjacency Entries
    // =========================================================================

    /// One adjacency entry: the city at the other end of a road and its weight.
    ///
    /// Serialized as a two-element array `["city", weight]`, which is the
    /// shape the snapshot file stores.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(from = "(String, Weight)", into = "(String, Weight)")]
    pub struct Link {
        /// Neighbor city
        pub city: String,
        /// Road weight
        pub weight: Weight,
    }

    impl Link {
        /// Create a new adjacency entry
        #[must_use]
        pub fn new(city: impl Into<String>, weight: Weight) -> Self {
            Self {
                city: city.into(),
                weight,
            }
        }
    }

    impl From<(String, Weight)> for Link {
        fn from((city, weight): (String, Weight)) -> Self {
            Self { city, weight }
        }
    }

    impl From<Link> for (String, Weight) {
        fn from(link: Link) -> Self {
            (link.city, link.weight)
        }
    }

    // =========================================================================
    // Roads
    // =========================================================================

    /// An undirected road, reported once per stored road
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Road {
        /// Lexicographically smaller endpoint
        pub from: String,
        /// Lexicographically larger endpoint (equal to `from` for a loop)
        pub to: String,
        /// Road weight
        pub weight: Weight,
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// A path found between two cities
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Route {
        /// Cities from start to end, both inclusive
        pub path: Vec<String>,
        /// Sum of road weights along `path`
        pub cost: Weight,
    }

    impl Route {
        /// Number of roads travelled
        #[must_use]
        pub fn hops(&self) -> usize {
            self.path.len().saturating_sub(1)
        }
    }

    /// Which shortest-path search to run
    #[derive(
        Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
    )]
    #[serde(rename_all = "lowercase")]
    pub enum Mode {
        /// Minimum total weight (Dijkstra)
        #[default]
        #[value(alias = "dijkstra")]
        #[serde(alias = "dijkstra")]
        Weighted,
        /// Fewest roads (breadth-first); cost is the weight along that path
        #[value(alias = "bfs")]
        #[serde(alias = "bfs")]
        Hops,
    }

    impl std::fmt::Display for Mode {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(match self {
                Self::Weighted => "weighted",
                Self::Hops => "hops",
            })
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::GraphError;
    pub use crate::graph::RoadGraph;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
