// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Snapshot codec - the flat JSON form of the adjacency map
//!
//! A snapshot maps every city to its adjacency entries, each written as a
//! `[neighbor, weight]` pair:
//!
//! ```json
//! { "A": [["B", 4], ["C", 2]], "B": [["A", 4]], "C": [["A", 2]] }
//! ```
//!
//! Both directions of every road are written, parallel roads included, so
//! a decoded snapshot reproduces the store entry for entry. Decoding does
//! not check that entries are symmetric.

use crate::error::GraphError;
use crate::graph::RoadGraph;
use crate::types::Link;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Serialize the whole adjacency map
///
/// # Errors
///
/// Returns [`GraphError::Parse`] if serialization fails.
pub fn encode(graph: &RoadGraph) -> Result<String, GraphError> {
    Ok(serde_json::to_string_pretty(graph.adjacency())?)
}

/// Parse a snapshot into a new graph
///
/// # Errors
///
/// Returns [`GraphError::Parse`] if `blob` is not a JSON object of city to
/// `[neighbor, weight]` lists, including negative or fractional weights.
pub fn decode(blob: &str) -> Result<RoadGraph, GraphError> {
    let adjacency: BTreeMap<String, Vec<Link>> = serde_json::from_str(blob)?;
    Ok(RoadGraph::from_adjacency(adjacency))
}

impl RoadGraph {
    /// Serialize this graph, see [`encode`]
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Parse`] if serialization fails.
    pub fn snapshot(&self) -> Result<String, GraphError> {
        encode(self)
    }

    /// Replace the whole graph with a decoded snapshot.
    ///
    /// On error the graph is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Parse`] if `blob` is malformed.
    pub fn restore(&mut self, blob: &str) -> Result<(), GraphError> {
        *self = decode(blob)?;
        Ok(())
    }
}

/// Load a graph from a snapshot file; a missing file is an empty graph
pub fn load(path: &Path) -> Result<RoadGraph> {
    if !path.exists() {
        debug!("No snapshot at {}, starting empty", path.display());
        return Ok(RoadGraph::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let graph =
        decode(&content).with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(
        "Loaded {} cities from {}",
        graph.city_count(),
        path.display()
    );
    Ok(graph)
}

/// Write a graph to a snapshot file, creating parent directories
pub fn save(graph: &RoadGraph, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let json = encode(graph).context("Failed to serialize graph")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {} cities to {}", graph.city_count(), path.display());
    Ok(())
}
