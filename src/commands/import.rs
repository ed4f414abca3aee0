// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Import command - replace the graph with a snapshot file

use super::persist;
use crate::config::Config;
use crate::graph::RoadGraph;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Run the import command
pub fn run(config: &Config, input: &Path) -> Result<()> {
    info!("Importing snapshot from {}", input.display());

    let blob = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let mut graph = RoadGraph::new();
    graph
        .restore(&blob)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    persist(config, &graph)?;

    println!(
        "Imported {} cities and {} roads from {}",
        graph.city_count(),
        graph.road_count(),
        input.display()
    );
    Ok(())
}
