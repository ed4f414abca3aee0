// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod city;
pub mod completions;
pub mod config;
pub mod export;
pub mod import;
pub mod road;
pub mod route;

use crate::config::Config;
use crate::graph::RoadGraph;
use crate::snapshot;
use anyhow::{Context, Result};

/// How command results are printed
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// Print JSON instead of text
    pub json: bool,
    /// Allow ANSI colors in text output
    pub color: bool,
}

/// Load the graph from the configured data file
fn open(config: &Config) -> Result<RoadGraph> {
    snapshot::load(&config.data_file).with_context(|| {
        format!(
            "Failed to load graph from {}",
            config.data_file.display()
        )
    })
}

/// Write the graph back to the configured data file
fn persist(config: &Config, graph: &RoadGraph) -> Result<()> {
    snapshot::save(graph, &config.data_file)
}

/// Unwrap a required positional or flag value
fn required(value: Option<String>, what: &str) -> Result<String> {
    value.ok_or_else(|| anyhow::anyhow!("{what} is required"))
}
