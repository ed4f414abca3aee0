// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use crate::types::Mode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "ROADGRAPH";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot file holding the road graph
    pub data_file: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Search used by `path` when no `--mode` is given
    pub default_mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: directories::ProjectDirs::from("com", "hyperpolymath", "roadgraph")
                .map(|d| d.data_dir().join("graph.json"))
                .unwrap_or_else(|| PathBuf::from(".roadgraph/graph.json")),
            log_level: "info".to_string(),
            default_mode: Mode::default(),
        }
    }
}

/// Load configuration: defaults, then an optional TOML file, then
/// `ROADGRAPH_*` environment variables
pub fn load(file: Option<&Path>) -> Result<Config> {
    let mut builder = config::Config::builder();

    if let Some(path) = file {
        builder = builder.add_source(config::File::from(path).required(true));
    }

    let settings = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .context("Failed to read configuration")?;

    settings
        .try_deserialize()
        .context("Invalid configuration")
}
