// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - writes the road graph as a snapshot or Graphviz DOT

use super::open;
use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Snapshot JSON, readable by `import`
    #[default]
    Json,
    /// Graphviz DOT format
    #[value(alias = "graphviz")]
    Dot,
}

impl ExportFormat {
    /// Get file extension for format
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Dot => "dot",
        }
    }
}

/// Run the export command
pub fn run(config: &Config, format: ExportFormat, output: Option<PathBuf>) -> Result<()> {
    info!("Exporting to {}", format.extension());

    let graph = open(config)?;

    if graph.is_empty() {
        eprintln!("Warning: Graph is empty. Use 'roadgraph city add' or 'roadgraph road add' first.");
    }

    let content = match format {
        ExportFormat::Json => graph.snapshot().context("Failed to serialize graph")?,
        ExportFormat::Dot => graph.to_dot(),
    };

    match output {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
