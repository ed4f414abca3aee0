// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Road management commands - connect and disconnect cities

use super::{open, persist, required, Output};
use crate::config::Config;
use crate::types::Weight;
use anyhow::Result;

/// Run road command
pub fn run(
    config: &Config,
    out: Output,
    action: &str,
    from: Option<String>,
    to: Option<String>,
    weight: Weight,
) -> Result<()> {
    let mut graph = open(config)?;

    match action {
        "add" | "create" => {
            let from = required(from, "--from")?;
            let to = required(to, "--to")?;

            graph.add_road(&from, &to, weight);
            persist(config, &graph)?;

            println!("Added road: {from} -- {to}");
            println!("  weight: {weight}");
        }

        "remove" | "delete" | "rm" => {
            let from = required(from, "--from")?;
            let to = required(to, "--to")?;

            let removed = graph.remove_road(&from, &to)?;
            if removed > 0 {
                persist(config, &graph)?;
                println!("Removed {removed} road(s) between {from} and {to}");
            } else {
                println!("No roads between {from} and {to}");
            }
        }

        "list" | "ls" => {
            let roads = graph.roads();

            if out.json {
                println!("{}", serde_json::to_string_pretty(&roads)?);
                return Ok(());
            }

            if roads.is_empty() {
                println!("No roads defined. Use 'roadgraph road add' to create one.");
                return Ok(());
            }

            println!("Roads ({}):", roads.len());
            for road in &roads {
                println!("  {} -- {} ({})", road.from, road.to, road.weight);
            }
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: add, remove, list", other);
        }
    }

    Ok(())
}
