// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path command - shortest route between two cities

use super::{open, Output};
use crate::config::Config;
use crate::path::shortest_path;
use crate::types::Mode;
use anyhow::Result;
use owo_colors::OwoColorize;

/// Run path command
pub fn run(config: &Config, out: Output, start: &str, end: &str, mode: Option<Mode>) -> Result<()> {
    let graph = open(config)?;
    let mode = mode.unwrap_or(config.default_mode);

    for city in [start, end] {
        if !graph.contains(city) {
            tracing::warn!("City not found: {}", city);
        }
    }

    let route = shortest_path(&graph, start, end, mode);

    if out.json {
        let body = match &route {
            Some(r) => serde_json::json!({ "mode": mode, "path": r.path, "distance": r.cost }),
            None => serde_json::json!({ "mode": mode, "path": [], "distance": null }),
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    match route {
        Some(route) => {
            let path = route.path.join(" -> ");
            if out.color {
                println!("Path ({mode}): {}", path.green());
            } else {
                println!("Path ({mode}): {path}");
            }
            println!("  cost: {}", route.cost);
            println!("  hops: {}", route.hops());
        }
        None => {
            println!("No path from {start} to {end}");
        }
    }

    Ok(())
}
