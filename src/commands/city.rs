// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! City management commands - add, remove and list cities

use super::{open, persist, required, Output};
use crate::config::Config;
use anyhow::Result;

/// Run city command
pub fn run(config: &Config, out: Output, action: &str, name: Option<String>) -> Result<()> {
    let mut graph = open(config)?;

    match action {
        "add" | "create" => {
            let name = required(name, "City name")?;
            if graph.add_city(&name) {
                persist(config, &graph)?;
                println!("Added city: {name}");
            } else {
                println!("City already exists: {name}");
            }
        }

        "remove" | "delete" | "rm" => {
            let name = required(name, "City name")?;
            let roads = graph
                .roads()
                .iter()
                .filter(|road| road.from == name || road.to == name)
                .count();
            if graph.remove_city(&name) {
                persist(config, &graph)?;
                println!("Removed city: {name}");
                if roads > 0 {
                    println!("  roads removed: {roads}");
                }
            } else {
                println!("No city named {name}");
            }
        }

        "list" | "ls" => {
            if out.json {
                let cities: Vec<&str> = graph.cities().collect();
                println!("{}", serde_json::to_string_pretty(&cities)?);
                return Ok(());
            }

            if graph.is_empty() {
                println!("No cities defined. Use 'roadgraph city add' to create one.");
                return Ok(());
            }

            println!("Cities ({}):", graph.city_count());
            for city in graph.cities() {
                let degree = graph.neighbors(city).map_or(0, <[_]>::len);
                println!("  {city} ({degree} road(s))");
            }
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: add, remove, list", other);
        }
    }

    Ok(())
}
