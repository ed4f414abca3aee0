// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - show the effective configuration

use super::Output;
use crate::config::Config;
use anyhow::Result;

/// Print the resolved configuration
pub fn run(config: &Config, out: Output) -> Result<()> {
    if out.json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("data_file = {}", config.data_file.display());
    println!("log_level = {}", config.log_level);
    println!("default_mode = {}", config.default_mode);
    Ok(())
}
