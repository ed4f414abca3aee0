// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Roadgraph CLI - weighted road network with shortest-path queries

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use roadgraph::commands::{self, export::ExportFormat, Output};
use roadgraph::config;
use roadgraph::types::{Mode, Weight, DEFAULT_WEIGHT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roadgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "ROADGRAPH_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Snapshot file override
    #[arg(long, env = "ROADGRAPH_DATA_FILE", global = true)]
    data_file: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage cities
    City {
        /// Action: add, remove, list
        action: String,

        /// City name
        name: Option<String>,
    },

    /// Manage roads between cities
    Road {
        /// Action: add, remove, list
        action: String,

        /// First endpoint
        #[arg(long)]
        from: Option<String>,

        /// Second endpoint
        #[arg(long)]
        to: Option<String>,

        /// Road weight (non-negative)
        #[arg(short, long, default_value_t = DEFAULT_WEIGHT)]
        weight: Weight,
    },

    /// Find the shortest path between two cities
    Path {
        /// Start city
        start: String,

        /// End city
        end: String,

        /// Search to run (defaults to the configured mode)
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,
    },

    /// Export the graph as a snapshot or DOT
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Replace the graph with a snapshot file
    Import {
        /// Snapshot file to read
        input: std::path::PathBuf,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ROADGRAPH_LOG").unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let out = Output {
        json: cli.json,
        color: !cli.no_color,
    };

    // Execute command
    match cli.command {
        Commands::City { action, name } => commands::city::run(&config, out, &action, name),
        Commands::Road {
            action,
            from,
            to,
            weight,
        } => commands::road::run(&config, out, &action, from, to, weight),
        Commands::Path { start, end, mode } => {
            commands::route::run(&config, out, &start, &end, mode)
        }
        Commands::Export { format, output } => commands::export::run(&config, format, output),
        Commands::Import { input } => commands::import::run(&config, &input),
        Commands::Config => commands::config::run(&config, out),
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
