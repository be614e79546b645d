//! Atlas CLI - Country explorer with personalized insights
//!
//! Usage:
//!   atlas countries --search guin        Search the catalog
//!   atlas classify 11396                 Population size category
//!   atlas map --format json              Map rows for the renderer
//!   atlas explore click:Peru click:Peru  Simulate a session

mod cli;
mod commands;


use anyhow::{Context, Result};
use atlas_core::{Catalog, EngineConfig};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = EngineConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let catalog = Catalog::builtin();
    tracing::debug!(countries = catalog.len(), "Catalog loaded");

    match cli.command {
        Commands::Countries { search, json } => {
            commands::cmd_countries(&catalog, search.as_deref(), json)
        }
        Commands::Classify { population } => commands::cmd_classify(population),
        Commands::Map { format, output } => {
            commands::cmd_map(&catalog, format, output.as_deref())
        }
        Commands::Insights { country, json } => {
            commands::cmd_insights(&catalog, &config, &country, json)
        }
        Commands::Explore {
            steps,
            prefs,
            live,
            seed,
            json,
        } => {
            let options = commands::ExploreOptions {
                steps,
                prefs,
                live,
                seed,
            };
            commands::cmd_explore(&catalog, &config, &options, json)
        }
    }
}
