//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Atlas - Explore the world's countries with personalized insights
#[derive(Parser)]
#[command(name = "atlas")]
#[command(about = "Country explorer with personalized insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Engine config file (TOML)
    ///
    /// Defaults to <data dir>/atlas/config/engine.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List countries in the catalog
    Countries {
        /// Only show countries whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the size category for a population
    Classify {
        /// Population value
        population: u64,
    },

    /// Export map rows (country, population, log10 population)
    Map {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = MapFormat::Csv)]
        format: MapFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show insights for a country in a fresh session
    Insights {
        /// Country name (exact catalog name)
        country: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate one exploration session
    ///
    /// Steps run in order, each recorded before insights are generated:
    ///   search:TERM      search and select the first match
    ///   click:COUNTRY    select a country on the map
    ///   rate:COUNTRY=N   rate a country 1-5
    ///
    /// Example: atlas explore search:jap click:Japan rate:Japan=5 click:Japan
    Explore {
        /// Steps to run (search:TERM, click:COUNTRY, rate:COUNTRY=N)
        steps: Vec<String>,

        /// Preference to set before exploring (key=value, repeatable)
        ///
        /// Keys: travel_style, budget_range, population_preference,
        /// preferred_safety_rating, favorite_regions (comma-separated)
        #[arg(short, long = "pref")]
        prefs: Vec<String>,

        /// Include placeholder live data (random, illustrative only)
        #[arg(long)]
        live: bool,

        /// Seed for placeholder live data
        #[arg(long, requires = "live")]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MapFormat {
    Csv,
    Json,
}
