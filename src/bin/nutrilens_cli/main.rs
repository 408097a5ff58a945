// ABOUTME: Nutrilens CLI - analyze nutrition query results and query the nutrition API
// ABOUTME: Handles report generation, macro/pH/allergen lookups, and API fetch and search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors
//!
//! Usage:
//! ```bash
//! # Analyze a saved query result (use - for stdin)
//! nutrilens-cli analyze --file result.json
//!
//! # Macro percentages from grams
//! nutrilens-cli macros --protein 25 --carbs 10 --fat 8
//!
//! # Acidity of a food, optionally with a measured pH
//! nutrilens-cli ph "iced green tea"
//! nutrilens-cli ph lemonade --measured 2.6
//!
//! # Allergen detection from a food name
//! nutrilens-cli allergens "peanut butter"
//!
//! # Fetch from the API and print a report
//! nutrilens-cli fetch "orange juice" --quantity 250 --unit ml
//!
//! # Search suggestions
//! nutrilens-cli search chicken --json
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutrilens::{
    config::{AppConfig, IntelligenceConfig},
    errors::AppResult,
    logging::LoggingConfig,
    models::ServingUnit,
};
use std::path::PathBuf;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutrilens-cli",
    about = "Nutrilens nutrition analysis CLI",
    long_about = "Derive macro percentages, acidity, and allergen warnings from nutrition data."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze a nutrition query result JSON file
    Analyze {
        /// Path to the JSON file, or - for stdin
        #[arg(long)]
        file: PathBuf,
    },

    /// Compute macro percentages from grams
    Macros {
        /// Protein grams
        #[arg(long, default_value = "0")]
        protein: f64,

        /// Carbohydrate grams
        #[arg(long, default_value = "0")]
        carbs: f64,

        /// Fat grams
        #[arg(long, default_value = "0")]
        fat: f64,

        /// Adjust the largest value so the percentages sum to 100
        #[arg(long)]
        normalize: bool,
    },

    /// Classify a food's acidity
    Ph {
        /// Food name
        food: String,

        /// Measured pH, used when valid
        #[arg(long)]
        measured: Option<f64>,
    },

    /// Detect allergens from a food name
    Allergens {
        /// Food name
        food: String,
    },

    /// Fetch nutrition data from the API and print a report
    Fetch {
        /// Food query
        query: String,

        /// Serving quantity
        #[arg(long, default_value = "100")]
        quantity: f64,

        /// Serving unit (g, ml, oz, cups)
        #[arg(long, default_value = "g")]
        unit: ServingUnit,
    },

    /// Search the API for matching foods
    Search {
        /// Search text
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging.with_level("warn")
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let intelligence = IntelligenceConfig::load()?;

    match cli.command {
        Command::Analyze { file } => {
            commands::analysis::analyze(&intelligence, &file, cli.json)?;
        }
        Command::Macros {
            protein,
            carbs,
            fat,
            normalize,
        } => {
            commands::analysis::macros(&intelligence, protein, carbs, fat, normalize, cli.json)?;
        }
        Command::Ph { food, measured } => {
            commands::analysis::ph(&intelligence, &food, measured, cli.json)?;
        }
        Command::Allergens { food } => {
            commands::analysis::allergens(&intelligence, &food, cli.json)?;
        }
        Command::Fetch {
            query,
            quantity,
            unit,
        } => {
            let config = AppConfig::from_env()?;
            commands::api::fetch(&config, &intelligence, &query, quantity, unit, cli.json).await?;
        }
        Command::Search { query } => {
            let config = AppConfig::from_env()?;
            commands::api::search(&config, &query, cli.json).await?;
        }
    }

    Ok(())
}
