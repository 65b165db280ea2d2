// ABOUTME: Wellday CLI - runs the nutrition and circadian engines over a local data directory
// ABOUTME: Reads profile, logs, and sleep preferences from JSON documents and prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday
//!
//! Usage:
//! ```bash
//! # BMI from direct measurements
//! wellday-cli bmi 70 175
//! wellday-cli bmi 154 69 --units imperial
//!
//! # Daily targets for the stored profile
//! wellday-cli targets
//!
//! # Meal timing for the latest logged day, with the multi-day pattern
//! wellday-cli circadian --weekly
//!
//! # Recovery meal for a session logged in the last three hours
//! wellday-cli post-workout --now 2025-03-14T18:30:00+01:00
//!
//! # Protein spread and intake progress for one day
//! wellday-cli protein --date 2025-03-14
//! wellday-cli intake --date 2025-03-14
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wellday::config::AppConfig;
use wellday::store::JsonFileStore;

use crate::helpers::units::UnitSystem;

#[derive(Parser)]
#[command(
    name = "wellday-cli",
    about = "Wellday nutrition and sleep-timing engine",
    long_about = "Run the Wellday engines over the JSON documents in a data directory: \
                  profile.json, food_logs.json, exercise_logs.json, sleep_preferences.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory (overrides `WELLDAY_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate and classify BMI from weight and height
    Bmi {
        /// Body weight (kg, or lbs with --units imperial)
        weight: f64,

        /// Height (cm, or inches with --units imperial)
        height: f64,

        /// Unit system of the measurements
        #[arg(long, value_enum, default_value = "metric")]
        units: UnitSystem,
    },

    /// Personalized daily targets for the stored profile
    Targets,

    /// Meal timing relative to the target bedtime
    Circadian {
        /// Analyze this local date instead of the most recent one
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Include the multi-day last-meal pattern
        #[arg(long)]
        weekly: bool,
    },

    /// Recovery meal suggestion after today's latest workout
    PostWorkout {
        /// Evaluation instant in RFC 3339 (defaults to the current local time)
        #[arg(long)]
        now: Option<DateTime<FixedOffset>>,
    },

    /// Protein distribution across meal slots
    Protein {
        /// Local date to analyze (defaults to the most recent logged date)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Intake totals and progress against daily targets
    Intake {
        /// Local date to summarize (defaults to every logged date)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    logging.init()?;

    let intelligence = config.init_intelligence();
    let store = JsonFileStore::new(config.data_dir.clone());
    info!(data_dir = %store.root().display(), "Wellday CLI");

    match cli.command {
        Command::Bmi {
            weight,
            height,
            units,
        } => commands::body::bmi(weight, height, units)?,
        Command::Targets => commands::body::targets(&store, intelligence).await?,
        Command::Circadian { date, weekly } => {
            commands::timing::circadian(&store, intelligence, date, weekly).await?;
        }
        Command::PostWorkout { now } => {
            commands::timing::post_workout(&store, intelligence, now).await?;
        }
        Command::Protein { date } => {
            commands::intake::protein(&store, intelligence, date).await?;
        }
        Command::Intake { date } => commands::intake::intake(&store, intelligence, date).await?,
    }

    Ok(())
}
