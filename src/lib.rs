// ABOUTME: Main library entry point for the Wellday nutrition and sleep-timing engine
// ABOUTME: Wires the calculation crates to configuration, logging, and the profile/log store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

#![deny(unsafe_code)]

//! # Wellday
//!
//! Personalized daily nutrition targets and circadian meal timing scores
//! computed from a user profile, food and exercise logs, and sleep
//! preferences.
//!
//! ## Architecture
//!
//! - **`wellday-core`**: Domain models, units, clock parsing, `AppError`
//! - **`wellday-intelligence`**: Pure calculation engines and their configuration
//! - **store**: Key/value persistence for profiles and logs (memory or JSON files)
//! - **config**: Environment-driven application settings
//! - **logging**: `tracing-subscriber` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use wellday::config::AppConfig;
//! use wellday::models::{FoodLogEntry, SleepPreferences};
//! use wellday::store::{keys, load_or_default, JsonFileStore};
//! use wellday::intelligence::MealTimingAnalyzer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let intelligence = config.init_intelligence();
//!     let store = JsonFileStore::new(config.data_dir.clone());
//!
//!     let logs: Vec<FoodLogEntry> = load_or_default(&store, keys::FOOD_LOGS).await?;
//!     let prefs: SleepPreferences = load_or_default(&store, keys::SLEEP_PREFERENCES).await?;
//!     let analysis =
//!         MealTimingAnalyzer::analyze_circadian_pattern(&logs, &prefs, &intelligence.circadian);
//!     println!("Sleep readiness: {}", analysis.sleep_readiness_score);
//!     Ok(())
//! }
//! ```

/// Application configuration
pub mod config;

/// Logging setup
pub mod logging;

/// Profile and log persistence
pub mod store;

pub use wellday_core::{errors, models, time, units, AppError, AppResult, ErrorCode};
pub use wellday_intelligence as intelligence;
pub use wellday_intelligence::IntelligenceConfig;
