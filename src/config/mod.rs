// ABOUTME: Configuration module for the Wellday application crate
// ABOUTME: Environment settings here; engine thresholds live in wellday-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Configuration for the Wellday application
//!
//! - **Environment**: data directory and logging from environment variables
//! - **Intelligence**: engine thresholds, re-exported from `wellday-intelligence`

/// Environment-based application configuration
pub mod environment;

pub use environment::{AppConfig, DATA_DIR_ENV, DEFAULT_DATA_DIR};
pub use wellday_intelligence::config::intelligence;
pub use wellday_intelligence::IntelligenceConfig;
