// ABOUTME: Environment-based application configuration for the store location and logging
// ABOUTME: Resolves the data directory from WELLDAY_DATA_DIR, the platform data dir, or ./data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use crate::logging::LoggingConfig;
use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};
use wellday_intelligence::IntelligenceConfig;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "WELLDAY_DATA_DIR";

/// Fallback data directory relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Application name used under the platform data directory
const APP_DIR_NAME: &str = "wellday";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding one JSON document per store key
    pub data_dir: PathBuf,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `WELLDAY_DATA_DIR` is set but empty
    pub fn from_env() -> Result<Self> {
        let config = Self {
            data_dir: resolve_data_dir(env::var(DATA_DIR_ENV).ok())?,
            logging: LoggingConfig::from_env(),
        };
        debug!(data_dir = %config.data_dir.display(), "Loaded application configuration");
        Ok(config)
    }

    /// Replace the data directory, e.g. from a command-line flag
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Load the process-wide intelligence configuration
    ///
    /// Invalid environment overrides fall back to defaults with a warning.
    pub fn init_intelligence(&self) -> &'static IntelligenceConfig {
        let config = IntelligenceConfig::global();
        info!(data_dir = %self.data_dir.display(), "Intelligence configuration ready");
        config
    }
}

fn resolve_data_dir(explicit: Option<String>) -> Result<PathBuf> {
    match explicit {
        Some(dir) if dir.trim().is_empty() => Err(anyhow!("{DATA_DIR_ENV} must not be empty")),
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(dirs::data_dir().map_or_else(
            || PathBuf::from(DEFAULT_DATA_DIR),
            |base| base.join(APP_DIR_NAME),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_data_dir(Some("/tmp/wellday-test".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/wellday-test"));
    }

    #[test]
    fn test_empty_dir_is_rejected() {
        assert!(resolve_data_dir(Some("  ".into())).is_err());
    }

    #[test]
    fn test_default_dir_ends_with_app_name_or_fallback() {
        let dir = resolve_data_dir(None).unwrap();
        assert!(dir.ends_with(APP_DIR_NAME) || dir == PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_data_dir() {
        env::set_var(DATA_DIR_ENV, "/var/lib/wellday");
        let config = AppConfig::from_env();
        env::remove_var(DATA_DIR_ENV);
        assert_eq!(config.unwrap().data_dir, PathBuf::from("/var/lib/wellday"));
    }
}
