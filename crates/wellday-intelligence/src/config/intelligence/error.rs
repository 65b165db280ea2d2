// ABOUTME: Rejections raised while loading or validating engine configuration
// ABOUTME: Separates misordered thresholds, out-of-bounds values, bad shares, and bad env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Errors from [`IntelligenceConfig::load`](super::IntelligenceConfig::load)
//! and the per-domain `validate` methods.

use thiserror::Error;

/// Why an engine configuration was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Ordered thresholds are out of sequence (buffer bands, activity factors)
    #[error("thresholds out of order: {0}")]
    OutOfOrder(&'static str),

    /// A single value lies outside what the engines can use
    #[error("value out of bounds: {0}")]
    OutOfBounds(&'static str),

    /// A share or ratio lies outside 0.0 to 1.0
    #[error("invalid share: {0}")]
    InvalidShare(&'static str),

    /// Exercise classification has nothing to match against
    #[error("empty keyword table: {0}")]
    EmptyKeywords(&'static str),

    /// A `WELLDAY_*` variable holds text that does not parse as its setting
    #[error("{variable}={value:?} is not a valid override")]
    InvalidOverride {
        /// Environment variable name
        variable: String,
        /// Raw value found in the environment
        value: String,
    },
}
