// ABOUTME: Circadian meal timing configuration for digestive buffer and caffeine analysis
// ABOUTME: Thresholds for buffer bands, heavy meals, late eating, and weekly trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Circadian Meal Timing Configuration
//!
//! # Scientific References
//!
//! - Late eating and sleep: Crispim et al. (2011) DOI: 10.5664/JCSM.1476
//! - Caffeine half-life: Drake et al. (2013) DOI: 10.5664/jcsm.3170
//! - Time-restricted eating: Gill & Panda (2015) DOI: 10.1016/j.cmet.2015.09.005

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Circadian meal timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircadianConfig {
    /// Buffer bands (minutes before sleep)
    pub buffer: DigestiveBufferConfig,
    /// Hour of day at or after which a meal counts as late (20)
    pub late_meal_hour: u32,
    /// Last meal strictly before this hour marks an early eater (19)
    pub early_eater_hour: u32,
    /// Protein (g, quantity-scaled) above which a meal is heavy (20)
    pub heavy_meal_protein_g: f64,
    /// Fat (g, quantity-scaled) above which a meal is heavy (15)
    pub heavy_meal_fat_g: f64,
    /// Heavy meals closer than this to sleep are flagged (240 min)
    pub heavy_meal_window_minutes: i64,
    /// Caffeine closer than this to sleep is flagged (480 min)
    pub caffeine_cutoff_minutes: i64,
    /// Eating windows longer than this are flagged (14 h)
    pub max_eating_window_hours: f64,
    /// Weekly analysis: most recent logs considered (21)
    pub weekly_log_limit: usize,
    /// Weekly analysis: days required before a trend is reported (7)
    pub trend_min_days: usize,
    /// Weekly analysis: shift in mean last-meal time that counts as a trend (30 min)
    pub trend_shift_minutes: f64,
}

/// Digestive buffer bands; a buffer at or above a threshold earns that band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestiveBufferConfig {
    /// Optimal at >= 240 min; also the full-score buffer
    pub optimal_minutes: i64,
    /// Good at >= 180 min
    pub good_minutes: i64,
    /// Fair at >= 120 min
    pub fair_minutes: i64,
    /// Poor at >= 60 min; critical below
    pub poor_minutes: i64,
}

impl Default for DigestiveBufferConfig {
    fn default() -> Self {
        Self {
            optimal_minutes: 240,
            good_minutes: 180,
            fair_minutes: 120,
            poor_minutes: 60,
        }
    }
}

impl Default for CircadianConfig {
    fn default() -> Self {
        Self {
            buffer: DigestiveBufferConfig::default(),
            late_meal_hour: 20,
            early_eater_hour: 19,
            heavy_meal_protein_g: 20.0,
            heavy_meal_fat_g: 15.0,
            heavy_meal_window_minutes: 240,
            caffeine_cutoff_minutes: 480,
            max_eating_window_hours: 14.0,
            weekly_log_limit: 21,
            trend_min_days: 7,
            trend_shift_minutes: 30.0,
        }
    }
}

impl CircadianConfig {
    /// Validate circadian configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if buffer bands are not strictly descending and
    /// positive, hours are outside 0-23, or the weekly window is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.buffer;
        if b.poor_minutes <= 0 {
            return Err(ConfigError::OutOfBounds(
                "Digestive buffer thresholds must be positive",
            ));
        }
        if b.optimal_minutes <= b.good_minutes
            || b.good_minutes <= b.fair_minutes
            || b.fair_minutes <= b.poor_minutes
        {
            return Err(ConfigError::OutOfOrder(
                "Digestive buffer thresholds must be descending: optimal > good > fair > poor",
            ));
        }
        if self.late_meal_hour > 23 || self.early_eater_hour > 23 {
            return Err(ConfigError::OutOfBounds(
                "Late and early meal hours must be between 0 and 23",
            ));
        }
        if self.early_eater_hour > self.late_meal_hour {
            return Err(ConfigError::OutOfOrder(
                "early_eater_hour must not be after late_meal_hour",
            ));
        }
        if self.caffeine_cutoff_minutes <= 0 || self.heavy_meal_window_minutes <= 0 {
            return Err(ConfigError::OutOfBounds(
                "Caffeine and heavy meal windows must be positive",
            ));
        }
        if self.max_eating_window_hours <= 0.0 || self.max_eating_window_hours > 24.0 {
            return Err(ConfigError::OutOfBounds(
                "Maximum eating window must be between 0 and 24 hours",
            ));
        }
        if self.weekly_log_limit == 0 {
            return Err(ConfigError::OutOfBounds(
                "Weekly log limit must be at least 1",
            ));
        }
        Ok(())
    }

    /// Late-meal threshold in minutes after midnight
    #[must_use]
    pub const fn late_meal_minutes(&self) -> u32 {
        self.late_meal_hour * 60
    }
}
