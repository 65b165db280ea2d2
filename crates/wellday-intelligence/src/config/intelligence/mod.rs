// ABOUTME: Engine configuration for nutrition, circadian timing, and post-workout advice
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - BMR, activity factors, goal deltas, protein, daily value policy
//! - `circadian` - Digestive buffer bands, caffeine cutoff, weekly trend settings
//! - `post_workout` - Exercise classification, recovery thresholds, protein spread
//!
//! Defaults are overridden by `WELLDAY_*` environment variables, then validated.

pub mod circadian;
pub mod error;
pub mod nutrition;
pub mod post_workout;

pub use circadian::{CircadianConfig, DigestiveBufferConfig};
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, DailyValuesConfig, GoalAdjustmentConfig, NutritionConfig,
    ProteinConfig,
};
pub use post_workout::{PostWorkoutConfig, ProteinDistributionConfig, RecoveryMealConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Energy and daily value configuration
    pub nutrition: NutritionConfig,
    /// Meal timing and digestive buffer configuration
    pub circadian: CircadianConfig,
    /// Post-workout advisor configuration
    pub post_workout: PostWorkoutConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.circadian.validate()?;
        self.post_workout.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val.parse().map_err(|_| ConfigError::InvalidOverride {
                variable: env_var_name.to_owned(),
                value: val.clone(),
            })?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Daily value policy
        Self::apply_env_var(
            "WELLDAY_INCLUDE_MACRO_SPLIT",
            &mut self.nutrition.daily_values.include_macro_split,
        )?;
        Self::apply_env_var(
            "WELLDAY_APPLY_GOAL_ADJUSTMENT",
            &mut self.nutrition.daily_values.apply_goal_adjustment,
        )?;
        Self::apply_env_var(
            "WELLDAY_FAT_SHARE_OF_CALORIES",
            &mut self.nutrition.daily_values.fat_share_of_calories,
        )?;

        // Goal deltas
        Self::apply_env_var(
            "WELLDAY_LOSE_WEIGHT_KCAL",
            &mut self.nutrition.goal_adjustments.lose_weight_kcal,
        )?;
        Self::apply_env_var(
            "WELLDAY_GAIN_MUSCLE_KCAL",
            &mut self.nutrition.goal_adjustments.gain_muscle_kcal,
        )?;
        Self::apply_env_var(
            "WELLDAY_GAIN_WEIGHT_KCAL",
            &mut self.nutrition.goal_adjustments.gain_weight_kcal,
        )?;

        // Circadian thresholds
        Self::apply_env_var(
            "WELLDAY_OPTIMAL_BUFFER_MINUTES",
            &mut self.circadian.buffer.optimal_minutes,
        )?;
        Self::apply_env_var(
            "WELLDAY_CAFFEINE_CUTOFF_MINUTES",
            &mut self.circadian.caffeine_cutoff_minutes,
        )?;
        Self::apply_env_var("WELLDAY_LATE_MEAL_HOUR", &mut self.circadian.late_meal_hour)?;

        // Post-workout
        Self::apply_env_var(
            "WELLDAY_POST_WORKOUT_WINDOW_MINUTES",
            &mut self.post_workout.suggestion_window_minutes,
        )?;

        Ok(self)
    }
}
