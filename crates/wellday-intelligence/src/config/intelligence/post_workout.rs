// ABOUTME: Post-workout nutrition configuration for recovery windows and meal sizing
// ABOUTME: Keyword tables, recovery thresholds, and protein distribution rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Post-Workout Nutrition Configuration
//!
//! # Scientific References
//!
//! - Nutrient timing: Kerksick et al. (2017) DOI: 10.1186/s12970-017-0189-4
//! - Protein per meal: Schoenfeld & Aragon (2018) DOI: 10.1186/s12970-018-0215-1

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Post-workout advisor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWorkoutConfig {
    /// Activity name substrings that classify a session as strength
    pub strength_keywords: Vec<String>,
    /// Activity name substrings that classify a session as cardio
    pub cardio_keywords: Vec<String>,
    /// Sessions burning more than this need recovery nutrition (400 kcal)
    pub recovery_calories: f64,
    /// Sessions longer than this need recovery nutrition (60 min)
    pub recovery_duration_minutes: f64,
    /// Cardio longer than this needs carb repletion (45 min)
    pub carb_repletion_duration_minutes: f64,
    /// Sessions longer than this need electrolytes (60 min)
    pub electrolyte_duration_minutes: f64,
    /// Sessions burning more than this should eat within 2 hours (200 kcal)
    pub prompt_meal_calories: f64,
    /// Minutes after a session during which suggestions are offered (180)
    pub suggestion_window_minutes: i64,
    /// Recovery meal sizing
    pub meal: RecoveryMealConfig,
    /// Protein spread across meals
    pub protein_distribution: ProteinDistributionConfig,
}

/// Recovery meal macro sizing (grams)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryMealConfig {
    /// Protein when a boost is needed (25 g)
    pub boosted_protein_g: f64,
    /// Protein otherwise (15 g)
    pub base_protein_g: f64,
    /// Carbs when glycogen repletion is needed (40 g)
    pub repletion_carbs_g: f64,
    /// Carbs otherwise (20 g)
    pub base_carbs_g: f64,
    /// Calories added for fat and incidentals (50 kcal)
    pub overhead_kcal: f64,
}

/// Per-meal protein rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinDistributionConfig {
    /// Breakfast protein below this triggers a recommendation (15 g)
    pub breakfast_min_g: f64,
    /// Lunch protein below this triggers a recommendation (20 g)
    pub lunch_min_g: f64,
    /// Dinner share of daily protein above this triggers a recommendation (0.6)
    pub dinner_max_share: f64,
    /// Max spread (max - min) / total across main meals to count as even (0.4)
    pub max_spread_ratio: f64,
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_owned()).collect()
}

impl Default for PostWorkoutConfig {
    fn default() -> Self {
        Self {
            strength_keywords: keywords(&["lift", "strength", "weight"]),
            cardio_keywords: keywords(&["run", "walk", "bike", "swim", "cycle"]),
            recovery_calories: 400.0,
            recovery_duration_minutes: 60.0,
            carb_repletion_duration_minutes: 45.0,
            electrolyte_duration_minutes: 60.0,
            prompt_meal_calories: 200.0,
            suggestion_window_minutes: 180,
            meal: RecoveryMealConfig::default(),
            protein_distribution: ProteinDistributionConfig::default(),
        }
    }
}

impl Default for RecoveryMealConfig {
    fn default() -> Self {
        Self {
            boosted_protein_g: 25.0,
            base_protein_g: 15.0,
            repletion_carbs_g: 40.0,
            base_carbs_g: 20.0,
            overhead_kcal: 50.0,
        }
    }
}

impl Default for ProteinDistributionConfig {
    fn default() -> Self {
        Self {
            breakfast_min_g: 15.0,
            lunch_min_g: 20.0,
            dinner_max_share: 0.6,
            max_spread_ratio: 0.4,
        }
    }
}

impl PostWorkoutConfig {
    /// Validate post-workout configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if keyword tables are empty, the suggestion window
    /// is not positive, or protein shares fall outside 0-1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strength_keywords.is_empty() || self.cardio_keywords.is_empty() {
            return Err(ConfigError::EmptyKeywords(
                "strength_keywords and cardio_keywords must not be empty",
            ));
        }
        if self.suggestion_window_minutes <= 0 {
            return Err(ConfigError::OutOfBounds(
                "Suggestion window must be positive",
            ));
        }
        if self.meal.base_protein_g > self.meal.boosted_protein_g
            || self.meal.base_carbs_g > self.meal.repletion_carbs_g
        {
            return Err(ConfigError::OutOfOrder(
                "Base meal macros must not exceed boosted macros",
            ));
        }
        let dist = &self.protein_distribution;
        if !(0.0..=1.0).contains(&dist.dinner_max_share)
            || !(0.0..=1.0).contains(&dist.max_spread_ratio)
        {
            return Err(ConfigError::InvalidShare(
                "Protein distribution shares must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }
}
