// ABOUTME: Nutrition configuration for energy estimates and personalized daily targets
// ABOUTME: Configures BMR coefficients, activity factors, goal deltas, protein, and derived targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Nutrition Configuration
//!
//! Constants behind BMR, TDEE, goal-adjusted calorie targets, protein, fiber,
//! macro split, and hydration.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
//! - Fiber: Dietary Guidelines for Americans 2020-2025 (14 g per 1000 kcal)
//! - Hydration: EFSA Panel on Dietetic Products (2010) DOI: 10.2903/j.efsa.2010.1459

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Nutrition Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie deltas applied per fitness goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein g/kg by activity tier and life stage
    pub protein: ProteinConfig,
    /// Policy and ratios for the derived daily targets
    pub daily_values: DailyValuesConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Constant for other/unspecified sex: midpoint of male and female (-78)
    pub msj_other_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extremely active (hard training or physical job): 1.9
    pub extremely_active: f64,
}

/// Calorie deltas (kcal/day) added to TDEE per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Lose weight: -500 kcal (roughly 0.5 kg/week)
    pub lose_weight_kcal: f64,
    /// Gain muscle: +300 kcal lean surplus
    pub gain_muscle_kcal: f64,
    /// Gain weight: +300 kcal
    pub gain_weight_kcal: f64,
    /// Athletic performance: +200 kcal to support training load
    pub athletic_performance_kcal: f64,
}

/// Protein requirement configuration (g per kg body weight)
///
/// Reference: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinConfig {
    /// Sedentary RDA: 0.8
    pub sedentary_g_per_kg: f64,
    /// Lightly active: 1.0
    pub lightly_active_g_per_kg: f64,
    /// Moderately active: 1.2
    pub moderately_active_g_per_kg: f64,
    /// Very or extremely active: 1.6
    pub high_activity_g_per_kg: f64,
    /// Floor for muscle gain and athletic performance goals: 1.8
    pub muscle_goal_floor_g_per_kg: f64,
    /// Floor for older adults (sarcopenia prevention): 1.0
    pub elderly_floor_g_per_kg: f64,
    /// Added during pregnancy: 0.3
    pub pregnancy_extra_g_per_kg: f64,
    /// Added during lactation: 0.4
    pub lactation_extra_g_per_kg: f64,
}

/// Daily target policy and ratios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyValuesConfig {
    /// Emit carb and fat targets
    pub include_macro_split: bool,
    /// Apply the goal calorie delta to the calorie target
    pub apply_goal_adjustment: bool,
    /// Share of calories from fat (0.30)
    pub fat_share_of_calories: f64,
    /// Fiber grams per 1000 kcal (14)
    pub fiber_g_per_1000_kcal: f64,
    /// Water mL per kg body weight (33)
    pub hydration_ml_per_kg: f64,
    /// Extra water for very/extremely active users (500 mL)
    pub active_hydration_bonus_ml: f64,
    /// Extra water during lactation (700 mL)
    pub lactation_hydration_bonus_ml: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            msj_other_constant: -78.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extremely_active: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_weight_kcal: -500.0,
            gain_muscle_kcal: 300.0,
            gain_weight_kcal: 300.0,
            athletic_performance_kcal: 200.0,
        }
    }
}

impl Default for ProteinConfig {
    fn default() -> Self {
        Self {
            sedentary_g_per_kg: 0.8,
            lightly_active_g_per_kg: 1.0,
            moderately_active_g_per_kg: 1.2,
            high_activity_g_per_kg: 1.6,
            muscle_goal_floor_g_per_kg: 1.8,
            elderly_floor_g_per_kg: 1.0,
            pregnancy_extra_g_per_kg: 0.3,
            lactation_extra_g_per_kg: 0.4,
        }
    }
}

impl Default for DailyValuesConfig {
    fn default() -> Self {
        Self {
            include_macro_split: true,
            apply_goal_adjustment: true,
            fat_share_of_calories: 0.30,
            fiber_g_per_1000_kcal: 14.0,
            hydration_ml_per_kg: 33.0,
            active_hydration_bonus_ml: 500.0,
            lactation_hydration_bonus_ml: 700.0,
        }
    }
}

impl NutritionConfig {
    /// Validate nutrition configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when coefficients are non-positive, activity factors
    /// are not ascending within 1.0-2.5, protein is outside 0.5-3.0 g/kg, or the
    /// fat share is outside 0.1-0.5.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::OutOfBounds(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.extremely_active > 2.5 {
            return Err(ConfigError::OutOfBounds(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extremely_active
        {
            return Err(ConfigError::OutOfOrder(
                "Activity factors must be in ascending order",
            ));
        }

        let protein = &self.protein;
        if protein.sedentary_g_per_kg < 0.5 || protein.muscle_goal_floor_g_per_kg > 3.0 {
            return Err(ConfigError::OutOfBounds(
                "Protein recommendations must be between 0.5 and 3.0 g/kg",
            ));
        }
        if protein.sedentary_g_per_kg > protein.lightly_active_g_per_kg
            || protein.lightly_active_g_per_kg > protein.moderately_active_g_per_kg
            || protein.moderately_active_g_per_kg > protein.high_activity_g_per_kg
        {
            return Err(ConfigError::OutOfOrder(
                "Protein g/kg must not decrease with activity",
            ));
        }

        let dv = &self.daily_values;
        if !(0.1..=0.5).contains(&dv.fat_share_of_calories) {
            return Err(ConfigError::InvalidShare(
                "Fat share of calories must be between 0.1 and 0.5",
            ));
        }
        if dv.fiber_g_per_1000_kcal <= 0.0 || dv.hydration_ml_per_kg <= 0.0 {
            return Err(ConfigError::OutOfBounds(
                "Fiber and hydration ratios must be positive",
            ));
        }

        Ok(())
    }
}
