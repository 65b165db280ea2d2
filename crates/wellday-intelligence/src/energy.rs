// ABOUTME: Energy expenditure model: Mifflin-St Jeor BMR, activity-scaled TDEE, goal calorie targets
// ABOUTME: Incomplete profiles yield no estimate rather than an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Energy Model
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology.

use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, NutritionConfig,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wellday_core::models::{ActivityLevel, BiologicalSex, FitnessGoal, UserProfile};

/// Energy estimate for a complete profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate (kcal/day, unrounded)
    pub bmr: f64,
    /// Activity multiplier applied to BMR
    pub activity_factor: f64,
    /// Total Daily Energy Expenditure (kcal/day, rounded)
    pub tdee: u32,
    /// Goal delta applied to reach the target (kcal/day)
    pub goal_adjustment: i32,
    /// Calorie target (kcal/day, rounded)
    pub calorie_target: u32,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
/// - Other: -78
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: BiologicalSex,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = match sex {
        BiologicalSex::Male => config.msj_male_constant,
        BiologicalSex::Female => config.msj_female_constant,
        BiologicalSex::Other => config.msj_other_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Activity multiplier for a tier
#[must_use]
pub const fn activity_factor(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtremelyActive => config.extremely_active,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor (unrounded)
#[must_use]
pub fn calculate_tdee(bmr: f64, level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * activity_factor(level, config)
}

/// Calorie delta for a goal (kcal/day)
#[must_use]
pub const fn goal_adjustment(goal: FitnessGoal, config: &GoalAdjustmentConfig) -> f64 {
    match goal {
        FitnessGoal::LoseWeight => config.lose_weight_kcal,
        FitnessGoal::GainMuscle => config.gain_muscle_kcal,
        FitnessGoal::GainWeight => config.gain_weight_kcal,
        FitnessGoal::AthleticPerformance => config.athletic_performance_kcal,
        FitnessGoal::Maintain | FitnessGoal::GeneralFitness => 0.0,
    }
}

/// BMR for a profile; `None` until weight, height, age, and sex are all present
#[must_use]
pub fn bmr_for_profile(profile: &UserProfile, config: &BmrConfig) -> Option<f64> {
    let m = profile.physical.measurements()?;
    Some(calculate_mifflin_st_jeor(
        m.weight_kg,
        m.height_cm,
        m.age,
        m.sex,
        config,
    ))
}

/// Rounded TDEE for a profile; `None` when BMR or the activity tier is missing
#[must_use]
pub fn tdee_for_profile(profile: &UserProfile, config: &NutritionConfig) -> Option<u32> {
    estimate_energy(profile, config).map(|e| e.tdee)
}

/// Full energy estimate including the goal-adjusted calorie target
///
/// The goal delta is applied only when `daily_values.apply_goal_adjustment`
/// is set. The target never goes below zero.
#[must_use]
pub fn estimate_energy(profile: &UserProfile, config: &NutritionConfig) -> Option<EnergyEstimate> {
    let bmr = bmr_for_profile(profile, &config.bmr)?;
    let level = profile.activity.activity_level?;
    let factor = activity_factor(level, &config.activity_factors);
    let tdee = bmr * factor;

    let adjustment = if config.daily_values.apply_goal_adjustment {
        goal_adjustment(profile.activity.fitness_goal, &config.goal_adjustments)
    } else {
        0.0
    };
    let target = (tdee + adjustment).round().max(0.0);

    debug!(
        bmr,
        factor,
        tdee,
        adjustment,
        target,
        "Computed energy estimate"
    );

    Some(EnergyEstimate {
        bmr,
        activity_factor: factor,
        tdee: tdee.round() as u32,
        goal_adjustment: adjustment as i32,
        calorie_target: target as u32,
    })
}
