// ABOUTME: Calculation engines for body metrics, energy, daily values, meal timing, and recovery
// ABOUTME: Pure functions over wellday-core models, tuned through IntelligenceConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

#![deny(unsafe_code)]

//! # Wellday Intelligence
//!
//! Every function here is synchronous and free of I/O: identical inputs give
//! identical outputs. Missing profile data never raises; calculations return
//! `None` or fall back to the standard reference table.
//!
//! ## Modules
//!
//! - **`body_metrics`**: BMI and its classification
//! - **energy**: Mifflin-St Jeor BMR, TDEE, goal-adjusted calorie target
//! - **`daily_values`**: Personalized macro, fiber, hydration, and micronutrient targets
//! - **`meal_timing`**: Circadian meal timing and sleep readiness
//! - **`post_workout`**: Recovery meals and protein distribution
//! - **exercise**: MET-based calorie estimates
//! - **intake**: Intake totals and progress against targets
//! - **`profile_history`**: Timestamped physical profile snapshots

/// BMI calculation and classification
pub mod body_metrics;
/// Configuration for every engine in this crate
pub mod config;
/// Personalized daily value targets
pub mod daily_values;
/// BMR, TDEE, and calorie targets
pub mod energy;
/// Exercise energy estimates
pub mod exercise;
/// Intake totals and progress
pub mod intake;
/// Circadian meal timing analysis
pub mod meal_timing;
/// Post-workout recovery nutrition
pub mod post_workout;
/// Physical profile history
pub mod profile_history;
/// Dietary reference intake tables
pub mod reference_intakes;

pub use body_metrics::{bmi_for_profile, calculate_bmi, classify_bmi, BmiAssessment, BmiCategory};
pub use config::IntelligenceConfig;
pub use daily_values::{
    compute_targets, standard_daily_values, DailyValueSource, MicronutrientTargets,
    PersonalizedDailyValues,
};
pub use energy::{estimate_energy, EnergyEstimate};
pub use exercise::{estimate_calories_burned, intensity_from_met, FromActivity};
pub use intake::{intake_progress, summarize_by_date, summarize_intake, DailyIntake, IntakeProgress};
pub use meal_timing::{
    CircadianAnalysis, DigestiveBufferStatus, MealTimingAnalyzer, MealTimingPoint,
    MealTimingTrend, WeeklyMealPattern,
};
pub use post_workout::{
    ExerciseCategory, MealProteinDistribution, PostWorkoutAdvisor, PostWorkoutRecommendation,
    RecoveryTiming, WorkoutNutritionInsight,
};
pub use profile_history::{ProfileHistory, ProfileSnapshot};
