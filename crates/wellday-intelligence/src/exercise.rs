// ABOUTME: MET-based exercise energy estimates and intensity tiers
// ABOUTME: Builds exercise log entries whose calories and intensity come from the activity's MET value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Exercise energy
//!
//! kcal = MET x body weight (kg) x hours. Intensity follows the MET bands
//! used by the Compendium of Physical Activities.
//!
//! # Scientific References
//!
//! - Ainsworth, B.E., et al. (2011). 2011 Compendium of Physical Activities.
//!   *Med Sci Sports Exerc*, 43(8), 1575-1581.
//!   <https://doi.org/10.1249/MSS.0b013e31821ece12>

use chrono::{DateTime, FixedOffset};
use wellday_core::models::{ActivityRef, ExerciseIntensity, ExerciseLogEntry};
use wellday_core::{AppError, AppResult};

/// MET below which an activity is low intensity
pub const MODERATE_MET_THRESHOLD: f64 = 3.0;
/// MET at or above which an activity is high intensity
pub const HIGH_MET_THRESHOLD: f64 = 6.0;

/// Estimated kcal for a session, rounded and never negative
#[must_use]
pub fn estimate_calories_burned(met: f64, weight_kg: f64, duration_minutes: f64) -> f64 {
    (met * weight_kg * duration_minutes / 60.0).round().max(0.0)
}

/// Intensity tier for a MET value
#[must_use]
pub fn intensity_from_met(met: f64) -> ExerciseIntensity {
    if met < MODERATE_MET_THRESHOLD {
        ExerciseIntensity::Low
    } else if met < HIGH_MET_THRESHOLD {
        ExerciseIntensity::Moderate
    } else {
        ExerciseIntensity::High
    }
}

/// Construct exercise log entries from an activity table row
pub trait FromActivity: Sized {
    /// Derive calories and intensity from the activity's MET value
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive MET or body weight, and
    /// `ValueOutOfRange` for a non-positive duration.
    fn from_activity(
        activity: ActivityRef,
        duration_minutes: f64,
        weight_kg: f64,
        timestamp: DateTime<FixedOffset>,
    ) -> AppResult<Self>;
}

impl FromActivity for ExerciseLogEntry {
    fn from_activity(
        activity: ActivityRef,
        duration_minutes: f64,
        weight_kg: f64,
        timestamp: DateTime<FixedOffset>,
    ) -> AppResult<Self> {
        if !(activity.met.is_finite() && activity.met > 0.0) {
            return Err(AppError::invalid_input(format!(
                "Activity '{}' has no usable MET value",
                activity.id
            )));
        }
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(AppError::invalid_input("Body weight is required to estimate calories"));
        }
        let calories = estimate_calories_burned(activity.met, weight_kg, duration_minutes);
        let intensity = intensity_from_met(activity.met);
        Self::new(activity, duration_minutes, calories, intensity, timestamp)
    }
}
