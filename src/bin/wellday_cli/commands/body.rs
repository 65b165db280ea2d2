// ABOUTME: Body metric commands for wellday-cli
// ABOUTME: BMI from direct measurements and daily targets for the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use anyhow::Result;
use serde_json::json;
use tracing::{debug, info};
use wellday::models::UserProfile;
use wellday::AppError;
use wellday::intelligence::{bmi_for_profile, calculate_bmi, classify_bmi, compute_targets};
use wellday::store::{keys, load_or_default, KeyValueStore};
use wellday::IntelligenceConfig;

use crate::helpers::output::print_json;
use crate::helpers::units::UnitSystem;

/// Classify BMI for the given measurements
pub fn bmi(weight: f64, height: f64, units: UnitSystem) -> Result<()> {
    let (weight_unit, height_unit) = units.units();
    let bmi = calculate_bmi(weight, weight_unit, height, height_unit)
        .ok_or_else(|| AppError::invalid_input("Height must be a positive number"))?;
    debug!(bmi, ?units, "Calculated BMI");
    print_json(&classify_bmi(bmi))
}

/// Daily targets, energy breakdown, and BMI for the stored profile
pub async fn targets(store: &dyn KeyValueStore, config: &IntelligenceConfig) -> Result<()> {
    let profile: UserProfile = load_or_default(store, keys::PROFILE).await?;
    let targets = compute_targets(&profile, &config.nutrition);
    info!(source = ?targets.source, calories = targets.calories, "Computed daily targets");

    print_json(&json!({
        "bmi": bmi_for_profile(&profile.physical),
        "targets": targets,
    }))
}
