// ABOUTME: Shared test utilities for root integration tests
// ABOUTME: Quiet logging setup plus log and profile fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `wellday`

use chrono::{DateTime, FixedOffset};
use std::env;
use std::sync::Once;
use tracing::Level;
use wellday::models::{
    ActivityLevel, ActivityProfile, ActivityRef, BiologicalSex, ExerciseIntensity,
    ExerciseLogEntry, FitnessGoal, FoodLogEntry, MealType, NutrientSnapshot, PhysicalProfile,
    UserProfile,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse an RFC 3339 timestamp
pub fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

/// One serving of a food with fixed carbs and fat
pub fn food(name: &str, at: &str, meal_type: MealType, calories: f64, protein_g: f64) -> FoodLogEntry {
    FoodLogEntry::new(
        name.to_lowercase(),
        name,
        NutrientSnapshot {
            calories,
            protein_g,
            carbs_g: 40.0,
            fat_g: 12.0,
            tags: vec![],
        },
        1.0,
        ts(at),
        meal_type,
    )
    .unwrap()
}

/// A session of the named activity
pub fn exercise(name: &str, met: f64, minutes: f64, at: &str) -> ExerciseLogEntry {
    ExerciseLogEntry::new(
        ActivityRef {
            id: name.to_lowercase().replace(' ', "_"),
            name: name.to_owned(),
            met,
        },
        minutes,
        met * 70.0 * minutes / 60.0,
        ExerciseIntensity::Moderate,
        ts(at),
    )
    .unwrap()
}

/// 70 kg, 175 cm, 30-year-old male, moderately active, maintaining
pub fn reference_profile() -> UserProfile {
    UserProfile {
        physical: PhysicalProfile::metric(70.0, 175.0, 30, BiologicalSex::Male),
        activity: ActivityProfile::new(ActivityLevel::ModeratelyActive, FitnessGoal::Maintain),
        ..UserProfile::default()
    }
}

/// Breakfast, lunch, and dinner on one day in UTC+1
pub fn reference_day() -> Vec<FoodLogEntry> {
    vec![
        food("Oatmeal", "2025-03-14T07:30:00+01:00", MealType::Breakfast, 380.0, 14.0),
        food("Chicken salad", "2025-03-14T12:45:00+01:00", MealType::Lunch, 520.0, 38.0),
        food("Salmon and rice", "2025-03-14T18:30:00+01:00", MealType::Dinner, 640.0, 42.0),
    ]
}
