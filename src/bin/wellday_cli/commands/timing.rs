// ABOUTME: Timing commands for wellday-cli
// ABOUTME: Circadian meal timing analysis and post-workout recovery suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use serde_json::json;
use tracing::info;
use wellday::models::{ExerciseLogEntry, FoodLogEntry, SleepPreferences};
use wellday::intelligence::{MealTimingAnalyzer, PostWorkoutAdvisor};
use wellday::store::{keys, load_or_default, KeyValueStore};
use wellday::IntelligenceConfig;

use crate::helpers::logs::on_date_or_latest;
use crate::helpers::output::print_json;

/// Analyze meal timing for one day, optionally with the multi-day pattern
pub async fn circadian(
    store: &dyn KeyValueStore,
    config: &IntelligenceConfig,
    date: Option<NaiveDate>,
    weekly: bool,
) -> Result<()> {
    let logs: Vec<FoodLogEntry> = load_or_default(store, keys::FOOD_LOGS).await?;
    let prefs: SleepPreferences = load_or_default(store, keys::SLEEP_PREFERENCES).await?;

    let day_logs = on_date_or_latest(&logs, date);
    let mut analysis = MealTimingAnalyzer::analyze_day(&day_logs, &prefs, &config.circadian);
    if weekly {
        analysis.weekly_pattern = MealTimingAnalyzer::analyze_weekly_pattern(&logs, &config.circadian);
    }
    info!(
        meals = analysis.meal_count,
        score = analysis.sleep_readiness_score,
        "Analyzed meal timing"
    );

    print_json(&analysis)
}

/// Suggest a recovery meal for the latest session within the window
pub async fn post_workout(
    store: &dyn KeyValueStore,
    config: &IntelligenceConfig,
    now: Option<DateTime<FixedOffset>>,
) -> Result<()> {
    let exercises: Vec<ExerciseLogEntry> = load_or_default(store, keys::EXERCISE_LOGS).await?;
    let now = now.unwrap_or_else(|| Local::now().fixed_offset());

    let recommendation =
        PostWorkoutAdvisor::get_post_workout_meal_suggestions(&exercises, now, &config.post_workout);
    if recommendation.is_none() {
        info!(sessions = exercises.len(), "No session within the recovery window");
    }

    print_json(&json!({
        "evaluated_at": now,
        "recommendation": recommendation,
    }))
}
