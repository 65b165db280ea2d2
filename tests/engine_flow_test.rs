// ABOUTME: Integration tests running the engines over documents loaded from a JSON file store
// ABOUTME: Mirrors the CLI flow: hand-written JSON in, engine results out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use chrono::Duration;
use serde_json::json;
use tempfile::TempDir;
use wellday::intelligence::{
    bmi_for_profile, compute_targets, summarize_by_date, BmiCategory, DailyValueSource,
    DigestiveBufferStatus, ExerciseCategory, MealTimingAnalyzer, PostWorkoutAdvisor,
    ProfileHistory,
};
use wellday::models::{
    BiologicalSex, ExerciseLogEntry, FoodLogEntry, MealType, PhysicalProfile, SleepPreferences,
    UserProfile,
};
use wellday::store::{keys, load_as, load_or_default, save_as, JsonFileStore, KeyValueStore};
use wellday::IntelligenceConfig;

#[tokio::test]
async fn test_imperial_profile_document_yields_personalized_targets() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    store
        .save(
            keys::PROFILE,
            json!({
                "physical": {
                    "weight": {"value": 154.324, "unit": "lbs"},
                    "height": {"value": 68.9, "unit": "in"},
                    "age": 30,
                    "sex": "male"
                },
                "activity": {
                    "activity_level": "moderately-active",
                    "fitness_goal": "maintain"
                }
            }),
        )
        .await
        .unwrap();

    let profile: UserProfile = load_or_default(&store, keys::PROFILE).await.unwrap();
    let config = IntelligenceConfig::default();
    let targets = compute_targets(&profile, &config.nutrition);

    assert_eq!(targets.source, DailyValueSource::Personalized);
    assert!(targets.energy.is_some());
    let bmi = bmi_for_profile(&profile.physical).unwrap();
    assert_eq!(bmi.category, BmiCategory::Normal);
    assert!((bmi.bmi - 22.86).abs() < 0.05);
}

#[tokio::test]
async fn test_missing_profile_falls_back_to_standard_values() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    let profile: UserProfile = load_or_default(&store, keys::PROFILE).await.unwrap();
    let targets = compute_targets(&profile, &IntelligenceConfig::default().nutrition);

    assert_eq!(targets.source, DailyValueSource::StandardReference);
    assert_eq!(targets.calories, 2000);
}

#[tokio::test]
async fn test_circadian_analysis_over_stored_logs() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    save_as(&store, keys::FOOD_LOGS, &common::reference_day())
        .await
        .unwrap();
    store
        .save(
            keys::SLEEP_PREFERENCES,
            json!({"target_sleep_time": "23:00", "target_wake_time": "07:00"}),
        )
        .await
        .unwrap();

    let logs: Vec<FoodLogEntry> = load_or_default(&store, keys::FOOD_LOGS).await.unwrap();
    let prefs: SleepPreferences = load_or_default(&store, keys::SLEEP_PREFERENCES)
        .await
        .unwrap();
    assert_eq!(prefs.desired_digestive_buffer_minutes, 180);

    let config = IntelligenceConfig::default();
    let analysis = MealTimingAnalyzer::analyze_circadian_pattern(&logs, &prefs, &config.circadian);

    assert_eq!(analysis.meal_count, 3);
    assert_eq!(analysis.last_meal_minutes_before_sleep, Some(270));
    assert_eq!(analysis.digestive_buffer_status, DigestiveBufferStatus::Optimal);
    assert_eq!(analysis.sleep_readiness_score, 100);
    assert!(analysis.meets_desired_buffer);
    assert_eq!(analysis.weekly_pattern.unwrap().days_analyzed, 1);
}

#[tokio::test]
async fn test_post_workout_suggestion_from_stored_sessions() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    let run = common::exercise("Running", 9.8, 45.0, "2025-03-14T17:00:00+01:00");
    save_as(&store, keys::EXERCISE_LOGS, &[run.clone()])
        .await
        .unwrap();

    let sessions: Vec<ExerciseLogEntry> = load_or_default(&store, keys::EXERCISE_LOGS)
        .await
        .unwrap();
    let config = IntelligenceConfig::default();

    let soon = PostWorkoutAdvisor::get_post_workout_meal_suggestions(
        &sessions,
        run.timestamp + Duration::hours(1),
        &config.post_workout,
    )
    .unwrap();
    assert_eq!(soon.insight.exercise_id, run.id);
    assert_eq!(soon.insight.exercise_type, ExerciseCategory::Cardio);

    let late = PostWorkoutAdvisor::get_post_workout_meal_suggestions(
        &sessions,
        run.timestamp + Duration::hours(4),
        &config.post_workout,
    );
    assert!(late.is_none());
}

#[tokio::test]
async fn test_profile_history_persists_in_order() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    let mut history = ProfileHistory::new();
    history
        .record(
            common::ts("2025-03-01T08:00:00+01:00"),
            PhysicalProfile::metric(72.5, 175.0, 30, BiologicalSex::Male),
        )
        .unwrap();
    history
        .record(
            common::ts("2025-02-01T08:00:00+01:00"),
            PhysicalProfile::metric(74.0, 175.0, 30, BiologicalSex::Male),
        )
        .unwrap();
    save_as(&store, keys::PROFILE_HISTORY, &history).await.unwrap();

    let loaded: ProfileHistory = load_as(&store, keys::PROFILE_HISTORY)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.snapshots()[0].recorded_at < loaded.snapshots()[1].recorded_at);
    assert_eq!(
        loaded.weight_change_kg(common::ts("2025-02-15T00:00:00+01:00")),
        Some(-1.5)
    );
}

#[tokio::test]
async fn test_intake_grouped_by_local_date() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    let mut logs = common::reference_day();
    logs.push(common::food(
        "Late snack",
        "2025-03-15T00:30:00+01:00",
        MealType::Snack,
        150.0,
        5.0,
    ));
    save_as(&store, keys::FOOD_LOGS, &logs).await.unwrap();

    let loaded: Vec<FoodLogEntry> = load_or_default(&store, keys::FOOD_LOGS).await.unwrap();
    let by_date = summarize_by_date(&loaded);

    assert_eq!(by_date.len(), 2);
    let first = by_date.values().next().unwrap();
    assert_eq!(first.entry_count, 3);
    assert!((first.calories - 1540.0).abs() < 1e-9);
}
