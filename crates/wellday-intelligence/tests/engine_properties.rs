// ABOUTME: Property tests for scoring bounds, monotonicity, and determinism of the engines
// ABOUTME: Uses proptest over generated meal times, body measurements, and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use proptest::prelude::*;
use proptest::{collection, option};
use wellday_core::models::{
    ActivityLevel, ActivityProfile, BiologicalSex, FitnessGoal, FoodLogEntry, MealType,
    Height, NutrientSnapshot, PhysicalProfile, SleepPreferences, UserProfile, Weight,
};
use wellday_core::time::ClockTime;
use wellday_intelligence::config::intelligence::{CircadianConfig, NutritionConfig};
use wellday_intelligence::{
    classify_bmi, compute_targets, BmiCategory, DailyValueSource, MealTimingAnalyzer,
};

fn at(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    let naive = NaiveDate::from_ymd_opt(2025, 3, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap();
    FixedOffset::east_opt(0)
        .unwrap()
        .from_local_datetime(&naive)
        .unwrap()
}

fn meal(day: u32, hour: u32, minute: u32, protein_g: f64) -> FoodLogEntry {
    FoodLogEntry::new(
        "meal",
        "Meal",
        NutrientSnapshot {
            calories: 500.0,
            protein_g,
            carbs_g: 50.0,
            fat_g: 10.0,
            tags: vec![],
        },
        1.0,
        at(day, hour, minute),
        MealType::Dinner,
    )
    .unwrap()
}

fn meals() -> impl Strategy<Value = Vec<FoodLogEntry>> {
    collection::vec((1u32..=10, 0u32..24, 0u32..60, 0.0f64..60.0), 0..30).prop_map(|raw| {
        raw.into_iter()
            .map(|(day, hour, minute, protein)| meal(day, hour, minute, protein))
            .collect()
    })
}

const fn category_rank(category: BmiCategory) -> u8 {
    match category {
        BmiCategory::Underweight => 0,
        BmiCategory::Normal => 1,
        BmiCategory::Overweight => 2,
        BmiCategory::Obese => 3,
    }
}

#[test]
fn readiness_score_stays_in_bounds() {
    let config = CircadianConfig::default();
    proptest!(|(logs in meals(), sleep_hour in 0u32..24, sleep_minute in 0u32..60)| {
        let prefs = SleepPreferences::with_sleep_time(format!("{sleep_hour:02}:{sleep_minute:02}"));
        let analysis = MealTimingAnalyzer::analyze_day(&logs, &prefs, &config);
        prop_assert!(analysis.sleep_readiness_score <= 100);
        if let Some(buffer) = analysis.last_meal_minutes_before_sleep {
            prop_assert_eq!(
                analysis.digestive_buffer_status,
                MealTimingAnalyzer::classify_buffer(buffer, &config)
            );
        }
    });
}

#[test]
fn readiness_score_never_drops_as_buffer_grows() {
    let config = CircadianConfig::default();
    proptest!(|(a in -1440i64..2880, b in -1440i64..2880)| {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            MealTimingAnalyzer::sleep_readiness_score(low, &config)
                <= MealTimingAnalyzer::sleep_readiness_score(high, &config)
        );
        prop_assert!(
            MealTimingAnalyzer::classify_buffer(low, &config)
                >= MealTimingAnalyzer::classify_buffer(high, &config)
        );
    });
}

#[test]
fn circadian_analysis_is_deterministic() {
    let config = CircadianConfig::default();
    let prefs = SleepPreferences::default();
    proptest!(|(logs in meals())| {
        let first = MealTimingAnalyzer::analyze_circadian_pattern(&logs, &prefs, &config);
        let second = MealTimingAnalyzer::analyze_circadian_pattern(&logs, &prefs, &config);
        prop_assert_eq!(first, second);
    });
}

#[test]
fn single_day_entry_never_mixes_dates() {
    let config = CircadianConfig::default();
    let prefs = SleepPreferences::default();
    proptest!(|(logs in meals())| {
        let analysis = MealTimingAnalyzer::analyze_day(&logs, &prefs, &config);
        if let Some(date) = analysis.date {
            let expected = logs.iter().filter(|l| l.timestamp.date_naive() == date).count();
            prop_assert_eq!(analysis.meal_count, expected);
            prop_assert!(analysis.eating_window_hours < 24.0);
        } else {
            prop_assert!(logs.is_empty());
        }
    });
}

#[test]
fn weekly_consistency_is_bounded() {
    let config = CircadianConfig::default();
    proptest!(|(logs in meals())| {
        match MealTimingAnalyzer::analyze_weekly_pattern(&logs, &config) {
            Some(pattern) => {
                prop_assert!((0.0..=100.0).contains(&pattern.consistency_score));
                prop_assert!(pattern.days_with_late_meals <= pattern.days_analyzed);
                prop_assert!(pattern.average_last_meal_time <= ClockTime::new(23, 59));
            }
            None => prop_assert!(logs.is_empty()),
        }
    });
}

#[test]
fn bmi_category_is_monotonic() {
    proptest!(|(a in 5.0f64..80.0, b in 5.0f64..80.0)| {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            category_rank(classify_bmi(low).category) <= category_rank(classify_bmi(high).category)
        );
    });
}

#[test]
fn targets_never_fail_for_any_profile() {
    let config = NutritionConfig::default();
    let levels = prop_oneof![
        Just(None),
        Just(Some(ActivityLevel::Sedentary)),
        Just(Some(ActivityLevel::ModeratelyActive)),
        Just(Some(ActivityLevel::ExtremelyActive)),
    ];
    let sexes = prop_oneof![
        Just(None),
        Just(Some(BiologicalSex::Male)),
        Just(Some(BiologicalSex::Female)),
        Just(Some(BiologicalSex::Other)),
    ];
    proptest!(|(
        kg in option::of(35.0f64..200.0),
        cm in option::of(120.0f64..220.0),
        age in option::of(14u32..100),
        sex in sexes,
        level in levels
    )| {
        let profile = UserProfile {
            physical: PhysicalProfile {
                weight: kg.map(Weight::kg),
                height: cm.map(Height::cm),
                age,
                sex,
            },
            activity: ActivityProfile {
                activity_level: level,
                fitness_goal: FitnessGoal::LoseWeight,
            },
            ..UserProfile::default()
        };
        let targets = compute_targets(&profile, &config);
        let complete = kg.is_some() && cm.is_some() && age.is_some() && sex.is_some() && level.is_some();
        prop_assert_eq!(targets.source == DailyValueSource::Personalized, complete);
        prop_assert!(targets.hydration_ml > 0);
    });
}
