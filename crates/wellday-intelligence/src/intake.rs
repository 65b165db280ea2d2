// ABOUTME: Food intake totals and progress against daily targets
// ABOUTME: Sums quantity-scaled macros per day and reports percent of each target reached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use crate::daily_values::PersonalizedDailyValues;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wellday_core::models::{FoodLogEntry, LogEntry};

/// Macro totals over a set of food logs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyIntake {
    /// Number of entries summed
    pub entry_count: usize,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrate (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// Percent of each target reached; `None` where no target applies
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct IntakeProgress {
    /// Calories (%)
    pub calories_pct: Option<f64>,
    /// Protein (%)
    pub protein_pct: Option<f64>,
    /// Carbohydrate (%)
    pub carbs_pct: Option<f64>,
    /// Fat (%)
    pub fat_pct: Option<f64>,
}

/// Total quantity-scaled macros, rounded to 0.1
#[must_use]
pub fn summarize_intake(food_logs: &[FoodLogEntry]) -> DailyIntake {
    let total = food_logs.iter().fold(DailyIntake::default(), |acc, log| DailyIntake {
        entry_count: acc.entry_count + 1,
        calories: acc.calories + log.total_calories(),
        protein_g: acc.protein_g + log.total_protein_g(),
        carbs_g: acc.carbs_g + log.total_carbs_g(),
        fat_g: acc.fat_g + log.total_fat_g(),
    });
    DailyIntake {
        calories: round1(total.calories),
        protein_g: round1(total.protein_g),
        carbs_g: round1(total.carbs_g),
        fat_g: round1(total.fat_g),
        ..total
    }
}

/// Per-local-date totals, oldest first
#[must_use]
pub fn summarize_by_date(food_logs: &[FoodLogEntry]) -> BTreeMap<NaiveDate, DailyIntake> {
    let mut by_date: BTreeMap<NaiveDate, Vec<FoodLogEntry>> = BTreeMap::new();
    for log in food_logs {
        by_date.entry(log.local_date()).or_default().push(log.clone());
    }
    by_date
        .into_iter()
        .map(|(date, logs)| (date, summarize_intake(&logs)))
        .collect()
}

/// Percent of target for each macro, rounded to whole percent
#[must_use]
pub fn intake_progress(intake: &DailyIntake, targets: &PersonalizedDailyValues) -> IntakeProgress {
    IntakeProgress {
        calories_pct: percent_of(intake.calories, Some(targets.calories)),
        protein_pct: percent_of(intake.protein_g, Some(targets.protein_g)),
        carbs_pct: percent_of(intake.carbs_g, targets.carbs_g),
        fat_pct: percent_of(intake.fat_g, targets.fat_g),
    }
}

fn percent_of(value: f64, target: Option<u32>) -> Option<f64> {
    target
        .filter(|t| *t > 0)
        .map(|t| (value / f64::from(t) * 100.0).round())
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
