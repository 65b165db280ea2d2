// ABOUTME: Intake commands for wellday-cli
// ABOUTME: Protein distribution and intake progress against personalized targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;
use wellday::models::{FoodLogEntry, UserProfile};
use wellday::intelligence::{
    compute_targets, intake_progress, summarize_by_date, summarize_intake, DailyIntake,
    IntakeProgress, PostWorkoutAdvisor,
};
use wellday::store::{keys, load_or_default, KeyValueStore};
use wellday::IntelligenceConfig;

use crate::helpers::logs::{on_date, on_date_or_latest};
use crate::helpers::output::print_json;

#[derive(Serialize)]
struct DayReport {
    date: NaiveDate,
    intake: DailyIntake,
    progress: IntakeProgress,
}

/// Protein per meal slot for one day
pub async fn protein(
    store: &dyn KeyValueStore,
    config: &IntelligenceConfig,
    date: Option<NaiveDate>,
) -> Result<()> {
    let logs: Vec<FoodLogEntry> = load_or_default(store, keys::FOOD_LOGS).await?;
    let day_logs = on_date_or_latest(&logs, date);

    let distribution =
        PostWorkoutAdvisor::analyze_protein_distribution(&day_logs, &config.post_workout);
    print_json(&distribution)
}

/// Intake totals and target progress for one date, or every logged date
pub async fn intake(
    store: &dyn KeyValueStore,
    config: &IntelligenceConfig,
    date: Option<NaiveDate>,
) -> Result<()> {
    let profile: UserProfile = load_or_default(store, keys::PROFILE).await?;
    let logs: Vec<FoodLogEntry> = load_or_default(store, keys::FOOD_LOGS).await?;
    let targets = compute_targets(&profile, &config.nutrition);

    let days: Vec<(NaiveDate, DailyIntake)> = match date {
        Some(date) => vec![(date, summarize_intake(&on_date(&logs, date)))],
        None => summarize_by_date(&logs).into_iter().collect(),
    };
    info!(days = days.len(), "Summarized intake");

    let reports: Vec<DayReport> = days
        .into_iter()
        .map(|(date, intake)| DayReport {
            date,
            progress: intake_progress(&intake, &targets),
            intake,
        })
        .collect();
    print_json(&reports)
}
