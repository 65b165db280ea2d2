// ABOUTME: Circadian meal timing analysis: digestive buffer, sleep readiness, caffeine, weekly trend
// ABOUTME: Single-day scoring over the latest local date plus an explicit multi-day pattern pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Meal Timing Analysis Module
//!
//! Scores how well the timing of the day's meals supports the upcoming sleep
//! window. The digestive buffer (minutes between the last meal and target
//! bedtime) drives both the status band and the 0-100 sleep readiness score,
//! which ramps linearly up to the optimal buffer.
//!
//! Two entry points keep day boundaries explicit:
//! - [`MealTimingAnalyzer::analyze_day`] scores the most recent local date only
//! - [`MealTimingAnalyzer::analyze_weekly_pattern`] summarizes daily last-meal times
//!
//! A target bedtime before noon is read as after midnight, so a 00:30 bedtime
//! sits 4.5 hours after a 20:00 dinner. Meals eaten after midnight are
//! measured against the same night's bedtime without wrapping.
//!
//! # Scientific References
//!
//! - Crispim, C.A., et al. (2011). Relationship between food intake and sleep pattern
//!   in healthy individuals. *J Clin Sleep Med*, 7(6), 659-664.
//!   <https://doi.org/10.5664/JCSM.1476>
//!
//! - Drake, C., et al. (2013). Caffeine effects on sleep taken 0, 3, or 6 hours before
//!   going to bed. *J Clin Sleep Med*, 9(11), 1195-1200.
//!   <https://doi.org/10.5664/jcsm.3170>

use crate::config::intelligence::CircadianConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::{debug, warn};
use uuid::Uuid;
use wellday_core::models::{FoodLogEntry, LogEntry, SleepPreferences};
use wellday_core::time::{ClockTime, MINUTES_PER_DAY};

/// Warning emitted when there is nothing to analyze
pub const NO_MEALS_WARNING: &str = "No meals logged yet";

/// Bedtimes earlier than this hour are treated as after midnight
const NEXT_DAY_SLEEP_BEFORE_HOUR: u32 = 12;

/// Timing facts derived from one food log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealTimingPoint {
    /// Source log id
    pub log_id: Uuid,
    /// Food name
    pub name: String,
    /// Local calendar date
    pub date: NaiveDate,
    /// Local clock time
    pub time: ClockTime,
    /// Eaten at or after the late-meal hour
    pub is_late: bool,
    /// Tagged or named as caffeinated
    pub is_caffeine: bool,
    /// Protein or fat above the heavy-meal thresholds
    pub is_heavy: bool,
}

/// Digestive buffer band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DigestiveBufferStatus {
    /// Buffer >= 240 min
    Optimal,
    /// Buffer >= 180 min
    Good,
    /// Buffer >= 120 min
    Fair,
    /// Buffer >= 60 min
    Poor,
    /// Buffer < 60 min, including meals after bedtime
    Critical,
}

/// Direction of daily last-meal times over the analysis window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealTimingTrend {
    /// Last meals are moving earlier
    Improving,
    /// No meaningful shift
    Stable,
    /// Last meals are moving later
    Declining,
}

/// Multi-day summary of last-meal times
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyMealPattern {
    /// Distinct local dates in the window
    pub days_analyzed: usize,
    /// Mean of the daily last-meal times
    pub average_last_meal_time: ClockTime,
    /// Same mean in minutes after midnight
    pub average_last_meal_minutes: f64,
    /// Days whose last meal was at or after the late-meal hour
    pub days_with_late_meals: usize,
    /// 100 minus half the standard deviation of daily last-meal minutes, floored at 0
    pub consistency_score: f64,
    /// Present once enough distinct days are available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement_trend: Option<MealTimingTrend>,
}

/// Result of a circadian meal timing analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircadianAnalysis {
    /// Local date analyzed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Meals on that date
    pub meal_count: usize,
    /// Earliest meal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_meal_time: Option<ClockTime>,
    /// Latest meal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_meal_time: Option<ClockTime>,
    /// Hours from first to last meal
    pub eating_window_hours: f64,
    /// Minutes from last meal to target bedtime; negative if after it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_meal_minutes_before_sleep: Option<i64>,
    /// Hours from last meal to the next target wake time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overnight_fast_hours: Option<f64>,
    /// Buffer band
    pub digestive_buffer_status: DigestiveBufferStatus,
    /// Buffer meets the user's own desired buffer
    pub meets_desired_buffer: bool,
    /// 0-100
    pub sleep_readiness_score: u8,
    /// Last meal before the early-eater hour
    pub is_early_eater: bool,
    /// Last meal at or after the late-meal hour
    pub is_late_eater: bool,
    /// Caffeine inside the cutoff window
    pub caffeine_issues: bool,
    /// Latest caffeinated item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_caffeine_time: Option<ClockTime>,
    /// Advisory warnings
    pub warnings: Vec<String>,
    /// Advisory recommendations
    pub recommendations: Vec<String>,
    /// Multi-day pattern when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_pattern: Option<WeeklyMealPattern>,
}

impl CircadianAnalysis {
    /// Neutral result for an empty log set
    #[must_use]
    pub fn no_meals() -> Self {
        Self {
            date: None,
            meal_count: 0,
            first_meal_time: None,
            last_meal_time: None,
            eating_window_hours: 0.0,
            last_meal_minutes_before_sleep: None,
            overnight_fast_hours: None,
            digestive_buffer_status: DigestiveBufferStatus::Optimal,
            meets_desired_buffer: true,
            sleep_readiness_score: 100,
            is_early_eater: false,
            is_late_eater: false,
            caffeine_issues: false,
            last_caffeine_time: None,
            warnings: vec![NO_MEALS_WARNING.to_owned()],
            recommendations: Vec::new(),
            weekly_pattern: None,
        }
    }
}

/// Circadian meal timing analyzer
pub struct MealTimingAnalyzer;

impl MealTimingAnalyzer {
    /// Derive timing facts for each log
    #[must_use]
    pub fn extract_meal_timings(
        logs: &[FoodLogEntry],
        config: &CircadianConfig,
    ) -> Vec<MealTimingPoint> {
        logs.iter()
            .map(|log| {
                let time = ClockTime::of(&log.timestamp);
                MealTimingPoint {
                    log_id: log.id,
                    name: log.name.clone(),
                    date: log.local_date(),
                    time,
                    is_late: time.hour >= config.late_meal_hour,
                    is_caffeine: is_caffeinated(log),
                    is_heavy: log.total_protein_g() > config.heavy_meal_protein_g
                        || log.total_fat_g() > config.heavy_meal_fat_g,
                }
            })
            .collect()
    }

    /// Minutes from `meal` to `sleep`, negative when the meal is after bedtime
    ///
    /// A bedtime before noon is placed on the following day only for meals
    /// eaten from noon onward. A meal that is itself after midnight shares
    /// the bedtime's day, so a 00:45 snack before a 01:30 bedtime is 45.
    #[must_use]
    pub fn minutes_before_sleep(meal: ClockTime, sleep: ClockTime) -> i64 {
        let mut sleep_minutes = i64::from(sleep.minutes_of_day());
        if sleep.hour < NEXT_DAY_SLEEP_BEFORE_HOUR && meal.hour >= NEXT_DAY_SLEEP_BEFORE_HOUR {
            sleep_minutes += i64::from(MINUTES_PER_DAY);
        }
        sleep_minutes - i64::from(meal.minutes_of_day())
    }

    /// Band a digestive buffer
    #[must_use]
    pub const fn classify_buffer(minutes: i64, config: &CircadianConfig) -> DigestiveBufferStatus {
        let b = &config.buffer;
        if minutes >= b.optimal_minutes {
            DigestiveBufferStatus::Optimal
        } else if minutes >= b.good_minutes {
            DigestiveBufferStatus::Good
        } else if minutes >= b.fair_minutes {
            DigestiveBufferStatus::Fair
        } else if minutes >= b.poor_minutes {
            DigestiveBufferStatus::Poor
        } else {
            DigestiveBufferStatus::Critical
        }
    }

    /// Linear ramp to the optimal buffer, truncated and clamped to 0-100
    #[must_use]
    pub fn sleep_readiness_score(minutes: i64, config: &CircadianConfig) -> u8 {
        let optimal = config.buffer.optimal_minutes.max(1);
        (minutes.saturating_mul(100).div_euclid(optimal)).clamp(0, 100) as u8
    }

    /// Score the meals of the most recent local date against the sleep target
    ///
    /// Logs from earlier dates are ignored; pass them to
    /// [`Self::analyze_weekly_pattern`] for multi-day analysis.
    #[must_use]
    pub fn analyze_day(
        logs: &[FoodLogEntry],
        prefs: &SleepPreferences,
        config: &CircadianConfig,
    ) -> CircadianAnalysis {
        let Some(date) = logs.iter().map(LogEntry::local_date).max() else {
            return CircadianAnalysis::no_meals();
        };
        let day_logs: Vec<FoodLogEntry> = logs
            .iter()
            .filter(|log| log.local_date() == date)
            .cloned()
            .collect();
        let discarded = logs.len() - day_logs.len();
        if discarded > 0 {
            warn!(
                %date,
                discarded,
                "Single-day analysis received logs from earlier dates; ignoring them"
            );
        }

        let mut points = Self::extract_meal_timings(&day_logs, config);
        points.sort_by_key(|p| p.time);
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return CircadianAnalysis::no_meals();
        };

        let sleep = prefs.sleep_clock();
        let wake = prefs.wake_clock();
        let buffer = Self::minutes_before_sleep(last.time, sleep);
        let status = Self::classify_buffer(buffer, config);
        let score = Self::sleep_readiness_score(buffer, config);
        let window_hours =
            f64::from(last.time.minutes_of_day() - first.time.minutes_of_day()) / 60.0;
        let fast_minutes = (i64::from(wake.minutes_of_day()) - i64::from(last.time.minutes_of_day()))
            .rem_euclid(i64::from(MINUTES_PER_DAY));

        let last_caffeine = points.iter().filter(|p| p.is_caffeine).map(|p| p.time).max();
        let caffeine_issues = last_caffeine.is_some_and(|t| {
            Self::minutes_before_sleep(t, sleep) < config.caffeine_cutoff_minutes
        });
        let heavy_late = points.iter().find(|p| {
            p.is_heavy && Self::minutes_before_sleep(p.time, sleep) < config.heavy_meal_window_minutes
        });

        let mut analysis = CircadianAnalysis {
            date: Some(date),
            meal_count: points.len(),
            first_meal_time: Some(first.time),
            last_meal_time: Some(last.time),
            eating_window_hours: window_hours,
            last_meal_minutes_before_sleep: Some(buffer),
            overnight_fast_hours: Some(fast_minutes as f64 / 60.0),
            digestive_buffer_status: status,
            meets_desired_buffer: buffer >= i64::from(prefs.desired_digestive_buffer_minutes),
            sleep_readiness_score: score,
            is_early_eater: last.time.hour < config.early_eater_hour,
            is_late_eater: last.time.hour >= config.late_meal_hour,
            caffeine_issues,
            last_caffeine_time: last_caffeine,
            warnings: Vec::new(),
            recommendations: Vec::new(),
            weekly_pattern: None,
        };
        Self::add_advice(&mut analysis, heavy_late, prefs, config);

        debug!(
            %date,
            buffer,
            score,
            ?status,
            warnings = analysis.warnings.len(),
            "Analyzed meal timing"
        );
        analysis
    }

    // Order matters: buffer, heavy meal, caffeine, eating window, late eater
    fn add_advice(
        analysis: &mut CircadianAnalysis,
        heavy_late: Option<&MealTimingPoint>,
        prefs: &SleepPreferences,
        config: &CircadianConfig,
    ) {
        let sleep = prefs.sleep_clock();
        let sleep_minutes = i64::from(sleep.minutes_of_day());

        if let Some(buffer) = analysis.last_meal_minutes_before_sleep {
            if matches!(
                analysis.digestive_buffer_status,
                DigestiveBufferStatus::Poor | DigestiveBufferStatus::Critical
            ) {
                if buffer >= 0 {
                    analysis.warnings.push(format!(
                        "Last meal was only {buffer} minutes before sleep; digestion may disturb your rest"
                    ));
                } else {
                    analysis.warnings.push(format!(
                        "Last meal was {} minutes after your target bedtime, leaving no digestion time before sleep",
                        -buffer
                    ));
                }
                let cutoff =
                    clock_before(sleep_minutes, i64::from(prefs.desired_digestive_buffer_minutes));
                analysis.recommendations.push(format!(
                    "Finish eating by {cutoff} to leave {} minutes before bed",
                    prefs.desired_digestive_buffer_minutes
                ));
            }
        }

        if let Some(heavy) = heavy_late {
            analysis.warnings.push(format!(
                "Heavy meal ({}) within {} hours of sleep",
                heavy.name,
                config.heavy_meal_window_minutes / 60
            ));
            analysis.recommendations.push(
                "Keep evening meals light and move protein- or fat-rich dishes earlier".to_owned(),
            );
        }

        if analysis.caffeine_issues {
            if let Some(time) = analysis.last_caffeine_time {
                analysis.warnings.push(format!(
                    "Caffeine at {time} is within {} hours of your bedtime",
                    config.caffeine_cutoff_minutes / 60
                ));
            }
            let cutoff = clock_before(sleep_minutes, config.caffeine_cutoff_minutes);
            analysis
                .recommendations
                .push(format!("Have your last caffeinated drink before {cutoff}"));
        }

        if analysis.eating_window_hours > config.max_eating_window_hours {
            analysis.warnings.push(format!(
                "Eating window of {:.1} hours is longer than {} hours",
                analysis.eating_window_hours, config.max_eating_window_hours
            ));
            analysis.recommendations.push(
                "Try fitting meals into a 10-12 hour window to support your circadian rhythm"
                    .to_owned(),
            );
        }

        if analysis.is_late_eater {
            if let Some(last) = analysis.last_meal_time {
                analysis.warnings.push(format!(
                    "Last meal at {last} is after {:02}:00",
                    config.late_meal_hour
                ));
            }
            analysis
                .recommendations
                .push("Shift dinner earlier in the evening to align with your body clock".to_owned());
        }
    }

    /// Summarize daily last-meal times over the most recent logs
    ///
    /// Uses the newest `weekly_log_limit` logs, grouped by local date.
    /// Returns `None` for an empty log set.
    #[must_use]
    pub fn analyze_weekly_pattern(
        logs: &[FoodLogEntry],
        config: &CircadianConfig,
    ) -> Option<WeeklyMealPattern> {
        let mut recent: Vec<&FoodLogEntry> = logs.iter().collect();
        recent.sort_by_key(|log| Reverse(log.timestamp));
        recent.truncate(config.weekly_log_limit);

        let mut last_by_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for log in recent {
            let minutes = ClockTime::of(&log.timestamp).minutes_of_day();
            last_by_day
                .entry(log.local_date())
                .and_modify(|m| *m = (*m).max(minutes))
                .or_insert(minutes);
        }
        if last_by_day.is_empty() {
            return None;
        }

        let daily: Vec<f64> = last_by_day.values().map(|m| f64::from(*m)).collect();
        let average = mean(&daily);
        let variance = daily.iter().map(|m| (m - average).powi(2)).sum::<f64>() / daily.len() as f64;
        let consistency = (100.0 - variance.sqrt() / 2.0).max(0.0);
        let late_minutes = config.late_meal_minutes();
        let days_with_late_meals = last_by_day.values().filter(|m| **m >= late_minutes).count();

        let improvement_trend = (daily.len() >= config.trend_min_days).then(|| {
            let (earlier, later) = daily.split_at(daily.len() / 2);
            let shift = mean(later) - mean(earlier);
            if shift <= -config.trend_shift_minutes {
                MealTimingTrend::Improving
            } else if shift >= config.trend_shift_minutes {
                MealTimingTrend::Declining
            } else {
                MealTimingTrend::Stable
            }
        });

        Some(WeeklyMealPattern {
            days_analyzed: daily.len(),
            average_last_meal_time: ClockTime::from_minutes(average.round() as u32),
            average_last_meal_minutes: average,
            days_with_late_meals,
            consistency_score: (consistency * 10.0).round() / 10.0,
            improvement_trend,
        })
    }

    /// Single-day analysis of the latest date plus the multi-day pattern
    #[must_use]
    pub fn analyze_circadian_pattern(
        logs: &[FoodLogEntry],
        prefs: &SleepPreferences,
        config: &CircadianConfig,
    ) -> CircadianAnalysis {
        let mut analysis = Self::analyze_day(logs, prefs, config);
        analysis.weekly_pattern = Self::analyze_weekly_pattern(logs, config);
        analysis
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn clock_before(minutes: i64, offset: i64) -> ClockTime {
    ClockTime::from_minutes((minutes - offset).rem_euclid(i64::from(MINUTES_PER_DAY)) as u32)
}

/// Tagged "caffeine", or named with a coffee or tea word
fn is_caffeinated(log: &FoodLogEntry) -> bool {
    if log.has_tag("caffeine") {
        return true;
    }
    log.name
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word.contains("coffee") || word == "tea" || word == "teas")
}
