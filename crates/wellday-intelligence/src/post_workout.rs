// ABOUTME: Post-workout recovery nutrition: session classification, recovery meal sizing, meal suggestions
// ABOUTME: Also reports how protein is spread across breakfast, lunch, and dinner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Post-Workout Advisor
//!
//! # Scientific References
//!
//! - Kerksick, C.M., et al. (2017). International society of sports nutrition position
//!   stand: nutrient timing. *J Int Soc Sports Nutr*, 14, 33.
//!   <https://doi.org/10.1186/s12970-017-0189-4>
//!
//! - Schoenfeld, B.J., & Aragon, A.A. (2018). How much protein can the body use in a
//!   single meal for muscle-building? *J Int Soc Sports Nutr*, 15, 10.
//!   <https://doi.org/10.1186/s12970-018-0215-1>

use crate::config::intelligence::PostWorkoutConfig;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use wellday_core::models::{
    ExerciseIntensity, ExerciseLogEntry, FoodLogEntry, LogEntry, MealType,
};

/// Exercise category used for recovery advice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    /// Resistance training
    Strength,
    /// Endurance training
    Cardio,
    /// Anything else
    General,
}

/// How soon the recovery meal should be eaten
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecoveryTiming {
    /// Within 30 minutes
    #[serde(rename = "within-30min")]
    Within30Min,
    /// Within 2 hours
    #[serde(rename = "within-2hours")]
    Within2Hours,
    /// At the next regular meal
    #[serde(rename = "next-meal")]
    NextMeal,
}

/// Nutrition needs derived from one exercise session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutNutritionInsight {
    /// Source exercise log id
    pub exercise_id: Uuid,
    /// Activity name
    pub activity_name: String,
    /// Exercise category
    pub exercise_type: ExerciseCategory,
    /// Recovery nutrition is warranted
    pub needs_recovery: bool,
    /// Extra protein for muscle repair
    pub protein_boost: bool,
    /// Extra carbohydrate for glycogen
    pub carb_repletion: bool,
    /// Sodium and potassium replacement
    pub electrolytes: bool,
    /// Meal timing
    pub timing: RecoveryTiming,
}

/// Recovery meal recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostWorkoutRecommendation {
    /// Needs the recommendation was built from
    pub insight: WorkoutNutritionInsight,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrate (g)
    pub carbs_g: f64,
    /// Approximate energy (kcal)
    pub calories: u32,
    /// Example foods for this kind of session
    pub suggested_foods: Vec<String>,
    /// Fluid guidance
    pub hydration: String,
}

/// Protein split across meal slots for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealProteinDistribution {
    /// Breakfast protein (g)
    pub breakfast_g: f64,
    /// Lunch protein (g)
    pub lunch_g: f64,
    /// Dinner protein (g)
    pub dinner_g: f64,
    /// Snack protein (g)
    pub snacks_g: f64,
    /// All protein (g)
    pub total_g: f64,
    /// Main meals are evenly loaded and no rule fired
    ///
    /// Needs protein at two or more of breakfast, lunch, and dinner, with
    /// their max-min spread under `max_spread_ratio` of the day's total
    /// (snacks included). Always false when `recommendation` is set, and
    /// false for a day with no main-meal protein.
    pub is_well_distributed: bool,
    /// First matching advice, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

const STRENGTH_FOODS: [&str; 4] = [
    "Greek yogurt with berries",
    "Protein shake with a banana",
    "Chicken breast with rice",
    "Cottage cheese with fruit",
];

const CARDIO_FOODS: [&str; 4] = [
    "Banana with peanut butter",
    "Chocolate milk",
    "Oatmeal with honey and whey",
    "Whole grain bagel with eggs",
];

const GENERAL_FOODS: [&str; 3] = [
    "Turkey sandwich on whole grain bread",
    "Trail mix with dried fruit",
    "Hummus with whole wheat pita",
];

/// Post-workout nutrition advisor
pub struct PostWorkoutAdvisor;

impl PostWorkoutAdvisor {
    /// Classify by activity name; strength keywords win over cardio
    #[must_use]
    pub fn classify_exercise(activity_name: &str, config: &PostWorkoutConfig) -> ExerciseCategory {
        let name = activity_name.to_lowercase();
        let matches = |keywords: &[String]| keywords.iter().any(|k| name.contains(k.as_str()));
        if matches(&config.strength_keywords) {
            ExerciseCategory::Strength
        } else if matches(&config.cardio_keywords) {
            ExerciseCategory::Cardio
        } else {
            ExerciseCategory::General
        }
    }

    /// Derive recovery needs for one session
    #[must_use]
    pub fn analyze_workout_nutrition_needs(
        exercise: &ExerciseLogEntry,
        config: &PostWorkoutConfig,
    ) -> WorkoutNutritionInsight {
        let exercise_type = Self::classify_exercise(&exercise.activity.name, config);
        let is_strength = exercise_type == ExerciseCategory::Strength;
        let is_cardio = exercise_type == ExerciseCategory::Cardio;
        let duration = exercise.duration_minutes;
        let calories = exercise.calories_burned;

        let timing = if is_strength || exercise.intensity == ExerciseIntensity::High {
            RecoveryTiming::Within30Min
        } else if calories > config.prompt_meal_calories {
            RecoveryTiming::Within2Hours
        } else {
            RecoveryTiming::NextMeal
        };

        WorkoutNutritionInsight {
            exercise_id: exercise.id,
            activity_name: exercise.activity.name.clone(),
            exercise_type,
            needs_recovery: is_strength
                || calories > config.recovery_calories
                || duration > config.recovery_duration_minutes,
            protein_boost: is_strength,
            carb_repletion: is_cardio && duration > config.carb_repletion_duration_minutes,
            electrolytes: is_cardio && duration > config.electrolyte_duration_minutes,
            timing,
        }
    }

    /// Size a recovery meal for the given needs
    #[must_use]
    pub fn generate_post_workout_recommendation(
        insight: WorkoutNutritionInsight,
        config: &PostWorkoutConfig,
    ) -> PostWorkoutRecommendation {
        let meal = &config.meal;
        let protein_g = if insight.protein_boost {
            meal.boosted_protein_g
        } else {
            meal.base_protein_g
        };
        let carbs_g = if insight.carb_repletion {
            meal.repletion_carbs_g
        } else {
            meal.base_carbs_g
        };
        let calories = (protein_g * 4.0 + carbs_g * 4.0 + meal.overhead_kcal).round() as u32;

        let foods: &[&str] = match insight.exercise_type {
            ExerciseCategory::Strength => &STRENGTH_FOODS,
            ExerciseCategory::Cardio => &CARDIO_FOODS,
            ExerciseCategory::General => &GENERAL_FOODS,
        };

        let mut hydration = "Drink 500-750 mL of water over the next hour".to_owned();
        if insight.electrolytes {
            hydration.push_str(", with electrolytes (sodium and potassium) to replace sweat losses");
        }

        PostWorkoutRecommendation {
            insight,
            protein_g,
            carbs_g,
            calories,
            suggested_foods: foods.iter().map(|f| (*f).to_owned()).collect(),
            hydration,
        }
    }

    /// Recovery meal for the most recent session today, if it ended within the window
    ///
    /// "Today" is `now`'s calendar date in the session's own offset. Sessions
    /// logged after `now` are ignored.
    #[must_use]
    pub fn get_post_workout_meal_suggestions(
        exercises: &[ExerciseLogEntry],
        now: DateTime<FixedOffset>,
        config: &PostWorkoutConfig,
    ) -> Option<PostWorkoutRecommendation> {
        let latest = exercises
            .iter()
            .filter(|e| e.timestamp <= now)
            .filter(|e| now.with_timezone(e.timestamp.offset()).date_naive() == e.local_date())
            .max_by_key(|e| e.timestamp)?;

        let elapsed = (now - latest.timestamp).num_minutes();
        if elapsed > config.suggestion_window_minutes {
            debug!(
                exercise_id = %latest.id,
                elapsed,
                "Most recent exercise is outside the recovery window"
            );
            return None;
        }

        let insight = Self::analyze_workout_nutrition_needs(latest, config);
        Some(Self::generate_post_workout_recommendation(insight, config))
    }

    /// Sum quantity-scaled protein per meal slot and check the spread
    #[must_use]
    pub fn analyze_protein_distribution(
        food_logs: &[FoodLogEntry],
        config: &PostWorkoutConfig,
    ) -> MealProteinDistribution {
        let rules = &config.protein_distribution;
        let (mut breakfast, mut lunch, mut dinner, mut snacks) = (0.0, 0.0, 0.0, 0.0);
        for log in food_logs {
            let protein = log.total_protein_g();
            match log.meal_type {
                MealType::Breakfast => breakfast += protein,
                MealType::Lunch => lunch += protein,
                MealType::Dinner => dinner += protein,
                MealType::Snack => snacks += protein,
            }
        }
        let total = breakfast + lunch + dinner + snacks;

        let recommendation = if breakfast < rules.breakfast_min_g {
            Some(format!(
                "Boost breakfast protein: {breakfast:.0} g is below {:.0} g. Eggs or Greek yogurt are easy additions",
                rules.breakfast_min_g
            ))
        } else if lunch < rules.lunch_min_g {
            Some(format!(
                "Boost lunch protein: {lunch:.0} g is below {:.0} g. Add lean meat, fish, or legumes",
                rules.lunch_min_g
            ))
        } else if total > 0.0 && dinner / total > rules.dinner_max_share {
            Some(format!(
                "Dinner carries {:.0}% of your protein; move some of it to breakfast and lunch",
                dinner / total * 100.0
            ))
        } else {
            None
        };

        let main: Vec<f64> = [breakfast, lunch, dinner]
            .into_iter()
            .filter(|g| *g > 0.0)
            .collect();
        let evenly_loaded = main.len() >= 2 && {
            let max = main.iter().copied().fold(f64::MIN, f64::max);
            let min = main.iter().copied().fold(f64::MAX, f64::min);
            (max - min) / total < rules.max_spread_ratio
        };

        MealProteinDistribution {
            breakfast_g: breakfast,
            lunch_g: lunch,
            dinner_g: dinner,
            snacks_g: snacks,
            total_g: total,
            is_well_distributed: evenly_loaded && recommendation.is_none(),
            recommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use wellday_core::models::{ActivityRef, NutrientSnapshot};

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-03-01T18:00:00-05:00").unwrap()
    }

    fn session(name: &str, minutes: f64, kcal: f64, ago: Duration) -> ExerciseLogEntry {
        ExerciseLogEntry::new(
            ActivityRef {
                id: name.to_lowercase(),
                name: name.to_owned(),
                met: 5.0,
            },
            minutes,
            kcal,
            ExerciseIntensity::Moderate,
            now() - ago,
        )
        .unwrap()
    }

    fn food(meal_type: MealType, protein_g: f64) -> FoodLogEntry {
        FoodLogEntry::new(
            "f",
            "Food",
            NutrientSnapshot {
                protein_g,
                ..NutrientSnapshot::default()
            },
            1.0,
            now(),
            meal_type,
        )
        .unwrap()
    }

    #[test]
    fn test_running_session_within_window() {
        let config = PostWorkoutConfig::default();
        let run = session("Running (Jogging, 5 mph)", 50.0, 300.0, Duration::hours(1));
        let rec =
            PostWorkoutAdvisor::get_post_workout_meal_suggestions(&[run], now(), &config).unwrap();
        assert_eq!(rec.insight.exercise_type, ExerciseCategory::Cardio);
        assert!(rec.insight.carb_repletion);
        assert!(!rec.insight.electrolytes);
        assert_eq!(rec.insight.timing, RecoveryTiming::Within2Hours);
        assert!((rec.protein_g - 15.0).abs() < f64::EPSILON);
        assert!((rec.carbs_g - 40.0).abs() < f64::EPSILON);
        assert_eq!(rec.calories, 270);
        assert_eq!(rec.suggested_foods[1], "Chocolate milk");
    }

    #[test]
    fn test_session_four_hours_ago_gets_nothing() {
        let config = PostWorkoutConfig::default();
        let run = session("Running (Jogging, 5 mph)", 50.0, 300.0, Duration::hours(4));
        assert!(PostWorkoutAdvisor::get_post_workout_meal_suggestions(&[run], now(), &config).is_none());
    }

    #[test]
    fn test_only_latest_session_today_counts() {
        let config = PostWorkoutConfig::default();
        let old = session("Weight lifting", 30.0, 150.0, Duration::hours(5));
        let recent = session("Yoga", 30.0, 100.0, Duration::minutes(20));
        let rec = PostWorkoutAdvisor::get_post_workout_meal_suggestions(&[old, recent], now(), &config)
            .unwrap();
        assert_eq!(rec.insight.exercise_type, ExerciseCategory::General);
        assert_eq!(rec.insight.timing, RecoveryTiming::NextMeal);
        assert!(!rec.insight.needs_recovery);
    }

    #[test]
    fn test_strength_wins_over_cardio_keywords() {
        let config = PostWorkoutConfig::default();
        assert_eq!(
            PostWorkoutAdvisor::classify_exercise("Weighted walking lunges", &config),
            ExerciseCategory::Strength
        );
        assert_eq!(
            PostWorkoutAdvisor::classify_exercise("Stationary bike", &config),
            ExerciseCategory::Cardio
        );
    }

    #[test]
    fn test_long_cardio_needs_electrolytes() {
        let config = PostWorkoutConfig::default();
        let swim = session("Swimming laps", 75.0, 550.0, Duration::minutes(10));
        let insight = PostWorkoutAdvisor::analyze_workout_nutrition_needs(&swim, &config);
        assert!(insight.needs_recovery && insight.electrolytes && insight.carb_repletion);
        let rec = PostWorkoutAdvisor::generate_post_workout_recommendation(insight, &config);
        assert!(rec.hydration.contains("electrolytes"));
    }

    #[test]
    fn test_strength_gets_protein_boost_and_fast_timing() {
        let config = PostWorkoutConfig::default();
        let lift = session("Strength training", 40.0, 180.0, Duration::minutes(5));
        let insight = PostWorkoutAdvisor::analyze_workout_nutrition_needs(&lift, &config);
        assert_eq!(insight.timing, RecoveryTiming::Within30Min);
        let rec = PostWorkoutAdvisor::generate_post_workout_recommendation(insight, &config);
        assert!((rec.protein_g - 25.0).abs() < f64::EPSILON);
        assert_eq!(rec.calories, 230);
    }

    #[test]
    fn test_timing_serializes_with_hyphens() {
        let json = serde_json::to_string(&RecoveryTiming::Within30Min).unwrap();
        assert_eq!(json, "\"within-30min\"");
    }

    #[test]
    fn test_low_breakfast_protein_is_flagged() {
        let config = PostWorkoutConfig::default();
        let logs = vec![
            food(MealType::Breakfast, 10.0),
            food(MealType::Lunch, 30.0),
            food(MealType::Dinner, 30.0),
        ];
        let dist = PostWorkoutAdvisor::analyze_protein_distribution(&logs, &config);
        assert!(!dist.is_well_distributed);
        assert!(dist.recommendation.unwrap().starts_with("Boost breakfast protein"));
    }

    #[test]
    fn test_dinner_heavy_day_is_redistributed() {
        let config = PostWorkoutConfig::default();
        let logs = vec![
            food(MealType::Breakfast, 20.0),
            food(MealType::Lunch, 25.0),
            food(MealType::Dinner, 80.0),
        ];
        let dist = PostWorkoutAdvisor::analyze_protein_distribution(&logs, &config);
        assert!(dist.recommendation.unwrap().starts_with("Dinner carries 64%"));
    }

    #[test]
    fn test_wide_spread_without_advice_is_not_well_distributed() {
        let config = PostWorkoutConfig::default();
        let logs = vec![
            food(MealType::Breakfast, 16.0),
            food(MealType::Lunch, 21.0),
            food(MealType::Dinner, 55.0),
        ];
        let dist = PostWorkoutAdvisor::analyze_protein_distribution(&logs, &config);
        assert!(dist.recommendation.is_none());
        assert!(!dist.is_well_distributed);
    }

    #[test]
    fn test_single_main_meal_is_not_well_distributed() {
        let mut config = PostWorkoutConfig::default();
        config.protein_distribution.breakfast_min_g = 0.0;
        config.protein_distribution.lunch_min_g = 0.0;
        config.protein_distribution.dinner_max_share = 1.0;
        let logs = vec![food(MealType::Dinner, 40.0)];
        let dist = PostWorkoutAdvisor::analyze_protein_distribution(&logs, &config);
        assert!(dist.recommendation.is_none());
        assert!(!dist.is_well_distributed);
    }

    #[test]
    fn test_even_day_is_well_distributed() {
        let config = PostWorkoutConfig::default();
        let logs = vec![
            food(MealType::Breakfast, 30.0),
            food(MealType::Lunch, 35.0),
            food(MealType::Dinner, 40.0),
            food(MealType::Snack, 10.0),
        ];
        let dist = PostWorkoutAdvisor::analyze_protein_distribution(&logs, &config);
        assert!(dist.is_well_distributed);
        assert!(dist.recommendation.is_none());
        assert!((dist.total_g - 115.0).abs() < f64::EPSILON);
    }
}
