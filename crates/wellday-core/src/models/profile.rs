// ABOUTME: User profile models for body metrics, activity, lifestyle, and dietary pattern
// ABOUTME: Profiles are immutable snapshots; missing fields mean "not yet provided"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use crate::errors::{AppError, AppResult};
use crate::units::{to_cm, to_kg, HeightUnit, WeightUnit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Age at which a user is treated as elderly even without the explicit condition
pub const ELDERLY_AGE: u32 = 65;

/// Maximum accepted age in years
pub const MAX_AGE: u32 = 150;

/// Biological sex used by BMR and nutrient baselines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or prefer not to say
    Other,
}

/// Body weight as entered by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weight {
    /// Numeric value
    pub value: f64,
    /// Unit of `value`
    #[serde(default)]
    pub unit: WeightUnit,
}

impl Weight {
    /// Weight in kilograms
    #[must_use]
    pub const fn kg(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Kg,
        }
    }

    /// Weight in pounds
    #[must_use]
    pub const fn lbs(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Lbs,
        }
    }

    /// Normalized to kilograms
    #[must_use]
    pub fn in_kg(&self) -> f64 {
        to_kg(self.value, self.unit)
    }
}

/// Height as entered by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Height {
    /// Numeric value
    pub value: f64,
    /// Unit of `value`
    #[serde(default)]
    pub unit: HeightUnit,
}

impl Height {
    /// Height in centimeters
    #[must_use]
    pub const fn cm(value: f64) -> Self {
        Self {
            value,
            unit: HeightUnit::Cm,
        }
    }

    /// Height in inches
    #[must_use]
    pub const fn inches(value: f64) -> Self {
        Self {
            value,
            unit: HeightUnit::Inches,
        }
    }

    /// Normalized to centimeters
    #[must_use]
    pub fn in_cm(&self) -> f64 {
        to_cm(self.value, self.unit)
    }
}

/// Physical profile snapshot
///
/// Every field is optional because the profile is filled in progressively.
/// Calculations that need a field return "unavailable" until it is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PhysicalProfile {
    /// Body weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    /// Height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
    /// Age in whole years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Biological sex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<BiologicalSex>,
}

/// Fully specified body measurements in metric units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyMeasurements {
    /// Weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years)
    pub age: u32,
    /// Biological sex
    pub sex: BiologicalSex,
}

impl PhysicalProfile {
    /// Complete profile from metric values
    #[must_use]
    pub const fn metric(weight_kg: f64, height_cm: f64, age: u32, sex: BiologicalSex) -> Self {
        Self {
            weight: Some(Weight::kg(weight_kg)),
            height: Some(Height::cm(height_cm)),
            age: Some(age),
            sex: Some(sex),
        }
    }

    /// Metric measurements when weight, height, age, and sex are all present
    #[must_use]
    pub fn measurements(&self) -> Option<BodyMeasurements> {
        Some(BodyMeasurements {
            weight_kg: self.weight?.in_kg(),
            height_cm: self.height?.in_cm(),
            age: self.age?,
            sex: self.sex?,
        })
    }

    /// Weight in kilograms if present
    #[must_use]
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.map(|w| w.in_kg())
    }

    /// Check the profile invariants: weight > 0, height > 0, age in [0, 150]
    ///
    /// Absent fields are not an error here; only present values are checked.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for the first present field that violates its bound
    pub fn validate(&self) -> AppResult<()> {
        if let Some(weight) = self.weight {
            if !(weight.value.is_finite() && weight.value > 0.0) {
                return Err(AppError::out_of_range("Weight must be a positive number")
                    .with_resource_id("weight"));
            }
        }
        if let Some(height) = self.height {
            if !(height.value.is_finite() && height.value > 0.0) {
                return Err(AppError::out_of_range("Height must be a positive number")
                    .with_resource_id("height"));
            }
        }
        if let Some(age) = self.age {
            if age > MAX_AGE {
                return Err(
                    AppError::out_of_range(format!("Age must be between 0 and {MAX_AGE}"))
                        .with_resource_id("age"),
                );
            }
        }
        Ok(())
    }
}

/// Ordinal activity tiers used for TDEE multipliers and nutrient adjustments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or physical job
    #[serde(alias = "extra-active")]
    ExtremelyActive,
}

impl ActivityLevel {
    /// Very or extremely active
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::VeryActive | Self::ExtremelyActive)
    }
}

/// Fitness or health goal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Keep current weight
    #[default]
    #[serde(alias = "maintenance")]
    Maintain,
    /// Lose body weight
    #[serde(alias = "weight-loss")]
    LoseWeight,
    /// Build muscle mass
    #[serde(alias = "muscle-gain")]
    GainMuscle,
    /// Gain body weight
    #[serde(alias = "weight-gain")]
    GainWeight,
    /// General health and fitness
    GeneralFitness,
    /// Sport performance
    AthleticPerformance,
}

/// Activity tier plus goal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityProfile {
    /// Activity tier; absent until the user picks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Goal; treated as `maintain` when absent
    #[serde(default, alias = "health_goal")]
    pub fitness_goal: FitnessGoal,
}

impl ActivityProfile {
    /// Profile with the given tier and goal
    #[must_use]
    pub const fn new(activity_level: ActivityLevel, fitness_goal: FitnessGoal) -> Self {
        Self {
            activity_level: Some(activity_level),
            fitness_goal,
        }
    }
}

/// How often alcohol is consumed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum AlcoholFrequency {
    /// Never
    #[default]
    Never,
    /// A few times a month or less
    Occasional,
    /// Weekly
    Weekly,
    /// Daily
    Daily,
}

/// Smoking status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum SmokingStatus {
    /// Never smoked
    #[default]
    Never,
    /// Quit
    Former,
    /// Currently smokes
    Current,
}

/// Lifestyle factors that modulate nutrient targets and advice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LifestyleProfile {
    /// Cups of caffeinated drinks per day
    #[serde(default)]
    pub caffeine_cups_per_day: f64,
    /// Alcohol frequency
    #[serde(default)]
    pub alcohol_frequency: AlcoholFrequency,
    /// Smoking status
    #[serde(default)]
    pub smoking_status: SmokingStatus,
    /// Self-reported stress, 1-10
    #[serde(default = "default_stress_level")]
    pub stress_level: u8,
    /// Free-text medications; advisory only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
}

const fn default_stress_level() -> u8 {
    5
}

impl Default for LifestyleProfile {
    fn default() -> Self {
        Self {
            caffeine_cups_per_day: 0.0,
            alcohol_frequency: AlcoholFrequency::Never,
            smoking_status: SmokingStatus::Never,
            stress_level: default_stress_level(),
            medications: None,
        }
    }
}

/// Life stages that change nutrient requirements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SpecialCondition {
    /// Pregnant
    Pregnancy,
    /// Breastfeeding
    Lactation,
    /// Older adult
    Elderly,
}

/// Dietary pattern
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPattern {
    /// Eats animal products
    #[default]
    Omnivore,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
}

impl DietaryPattern {
    /// Vegetarian or vegan
    #[must_use]
    pub const fn is_plant_based(self) -> bool {
        matches!(self, Self::Vegetarian | Self::Vegan)
    }
}

/// Everything the engines need to know about the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Physical snapshot
    #[serde(default)]
    pub physical: PhysicalProfile,
    /// Activity tier and goal
    #[serde(default)]
    pub activity: ActivityProfile,
    /// Lifestyle factors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<LifestyleProfile>,
    /// Special conditions
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub special_conditions: BTreeSet<SpecialCondition>,
    /// Dietary pattern
    #[serde(default)]
    pub dietary_pattern: DietaryPattern,
}

impl UserProfile {
    /// Whether a special condition applies; elderly is also implied by age
    #[must_use]
    pub fn has_condition(&self, condition: SpecialCondition) -> bool {
        if self.special_conditions.contains(&condition) {
            return true;
        }
        condition == SpecialCondition::Elderly
            && self.physical.age.is_some_and(|age| age >= ELDERLY_AGE)
    }

    /// Replace the physical snapshot, keeping everything else
    #[must_use]
    pub fn with_physical(self, physical: PhysicalProfile) -> Self {
        Self { physical, ..self }
    }
}
