// ABOUTME: Personalized daily nutrient targets from body metrics, activity, goal, and life stage
// ABOUTME: Falls back to the standard label Daily Values when the profile is incomplete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Daily Value Calculator
//!
//! Targets are computed in a fixed order:
//!
//! 1. Calories from the energy model, goal-adjusted when enabled
//! 2. Protein g/kg by activity tier with goal, age, and life-stage floors
//! 3. Fiber at 14 g per 1000 kcal
//! 4. Carb/fat split with fat at a fixed share of calories (optional)
//! 5. Micronutrients: sex/age baseline, then life stage, diet, training load, lifestyle
//! 6. Hydration from body weight plus activity and lactation bonuses
//!
//! A profile missing any of weight, height, age, sex, or activity tier gets
//! the standard reference table instead of an error.

use crate::config::intelligence::{NutritionConfig, ProteinConfig};
use crate::energy::{estimate_energy, EnergyEstimate};
use crate::reference_intakes::{adjustments, baseline, lactation, pregnancy, standard};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wellday_core::models::{
    ActivityLevel, AlcoholFrequency, BiologicalSex, FitnessGoal, SmokingStatus,
    SpecialCondition, UserProfile,
};

/// Caffeine intake above which an advisory note is added (cups/day)
const HIGH_CAFFEINE_CUPS: f64 = 4.0;

/// Where a set of targets came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DailyValueSource {
    /// Computed from the user's profile
    Personalized,
    /// Standard label values; the profile was incomplete
    StandardReference,
}

/// Daily micronutrient targets
///
/// Vitamin A, D, K, folate, B12, selenium, and copper are in micrograms;
/// the rest are in milligrams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MicronutrientTargets {
    /// Vitamin A (µg)
    pub vitamin_a_ug: f64,
    /// Vitamin C (mg)
    pub vitamin_c_mg: f64,
    /// Vitamin D (µg)
    pub vitamin_d_ug: f64,
    /// Vitamin E (mg)
    pub vitamin_e_mg: f64,
    /// Vitamin K (µg)
    pub vitamin_k_ug: f64,
    /// Thiamin, B1 (mg)
    pub thiamin_mg: f64,
    /// Riboflavin, B2 (mg)
    pub riboflavin_mg: f64,
    /// Niacin, B3 (mg)
    pub niacin_mg: f64,
    /// Vitamin B6 (mg)
    pub vitamin_b6_mg: f64,
    /// Folate, B9 (µg)
    pub folate_ug: f64,
    /// Vitamin B12 (µg)
    pub vitamin_b12_ug: f64,
    /// Pantothenic acid, B5 (mg)
    pub pantothenic_acid_mg: f64,
    /// Calcium (mg)
    pub calcium_mg: f64,
    /// Iron (mg)
    pub iron_mg: f64,
    /// Magnesium (mg)
    pub magnesium_mg: f64,
    /// Zinc (mg)
    pub zinc_mg: f64,
    /// Selenium (µg)
    pub selenium_ug: f64,
    /// Copper (µg)
    pub copper_ug: f64,
    /// Manganese (mg)
    pub manganese_mg: f64,
    /// Sodium (mg)
    pub sodium_mg: f64,
    /// Potassium (mg)
    pub potassium_mg: f64,
}

/// Personalized (or standard) daily targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalizedDailyValues {
    /// Whether the targets are personalized
    pub source: DailyValueSource,
    /// Energy target (kcal)
    pub calories: u32,
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrate (g); absent when the macro split is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<u32>,
    /// Fat (g); absent when the macro split is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<u32>,
    /// Fiber (g)
    pub fiber_g: u32,
    /// Water (mL)
    pub hydration_ml: u32,
    /// Micronutrient targets
    pub micronutrients: MicronutrientTargets,
    /// Energy breakdown behind `calories` when personalized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyEstimate>,
    /// Advisory notes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// Compute daily targets for a profile
///
/// Never fails: an incomplete profile yields [`standard_daily_values`].
#[must_use]
pub fn compute_targets(profile: &UserProfile, config: &NutritionConfig) -> PersonalizedDailyValues {
    let (Some(energy), Some(measurements), Some(level)) = (
        estimate_energy(profile, config),
        profile.physical.measurements(),
        profile.activity.activity_level,
    ) else {
        warn!("Profile incomplete, using standard daily values");
        return standard_daily_values(config);
    };

    let dv = &config.daily_values;
    let calories = energy.calorie_target;
    let protein_g = (protein_g_per_kg(profile, level, &config.protein) * measurements.weight_kg)
        .round() as u32;
    let fiber_g = (f64::from(calories) / 1000.0 * dv.fiber_g_per_1000_kcal).round() as u32;

    let (carbs_g, fat_g) = if dv.include_macro_split {
        let (carbs, fat) = macro_split(calories, protein_g, dv.fat_share_of_calories);
        (Some(carbs), Some(fat))
    } else {
        (None, None)
    };

    let mut hydration = measurements.weight_kg * dv.hydration_ml_per_kg;
    if level.is_high() {
        hydration += dv.active_hydration_bonus_ml;
    }
    if profile.has_condition(SpecialCondition::Lactation) {
        hydration += dv.lactation_hydration_bonus_ml;
    }

    let micronutrients = personalized_micronutrients(profile, measurements.sex, measurements.age);

    debug!(calories, protein_g, fiber_g, "Computed personalized daily values");

    PersonalizedDailyValues {
        source: DailyValueSource::Personalized,
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
        hydration_ml: hydration.round() as u32,
        micronutrients,
        energy: Some(energy),
        notes: advisory_notes(profile),
    }
}

/// Standard label Daily Values for a 2000 kcal reference diet
#[must_use]
pub fn standard_daily_values(config: &NutritionConfig) -> PersonalizedDailyValues {
    let include_split = config.daily_values.include_macro_split;
    PersonalizedDailyValues {
        source: DailyValueSource::StandardReference,
        calories: standard::CALORIES,
        protein_g: standard::PROTEIN_G,
        carbs_g: include_split.then_some(standard::CARBS_G),
        fat_g: include_split.then_some(standard::FAT_G),
        fiber_g: standard::FIBER_G,
        hydration_ml: standard::HYDRATION_ML,
        micronutrients: MicronutrientTargets::standard(),
        energy: None,
        notes: vec!["Complete your profile to get personalized targets".to_owned()],
    }
}

/// Protein requirement in g per kg body weight
#[must_use]
pub fn protein_g_per_kg(profile: &UserProfile, level: ActivityLevel, config: &ProteinConfig) -> f64 {
    let mut g_per_kg = match level {
        ActivityLevel::Sedentary => config.sedentary_g_per_kg,
        ActivityLevel::LightlyActive => config.lightly_active_g_per_kg,
        ActivityLevel::ModeratelyActive => config.moderately_active_g_per_kg,
        ActivityLevel::VeryActive | ActivityLevel::ExtremelyActive => {
            config.high_activity_g_per_kg
        }
    };
    if matches!(
        profile.activity.fitness_goal,
        FitnessGoal::GainMuscle | FitnessGoal::AthleticPerformance
    ) {
        g_per_kg = g_per_kg.max(config.muscle_goal_floor_g_per_kg);
    }
    if profile.has_condition(SpecialCondition::Elderly) {
        g_per_kg = g_per_kg.max(config.elderly_floor_g_per_kg);
    }
    if profile.has_condition(SpecialCondition::Pregnancy) {
        g_per_kg += config.pregnancy_extra_g_per_kg;
    }
    if profile.has_condition(SpecialCondition::Lactation) {
        g_per_kg += config.lactation_extra_g_per_kg;
    }
    g_per_kg
}

/// Carb and fat grams with fat fixed at `fat_share` of calories
///
/// Carbs take what protein and fat leave, never below zero.
#[must_use]
pub fn macro_split(calories: u32, protein_g: u32, fat_share: f64) -> (u32, u32) {
    let calories = f64::from(calories);
    let protein_kcal = f64::from(protein_g) * 4.0;
    let fat_kcal = fat_share * calories;
    let carbs_kcal = (calories - protein_kcal - fat_kcal).max(0.0);
    ((carbs_kcal / 4.0).round() as u32, (fat_kcal / 9.0).round() as u32)
}

fn by_sex(values: (f64, f64), sex: BiologicalSex) -> f64 {
    match sex {
        BiologicalSex::Male => values.0,
        BiologicalSex::Female => values.1,
        BiologicalSex::Other => (values.0 + values.1) / 2.0,
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl MicronutrientTargets {
    /// Adult baseline by sex and age bracket
    ///
    /// `Other` takes the midpoint of the male and female values.
    #[must_use]
    pub fn baseline(sex: BiologicalSex, age: u32) -> Self {
        let b6 = if age < 51 {
            baseline::VITAMIN_B6_MG
        } else {
            baseline::VITAMIN_B6_OLDER_MG
        };
        let calcium = if age < 19 {
            baseline::CALCIUM_ADOLESCENT_MG
        } else if age >= 51 {
            by_sex(
                (baseline::CALCIUM_MG.0, baseline::CALCIUM_OLDER_FEMALE_MG),
                sex,
            )
        } else {
            by_sex(baseline::CALCIUM_MG, sex)
        };
        let iron = if (19..=50).contains(&age) {
            by_sex((baseline::IRON_MG.0, baseline::IRON_MENSTRUATING_MG), sex)
        } else {
            by_sex(baseline::IRON_MG, sex)
        };
        let magnesium = if (19..=30).contains(&age) {
            baseline::MAGNESIUM_YOUNG_ADULT_MG
        } else {
            baseline::MAGNESIUM_MG
        };

        Self {
            vitamin_a_ug: by_sex(baseline::VITAMIN_A_UG, sex),
            vitamin_c_mg: by_sex(baseline::VITAMIN_C_MG, sex),
            vitamin_d_ug: by_sex(baseline::VITAMIN_D_UG, sex),
            vitamin_e_mg: by_sex(baseline::VITAMIN_E_MG, sex),
            vitamin_k_ug: by_sex(baseline::VITAMIN_K_UG, sex),
            thiamin_mg: by_sex(baseline::THIAMIN_MG, sex),
            riboflavin_mg: by_sex(baseline::RIBOFLAVIN_MG, sex),
            niacin_mg: by_sex(baseline::NIACIN_MG, sex),
            vitamin_b6_mg: by_sex(b6, sex),
            folate_ug: by_sex(baseline::FOLATE_UG, sex),
            vitamin_b12_ug: by_sex(baseline::VITAMIN_B12_UG, sex),
            pantothenic_acid_mg: by_sex(baseline::PANTOTHENIC_ACID_MG, sex),
            calcium_mg: calcium,
            iron_mg: iron,
            magnesium_mg: by_sex(magnesium, sex),
            zinc_mg: by_sex(baseline::ZINC_MG, sex),
            selenium_ug: by_sex(baseline::SELENIUM_UG, sex),
            copper_ug: by_sex(baseline::COPPER_UG, sex),
            manganese_mg: by_sex(baseline::MANGANESE_MG, sex),
            sodium_mg: by_sex(baseline::SODIUM_MG, sex),
            potassium_mg: by_sex(baseline::POTASSIUM_MG, sex),
        }
    }

    /// Standard label values
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            vitamin_a_ug: standard::VITAMIN_A_UG,
            vitamin_c_mg: standard::VITAMIN_C_MG,
            vitamin_d_ug: standard::VITAMIN_D_UG,
            vitamin_e_mg: standard::VITAMIN_E_MG,
            vitamin_k_ug: standard::VITAMIN_K_UG,
            thiamin_mg: standard::THIAMIN_MG,
            riboflavin_mg: standard::RIBOFLAVIN_MG,
            niacin_mg: standard::NIACIN_MG,
            vitamin_b6_mg: standard::VITAMIN_B6_MG,
            folate_ug: standard::FOLATE_UG,
            vitamin_b12_ug: standard::VITAMIN_B12_UG,
            pantothenic_acid_mg: standard::PANTOTHENIC_ACID_MG,
            calcium_mg: standard::CALCIUM_MG,
            iron_mg: standard::IRON_MG,
            magnesium_mg: standard::MAGNESIUM_MG,
            zinc_mg: standard::ZINC_MG,
            selenium_ug: standard::SELENIUM_UG,
            copper_ug: standard::COPPER_UG,
            manganese_mg: standard::MANGANESE_MG,
            sodium_mg: standard::SODIUM_MG,
            potassium_mg: standard::POTASSIUM_MG,
        }
    }

    fn apply_pregnancy(&mut self) {
        self.vitamin_a_ug = pregnancy::VITAMIN_A_UG;
        self.vitamin_c_mg = pregnancy::VITAMIN_C_MG;
        self.thiamin_mg = pregnancy::THIAMIN_MG;
        self.riboflavin_mg = pregnancy::RIBOFLAVIN_MG;
        self.niacin_mg = pregnancy::NIACIN_MG;
        self.vitamin_b6_mg = pregnancy::VITAMIN_B6_MG;
        self.folate_ug = pregnancy::FOLATE_UG;
        self.vitamin_b12_ug = pregnancy::VITAMIN_B12_UG;
        self.pantothenic_acid_mg = pregnancy::PANTOTHENIC_ACID_MG;
        self.iron_mg = pregnancy::IRON_MG;
        self.zinc_mg = pregnancy::ZINC_MG;
        self.selenium_ug = pregnancy::SELENIUM_UG;
        self.copper_ug = pregnancy::COPPER_UG;
        self.manganese_mg = pregnancy::MANGANESE_MG;
        self.magnesium_mg += pregnancy::MAGNESIUM_EXTRA_MG;
    }

    fn apply_lactation(&mut self) {
        self.vitamin_a_ug = lactation::VITAMIN_A_UG;
        self.vitamin_c_mg = lactation::VITAMIN_C_MG;
        self.vitamin_e_mg = lactation::VITAMIN_E_MG;
        self.thiamin_mg = lactation::THIAMIN_MG;
        self.riboflavin_mg = lactation::RIBOFLAVIN_MG;
        self.niacin_mg = lactation::NIACIN_MG;
        self.vitamin_b6_mg = lactation::VITAMIN_B6_MG;
        self.folate_ug = lactation::FOLATE_UG;
        self.vitamin_b12_ug = lactation::VITAMIN_B12_UG;
        self.pantothenic_acid_mg = lactation::PANTOTHENIC_ACID_MG;
        self.iron_mg = lactation::IRON_MG;
        self.zinc_mg = lactation::ZINC_MG;
        self.selenium_ug = lactation::SELENIUM_UG;
        self.copper_ug = lactation::COPPER_UG;
        self.manganese_mg = lactation::MANGANESE_MG;
        self.potassium_mg += lactation::POTASSIUM_EXTRA_MG;
    }

    fn apply_plant_based(&mut self) {
        self.iron_mg *= adjustments::PLANT_BASED_IRON_FACTOR;
        self.zinc_mg *= adjustments::PLANT_BASED_ZINC_FACTOR;
        self.vitamin_b12_ug = adjustments::PLANT_BASED_B12_UG;
    }

    fn apply_high_activity(&mut self) {
        self.magnesium_mg += adjustments::ACTIVE_MAGNESIUM_EXTRA_MG;
        self.potassium_mg += adjustments::ACTIVE_POTASSIUM_EXTRA_MG;
        self.thiamin_mg += adjustments::ACTIVE_THIAMIN_EXTRA_MG;
        self.riboflavin_mg += adjustments::ACTIVE_RIBOFLAVIN_EXTRA_MG;
        self.niacin_mg += adjustments::ACTIVE_NIACIN_EXTRA_MG;
    }

    fn apply_high_stress(&mut self) {
        self.vitamin_c_mg = adjustments::STRESS_VITAMIN_C_MG;
        self.magnesium_mg += adjustments::STRESS_MAGNESIUM_EXTRA_MG;
        self.vitamin_b6_mg += adjustments::STRESS_B6_EXTRA_MG;
        self.pantothenic_acid_mg = adjustments::STRESS_PANTOTHENIC_ACID_MG;
    }

    fn rounded(self) -> Self {
        Self {
            vitamin_a_ug: round_tenth(self.vitamin_a_ug),
            vitamin_c_mg: round_tenth(self.vitamin_c_mg),
            vitamin_d_ug: round_tenth(self.vitamin_d_ug),
            vitamin_e_mg: round_tenth(self.vitamin_e_mg),
            vitamin_k_ug: round_tenth(self.vitamin_k_ug),
            thiamin_mg: round_tenth(self.thiamin_mg),
            riboflavin_mg: round_tenth(self.riboflavin_mg),
            niacin_mg: round_tenth(self.niacin_mg),
            vitamin_b6_mg: round_tenth(self.vitamin_b6_mg),
            folate_ug: round_tenth(self.folate_ug),
            vitamin_b12_ug: round_tenth(self.vitamin_b12_ug),
            pantothenic_acid_mg: round_tenth(self.pantothenic_acid_mg),
            calcium_mg: round_tenth(self.calcium_mg),
            iron_mg: round_tenth(self.iron_mg),
            magnesium_mg: round_tenth(self.magnesium_mg),
            zinc_mg: round_tenth(self.zinc_mg),
            selenium_ug: round_tenth(self.selenium_ug),
            copper_ug: round_tenth(self.copper_ug),
            manganese_mg: round_tenth(self.manganese_mg),
            sodium_mg: round_tenth(self.sodium_mg),
            potassium_mg: round_tenth(self.potassium_mg),
        }
    }
}

/// Micronutrient targets with every adjustment layer applied, rounded to 0.1
#[must_use]
pub fn personalized_micronutrients(
    profile: &UserProfile,
    sex: BiologicalSex,
    age: u32,
) -> MicronutrientTargets {
    let mut targets = MicronutrientTargets::baseline(sex, age);

    if profile.has_condition(SpecialCondition::Pregnancy) {
        targets.apply_pregnancy();
    }
    if profile.has_condition(SpecialCondition::Lactation) {
        targets.apply_lactation();
    }
    if profile.has_condition(SpecialCondition::Elderly) {
        targets.calcium_mg = targets.calcium_mg.max(adjustments::ELDERLY_CALCIUM_MG);
    }

    if profile.dietary_pattern.is_plant_based() {
        targets.apply_plant_based();
    }

    if profile
        .activity
        .activity_level
        .is_some_and(ActivityLevel::is_high)
    {
        targets.apply_high_activity();
    }

    if let Some(lifestyle) = &profile.lifestyle {
        if lifestyle.smoking_status == SmokingStatus::Current {
            targets.vitamin_c_mg += adjustments::SMOKER_VITAMIN_C_EXTRA_MG;
        }
        if lifestyle.stress_level > adjustments::HIGH_STRESS_LEVEL {
            targets.apply_high_stress();
        }
    }

    targets.rounded()
}

fn advisory_notes(profile: &UserProfile) -> Vec<String> {
    let mut notes = Vec::new();
    if profile.has_condition(SpecialCondition::Pregnancy) {
        notes.push("Targets include pregnancy requirements; confirm with your care provider".to_owned());
    }
    if profile.has_condition(SpecialCondition::Lactation) {
        notes.push("Targets include breastfeeding requirements, including extra fluids".to_owned());
    }
    if profile.dietary_pattern.is_plant_based() {
        notes.push("Plant-based diets need more iron and zinc; consider a B12 supplement".to_owned());
    }
    let Some(lifestyle) = &profile.lifestyle else {
        return notes;
    };
    if lifestyle.smoking_status == SmokingStatus::Current {
        notes.push("Smoking increases vitamin C needs".to_owned());
    }
    if matches!(
        lifestyle.alcohol_frequency,
        AlcoholFrequency::Weekly | AlcoholFrequency::Daily
    ) {
        notes.push("Regular alcohol intake depletes B vitamins and magnesium".to_owned());
    }
    if lifestyle.caffeine_cups_per_day > HIGH_CAFFEINE_CUPS {
        notes.push("High caffeine intake can interfere with calcium absorption and sleep".to_owned());
    }
    if lifestyle
        .medications
        .as_deref()
        .is_some_and(|m| !m.trim().is_empty())
    {
        notes.push(
            "Some medications affect nutrient absorption; review these targets with your doctor"
                .to_owned(),
        );
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellday_core::models::{
        ActivityProfile, DietaryPattern, LifestyleProfile, PhysicalProfile,
    };

    fn active_male() -> UserProfile {
        UserProfile {
            physical: PhysicalProfile::metric(70.0, 175.0, 30, BiologicalSex::Male),
            activity: ActivityProfile::new(ActivityLevel::VeryActive, FitnessGoal::Maintain),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_very_active_protein_is_1_6_g_per_kg() {
        let targets = compute_targets(&active_male(), &NutritionConfig::default());
        assert_eq!(targets.source, DailyValueSource::Personalized);
        assert_eq!(targets.protein_g, (70.0_f64 * 1.6).round() as u32);
        assert_eq!(targets.protein_g, 112);
    }

    #[test]
    fn test_muscle_goal_raises_protein_floor() {
        let mut profile = active_male();
        profile.activity.fitness_goal = FitnessGoal::GainMuscle;
        let targets = compute_targets(&profile, &NutritionConfig::default());
        assert_eq!(targets.protein_g, 126);
    }

    #[test]
    fn test_fiber_and_macro_split_follow_calories() {
        let targets = compute_targets(&active_male(), &NutritionConfig::default());
        let calories = f64::from(targets.calories);
        assert_eq!(targets.fiber_g, (calories / 1000.0 * 14.0).round() as u32);
        let fat_kcal = 0.30 * calories;
        let carbs_kcal = calories - f64::from(targets.protein_g) * 4.0 - fat_kcal;
        assert_eq!(targets.fat_g, Some((fat_kcal / 9.0).round() as u32));
        assert_eq!(targets.carbs_g, Some((carbs_kcal / 4.0).round() as u32));
    }

    #[test]
    fn test_macro_split_can_be_disabled() {
        let mut config = NutritionConfig::default();
        config.daily_values.include_macro_split = false;
        let targets = compute_targets(&active_male(), &config);
        assert!(targets.carbs_g.is_none());
        assert!(targets.fat_g.is_none());
    }

    #[test]
    fn test_hydration_bonus_for_active_and_lactating() {
        let mut profile = active_male();
        profile.physical.sex = Some(BiologicalSex::Female);
        profile.special_conditions.insert(SpecialCondition::Lactation);
        let targets = compute_targets(&profile, &NutritionConfig::default());
        assert_eq!(targets.hydration_ml, (70.0_f64 * 33.0).round() as u32 + 500 + 700);
    }

    #[test]
    fn test_incomplete_profile_returns_standard_table() {
        let profile = UserProfile {
            physical: PhysicalProfile {
                age: None,
                ..PhysicalProfile::metric(70.0, 175.0, 30, BiologicalSex::Male)
            },
            ..active_male()
        };
        let targets = compute_targets(&profile, &NutritionConfig::default());
        assert_eq!(targets.source, DailyValueSource::StandardReference);
        assert_eq!(targets.calories, 2000);
        assert_eq!(targets.micronutrients, MicronutrientTargets::standard());
    }

    #[test]
    fn test_iron_for_women_19_to_50() {
        let young = MicronutrientTargets::baseline(BiologicalSex::Female, 30);
        let older = MicronutrientTargets::baseline(BiologicalSex::Female, 55);
        assert!((young.iron_mg - 18.0).abs() < f64::EPSILON);
        assert!((older.iron_mg - 8.0).abs() < f64::EPSILON);
        assert!((older.calcium_mg - 1200.0).abs() < f64::EPSILON);
        assert!((older.vitamin_b6_mg - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vegan_adjustments() {
        let mut profile = active_male();
        profile.activity.activity_level = Some(ActivityLevel::Sedentary);
        profile.dietary_pattern = DietaryPattern::Vegan;
        let targets = compute_targets(&profile, &NutritionConfig::default());
        assert!((targets.micronutrients.iron_mg - 14.4).abs() < 1e-9);
        assert!((targets.micronutrients.zinc_mg - 16.5).abs() < 1e-9);
        assert!((targets.micronutrients.vitamin_b12_ug - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_high_stress_adjustments() {
        let mut profile = active_male();
        profile.activity.activity_level = Some(ActivityLevel::Sedentary);
        profile.lifestyle = Some(LifestyleProfile {
            stress_level: 8,
            ..LifestyleProfile::default()
        });
        let m = compute_targets(&profile, &NutritionConfig::default()).micronutrients;
        assert!((m.vitamin_c_mg - 120.0).abs() < 1e-9);
        assert!((m.magnesium_mg - 450.0).abs() < 1e-9);
        assert!((m.vitamin_b6_mg - 1.6).abs() < 1e-9);
        assert!((m.pantothenic_acid_mg - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_stress_sets_vitamin_c_even_for_smokers() {
        let mut profile = active_male();
        profile.activity.activity_level = Some(ActivityLevel::Sedentary);
        profile.lifestyle = Some(LifestyleProfile {
            smoking_status: SmokingStatus::Current,
            ..LifestyleProfile::default()
        });
        let smoker = compute_targets(&profile, &NutritionConfig::default()).micronutrients;
        assert!((smoker.vitamin_c_mg - 125.0).abs() < 1e-9);

        profile.lifestyle = Some(LifestyleProfile {
            smoking_status: SmokingStatus::Current,
            stress_level: 7,
            ..LifestyleProfile::default()
        });
        let stressed = compute_targets(&profile, &NutritionConfig::default()).micronutrients;
        assert!((stressed.vitamin_c_mg - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_pregnancy_overrides_and_protein_increment() {
        let mut profile = active_male();
        profile.physical.sex = Some(BiologicalSex::Female);
        profile.activity.activity_level = Some(ActivityLevel::Sedentary);
        profile.special_conditions.insert(SpecialCondition::Pregnancy);
        let targets = compute_targets(&profile, &NutritionConfig::default());
        assert!((targets.micronutrients.folate_ug - 600.0).abs() < 1e-9);
        assert!((targets.micronutrients.iron_mg - 27.0).abs() < 1e-9);
        assert_eq!(targets.protein_g, (70.0_f64 * 1.1).round() as u32);
        assert!(!targets.notes.is_empty());
    }

    #[test]
    fn test_medications_only_add_a_note() {
        let mut profile = active_male();
        let baseline = compute_targets(&profile, &NutritionConfig::default());
        profile.lifestyle = Some(LifestyleProfile {
            medications: Some("metformin".to_owned()),
            ..LifestyleProfile::default()
        });
        let with_meds = compute_targets(&profile, &NutritionConfig::default());
        assert_eq!(with_meds.micronutrients, baseline.micronutrients);
        assert_eq!(with_meds.notes.len(), baseline.notes.len() + 1);
    }
}
