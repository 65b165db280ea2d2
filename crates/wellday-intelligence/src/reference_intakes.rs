// ABOUTME: Dietary reference intake constants for adults, life stages, and lifestyle adjustments
// ABOUTME: Grouped by the rule that applies them so each layer reads as one table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! Dietary reference intakes used by the daily value calculator
//!
//! Units: vitamin A, D, K, folate, B12, selenium, and copper in micrograms;
//! everything else in milligrams.
//!
//! References:
//! - Institute of Medicine, Dietary Reference Intakes: The Essential Guide to
//!   Nutrient Requirements (2006)
//! - FDA Daily Values for nutrition labeling, 21 CFR 101.9 (2016 revision)

/// Sex-specific adult baselines as (male, female)
pub mod baseline {
    /// Vitamin A (µg RAE)
    pub const VITAMIN_A_UG: (f64, f64) = (900.0, 700.0);
    /// Vitamin C (mg)
    pub const VITAMIN_C_MG: (f64, f64) = (90.0, 75.0);
    /// Vitamin D (µg)
    pub const VITAMIN_D_UG: (f64, f64) = (20.0, 20.0);
    /// Vitamin E (mg)
    pub const VITAMIN_E_MG: (f64, f64) = (15.0, 15.0);
    /// Vitamin K (µg)
    pub const VITAMIN_K_UG: (f64, f64) = (120.0, 90.0);
    /// Thiamin, B1 (mg)
    pub const THIAMIN_MG: (f64, f64) = (1.2, 1.1);
    /// Riboflavin, B2 (mg)
    pub const RIBOFLAVIN_MG: (f64, f64) = (1.3, 1.1);
    /// Niacin, B3 (mg)
    pub const NIACIN_MG: (f64, f64) = (16.0, 14.0);
    /// Vitamin B6 under 51 (mg)
    pub const VITAMIN_B6_MG: (f64, f64) = (1.3, 1.3);
    /// Vitamin B6 at 51 and over (mg)
    pub const VITAMIN_B6_OLDER_MG: (f64, f64) = (1.7, 1.5);
    /// Folate, B9 (µg DFE)
    pub const FOLATE_UG: (f64, f64) = (400.0, 400.0);
    /// Vitamin B12 (µg)
    pub const VITAMIN_B12_UG: (f64, f64) = (2.4, 2.4);
    /// Pantothenic acid, B5 (mg)
    pub const PANTOTHENIC_ACID_MG: (f64, f64) = (5.0, 5.0);
    /// Calcium (mg)
    pub const CALCIUM_MG: (f64, f64) = (1000.0, 1000.0);
    /// Calcium under 19 (mg)
    pub const CALCIUM_ADOLESCENT_MG: f64 = 1300.0;
    /// Calcium for women 51 and over (mg)
    pub const CALCIUM_OLDER_FEMALE_MG: f64 = 1200.0;
    /// Iron (mg)
    pub const IRON_MG: (f64, f64) = (8.0, 8.0);
    /// Iron for women 19-50 (mg)
    pub const IRON_MENSTRUATING_MG: f64 = 18.0;
    /// Magnesium (mg)
    pub const MAGNESIUM_MG: (f64, f64) = (420.0, 320.0);
    /// Magnesium for ages 19-30 (mg)
    pub const MAGNESIUM_YOUNG_ADULT_MG: (f64, f64) = (400.0, 310.0);
    /// Zinc (mg)
    pub const ZINC_MG: (f64, f64) = (11.0, 8.0);
    /// Selenium (µg)
    pub const SELENIUM_UG: (f64, f64) = (55.0, 55.0);
    /// Copper (µg)
    pub const COPPER_UG: (f64, f64) = (900.0, 900.0);
    /// Manganese (mg)
    pub const MANGANESE_MG: (f64, f64) = (2.3, 1.8);
    /// Sodium (mg), fixed
    pub const SODIUM_MG: (f64, f64) = (2300.0, 2300.0);
    /// Potassium (mg)
    pub const POTASSIUM_MG: (f64, f64) = (3400.0, 2600.0);
}

/// Pregnancy targets; replace the baseline except where noted
pub mod pregnancy {
    /// Vitamin A (µg)
    pub const VITAMIN_A_UG: f64 = 770.0;
    /// Vitamin C (mg)
    pub const VITAMIN_C_MG: f64 = 85.0;
    /// Thiamin (mg)
    pub const THIAMIN_MG: f64 = 1.4;
    /// Riboflavin (mg)
    pub const RIBOFLAVIN_MG: f64 = 1.4;
    /// Niacin (mg)
    pub const NIACIN_MG: f64 = 18.0;
    /// Vitamin B6 (mg)
    pub const VITAMIN_B6_MG: f64 = 1.9;
    /// Folate (µg)
    pub const FOLATE_UG: f64 = 600.0;
    /// Vitamin B12 (µg)
    pub const VITAMIN_B12_UG: f64 = 2.6;
    /// Pantothenic acid (mg)
    pub const PANTOTHENIC_ACID_MG: f64 = 6.0;
    /// Iron (mg)
    pub const IRON_MG: f64 = 27.0;
    /// Zinc (mg)
    pub const ZINC_MG: f64 = 11.0;
    /// Selenium (µg)
    pub const SELENIUM_UG: f64 = 60.0;
    /// Copper (µg)
    pub const COPPER_UG: f64 = 1000.0;
    /// Manganese (mg)
    pub const MANGANESE_MG: f64 = 2.0;
    /// Added to magnesium (mg)
    pub const MAGNESIUM_EXTRA_MG: f64 = 40.0;
}

/// Lactation targets; replace the baseline except where noted
pub mod lactation {
    /// Vitamin A (µg)
    pub const VITAMIN_A_UG: f64 = 1300.0;
    /// Vitamin C (mg)
    pub const VITAMIN_C_MG: f64 = 120.0;
    /// Vitamin E (mg)
    pub const VITAMIN_E_MG: f64 = 19.0;
    /// Thiamin (mg)
    pub const THIAMIN_MG: f64 = 1.4;
    /// Riboflavin (mg)
    pub const RIBOFLAVIN_MG: f64 = 1.6;
    /// Niacin (mg)
    pub const NIACIN_MG: f64 = 17.0;
    /// Vitamin B6 (mg)
    pub const VITAMIN_B6_MG: f64 = 2.0;
    /// Folate (µg)
    pub const FOLATE_UG: f64 = 500.0;
    /// Vitamin B12 (µg)
    pub const VITAMIN_B12_UG: f64 = 2.8;
    /// Pantothenic acid (mg)
    pub const PANTOTHENIC_ACID_MG: f64 = 7.0;
    /// Iron (mg)
    pub const IRON_MG: f64 = 9.0;
    /// Zinc (mg)
    pub const ZINC_MG: f64 = 12.0;
    /// Selenium (µg)
    pub const SELENIUM_UG: f64 = 70.0;
    /// Copper (µg)
    pub const COPPER_UG: f64 = 1300.0;
    /// Manganese (mg)
    pub const MANGANESE_MG: f64 = 2.6;
    /// Added to potassium (mg)
    pub const POTASSIUM_EXTRA_MG: f64 = 200.0;
}

/// Adjustments for diet, training load, and lifestyle
pub mod adjustments {
    /// Iron multiplier for plant-based diets (non-heme bioavailability)
    pub const PLANT_BASED_IRON_FACTOR: f64 = 1.8;
    /// Zinc multiplier for plant-based diets (phytate binding)
    pub const PLANT_BASED_ZINC_FACTOR: f64 = 1.5;
    /// B12 target for plant-based diets (µg)
    pub const PLANT_BASED_B12_UG: f64 = 6.0;

    /// Added magnesium for very/extremely active users (mg)
    pub const ACTIVE_MAGNESIUM_EXTRA_MG: f64 = 40.0;
    /// Added potassium for very/extremely active users (sweat losses, mg)
    pub const ACTIVE_POTASSIUM_EXTRA_MG: f64 = 500.0;
    /// Added thiamin for very/extremely active users (mg)
    pub const ACTIVE_THIAMIN_EXTRA_MG: f64 = 0.2;
    /// Added riboflavin for very/extremely active users (mg)
    pub const ACTIVE_RIBOFLAVIN_EXTRA_MG: f64 = 0.2;
    /// Added niacin for very/extremely active users (mg)
    pub const ACTIVE_NIACIN_EXTRA_MG: f64 = 2.0;

    /// Calcium floor for older adults (mg)
    pub const ELDERLY_CALCIUM_MG: f64 = 1200.0;

    /// Added vitamin C for current smokers (mg)
    pub const SMOKER_VITAMIN_C_EXTRA_MG: f64 = 35.0;

    /// Stress level above which stress adjustments apply (1-10 scale)
    pub const HIGH_STRESS_LEVEL: u8 = 6;
    /// Vitamin C floor under high stress (mg)
    pub const STRESS_VITAMIN_C_MG: f64 = 120.0;
    /// Added magnesium under high stress (mg)
    pub const STRESS_MAGNESIUM_EXTRA_MG: f64 = 50.0;
    /// Added B6 under high stress (mg)
    pub const STRESS_B6_EXTRA_MG: f64 = 0.3;
    /// Pantothenic acid floor under high stress (mg)
    pub const STRESS_PANTOTHENIC_ACID_MG: f64 = 7.0;
}

/// FDA label Daily Values, used when the profile is too incomplete to personalize
pub mod standard {
    /// Calories (kcal)
    pub const CALORIES: u32 = 2000;
    /// Protein (g)
    pub const PROTEIN_G: u32 = 50;
    /// Total carbohydrate (g)
    pub const CARBS_G: u32 = 275;
    /// Total fat (g)
    pub const FAT_G: u32 = 78;
    /// Dietary fiber (g)
    pub const FIBER_G: u32 = 28;
    /// Water (mL)
    pub const HYDRATION_ML: u32 = 2000;

    /// Vitamin A (µg)
    pub const VITAMIN_A_UG: f64 = 900.0;
    /// Vitamin C (mg)
    pub const VITAMIN_C_MG: f64 = 90.0;
    /// Vitamin D (µg)
    pub const VITAMIN_D_UG: f64 = 20.0;
    /// Vitamin E (mg)
    pub const VITAMIN_E_MG: f64 = 15.0;
    /// Vitamin K (µg)
    pub const VITAMIN_K_UG: f64 = 120.0;
    /// Thiamin (mg)
    pub const THIAMIN_MG: f64 = 1.2;
    /// Riboflavin (mg)
    pub const RIBOFLAVIN_MG: f64 = 1.3;
    /// Niacin (mg)
    pub const NIACIN_MG: f64 = 16.0;
    /// Vitamin B6 (mg)
    pub const VITAMIN_B6_MG: f64 = 1.7;
    /// Folate (µg)
    pub const FOLATE_UG: f64 = 400.0;
    /// Vitamin B12 (µg)
    pub const VITAMIN_B12_UG: f64 = 2.4;
    /// Pantothenic acid (mg)
    pub const PANTOTHENIC_ACID_MG: f64 = 5.0;
    /// Calcium (mg)
    pub const CALCIUM_MG: f64 = 1300.0;
    /// Iron (mg)
    pub const IRON_MG: f64 = 18.0;
    /// Magnesium (mg)
    pub const MAGNESIUM_MG: f64 = 420.0;
    /// Zinc (mg)
    pub const ZINC_MG: f64 = 11.0;
    /// Selenium (µg)
    pub const SELENIUM_UG: f64 = 55.0;
    /// Copper (µg)
    pub const COPPER_UG: f64 = 900.0;
    /// Manganese (mg)
    pub const MANGANESE_MG: f64 = 2.3;
    /// Sodium (mg)
    pub const SODIUM_MG: f64 = 2300.0;
    /// Potassium (mg)
    pub const POTASSIUM_MG: f64 = 4700.0;
}
