// ABOUTME: Body mass index calculation and WHO category classification
// ABOUTME: Accepts any supported units and normalizes before computing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

//! BMI
//!
//! BMI = kg / m². Categories follow the WHO adult cut-offs:
//! < 18.5 underweight, < 25 normal, < 30 overweight, otherwise obese.

use serde::{Deserialize, Serialize};
use wellday_core::models::PhysicalProfile;
use wellday_core::units::{to_cm, to_kg, HeightUnit, WeightUnit};

/// Upper bound (exclusive) of the underweight band
pub const UNDERWEIGHT_BELOW: f64 = 18.5;
/// Upper bound (exclusive) of the normal band
pub const NORMAL_BELOW: f64 = 25.0;
/// Upper bound (exclusive) of the overweight band
pub const OVERWEIGHT_BELOW: f64 = 30.0;

/// WHO BMI category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI >= 30
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < NORMAL_BELOW {
            Self::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// One-line explanation shown next to the value
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Underweight => "Below the healthy range; consider discussing nutrition with a professional",
            Self::Normal => "Within the healthy range for most adults",
            Self::Overweight => "Above the healthy range; small sustained changes help",
            Self::Obese => "Well above the healthy range; health risks increase in this range",
        }
    }

    /// Hex color used by UIs for the category
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Underweight => "#3B82F6",
            Self::Normal => "#10B981",
            Self::Overweight => "#F59E0B",
            Self::Obese => "#EF4444",
        }
    }
}

/// BMI value with its category metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmiAssessment {
    /// Unrounded BMI
    pub bmi: f64,
    /// WHO category
    pub category: BmiCategory,
    /// Category label
    pub label: String,
    /// Category description
    pub description: String,
    /// Category color
    pub color: String,
}

impl BmiAssessment {
    /// Build an assessment for a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        let category = BmiCategory::from_bmi(bmi);
        Self {
            bmi,
            category,
            label: category.label().to_owned(),
            description: category.description().to_owned(),
            color: category.color().to_owned(),
        }
    }
}

/// BMI from weight and height in any supported units
///
/// Returns `None` when height is not positive or either value is not finite.
#[must_use]
pub fn calculate_bmi(
    weight: f64,
    weight_unit: WeightUnit,
    height: f64,
    height_unit: HeightUnit,
) -> Option<f64> {
    let kg = to_kg(weight, weight_unit);
    let meters = to_cm(height, height_unit) / 100.0;
    if !(kg.is_finite() && meters.is_finite() && meters > 0.0) {
        return None;
    }
    Some(kg / (meters * meters))
}

/// Classify a BMI value with display metadata
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiAssessment {
    BmiAssessment::from_bmi(bmi)
}

/// BMI for a profile; needs only weight and height
#[must_use]
pub fn bmi_for_profile(profile: &PhysicalProfile) -> Option<BmiAssessment> {
    let weight = profile.weight?;
    let height = profile.height?;
    calculate_bmi(weight.value, weight.unit, height.value, height.unit).map(classify_bmi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellday_core::models::{BiologicalSex, Height, Weight};

    #[test]
    fn test_metric_bmi() {
        let bmi = calculate_bmi(70.0, WeightUnit::Kg, 175.0, HeightUnit::Cm).unwrap();
        assert!((bmi - 22.86).abs() < 0.01);
        assert_eq!(classify_bmi(bmi).category, BmiCategory::Normal);
    }

    #[test]
    fn test_imperial_bmi_matches_metric() {
        let bmi = calculate_bmi(154.324, WeightUnit::Lbs, 68.9, HeightUnit::Inches).unwrap();
        assert!((bmi - 22.86).abs() < 0.05);
    }

    #[test]
    fn test_category_boundaries_are_lower_inclusive() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_zero_height_is_unavailable() {
        assert!(calculate_bmi(70.0, WeightUnit::Kg, 0.0, HeightUnit::Cm).is_none());
    }

    #[test]
    fn test_profile_bmi_needs_weight_and_height_only() {
        let profile = PhysicalProfile {
            weight: Some(Weight::kg(95.0)),
            height: Some(Height::cm(175.0)),
            age: None,
            sex: None,
        };
        let assessment = bmi_for_profile(&profile).unwrap();
        assert_eq!(assessment.category, BmiCategory::Obese);
        assert_eq!(assessment.color, "#EF4444");

        let partial = PhysicalProfile {
            height: None,
            ..PhysicalProfile::metric(70.0, 175.0, 30, BiologicalSex::Male)
        };
        assert!(bmi_for_profile(&partial).is_none());
    }
}
