// ABOUTME: Weight and height units with normalization to kilograms and centimeters
// ABOUTME: Conversions never reject input; unit-name parsing is strict at the edges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453_592;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Unit a body weight was entered in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    #[serde(alias = "lb")]
    Lbs,
}

/// Unit a height was entered in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    /// Centimeters
    #[default]
    Cm,
    /// Inches
    #[serde(rename = "in", alias = "inches")]
    Inches,
}

/// Normalize a weight to kilograms
///
/// Non-finite or negative values pass through unchanged in sign and magnitude.
#[must_use]
pub fn to_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => value,
        WeightUnit::Lbs => value * KG_PER_LB,
    }
}

/// Normalize a height to centimeters
#[must_use]
pub fn to_cm(value: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Cm => value,
        HeightUnit::Inches => value * CM_PER_INCH,
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilograms" => Ok(Self::Kg),
            "lb" | "lbs" | "pounds" => Ok(Self::Lbs),
            other => Err(AppError::invalid_format(format!(
                "Unknown weight unit '{other}'. Expected 'kg' or 'lbs'"
            ))),
        }
    }
}

impl FromStr for HeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeters" => Ok(Self::Cm),
            "in" | "inch" | "inches" => Ok(Self::Inches),
            other => Err(AppError::invalid_format(format!(
                "Unknown height unit '{other}'. Expected 'cm' or 'in'"
            ))),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Kg => "kg",
            Self::Lbs => "lbs",
        })
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cm => "cm",
            Self::Inches => "in",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds_to_kg() {
        assert!((to_kg(154.324, WeightUnit::Lbs) - 70.0).abs() < 0.01);
        assert!((to_kg(70.0, WeightUnit::Kg) - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inches_to_cm() {
        assert!((to_cm(68.9, HeightUnit::Inches) - 175.0).abs() < 0.1);
        assert!((to_cm(175.0, HeightUnit::Cm) - 175.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_values_are_not_rejected() {
        assert!(to_kg(-10.0, WeightUnit::Lbs) < 0.0);
        assert!(to_cm(f64::NAN, HeightUnit::Inches).is_nan());
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("LBS".parse::<WeightUnit>().unwrap(), WeightUnit::Lbs);
        assert_eq!("inches".parse::<HeightUnit>().unwrap(), HeightUnit::Inches);
        assert_eq!("in".parse::<HeightUnit>().unwrap(), HeightUnit::Inches);
        assert!("stone".parse::<WeightUnit>().is_err());
    }

    #[test]
    fn test_height_unit_serde_aliases() {
        let unit: HeightUnit = serde_json::from_str("\"inches\"").unwrap();
        assert_eq!(unit, HeightUnit::Inches);
        assert_eq!(serde_json::to_string(&HeightUnit::Inches).unwrap(), "\"in\"");
    }
}
