// ABOUTME: Unit system argument for the bmi command
// ABOUTME: Maps metric/imperial onto the weight and height units of the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use clap::ValueEnum;
use wellday::units::{HeightUnit, WeightUnit};

/// Measurement system for direct BMI input
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitSystem {
    /// Kilograms and centimeters
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    /// Weight and height units of this system
    pub const fn units(self) -> (WeightUnit, HeightUnit) {
        match self {
            Self::Metric => (WeightUnit::Kg, HeightUnit::Cm),
            Self::Imperial => (WeightUnit::Lbs, HeightUnit::Inches),
        }
    }
}
