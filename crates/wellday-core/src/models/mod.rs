// ABOUTME: Domain models shared by the calculation engines and the application crate
// ABOUTME: Profiles, food and exercise log entries, and sleep preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

/// Food and exercise log entries and the log book that owns them
pub mod logs;
/// Physical, activity, lifestyle, and dietary profile types
pub mod profile;
/// Sleep timing preferences
pub mod sleep;

pub use logs::{
    ActivityRef, ExerciseIntensity, ExerciseLogEntry, FoodLogEdit, FoodLogEntry, LogBook,
    LogEntry, MealType, NutrientSnapshot,
};
pub use profile::{
    ActivityLevel, ActivityProfile, AlcoholFrequency, BiologicalSex, BodyMeasurements,
    DietaryPattern, FitnessGoal, Height, LifestyleProfile, PhysicalProfile, SmokingStatus,
    SpecialCondition, UserProfile, Weight,
};
pub use sleep::SleepPreferences;
