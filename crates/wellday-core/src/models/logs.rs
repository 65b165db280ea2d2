// ABOUTME: Food and exercise log entries with create/edit/delete lifecycle
// ABOUTME: Entries are immutable values; edits produce a replacement keyed by the same id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Meal slot a food entry was logged under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from string, treating anything unknown as a snack
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }
}

/// Per-serving nutrient values copied from the food table at logging time
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientSnapshot {
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat_g: f64,
    /// Free-form tags such as "caffeine"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Common accessors for timestamped log entries
pub trait LogEntry {
    /// Stable entry identifier
    fn id(&self) -> Uuid;
    /// When the entry happened, in the user's local offset
    fn timestamp(&self) -> DateTime<FixedOffset>;

    /// Local calendar date of the entry
    fn local_date(&self) -> NaiveDate {
        self.timestamp().date_naive()
    }
}

/// A logged food
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodLogEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Food table identifier
    pub food_id: String,
    /// Display name
    pub name: String,
    /// Per-serving nutrients
    pub nutrients: NutrientSnapshot,
    /// Servings consumed (> 0)
    pub quantity: f64,
    /// When the food was eaten
    pub timestamp: DateTime<FixedOffset>,
    /// Meal slot
    pub meal_type: MealType,
}

/// Fields that may change when a food entry is edited
#[derive(Debug, Clone, Copy, Default)]
pub struct FoodLogEdit {
    /// New serving count
    pub quantity: Option<f64>,
    /// New time eaten
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// New meal slot
    pub meal_type: Option<MealType>,
}

fn check_positive(value: f64, field: &str) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::out_of_range(format!("{field} must be greater than zero"))
            .with_resource_id(field))
    }
}

impl FoodLogEntry {
    /// Create a new entry with a fresh id
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `quantity` is not positive
    pub fn new(
        food_id: impl Into<String>,
        name: impl Into<String>,
        nutrients: NutrientSnapshot,
        quantity: f64,
        timestamp: DateTime<FixedOffset>,
        meal_type: MealType,
    ) -> AppResult<Self> {
        check_positive(quantity, "quantity")?;
        Ok(Self {
            id: Uuid::new_v4(),
            food_id: food_id.into(),
            name: name.into(),
            nutrients,
            quantity,
            timestamp,
            meal_type,
        })
    }

    /// Replacement entry with the edited fields applied
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the new quantity is not positive
    pub fn edited(&self, edit: FoodLogEdit) -> AppResult<Self> {
        if let Some(quantity) = edit.quantity {
            check_positive(quantity, "quantity")?;
        }
        Ok(Self {
            quantity: edit.quantity.unwrap_or(self.quantity),
            timestamp: edit.timestamp.unwrap_or(self.timestamp),
            meal_type: edit.meal_type.unwrap_or(self.meal_type),
            ..self.clone()
        })
    }

    /// Total calories for the logged quantity
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.nutrients.calories * self.quantity
    }

    /// Total protein (g) for the logged quantity
    #[must_use]
    pub fn total_protein_g(&self) -> f64 {
        self.nutrients.protein_g * self.quantity
    }

    /// Total carbohydrates (g) for the logged quantity
    #[must_use]
    pub fn total_carbs_g(&self) -> f64 {
        self.nutrients.carbs_g * self.quantity
    }

    /// Total fat (g) for the logged quantity
    #[must_use]
    pub fn total_fat_g(&self) -> f64 {
        self.nutrients.fat_g * self.quantity
    }

    /// Case-insensitive tag lookup
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.nutrients
            .tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl LogEntry for FoodLogEntry {
    fn id(&self) -> Uuid {
        self.id
    }

    fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }
}

/// Exercise intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseIntensity {
    /// Below 3 METs
    Low,
    /// 3-6 METs
    Moderate,
    /// 6+ METs
    High,
}

/// Reference to an activity in the activity table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityRef {
    /// Activity table identifier
    pub id: String,
    /// Display name, e.g. "Running (Jogging, 5 mph)"
    pub name: String,
    /// Metabolic equivalent of the activity
    pub met: f64,
}

/// A logged exercise session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseLogEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Activity performed
    pub activity: ActivityRef,
    /// Duration (minutes, > 0)
    pub duration_minutes: f64,
    /// Estimated energy burned (kcal, >= 0)
    pub calories_burned: f64,
    /// Intensity
    pub intensity: ExerciseIntensity,
    /// When the session was logged
    pub timestamp: DateTime<FixedOffset>,
}

impl ExerciseLogEntry {
    /// Create a new entry with a fresh id
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if duration is not positive or calories are negative
    pub fn new(
        activity: ActivityRef,
        duration_minutes: f64,
        calories_burned: f64,
        intensity: ExerciseIntensity,
        timestamp: DateTime<FixedOffset>,
    ) -> AppResult<Self> {
        check_positive(duration_minutes, "duration_minutes")?;
        if !(calories_burned.is_finite() && calories_burned >= 0.0) {
            return Err(AppError::out_of_range("calories_burned must not be negative")
                .with_resource_id("calories_burned"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            activity,
            duration_minutes,
            calories_burned,
            intensity,
            timestamp,
        })
    }
}

impl LogEntry for ExerciseLogEntry {
    fn id(&self) -> Uuid {
        self.id
    }

    fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }
}

/// Ordered collection of log entries owned by one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct LogBook<T> {
    entries: Vec<T>,
}

impl<T> Default for LogBook<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: LogEntry> LogBook<T> {
    /// Wrap existing entries
    #[must_use]
    pub fn from_entries(entries: Vec<T>) -> Self {
        Self { entries }
    }

    /// Append an entry
    pub fn add(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Replace the entry with the same id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no entry has that id
    pub fn replace(&mut self, entry: T) -> AppResult<()> {
        let id = entry.id();
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| AppError::not_found(format!("log entry {id}")))?;
        *slot = entry;
        Ok(())
    }

    /// Delete by id, returning the removed entry
    pub fn remove(&mut self, id: Uuid) -> Option<T> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Entries on the given local date
    pub fn on_date(&self, date: NaiveDate) -> impl Iterator<Item = &T> {
        self.entries.iter().filter(move |e| e.local_date() == date)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn oatmeal(at: &str) -> FoodLogEntry {
        FoodLogEntry::new(
            "oatmeal",
            "Oatmeal",
            NutrientSnapshot {
                calories: 150.0,
                protein_g: 5.0,
                carbs_g: 27.0,
                fat_g: 3.0,
                tags: vec![],
            },
            2.0,
            ts(at),
            MealType::Breakfast,
        )
        .unwrap()
    }

    #[test]
    fn test_totals_scale_with_quantity() {
        let entry = oatmeal("2025-03-01T08:00:00Z");
        assert!((entry.total_calories() - 300.0).abs() < f64::EPSILON);
        assert!((entry.total_protein_g() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let result = FoodLogEntry::new(
            "x",
            "x",
            NutrientSnapshot::default(),
            0.0,
            ts("2025-03-01T08:00:00Z"),
            MealType::Snack,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_edit_keeps_id_and_changes_fields() {
        let entry = oatmeal("2025-03-01T08:00:00Z");
        let edited = entry
            .edited(FoodLogEdit {
                quantity: Some(1.0),
                meal_type: Some(MealType::Snack),
                ..FoodLogEdit::default()
            })
            .unwrap();
        assert_eq!(edited.id, entry.id);
        assert!((edited.quantity - 1.0).abs() < f64::EPSILON);
        assert_eq!(edited.meal_type, MealType::Snack);
        assert_eq!(edited.timestamp, entry.timestamp);
    }

    #[test]
    fn test_log_book_lifecycle() {
        let mut book = LogBook::default();
        let first = oatmeal("2025-03-01T08:00:00Z");
        let second = oatmeal("2025-03-02T08:00:00Z");
        let first_id = first.id;
        book.add(first.clone());
        book.add(second);

        let edited = first
            .edited(FoodLogEdit {
                quantity: Some(3.0),
                ..FoodLogEdit::default()
            })
            .unwrap();
        book.replace(edited).unwrap();
        assert!((book.entries()[0].quantity - 3.0).abs() < f64::EPSILON);

        let day = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(book.on_date(day).count(), 1);

        assert!(book.remove(first_id).is_some());
        assert!(book.remove(first_id).is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_replace_unknown_id_fails() {
        let mut book: LogBook<FoodLogEntry> = LogBook::default();
        assert!(book.replace(oatmeal("2025-03-01T08:00:00Z")).is_err());
    }

    #[test]
    fn test_meal_type_lossy_parse() {
        assert_eq!(MealType::from_str_lossy("Dinner"), MealType::Dinner);
        assert_eq!(MealType::from_str_lossy("brunch"), MealType::Snack);
    }
}
