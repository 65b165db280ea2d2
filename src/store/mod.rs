// ABOUTME: Profile and log store abstraction with pluggable in-memory and JSON file backends
// ABOUTME: Two operations, load and save, keyed by well-known document names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

/// JSON file store
pub mod file;
/// In-memory store
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wellday_core::{AppError, AppResult};

/// Well-known store keys
pub mod keys {
    /// `UserProfile`
    pub const PROFILE: &str = "profile";
    /// `Vec<FoodLogEntry>`
    pub const FOOD_LOGS: &str = "food_logs";
    /// `Vec<ExerciseLogEntry>`
    pub const EXERCISE_LOGS: &str = "exercise_logs";
    /// `SleepPreferences`
    pub const SLEEP_PREFERENCES: &str = "sleep_preferences";
    /// `ProfileHistory`
    pub const PROFILE_HISTORY: &str = "profile_history";
}

/// Key/value document store for profiles and logs
///
/// Saves are idempotent: saving the same value twice leaves the same state.
/// A missing key loads as `None`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Load the document stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be read
    async fn load(&self, key: &str) -> AppResult<Option<Value>>;

    /// Store `value` under `key`, replacing any previous document
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be written
    async fn save(&self, key: &str, value: Value) -> AppResult<()>;
}

/// Load and deserialize a typed document
///
/// # Errors
///
/// Returns `SerializationError` if the stored document does not match `T`
pub async fn load_as<T, S>(store: &S, key: &str) -> AppResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    store
        .load(key)
        .await?
        .map(|value| {
            serde_json::from_value(value).map_err(|e| {
                AppError::serialization(format!("Stored '{key}' has an unexpected shape: {e}"))
                    .with_resource_id(key)
            })
        })
        .transpose()
}

/// Load a typed document, or `T::default()` when the key is absent
///
/// # Errors
///
/// Same as [`load_as`]
pub async fn load_or_default<T, S>(store: &S, key: &str) -> AppResult<T>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    Ok(load_as(store, key).await?.unwrap_or_default())
}

/// Serialize and save a typed document
///
/// # Errors
///
/// Returns `SerializationError` if `value` cannot be encoded, or the backend error
pub async fn save_as<T, S>(store: &S, key: &str, value: &T) -> AppResult<()>
where
    T: Serialize + Sync,
    S: KeyValueStore + ?Sized,
{
    let value = serde_json::to_value(value)?;
    store.save(key, value).await
}

/// Keys are lowercase ASCII letters, digits, `_`, or `-`
///
/// # Errors
///
/// Returns `InvalidInput` for any other key
pub fn validate_key(key: &str) -> AppResult<()> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!("Invalid store key '{key}'")).with_resource_id(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_validation() {
        assert!(validate_key(keys::FOOD_LOGS).is_ok());
        assert!(validate_key("meal-plan_2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("Profile").is_err());
    }
}
