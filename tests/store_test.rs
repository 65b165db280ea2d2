// ABOUTME: Integration tests for the in-memory and JSON file key/value stores
// ABOUTME: Covers round trips, missing keys, invalid keys, corrupt files, and typed documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wellday::models::{FoodLogEntry, SleepPreferences, UserProfile};
use wellday::store::{
    keys, load_as, load_or_default, save_as, JsonFileStore, KeyValueStore, MemoryStore,
};
use wellday::ErrorCode;

#[tokio::test]
async fn test_memory_store_round_trip() {
    common::init_test_logging();
    let store = MemoryStore::new();
    assert!(store.is_empty());

    store
        .save(keys::SLEEP_PREFERENCES, json!({"target_sleep_time": "23:00"}))
        .await
        .unwrap();
    let loaded = store.load(keys::SLEEP_PREFERENCES).await.unwrap();
    assert_eq!(loaded, Some(json!({"target_sleep_time": "23:00"})));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_memory_store_clones_share_documents() {
    let store = MemoryStore::new();
    let clone = store.clone();
    clone.save(keys::PROFILE, json!({})).await.unwrap();
    assert!(store.load(keys::PROFILE).await.unwrap().is_some());
}

#[tokio::test]
async fn test_missing_key_loads_as_none() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    assert!(store.load(keys::FOOD_LOGS).await.unwrap().is_none());
    assert!(MemoryStore::new().load(keys::FOOD_LOGS).await.unwrap().is_none());
}

#[tokio::test]
async fn test_file_store_writes_one_file_per_key() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested"));

    store.save(keys::PROFILE, json!({"dietary_pattern": "vegan"})).await.unwrap();
    let path = store.path_for(keys::PROFILE);
    assert!(path.ends_with("profile.json"));
    assert!(path.exists());

    let on_disk: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(on_disk["dietary_pattern"], "vegan");
}

#[tokio::test]
async fn test_save_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    let value = json!({"target_sleep_time": "22:30", "target_wake_time": "06:30"});

    store.save(keys::SLEEP_PREFERENCES, value.clone()).await.unwrap();
    store.save(keys::SLEEP_PREFERENCES, value.clone()).await.unwrap();

    assert_eq!(store.load(keys::SLEEP_PREFERENCES).await.unwrap(), Some(value));
    let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1, "temporary files must not be left behind");
}

#[tokio::test]
async fn test_invalid_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    let err = store.load("../secrets").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    let err = MemoryStore::new().save("Food Logs", json!([])).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_corrupt_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    fs::write(store.path_for(keys::FOOD_LOGS), b"[{not json").unwrap();

    let err = store.load(keys::FOOD_LOGS).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_unexpected_shape_is_a_serialization_error() {
    let store = MemoryStore::new();
    store.save(keys::FOOD_LOGS, json!({"not": "a list"})).await.unwrap();

    let err = load_as::<Vec<FoodLogEntry>, _>(&store, keys::FOOD_LOGS)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_typed_food_logs_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    let logs = common::reference_day();

    save_as(&store, keys::FOOD_LOGS, &logs).await.unwrap();
    let loaded: Vec<FoodLogEntry> = load_as(&store, keys::FOOD_LOGS).await.unwrap().unwrap();

    assert_eq!(loaded, logs);
    assert_eq!(loaded[2].timestamp.offset(), logs[2].timestamp.offset());
}

#[tokio::test]
async fn test_absent_documents_load_as_defaults() {
    let store = MemoryStore::new();
    let profile: UserProfile = load_or_default(&store, keys::PROFILE).await.unwrap();
    let prefs: SleepPreferences = load_or_default(&store, keys::SLEEP_PREFERENCES).await.unwrap();

    assert_eq!(profile, UserProfile::default());
    assert_eq!(prefs.target_sleep_time, "22:00");
}

#[tokio::test]
async fn test_store_is_usable_as_trait_object() {
    let dir = TempDir::new().unwrap();
    let stores: Vec<Box<dyn KeyValueStore>> = vec![
        Box::new(MemoryStore::new()),
        Box::new(JsonFileStore::new(dir.path())),
    ];
    for store in &stores {
        save_as(store.as_ref(), keys::PROFILE, &common::reference_profile())
            .await
            .unwrap();
        let profile: Option<UserProfile> = load_as(store.as_ref(), keys::PROFILE).await.unwrap();
        assert_eq!(profile, Some(common::reference_profile()));
    }
}
