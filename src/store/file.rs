// ABOUTME: Directory-backed key/value store writing one pretty-printed JSON file per key
// ABOUTME: Writes go to a temporary file that is renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use super::{validate_key, KeyValueStore};
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use wellday_core::{AppError, AppResult};

/// JSON file store rooted at a directory
///
/// The directory is created on first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds `key`
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn load(&self, key: &str) -> AppResult<Option<Value>> {
        validate_key(key)?;
        let path = self.path_for(key);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::storage(format!("Failed to read {}", path.display()))
                    .with_resource_id(key)
                    .with_source(e))
            }
        };
        let value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::serialization(format!("Corrupt JSON in {}: {e}", path.display()))
                .with_resource_id(key)
        })?;
        Ok(Some(value))
    }

    async fn save(&self, key: &str, value: Value) -> AppResult<()> {
        validate_key(key)?;
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::storage(format!("Failed to create {}", self.root.display())).with_source(e)
        })?;

        let path = self.path_for(key);
        let tmp = self.root.join(format!(".{key}.json.tmp"));
        let bytes = serde_json::to_vec_pretty(&value)?;
        fs::write(&tmp, &bytes).await.map_err(|e| {
            AppError::storage(format!("Failed to write {}", tmp.display()))
                .with_resource_id(key)
                .with_source(e)
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::storage(format!("Failed to replace {}", path.display()))
                .with_resource_id(key)
                .with_source(e)
        })?;

        debug!(key, path = %path.display(), bytes = bytes.len(), "Saved document to file store");
        Ok(())
    }
}
