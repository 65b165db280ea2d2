// ABOUTME: In-memory key/value store backed by a sharded concurrent map
// ABOUTME: Clones share the same map; used by tests and as a scratch store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use super::{validate_key, KeyValueStore};
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use wellday_core::AppResult;

/// In-memory store
///
/// `DashMap` shards its locks, so concurrent loads and saves on different
/// keys do not contend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Arc<DashMap<String, Value>>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn load(&self, key: &str) -> AppResult<Option<Value>> {
        validate_key(key)?;
        Ok(self.documents.get(key).map(|entry| entry.value().clone()))
    }

    async fn save(&self, key: &str, value: Value) -> AppResult<()> {
        validate_key(key)?;
        self.documents.insert(key.to_owned(), value);
        debug!(key, "Saved document to memory store");
        Ok(())
    }
}
