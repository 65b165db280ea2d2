// ABOUTME: Timestamped physical profile snapshots with replacement-only updates
// ABOUTME: Answers latest, as-of lookups, and weight change between snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wellday_core::models::PhysicalProfile;
use wellday_core::AppResult;

/// A physical profile as it stood at a point in time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSnapshot {
    /// When this profile took effect
    pub recorded_at: DateTime<FixedOffset>,
    /// The profile
    pub physical: PhysicalProfile,
}

/// Ordered history of physical profile snapshots
///
/// Snapshots are never edited in place. Recording a new one at an instant
/// that already has a snapshot replaces it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ProfileHistory {
    snapshots: Vec<ProfileSnapshot>,
}

impl ProfileHistory {
    /// Empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Validate and insert a snapshot, keeping the history ordered by time
    ///
    /// # Errors
    ///
    /// Returns the profile's validation error when a present measurement is
    /// out of range.
    pub fn record(
        &mut self,
        recorded_at: DateTime<FixedOffset>,
        physical: PhysicalProfile,
    ) -> AppResult<()> {
        physical.validate()?;
        let snapshot = ProfileSnapshot {
            recorded_at,
            physical,
        };
        match self
            .snapshots
            .binary_search_by(|s| s.recorded_at.cmp(&recorded_at))
        {
            Ok(index) => self.snapshots[index] = snapshot,
            Err(index) => self.snapshots.insert(index, snapshot),
        }
        debug!(%recorded_at, count = self.snapshots.len(), "Recorded profile snapshot");
        Ok(())
    }

    /// Most recent snapshot
    #[must_use]
    pub fn latest(&self) -> Option<&ProfileSnapshot> {
        self.snapshots.last()
    }

    /// Snapshot in effect at `at`: the most recent one recorded at or before it
    #[must_use]
    pub fn at(&self, at: DateTime<FixedOffset>) -> Option<&ProfileSnapshot> {
        self.snapshots.iter().rev().find(|s| s.recorded_at <= at)
    }

    /// Latest weight minus the weight in effect at `since`, in kg
    ///
    /// `None` when either snapshot is missing or lacks a weight.
    #[must_use]
    pub fn weight_change_kg(&self, since: DateTime<FixedOffset>) -> Option<f64> {
        let current = self.latest()?.physical.weight_kg()?;
        let baseline = self.at(since)?.physical.weight_kg()?;
        Some(((current - baseline) * 100.0).round() / 100.0)
    }

    /// All snapshots, oldest first
    #[must_use]
    pub fn snapshots(&self) -> &[ProfileSnapshot] {
        &self.snapshots
    }

    /// Number of snapshots
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
