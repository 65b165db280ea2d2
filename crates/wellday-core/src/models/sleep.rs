// ABOUTME: Sleep timing preferences used as parameters for meal timing analysis
// ABOUTME: Clock strings are kept as entered and parsed leniently on use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use crate::time::ClockTime;
use serde::{Deserialize, Serialize};

/// Target bed/wake times and desired gap between the last meal and sleep
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SleepPreferences {
    /// Target bedtime, "HH:MM" local
    pub target_sleep_time: String,
    /// Target wake time, "HH:MM" local
    pub target_wake_time: String,
    /// Desired minutes between the last meal and bedtime
    #[serde(default = "default_digestive_buffer")]
    pub desired_digestive_buffer_minutes: u32,
}

const fn default_digestive_buffer() -> u32 {
    180
}

impl Default for SleepPreferences {
    fn default() -> Self {
        Self {
            target_sleep_time: "22:00".to_owned(),
            target_wake_time: "07:00".to_owned(),
            desired_digestive_buffer_minutes: default_digestive_buffer(),
        }
    }
}

impl SleepPreferences {
    /// Preferences with the given bedtime and defaults elsewhere
    #[must_use]
    pub fn with_sleep_time(target_sleep_time: impl Into<String>) -> Self {
        Self {
            target_sleep_time: target_sleep_time.into(),
            ..Self::default()
        }
    }

    /// Parsed bedtime (00:00 if malformed)
    #[must_use]
    pub fn sleep_clock(&self) -> ClockTime {
        ClockTime::parse_lenient(&self.target_sleep_time)
    }

    /// Parsed wake time (00:00 if malformed)
    #[must_use]
    pub fn wake_clock(&self) -> ClockTime {
        ClockTime::parse_lenient(&self.target_wake_time)
    }
}
