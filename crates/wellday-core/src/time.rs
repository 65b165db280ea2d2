// ABOUTME: Clock-of-day values parsed from "HH:MM" strings with a midnight fallback
// ABOUTME: Malformed components degrade to zero instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use chrono::Timelike;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minutes in a day
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A local wall-clock time without date or timezone
///
/// Serialized as an "HH:MM" string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Minute of hour (0-59)
    pub minute: u32,
}

impl ClockTime {
    /// Build a clock time, wrapping out-of-range values onto the 24h clock
    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self::from_minutes(hour * 60 + minute)
    }

    /// Build from minutes after midnight, wrapping past 24h
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self {
            hour: minutes / 60,
            minute: minutes % 60,
        }
    }

    /// Parse an "HH:MM" string leniently
    ///
    /// A missing colon yields 00:00. Each component that is non-numeric or
    /// out of range (hour > 23, minute > 59) is read as zero, so "07:xx"
    /// becomes 07:00 and "abc" becomes 00:00.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        let Some((hour, minute)) = value.trim().split_once(':') else {
            return Self::default();
        };
        let hour = hour.trim().parse::<u32>().ok().filter(|h| *h < 24);
        let minute = minute.trim().parse::<u32>().ok().filter(|m| *m < 60);
        Self {
            hour: hour.unwrap_or(0),
            minute: minute.unwrap_or(0),
        }
    }

    /// Clock time of a timestamp in the timestamp's own offset
    #[must_use]
    pub fn of<T: Timelike>(timestamp: &T) -> Self {
        Self {
            hour: timestamp.hour(),
            minute: timestamp.minute(),
        }
    }

    /// Minutes after midnight
    #[must_use]
    pub const fn minutes_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}
