// ABOUTME: Date selection helpers over stored log entries
// ABOUTME: Dates are the local calendar dates of each entry's own offset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

use chrono::NaiveDate;
use wellday::models::LogEntry;

/// Entries whose local date is `date`
pub fn on_date<T: LogEntry + Clone>(logs: &[T], date: NaiveDate) -> Vec<T> {
    logs.iter()
        .filter(|log| log.local_date() == date)
        .cloned()
        .collect()
}

/// Most recent local date among the entries
pub fn latest_date<T: LogEntry>(logs: &[T]) -> Option<NaiveDate> {
    logs.iter().map(LogEntry::local_date).max()
}

/// Entries on `date`, or on the most recent logged date when none is given
pub fn on_date_or_latest<T: LogEntry + Clone>(logs: &[T], date: Option<NaiveDate>) -> Vec<T> {
    date.or_else(|| latest_date(logs))
        .map_or_else(Vec::new, |date| on_date(logs, date))
}
