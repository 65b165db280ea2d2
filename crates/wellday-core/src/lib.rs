// ABOUTME: Core types for the Wellday nutrition and circadian scoring engine
// ABOUTME: Foundation crate with error handling, domain models, units, and clock parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

#![deny(unsafe_code)]

//! # Wellday Core
//!
//! Foundation crate providing shared types for the Wellday engine. The
//! calculation crate and the application crate both build on these types,
//! so this crate is kept free of any scoring logic.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Profiles, food/exercise log entries, sleep preferences
//! - **units**: Weight and height units with metric normalization
//! - **time**: Lenient `HH:MM` clock-time parsing

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain models (profiles, logs, sleep preferences)
pub mod models;

/// Weight/height units and metric conversion
pub mod units;

/// Clock-of-day parsing and formatting
pub mod time;

pub use errors::{AppError, AppResult, ErrorCode};
