// ABOUTME: Configuration module for wellday-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

/// Engine configuration (energy, daily values, circadian, post-workout)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
