// ABOUTME: Re-exports helper modules for wellday-cli
// ABOUTME: JSON output, date filtering, and unit system arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

pub mod logs;
pub mod output;
pub mod units;
