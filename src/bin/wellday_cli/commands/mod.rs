// ABOUTME: Re-exports command modules for wellday-cli
// ABOUTME: Body metrics, meal timing, and intake commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellday

pub mod body;
pub mod intake;
pub mod timing;
