// ABOUTME: Error handling re-exports for the MacroTracker client crate
// ABOUTME: AppError and ErrorCode are defined in macro-tracker-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

pub use macro_tracker_core::errors::{AppError, AppResult, ErrorCode};
