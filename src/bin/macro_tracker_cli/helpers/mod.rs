// ABOUTME: Helper modules for the macro-tracker CLI
// ABOUTME: Provides display formatting for records, goals and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

pub mod display;
