// ABOUTME: Command modules for the macro-tracker CLI
// ABOUTME: One module per top-level subcommand group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

pub mod auth;
pub mod day;
pub mod goals;
pub mod history;
pub mod inventory;
