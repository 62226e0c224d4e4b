// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Backend endpoint paths, environment keys, defaults, and unit factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// Backend REST endpoint paths
pub mod api;
/// Environment variable names and configuration defaults
pub mod env_config;
/// Unit conversion factors
pub mod units;

/// Service names used in logs and the `User-Agent` header
pub mod service_names {
    /// Name of the client as reported to the backend
    pub const MACRO_TRACKER: &str = "macro-tracker";
}
