// ABOUTME: Configuration management module for the MacroTracker client
// ABOUTME: Environment-only configuration for backend URL, timeouts, and credential path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors
//! Configuration module
//!
//! - **Environment**: client configuration from environment variables, with
//!   command-line overrides applied on top by the binary

/// Client configuration from environment variables
pub mod environment;

pub use environment::ClientConfig;
