// ABOUTME: Core types and pure logic for the MacroTracker nutrition client
// ABOUTME: Foundation crate with error handling, models, constants, and nutrition math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

#![deny(unsafe_code)]

//! # MacroTracker Core
//!
//! Foundation crate providing shared types and the side-effect free nutrition
//! logic of the MacroTracker client. Nothing in here performs I/O; the HTTP
//! layer and local state live in the `macro_tracker` crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Endpoint paths, environment keys, and unit factors
//! - **models**: Records exchanged with the backend (goals, foods, drinks, daily records)
//! - **nutrition**: Progress aggregation, serving-size recalculation, unit conversion

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Data models mirroring the backend's JSON records
pub mod models;

/// Progress aggregation and serving-size math
pub mod nutrition;
