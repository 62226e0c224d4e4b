// ABOUTME: Main library entry point for the MacroTracker nutrition client
// ABOUTME: Provides the authenticated API client, credential storage, and day tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

#![deny(unsafe_code)]

//! # MacroTracker
//!
//! Typed client for the MacroTracker REST backend. Users authenticate, keep a
//! food and drink inventory, define calorie/macro goals, log what they consume
//! into the current day, and browse archived days.
//!
//! ## Layers
//!
//! - **client**: one async method per backend operation, bearer token taken
//!   from an explicit [`credentials::CredentialStore`]
//! - **tracker**: last-known-good state of the current day and the selected
//!   goal, with progress re-derived after every mutation
//! - **macro-tracker-core**: models, errors, and the pure nutrition math
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use macro_tracker::client::ApiClient;
//! use macro_tracker::config::ClientConfig;
//! use macro_tracker::credentials::MemoryCredentialStore;
//! use macro_tracker::tracker::DayTracker;
//!
//! # async fn run() -> macro_tracker::errors::AppResult<()> {
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config, Arc::new(MemoryCredentialStore::default()))?;
//! client.login("ada", "correct horse").await?;
//!
//! let tracker = DayTracker::new(client);
//! tracker.refresh().await?;
//! println!("{:?}", tracker.progress().await);
//! # Ok(())
//! # }
//! ```

/// Authenticated REST client for the backend
pub mod client;

/// Environment-based client configuration
pub mod config;

/// Session token storage
pub mod credentials;

/// Error types, re-exported from the core crate
pub mod errors;

/// Shared HTTP client construction
pub mod http_client;

/// Structured logging setup
pub mod logging;

/// Local state of the current day and selected goal
pub mod tracker;

/// Core data models, re-exported from the core crate
pub mod models {
    pub use macro_tracker_core::models::*;
}

/// Nutrition math, re-exported from the core crate
pub mod nutrition {
    pub use macro_tracker_core::nutrition::*;
}

/// Application constants, re-exported from the core crate
pub mod constants {
    pub use macro_tracker_core::constants::*;
}
