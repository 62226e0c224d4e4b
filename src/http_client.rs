// ABOUTME: HTTP client construction with configured timeouts and user agent
// ABOUTME: One pooled reqwest client per ApiClient, no process-wide singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use reqwest::{Client, ClientBuilder};

use crate::config::ClientConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};

/// `User-Agent` sent with every request
#[must_use]
pub fn user_agent() -> String {
    format!(
        "{}/{}",
        service_names::MACRO_TRACKER,
        env!("CARGO_PKG_VERSION")
    )
}

/// Build the HTTP client used for all backend calls
///
/// # Errors
///
/// Returns an internal error if the TLS backend cannot be initialized
pub fn build_client(config: &ClientConfig) -> AppResult<Client> {
    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(user_agent())
        .build()
        .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")).with_source(e))
}
