// ABOUTME: Client configuration loaded from environment variables
// ABOUTME: Validates the backend URL, timeouts, and credential file location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::constants::env_config::{
    API_URL_VAR, CONFIG_DIR_NAME, CONNECT_TIMEOUT_VAR, CREDENTIALS_FILE_NAME,
    CREDENTIALS_PATH_VAR, DEFAULT_API_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
    TIMEOUT_VAR,
};
use crate::errors::{AppError, AppResult};

/// Settings for talking to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash semantics
    pub api_url: Url,
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
    /// File holding the session token
    pub credentials_path: PathBuf,
}

impl Default for ClientConfig {
    #[allow(clippy::expect_used)] // Safe: DEFAULT_API_URL is a valid literal
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            credentials_path: default_credentials_path(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is set but invalid
    pub fn from_env() -> AppResult<Self> {
        let api_url = match env::var(API_URL_VAR) {
            Ok(raw) => parse_api_url(&raw)?,
            Err(_) => {
                debug!("{API_URL_VAR} not set, using default: {DEFAULT_API_URL}");
                parse_api_url(DEFAULT_API_URL)?
            }
        };

        let timeout_secs: u64 = parse_var(TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS)?;
        let connect_timeout_secs: u64 =
            parse_var(CONNECT_TIMEOUT_VAR, DEFAULT_CONNECT_TIMEOUT_SECS)?;

        let credentials_path = env::var(CREDENTIALS_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_credentials_path());

        let config = Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            credentials_path,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the backend URL
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `raw` is not an http(s) URL
    pub fn with_api_url(mut self, raw: &str) -> AppResult<Self> {
        self.api_url = parse_api_url(raw)?;
        Ok(self)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a configuration error for zero timeouts
    pub fn validate(&self) -> AppResult<()> {
        if self.timeout.is_zero() {
            return Err(AppError::config(format!("{TIMEOUT_VAR} must be greater than 0")));
        }
        if self.connect_timeout.is_zero() {
            return Err(AppError::config(format!(
                "{CONNECT_TIMEOUT_VAR} must be greater than 0"
            )));
        }
        Ok(())
    }

    /// One-line summary safe to log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "api_url={} timeout={}s connect_timeout={}s credentials={}",
            self.api_url,
            self.timeout.as_secs(),
            self.connect_timeout.as_secs(),
            self.credentials_path.display()
        )
    }
}

fn parse_api_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::config(format!("{API_URL_VAR} is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::config(format!(
            "{API_URL_VAR} must use http or https, got '{other}'"
        ))),
    }
}

fn parse_var<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            warn!("Invalid {key} value '{raw}': {e}");
            AppError::config(format!("{key} must be a valid number: {e}"))
        }),
        Err(_) => {
            debug!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn default_credentials_path() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CREDENTIALS_FILE_NAME)
}
