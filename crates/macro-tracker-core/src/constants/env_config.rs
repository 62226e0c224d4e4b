// ABOUTME: Environment variable names and default values for client configuration
// ABOUTME: Environment-only configuration, no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

/// Backend base URL
pub const API_URL_VAR: &str = "MACRO_TRACKER_API_URL";
/// Request timeout in seconds
pub const TIMEOUT_VAR: &str = "MACRO_TRACKER_TIMEOUT_SECS";
/// Connect timeout in seconds
pub const CONNECT_TIMEOUT_VAR: &str = "MACRO_TRACKER_CONNECT_TIMEOUT_SECS";
/// Path of the credential file
pub const CREDENTIALS_PATH_VAR: &str = "MACRO_TRACKER_CREDENTIALS_PATH";

/// Default backend base URL for local development
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Directory under the platform config dir holding client state
pub const CONFIG_DIR_NAME: &str = "macro-tracker";
/// Credential file name inside [`CONFIG_DIR_NAME`]
pub const CREDENTIALS_FILE_NAME: &str = "credentials.json";
