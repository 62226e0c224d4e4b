// ABOUTME: Unified error type and error codes for the MacroTracker client
// ABOUTME: Maps transport, backend, parsing, and local failures onto one AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

//! # Unified Error Handling
//!
//! Every fallible operation in the client returns [`AppResult`]. An
//! [`AppError`] carries an [`ErrorCode`] that callers branch on and a message
//! that is shown to the user verbatim. No error is retried automatically.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the client
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No credentials are stored; the request was never sent
    AuthRequired,
    /// The backend rejected the credentials or token
    AuthInvalid,
    /// Request data was rejected locally or by the backend
    InvalidInput,
    /// The addressed resource does not exist
    ResourceNotFound,
    /// The resource conflicts with an existing one
    ResourceAlreadyExists,
    /// Transport failure or unexpected backend status
    ExternalServiceError,
    /// Backend answered with a server error
    ExternalServiceUnavailable,
    /// Response body was missing fields or had the wrong types
    MalformedResponse,
    /// Configuration is missing or invalid
    ConfigError,
    /// Local credential storage failed
    StorageError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Map a non-success HTTP status returned by the backend to an error code
    #[must_use]
    pub const fn from_http_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::AuthInvalid,
            404 => Self::ResourceNotFound,
            400 | 422 => Self::InvalidInput,
            409 => Self::ResourceAlreadyExists,
            500..=599 => Self::ExternalServiceUnavailable,
            _ => Self::ExternalServiceError,
        }
    }

    /// User-facing description of this error class
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AuthRequired => "You are not logged in",
            Self::AuthInvalid => "The backend rejected your credentials",
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ExternalServiceError => "Could not reach the MacroTracker backend",
            Self::ExternalServiceUnavailable => "The MacroTracker backend is unavailable",
            Self::MalformedResponse => "The backend returned an unexpected response",
            Self::ConfigError => "Configuration error",
            Self::StorageError => "Local credential storage failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the client
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// HTTP status returned by the backend, if the error came from a response
    pub http_status: Option<u16>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            http_status: None,
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Attach the backend status code
    #[must_use]
    pub const fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// True when the caller has to log in (again) before retrying
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self.code, ErrorCode::AuthRequired | ErrorCode::AuthInvalid)
    }

    /// Build an error from a non-success backend response
    ///
    /// The backend reports failures as `{"message": "..."}`; any other body is
    /// surfaced as-is, truncated.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("HTTP {status}")
                } else {
                    trimmed.chars().take(MAX_BODY_IN_MESSAGE).collect()
                }
            });

        Self::new(ErrorCode::from_http_status(status), message).with_http_status(status)
    }
}

const MAX_BODY_IN_MESSAGE: usize = 200;

/// Convenience functions for creating common errors
impl AppError {
    /// No stored token
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "No session token stored, log in first")
    }

    /// Invalid authentication
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Response body did not match the expected shape
    pub fn malformed_response(context: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::MalformedResponse,
            format!("{context}: {reason}"),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Credential storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::MalformedResponse, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "http-errors")]
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        let code = if error.is_decode() {
            ErrorCode::MalformedResponse
        } else {
            ErrorCode::ExternalServiceError
        };
        let status = error.status().map(|s| s.as_u16());
        let mut app_error = Self::new(code, error.to_string()).with_source(error);
        app_error.http_status = status;
        app_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_from_http_status() {
        assert_eq!(ErrorCode::from_http_status(401), ErrorCode::AuthInvalid);
        assert_eq!(ErrorCode::from_http_status(403), ErrorCode::AuthInvalid);
        assert_eq!(ErrorCode::from_http_status(404), ErrorCode::ResourceNotFound);
        assert_eq!(ErrorCode::from_http_status(422), ErrorCode::InvalidInput);
        assert_eq!(ErrorCode::from_http_status(409), ErrorCode::ResourceAlreadyExists);
        assert_eq!(
            ErrorCode::from_http_status(503),
            ErrorCode::ExternalServiceUnavailable
        );
        assert_eq!(ErrorCode::from_http_status(418), ErrorCode::ExternalServiceError);
    }

    #[test]
    fn test_from_response_prefers_backend_message() {
        let error = AppError::from_response(404, r#"{"message":"Goal not found"}"#);
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.message, "Goal not found");
        assert_eq!(error.http_status, Some(404));
    }

    #[test]
    fn test_from_response_falls_back_to_body_or_status() {
        let error = AppError::from_response(500, "upstream exploded");
        assert_eq!(error.message, "upstream exploded");

        let error = AppError::from_response(502, "   ");
        assert_eq!(error.message, "HTTP 502");
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::auth_required();
        let text = error.to_string();
        assert!(text.starts_with("You are not logged in"));
        assert!(error.is_auth_error());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::MalformedResponse).unwrap();
        assert_eq!(json, "\"MALFORMED_RESPONSE\"");
    }
}
