// ABOUTME: Authenticated REST client for the MacroTracker backend
// ABOUTME: Builds requests, attaches the bearer token, maps statuses, and decodes JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

//! Backend REST client
//!
//! One async method per backend operation, grouped by resource:
//!
//! - [`auth`]: signup, login, logout, profile and goal selection
//! - [`goals`]: goal CRUD
//! - [`inventory`]: food and drink inventories
//! - [`records`]: the current day and its entries
//! - [`history`]: archived days
//!
//! Every call is a single request with no retry. Non-success statuses become
//! an [`AppError`] built from the backend's `message`, and response bodies
//! that do not match the expected shape become `MalformedResponse` errors.

/// Signup, login, logout and the current user
pub mod auth;
/// Archived records
pub mod history;
/// Goals
pub mod goals;
/// Food and drink inventories
pub mod inventory;
/// The current day's record
pub mod records;

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::constants::api::REQUEST_ID_HEADER;
use crate::credentials::CredentialStore;
use crate::errors::{AppError, AppResult};
use crate::http_client::build_client;
use crate::logging::ClientLogger;
use crate::models::PatchOperation;

/// Whether a request needs the stored bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    /// Fail with `AuthRequired` before sending when no token is stored
    Required,
    /// Attach the token when one is stored
    Optional,
    /// Never attach a token
    Anonymous,
}

/// Typed client for the backend REST API
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    credentials: Arc<dyn CredentialStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the configured backend
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialStore>) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            http: build_client(config)?,
            base_url: config.api_url.clone(),
            credentials,
        })
    }

    /// Backend base URL
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Credential store the client reads its token from
    #[must_use]
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// True when a session token is stored
    ///
    /// # Errors
    ///
    /// Returns an error if the credential store cannot be read
    pub async fn has_session(&self) -> AppResult<bool> {
        Ok(self.credentials.load().await?.is_some())
    }

    /// Resolve `path` plus encoded id segments against the base URL
    ///
    /// Any path already present in the base URL is kept.
    fn endpoint(&self, path: &str, ids: &[&str]) -> AppResult<Url> {
        if ids.iter().any(|id| id.trim().is_empty()) {
            return Err(AppError::invalid_input("Identifier must not be empty"));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::config(format!("Base URL {} cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()))
            .extend(ids);
        Ok(url)
    }

    async fn bearer_token(&self, auth: AuthMode) -> AppResult<Option<String>> {
        if auth == AuthMode::Anonymous {
            return Ok(None);
        }
        match self.credentials.load().await? {
            Some(session) => Ok(Some(session.token)),
            None if auth == AuthMode::Required => Err(AppError::auth_required()),
            None => Ok(None),
        }
    }

    /// Send one request and return the body of a successful response
    async fn execute<B>(
        &self,
        method: Method,
        url: Url,
        auth: AuthMode,
        body: Option<&B>,
    ) -> AppResult<String>
    where
        B: Serialize + ?Sized,
    {
        let path = url.path().to_owned();
        let token = self.bearer_token(auth).await.inspect_err(|e| {
            ClientLogger::log_api_failure(method.as_str(), &path, e);
        })?;

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            let error = AppError::from(e);
            ClientLogger::log_api_failure(method.as_str(), &path, &error);
            error
        })?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        ClientLogger::log_api_call(method.as_str(), &path, status, elapsed_ms);

        if !(200..300).contains(&status) {
            let error = AppError::from_response(status, &text);
            ClientLogger::log_api_failure(method.as_str(), &path, &error);
            return Err(error);
        }
        Ok(text)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url, auth: AuthMode) -> AppResult<T> {
        let context = url.path().to_owned();
        let text = self.execute::<()>(Method::GET, url, auth, None).await?;
        decode(&context, &text)
    }

    async fn post<B, T>(&self, url: Url, auth: AuthMode, body: Option<&B>) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let context = url.path().to_owned();
        let text = self.execute(Method::POST, url, auth, body).await?;
        decode(&context, &text)
    }

    async fn patch<T: DeserializeOwned>(&self, url: Url, ops: &[PatchOperation]) -> AppResult<T> {
        if ops.is_empty() {
            return Err(AppError::invalid_input("Nothing to update"));
        }
        let context = url.path().to_owned();
        let text = self
            .execute(Method::PATCH, url, AuthMode::Required, Some(ops))
            .await?;
        decode(&context, &text)
    }

    /// `DELETE` whose response body is not needed
    async fn delete(&self, url: Url) -> AppResult<()> {
        self.execute::<()>(Method::DELETE, url, AuthMode::Required, None)
            .await
            .map(drop)
    }

    /// `DELETE` answered with a resource representation
    async fn delete_returning<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        let context = url.path().to_owned();
        let text = self
            .execute::<()>(Method::DELETE, url, AuthMode::Required, None)
            .await?;
        decode(&context, &text)
    }
}

/// Decode a whole response body, never returning partial results
fn decode<T: DeserializeOwned>(context: &str, body: &str) -> AppResult<T> {
    serde_json::from_str(body)
        .map_err(|e| AppError::malformed_response(context, &e).with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentialStore;
    use crate::errors::ErrorCode;

    fn client(base: &str) -> ApiClient {
        let config = ClientConfig::default().with_api_url(base).unwrap();
        ApiClient::new(&config, Arc::new(MemoryCredentialStore::default())).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_encodes_ids() {
        let api = client("https://api.example.com/v1/");
        let url = api.endpoint("/goals", &["a b/c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/goals/a%20b%2Fc");

        let api = client("http://localhost:3000");
        let url = api.endpoint("/dailyRecords/current/foodEntries", &[]).unwrap();
        assert_eq!(url.path(), "/dailyRecords/current/foodEntries");
    }

    #[test]
    fn test_endpoint_rejects_blank_ids() {
        let api = client("http://localhost:3000");
        let error = api.endpoint("/goals", &["  "]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_decode_reports_context() {
        let error = decode::<crate::models::Goal>("/goals/g1", r#"{"id":"g1"}"#).unwrap_err();
        assert_eq!(error.code, ErrorCode::MalformedResponse);
        assert!(error.message.starts_with("/goals/g1"));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let api = client("http://localhost:3000");
        let text = format!("{api:?}");
        assert!(text.contains("localhost:3000"));
        assert!(!text.contains("credentials"));
    }
}
