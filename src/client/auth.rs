// ABOUTME: Account operations: signup, login, logout, profile, and goal selection
// ABOUTME: Successful authentication stores the returned token in the credential store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use serde_json::Value;
use tracing::info;

use super::{ApiClient, AuthMode};
use crate::constants::api::{CURRENT_USER, LOGIN, SELECTED_GOAL_PROP, SIGNUP};
use crate::credentials::StoredSession;
use crate::errors::{AppError, AppResult};
use crate::logging::ClientLogger;
use crate::models::{AuthResponse, LoginRequest, PatchOperation, SignupRequest, User};

impl ApiClient {
    /// Create an account and store its session token
    ///
    /// # Errors
    ///
    /// Returns an error if a field is blank, the backend rejects the signup,
    /// or the token cannot be stored
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> AppResult<User> {
        require_field("username", username)?;
        require_field("email", email)?;
        require_field("password", password)?;

        let request = SignupRequest {
            username: username.trim().to_owned(),
            email: email.trim().to_owned(),
            password: password.to_owned(),
        };
        let url = self.endpoint(SIGNUP, &[])?;
        let result = self
            .post::<_, AuthResponse>(url, AuthMode::Anonymous, Some(&request))
            .await;
        ClientLogger::log_auth_event(&request.username, "signup", result.is_ok());
        self.store_session(result?).await
    }

    /// Log in with a username (or email) and password
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` when the backend rejects the credentials, or a
    /// storage error if the token cannot be saved
    pub async fn login(&self, identifier: &str, password: &str) -> AppResult<User> {
        require_field("username", identifier)?;
        require_field("password", password)?;

        let request = LoginRequest {
            username: identifier.trim().to_owned(),
            password: password.to_owned(),
        };
        let url = self.endpoint(LOGIN, &[])?;
        let result = self
            .post::<_, AuthResponse>(url, AuthMode::Anonymous, Some(&request))
            .await;
        ClientLogger::log_auth_event(&request.username, "login", result.is_ok());
        self.store_session(result?).await
    }

    /// Forget the stored session; the backend is not contacted
    ///
    /// # Errors
    ///
    /// Returns a storage error if the credential store cannot be cleared
    pub async fn logout(&self) -> AppResult<()> {
        self.credentials.clear().await?;
        info!("Session cleared");
        Ok(())
    }

    /// Profile of the logged-in user
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a stored token, or any backend error
    pub async fn current_user(&self) -> AppResult<User> {
        let url = self.endpoint(CURRENT_USER, &[])?;
        self.get(url, AuthMode::Required).await
    }

    /// Persist the selected goal on the user, `None` clears the selection
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a stored token, or any backend error
    pub async fn select_goal(&self, goal_id: Option<&str>) -> AppResult<User> {
        if goal_id.is_some_and(|id| id.trim().is_empty()) {
            return Err(AppError::invalid_input("Goal id must not be empty"));
        }
        let value = goal_id.map_or(Value::Null, |id| Value::String(id.to_owned()));
        let url = self.endpoint(CURRENT_USER, &[])?;
        self.patch(url, &[PatchOperation::new(SELECTED_GOAL_PROP, value)])
            .await
    }

    async fn store_session(&self, auth: AuthResponse) -> AppResult<User> {
        if auth.token.is_empty() {
            return Err(AppError::malformed_response(
                "authentication response",
                "empty token",
            ));
        }
        self.credentials
            .save(&StoredSession::new(auth.token, &auth.user))
            .await?;
        Ok(auth.user)
    }
}

fn require_field(name: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_input(format!("{name} must not be empty")));
    }
    Ok(())
}
