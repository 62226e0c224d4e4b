// ABOUTME: User profile and authentication payloads
// ABOUTME: Login and signup requests and the token-bearing auth response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use serde::{Deserialize, Serialize};

/// Authenticated user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier
    pub id: String,
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Goal used for progress display, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_goal_id: Option<String>,
}

/// Payload for `POST /users/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Username or email
    pub username: String,
    /// Plain-text password, sent over TLS only
    pub password: String,
}

/// Payload for `POST /users/signup`
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Response of login and signup
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    /// The authenticated user
    pub user: User,
}
