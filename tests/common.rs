// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides logging setup, mock backend clients, and JSON fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `macro_tracker`

use std::sync::{Arc, Once};

use macro_tracker::client::ApiClient;
use macro_tracker::config::ClientConfig;
use macro_tracker::credentials::{CredentialStore, MemoryCredentialStore};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Token used by pre-authenticated test clients
pub const TEST_TOKEN: &str = "test-token";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Client pointed at `base_url` using `store` for its token
pub fn client_with_store(base_url: &str, store: Arc<dyn CredentialStore>) -> ApiClient {
    init_test_logging();
    let config = ClientConfig::default().with_api_url(base_url).unwrap();
    ApiClient::new(&config, store).unwrap()
}

/// Client for the mock backend holding [`TEST_TOKEN`]
pub fn logged_in_client(server: &MockServer) -> ApiClient {
    client_with_store(
        &server.uri(),
        Arc::new(MemoryCredentialStore::with_token(TEST_TOKEN)),
    )
}

/// Client for the mock backend without a stored token
pub fn anonymous_client(server: &MockServer) -> ApiClient {
    client_with_store(&server.uri(), Arc::new(MemoryCredentialStore::default()))
}

/// Backend user
pub fn user_json(selected_goal_id: Option<&str>) -> Value {
    let mut user = json!({
        "id": "u1",
        "username": "ada",
        "email": "ada@example.com"
    });
    if let Some(goal_id) = selected_goal_id {
        user["selectedGoalId"] = json!(goal_id);
    }
    user
}

/// Backend goal
pub fn goal_json(id: &str, calories: u32, protein: u32, carbs: u32, fat: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Goal {id}"),
        "calorieGoal": calories,
        "proteinGoal": protein,
        "carbGoal": carbs,
        "fatGoal": fat
    })
}

/// Current-day record with one manual entry carrying the totals
pub fn record_json(id: &str, calories: u32, protein: u32, carbs: u32, fat: u32) -> Value {
    json!({
        "id": id,
        "userId": "u1",
        "date": "2024-03-02T00:00:00.000Z",
        "calories": calories,
        "protein": protein,
        "carbs": carbs,
        "fat": fat,
        "foodEntries": [],
        "drinkEntries": [],
        "manualEntries": [{
            "id": format!("{id}-m1"),
            "calories": calories,
            "protein": protein,
            "carbs": carbs,
            "fat": fat
        }]
    })
}

/// Empty record for a new day
pub fn empty_record_json(id: &str, date: &str) -> Value {
    json!({
        "id": id,
        "userId": "u1",
        "date": date,
        "calories": 0,
        "protein": 0,
        "carbs": 0,
        "fat": 0
    })
}

/// Archived version of [`record_json`]
pub fn archived_json(id: &str, date: &str) -> Value {
    let mut record = record_json(id, 1800, 120, 200, 60);
    record["date"] = json!(date);
    record["completedAt"] = json!(format!("{date}T23:00:00Z"));
    record["goal"] = json!({"name": "Cut", "calorieGoal": 2000, "proteinGoal": 150});
    record
}
