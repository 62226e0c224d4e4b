// ABOUTME: REST endpoint paths of the MacroTracker backend
// ABOUTME: Central list so request builders never hand-format resource roots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

/// `POST` credentials, returns a session token
pub const LOGIN: &str = "/users/login";
/// `POST` new account, returns a session token
pub const SIGNUP: &str = "/users/signup";
/// Authenticated user profile
pub const CURRENT_USER: &str = "/users/me";

/// Goal collection
pub const GOALS: &str = "/goals";
/// Food inventory collection
pub const FOODS: &str = "/foods";
/// Drink inventory collection
pub const DRINKS: &str = "/drinks";

/// Record for the user's current day
pub const CURRENT_RECORD: &str = "/dailyRecords/current";
/// Finalizes the current day into an archived record
pub const COMPLETE_DAY: &str = "/dailyRecords/current/complete";

/// Finalized historical records
pub const ARCHIVED_RECORDS: &str = "/archivedRecords";
/// Archived record lookup by calendar date
pub const ARCHIVED_BY_DATE: &str = "/archivedRecords/date";

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Patch property naming the user's selected goal
pub const SELECTED_GOAL_PROP: &str = "selectedGoalId";
