// ABOUTME: Goal CRUD against the backend
// ABOUTME: Updates are sent as property patch operations built from GoalUpdate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use super::{ApiClient, AuthMode};
use crate::constants::api::GOALS;
use crate::errors::{AppError, AppResult};
use crate::models::{Goal, GoalUpdate, IntoPatch, NewGoal};

impl ApiClient {
    /// All goals of the logged-in user
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a stored token, or any backend error
    pub async fn list_goals(&self) -> AppResult<Vec<Goal>> {
        let url = self.endpoint(GOALS, &[])?;
        self.get(url, AuthMode::Required).await
    }

    /// One goal by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or any backend error
    pub async fn get_goal(&self, goal_id: &str) -> AppResult<Goal> {
        let url = self.endpoint(GOALS, &[goal_id])?;
        self.get(url, AuthMode::Required).await
    }

    /// Create a goal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name, or any backend error
    pub async fn create_goal(&self, goal: &NewGoal) -> AppResult<Goal> {
        if goal.name.trim().is_empty() {
            return Err(AppError::invalid_input("Goal name must not be empty"));
        }
        let url = self.endpoint(GOALS, &[])?;
        self.post(url, AuthMode::Required, Some(goal)).await
    }

    /// Change the fields set in `update`, returning the stored goal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `update` sets nothing, or any backend error
    pub async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> AppResult<Goal> {
        let url = self.endpoint(GOALS, &[goal_id])?;
        self.patch(url, &update.into_patch()).await
    }

    /// Delete a goal
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or any backend error
    pub async fn delete_goal(&self, goal_id: &str) -> AppResult<()> {
        let url = self.endpoint(GOALS, &[goal_id])?;
        self.delete(url).await
    }
}
