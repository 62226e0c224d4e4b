// ABOUTME: Local state of the current day and the selected goal
// ABOUTME: Applies the backend's canonical record after every mutation and derives progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

//! Day tracker
//!
//! [`DayTracker`] keeps the last-known-good [`DailyRecord`] and the selected
//! [`Goal`]. Mutations go to the backend and the record it returns replaces
//! the local copy; nothing is merged locally. When a mutation fails the
//! tracker re-fetches the current record so local state matches whatever the
//! backend actually stored. Snapshots are applied in the order responses
//! arrive, and every applied snapshot bumps [`DayTracker::revision`].

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{
    ArchivedRecord, DailyRecord, Drink, EntryKind, Food, Goal, NewManualEntry, VolumeUnit,
    WeightUnit,
};
use crate::nutrition::{compute_progress, NutritionTotals, PortionInput, ProgressReport, ServingCalculator};

/// Point-in-time copy of the tracker state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerSnapshot {
    /// Current day, `None` before the first refresh
    pub record: Option<DailyRecord>,
    /// Selected goal
    pub goal: Option<Goal>,
    /// Number of snapshots applied so far
    pub revision: u64,
}

/// Current day and selected goal, kept in sync with the backend
#[derive(Debug)]
pub struct DayTracker {
    client: ApiClient,
    state: RwLock<TrackerSnapshot>,
}

impl DayTracker {
    /// Tracker with empty state; call [`Self::refresh`] to load it
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: RwLock::new(TrackerSnapshot::default()),
        }
    }

    /// Underlying API client
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Load the current record and the user's selected goal
    ///
    /// A selected goal that no longer exists is treated as no selection.
    ///
    /// # Errors
    ///
    /// Returns the first backend error; local state is left unchanged
    pub async fn refresh(&self) -> AppResult<TrackerSnapshot> {
        let record = self.client.current_record().await?;
        let user = self.client.current_user().await?;
        let goal = match user.selected_goal_id.as_deref() {
            Some(goal_id) => match self.client.get_goal(goal_id).await {
                Ok(goal) => Some(goal),
                Err(e) if e.code == ErrorCode::ResourceNotFound => {
                    warn!(goal_id, "Selected goal no longer exists");
                    None
                }
                Err(e) => return Err(e),
            },
            None => None,
        };

        let mut state = self.state.write().await;
        state.record = Some(record);
        state.goal = goal;
        state.revision += 1;
        debug!(revision = state.revision, "Tracker refreshed");
        Ok(state.clone())
    }

    /// Log a portion of a food
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive portion, or the backend error
    /// after re-syncing the current record
    pub async fn add_food(
        &self,
        food: &Food,
        portion: PortionInput<WeightUnit>,
    ) -> AppResult<DailyRecord> {
        let entry = ServingCalculator::for_item(food)?
            .resolve(portion)?
            .to_new_entry(food);
        let result = self.client.add_food_entry(&entry).await;
        self.settle(result).await
    }

    /// Log a portion of a drink
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive portion, or the backend error
    /// after re-syncing the current record
    pub async fn add_drink(
        &self,
        drink: &Drink,
        portion: PortionInput<VolumeUnit>,
    ) -> AppResult<DailyRecord> {
        let entry = ServingCalculator::for_item(drink)?
            .resolve(portion)?
            .to_new_entry(drink);
        let result = self.client.add_drink_entry(&entry).await;
        self.settle(result).await
    }

    /// Log freeform macros
    ///
    /// # Errors
    ///
    /// Returns the backend error after re-syncing the current record
    pub async fn add_manual(&self, entry: &NewManualEntry) -> AppResult<DailyRecord> {
        let result = self.client.add_manual_entry(entry).await;
        self.settle(result).await
    }

    /// Remove an entry from the current day
    ///
    /// # Errors
    ///
    /// Returns the backend error after re-syncing the current record
    pub async fn remove_entry(&self, kind: EntryKind, entry_id: &str) -> AppResult<DailyRecord> {
        let result = self.client.delete_entry(kind, entry_id).await;
        self.settle(result).await
    }

    /// Archive the current day and load the new one
    ///
    /// The archived record is returned even if loading the new day fails; the
    /// local record is then empty until the next refresh.
    ///
    /// # Errors
    ///
    /// Returns the backend error after re-syncing the current record
    pub async fn complete_day(&self) -> AppResult<ArchivedRecord> {
        let archived = match self.client.complete_day().await {
            Ok(archived) => archived,
            Err(e) => {
                self.resync(&e).await;
                return Err(e);
            }
        };

        match self.client.current_record().await {
            Ok(record) => {
                self.apply(Some(record)).await;
            }
            Err(e) => {
                warn!(error = %e, "Day archived but the new day could not be loaded");
                self.apply(None).await;
            }
        }
        Ok(archived)
    }

    /// Select a goal, or clear the selection with `None`
    ///
    /// # Errors
    ///
    /// Returns the backend error; the local selection is unchanged on failure
    pub async fn select_goal(&self, goal: Option<Goal>) -> AppResult<()> {
        self.client
            .select_goal(goal.as_ref().map(|g| g.id.as_str()))
            .await?;

        let mut state = self.state.write().await;
        state.goal = goal;
        state.revision += 1;
        Ok(())
    }

    /// Progress of the current day against the selected goal
    pub async fn progress(&self) -> ProgressReport {
        let state = self.state.read().await;
        let totals = state
            .record
            .as_ref()
            .map_or_else(NutritionTotals::default, DailyRecord::totals);
        compute_progress(state.goal.as_ref().map(|goal| &goal.targets), &totals)
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> TrackerSnapshot {
        self.state.read().await.clone()
    }

    /// Last-known-good current record
    pub async fn current_record(&self) -> Option<DailyRecord> {
        self.state.read().await.record.clone()
    }

    /// Selected goal
    pub async fn selected_goal(&self) -> Option<Goal> {
        self.state.read().await.goal.clone()
    }

    /// Number of snapshots applied so far
    pub async fn revision(&self) -> u64 {
        self.state.read().await.revision
    }

    async fn settle(&self, result: AppResult<DailyRecord>) -> AppResult<DailyRecord> {
        match result {
            Ok(record) => {
                self.apply(Some(record.clone())).await;
                Ok(record)
            }
            Err(e) => {
                self.resync(&e).await;
                Err(e)
            }
        }
    }

    /// Re-fetch the canonical record after a failed mutation, keeping the
    /// last-known-good record if that fails too
    ///
    /// Requests rejected before they were sent cannot have changed the day.
    async fn resync(&self, cause: &AppError) {
        let rejected_locally = cause.http_status.is_none()
            && matches!(cause.code, ErrorCode::AuthRequired | ErrorCode::InvalidInput);
        if rejected_locally {
            return;
        }
        match self.client.current_record().await {
            Ok(record) => self.apply(Some(record)).await,
            Err(e) => warn!(error = %e, "Could not re-sync current record, keeping last known state"),
        }
    }

    async fn apply(&self, record: Option<DailyRecord>) {
        let mut state = self.state.write().await;
        state.record = record;
        state.revision += 1;
        debug!(revision = state.revision, "Applied record snapshot");
    }
}
