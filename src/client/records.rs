// ABOUTME: Current-day record operations: fetch, add and delete entries, complete the day
// ABOUTME: Every mutation returns the backend's updated canonical record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use serde::Serialize;

use super::{ApiClient, AuthMode};
use crate::constants::api::{COMPLETE_DAY, CURRENT_RECORD};
use crate::errors::{AppError, AppResult};
use crate::models::{
    ArchivedRecord, DailyRecord, EntryKind, NewItemEntry, NewManualEntry, VolumeUnit, WeightUnit,
};

impl ApiClient {
    /// Record of the user's current day
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a stored token, or any backend error
    pub async fn current_record(&self) -> AppResult<DailyRecord> {
        let url = self.endpoint(CURRENT_RECORD, &[])?;
        self.get(url, AuthMode::Required).await
    }

    /// Log a food portion into the current day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-positive servings, or any backend error
    pub async fn add_food_entry(&self, entry: &NewItemEntry<WeightUnit>) -> AppResult<DailyRecord> {
        check_servings(entry.servings)?;
        self.add_entry(EntryKind::Food, entry).await
    }

    /// Log a drink portion into the current day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-positive servings, or any backend error
    pub async fn add_drink_entry(&self, entry: &NewItemEntry<VolumeUnit>) -> AppResult<DailyRecord> {
        check_servings(entry.servings)?;
        self.add_entry(EntryKind::Drink, entry).await
    }

    /// Log freeform macros into the current day
    ///
    /// # Errors
    ///
    /// Returns any backend error
    pub async fn add_manual_entry(&self, entry: &NewManualEntry) -> AppResult<DailyRecord> {
        self.add_entry(EntryKind::Manual, entry).await
    }

    /// Remove an entry from the current day
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown entry, or any backend error
    pub async fn delete_entry(&self, kind: EntryKind, entry_id: &str) -> AppResult<DailyRecord> {
        let url = self.endpoint(&entries_path(kind), &[entry_id])?;
        self.delete_returning(url).await
    }

    /// Finalize the current day into the archive
    ///
    /// The backend starts a fresh current record afterwards.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a stored token, or any backend error
    pub async fn complete_day(&self) -> AppResult<ArchivedRecord> {
        let url = self.endpoint(COMPLETE_DAY, &[])?;
        self.post::<(), _>(url, AuthMode::Required, None).await
    }

    async fn add_entry<B: Serialize + Sync>(&self, kind: EntryKind, entry: &B) -> AppResult<DailyRecord> {
        let url = self.endpoint(&entries_path(kind), &[])?;
        self.post(url, AuthMode::Required, Some(entry)).await
    }
}

fn entries_path(kind: EntryKind) -> String {
    format!("{CURRENT_RECORD}/{}", kind.path_segment())
}

fn check_servings(servings: f64) -> AppResult<()> {
    if servings.is_finite() && servings > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "Servings must be a positive number, got {servings}"
        )))
    }
}
