// ABOUTME: Archived record lookups by id and calendar date
// ABOUTME: Archived days are read-only apart from deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use chrono::NaiveDate;

use super::{ApiClient, AuthMode};
use crate::constants::api::{ARCHIVED_BY_DATE, ARCHIVED_RECORDS};
use crate::errors::AppResult;
use crate::models::ArchivedRecord;

impl ApiClient {
    /// Every archived day of the user
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a stored token, or any backend error
    pub async fn list_archived(&self) -> AppResult<Vec<ArchivedRecord>> {
        let url = self.endpoint(ARCHIVED_RECORDS, &[])?;
        self.get(url, AuthMode::Required).await
    }

    /// Archived day by record id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or any backend error
    pub async fn archived_by_id(&self, record_id: &str) -> AppResult<ArchivedRecord> {
        let url = self.endpoint(ARCHIVED_RECORDS, &[record_id])?;
        self.get(url, AuthMode::Required).await
    }

    /// Archived day by calendar date
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no day was archived on `date`
    pub async fn archived_by_date(&self, date: NaiveDate) -> AppResult<ArchivedRecord> {
        let day = date.format("%Y-%m-%d").to_string();
        let url = self.endpoint(ARCHIVED_BY_DATE, &[day.as_str()])?;
        self.get(url, AuthMode::Required).await
    }

    /// Delete an archived day
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or any backend error
    pub async fn delete_archived(&self, record_id: &str) -> AppResult<()> {
        let url = self.endpoint(ARCHIVED_RECORDS, &[record_id])?;
        self.delete(url).await
    }
}
