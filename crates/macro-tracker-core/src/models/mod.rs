// ABOUTME: Data models exchanged with the MacroTracker backend
// ABOUTME: Re-exports users, goals, inventory items, daily records, and patch operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

//! # Data Models
//!
//! Plain records mirroring the backend's JSON. The backend owns consistency;
//! these types only guarantee that a response which deserializes is complete.
//! Required fields that are absent or mistyped make deserialization fail, so
//! callers never see a partially populated record.
//!
//! ## Conventions
//!
//! - All JSON field names are camelCase.
//! - `carbs` and `fat` on items and entries are optional: absent means the
//!   value is not tracked, never zero.
//! - Goal targets of `0` disable that macro for progress display.

mod goal;
mod item;
mod patch;
mod quantity;
mod record;
mod user;

pub use goal::{Goal, GoalSnapshot, GoalTargets, GoalUpdate, NewGoal};
pub use item::{Drink, Food, InventoryItem, ItemUpdate, NewItem};
pub use patch::{IntoPatch, PatchOperation};
pub use quantity::{MeasureUnit, Quantity, VolumeUnit, WeightUnit};
pub use record::{
    ArchivedRecord, DailyRecord, DrinkEntry, EntryKind, FoodEntry, ItemEntry, ManualEntry,
    NewItemEntry, NewManualEntry,
};
pub use user::{AuthResponse, LoginRequest, SignupRequest, User};

/// Date (de)serialization accepting both `YYYY-MM-DD` and full RFC 3339 timestamps
///
/// The backend stores record dates as midnight timestamps; only the calendar
/// date is meaningful to the client.
pub(crate) mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, FORMAT).ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
    }
}
