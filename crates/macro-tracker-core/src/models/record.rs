// ABOUTME: Daily and archived nutrition records and the entries logged into them
// ABOUTME: Entry macros are snapshots taken when the entry was added
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::calendar_date;
use super::goal::GoalSnapshot;
use super::quantity::{Quantity, VolumeUnit, WeightUnit};
use crate::errors::AppError;
use crate::nutrition::NutritionTotals;

/// A logged portion of an inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEntry<U> {
    /// Backend identifier of the entry
    pub id: String,
    /// Inventory item the entry was logged from
    pub item_id: String,
    /// Item name at the time of logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Serving multiplier relative to the item's reference quantity
    pub servings: f64,
    /// Amount consumed
    pub quantity: Quantity<U>,
    /// Calories consumed
    pub calories: u32,
    /// Protein consumed
    pub protein: u32,
    /// Carbohydrates consumed, absent when the item does not track them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    /// Fat consumed, absent when the item does not track it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
}

/// Food logged into a day
pub type FoodEntry = ItemEntry<WeightUnit>;

/// Drink logged into a day
pub type DrinkEntry = ItemEntry<VolumeUnit>;

/// Freeform macros logged without an inventory item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualEntry {
    /// Backend identifier of the entry
    pub id: String,
    /// Optional label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Calories
    pub calories: u32,
    /// Protein
    pub protein: u32,
    /// Carbohydrates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    /// Fat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
}

/// Payload adding a food or drink entry to the current day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemEntry<U> {
    /// Inventory item being logged
    pub item_id: String,
    /// Item name snapshot
    pub name: String,
    /// Serving multiplier
    pub servings: f64,
    /// Amount consumed
    pub quantity: Quantity<U>,
    /// Calories consumed
    pub calories: u32,
    /// Protein consumed
    pub protein: u32,
    /// Carbohydrates consumed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    /// Fat consumed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
}

/// Payload adding a manual entry to the current day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewManualEntry {
    /// Optional label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Calories
    pub calories: u32,
    /// Protein
    pub protein: u32,
    /// Carbohydrates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    /// Fat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
}

/// Kind of entry inside a daily record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Logged from the food inventory
    Food,
    /// Logged from the drink inventory
    Drink,
    /// Freeform macros
    Manual,
}

impl EntryKind {
    /// Collection segment under `/dailyRecords/current`
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Food => "foodEntries",
            Self::Drink => "drinkEntries",
            Self::Manual => "manualEntries",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Food => "food",
            Self::Drink => "drink",
            Self::Manual => "manual",
        })
    }
}

impl FromStr for EntryKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "drink" => Ok(Self::Drink),
            "manual" => Ok(Self::Manual),
            other => Err(AppError::invalid_input(format!(
                "Unknown entry kind '{other}' (expected food, drink or manual)"
            ))),
        }
    }
}

/// Nutrition log of one day
///
/// While the day is active this is the user's current record; once completed
/// the backend serves it as an [`ArchivedRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// Backend identifier
    pub id: String,
    /// Owner
    pub user_id: String,
    /// Calendar day the record covers
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    /// Total calories, as computed by the backend
    pub calories: u32,
    /// Total protein, as computed by the backend
    pub protein: u32,
    /// Total carbohydrates, `null` when nothing logged tracks them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    /// Total fat, `null` when nothing logged tracks it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
    /// Foods logged today
    #[serde(default)]
    pub food_entries: Vec<FoodEntry>,
    /// Drinks logged today
    #[serde(default)]
    pub drink_entries: Vec<DrinkEntry>,
    /// Freeform entries logged today
    #[serde(default)]
    pub manual_entries: Vec<ManualEntry>,
    /// Goal in effect when the day was logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalSnapshot>,
}

impl DailyRecord {
    /// The backend's canonical totals for the day
    #[must_use]
    pub const fn totals(&self) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }

    /// Totals re-summed from every entry of the day
    #[must_use]
    pub fn entry_totals(&self) -> NutritionTotals {
        let food = self
            .food_entries
            .iter()
            .map(|e| NutritionTotals::new(e.calories, e.protein, e.carbs, e.fat));
        let drink = self
            .drink_entries
            .iter()
            .map(|e| NutritionTotals::new(e.calories, e.protein, e.carbs, e.fat));
        let manual = self
            .manual_entries
            .iter()
            .map(|e| NutritionTotals::new(e.calories, e.protein, e.carbs, e.fat));

        food.chain(drink).chain(manual).sum()
    }

    /// Number of entries of all kinds
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.food_entries.len() + self.drink_entries.len() + self.manual_entries.len()
    }

    /// True when an entry of `kind` with `entry_id` exists
    #[must_use]
    pub fn contains_entry(&self, kind: EntryKind, entry_id: &str) -> bool {
        match kind {
            EntryKind::Food => self.food_entries.iter().any(|e| e.id == entry_id),
            EntryKind::Drink => self.drink_entries.iter().any(|e| e.id == entry_id),
            EntryKind::Manual => self.manual_entries.iter().any(|e| e.id == entry_id),
        }
    }
}

/// A finalized day, read-only from the client's point of view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedRecord {
    /// The record as it was when the day was completed
    #[serde(flatten)]
    pub record: DailyRecord,
    /// When the day was completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ArchivedRecord {
    /// Backend identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Calendar day
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.record.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> serde_json::Value {
        json!({
            "id": "r1",
            "userId": "u1",
            "date": "2024-03-02T00:00:00.000Z",
            "calories": 650,
            "protein": 40,
            "carbs": 70,
            "fat": 12,
            "foodEntries": [{
                "id": "e1",
                "itemId": "f1",
                "servings": 2.0,
                "quantity": {"value": 200, "unit": "g"},
                "calories": 400,
                "protein": 20,
                "carbs": 50
            }],
            "drinkEntries": [{
                "id": "e2",
                "itemId": "d1",
                "servings": 1.0,
                "quantity": {"value": 250, "unit": "mL"},
                "calories": 150,
                "protein": 10,
                "carbs": 20,
                "fat": 5
            }],
            "manualEntries": [{
                "id": "e3",
                "calories": 100,
                "protein": 10,
                "fat": 7
            }]
        })
    }

    #[test]
    fn test_record_accepts_timestamp_date() {
        let record: DailyRecord = serde_json::from_value(sample_record()).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(record.entry_count(), 3);
        assert!(record.contains_entry(EntryKind::Manual, "e3"));
        assert!(!record.contains_entry(EntryKind::Food, "e3"));
    }

    #[test]
    fn test_entry_totals_match_backend_totals() {
        let record: DailyRecord = serde_json::from_value(sample_record()).unwrap();
        let summed = record.entry_totals();
        assert_eq!(summed.calories, 650);
        assert_eq!(summed.protein, 40);
        assert_eq!(summed.carbs, Some(70));
        assert_eq!(summed.fat, Some(12));
    }

    #[test]
    fn test_record_without_entries_defaults_to_empty() {
        let record: DailyRecord = serde_json::from_value(json!({
            "id": "r1",
            "userId": "u1",
            "date": "2024-03-02",
            "calories": 0,
            "protein": 0
        }))
        .unwrap();
        assert_eq!(record.entry_count(), 0);
        assert_eq!(record.carbs, None);
        assert!(record.goal.is_none());
    }

    #[test]
    fn test_null_carbs_and_fat_pass_through_to_totals() {
        let mut value = sample_record();
        value["carbs"] = json!(null);
        value["fat"] = json!(null);
        value["goal"] = json!({"calorieGoal": 2000, "proteinGoal": 150, "carbGoal": null});

        let record: DailyRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.carbs, None);
        let totals = record.totals();
        assert_eq!(totals.calories, 650);
        assert_eq!(totals.carbs, None);
        assert_eq!(totals.fat, None);
        assert_eq!(record.goal.unwrap().targets.carb_goal, 0);
    }

    #[test]
    fn test_record_missing_user_is_rejected() {
        let mut value = sample_record();
        value.as_object_mut().unwrap().remove("userId");
        assert!(serde_json::from_value::<DailyRecord>(value).is_err());
    }

    #[test]
    fn test_archived_record_flattens_day() {
        let mut value = sample_record();
        value["completedAt"] = json!("2024-03-02T23:10:00Z");
        value["goal"] = json!({"name": "Cut", "calorieGoal": 2000, "proteinGoal": 150});
        let archived: ArchivedRecord = serde_json::from_value(value).unwrap();
        assert_eq!(archived.id(), "r1");
        assert!(archived.completed_at.is_some());
        let goal = archived.record.goal.unwrap();
        assert_eq!(goal.targets.calorie_goal, 2000);
        assert_eq!(goal.targets.fat_goal, 0);
    }

    #[test]
    fn test_entry_kind_round_trip_from_cli_text() {
        assert_eq!("Drink".parse::<EntryKind>().unwrap(), EntryKind::Drink);
        assert_eq!(EntryKind::Manual.path_segment(), "manualEntries");
        assert!("snack".parse::<EntryKind>().is_err());
    }
}
