// ABOUTME: Food and drink inventory items with per-reference-quantity macros
// ABOUTME: Generic over the unit dimension so foods only carry weights and drinks volumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::patch::{push_if_set, IntoPatch, PatchOperation};
use super::quantity::{MeasureUnit, Quantity, VolumeUnit, WeightUnit};

/// An inventory item: macros are given for `quantity` of the item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem<U> {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Reference quantity the macros refer to
    pub quantity: Quantity<U>,
    /// Calories (kcal) per reference quantity
    pub calories: u32,
    /// Protein (g) per reference quantity
    pub protein: u32,
    /// Carbohydrates (g), absent when not tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    /// Fat (g), absent when not tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
}

/// Food inventory item, measured by weight
pub type Food = InventoryItem<WeightUnit>;

/// Drink inventory item, measured by volume
pub type Drink = InventoryItem<VolumeUnit>;

/// Payload for `POST /foods` and `POST /drinks`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem<U> {
    /// Display name
    pub name: String,
    /// Reference quantity
    pub quantity: Quantity<U>,
    /// Calories per reference quantity
    pub calories: u32,
    /// Protein per reference quantity
    pub protein: u32,
    /// Carbohydrates per reference quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    /// Fat per reference quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
}

/// Partial edit of an inventory item
///
/// `carbs`/`fat` use a nested option: `Some(None)` clears the value.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemUpdate<U> {
    /// New name
    pub name: Option<String>,
    /// New reference quantity
    pub quantity: Option<Quantity<U>>,
    /// New calories
    pub calories: Option<u32>,
    /// New protein
    pub protein: Option<u32>,
    /// New carbs, `Some(None)` stops tracking
    pub carbs: Option<Option<u32>>,
    /// New fat, `Some(None)` stops tracking
    pub fat: Option<Option<u32>>,
}

impl<U> Default for ItemUpdate<U> {
    fn default() -> Self {
        Self {
            name: None,
            quantity: None,
            calories: None,
            protein: None,
            carbs: None,
            fat: None,
        }
    }
}

impl<U: MeasureUnit> IntoPatch for ItemUpdate<U> {
    fn into_patch(self) -> Vec<PatchOperation> {
        let mut ops = Vec::new();
        push_if_set(&mut ops, "name", self.name);
        if let Some(quantity) = self.quantity {
            ops.push(PatchOperation::new(
                "quantity",
                serde_json::to_value(quantity).unwrap_or(Value::Null),
            ));
        }
        push_if_set(&mut ops, "calories", self.calories);
        push_if_set(&mut ops, "protein", self.protein);
        push_if_set(&mut ops, "carbs", self.carbs);
        push_if_set(&mut ops, "fat", self.fat);
        ops
    }
}

impl<U> ItemUpdate<U> {
    /// True when no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_food_with_absent_fat_keeps_none() {
        let food: Food = serde_json::from_value(json!({
            "id": "f1",
            "name": "Rice",
            "quantity": {"value": 100, "unit": "g"},
            "calories": 130,
            "protein": 3,
            "carbs": 28
        }))
        .unwrap();

        assert_eq!(food.carbs, Some(28));
        assert_eq!(food.fat, None);
        assert_eq!(food.quantity.unit, WeightUnit::Grams);
    }

    #[test]
    fn test_food_rejects_volume_unit() {
        let result: Result<Food, _> = serde_json::from_value(json!({
            "id": "f1",
            "name": "Milk?",
            "quantity": {"value": 250, "unit": "mL"},
            "calories": 100,
            "protein": 8
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_drink_mistyped_calories_is_rejected() {
        let result: Result<Drink, _> = serde_json::from_value(json!({
            "id": "d1",
            "name": "Juice",
            "quantity": {"value": 250, "unit": "mL"},
            "calories": "lots",
            "protein": 0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_item_update_clears_carbs_with_null() {
        let update = ItemUpdate::<VolumeUnit> {
            carbs: Some(None),
            quantity: Some(Quantity::new(1.0, VolumeUnit::Liters)),
            ..ItemUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(update.into_patch()).unwrap(),
            json!([
                {"propName": "quantity", "value": {"value": 1.0, "unit": "L"}},
                {"propName": "carbs", "value": null}
            ])
        );
    }
}
