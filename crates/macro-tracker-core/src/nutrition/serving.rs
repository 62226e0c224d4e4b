// ABOUTME: Serving-size recalculation for logging inventory items into a day
// ABOUTME: Servings and quantity derive each other and scale macros with truncation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

//! Serving-size recalculation
//!
//! An inventory item states its macros for a reference quantity. When a
//! portion is entered either as a serving multiplier or as an absolute
//! quantity, the other value and all macros are derived proportionally:
//! `macro = trunc(base_macro * entered / reference)`. Absent carbs/fat stay
//! absent.

use super::NutritionTotals;
use crate::errors::{AppError, AppResult};
use crate::models::{InventoryItem, MeasureUnit, NewItemEntry, Quantity};

/// Slack added before truncating so that products like `100 * 0.29` do not
/// land one below the intended integer
const TRUNCATION_EPSILON: f64 = 1e-9;

/// How a portion was entered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PortionInput<U> {
    /// Multiplier of the item's reference quantity
    Servings(f64),
    /// Absolute amount, in any unit of the item's dimension
    Quantity(Quantity<U>),
}

/// A resolved portion of an inventory item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portion<U> {
    /// Serving multiplier
    pub servings: f64,
    /// Amount, in the unit it was entered in (reference unit for servings)
    pub quantity: Quantity<U>,
    /// Macros of this portion
    pub nutrition: NutritionTotals,
}

impl<U: MeasureUnit> Portion<U> {
    /// Entry payload logging this portion of `item`
    #[must_use]
    pub fn to_new_entry(&self, item: &InventoryItem<U>) -> NewItemEntry<U> {
        NewItemEntry {
            item_id: item.id.clone(),
            name: item.name.clone(),
            servings: self.servings,
            quantity: self.quantity,
            calories: self.nutrition.calories,
            protein: self.nutrition.protein,
            carbs: self.nutrition.carbs,
            fat: self.nutrition.fat,
        }
    }
}

/// Derives portions from an item's reference quantity and macros
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServingCalculator<U> {
    reference: Quantity<U>,
    base: NutritionTotals,
}

impl<U: MeasureUnit> ServingCalculator<U> {
    /// Create a calculator for explicit reference values
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if the reference quantity is not a
    /// positive finite number
    pub fn new(reference: Quantity<U>, base: NutritionTotals) -> AppResult<Self> {
        ensure_positive(reference.value, "reference quantity")?;
        Ok(Self { reference, base })
    }

    /// Create a calculator from an inventory item
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if the item's quantity is not positive
    pub fn for_item(item: &InventoryItem<U>) -> AppResult<Self> {
        Self::new(
            item.quantity,
            NutritionTotals::new(item.calories, item.protein, item.carbs, item.fat),
        )
    }

    /// Reference quantity of the item
    #[must_use]
    pub const fn reference(&self) -> Quantity<U> {
        self.reference
    }

    /// Resolve either kind of input
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for non-positive or non-finite input
    pub fn resolve(&self, input: PortionInput<U>) -> AppResult<Portion<U>> {
        match input {
            PortionInput::Servings(servings) => self.from_servings(servings),
            PortionInput::Quantity(quantity) => self.from_quantity(quantity),
        }
    }

    /// Portion for a serving multiplier
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for non-positive or non-finite servings
    pub fn from_servings(&self, servings: f64) -> AppResult<Portion<U>> {
        ensure_positive(servings, "servings")?;
        Ok(Portion {
            servings,
            quantity: Quantity::new(self.reference.value * servings, self.reference.unit),
            nutrition: self.scaled(servings),
        })
    }

    /// Portion for an absolute quantity
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a non-positive or non-finite quantity
    pub fn from_quantity(&self, quantity: Quantity<U>) -> AppResult<Portion<U>> {
        ensure_positive(quantity.value, "quantity")?;
        let servings = quantity.in_base_units() / self.reference.in_base_units();
        Ok(Portion {
            servings,
            quantity,
            nutrition: self.scaled(servings),
        })
    }

    fn scaled(&self, factor: f64) -> NutritionTotals {
        NutritionTotals {
            calories: scale(self.base.calories, factor),
            protein: scale(self.base.protein, factor),
            carbs: self.base.carbs.map(|carbs| scale(carbs, factor)),
            fat: self.base.fat.map(|fat| scale(fat, factor)),
        }
    }
}

fn scale(value: u32, factor: f64) -> u32 {
    let scaled = f64::from(value).mul_add(factor, TRUNCATION_EPSILON).trunc();
    if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        scaled as u32
    }
}

fn ensure_positive(value: f64, what: &str) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{what} must be a positive number, got {value}"
        )))
    }
}
