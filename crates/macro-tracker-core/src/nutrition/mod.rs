// ABOUTME: Nutrition totals plus progress aggregation and serving-size recalculation
// ABOUTME: Pure functions only, all I/O lives in the client crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

mod progress;
mod serving;

pub use progress::{compute_progress, progress_ratio, Macro, MacroBreakdown, MacroProgress, ProgressReport};
pub use serving::{Portion, PortionInput, ServingCalculator};

/// Calories and macros of a day, an entry, or a portion
///
/// `carbs`/`fat` are `None` when no contributing value tracked them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Calories (kcal)
    pub calories: u32,
    /// Protein (g)
    pub protein: u32,
    /// Carbohydrates (g)
    pub carbs: Option<u32>,
    /// Fat (g)
    pub fat: Option<u32>,
}

impl NutritionTotals {
    /// Create totals
    #[must_use]
    pub const fn new(calories: u32, protein: u32, carbs: Option<u32>, fat: Option<u32>) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Carbs as a number, untracked counts as zero
    #[must_use]
    pub fn carbs_or_zero(&self) -> u32 {
        self.carbs.unwrap_or(0)
    }

    /// Fat as a number, untracked counts as zero
    #[must_use]
    pub fn fat_or_zero(&self) -> u32 {
        self.fat.unwrap_or(0)
    }
}

fn add_optional(lhs: Option<u32>, rhs: Option<u32>) -> Option<u32> {
    match (lhs, rhs) {
        (None, None) => None,
        (lhs, rhs) => Some(lhs.unwrap_or(0).saturating_add(rhs.unwrap_or(0))),
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories.saturating_add(rhs.calories),
            protein: self.protein.saturating_add(rhs.protein),
            carbs: add_optional(self.carbs, rhs.carbs),
            fat: add_optional(self.fat, rhs.fat),
        }
    }
}

impl Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
