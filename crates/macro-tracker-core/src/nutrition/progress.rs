// ABOUTME: Progress of a day's totals against the selected goal
// ABOUTME: Ratios are clamped to 1.0 and macros with a zero target are excluded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

//! Nutrition progress aggregation
//!
//! For each of calories, protein, carbs and fat the ratio is
//! `min(total / target, 1.0)`. A target of `0` means the macro is not
//! tracked: it is reported as [`MacroProgress::Untracked`] and never divided.
//! Without a selected goal the report is [`ProgressReport::NoGoal`], which is
//! a normal state and distinct from zero progress.

use std::fmt;

use serde::Serialize;

use super::NutritionTotals;
use crate::models::GoalTargets;

/// The four quantities tracked against a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Macro {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbs,
    /// Fat (g)
    Fat,
}

impl Macro {
    /// All macros in display order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];

    /// Unit suffix for display
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein | Self::Carbs | Self::Fat => "g",
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Carbs => "Carbs",
            Self::Fat => "Fat",
        })
    }
}

/// Progress of a single macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MacroProgress {
    /// The goal sets a positive target for this macro
    Tracked {
        /// Amount consumed
        current: u32,
        /// Goal target
        target: u32,
        /// `min(current / target, 1.0)`
        ratio: f64,
    },
    /// The goal target is zero, the macro is hidden
    Untracked,
}

impl MacroProgress {
    /// Ratio when tracked
    #[must_use]
    pub const fn ratio(&self) -> Option<f64> {
        match self {
            Self::Tracked { ratio, .. } => Some(*ratio),
            Self::Untracked => None,
        }
    }

    /// True when the target is reached or exceeded
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Tracked { current, target, .. } if current >= target)
    }
}

/// Progress of all four macros against one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroBreakdown {
    /// Calorie progress
    pub calories: MacroProgress,
    /// Protein progress
    pub protein: MacroProgress,
    /// Carb progress
    pub carbs: MacroProgress,
    /// Fat progress
    pub fat: MacroProgress,
}

impl MacroBreakdown {
    /// Progress of one macro
    #[must_use]
    pub const fn get(&self, which: Macro) -> MacroProgress {
        match which {
            Macro::Calories => self.calories,
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    /// Tracked macros in display order
    pub fn tracked(&self) -> impl Iterator<Item = (Macro, MacroProgress)> + '_ {
        Macro::ALL
            .into_iter()
            .map(|which| (which, self.get(which)))
            .filter(|(_, progress)| !matches!(progress, MacroProgress::Untracked))
    }
}

/// Result of aggregating a day against the selected goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", content = "macros", rename_all = "snake_case")]
pub enum ProgressReport {
    /// No goal is selected
    NoGoal,
    /// Progress against the selected goal
    Goal(MacroBreakdown),
}

impl ProgressReport {
    /// Breakdown when a goal is selected
    #[must_use]
    pub const fn breakdown(&self) -> Option<&MacroBreakdown> {
        match self {
            Self::NoGoal => None,
            Self::Goal(breakdown) => Some(breakdown),
        }
    }
}

/// `min(total / target, 1.0)`, or `None` when `target` is zero
#[must_use]
pub fn progress_ratio(total: u32, target: u32) -> Option<f64> {
    if target == 0 {
        return None;
    }
    Some((f64::from(total) / f64::from(target)).min(1.0))
}

fn macro_progress(current: u32, target: u32) -> MacroProgress {
    progress_ratio(current, target).map_or(MacroProgress::Untracked, |ratio| {
        MacroProgress::Tracked {
            current,
            target,
            ratio,
        }
    })
}

/// Aggregate a day's totals against an optional goal
#[must_use]
pub fn compute_progress(goal: Option<&GoalTargets>, totals: &NutritionTotals) -> ProgressReport {
    let Some(goal) = goal else {
        return ProgressReport::NoGoal;
    };

    ProgressReport::Goal(MacroBreakdown {
        calories: macro_progress(totals.calories, goal.calorie_goal),
        protein: macro_progress(totals.protein, goal.protein_goal),
        carbs: macro_progress(totals.carbs_or_zero(), goal.carb_goal),
        fat: macro_progress(totals.fat_or_zero(), goal.fat_goal),
    })
}
