// ABOUTME: Calorie and macro goals plus their create and update payloads
// ABOUTME: A target of zero marks the macro as not tracked for progress display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use serde::{Deserialize, Deserializer, Serialize};

use super::patch::{push_if_set, IntoPatch, PatchOperation};

/// The four daily targets of a goal
///
/// Carb and fat targets are optional on the backend; an absent or `null`
/// target is read as `0`, which is the "not tracked" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTargets {
    /// Daily calories (kcal)
    pub calorie_goal: u32,
    /// Daily protein (g)
    pub protein_goal: u32,
    /// Daily carbohydrates (g), `0` when not tracked
    #[serde(default, deserialize_with = "null_as_untracked")]
    pub carb_goal: u32,
    /// Daily fat (g), `0` when not tracked
    #[serde(default, deserialize_with = "null_as_untracked")]
    pub fat_goal: u32,
}

fn null_as_untracked<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

/// A named set of daily targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Daily targets
    #[serde(flatten)]
    pub targets: GoalTargets,
}

/// Goal copy embedded in a daily record at the time it was logged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSnapshot {
    /// Name of the goal when the snapshot was taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Targets in effect for that day
    #[serde(flatten)]
    pub targets: GoalTargets,
}

impl From<&Goal> for GoalSnapshot {
    fn from(goal: &Goal) -> Self {
        Self {
            name: Some(goal.name.clone()),
            targets: goal.targets,
        }
    }
}

/// Payload for `POST /goals`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    /// Display name
    pub name: String,
    /// Daily targets
    #[serde(flatten)]
    pub targets: GoalTargets,
}

/// Partial edit of a goal; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalUpdate {
    /// New name
    pub name: Option<String>,
    /// New calorie target
    pub calorie_goal: Option<u32>,
    /// New protein target
    pub protein_goal: Option<u32>,
    /// New carb target (`0` stops tracking)
    pub carb_goal: Option<u32>,
    /// New fat target (`0` stops tracking)
    pub fat_goal: Option<u32>,
}

impl GoalUpdate {
    /// True when no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.calorie_goal.is_none()
            && self.protein_goal.is_none()
            && self.carb_goal.is_none()
            && self.fat_goal.is_none()
    }
}

impl IntoPatch for GoalUpdate {
    fn into_patch(self) -> Vec<PatchOperation> {
        let mut ops = Vec::new();
        push_if_set(&mut ops, "name", self.name);
        push_if_set(&mut ops, "calorieGoal", self.calorie_goal);
        push_if_set(&mut ops, "proteinGoal", self.protein_goal);
        push_if_set(&mut ops, "carbGoal", self.carb_goal);
        push_if_set(&mut ops, "fatGoal", self.fat_goal);
        ops
    }
}
