// ABOUTME: Patch operations in the backend's {propName, value} list format
// ABOUTME: Typed update structs convert into operation lists covering only changed fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One property replacement in a `PATCH` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchOperation {
    /// Name of the property to replace (camelCase, as on the wire)
    pub prop_name: String,
    /// New value, `null` clears an optional property
    pub value: Value,
}

impl PatchOperation {
    /// Create an operation from any serializable value
    pub fn new(prop_name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            prop_name: prop_name.into(),
            value: value.into(),
        }
    }
}

/// Conversion of a typed update into a `PATCH` operation list
pub trait IntoPatch {
    /// Operations for every field that is set on the update
    fn into_patch(self) -> Vec<PatchOperation>;
}

/// Push an operation when `value` is set
pub(crate) fn push_if_set<T: Into<Value>>(
    ops: &mut Vec<PatchOperation>,
    prop_name: &str,
    value: Option<T>,
) {
    if let Some(value) = value {
        ops.push(PatchOperation::new(prop_name, value));
    }
}
