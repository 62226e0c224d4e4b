// ABOUTME: Unit conversion constants for inventory quantities
// ABOUTME: Weight factors normalize to grams, volume factors to millilitres
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

/// Grams per kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;
/// Grams per avoirdupois ounce
pub const GRAMS_PER_OZ: f64 = 28.35;
/// Grams per milligram
pub const GRAMS_PER_MG: f64 = 0.001;

/// Millilitres per litre
pub const ML_PER_L: f64 = 1000.0;
/// Millilitres per US cup
pub const ML_PER_CUP: f64 = 240.0;
/// Millilitres per US fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.57;
