// ABOUTME: Quantities of inventory items with typed weight and volume units
// ABOUTME: Converts between units of the same dimension via grams or millilitres
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::units::{
    GRAMS_PER_KG, GRAMS_PER_MG, GRAMS_PER_OZ, ML_PER_CUP, ML_PER_FL_OZ, ML_PER_L,
};
use crate::errors::AppError;

/// A unit of one physical dimension (weight or volume)
pub trait MeasureUnit:
    Copy + PartialEq + fmt::Debug + fmt::Display + FromStr + Serialize + DeserializeOwned
{
    /// How many base units (grams or millilitres) one of this unit holds
    fn base_factor(self) -> f64;
}

/// Weight units accepted for foods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Grams
    #[serde(rename = "g")]
    Grams,
    /// Kilograms
    #[serde(rename = "kg")]
    Kilograms,
    /// Avoirdupois ounces
    #[serde(rename = "oz")]
    Ounces,
    /// Milligrams
    #[serde(rename = "mg")]
    Milligrams,
}

impl MeasureUnit for WeightUnit {
    fn base_factor(self) -> f64 {
        match self {
            Self::Grams => 1.0,
            Self::Kilograms => GRAMS_PER_KG,
            Self::Ounces => GRAMS_PER_OZ,
            Self::Milligrams => GRAMS_PER_MG,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Grams => "g",
            Self::Kilograms => "kg",
            Self::Ounces => "oz",
            Self::Milligrams => "mg",
        })
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(Self::Grams),
            "kg" | "kilogram" | "kilograms" => Ok(Self::Kilograms),
            "oz" | "ounce" | "ounces" => Ok(Self::Ounces),
            "mg" | "milligram" | "milligrams" => Ok(Self::Milligrams),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit '{other}' (expected g, kg, oz or mg)"
            ))),
        }
    }
}

/// Volume units accepted for drinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    /// Millilitres
    #[serde(rename = "mL")]
    Milliliters,
    /// Litres
    #[serde(rename = "L")]
    Liters,
    /// US cups
    #[serde(rename = "c")]
    Cups,
    /// US fluid ounces
    #[serde(rename = "oz")]
    FluidOunces,
}

impl MeasureUnit for VolumeUnit {
    fn base_factor(self) -> f64 {
        match self {
            Self::Milliliters => 1.0,
            Self::Liters => ML_PER_L,
            Self::Cups => ML_PER_CUP,
            Self::FluidOunces => ML_PER_FL_OZ,
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Milliliters => "mL",
            Self::Liters => "L",
            Self::Cups => "c",
            Self::FluidOunces => "oz",
        })
    }
}

impl FromStr for VolumeUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Ok(Self::Milliliters)
            }
            "l" | "liter" | "liters" | "litre" | "litres" => Ok(Self::Liters),
            "c" | "cup" | "cups" => Ok(Self::Cups),
            "oz" | "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => Ok(Self::FluidOunces),
            other => Err(AppError::invalid_input(format!(
                "Unknown volume unit '{other}' (expected mL, L, c or oz)"
            ))),
        }
    }
}

/// An amount of an item in a given unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity<U> {
    /// Numeric amount
    pub value: f64,
    /// Unit of `value`
    pub unit: U,
}

impl<U: MeasureUnit> Quantity<U> {
    /// Create a quantity
    #[must_use]
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// Amount expressed in the dimension's base unit (grams or millilitres)
    #[must_use]
    pub fn in_base_units(&self) -> f64 {
        self.value * self.unit.base_factor()
    }

    /// The same amount expressed in another unit of the same dimension
    #[must_use]
    pub fn convert_to(&self, unit: U) -> Self {
        Self {
            value: self.in_base_units() / unit.base_factor(),
            unit,
        }
    }
}

impl<U: MeasureUnit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.value * 100.0).round() / 100.0;
        write!(f, "{rounded} {}", self.unit)
    }
}
