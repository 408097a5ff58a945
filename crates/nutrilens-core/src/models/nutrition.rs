// ABOUTME: Nutrition query models exchanged with the external nutrition API
// ABOUTME: NutritionQueryResult, Allergen, FoodSuggestion, and ServingUnit definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

use crate::constants::servings::{ML_PER_CUP, ML_PER_FL_OZ};
use crate::errors::AppError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Allergen record attached to a food
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Allergen {
    /// Allergen name (e.g. "Dairy", "peanuts")
    pub name: String,
    /// `true` when presence is confirmed, `false` for possible/trace presence
    pub definite: bool,
}

impl Allergen {
    /// Confirmed allergen
    pub fn definite(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definite: true,
        }
    }

    /// Possible or trace allergen
    pub fn possible(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definite: false,
        }
    }
}

/// Nutrition values for one food at the requested serving, as returned by the API
///
/// The API spells macro fields `protein`, `carbs`, `fat`, `fiber` and the pH
/// field `acidity_level`; both spellings are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionQueryResult {
    /// Food name as matched by the API
    pub name: String,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (grams)
    #[serde(default, alias = "protein")]
    pub protein_g: f64,
    /// Carbohydrates (grams)
    #[serde(default, alias = "carbs")]
    pub carbs_g: f64,
    /// Fat (grams)
    #[serde(default, alias = "fat")]
    pub fat_g: f64,
    /// Fiber (grams), excluded from the macro percentage basis
    #[serde(default, alias = "fiber")]
    pub fiber_g: f64,
    /// Measured pH when the data source has one
    #[serde(
        default,
        alias = "acidity_level",
        deserialize_with = "deserialize_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub measured_ph: Option<f64>,
    /// Allergens, definite and possible
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    /// Free-text health benefits
    #[serde(default)]
    pub health_benefits: Vec<String>,
}

impl NutritionQueryResult {
    /// Create a result with macro values and no pH, allergens, or benefits
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
        fiber_g: f64,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g,
            measured_ph: None,
            allergens: Vec::new(),
            health_benefits: Vec::new(),
        }
    }

    /// Attach a measured pH
    #[must_use]
    pub const fn with_measured_ph(mut self, ph: f64) -> Self {
        self.measured_ph = Some(ph);
        self
    }

    /// Attach allergen records
    #[must_use]
    pub fn with_allergens(mut self, allergens: Vec<Allergen>) -> Self {
        self.allergens = allergens;
        self
    }

    /// Attach health benefit strings
    #[must_use]
    pub fn with_health_benefits(mut self, benefits: Vec<String>) -> Self {
        self.health_benefits = benefits;
        self
    }
}

/// Accepts a number, `null`, or any other JSON value; only numbers survive
fn deserialize_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

/// Autocomplete record returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSuggestion {
    /// Food name
    pub name: String,
    /// Energy per reference serving (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Reference serving size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    /// Reference serving unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_unit: Option<String>,
}

/// Unit a serving quantity is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServingUnit {
    /// Grams (solid foods)
    #[serde(rename = "g")]
    Grams,
    /// Millilitres (liquid foods)
    #[serde(rename = "ml")]
    Milliliters,
    /// US fluid ounces
    #[serde(rename = "oz")]
    Ounces,
    /// US cups
    #[serde(rename = "cups")]
    Cups,
}

impl ServingUnit {
    /// Query-string spelling of the unit
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Milliliters => "ml",
            Self::Ounces => "oz",
            Self::Cups => "cups",
        }
    }

    /// Convert a value in this unit to millilitres (grams assume a density of 1 g/ml)
    #[must_use]
    pub fn to_milliliters(&self, value: f64) -> f64 {
        match self {
            Self::Grams | Self::Milliliters => value,
            Self::Ounces => value * ML_PER_FL_OZ,
            Self::Cups => value * ML_PER_CUP,
        }
    }
}

impl fmt::Display for ServingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServingUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(Self::Grams),
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Ok(Self::Milliliters)
            }
            "oz" | "ounce" | "ounces" => Ok(Self::Ounces),
            "cup" | "cups" => Ok(Self::Cups),
            other => Err(AppError::invalid_input(format!(
                "Unknown serving unit '{other}' (expected g, ml, oz, or cups)"
            ))),
        }
    }
}
