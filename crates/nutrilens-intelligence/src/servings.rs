// ABOUTME: Serving unit rules: liquid/solid classification, unit validation, and quantity scaling
// ABOUTME: Scales per-100 reference values to a requested serving with fixed rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Serving Rules
//!
//! Liquids are measured in millilitres and solids in grams. Ounces and cups
//! are accepted for liquids and converted to millilitres first. Nutrient
//! values in the reference data are per 100 g or 100 ml.
//!
//! Liquid keywords match whole words only (plurals allowed): "beef steak" is
//! not a tea and "watermelon" is not water.

use crate::keywords::contains_word;
use nutrilens_core::constants::servings::REFERENCE_QUANTITY;
use nutrilens_core::errors::{AppError, AppResult};
use nutrilens_core::models::{NutritionQueryResult, ServingUnit};
use serde::{Deserialize, Serialize};

const DEFAULT_LIQUID_KEYWORDS: &[&str] = &[
    "coffee",
    "tea",
    "juice",
    "milk",
    "milkshake",
    "buttermilk",
    "smoothie",
    "shake",
    "beverage",
    "drink",
    "americano",
    "espresso",
    "latte",
    "cappuccino",
    "water",
    "soda",
    "beer",
    "wine",
    "cortado",
    "macchiato",
    "mocha",
    "frappuccino",
    "cold brew",
    "nitro",
    "lungo",
    "ristretto",
    "flat white",
    "affogato",
];

/// Liquid detection and unit validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServingRules {
    liquid_keywords: Vec<String>,
}

impl Default for ServingRules {
    fn default() -> Self {
        Self {
            liquid_keywords: DEFAULT_LIQUID_KEYWORDS
                .iter()
                .map(|k| (*k).to_owned())
                .collect(),
        }
    }
}

impl ServingRules {
    /// Create rules from a custom keyword list
    #[must_use]
    pub fn new(liquid_keywords: Vec<String>) -> Self {
        Self {
            liquid_keywords: liquid_keywords
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Whether the food name contains a liquid keyword as a word
    #[must_use]
    pub fn is_liquid(&self, food_name: &str) -> bool {
        let lowered = food_name.to_lowercase();
        self.liquid_keywords
            .iter()
            .any(|keyword| contains_word(&lowered, keyword))
    }

    /// Unit a food must be measured in
    #[must_use]
    pub fn required_unit(&self, food_name: &str) -> ServingUnit {
        if self.is_liquid(food_name) {
            ServingUnit::Milliliters
        } else {
            ServingUnit::Grams
        }
    }

    /// Check that `unit` is the one the food requires
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the required unit when they differ.
    pub fn validate_unit(&self, food_name: &str, unit: ServingUnit) -> AppResult<()> {
        let required = self.required_unit(food_name);
        if unit == required {
            return Ok(());
        }
        let kind = if required == ServingUnit::Milliliters {
            "liquid"
        } else {
            "solid"
        };
        Err(AppError::invalid_input(format!(
            "Please use '{required}' for {kind} foods like {food_name}"
        )))
    }

    /// Convert a requested serving into the food's required unit and validate it
    ///
    /// Ounces and cups become millilitres for liquids. Grams and millilitres
    /// pass through unchanged and must match the required unit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive quantity or a unit the food
    /// does not accept.
    pub fn normalize_quantity(
        &self,
        food_name: &str,
        quantity: f64,
        unit: ServingUnit,
    ) -> AppResult<(f64, ServingUnit)> {
        ensure_positive(quantity)?;
        let (quantity, unit) = match unit {
            ServingUnit::Ounces | ServingUnit::Cups if self.is_liquid(food_name) => {
                (unit.to_milliliters(quantity), ServingUnit::Milliliters)
            }
            _ => (quantity, unit),
        };
        self.validate_unit(food_name, unit)?;
        Ok((quantity, unit))
    }

    /// Scale per-100 reference values to `quantity`
    ///
    /// Calories are rounded to one decimal place, macros and fiber to two.
    /// pH, allergens, and health benefits are carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `quantity` is not a positive number.
    pub fn scale_to_quantity(
        per_reference: &NutritionQueryResult,
        quantity: f64,
    ) -> AppResult<NutritionQueryResult> {
        ensure_positive(quantity)?;
        let factor = quantity / REFERENCE_QUANTITY;
        Ok(NutritionQueryResult {
            calories: round_to(per_reference.calories * factor, 1),
            protein_g: round_to(per_reference.protein_g * factor, 2),
            carbs_g: round_to(per_reference.carbs_g * factor, 2),
            fat_g: round_to(per_reference.fat_g * factor, 2),
            fiber_g: round_to(per_reference.fiber_g * factor, 2),
            ..per_reference.clone()
        })
    }
}

fn ensure_positive(quantity: f64) -> AppResult<()> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input("Quantity must be positive"))
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}
