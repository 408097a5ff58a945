// ABOUTME: Derived-nutrition engine for nutrilens
// ABOUTME: Macro percentages, acidity classification, allergen severity, and serving rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

#![deny(unsafe_code)]

//! # Nutrilens Intelligence
//!
//! Pure, synchronous computations applied to a nutrition query result before
//! it is displayed:
//!
//! - [`macro_distribution`]: macro grams to percentage-of-calories
//! - [`acidity`]: default pH lookup and acidity tier classification
//! - [`allergens`]: confirmed-allergen warnings and keyword allergen detection
//! - [`servings`]: liquid/solid unit rules and per-100 scaling
//!
//! None of these components hold mutable state, so they are `Send + Sync` and
//! can be shared freely across threads.

/// Acidity classification and the default pH reference table
pub mod acidity;
/// Allergen severity aggregation and keyword-based allergen detection
pub mod allergens;
mod keywords;
/// Macronutrient percentage-of-calories calculation
pub mod macro_distribution;
/// Serving unit rules and nutrient scaling
pub mod servings;

pub use acidity::{
    AcidityAssessment, AcidityClassifier, AcidityThresholds, AcidityTier, KeywordRule, PhLookup,
    PhReferenceTable, PhSource,
};
pub use allergens::{
    AllergenDetector, AllergenIndicator, AllergenIndicators, AllergenSeverityAggregator,
    AllergenWarning,
};
pub use macro_distribution::{
    MacroCaloricFactors, MacroComputation, MacroDistribution, MacroField,
    MacroPercentageCalculator, MacroWarning,
};
pub use servings::ServingRules;
