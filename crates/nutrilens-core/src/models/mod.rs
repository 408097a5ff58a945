// ABOUTME: Core data models shared across nutrilens crates
// ABOUTME: Re-exports nutrition query types for flat import paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

/// Nutrition query result, allergen, suggestion, and serving unit models
pub mod nutrition;

pub use nutrition::{Allergen, FoodSuggestion, NutritionQueryResult, ServingUnit};
