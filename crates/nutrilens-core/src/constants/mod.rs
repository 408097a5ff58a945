// ABOUTME: Application constants for macro energy factors, pH scale, and service naming
// ABOUTME: Organized into domain modules so call sites read as constants::acidity::PH_MAX
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Application constants organized by domain

/// Caloric conversion factors (Atwater general factors)
pub mod macros {
    /// Energy per gram of protein (kcal)
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Energy per gram of carbohydrate (kcal)
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Energy per gram of fat (kcal)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
    /// Percentages are expressed out of this total
    pub const PERCENT_SCALE: f64 = 100.0;
}

/// pH scale bounds and acidity tier thresholds
pub mod acidity {
    /// Lowest valid pH
    pub const PH_MIN: f64 = 0.0;
    /// Highest valid pH
    pub const PH_MAX: f64 = 14.0;
    /// Values strictly below this are high acidity
    pub const HIGH_ACIDITY_BELOW: f64 = 4.5;
    /// Values strictly below this (and not high) are medium acidity
    pub const MEDIUM_ACIDITY_BELOW: f64 = 5.5;
    /// pH used when neither the exact table nor a keyword rule matches
    pub const FALLBACK_PH: f64 = 6.0;
}

/// Serving unit conversion factors to millilitres
pub mod servings {
    /// Millilitres per US fluid ounce
    pub const ML_PER_FL_OZ: f64 = 29.5735;
    /// Millilitres per US cup
    pub const ML_PER_CUP: f64 = 236.588;
    /// Nutrient values in the food database are stored per this many grams or ml
    pub const REFERENCE_QUANTITY: f64 = 100.0;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Library and CLI service name
    pub const NUTRILENS: &str = "nutrilens";
    /// External nutrition API (used as the `service` in error messages)
    pub const NUTRITION_API: &str = "Nutrition API";
}

/// Environment variable names
pub mod env_config {
    /// Base URL of the nutrition API
    pub const API_URL: &str = "NUTRILENS_API_URL";
    /// Bearer token sent to the nutrition API
    pub const API_TOKEN: &str = "NUTRILENS_API_TOKEN";
    /// Request timeout in seconds
    pub const API_TIMEOUT_SECS: &str = "NUTRILENS_API_TIMEOUT_SECS";
    /// Response cache TTL in seconds
    pub const CACHE_TTL_SECS: &str = "NUTRILENS_CACHE_TTL_SECS";
    /// Outbound request budget per minute
    pub const RATE_LIMIT_PER_MINUTE: &str = "NUTRILENS_RATE_LIMIT_PER_MINUTE";
    /// Optional JSON file replacing the built-in pH reference table
    pub const PH_TABLE_PATH: &str = "NUTRILENS_PH_TABLE_PATH";
    /// Override for the high-acidity threshold
    pub const ACIDITY_HIGH_BELOW: &str = "NUTRILENS_ACIDITY_HIGH_BELOW";
    /// Override for the medium-acidity threshold
    pub const ACIDITY_MEDIUM_BELOW: &str = "NUTRILENS_ACIDITY_MEDIUM_BELOW";
    /// Override for the lookup fallback pH
    pub const FALLBACK_PH: &str = "NUTRILENS_FALLBACK_PH";
    /// Override for protein kcal per gram
    pub const PROTEIN_KCAL_PER_G: &str = "NUTRILENS_PROTEIN_KCAL_PER_G";
    /// Override for carbohydrate kcal per gram
    pub const CARBS_KCAL_PER_G: &str = "NUTRILENS_CARBS_KCAL_PER_G";
    /// Override for fat kcal per gram
    pub const FAT_KCAL_PER_G: &str = "NUTRILENS_FAT_KCAL_PER_G";
}

/// Defaults for the external API client
pub mod defaults {
    /// Default nutrition API base URL
    pub const API_URL: &str = "http://localhost:5000";
    /// Default request timeout (seconds)
    pub const API_TIMEOUT_SECS: u64 = 10;
    /// Default cache TTL (seconds)
    pub const CACHE_TTL_SECS: u64 = 300;
    /// Default request budget per minute
    pub const RATE_LIMIT_PER_MINUTE: u32 = 60;
    /// Default serving quantity
    pub const QUANTITY: f64 = 100.0;
}
