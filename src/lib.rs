// ABOUTME: Main library entry point for nutrilens nutrition analysis
// ABOUTME: Exposes configuration, logging, the nutrition API client, and report services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

#![deny(unsafe_code)]

//! # Nutrilens
//!
//! Derived nutrition analysis for food query results: macronutrient share of
//! calories, acidity classification with a default pH table, and allergen
//! warnings.
//!
//! ## Architecture
//!
//! - **`nutrilens-core`**: errors, constants, and data models
//! - **`nutrilens-intelligence`**: pure computation components
//! - **this crate**: configuration, logging, the HTTP client for the
//!   nutrition API, and the report service used by `nutrilens-cli`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrilens::models::NutritionQueryResult;
//! use nutrilens::services::NutritionReportService;
//!
//! let service = NutritionReportService::default();
//! let apple = NutritionQueryResult::new("apple", 52.0, 0.3, 13.8, 0.2, 2.4);
//! let report = service.analyze(&apple);
//! println!("{} ({})", report.acidity.label, report.acidity.ph);
//! ```

/// Configuration from environment variables
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// External API clients
pub mod external;

/// Derived-nutrition components
pub mod intelligence;

/// Structured logging
pub mod logging;

/// Nutrition data models
pub mod models;

/// Report services
pub mod services;
