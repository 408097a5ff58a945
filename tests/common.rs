// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and sample nutrition query results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutrilens`

use nutrilens::models::{Allergen, NutritionQueryResult};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Chicken breast style result with a measured pH and mixed allergens
pub fn grilled_chicken() -> NutritionQueryResult {
    NutritionQueryResult::new("Grilled Chicken", 165.0, 31.0, 0.0, 3.6, 0.0)
        .with_measured_ph(6.2)
        .with_allergens(vec![Allergen::possible("Soy")])
        .with_health_benefits(vec!["High in protein".into()])
}

/// Citrus result without a measured pH
pub fn lemon() -> NutritionQueryResult {
    NutritionQueryResult::new("Lemon", 29.0, 1.1, 9.3, 0.3, 2.8)
}

/// Snack with confirmed and possible allergens
pub fn peanut_cookie() -> NutritionQueryResult {
    NutritionQueryResult::new("Peanut Cookie", 480.0, 9.0, 60.0, 24.0, 2.0).with_allergens(vec![
        Allergen::definite("Peanut"),
        Allergen::possible("Gluten"),
        Allergen::definite("Dairy"),
    ])
}

/// Zero-macro beverage
pub fn water() -> NutritionQueryResult {
    NutritionQueryResult::new("Water", 0.0, 0.0, 0.0, 0.0, 0.0)
}
