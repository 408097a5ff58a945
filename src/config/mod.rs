// ABOUTME: Configuration module for environment settings and intelligence parameters
// ABOUTME: Environment-only configuration with an optional pH reference table file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Configuration module for nutrilens
//!
//! - **Environment**: API client settings, log level, deployment mode
//! - **Intelligence**: macro factors, acidity thresholds, pH table, allergen indicators

/// Environment and API client configuration
pub mod environment;
/// Configuration error types
pub mod error;
/// Derived-nutrition configuration
pub mod intelligence;

pub use environment::{AppConfig, Environment, LogLevel, NutritionApiConfig};
pub use error::ConfigError;
pub use intelligence::{load_ph_table, AcidityConfig, IntelligenceConfig};
