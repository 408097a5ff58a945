// ABOUTME: External API client modules (nutrition backend)
// ABOUTME: Provides the data source trait, the HTTP client, and an in-memory mock

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! External API Clients
//!
//! Clients for the nutrition backend that supplies query results and search
//! suggestions.

pub mod nutrition_api;

pub use nutrition_api::{MockNutritionApi, NutritionApiClient, NutritionDataSource};
