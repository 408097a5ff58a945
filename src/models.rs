// ABOUTME: Data model re-exports from nutrilens-core
// ABOUTME: Nutrition query results, allergens, suggestions, and serving units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Nutrition data models

pub use nutrilens_core::models::*;
