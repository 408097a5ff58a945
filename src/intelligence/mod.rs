// ABOUTME: Intelligence module re-exports from the nutrilens-intelligence crate
// ABOUTME: Gives library users crate::intelligence paths for the derived-nutrition components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! # Intelligence Module
//!
//! Macro percentages, acidity classification, allergen severity, and serving
//! rules. Everything here is re-exported from `nutrilens-intelligence`.

pub use nutrilens_intelligence::*;
