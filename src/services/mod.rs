// ABOUTME: Domain service layer shared by the library API and the CLI
// ABOUTME: Combines the derived-nutrition components into reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Domain service layer

/// Nutrition report assembly
pub mod nutrition_report;

pub use nutrition_report::{NutritionReport, NutritionReportService};
