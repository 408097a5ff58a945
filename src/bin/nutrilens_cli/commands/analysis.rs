// ABOUTME: Offline analysis commands for nutrilens-cli
// ABOUTME: Handles analyze, macros, ph, and allergens without contacting the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

use nutrilens::{
    config::IntelligenceConfig,
    errors::{AppError, AppResult},
    intelligence::AllergenSeverityAggregator,
    models::NutritionQueryResult,
    services::NutritionReportService,
};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use crate::helpers::display::{
    display_acidity, display_allergens, display_json, display_macros, display_report,
};

type Result<T> = AppResult<T>;

/// Analyze a nutrition query result read from a file or stdin
pub fn analyze(config: &IntelligenceConfig, file: &Path, json: bool) -> Result<()> {
    let raw = read_input(file)?;
    let result: NutritionQueryResult = serde_json::from_str(&raw)?;
    debug!(food = %result.name, "Parsed nutrition query result");

    let report = NutritionReportService::from_config(config).analyze(&result);
    if json {
        display_json(&report)
    } else {
        display_report(&report);
        Ok(())
    }
}

/// Compute macro percentages from grams
pub fn macros(
    config: &IntelligenceConfig,
    protein: f64,
    carbs: f64,
    fat: f64,
    normalize: bool,
    json: bool,
) -> Result<()> {
    let mut computation = config.macro_calculator().compute(protein, carbs, fat);
    if normalize {
        computation.distribution = computation.distribution.normalized_to_hundred();
    }
    if json {
        display_json(&computation)
    } else {
        display_macros(&computation);
        Ok(())
    }
}

/// Classify acidity for a food name
pub fn ph(config: &IntelligenceConfig, food: &str, measured: Option<f64>, json: bool) -> Result<()> {
    let assessment = config.acidity_classifier().classify(food, measured);
    if json {
        display_json(&assessment)
    } else {
        display_acidity(&assessment);
        Ok(())
    }
}

/// Detect allergens from a food name and summarize them
pub fn allergens(config: &IntelligenceConfig, food: &str, json: bool) -> Result<()> {
    let detected = config.allergen_detector().detect(food);
    let warning = AllergenSeverityAggregator::aggregate(&detected);
    if json {
        display_json(&warning)
    } else {
        display_allergens(&warning);
        Ok(())
    }
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| AppError::invalid_input(format!("Failed to read stdin: {e}")))?;
        return Ok(buffer);
    }
    fs::read_to_string(file).map_err(|e| {
        AppError::invalid_input(format!("Failed to read {}: {e}", file.display()))
    })
}
