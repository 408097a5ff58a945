// ABOUTME: Nutrition API commands for nutrilens-cli
// ABOUTME: Handles fetch (query plus report) and search suggestion listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

use nutrilens::{
    config::{AppConfig, IntelligenceConfig},
    errors::AppResult,
    external::{NutritionApiClient, NutritionDataSource},
    intelligence::ServingRules,
    models::ServingUnit,
    services::NutritionReportService,
};
use tracing::info;

use crate::helpers::display::{display_json, display_report, display_suggestions};

type Result<T> = AppResult<T>;

/// Fetch nutrition data for a query and print the report
pub async fn fetch(
    config: &AppConfig,
    intelligence: &IntelligenceConfig,
    query: &str,
    quantity: f64,
    unit: ServingUnit,
    json: bool,
) -> Result<()> {
    let (quantity, unit) = ServingRules::default().normalize_quantity(query, quantity, unit)?;
    info!(query, quantity, %unit, "Fetching nutrition data");

    let client = NutritionApiClient::new(config.api.clone())?;
    let result = client.fetch_nutrition(query, quantity, unit).await?;
    let report = NutritionReportService::from_config(intelligence).analyze(&result);

    if json {
        display_json(&report)
    } else {
        display_report(&report);
        Ok(())
    }
}

/// Search for foods matching a query
pub async fn search(config: &AppConfig, query: &str, json: bool) -> Result<()> {
    let client = NutritionApiClient::new(config.api.clone())?;
    let suggestions = client.search_foods(query).await?;

    if json {
        display_json(&suggestions)
    } else {
        display_suggestions(&suggestions);
        Ok(())
    }
}
