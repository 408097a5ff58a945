// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors
// ABOUTME: Output formatting helpers for nutrilens-cli
// ABOUTME: Provides consistent text display for reports, macros, acidity, and allergens

use nutrilens::{
    errors::AppResult,
    intelligence::{AcidityAssessment, AllergenWarning, MacroComputation},
    models::FoodSuggestion,
    services::NutritionReport,
};
use serde::Serialize;

const RULE_WIDTH: usize = 60;

/// Print any serializable value as pretty JSON
pub fn display_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a full nutrition report
pub fn display_report(report: &NutritionReport) {
    println!("\n{}", report.name);
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("   Calories: {:.1} kcal", report.calories);
    println!("   Fiber:    {:.2} g", report.fiber_g);
    println!();
    display_macros(&report.macros);
    println!();
    display_acidity(&report.acidity);
    println!();
    display_allergens(&report.allergens);

    if !report.health_benefits.is_empty() {
        println!("\nHealth benefits:");
        for benefit in &report.health_benefits {
            println!("   • {benefit}");
        }
    }
}

/// Display macro percentages and warnings
pub fn display_macros(computation: &MacroComputation) {
    let distribution = &computation.distribution;
    println!("Macronutrients (% of calories):");
    println!("   Protein: {:>3}%", distribution.protein_pct);
    println!("   Carbs:   {:>3}%", distribution.carbs_pct);
    println!("   Fat:     {:>3}%", distribution.fat_pct);
    for warning in &computation.warnings {
        println!("   Warning: {warning}");
    }
}

/// Display an acidity assessment
pub fn display_acidity(assessment: &AcidityAssessment) {
    let filled = (assessment.scale_fraction() * 20.0).round() as usize;
    println!(
        "Acidity: {} (pH {:.1}, {})",
        assessment.label, assessment.ph, assessment.source
    );
    println!("   [{}{}] 0-14", "#".repeat(filled), "-".repeat(20 - filled.min(20)));
    println!("   {}", assessment.description);
}

/// Display allergen warning
pub fn display_allergens(warning: &AllergenWarning) {
    if warning.is_empty() {
        println!("Allergens: none detected");
        return;
    }
    if !warning.confirmed_names.is_empty() {
        println!("Allergens: {}", warning.confirmed_names.join(", "));
    }
    if !warning.possible_names.is_empty() {
        println!("May contain: {}", warning.possible_names.join(", "));
    }
    if let Some(message) = warning.caution_message() {
        println!("   {message}");
    }
}

/// Display search suggestions
pub fn display_suggestions(suggestions: &[FoodSuggestion]) {
    if suggestions.is_empty() {
        println!("No matching foods");
        return;
    }
    for suggestion in suggestions {
        match (suggestion.calories, suggestion.serving_size, &suggestion.serving_unit) {
            (Some(calories), Some(size), Some(unit)) => {
                println!("{} ({calories:.0} kcal per {size:.0}{unit})", suggestion.name);
            }
            _ => println!("{}", suggestion.name),
        }
    }
}
