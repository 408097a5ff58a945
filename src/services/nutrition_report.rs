// ABOUTME: Nutrition report service combining macro, acidity, and allergen analysis
// ABOUTME: Turns a nutrition query result into a display-ready report, singly or in parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Nutrition report service
//!
//! Runs the derived-nutrition components over a [`NutritionQueryResult`]:
//! macro percentages from the gram values, acidity from the measured pH (or
//! the reference table), and the allergen warning from the allergen records.
//! A result without allergen records gets them detected from its name.

use crate::config::IntelligenceConfig;
use crate::intelligence::{
    AcidityAssessment, AcidityClassifier, AllergenDetector, AllergenSeverityAggregator,
    AllergenWarning, MacroComputation, MacroPercentageCalculator, MacroWarning,
};
use crate::logging::AppLogger;
use crate::models::NutritionQueryResult;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;
use tracing::{debug, warn};

/// Display-ready analysis of one food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionReport {
    /// Food name
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Fiber (grams)
    pub fiber_g: f64,
    /// Macro percentages with any warnings
    pub macros: MacroComputation,
    /// Acidity tier and pH
    pub acidity: AcidityAssessment,
    /// Confirmed and possible allergens
    pub allergens: AllergenWarning,
    /// Free-text health benefits
    pub health_benefits: Vec<String>,
}

/// Builds [`NutritionReport`]s
#[derive(Debug, Clone, Default)]
pub struct NutritionReportService {
    calculator: MacroPercentageCalculator,
    classifier: AcidityClassifier,
    detector: AllergenDetector,
}

impl NutritionReportService {
    /// Create a service from explicit components
    #[must_use]
    pub fn new(calculator: MacroPercentageCalculator, classifier: AcidityClassifier) -> Self {
        Self {
            calculator,
            classifier,
            detector: AllergenDetector::default(),
        }
    }

    /// Use a custom allergen detector for results without allergen records
    #[must_use]
    pub fn with_detector(mut self, detector: AllergenDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Create a service from intelligence configuration
    #[must_use]
    pub fn from_config(config: &IntelligenceConfig) -> Self {
        Self::new(config.macro_calculator(), config.acidity_classifier())
            .with_detector(config.allergen_detector())
    }

    /// Acidity classifier in use
    #[must_use]
    pub const fn classifier(&self) -> &AcidityClassifier {
        &self.classifier
    }

    /// Analyze one query result
    #[must_use]
    pub fn analyze(&self, result: &NutritionQueryResult) -> NutritionReport {
        let macros = self
            .calculator
            .compute(result.protein_g, result.carbs_g, result.fat_g);
        for warning in &macros.warnings {
            match warning {
                MacroWarning::DivisionByZero => {
                    warn!(food = %result.name, "No macro calories; percentages set to zero");
                }
                MacroWarning::InvalidGrams { field, value } => {
                    warn!(food = %result.name, %field, value, "Invalid macro grams treated as zero");
                }
            }
        }

        let acidity = self.classifier.classify(&result.name, result.measured_ph);
        debug!(
            food = %result.name,
            ph = acidity.ph,
            source = %acidity.source,
            tier = %acidity.tier,
            "Resolved acidity"
        );

        let allergens = if result.allergens.is_empty() {
            AllergenSeverityAggregator::aggregate(&self.detector.detect(&result.name))
        } else {
            AllergenSeverityAggregator::aggregate(&result.allergens)
        };

        AppLogger::log_nutrition_analysis(
            &result.name,
            acidity.label.as_str(),
            &acidity.source.to_string(),
            allergens.confirmed_names.len(),
            &macros.warnings,
        );

        NutritionReport {
            name: result.name.clone(),
            calories: result.calories,
            fiber_g: result.fiber_g,
            macros,
            acidity,
            allergens,
            health_benefits: result.health_benefits.clone(),
        }
    }

    /// Analyze many results in parallel, preserving input order
    #[must_use]
    pub fn analyze_batch(&self, results: &[NutritionQueryResult]) -> Vec<NutritionReport> {
        let started = Instant::now();
        let reports: Vec<NutritionReport> =
            results.par_iter().map(|result| self.analyze(result)).collect();

        AppLogger::log_performance_metric(
            "nutrition_batch_analysis",
            started.elapsed().as_secs_f64() * 1000.0,
            "ms",
            Some(&json!({ "batch_size": results.len() })),
        );
        reports
    }
}
