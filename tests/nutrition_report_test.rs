// ABOUTME: Tests for the nutrition report service combining macros, acidity, and allergens
// ABOUTME: Covers single analysis, idempotence, zero-calorie handling, configuration, and batch ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{grilled_chicken, init_test_logging, lemon, peanut_cookie, water};
use nutrilens::config::IntelligenceConfig;
use nutrilens::intelligence::{
    AcidityTier, AllergenDetector, AllergenIndicator, AllergenIndicators, MacroDistribution,
    MacroWarning, PhSource,
};
use nutrilens::models::{Allergen, NutritionQueryResult};
use nutrilens::services::NutritionReportService;

#[test]
fn test_report_uses_measured_ph() {
    init_test_logging();
    let service = NutritionReportService::default();
    let report = service.analyze(&grilled_chicken());

    assert_eq!(report.name, "Grilled Chicken");
    assert_eq!(report.calories, 165.0);
    assert_eq!(report.acidity.ph, 6.2);
    assert_eq!(report.acidity.source, PhSource::Measured);
    assert_eq!(report.acidity.tier, AcidityTier::Low);
    assert!(!report.allergens.has_confirmed);
    assert_eq!(report.allergens.possible_names, vec!["Soy"]);
    assert_eq!(report.health_benefits, vec!["High in protein"]);
}

#[test]
fn test_report_falls_back_to_table_ph() {
    init_test_logging();
    let report = NutritionReportService::default().analyze(&lemon());

    assert_eq!(report.acidity.ph, 2.0);
    assert_eq!(report.acidity.tier, AcidityTier::High);
    assert_eq!(report.acidity.source, PhSource::ExactMatch);
    assert!(report.allergens.is_empty());
}

#[test]
fn test_report_macros_and_allergens() {
    init_test_logging();
    let report = NutritionReportService::default().analyze(&peanut_cookie());

    // 36 + 240 + 216 = 492 kcal
    assert_eq!(report.macros.distribution.as_tuple(), (7, 49, 44));
    assert!(report.allergens.has_confirmed);
    assert_eq!(report.allergens.confirmed_names, vec!["Peanut", "Dairy"]);
    assert_eq!(report.allergens.possible_names, vec!["Gluten"]);
}

#[test]
fn test_report_detects_allergens_when_none_recorded() {
    init_test_logging();
    let service = NutritionReportService::default();
    let cocoa = NutritionQueryResult::new("Hot Chocolate", 77.0, 3.5, 10.7, 2.3, 1.0);

    let report = service.analyze(&cocoa);
    assert!(report.allergens.has_confirmed);
    assert_eq!(report.allergens.confirmed_names, vec!["Dairy"]);
    assert!(report.allergens.caution_message().is_some());

    // recorded allergens win over name detection
    let recorded = cocoa.with_allergens(vec![Allergen::possible("Soy")]);
    let report = service.analyze(&recorded);
    assert!(!report.allergens.has_confirmed);
    assert_eq!(report.allergens.possible_names, vec!["Soy"]);
}

#[test]
fn test_report_uses_custom_detector() {
    init_test_logging();
    let detector = AllergenDetector::new(AllergenIndicators {
        definite: vec![AllergenIndicator::new("Sulfites", &["wine"])],
        possible: Vec::new(),
    });
    let service = NutritionReportService::default().with_detector(detector);

    let report = service.analyze(&NutritionQueryResult::new("Red Wine", 85.0, 0.1, 2.6, 0.0, 0.0));
    assert_eq!(report.allergens.confirmed_names, vec!["Sulfites"]);
    assert!(service.analyze(&lemon()).allergens.is_empty());
}

#[test]
fn test_zero_calorie_report_has_warning_not_nan() {
    init_test_logging();
    let report = NutritionReportService::default().analyze(&water());

    assert_eq!(report.macros.distribution, MacroDistribution::ZERO);
    assert_eq!(report.macros.warnings, vec![MacroWarning::DivisionByZero]);
    assert_eq!(report.acidity.ph, 7.0);
}

#[test]
fn test_measured_zero_ph_survives_json_input() {
    init_test_logging();
    let json = r#"{
        "name": "Battery Acid",
        "calories": 0,
        "protein": 0,
        "carbs": 0,
        "fat": 0,
        "acidity_level": 0.0
    }"#;
    let result: NutritionQueryResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.measured_ph, Some(0.0));

    let report = NutritionReportService::default().analyze(&result);
    assert_eq!(report.acidity.ph, 0.0);
    assert_eq!(report.acidity.source, PhSource::Measured);
}

#[test]
fn test_analysis_is_idempotent() {
    init_test_logging();
    let service = NutritionReportService::default();
    let input = peanut_cookie();

    let first = service.analyze(&input);
    let second = service.analyze(&input);
    assert_eq!(first, second);
}

#[test]
fn test_batch_preserves_order() {
    init_test_logging();
    let service = NutritionReportService::default();
    let inputs: Vec<NutritionQueryResult> = (0..64)
        .map(|index| match index % 4 {
            0 => grilled_chicken(),
            1 => lemon(),
            2 => peanut_cookie(),
            _ => water(),
        })
        .collect();

    let reports = service.analyze_batch(&inputs);
    assert_eq!(reports.len(), inputs.len());
    for (input, report) in inputs.iter().zip(&reports) {
        assert_eq!(report.name, input.name);
        assert_eq!(*report, service.analyze(input));
    }
}

#[test]
fn test_service_from_config() {
    init_test_logging();
    let mut config = IntelligenceConfig::default();
    config.acidity.thresholds.high_below = 2.0;
    config.acidity.thresholds.medium_below = 3.0;

    let service = NutritionReportService::from_config(&config);
    let report = service.analyze(&lemon());
    assert_eq!(report.acidity.tier, AcidityTier::Medium);
    assert_eq!(service.classifier().thresholds().high_below, 2.0);
}

#[test]
fn test_report_serializes() {
    init_test_logging();
    let report = NutritionReportService::default().analyze(&lemon());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["acidity"]["tier"], "HIGH");
    assert_eq!(json["acidity"]["source"]["kind"], "exact_match");
    assert_eq!(json["allergens"]["has_confirmed"], false);
    assert!(json["macros"].get("warnings").is_none());
}
