// ABOUTME: Tests for allergen severity aggregation and keyword-based allergen detection
// ABOUTME: Covers confirmed/possible partitioning, caution text, and word-boundary keyword matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrilens::intelligence::{
    AllergenDetector, AllergenIndicator, AllergenIndicators, AllergenSeverityAggregator,
};
use nutrilens::models::Allergen;

fn names(allergens: &[Allergen]) -> Vec<(&str, bool)> {
    allergens
        .iter()
        .map(|allergen| (allergen.name.as_str(), allergen.definite))
        .collect()
}

#[test]
fn test_aggregate_mixed_allergens() {
    let warning = AllergenSeverityAggregator::aggregate(&[
        Allergen::definite("peanuts"),
        Allergen::possible("soy"),
    ]);

    assert!(warning.has_confirmed);
    assert_eq!(warning.confirmed_names, vec!["peanuts"]);
    assert_eq!(warning.possible_names, vec!["soy"]);
    assert!(warning.caution_message().is_some());
}

#[test]
fn test_aggregate_empty() {
    let warning = AllergenSeverityAggregator::aggregate(&[]);

    assert!(!warning.has_confirmed);
    assert!(warning.confirmed_names.is_empty());
    assert!(warning.is_empty());
    assert!(warning.caution_message().is_none());
}

#[test]
fn test_aggregate_only_possible() {
    let warning = AllergenSeverityAggregator::aggregate(&[Allergen::possible("Gluten")]);

    assert!(!warning.has_confirmed);
    assert!(!warning.is_empty());
    assert!(warning.caution_message().is_none());
}

#[test]
fn test_aggregate_preserves_input_order() {
    let warning = AllergenSeverityAggregator::aggregate(&[
        Allergen::definite("Wheat"),
        Allergen::possible("Sesame"),
        Allergen::definite("Dairy"),
        Allergen::definite("Egg"),
    ]);

    assert_eq!(warning.confirmed_names, vec!["Wheat", "Dairy", "Egg"]);
    assert_eq!(warning.possible_names, vec!["Sesame"]);
}

#[test]
fn test_caution_message_text() {
    let warning = AllergenSeverityAggregator::aggregate(&[Allergen::definite("Fish")]);
    let message = warning.caution_message().unwrap();
    assert!(message.starts_with("This item contains confirmed allergens."));
}

#[test]
fn test_warning_serializes_snake_case_fields() {
    let warning = AllergenSeverityAggregator::aggregate(&[Allergen::definite("Soy")]);
    let json = serde_json::to_value(&warning).unwrap();
    assert_eq!(json["has_confirmed"], true);
    assert_eq!(json["confirmed_names"][0], "Soy");
}

#[test]
fn test_detect_definite_categories() {
    let detector = AllergenDetector::default();

    assert_eq!(names(&detector.detect("Salmon Fillet")), vec![("Fish", true)]);
    assert_eq!(names(&detector.detect("Boiled Egg")), vec![("Egg", true)]);
    assert_eq!(names(&detector.detect("Scrambled Eggs")), vec![("Egg", true)]);
    assert_eq!(names(&detector.detect("Hot Chocolate")), vec![("Dairy", true)]);
}

#[test]
fn test_detect_does_not_confuse_eggplant_with_egg() {
    let detector = AllergenDetector::default();
    assert!(detector.detect("grilled eggplant").is_empty());
}

#[test]
fn test_detect_compact_multi_word_keyword() {
    let detector = AllergenDetector::default();
    assert_eq!(names(&detector.detect("hotchocolate")), vec![("Dairy", true)]);
}

#[test]
fn test_detect_possible_categories() {
    let detector = AllergenDetector::default();
    assert_eq!(names(&detector.detect("Sourdough Bread")), vec![("Gluten", false)]);
    assert_eq!(names(&detector.detect("Tahini Dip")), vec![("Sesame", false)]);
}

#[test]
fn test_definite_category_not_repeated_as_possible() {
    let detector = AllergenDetector::default();
    // "cream cheese" hits Dairy as definite (cheese) and as possible (cream)
    assert_eq!(names(&detector.detect("Cream Cheese Bagel")), vec![("Dairy", true)]);
}

#[test]
fn test_definite_listed_before_possible() {
    let detector = AllergenDetector::default();
    let detected = detector.detect("Tuna Pasta");
    assert_eq!(names(&detected), vec![("Fish", true), ("Gluten", false)]);
}

#[test]
fn test_detect_nothing_for_plain_foods() {
    let detector = AllergenDetector::default();
    assert!(detector.detect("Apple").is_empty());
    assert!(detector.detect("").is_empty());
    assert!(detector.detect("   ").is_empty());
}

#[test]
fn test_custom_indicators() {
    let detector = AllergenDetector::new(AllergenIndicators {
        definite: vec![AllergenIndicator::new("Mustard", &["mustard"])],
        possible: vec![AllergenIndicator::new("Celery", &["celery", "mirepoix"])],
    });

    assert_eq!(
        names(&detector.detect("Honey Mustard Mirepoix")),
        vec![("Mustard", true), ("Celery", false)]
    );
    assert!(detector.detect("Salmon").is_empty());
    assert_eq!(detector.indicators().definite.len(), 1);
}

#[test]
fn test_detect_then_aggregate() {
    let detector = AllergenDetector::default();
    let warning = AllergenSeverityAggregator::aggregate(&detector.detect("Shrimp Fried Rice"));
    assert!(warning.has_confirmed);
    assert_eq!(warning.confirmed_names, vec!["Shellfish"]);
}
