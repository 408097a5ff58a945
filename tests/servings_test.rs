// ABOUTME: Tests for serving unit rules and per-100 nutrient scaling
// ABOUTME: Covers liquid detection, unit validation messages, unit conversion, and rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use nutrilens::errors::ErrorCode;
use nutrilens::intelligence::ServingRules;
use nutrilens::models::{Allergen, NutritionQueryResult, ServingUnit};

#[test]
fn test_solids_sharing_letters_with_liquids() {
    let rules = ServingRules::default();
    assert!(!rules.is_liquid("steak"));
    assert!(!rules.is_liquid("watermelon"));
    assert!(!rules.is_liquid("steamed broccoli"));
    assert!(rules.validate_unit("beef steak", ServingUnit::Grams).is_ok());
    assert!(rules.validate_unit("Watermelon", ServingUnit::Grams).is_ok());

    assert!(rules.is_liquid("sparkling water"));
    assert!(rules.is_liquid("Chocolate Milkshake"));
    assert!(rules.is_liquid("two iced teas"));
}

#[test]
fn test_liquid_detection() {
    let rules = ServingRules::default();
    assert!(rules.is_liquid("Orange Juice"));
    assert!(rules.is_liquid("Iced Latte"));
    assert!(rules.is_liquid("nitro cold brew"));
    assert!(!rules.is_liquid("Apple"));
    assert!(!rules.is_liquid("Masala Dosa"));
}

#[test]
fn test_required_unit() {
    let rules = ServingRules::default();
    assert_eq!(rules.required_unit("green tea"), ServingUnit::Milliliters);
    assert_eq!(rules.required_unit("quinoa bowl"), ServingUnit::Grams);
}

#[test]
fn test_grams_rejected_for_liquid() {
    let rules = ServingRules::default();
    let err = rules
        .validate_unit("orange juice", ServingUnit::Grams)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(
        err.message,
        "Please use 'ml' for liquid foods like orange juice"
    );
}

#[test]
fn test_milliliters_rejected_for_solid() {
    let rules = ServingRules::default();
    let err = rules
        .validate_unit("Apple", ServingUnit::Milliliters)
        .unwrap_err();
    assert_eq!(err.message, "Please use 'g' for solid foods like Apple");
}

#[test]
fn test_ounces_and_cups_convert_for_liquids() {
    let rules = ServingRules::default();

    let (quantity, unit) = rules
        .normalize_quantity("orange juice", 8.0, ServingUnit::Ounces)
        .unwrap();
    assert_eq!(unit, ServingUnit::Milliliters);
    assert!((quantity - 236.588).abs() < 1e-9);

    let (quantity, unit) = rules
        .normalize_quantity("whole milk", 1.0, ServingUnit::Cups)
        .unwrap();
    assert_eq!(unit, ServingUnit::Milliliters);
    assert!((quantity - 236.588).abs() < 1e-9);
}

#[test]
fn test_ounces_rejected_for_solids() {
    let rules = ServingRules::default();
    let err = rules
        .normalize_quantity("apple", 4.0, ServingUnit::Ounces)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.message, "Please use 'g' for solid foods like apple");

    let (quantity, unit) = rules
        .normalize_quantity("apple", 120.0, ServingUnit::Grams)
        .unwrap();
    assert_eq!((quantity, unit), (120.0, ServingUnit::Grams));
}

#[test]
fn test_non_positive_quantity_rejected() {
    let rules = ServingRules::default();
    for quantity in [0.0, -10.0, f64::NAN] {
        let err = rules
            .normalize_quantity("apple", quantity, ServingUnit::Grams)
            .unwrap_err();
        assert_eq!(err.message, "Quantity must be positive");
    }
}

#[test]
fn test_custom_liquid_keywords() {
    let rules = ServingRules::new(vec!["  Broth ".to_owned(), String::new()]);
    assert!(rules.is_liquid("chicken broth"));
    assert!(!rules.is_liquid("orange juice"));
}

#[test]
fn test_scale_to_quantity_rounds_values() {
    let apple = NutritionQueryResult::new("Apple", 52.0, 0.3, 13.8, 0.2, 2.4)
        .with_allergens(vec![Allergen::possible("Birch pollen")]);

    let scaled = ServingRules::scale_to_quantity(&apple, 200.0).unwrap();
    assert_eq!(scaled.calories, 104.0);
    assert_eq!(scaled.protein_g, 0.6);
    assert_eq!(scaled.carbs_g, 27.6);
    assert_eq!(scaled.fat_g, 0.4);
    assert_eq!(scaled.fiber_g, 4.8);
    assert_eq!(scaled.name, "Apple");
    assert_eq!(scaled.allergens, apple.allergens);

    let third = ServingRules::scale_to_quantity(&apple, 33.0).unwrap();
    assert_eq!(third.calories, 17.2);
    assert_eq!(third.carbs_g, 4.55);
}

#[test]
fn test_scale_keeps_measured_ph() {
    let juice = NutritionQueryResult::new("Orange Juice", 45.0, 0.7, 10.4, 0.2, 0.2)
        .with_measured_ph(3.5);
    let scaled = ServingRules::scale_to_quantity(&juice, 250.0).unwrap();
    assert_eq!(scaled.measured_ph, Some(3.5));
    assert_eq!(scaled.calories, 112.5);
}

#[test]
fn test_scale_rejects_zero_quantity() {
    let apple = NutritionQueryResult::new("Apple", 52.0, 0.3, 13.8, 0.2, 2.4);
    assert!(ServingRules::scale_to_quantity(&apple, 0.0).is_err());
}

#[test]
fn test_serving_unit_parsing() {
    assert_eq!("G".parse::<ServingUnit>().unwrap(), ServingUnit::Grams);
    assert_eq!("millilitres".parse::<ServingUnit>().unwrap(), ServingUnit::Milliliters);
    assert_eq!(" cup ".parse::<ServingUnit>().unwrap(), ServingUnit::Cups);
    assert!("spoonful".parse::<ServingUnit>().is_err());
    assert_eq!(ServingUnit::Ounces.to_string(), "oz");
}
