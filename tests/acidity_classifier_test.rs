// ABOUTME: Tests for acidity classification and the pH reference table
// ABOUTME: Covers lookup stages, keyword priority, tier boundaries, measured pH handling, and custom tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use nutrilens::config::load_ph_table;
use nutrilens::errors::ErrorCode;
use nutrilens::intelligence::{
    AcidityClassifier, AcidityThresholds, AcidityTier, KeywordRule, PhReferenceTable, PhSource,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_lemon_is_high_acidity() {
    let assessment = AcidityClassifier::default().classify("lemon", None);
    assert_eq!(assessment.ph, 2.0);
    assert_eq!(assessment.tier, AcidityTier::High);
    assert_eq!(assessment.label, "High Acidity");
    assert_eq!(assessment.source, PhSource::ExactMatch);
}

#[test]
fn test_egg_is_low_acidity() {
    let assessment = AcidityClassifier::default().classify("egg", None);
    assert_eq!(assessment.ph, 7.6);
    assert_eq!(assessment.tier, AcidityTier::Low);
}

#[test]
fn test_unknown_food_uses_fallback() {
    let assessment = AcidityClassifier::default().classify("unknown_random_food_xyz", None);
    assert_eq!(assessment.ph, 6.0);
    assert_eq!(assessment.tier, AcidityTier::Low);
    assert_eq!(assessment.source, PhSource::Fallback);
}

#[test]
fn test_iced_green_tea_matches_tea_keyword() {
    let lookup = AcidityClassifier::default().resolve_default_ph("iced green tea");
    assert_eq!(lookup.ph, 7.0);
    assert_eq!(
        lookup.source,
        PhSource::Keyword {
            keyword: "tea".to_owned()
        }
    );
}

#[test]
fn test_lookup_is_case_and_whitespace_insensitive() {
    let classifier = AcidityClassifier::default();
    assert_eq!(classifier.lookup_default_ph("  Coca Cola "), 2.5);
    assert_eq!(classifier.lookup_default_ph("BOILED EGG"), 7.6);
}

#[test]
fn test_overlapping_keywords_follow_priority() {
    let classifier = AcidityClassifier::default();
    assert_eq!(classifier.lookup_default_ph("ribeye steak"), 5.8);
    assert_eq!(classifier.lookup_default_ph("grilled eggplant"), 5.0);
    assert_eq!(classifier.lookup_default_ph("pink lemonade"), 2.7);
    assert_eq!(classifier.lookup_default_ph("cheese omelette"), 5.2);
}

#[test]
fn test_keywords_inside_words_do_not_match() {
    let classifier = AcidityClassifier::default();

    for name in ["milk chocolate", "hot chocolate", "chocolate cake"] {
        let assessment = classifier.classify(name, None);
        assert_eq!(assessment.ph, 5.5, "{name}");
        assert_eq!(assessment.tier, AcidityTier::Low, "{name}");
        assert_eq!(
            assessment.source,
            PhSource::Keyword {
                keyword: "chocolate".to_owned()
            }
        );
    }

    for name in ["steamed rice", "veggie burger"] {
        let lookup = classifier.resolve_default_ph(name);
        assert_ne!(lookup.source, PhSource::Keyword { keyword: "tea".to_owned() }, "{name}");
        assert_ne!(lookup.source, PhSource::Keyword { keyword: "egg".to_owned() }, "{name}");
    }
    assert_eq!(classifier.lookup_default_ph("steamed rice"), 6.5);
    assert_eq!(classifier.resolve_default_ph("veggie burger").source, PhSource::Fallback);
}

#[test]
fn test_empty_name_falls_through_to_default() {
    let classifier = AcidityClassifier::default();
    assert_eq!(classifier.lookup_default_ph(""), 6.0);
    assert_eq!(classifier.resolve_default_ph("   ").source, PhSource::Fallback);
}

#[test]
fn test_tier_boundaries() {
    let classifier = AcidityClassifier::default();
    let tier = |ph: f64| classifier.classify("anything", Some(ph)).tier;

    assert_eq!(tier(4.49), AcidityTier::High);
    assert_eq!(tier(4.5), AcidityTier::Medium);
    assert_eq!(tier(5.49), AcidityTier::Medium);
    assert_eq!(tier(5.5), AcidityTier::Low);
    assert_eq!(tier(14.0), AcidityTier::Low);
}

#[test]
fn test_measured_zero_is_used() {
    let assessment = AcidityClassifier::default().classify("battery acid", Some(0.0));
    assert_eq!(assessment.ph, 0.0);
    assert_eq!(assessment.tier, AcidityTier::High);
    assert_eq!(assessment.source, PhSource::Measured);
}

#[test]
fn test_invalid_measured_ph_falls_back_to_lookup() {
    let classifier = AcidityClassifier::default();
    for invalid in [15.0, -0.1, f64::NAN, f64::INFINITY] {
        let assessment = classifier.classify("lemon", Some(invalid));
        assert_eq!(assessment.ph, 2.0, "measured {invalid} should be ignored");
        assert_eq!(assessment.source, PhSource::ExactMatch);
    }
}

#[test]
fn test_tier_descriptions_and_colors() {
    assert!(AcidityTier::High.description().starts_with("May cause digestive sensitivity"));
    assert!(AcidityTier::Medium.description().starts_with("Moderate acidity level"));
    assert!(AcidityTier::Low.description().starts_with("Gentle on the digestive system"));
    assert_eq!(AcidityTier::Medium.accent_color(), "#F59E0B");
    assert_eq!(AcidityTier::Low.to_string(), "LOW");
}

#[test]
fn test_scale_fraction() {
    let classifier = AcidityClassifier::default();
    assert_eq!(classifier.classify("x", Some(7.0)).scale_fraction(), 0.5);
    assert_eq!(classifier.classify("x", Some(14.0)).scale_fraction(), 1.0);
}

#[test]
fn test_custom_table_overrides_defaults() {
    let table = PhReferenceTable::new(
        [("Lemon", 2.2), ("house special", 4.0)],
        vec![KeywordRule::new("Soup", 6.6)],
        6.5,
    )
    .unwrap();
    let classifier = AcidityClassifier::new(table, AcidityThresholds::default());

    assert_eq!(classifier.lookup_default_ph("lemon"), 2.2);
    assert_eq!(classifier.lookup_default_ph("House Special"), 4.0);
    assert_eq!(classifier.lookup_default_ph("tomato soup"), 6.6);
    assert_eq!(classifier.lookup_default_ph("egg"), 6.5);
}

#[test]
fn test_custom_thresholds() {
    let thresholds = AcidityThresholds {
        high_below: 3.0,
        medium_below: 4.0,
    };
    thresholds.validate().unwrap();
    let classifier = AcidityClassifier::new(PhReferenceTable::default(), thresholds);
    assert_eq!(classifier.classify("orange", None).tier, AcidityTier::Medium);
    assert_eq!(classifier.classify("cola", None).tier, AcidityTier::High);
}

#[test]
fn test_invalid_thresholds_rejected() {
    let inverted = AcidityThresholds {
        high_below: 6.0,
        medium_below: 5.0,
    };
    assert_eq!(inverted.validate().unwrap_err().code, ErrorCode::ConfigInvalid);

    let off_scale = AcidityThresholds {
        high_below: 4.5,
        medium_below: 20.0,
    };
    assert!(off_scale.validate().is_err());
}

#[test]
fn test_table_rejects_invalid_entries() {
    let out_of_range = PhReferenceTable::new([("lava", 15.0)], Vec::new(), 6.0);
    assert_eq!(out_of_range.unwrap_err().code, ErrorCode::ConfigInvalid);

    let duplicate = PhReferenceTable::new([("Lemon", 2.0), ("lemon ", 2.1)], Vec::new(), 6.0);
    assert!(duplicate.is_err());

    let empty_name = PhReferenceTable::new([("  ", 5.0)], Vec::new(), 6.0);
    assert!(empty_name.is_err());

    let bad_fallback = PhReferenceTable::new([("lemon", 2.0)], Vec::new(), f64::NAN);
    assert!(bad_fallback.is_err());
}

#[test]
fn test_table_json_round_trip_validates() {
    let table = PhReferenceTable::default();
    let json = serde_json::to_string(&table).unwrap();
    let parsed = PhReferenceTable::from_json(&json).unwrap();
    assert_eq!(parsed, table);

    let invalid = r#"{"exact": {"lemon": 42.0}}"#;
    assert!(PhReferenceTable::from_json(invalid).is_err());
}

#[test]
fn test_load_table_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "exact": {{"Kimchi": 4.2}},
            "keyword_rules": [{{"keyword": "ferment", "ph": 4.0}}],
            "fallback_ph": 6.8
        }}"#
    )
    .unwrap();

    let table = load_ph_table(file.path()).unwrap();
    assert_eq!(table.exact_len(), 1);
    let classifier = AcidityClassifier::new(table, AcidityThresholds::default());
    assert_eq!(classifier.lookup_default_ph("kimchi"), 4.2);
    assert_eq!(classifier.lookup_default_ph("fermented tofu"), 4.0);
    assert_eq!(classifier.lookup_default_ph("tofu"), 6.8);
}

#[test]
fn test_load_table_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_ph_table(&dir.path().join("missing.json"));
    assert!(result.is_err());
}
