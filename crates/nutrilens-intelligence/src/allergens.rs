// ABOUTME: Allergen severity aggregation and keyword-based allergen detection from food names
// ABOUTME: Separates confirmed allergens from possible ones and produces caution warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Allergen Module
//!
//! Two independent pieces:
//!
//! - [`AllergenSeverityAggregator`] reduces allergen records to a warning
//!   flag plus the confirmed and possible names, in input order.
//! - [`AllergenDetector`] derives allergen records from a food name using
//!   category keyword lists. Definite categories are checked first; a
//!   category found as definite is not reported again as possible.
//!
//! Keyword matching is substring based on the lowercased name. Keywords with
//! a trailing space (`"egg "`) match at a word end, so "boiled egg" matches and
//! "grilled eggplant" does not. Keywords containing an interior space
//! (`"hot chocolate"`) also match the name with spaces removed.

use nutrilens_core::models::Allergen;
use serde::{Deserialize, Serialize};

const CONFIRMED_CAUTION: &str = "This item contains confirmed allergens. Please exercise caution \
     if you have known allergies or sensitivities to any of the listed ingredients.";

/// Aggregated view of a food's allergen records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenWarning {
    /// At least one allergen is definite
    pub has_confirmed: bool,
    /// Definite allergen names, in input order
    pub confirmed_names: Vec<String>,
    /// Possible allergen names, in input order
    #[serde(default)]
    pub possible_names: Vec<String>,
}

impl AllergenWarning {
    /// Caution text shown when confirmed allergens are present
    #[must_use]
    pub const fn caution_message(&self) -> Option<&'static str> {
        if self.has_confirmed {
            Some(CONFIRMED_CAUTION)
        } else {
            None
        }
    }

    /// No allergens of any kind
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.confirmed_names.is_empty() && self.possible_names.is_empty()
    }
}

/// Splits allergen records into confirmed and possible names
#[derive(Debug, Clone, Copy, Default)]
pub struct AllergenSeverityAggregator;

impl AllergenSeverityAggregator {
    /// Aggregate allergen records, preserving input order
    #[must_use]
    pub fn aggregate(allergens: &[Allergen]) -> AllergenWarning {
        let (confirmed, possible): (Vec<&Allergen>, Vec<&Allergen>) =
            allergens.iter().partition(|allergen| allergen.definite);

        AllergenWarning {
            has_confirmed: !confirmed.is_empty(),
            confirmed_names: confirmed.iter().map(|a| a.name.clone()).collect(),
            possible_names: possible.iter().map(|a| a.name.clone()).collect(),
        }
    }
}

/// Allergen category and the name keywords that indicate it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenIndicator {
    /// Category name reported in [`Allergen::name`]
    pub allergen: String,
    /// Lowercase keywords
    pub keywords: Vec<String>,
}

impl AllergenIndicator {
    /// Build an indicator from string slices
    #[must_use]
    pub fn new(allergen: &str, keywords: &[&str]) -> Self {
        Self {
            allergen: allergen.to_owned(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, padded_name: &str, compact_name: &str) -> bool {
        self.keywords.iter().any(|keyword| {
            padded_name.contains(keyword.as_str())
                || (keyword.trim().contains(' ')
                    && compact_name.contains(keyword.replace(' ', "").as_str()))
        })
    }
}

/// Ordered indicator lists used by [`AllergenDetector`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenIndicators {
    /// Categories reported as definite, in check order
    pub definite: Vec<AllergenIndicator>,
    /// Categories reported as possible, in check order
    pub possible: Vec<AllergenIndicator>,
}

impl Default for AllergenIndicators {
    fn default() -> Self {
        Self {
            definite: vec![
                AllergenIndicator::new(
                    "Dairy",
                    &[
                        "milk",
                        "cheese",
                        "yogurt",
                        "butter",
                        "chocolate",
                        "latte",
                        "cappuccino",
                        "mocha",
                        "hot chocolate",
                    ],
                ),
                AllergenIndicator::new(
                    "Nuts",
                    &[
                        "almond",
                        "walnut",
                        "pecan",
                        "cashew",
                        "pistachio",
                        "hazelnut",
                        "macadamia",
                    ],
                ),
                AllergenIndicator::new("Peanut", &["peanut", "peanuts"]),
                AllergenIndicator::new("Fish", &["salmon", "tuna", "cod", "tilapia", "halibut"]),
                AllergenIndicator::new("Shellfish", &["shrimp", "crab", "lobster"]),
                AllergenIndicator::new("Egg", &["egg ", "eggs"]),
                AllergenIndicator::new("Soy", &["tofu", "soya", "edamame"]),
                AllergenIndicator::new("Wheat", &["wheat"]),
            ],
            possible: vec![
                AllergenIndicator::new("Dairy", &["cream", "whey", "casein", "lactose", "milky"]),
                AllergenIndicator::new("Nuts", &["nut"]),
                AllergenIndicator::new(
                    "Gluten",
                    &["rye", "barley", "oats", "bread", "pasta", "flour", "cereal"],
                ),
                AllergenIndicator::new("Soy", &["miso", "tempeh"]),
                AllergenIndicator::new("Egg", &["mayonnaise", "meringue", "albumin"]),
                AllergenIndicator::new("Fish", &["fish", "anchovy"]),
                AllergenIndicator::new("Shellfish", &["prawn", "clam", "mussel", "oyster"]),
                AllergenIndicator::new("Sesame", &["sesame", "tahini"]),
            ],
        }
    }
}

/// Derives allergen records from a food name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllergenDetector {
    indicators: AllergenIndicators,
}

impl AllergenDetector {
    /// Create a detector with custom indicator lists
    #[must_use]
    pub const fn new(indicators: AllergenIndicators) -> Self {
        Self { indicators }
    }

    /// Indicator lists in use
    #[must_use]
    pub const fn indicators(&self) -> &AllergenIndicators {
        &self.indicators
    }

    /// Detect allergens: all definite records first, then possible ones
    #[must_use]
    pub fn detect(&self, food_name: &str) -> Vec<Allergen> {
        let lowered = food_name.trim().to_lowercase();
        if lowered.is_empty() {
            return Vec::new();
        }
        let padded = format!(" {lowered} ");
        let compact: String = lowered.chars().filter(|c| !c.is_whitespace()).collect();

        let mut detected: Vec<Allergen> = self
            .indicators
            .definite
            .iter()
            .filter(|indicator| indicator.matches(&padded, &compact))
            .map(|indicator| Allergen::definite(indicator.allergen.clone()))
            .collect();

        let possible: Vec<Allergen> = self
            .indicators
            .possible
            .iter()
            .filter(|indicator| {
                !detected
                    .iter()
                    .any(|found| found.name.eq_ignore_ascii_case(&indicator.allergen))
            })
            .filter(|indicator| indicator.matches(&padded, &compact))
            .map(|indicator| Allergen::possible(indicator.allergen.clone()))
            .collect();

        detected.extend(possible);
        detected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_space_keyword_matches_word_end() {
        let egg = AllergenIndicator::new("Egg", &["egg ", "eggs"]);
        assert!(egg.matches(" boiled egg ", "boiledegg"));
        assert!(egg.matches(" egg salad ", "eggsalad"));
        assert!(!egg.matches(" grilled eggplant ", "grilledeggplant"));
    }

    #[test]
    fn test_compact_form_only_for_multi_word_keywords() {
        let dairy = AllergenIndicator::new("Dairy", &["hot chocolate"]);
        assert!(dairy.matches(" hotchocolate ", "hotchocolate"));
        let nut = AllergenIndicator::new("Nuts", &["nut"]);
        assert!(!nut.matches(" n u t ", "nut"));
    }
}
