// ABOUTME: Default pH reference data: exact food names plus ordered keyword fallback rules
// ABOUTME: Immutable, injectable table that can be replaced with a JSON file at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! pH Reference Table
//!
//! A food name resolves to a default pH in three stages:
//!
//! 1. exact match of the normalized (lowercased, trimmed) name;
//! 2. the first keyword rule found at a word boundary of the name;
//! 3. the table's fallback pH.
//!
//! A keyword only counts when it starts or ends a word, so "steamed" never
//! matches `tea` and "chocolate" never matches `cola`. Rules are still
//! evaluated strictly in order, and keywords that share a word start
//! ("eggplant" and `egg`, "lemonade" and `lemon`) list the longer one first.

use crate::keywords::contains_keyword;
use nutrilens_core::constants::acidity::{FALLBACK_PH, PH_MAX, PH_MIN};
use nutrilens_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Representative pH for well-known foods, beverages, and dishes
const DEFAULT_EXACT_PH: &[(&str, f64)] = &[
    // Citrus and fruit
    ("lemon", 2.0),
    ("lime", 2.0),
    ("lemon juice", 2.2),
    ("lime juice", 2.2),
    ("orange", 3.7),
    ("orange juice", 3.5),
    ("grapefruit", 3.3),
    ("apple", 3.6),
    ("green apple", 3.3),
    ("apple juice", 3.5),
    ("banana", 5.0),
    ("pineapple", 3.5),
    ("strawberry", 3.4),
    ("blueberry", 3.3),
    ("raspberry", 3.4),
    ("cranberry", 2.5),
    ("cranberry juice", 2.5),
    ("grape", 3.5),
    ("cherry", 3.8),
    ("peach", 3.8),
    ("pear", 3.9),
    ("plum", 3.2),
    ("mango", 5.0),
    ("papaya", 5.5),
    ("watermelon", 5.6),
    ("cantaloupe", 6.2),
    ("kiwi", 3.4),
    ("pomegranate", 3.1),
    ("avocado", 6.4),
    ("coconut", 6.1),
    // Vegetables
    ("tomato", 4.3),
    ("tomato sauce", 4.0),
    ("potato", 5.8),
    ("sweet potato", 5.5),
    ("carrot", 6.0),
    ("broccoli", 6.5),
    ("spinach", 6.8),
    ("cucumber", 5.5),
    ("lettuce", 6.0),
    ("onion", 5.5),
    ("garlic", 5.8),
    ("bell pepper", 5.0),
    ("corn", 6.2),
    ("peas", 6.3),
    ("eggplant", 5.0),
    ("mushroom", 6.3),
    ("celery", 5.8),
    ("cabbage", 5.4),
    ("sauerkraut", 3.5),
    ("pickles", 3.3),
    ("olives", 3.8),
    // Eggs, dairy, and protein
    ("egg", 7.6),
    ("eggs", 7.6),
    ("boiled egg", 7.6),
    ("egg white", 8.0),
    ("milk", 6.7),
    ("whole milk", 6.7),
    ("skim milk", 6.7),
    ("yogurt", 4.4),
    ("greek yogurt", 4.3),
    ("cheddar cheese", 5.5),
    ("cottage cheese", 5.0),
    ("cream cheese", 4.6),
    ("butter", 6.3),
    ("chicken", 6.2),
    ("chicken breast", 6.2),
    ("beef", 5.8),
    ("steak", 5.8),
    ("pork", 6.0),
    ("bacon", 6.0),
    ("salmon", 6.3),
    ("tuna", 6.0),
    ("shrimp", 6.8),
    ("tofu", 7.2),
    ("peanut butter", 6.3),
    ("almonds", 6.5),
    // Grains
    ("rice", 6.5),
    ("white rice", 6.5),
    ("brown rice", 6.5),
    ("oatmeal", 6.2),
    ("white bread", 5.5),
    ("whole wheat bread", 5.5),
    ("pasta", 6.0),
    ("quinoa", 6.5),
    // Beverages
    ("coca cola", 2.5),
    ("coke", 2.5),
    ("diet coke", 3.1),
    ("pepsi", 2.5),
    ("sprite", 3.3),
    ("red bull", 3.3),
    ("coffee", 5.0),
    ("black coffee", 5.0),
    ("espresso", 5.2),
    ("green tea", 7.0),
    ("herbal tea", 7.0),
    ("black tea", 5.5),
    ("water", 7.0),
    ("sparkling water", 5.0),
    ("beer", 4.3),
    ("red wine", 3.4),
    ("white wine", 3.3),
    ("kombucha", 3.0),
    // Condiments and sweets
    ("honey", 3.9),
    ("vinegar", 2.4),
    ("apple cider vinegar", 3.0),
    ("ketchup", 3.9),
    ("mustard", 3.6),
    ("mayonnaise", 4.1),
    ("dark chocolate", 5.5),
    ("hummus", 4.5),
    // Dishes
    ("pizza", 5.5),
    ("hamburger", 5.9),
    ("french fries", 5.8),
    ("sushi", 5.0),
    ("spaghetti bolognese", 5.0),
    ("chicken soup", 6.0),
];

/// Keyword rules checked in priority order when no exact entry matches
const DEFAULT_KEYWORD_RULES: &[(&str, f64)] = &[
    // Beverages
    ("chocolate", 5.5),
    ("cola", 2.5),
    ("soda", 3.0),
    ("energy drink", 3.0),
    ("lemonade", 2.7),
    ("kombucha", 3.0),
    ("vinegar", 2.8),
    ("juice", 3.7),
    ("wine", 3.4),
    ("beer", 4.3),
    ("coffee", 5.0),
    ("espresso", 5.0),
    ("latte", 6.0),
    ("cappuccino", 6.0),
    ("steak", 5.8),
    ("tea", 7.0),
    // Dairy
    ("milk", 6.7),
    ("yogurt", 4.4),
    ("cheese", 5.2),
    // Fruit and pickled
    ("pickle", 3.3),
    ("citrus", 2.5),
    ("lemon", 2.0),
    ("lime", 2.0),
    ("grapefruit", 3.3),
    ("orange", 3.7),
    ("berry", 3.4),
    ("apple", 3.6),
    ("grape", 3.5),
    ("tomato", 4.3),
    // "eggplant" contains "egg"
    ("eggplant", 5.0),
    ("egg", 7.6),
    // Meat and fish
    ("chicken", 6.2),
    ("beef", 5.8),
    ("pork", 6.0),
    ("fish", 6.5),
    ("salmon", 6.3),
    // Staples
    ("bread", 5.5),
    ("rice", 6.5),
    ("pasta", 6.0),
    ("potato", 5.8),
    ("bean", 6.0),
    ("banana", 5.0),
];

/// One keyword fallback rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Lowercase keyword looked for at a word boundary of the normalized name
    pub keyword: String,
    /// pH assigned when the keyword matches
    pub ph: f64,
}

impl KeywordRule {
    /// Create a rule; the keyword is normalized like food names
    pub fn new(keyword: impl AsRef<str>, ph: f64) -> Self {
        Self {
            keyword: normalize_food_name(keyword.as_ref()),
            ph,
        }
    }
}

/// On-disk layout of a pH table
#[derive(Debug, Deserialize)]
struct PhTableFile {
    exact: BTreeMap<String, f64>,
    #[serde(default)]
    keyword_rules: Vec<KeywordRule>,
    #[serde(default = "default_fallback_ph")]
    fallback_ph: f64,
}

const fn default_fallback_ph() -> f64 {
    FALLBACK_PH
}

/// Immutable mapping from food names to default pH values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PhTableFile")]
pub struct PhReferenceTable {
    exact: BTreeMap<String, f64>,
    keyword_rules: Vec<KeywordRule>,
    fallback_ph: f64,
}

impl TryFrom<PhTableFile> for PhReferenceTable {
    type Error = AppError;

    fn try_from(file: PhTableFile) -> Result<Self, Self::Error> {
        Self::new(file.exact, file.keyword_rules, file.fallback_ph)
    }
}

impl Default for PhReferenceTable {
    fn default() -> Self {
        Self {
            exact: DEFAULT_EXACT_PH
                .iter()
                .map(|(name, ph)| ((*name).to_owned(), *ph))
                .collect(),
            keyword_rules: DEFAULT_KEYWORD_RULES
                .iter()
                .map(|(keyword, ph)| KeywordRule::new(keyword, *ph))
                .collect(),
            fallback_ph: FALLBACK_PH,
        }
    }
}

impl PhReferenceTable {
    /// Build a table from exact entries, ordered keyword rules, and a fallback
    ///
    /// Names and keywords are normalized. Every pH must lie in `[0, 14]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if any pH is out of range, a name or keyword is
    /// empty after normalization, or two exact names collide.
    pub fn new<I, S>(exact: I, keyword_rules: Vec<KeywordRule>, fallback_ph: f64) -> AppResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        validate_ph("fallback_ph", fallback_ph)?;

        let mut normalized = BTreeMap::new();
        for (name, ph) in exact {
            let key = normalize_food_name(name.as_ref());
            if key.is_empty() {
                return Err(AppError::config_invalid(
                    "pH table contains an empty food name",
                ));
            }
            validate_ph(&key, ph)?;
            if normalized.insert(key.clone(), ph).is_some() {
                return Err(AppError::config_invalid(format!(
                    "pH table lists '{key}' more than once"
                )));
            }
        }

        let mut rules = Vec::with_capacity(keyword_rules.len());
        for rule in keyword_rules {
            let rule = KeywordRule::new(&rule.keyword, rule.ph);
            if rule.keyword.is_empty() {
                return Err(AppError::config_invalid(
                    "pH table contains an empty keyword rule",
                ));
            }
            validate_ph(&rule.keyword, rule.ph)?;
            rules.push(rule);
        }

        Ok(Self {
            exact: normalized,
            keyword_rules: rules,
            fallback_ph,
        })
    }

    /// Parse and validate a table from JSON
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON (validation failures
    /// surface through the same path since they run during deserialization).
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Same table with a different fallback pH
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `fallback_ph` is outside `[0, 14]`.
    pub fn with_fallback_ph(mut self, fallback_ph: f64) -> AppResult<Self> {
        validate_ph("fallback_ph", fallback_ph)?;
        self.fallback_ph = fallback_ph;
        Ok(self)
    }

    /// pH for an already-normalized exact name
    #[must_use]
    pub fn exact_ph(&self, normalized_name: &str) -> Option<f64> {
        self.exact.get(normalized_name).copied()
    }

    /// First keyword rule found in an already-normalized name
    #[must_use]
    pub fn first_keyword_match(&self, normalized_name: &str) -> Option<&KeywordRule> {
        self.keyword_rules
            .iter()
            .find(|rule| contains_keyword(normalized_name, &rule.keyword))
    }

    /// pH used when nothing matches
    #[must_use]
    pub const fn fallback_ph(&self) -> f64 {
        self.fallback_ph
    }

    /// Number of exact entries
    #[must_use]
    pub fn exact_len(&self) -> usize {
        self.exact.len()
    }

    /// Keyword rules in priority order
    #[must_use]
    pub fn keyword_rules(&self) -> &[KeywordRule] {
        &self.keyword_rules
    }
}

/// Lowercase and trim a food name for table lookups
#[must_use]
pub fn normalize_food_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn validate_ph(name: &str, ph: f64) -> AppResult<()> {
    if super::is_valid_ph(ph) {
        Ok(())
    } else {
        Err(AppError::config_invalid(format!(
            "pH for '{name}' must be between {PH_MIN} and {PH_MAX}, got {ph}"
        )))
    }
}
