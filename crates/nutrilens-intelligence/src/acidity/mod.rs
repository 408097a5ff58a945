// ABOUTME: Acidity classification from a measured pH or the default pH reference table
// ABOUTME: Maps pH onto HIGH/MEDIUM/LOW tiers with fixed descriptions and display colors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Acidity Classification Module
//!
//! Resolves a pH for a food and places it in one of three tiers:
//!
//! | pH range          | Tier   |
//! |-------------------|--------|
//! | `ph < 4.5`        | High   |
//! | `4.5 <= ph < 5.5` | Medium |
//! | `ph >= 5.5`       | Low    |
//!
//! A measured pH wins when it is finite and within `[0, 14]`. `Some(0.0)` is a
//! real measurement, so presence is checked explicitly. Anything else falls
//! through to [`PhReferenceTable`] lookup. Classification never fails.

mod reference_table;

pub use reference_table::{normalize_food_name, KeywordRule, PhReferenceTable};

use nutrilens_core::constants::acidity::{
    HIGH_ACIDITY_BELOW, MEDIUM_ACIDITY_BELOW, PH_MAX, PH_MIN,
};
use nutrilens_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Acidity tier of a food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AcidityTier {
    /// `ph < 4.5`
    High,
    /// `4.5 <= ph < 5.5`
    Medium,
    /// `ph >= 5.5`
    Low,
}

impl AcidityTier {
    /// Human-readable tier label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High Acidity",
            Self::Medium => "Medium Acidity",
            Self::Low => "Low Acidity",
        }
    }

    /// Fixed dietary guidance for the tier
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::High => {
                "May cause digestive sensitivity. Consider consuming in moderation, \
                 especially if you have acid reflux or gastric concerns."
            }
            Self::Medium => {
                "Moderate acidity level that most people can tolerate well. \
                 Generally safe for regular consumption."
            }
            Self::Low => {
                "Gentle on the digestive system. Suitable for most dietary \
                 preferences and those with acid sensitivity."
            }
        }
    }

    /// Hex accent color used when rendering the tier
    #[must_use]
    pub const fn accent_color(&self) -> &'static str {
        match self {
            Self::High => "#EF4444",
            Self::Medium => "#F59E0B",
            Self::Low => "#10B981",
        }
    }
}

impl fmt::Display for AcidityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        })
    }
}

/// Tier boundaries on the pH scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcidityThresholds {
    /// pH values strictly below this are [`AcidityTier::High`]
    pub high_below: f64,
    /// pH values strictly below this (and not high) are [`AcidityTier::Medium`]
    pub medium_below: f64,
}

impl Default for AcidityThresholds {
    fn default() -> Self {
        Self {
            high_below: HIGH_ACIDITY_BELOW,
            medium_below: MEDIUM_ACIDITY_BELOW,
        }
    }
}

impl AcidityThresholds {
    /// Tier for a pH value
    #[must_use]
    pub fn tier_for(&self, ph: f64) -> AcidityTier {
        if ph < self.high_below {
            AcidityTier::High
        } else if ph < self.medium_below {
            AcidityTier::Medium
        } else {
            AcidityTier::Low
        }
    }

    /// Validate that both boundaries lie on the pH scale and are ordered
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a boundary is outside `[0, 14]` or when
    /// `high_below >= medium_below`.
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("high_below", self.high_below),
            ("medium_below", self.medium_below),
        ] {
            if !is_valid_ph(value) {
                return Err(AppError::config_invalid(format!(
                    "acidity threshold {name} must be between {PH_MIN} and {PH_MAX}, got {value}"
                )));
            }
        }
        if self.high_below >= self.medium_below {
            return Err(AppError::config_invalid(format!(
                "acidity threshold high_below ({}) must be less than medium_below ({})",
                self.high_below, self.medium_below
            )));
        }
        Ok(())
    }
}

/// Where an assessed pH came from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhSource {
    /// Measured value supplied with the food
    Measured,
    /// Exact name match in the reference table
    ExactMatch,
    /// First keyword rule contained in the name
    Keyword {
        /// The keyword that matched
        keyword: String,
    },
    /// Nothing matched; table fallback used
    Fallback,
}

impl fmt::Display for PhSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Measured => f.write_str("measured"),
            Self::ExactMatch => f.write_str("exact match"),
            Self::Keyword { keyword } => write!(f, "keyword '{keyword}'"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// A default pH together with the rule that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhLookup {
    /// Resolved pH
    pub ph: f64,
    /// Resolution stage
    pub source: PhSource,
}

/// Result of [`AcidityClassifier::classify`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcidityAssessment {
    /// pH on the 0-14 scale
    pub ph: f64,
    /// Acidity tier
    pub tier: AcidityTier,
    /// Tier label, e.g. "High Acidity"
    pub label: String,
    /// Fixed dietary guidance for the tier
    pub description: String,
    /// How the pH was obtained
    pub source: PhSource,
}

impl AcidityAssessment {
    /// Position on the 0-14 scale as a fraction in `[0, 1]`
    #[must_use]
    pub fn scale_fraction(&self) -> f64 {
        (self.ph / PH_MAX).clamp(0.0, 1.0)
    }
}

/// Classifies foods by acidity
///
/// Holds an immutable reference table and tier thresholds; cheap to clone
/// and safe to share across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcidityClassifier {
    table: PhReferenceTable,
    thresholds: AcidityThresholds,
}

impl AcidityClassifier {
    /// Create a classifier with an injected table and thresholds
    #[must_use]
    pub const fn new(table: PhReferenceTable, thresholds: AcidityThresholds) -> Self {
        Self { table, thresholds }
    }

    /// Reference table in use
    #[must_use]
    pub const fn table(&self) -> &PhReferenceTable {
        &self.table
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &AcidityThresholds {
        &self.thresholds
    }

    /// Classify a food, preferring a valid measured pH
    #[must_use]
    pub fn classify(&self, food_name: &str, measured_ph: Option<f64>) -> AcidityAssessment {
        let lookup = match measured_ph {
            Some(ph) if is_valid_ph(ph) => PhLookup {
                ph,
                source: PhSource::Measured,
            },
            Some(ph) => {
                debug!(food = food_name, measured_ph = ph, "Ignoring invalid measured pH");
                self.resolve_default_ph(food_name)
            }
            None => self.resolve_default_ph(food_name),
        };

        let tier = self.thresholds.tier_for(lookup.ph);
        AcidityAssessment {
            ph: lookup.ph,
            tier,
            label: tier.label().to_owned(),
            description: tier.description().to_owned(),
            source: lookup.source,
        }
    }

    /// Default pH for a food name
    #[must_use]
    pub fn lookup_default_ph(&self, food_name: &str) -> f64 {
        self.resolve_default_ph(food_name).ph
    }

    /// Default pH for a food name along with the stage that resolved it
    #[must_use]
    pub fn resolve_default_ph(&self, food_name: &str) -> PhLookup {
        let normalized = normalize_food_name(food_name);
        if normalized.is_empty() {
            return self.fallback();
        }

        if let Some(ph) = self.table.exact_ph(&normalized) {
            return PhLookup {
                ph,
                source: PhSource::ExactMatch,
            };
        }

        self.table.first_keyword_match(&normalized).map_or_else(
            || self.fallback(),
            |rule| PhLookup {
                ph: rule.ph,
                source: PhSource::Keyword {
                    keyword: rule.keyword.clone(),
                },
            },
        )
    }

    fn fallback(&self) -> PhLookup {
        PhLookup {
            ph: self.table.fallback_ph(),
            source: PhSource::Fallback,
        }
    }
}

/// Finite and within `[0, 14]`
#[must_use]
pub fn is_valid_ph(ph: f64) -> bool {
    ph.is_finite() && (PH_MIN..=PH_MAX).contains(&ph)
}
