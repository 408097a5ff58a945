// ABOUTME: Intelligence configuration for macro factors, acidity thresholds, pH table, and allergens
// ABOUTME: Global OnceLock singleton with environment overrides and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Intelligence Configuration
//!
//! Settings consumed by the derived-nutrition components:
//!
//! - `macros` - caloric factors for the percentage calculation
//! - `acidity` - tier thresholds and the pH reference table
//! - `allergens` - keyword indicator lists for allergen detection
//!
//! Defaults come from the built-in tables. Environment variables override
//! individual values and `NUTRILENS_PH_TABLE_PATH` replaces the whole pH
//! table with a JSON file.

use super::ConfigError;
use crate::constants::acidity::{PH_MAX, PH_MIN};
use crate::constants::env_config;
use crate::intelligence::{
    AcidityClassifier, AcidityThresholds, AllergenDetector, AllergenIndicators,
    MacroCaloricFactors, MacroPercentageCalculator, PhReferenceTable,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Acidity classification settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcidityConfig {
    /// Tier boundaries
    pub thresholds: AcidityThresholds,
    /// Reference table (built-in unless loaded from `table_path`)
    pub table: PhReferenceTable,
    /// File the table was loaded from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_path: Option<PathBuf>,
}

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Caloric factors for macro percentages
    pub macros: MacroCaloricFactors,
    /// Acidity thresholds and pH table
    pub acidity: AcidityConfig,
    /// Allergen keyword indicators
    pub allergens: AllergenIndicators,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    ///
    /// Loads once on first use; falls back to defaults (with a warning) when
    /// the environment holds invalid values.
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables and the optional pH table file
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values, the
    /// table file cannot be read or parsed, or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(path) = env::var(env_config::PH_TABLE_PATH) {
            let path = PathBuf::from(path);
            config.acidity.table = load_ph_table(&path)?;
            info!(path = %path.display(), entries = config.acidity.table.exact_len(), "Loaded pH reference table");
            config.acidity.table_path = Some(path);
        }

        config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::PROTEIN_KCAL_PER_G,
            &mut self.macros.protein_kcal_per_g,
        )?;
        Self::apply_env_var(
            env_config::CARBS_KCAL_PER_G,
            &mut self.macros.carbs_kcal_per_g,
        )?;
        Self::apply_env_var(env_config::FAT_KCAL_PER_G, &mut self.macros.fat_kcal_per_g)?;

        Self::apply_env_var(
            env_config::ACIDITY_HIGH_BELOW,
            &mut self.acidity.thresholds.high_below,
        )?;
        Self::apply_env_var(
            env_config::ACIDITY_MEDIUM_BELOW,
            &mut self.acidity.thresholds.medium_below,
        )?;

        let mut fallback_ph = self.acidity.table.fallback_ph();
        Self::apply_env_var(env_config::FALLBACK_PH, &mut fallback_ph)?;
        if !(fallback_ph.is_finite() && (PH_MIN..=PH_MAX).contains(&fallback_ph)) {
            return Err(ConfigError::ValueOutOfRange(
                "fallback pH must be between 0 and 14",
            ));
        }
        self.acidity.table = self
            .acidity
            .table
            .with_fallback_ph(fallback_ph)
            .map_err(|e| ConfigError::Parse(e.message))?;

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a caloric factor is not positive, a threshold is
    /// off the pH scale, or the thresholds are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.macros;
        for value in [
            factors.protein_kcal_per_g,
            factors.carbs_kcal_per_g,
            factors.fat_kcal_per_g,
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange(
                    "macro caloric factors must be positive",
                ));
            }
        }

        let thresholds = &self.acidity.thresholds;
        for value in [thresholds.high_below, thresholds.medium_below] {
            if !(value.is_finite() && (PH_MIN..=PH_MAX).contains(&value)) {
                return Err(ConfigError::ValueOutOfRange(
                    "acidity thresholds must be between 0 and 14",
                ));
            }
        }
        if thresholds.high_below >= thresholds.medium_below {
            return Err(ConfigError::InvalidRange(
                "acidity high_below must be < medium_below",
            ));
        }

        if self
            .allergens
            .definite
            .iter()
            .chain(&self.allergens.possible)
            .any(|indicator| indicator.allergen.trim().is_empty())
        {
            return Err(ConfigError::ValueOutOfRange(
                "allergen indicator names must not be empty",
            ));
        }

        Ok(())
    }

    /// Macro calculator using the configured factors
    #[must_use]
    pub const fn macro_calculator(&self) -> MacroPercentageCalculator {
        MacroPercentageCalculator::new(self.macros)
    }

    /// Acidity classifier using the configured table and thresholds
    #[must_use]
    pub fn acidity_classifier(&self) -> AcidityClassifier {
        AcidityClassifier::new(self.acidity.table.clone(), self.acidity.thresholds)
    }

    /// Allergen detector using the configured indicators
    #[must_use]
    pub fn allergen_detector(&self) -> AllergenDetector {
        AllergenDetector::new(self.allergens.clone())
    }
}

/// Read and validate a pH reference table from a JSON file
///
/// # Errors
///
/// Returns `ConfigError::Io` when the file cannot be read and
/// `ConfigError::Parse` when it is not a valid table
pub fn load_ph_table(path: &Path) -> Result<PhReferenceTable, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    PhReferenceTable::from_json(&json)
        .map_err(|e| ConfigError::Parse(format!("pH table {}: {}", path.display(), e.message)))
}
