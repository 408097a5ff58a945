// ABOUTME: Macronutrient percentage-of-calories calculation with fixed Atwater factors
// ABOUTME: Converts protein/carbs/fat grams into independently rounded integer percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Macro Distribution Module
//!
//! Converts absolute macronutrient grams into the share of calories each
//! macro contributes.
//!
//! Formula:
//! - `total = protein_g x 4 + carbs_g x 4 + fat_g x 9`
//! - `pct_i = round(kcal_i / total x 100)`
//!
//! Fiber is not part of the basis. Each percentage is rounded on its own and
//! no renormalization pass runs, so the three values can sum to 99, 100, or
//! 101. Callers who want an exact 100 must opt in through
//! [`MacroDistribution::normalized_to_hundred`].
//!
//! When the caloric total is zero the calculator returns `{0, 0, 0}` and
//! attaches [`MacroWarning::DivisionByZero`] instead of producing `NaN`.

use nutrilens_core::constants::macros::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PERCENT_SCALE, PROTEIN_KCAL_PER_G,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Energy density of each macronutrient (kcal per gram)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroCaloricFactors {
    /// Protein kcal/g (default 4)
    pub protein_kcal_per_g: f64,
    /// Carbohydrate kcal/g (default 4)
    pub carbs_kcal_per_g: f64,
    /// Fat kcal/g (default 9)
    pub fat_kcal_per_g: f64,
}

impl Default for MacroCaloricFactors {
    fn default() -> Self {
        Self {
            protein_kcal_per_g: PROTEIN_KCAL_PER_G,
            carbs_kcal_per_g: CARBS_KCAL_PER_G,
            fat_kcal_per_g: FAT_KCAL_PER_G,
        }
    }
}

/// Share of calories contributed by each macro, as whole percentages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// All-zero distribution used when there are no calories to divide
    pub const ZERO: Self = Self {
        protein_pct: 0,
        carbs_pct: 0,
        fat_pct: 0,
    };

    /// Get as a tuple (protein, carbs, fat)
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.protein_pct, self.carbs_pct, self.fat_pct)
    }

    /// Sum of the three percentages (99, 100, or 101 for non-degenerate input)
    #[must_use]
    pub fn sum(&self) -> u16 {
        u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fat_pct)
    }

    /// Return a copy whose percentages sum to exactly 100
    ///
    /// The largest component absorbs the rounding drift; ties go to protein,
    /// then carbs, then fat. An all-zero distribution is returned unchanged.
    /// This is a deliberate presentation choice and is never applied by
    /// [`MacroPercentageCalculator::compute`].
    #[must_use]
    pub fn normalized_to_hundred(&self) -> Self {
        let total = self.sum();
        if total == 0 || total == 100 {
            return *self;
        }

        let mut values = [self.protein_pct, self.carbs_pct, self.fat_pct];
        let mut largest = 0;
        for (index, value) in values.iter().enumerate() {
            if *value > values[largest] {
                largest = index;
            }
        }

        let adjusted = i32::from(values[largest]) + 100 - i32::from(total);
        values[largest] = adjusted.clamp(0, 100) as u8;

        Self {
            protein_pct: values[0],
            carbs_pct: values[1],
            fat_pct: values[2],
        }
    }
}

/// Macro input identifier used in warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroField {
    /// Protein grams
    Protein,
    /// Carbohydrate grams
    Carbs,
    /// Fat grams
    Fat,
}

impl fmt::Display for MacroField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        })
    }
}

/// Condition reported alongside a macro computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MacroWarning {
    /// Total caloric weight was zero; the distribution is all zeros
    DivisionByZero,
    /// An input was negative or not finite and was treated as zero
    InvalidGrams {
        /// Which macro was rejected
        field: MacroField,
        /// The rejected value
        value: f64,
    },
}

impl fmt::Display for MacroWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => {
                f.write_str("no calories from protein, carbs, or fat; percentages set to zero")
            }
            Self::InvalidGrams { field, value } => {
                write!(f, "{field} grams {value} is not a non-negative number; treated as 0")
            }
        }
    }
}

/// Result of [`MacroPercentageCalculator::compute`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroComputation {
    /// Rounded percentages
    pub distribution: MacroDistribution,
    /// Conditions the caller may want to surface
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<MacroWarning>,
}

impl MacroComputation {
    /// Whether the zero-calorie fallback was used
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        self.warnings
            .iter()
            .any(|warning| matches!(warning, MacroWarning::DivisionByZero))
    }
}

/// Converts macro grams into percentage-of-calories values
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroPercentageCalculator {
    factors: MacroCaloricFactors,
}

impl MacroPercentageCalculator {
    /// Create a calculator with custom caloric factors
    #[must_use]
    pub const fn new(factors: MacroCaloricFactors) -> Self {
        Self { factors }
    }

    /// Caloric factors in use
    #[must_use]
    pub const fn factors(&self) -> &MacroCaloricFactors {
        &self.factors
    }

    /// Compute the macro distribution for the given grams
    ///
    /// Never panics and never yields `NaN`: invalid grams are zeroed and a
    /// zero caloric total produces [`MacroDistribution::ZERO`], each with a
    /// warning attached.
    #[must_use]
    pub fn compute(&self, protein_g: f64, carbs_g: f64, fat_g: f64) -> MacroComputation {
        let mut warnings = Vec::new();
        let protein_g = sanitize_grams(MacroField::Protein, protein_g, &mut warnings);
        let carbs_g = sanitize_grams(MacroField::Carbs, carbs_g, &mut warnings);
        let fat_g = sanitize_grams(MacroField::Fat, fat_g, &mut warnings);

        let protein_kcal = protein_g * self.factors.protein_kcal_per_g;
        let carbs_kcal = carbs_g * self.factors.carbs_kcal_per_g;
        let fat_kcal = fat_g * self.factors.fat_kcal_per_g;
        let total_kcal = protein_kcal + carbs_kcal + fat_kcal;

        if !(total_kcal.is_finite() && total_kcal > 0.0) {
            warnings.push(MacroWarning::DivisionByZero);
            return MacroComputation {
                distribution: MacroDistribution::ZERO,
                warnings,
            };
        }

        MacroComputation {
            distribution: MacroDistribution {
                protein_pct: percent_of(protein_kcal, total_kcal),
                carbs_pct: percent_of(carbs_kcal, total_kcal),
                fat_pct: percent_of(fat_kcal, total_kcal),
            },
            warnings,
        }
    }
}

fn sanitize_grams(field: MacroField, grams: f64, warnings: &mut Vec<MacroWarning>) -> f64 {
    if grams.is_finite() && grams >= 0.0 {
        grams
    } else {
        warnings.push(MacroWarning::InvalidGrams {
            field,
            value: grams,
        });
        0.0
    }
}

/// Half-up rounding; inputs are non-negative so `f64::round` agrees with it
fn percent_of(part_kcal: f64, total_kcal: f64) -> u8 {
    (part_kcal / total_kcal * PERCENT_SCALE)
        .round()
        .clamp(0.0, PERCENT_SCALE) as u8
}
