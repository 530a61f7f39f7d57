// ABOUTME: Adjustment engine configuration with factor values and bracket boundaries
// ABOUTME: Configures age, weight-management, and BMI corrections plus the calorie baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! Adjustment Engine Configuration
//!
//! Factor values and bracket boundaries for the layered calorie corrections.
//! The defaults reproduce the observed production behavior exactly; changing
//! them changes every generated plan, so overrides are validated.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Calorie-adjustment factors and brackets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentConfig {
    /// Age above which the senior portion correction applies (50)
    pub senior_age_threshold: u32,
    /// Multiplier for patients above the senior threshold (0.9)
    pub senior_multiplier: f64,
    /// Multiplier when a weight-management health focus is present (0.8)
    pub weight_management_multiplier: f64,
    /// BMI below which the underweight correction applies (18.5)
    pub underweight_bmi: f64,
    /// Multiplier for underweight patients (1.2)
    pub underweight_multiplier: f64,
    /// BMI above which the overweight correction applies (25.0)
    pub overweight_bmi: f64,
    /// Multiplier for overweight patients (0.85)
    pub overweight_multiplier: f64,
    /// Canonical daily calorie baseline the target-calorie ratio divides by (2000)
    pub baseline_daily_calories: f64,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            senior_age_threshold: 50,
            senior_multiplier: 0.9,
            weight_management_multiplier: 0.8,
            underweight_bmi: 18.5,
            underweight_multiplier: 1.2,
            overweight_bmi: 25.0,
            overweight_multiplier: 0.85,
            baseline_daily_calories: 2000.0,
        }
    }
}

impl AdjustmentConfig {
    /// Validate factor values and bracket ordering
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a multiplier is non-positive, the
    /// baseline is non-positive, or the BMI brackets overlap
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.senior_multiplier <= 0.0
            || self.weight_management_multiplier <= 0.0
            || self.underweight_multiplier <= 0.0
            || self.overweight_multiplier <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "adjustment multipliers must be positive",
            ));
        }
        if self.baseline_daily_calories <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "baseline_daily_calories must be positive",
            ));
        }
        if self.underweight_bmi >= self.overweight_bmi {
            return Err(ConfigError::InvalidRange(
                "underweight_bmi must be below overweight_bmi",
            ));
        }
        Ok(())
    }
}
