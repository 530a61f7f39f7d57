// ABOUTME: Plan synthesizer configuration with duration guards and fallback dosha
// ABOUTME: Configures the default recommendation key and plan length limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! Plan Synthesizer Configuration

use super::error::ConfigError;
use crate::models::Dosha;
use serde::{Deserialize, Serialize};

/// Plan synthesis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Recommendation-table key used when the constitution label is balanced
    /// or unresolvable (Vata, first in canonical order)
    pub default_dosha: Dosha,
    /// Minimum accepted plan duration in days (1)
    pub min_duration_days: u32,
    /// Maximum accepted plan duration in days (365)
    pub max_duration_days: u32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            default_dosha: Dosha::Vata,
            min_duration_days: 1,
            max_duration_days: 365,
        }
    }
}

impl SynthesisConfig {
    /// Validate duration bounds
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the duration bounds are empty or inverted
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.min_duration_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_duration_days must be at least 1",
            ));
        }
        if self.max_duration_days < self.min_duration_days {
            return Err(ConfigError::InvalidRange(
                "max_duration_days must be at least min_duration_days",
            ));
        }
        Ok(())
    }
}
