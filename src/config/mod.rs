// ABOUTME: Configuration module for adjustment factors and plan synthesis settings
// ABOUTME: Re-exports typed config structs with documented defaults and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! Engine configuration.
//!
//! Plain serde structs with documented defaults. Every struct carries a
//! `validate()` pass so adapters can fail fast on nonsensical overrides
//! before any plan generation runs.

pub mod adjustment;
pub mod error;
pub mod synthesis;

pub use adjustment::AdjustmentConfig;
pub use error::ConfigError;
pub use synthesis::SynthesisConfig;

use serde::{Deserialize, Serialize};

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Calorie-adjustment factors and brackets
    pub adjustment: AdjustmentConfig,
    /// Plan synthesis settings
    pub synthesis: SynthesisConfig,
}

impl PlanConfig {
    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in any section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.adjustment.validate()?;
        self.synthesis.validate()
    }
}
