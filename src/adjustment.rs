// ABOUTME: Adjustment engine applying layered calorie corrections from patient attributes
// ABOUTME: Age, weight-management focus, BMI brackets, and target-calorie scaling compose in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! Adjustment Engine
//!
//! Transforms a template's base calorie value into a patient-adjusted value.
//! The corrections are layered and compose multiplicatively in a fixed order
//! (the engine never picks just one):
//!
//! 1. age above the senior threshold → senior multiplier
//! 2. weight-management health focus → weight-management multiplier
//! 3. BMI bracket correction, evaluated independently of step 2
//! 4. explicit target-calorie override ÷ the canonical 2000 kcal baseline
//!
//! The final value is rounded to the nearest integer calorie. Malformed or
//! missing attributes fall back to neutral behavior — this module has no
//! error path.

use crate::config::AdjustmentConfig;
use crate::models::PatientSnapshot;
use tracing::debug;

/// Health-focus keyword families recognized by the engine.
///
/// Matching is case-insensitive substring containment in either direction,
/// so "Weight Loss Program" matches the weight-management family.
pub mod keywords {
    /// Terms triggering the weight-management calorie correction
    pub const WEIGHT_MANAGEMENT: &[&str] =
        &["weight", "weight loss", "slim", "obesity", "fat loss"];
    /// Terms adding the digestion guideline
    pub const DIGESTION: &[&str] = &["digest", "gut", "bloat", "acidity"];
    /// Terms adding the steady-energy guideline
    pub const ENERGY: &[&str] = &["energy", "fatigue", "tired", "stamina"];
    /// Terms adding the immunity guideline
    pub const IMMUNITY: &[&str] = &["immun", "cold", "ojas"];
    /// Terms adding the calming-evening guideline
    pub const STRESS: &[&str] = &["stress", "sleep", "anxiety", "calm"];
}

/// Whether any stated health-focus keyword matches a family.
///
/// Empty and whitespace-only entries are skipped; they would otherwise
/// reverse-contain into every family term.
#[must_use]
pub fn matches_family(health_focus: &[String], family: &[&str]) -> bool {
    health_focus.iter().any(|focus| {
        let focus = focus.trim().to_lowercase();
        if focus.is_empty() {
            return false;
        }
        family
            .iter()
            .any(|term| focus.contains(term) || term.contains(focus.as_str()))
    })
}

/// Apply the layered corrections to a base calorie value and round to the
/// nearest integer calorie.
///
/// `target_calories` is the optional per-day override from the caller's
/// preferences; everything else comes from the patient snapshot. Missing
/// demographics contribute no correction.
#[must_use]
pub fn adjusted_calories(
    base_calories: f64,
    patient: &PatientSnapshot,
    target_calories: Option<u32>,
    config: &AdjustmentConfig,
) -> u32 {
    let mut adjusted = base_calories;

    // Step 1: lighter, easier-to-digest portions past the senior threshold
    if patient.age.is_some_and(|age| age > config.senior_age_threshold) {
        adjusted *= config.senior_multiplier;
    }

    // Step 2: weight-management focus
    if matches_family(&patient.health_focus, keywords::WEIGHT_MANAGEMENT) {
        adjusted *= config.weight_management_multiplier;
    }

    // Step 3: BMI bracket, independent of step 2
    if let Some(bmi) = patient.bmi() {
        if bmi < config.underweight_bmi {
            adjusted *= config.underweight_multiplier;
        } else if bmi > config.overweight_bmi {
            adjusted *= config.overweight_multiplier;
        }
    }

    // Step 4: explicit daily target scaled against the canonical baseline
    if let Some(target) = target_calories {
        adjusted *= f64::from(target) / config.baseline_daily_calories;
    }

    let rounded = adjusted.max(0.0).round() as u32;
    debug!(
        base_calories,
        adjusted = rounded,
        age = ?patient.age,
        bmi = ?patient.bmi(),
        "calorie adjustment applied"
    );
    rounded
}
