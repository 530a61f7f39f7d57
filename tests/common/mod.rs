// ABOUTME: Shared helpers for integration tests
// ABOUTME: Tracing initialization and patient/preference builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

#![allow(dead_code)] // each integration test binary uses a subset of these helpers

use chrono::NaiveDate;
use prakriti_core::models::{ConstitutionLabel, Dosha, PatientSnapshot, PlanPreferences};
use std::sync::Once;
use uuid::Uuid;

static INIT: Once = Once::new();

/// Install a test tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; silent by default so test output stays readable.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A healthy mid-life Vata patient with no focus keywords or restrictions
pub fn vata_patient() -> PatientSnapshot {
    PatientSnapshot {
        id: Uuid::new_v5(&Uuid::NAMESPACE_OID, b"test-patient-vata"),
        age: Some(35),
        weight_kg: Some(70.0),
        height_cm: Some(175.0),
        health_focus: Vec::new(),
        restrictions: Vec::new(),
        constitution: ConstitutionLabel::Single(Dosha::Vata),
    }
}

/// Worst-case adjustment scenario: age 60, BMI 27, weight-management focus
pub fn senior_weight_focus_patient() -> PatientSnapshot {
    PatientSnapshot {
        id: Uuid::new_v5(&Uuid::NAMESPACE_OID, b"test-patient-senior"),
        age: Some(60),
        // 87.48 kg at 1.80 m → BMI 27.0
        weight_kg: Some(87.48),
        height_cm: Some(180.0),
        health_focus: vec!["weight management".to_owned()],
        restrictions: Vec::new(),
        constitution: ConstitutionLabel::Single(Dosha::Kapha),
    }
}

/// `2024-01-01`, a Monday
pub fn jan_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

/// Minimal preferences for `duration` days starting 2024-01-01
pub fn preferences(duration: u32) -> PlanPreferences {
    PlanPreferences::for_duration(duration, jan_first())
}
