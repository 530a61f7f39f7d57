// ABOUTME: Library entry point for the constitution scoring and diet-plan generation engine
// ABOUTME: Wires scoring, aggregation, adjustment, synthesis, progress, and the repository seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! # Prakriti Core
//!
//! The constitution-scoring and diet-plan generation engine of an Ayurvedic
//! practitioner-facing health-record and meal-planning application. The HTTP
//! layer, persistence, UI, and report rendering are external collaborators;
//! this crate is pure, synchronous, in-memory computation.
//!
//! ## Subsystems
//!
//! - **Constitution Scorer** ([`constitution`]): questionnaire answers →
//!   per-dosha tallies and a deterministic classification label
//! - **Nutrition Aggregator** ([`aggregation`]): bottom-up Meal → `DayPlan`
//!   → `DietPlan` rollup of the five nutrition fields
//! - **Recommendation Table** ([`recommendations`]): read-only catalog of
//!   meal templates keyed by dosha and meal slot
//! - **Adjustment Engine** ([`adjustment`]): layered calorie corrections
//!   from age, health focus, BMI, and target-calorie overrides
//! - **Plan Synthesizer** ([`synthesis`]): deterministic multi-day plan
//!   generation with rotating template selection and guideline strings
//! - **Progress Tracker** ([`progress`]): completion counts and adherence
//!   percentage as derived state
//!
//! ## Control flow
//!
//! Scoring runs at intake (or on demand) and its label feeds the
//! synthesizer as the recommendation-table key; the adjustment engine
//! corrects each selected template's calories; the aggregator rolls meal
//! totals into day and plan totals; the progress tracker consumes the
//! day-completion flags on every mutation.
//!
//! ```
//! use chrono::NaiveDate;
//! use prakriti_core::config::PlanConfig;
//! use prakriti_core::constitution::score_constitution;
//! use prakriti_core::models::{PatientSnapshot, PlanPreferences, QuestionnaireAnswer};
//! use prakriti_core::recommendations::RecommendationTable;
//! use prakriti_core::synthesis::generate_diet_plan;
//! use uuid::Uuid;
//!
//! let score = score_constitution(&[
//!     QuestionnaireAnswer::new("q1", "vata"),
//!     QuestionnaireAnswer::new("q2", "vata"),
//!     QuestionnaireAnswer::new("q3", "pitta"),
//! ]);
//!
//! let patient = PatientSnapshot {
//!     id: Uuid::new_v4(),
//!     age: Some(42),
//!     weight_kg: Some(70.0),
//!     height_cm: Some(175.0),
//!     health_focus: vec!["digestion".into()],
//!     restrictions: vec!["nuts".into()],
//!     constitution: score.label,
//! };
//!
//! let preferences = PlanPreferences::for_duration(
//!     7,
//!     NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
//! );
//! let plan = generate_diet_plan(
//!     &patient,
//!     &preferences,
//!     &RecommendationTable::builtin(),
//!     &PlanConfig::default(),
//! )?;
//! assert_eq!(plan.daily_plans.len(), 7);
//! # Ok::<(), prakriti_core::AppError>(())
//! ```

#![deny(unsafe_code)]

pub mod adjustment;
pub mod aggregation;
pub mod config;
pub mod constitution;
pub mod errors;
pub mod models;
pub mod progress;
pub mod recommendations;
pub mod store;
pub mod synthesis;

pub use errors::{AppError, AppResult, ErrorCode};
