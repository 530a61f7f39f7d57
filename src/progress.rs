// ABOUTME: Progress tracker deriving completion counts and adherence from day plans
// ABOUTME: Recomputed wholesale on every mutation that touches completion flags or the day list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! Progress Tracker
//!
//! Maintains `completed_days`, `total_days`, and the adherence percentage as
//! derived state over the plan's day list. Like the nutrition totals, the
//! progress record is recomputed in full rather than patched, so it can never
//! drift from the completion flags it summarizes.

use crate::errors::{AppError, AppResult};
use crate::models::{DietPlan, PlanProgress};

/// Derive a fresh progress snapshot from a plan's day list.
///
/// Adherence is `round(100 * completed / total)` and 0 when the plan has no
/// days — an empty plan never divides by zero.
#[must_use]
pub fn recompute_progress(plan: &DietPlan) -> PlanProgress {
    let total_days = plan.daily_plans.len() as u32;
    let completed_days = plan
        .daily_plans
        .iter()
        .filter(|day| day.is_completed)
        .count() as u32;

    let adherence_rate = if total_days == 0 {
        0
    } else {
        (100.0 * f64::from(completed_days) / f64::from(total_days)).round() as u8
    };

    PlanProgress {
        completed_days,
        total_days,
        adherence_rate,
    }
}

/// Recompute and store the plan's progress record in place
pub fn refresh_progress(plan: &mut DietPlan) {
    plan.progress = recompute_progress(plan);
}

/// Flip one day's completion flag and synchronously refresh progress.
///
/// # Errors
///
/// Returns a validation error when `day_index` is outside the plan's day list.
pub fn set_day_completed(plan: &mut DietPlan, day_index: usize, completed: bool) -> AppResult<()> {
    let total = plan.daily_plans.len();
    let day = plan.daily_plans.get_mut(day_index).ok_or_else(|| {
        AppError::value_out_of_range(format!(
            "day index {day_index} outside plan of {total} days"
        ))
    })?;
    day.is_completed = completed;
    refresh_progress(plan);
    Ok(())
}
