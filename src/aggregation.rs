// ABOUTME: Nutrition aggregator maintaining the Meal → DayPlan → DietPlan rollup invariants
// ABOUTME: Pure bottom-up summation, recomputed synchronously on every structural mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! Nutrition Aggregator
//!
//! Maintains the derived nutrition totals at every level of the plan
//! hierarchy. Totals are pure sums over child totals, zero-initialized and
//! recomputed in full — never incrementally patched — so recomputing twice in
//! a row always yields identical values.
//!
//! Aggregation runs synchronously as part of any mutation that changes child
//! structure: callers mutate a recipe or meal list, then invoke the matching
//! `recompute_*` before the mutating operation returns. Reads therefore
//! always observe a fully consistent rollup.

use crate::models::{DayPlan, DietPlan, Meal, NutritionTotals};

/// Recompute a meal's derived total from its recipe references.
///
/// The total is the sum over recipes of per-serving nutrition times the
/// serving multiplier.
pub fn recompute_meal(meal: &mut Meal) {
    let mut totals = NutritionTotals::default();
    for recipe in &meal.recipes {
        totals.accumulate(&recipe.nutrition_per_serving.scaled(recipe.servings));
    }
    meal.totals = totals;
}

/// Recompute a day's derived total, refreshing each meal first.
pub fn recompute_day(day: &mut DayPlan) {
    let mut totals = NutritionTotals::default();
    for meal in &mut day.meals {
        recompute_meal(meal);
        totals.accumulate(&meal.totals);
    }
    day.totals = totals;
}

/// Recompute a plan's derived total bottom-up: meals, then days, then plan.
pub fn recompute_plan(plan: &mut DietPlan) {
    let mut totals = NutritionTotals::default();
    for day in &mut plan.daily_plans {
        recompute_day(day);
        totals.accumulate(&day.totals);
    }
    plan.totals = totals;
}
