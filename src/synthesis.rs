// ABOUTME: Plan synthesizer producing fully populated multi-day diet plans
// ABOUTME: Rotating template selection, preference filtering, adjustment, rollup, and guidelines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! Plan Synthesizer
//!
//! Given a patient snapshot, a preference set, and a recommendation table,
//! produces a fully populated [`DietPlan`]. Generation is deterministic: the
//! same inputs always yield a byte-for-byte identical plan (the plan id is a
//! v5 UUID derived from the patient, start date, and duration — no randomness
//! anywhere in the path).
//!
//! Selection rotates through each slot's candidate list with
//! `(day + slot_offset) % len`, so consecutive days never repeat the same
//! template for a slot when more than one candidate survives filtering.

use crate::adjustment::{self, adjusted_calories, keywords};
use crate::aggregation;
use crate::config::PlanConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{
    DayPlan, DietPlan, Dosha, Meal, MealSlot, NutritionTotals, PatientSnapshot, PlanPreferences,
    PlanProgress, RecipeRef,
};
use crate::progress;
use crate::recommendations::{MealTemplate, RecommendationTable};
use chrono::Days;
use tracing::{debug, info};
use uuid::Uuid;

/// Generate a diet plan for a patient.
///
/// The constitution label is reduced to its primary dosha for table lookup
/// (dual labels use their first component; balanced or unresolvable labels
/// fall back to the configured default dosha). Candidate lists are filtered
/// by restriction keywords and the cook-time ceiling, falling back to the
/// unfiltered list rather than leaving a slot empty.
///
/// # Errors
///
/// Returns a validation error when the patient identifier is nil or the
/// requested duration is outside the configured bounds. Missing demographic
/// data and unresolvable constitutions are handled via defaults, never
/// errors.
pub fn generate_diet_plan(
    patient: &PatientSnapshot,
    preferences: &PlanPreferences,
    table: &RecommendationTable,
    config: &PlanConfig,
) -> AppResult<DietPlan> {
    if patient.id.is_nil() {
        return Err(AppError::missing_field("patient_id"));
    }
    let duration = preferences.duration_days;
    if duration < config.synthesis.min_duration_days {
        return Err(AppError::invalid_input(format!(
            "duration must be at least {} day(s), got {duration}",
            config.synthesis.min_duration_days
        ))
        .with_patient_id(patient.id));
    }
    if duration > config.synthesis.max_duration_days {
        return Err(AppError::value_out_of_range(format!(
            "duration {duration} exceeds the maximum of {} days",
            config.synthesis.max_duration_days
        ))
        .with_patient_id(patient.id));
    }

    let dosha = resolve_primary_dosha(patient, table, config);
    let restrictions = combined_restrictions(patient, preferences);

    let mut daily_plans = Vec::with_capacity(duration as usize);
    for day_index in 0..duration {
        let date = preferences
            .start_date
            .checked_add_days(Days::new(u64::from(day_index)))
            .ok_or_else(|| AppError::value_out_of_range("start date overflows calendar range"))?;

        let mut meals = Vec::with_capacity(MealSlot::ALL.len());
        for slot in MealSlot::ALL {
            if let Some(meal) = build_meal(
                patient,
                preferences,
                table,
                config,
                dosha,
                slot,
                day_index as usize,
                &restrictions,
            ) {
                meals.push(meal);
            }
        }

        daily_plans.push(DayPlan {
            date,
            day_of_week: date.format("%A").to_string(),
            meals,
            totals: NutritionTotals::default(),
            is_completed: false,
            notes: String::new(),
        });
    }

    // Exclusive end: duration always equals end_date - start_date in days
    let end_date = preferences
        .start_date
        .checked_add_days(Days::new(u64::from(duration)))
        .ok_or_else(|| AppError::value_out_of_range("start date overflows calendar range"))?;

    let mut plan = DietPlan {
        id: deterministic_plan_id(patient.id, preferences),
        patient_id: patient.id,
        start_date: preferences.start_date,
        end_date,
        duration_days: duration,
        constitution: patient.constitution.to_string(),
        target_calories: preferences
            .target_calories
            .unwrap_or(config.adjustment.baseline_daily_calories as u32),
        daily_plans,
        totals: NutritionTotals::default(),
        guidelines: build_guidelines(dosha, &patient.health_focus, &restrictions),
        progress: PlanProgress::default(),
    };

    // One bottom-up pass after all days are populated
    aggregation::recompute_plan(&mut plan);
    progress::refresh_progress(&mut plan);

    info!(
        patient_id = %patient.id,
        %dosha,
        duration,
        start_date = %preferences.start_date,
        "diet plan generated"
    );
    Ok(plan)
}

/// Reduce the constitution label to the table lookup key.
///
/// Dual labels use only their first component — observed production behavior
/// preserved deliberately. Balanced labels, and any dosha absent from the
/// supplied table, fall back to the configured default.
fn resolve_primary_dosha(
    patient: &PatientSnapshot,
    table: &RecommendationTable,
    config: &PlanConfig,
) -> Dosha {
    let candidate = patient
        .constitution
        .primary()
        .unwrap_or(config.synthesis.default_dosha);
    if table.has_dosha(candidate) {
        candidate
    } else {
        debug!(
            requested = %candidate,
            fallback = %config.synthesis.default_dosha,
            "constitution absent from recommendation table, using default"
        );
        config.synthesis.default_dosha
    }
}

/// Union of preference and patient restriction keywords, lowercased
fn combined_restrictions(patient: &PatientSnapshot, preferences: &PlanPreferences) -> Vec<String> {
    let mut restrictions: Vec<String> = preferences
        .restrictions
        .iter()
        .chain(&patient.restrictions)
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect();
    restrictions.sort();
    restrictions.dedup();
    restrictions
}

/// Whether a template conflicts with any restriction keyword
fn template_restricted(template: &MealTemplate, restrictions: &[String]) -> bool {
    template.ingredient_tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        restrictions
            .iter()
            .any(|keyword| tag.contains(keyword.as_str()) || keyword.contains(tag.as_str()))
    })
}

/// Select and adjust one slot's template for one day.
///
/// Returns `None` only when the table has no candidates for the slot at all
/// (possible with caller-supplied tables, never with the built-in catalog).
#[allow(clippy::too_many_arguments)]
fn build_meal(
    patient: &PatientSnapshot,
    preferences: &PlanPreferences,
    table: &RecommendationTable,
    config: &PlanConfig,
    dosha: Dosha,
    slot: MealSlot,
    day_index: usize,
    restrictions: &[String],
) -> Option<Meal> {
    let candidates = table.candidates(dosha, slot);
    if candidates.is_empty() {
        debug!(%dosha, %slot, "no candidates for slot, leaving it unpopulated");
        return None;
    }

    let filtered: Vec<&MealTemplate> = candidates
        .iter()
        .filter(|template| !template_restricted(template, restrictions))
        .filter(|template| {
            preferences
                .max_cook_time_minutes
                .is_none_or(|ceiling| template.cook_time_minutes <= ceiling)
        })
        .collect();

    // Never leave a slot empty: fall back to the unfiltered list
    let pool: Vec<&MealTemplate> = if filtered.is_empty() {
        debug!(%dosha, %slot, "filtering emptied candidate list, falling back to unfiltered");
        candidates.iter().collect()
    } else {
        filtered
    };

    let template = pool[(day_index + slot.rotation_offset()) % pool.len()];
    let adjusted = adjusted_calories(
        template.base_calories,
        patient,
        preferences.target_calories,
        &config.adjustment,
    );
    let ratio = if template.base_calories > 0.0 {
        f64::from(adjusted) / template.base_calories
    } else {
        0.0
    };

    Some(Meal {
        slot,
        recipes: vec![RecipeRef {
            name: template.name.clone(),
            servings: 1.0,
            nutrition_per_serving: template.base_nutrition().scaled(ratio),
        }],
        totals: NutritionTotals::default(),
    })
}

/// Deterministic plan identifier derived from the generation inputs
fn deterministic_plan_id(patient_id: Uuid, preferences: &PlanPreferences) -> Uuid {
    let seed = format!(
        "{patient_id}/{}/{}",
        preferences.start_date, preferences.duration_days
    );
    Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes())
}

/// Fixed guideline strings for the plan: one set per primary dosha, one tip
/// per detected health-focus family, and an exclusion note when restrictions
/// were supplied.
fn build_guidelines(dosha: Dosha, health_focus: &[String], restrictions: &[String]) -> Vec<String> {
    let mut guidelines: Vec<String> = dosha_guidelines(dosha)
        .iter()
        .map(|line| (*line).to_owned())
        .collect();

    let focus_tips: [(&[&str], &str); 5] = [
        (
            keywords::WEIGHT_MANAGEMENT,
            "Keep dinners light and finish eating at least three hours before sleep.",
        ),
        (
            keywords::DIGESTION,
            "Sip warm ginger tea before meals to kindle digestion.",
        ),
        (
            keywords::ENERGY,
            "Prefer freshly cooked grains and avoid skipping meals to keep energy steady.",
        ),
        (
            keywords::IMMUNITY,
            "Include turmeric, tulsi, and seasonal fruit daily to support immunity.",
        ),
        (
            keywords::STRESS,
            "Favor calming, regular evening meals and avoid stimulants after midday.",
        ),
    ];
    for (family, tip) in focus_tips {
        if adjustment::matches_family(health_focus, family) {
            guidelines.push((*tip).to_owned());
        }
    }

    if !restrictions.is_empty() {
        guidelines.push(format!(
            "Recipes containing the following are excluded per stated restrictions: {}.",
            restrictions.join(", ")
        ));
    }

    guidelines
}

/// Fixed dietary guidance per primary dosha
const fn dosha_guidelines(dosha: Dosha) -> &'static [&'static str] {
    match dosha {
        Dosha::Vata => &[
            "Favor warm, cooked, lightly oiled meals; minimize raw and cold foods.",
            "Keep regular meal times — irregularity aggravates Vata.",
            "Use warming spices such as ginger, cinnamon, and cumin.",
        ],
        Dosha::Pitta => &[
            "Favor cooling, mildly spiced meals; minimize fried, sour, and very spicy foods.",
            "Make midday the main meal, when digestion is strongest.",
            "Use cooling herbs such as coriander, fennel, and mint.",
        ],
        Dosha::Kapha => &[
            "Favor light, warm, well-spiced meals; go easy on heavy, oily, and sweet foods.",
            "Keep breakfast light and avoid eating late in the evening.",
            "Use stimulating spices such as black pepper, ginger, and turmeric.",
        ],
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::models::ConstitutionLabel;
    use chrono::NaiveDate;

    fn sample_patient() -> PatientSnapshot {
        PatientSnapshot {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, b"patient-1"),
            age: Some(35),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            health_focus: Vec::new(),
            restrictions: Vec::new(),
            constitution: ConstitutionLabel::Single(Dosha::Vata),
        }
    }

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result = generate_diet_plan(
            &sample_patient(),
            &PlanPreferences::for_duration(0, start_date()),
            &RecommendationTable::builtin(),
            &PlanConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_nil_patient_id_rejected() {
        let mut patient = sample_patient();
        patient.id = Uuid::nil();
        let result = generate_diet_plan(
            &patient,
            &PlanPreferences::for_duration(3, start_date()),
            &RecommendationTable::builtin(),
            &PlanConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_id_is_deterministic() {
        let preferences = PlanPreferences::for_duration(5, start_date());
        let first = deterministic_plan_id(sample_patient().id, &preferences);
        let second = deterministic_plan_id(sample_patient().id, &preferences);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rotation_varies_consecutive_days() {
        let plan = generate_diet_plan(
            &sample_patient(),
            &PlanPreferences::for_duration(2, start_date()),
            &RecommendationTable::builtin(),
            &PlanConfig::default(),
        )
        .unwrap_or_else(|_| unreachable!("generation with builtin table cannot fail"));
        for slot_index in 0..MealSlot::ALL.len() {
            let first = &plan.daily_plans[0].meals[slot_index].recipes[0].name;
            let second = &plan.daily_plans[1].meals[slot_index].recipes[0].name;
            assert_ne!(first, second, "consecutive days repeated a template");
        }
    }
}
