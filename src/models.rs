// ABOUTME: Core data models for constitution scoring and diet-plan generation
// ABOUTME: Defines Dosha, ConstitutionScore, Meal, DayPlan, DietPlan and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! Core data model for the engine.
//!
//! Ownership follows the rollup hierarchy: a [`DietPlan`] exclusively owns its
//! [`DayPlan`]s, a [`DayPlan`] exclusively owns its [`Meal`]s, and the derived
//! [`NutritionTotals`] at every level are owned by the immediately enclosing
//! entity. Derived totals are never set by callers; the aggregation module
//! recomputes them whenever child structure changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// The three constitutional archetypes, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dosha {
    /// Vata (air/ether): light, dry, mobile
    Vata,
    /// Pitta (fire/water): hot, sharp, intense
    Pitta,
    /// Kapha (earth/water): heavy, slow, steady
    Kapha,
}

impl Dosha {
    /// All doshas in canonical order (used for deterministic tie-breaks)
    pub const ALL: [Self; 3] = [Self::Vata, Self::Pitta, Self::Kapha];

    /// Leniently parse a questionnaire answer into a dosha.
    ///
    /// Case-insensitive, whitespace-tolerant. Returns `None` for anything
    /// unrecognized — unrecognized answers are ignored, not errors.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "vata" => Some(Self::Vata),
            "pitta" => Some(Self::Pitta),
            "kapha" => Some(Self::Kapha),
            _ => None,
        }
    }

    /// Capitalized display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Constitution classification derived from questionnaire tallies.
///
/// A single dominant dosha, a dual constitution (two tied top tallies,
/// canonical order), or the balanced "Tridoshic" sentinel (three-way tie
/// or no recognizable answers at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "doshas")]
pub enum ConstitutionLabel {
    /// Single dominant dosha
    Single(Dosha),
    /// Two tied top doshas, in canonical order
    Dual(Dosha, Dosha),
    /// All three doshas balanced (or undetermined)
    Balanced,
}

impl ConstitutionLabel {
    /// Sentinel text rendered for the balanced constitution
    pub const BALANCED_NAME: &'static str = "Tridoshic";

    /// The primary component used as the recommendation-table key.
    ///
    /// Dual labels reduce to their first listed dosha — deliberate observed
    /// behavior of the recommendation lookup, not an oversight. Balanced
    /// labels have no primary; the synthesizer falls back to its configured
    /// default dosha.
    #[must_use]
    pub const fn primary(&self) -> Option<Dosha> {
        match self {
            Self::Single(dosha) | Self::Dual(dosha, _) => Some(*dosha),
            Self::Balanced => None,
        }
    }

    /// Leniently parse a stored label string ("Vata", "Vata-Pitta",
    /// "Tridoshic"). Returns `None` for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(Self::BALANCED_NAME)
            || trimmed.eq_ignore_ascii_case("balanced")
        {
            return Some(Self::Balanced);
        }
        match trimmed.split_once('-') {
            Some((first, second)) => {
                let first = Dosha::parse(first)?;
                let second = Dosha::parse(second)?;
                Some(Self::Dual(first, second))
            }
            None => Dosha::parse(trimmed).map(Self::Single),
        }
    }
}

impl fmt::Display for ConstitutionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(dosha) => f.write_str(dosha.name()),
            Self::Dual(first, second) => write!(f, "{}-{}", first.name(), second.name()),
            Self::Balanced => f.write_str(Self::BALANCED_NAME),
        }
    }
}

/// One questionnaire entry: a question identifier and the selected answer.
///
/// Responses are ordered by submission; duplicate question identifiers are
/// allowed and each entry contributes independently to the tallies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireAnswer {
    /// Identifier of the intake question
    pub question_id: String,
    /// Selected answer category (leniently matched against dosha names)
    pub answer: String,
}

impl QuestionnaireAnswer {
    /// Convenience constructor
    #[must_use]
    pub fn new(question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            answer: answer.into(),
        }
    }
}

/// Per-dosha tallies plus the derived constitution label.
///
/// Owned by the patient record and recomputed wholesale on every rescoring —
/// there is no incremental patching because a removed answer has no
/// meaningful "undo" without replaying the full response list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstitutionScore {
    /// Vata answer count
    pub vata: u32,
    /// Pitta answer count
    pub pitta: u32,
    /// Kapha answer count
    pub kapha: u32,
    /// Derived classification label
    pub label: ConstitutionLabel,
}

impl ConstitutionScore {
    /// Tally for one dosha
    #[must_use]
    pub const fn tally(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Short practitioner-facing summary line, e.g.
    /// "Vata 4 · Pitta 3 · Kapha 0 — Vata"
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Vata {} · Pitta {} · Kapha {} — {}",
            self.vata, self.pitta, self.kapha, self.label
        )
    }
}

/// Five-field nutrition accumulator used at every rollup level
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy in kilocalories
    pub energy_kcal: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Fiber in grams
    pub fiber_g: f64,
}

impl NutritionTotals {
    /// Construct from explicit field values
    #[must_use]
    pub const fn new(
        energy_kcal: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
        fiber_g: f64,
    ) -> Self {
        Self {
            energy_kcal,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g,
        }
    }

    /// Add another total into this accumulator
    pub fn accumulate(&mut self, other: &Self) {
        self.energy_kcal += other.energy_kcal;
        self.protein_g += other.protein_g;
        self.carbs_g += other.carbs_g;
        self.fat_g += other.fat_g;
        self.fiber_g += other.fiber_g;
    }

    /// Return a copy with every field multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            energy_kcal: self.energy_kcal * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
            fiber_g: self.fiber_g * factor,
        }
    }
}

/// Fixed time-of-day meal slots, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Morning,
    /// Midday meal
    Midday,
    /// Evening meal
    Evening,
    /// Snack
    Snack,
}

impl MealSlot {
    /// All slots in the canonical population order
    pub const ALL: [Self; 4] = [Self::Morning, Self::Midday, Self::Evening, Self::Snack];

    /// Fixed per-slot rotation constant for day-over-day template variety
    #[must_use]
    pub const fn rotation_offset(&self) -> usize {
        match self {
            Self::Morning => 0,
            Self::Midday => 1,
            Self::Evening => 2,
            Self::Snack => 3,
        }
    }

    /// Lowercase slot label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Evening => "evening",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recipe reference inside a meal, with its per-serving nutrition and
/// serving multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRef {
    /// Recipe display name
    pub name: String,
    /// Serving multiplier applied to the per-serving nutrition
    pub servings: f64,
    /// Base nutrition values for a single serving
    pub nutrition_per_serving: NutritionTotals,
}

/// One meal within a day plan.
///
/// `totals` is derived state: always the sum of the recipe references'
/// per-serving nutrition times serving multiplier, recomputed by the
/// aggregator whenever the recipe list changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Time-of-day slot this meal fills
    pub slot: MealSlot,
    /// Recipes making up the meal
    pub recipes: Vec<RecipeRef>,
    /// Derived nutrition total (owned, never caller-set)
    pub totals: NutritionTotals,
}

impl Meal {
    /// Create an empty meal for a slot with zeroed totals
    #[must_use]
    pub fn empty(slot: MealSlot) -> Self {
        Self {
            slot,
            recipes: Vec::new(),
            totals: NutritionTotals::default(),
        }
    }
}

/// One calendar day's worth of meals within a diet plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Calendar date of this day
    pub date: NaiveDate,
    /// Full English weekday name derived from `date`
    pub day_of_week: String,
    /// Meals in canonical slot order, slots non-repeating within a day
    pub meals: Vec<Meal>,
    /// Derived nutrition total over the meals (owned, never caller-set)
    pub totals: NutritionTotals,
    /// Whether the patient marked this day complete
    pub is_completed: bool,
    /// Free-text practitioner or patient notes
    pub notes: String,
}

/// Plan completion snapshot maintained by the progress tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanProgress {
    /// Number of day plans marked complete
    pub completed_days: u32,
    /// Total number of planned days
    pub total_days: u32,
    /// `round(100 * completed / total)`, 0 when there are no days
    pub adherence_rate: u8,
}

/// A generated multi-day diet plan.
///
/// The constitution label is denormalized at generation time and not
/// re-derived later, even if the patient is subsequently rescored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Owning patient
    pub patient_id: Uuid,
    /// First planned day (inclusive)
    pub start_date: NaiveDate,
    /// Exclusive end of the plan window; `end_date - start_date` in days
    /// always equals `duration_days`
    pub end_date: NaiveDate,
    /// Number of planned days; always equals `daily_plans.len()`
    pub duration_days: u32,
    /// Constitution label at generation time (denormalized)
    pub constitution: String,
    /// Daily calorie target the adjustment engine scaled toward
    pub target_calories: u32,
    /// The owned day plans, one per calendar day
    pub daily_plans: Vec<DayPlan>,
    /// Derived plan-wide nutrition total (owned, never caller-set)
    pub totals: NutritionTotals,
    /// Constitution- and focus-derived guideline strings
    pub guidelines: Vec<String>,
    /// Completion/adherence snapshot
    pub progress: PlanProgress,
}

/// Read model of the patient fields the engine consumes.
///
/// Demographics are optional: absent values fall back to neutral behavior
/// in the adjustment engine rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSnapshot {
    /// Patient identifier (must be non-nil for plan generation)
    pub id: Uuid,
    /// Age in years
    pub age: Option<u32>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Free-text health-focus keywords ("weight loss", "digestion", ...)
    pub health_focus: Vec<String>,
    /// Dietary-restriction keywords ("dairy", "nuts", ...)
    pub restrictions: Vec<String>,
    /// Constitution classification at snapshot time
    pub constitution: ConstitutionLabel,
}

impl PatientSnapshot {
    /// Body mass index derived from weight and height.
    ///
    /// `None` when either measurement is missing or height is non-positive.
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        let weight_kg = self.weight_kg?;
        let height_cm = self.height_cm?;
        if height_cm <= 0.0 {
            return None;
        }
        let height_m = height_cm / 100.0;
        Some(weight_kg / (height_m * height_m))
    }
}

/// Closed preference structure for plan generation.
///
/// Replaces loosely-shaped request bodies with an explicit configuration;
/// open-ended custom attributes live in the bounded `extensions` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPreferences {
    /// Requested plan length in days (must be at least 1)
    pub duration_days: u32,
    /// First day of the plan
    pub start_date: NaiveDate,
    /// Optional named diet style ("vegetarian", ...), informational
    pub diet_type: Option<String>,
    /// Allergy/restriction keywords to filter templates by
    pub restrictions: Vec<String>,
    /// Ceiling on template prep/cook time in minutes
    pub max_cook_time_minutes: Option<u32>,
    /// Explicit daily calorie target; scales adjustments against the
    /// canonical 2000 kcal baseline
    pub target_calories: Option<u32>,
    /// Bounded string-keyed extension attributes
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
}

impl PlanPreferences {
    /// Minimal preferences for a duration starting on a given date
    #[must_use]
    pub fn for_duration(duration_days: u32, start_date: NaiveDate) -> Self {
        Self {
            duration_days,
            start_date,
            diet_type: None,
            restrictions: Vec::new(),
            max_cook_time_minutes: None,
            target_calories: None,
            extensions: BTreeMap::new(),
        }
    }
}
