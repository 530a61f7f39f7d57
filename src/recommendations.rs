// ABOUTME: Read-only recommendation table of meal templates keyed by dosha and meal slot
// ABOUTME: Ships the built-in Ayurvedic catalog and the lookup API the synthesizer consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! Recommendation Table
//!
//! A static, read-only catalog of candidate meal templates indexed by
//! `(dosha, meal slot)`. The engine treats the catalog content as external
//! data: collaborators may supply their own table, and the built-in catalog
//! exists so plans can be generated without one.
//!
//! The table itself holds no selection logic — filtering, rotation, and
//! calorie adjustment all live in the synthesizer.

use crate::models::{Dosha, MealSlot, NutritionTotals};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A candidate meal template from the recommendation catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTemplate {
    /// Display name of the meal
    pub name: String,
    /// Base energy per serving in kilocalories
    pub base_calories: f64,
    /// Protein per serving in grams
    pub protein_g: f64,
    /// Carbohydrates per serving in grams
    pub carbs_g: f64,
    /// Fat per serving in grams
    pub fat_g: f64,
    /// Fiber per serving in grams
    pub fiber_g: f64,
    /// Ingredient tags used for restriction filtering ("dairy", "nuts", ...)
    pub ingredient_tags: Vec<String>,
    /// Stated prep/cook time in minutes
    pub cook_time_minutes: u32,
    /// Short rationale shown alongside the recommendation
    pub benefit: String,
}

impl MealTemplate {
    /// Per-serving nutrition values as an aggregatable total
    #[must_use]
    pub const fn base_nutrition(&self) -> NutritionTotals {
        NutritionTotals::new(
            self.base_calories,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.fiber_g,
        )
    }
}

/// Catalog of candidate templates keyed by `(dosha, meal slot)`
#[derive(Debug, Clone, Default)]
pub struct RecommendationTable {
    entries: HashMap<(Dosha, MealSlot), Vec<MealTemplate>>,
}

impl RecommendationTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidate list for a key
    pub fn insert(&mut self, dosha: Dosha, slot: MealSlot, templates: Vec<MealTemplate>) {
        self.entries.insert((dosha, slot), templates);
    }

    /// Candidate templates for a key; empty when the key is unknown
    #[must_use]
    pub fn candidates(&self, dosha: Dosha, slot: MealSlot) -> &[MealTemplate] {
        self.entries
            .get(&(dosha, slot))
            .map_or(&[], Vec::as_slice)
    }

    /// Whether the table has any candidates for a dosha at all
    #[must_use]
    pub fn has_dosha(&self, dosha: Dosha) -> bool {
        MealSlot::ALL
            .iter()
            .any(|slot| !self.candidates(dosha, *slot).is_empty())
    }

    /// The built-in Ayurvedic catalog: three candidates per dosha per slot
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();

        table.insert(
            Dosha::Vata,
            MealSlot::Morning,
            vec![
                template(
                    "Warm Spiced Oatmeal",
                    320.0,
                    (9.0, 52.0, 8.0, 7.0),
                    15,
                    &["oats", "milk", "dairy", "cinnamon"],
                    "Warm, grounding start that steadies Vata's morning lightness",
                ),
                template(
                    "Stewed Apples with Ghee",
                    260.0,
                    (2.0, 48.0, 7.0, 6.0),
                    20,
                    &["apple", "ghee", "dairy", "cardamom"],
                    "Gently cooked fruit kindles digestion without aggravating dryness",
                ),
                template(
                    "Coconut Rice Porridge with Dates",
                    340.0,
                    (7.0, 62.0, 6.0, 4.0),
                    25,
                    &["rice", "coconut", "dates"],
                    "Sweet, moist, and easy to digest on cold mornings",
                ),
            ],
        );
        table.insert(
            Dosha::Vata,
            MealSlot::Midday,
            vec![
                template(
                    "Kitchari with Ghee",
                    450.0,
                    (18.0, 68.0, 12.0, 11.0),
                    40,
                    &["rice", "mung beans", "ghee", "dairy", "cumin"],
                    "The classic tridoshic staple, warming and complete",
                ),
                template(
                    "Root Vegetable Stew",
                    420.0,
                    (10.0, 64.0, 14.0, 12.0),
                    45,
                    &["carrot", "sweet potato", "sesame", "ginger"],
                    "Dense root vegetables anchor Vata at the main meal",
                ),
                template(
                    "Buttered Basmati with Lentil Dal",
                    480.0,
                    (20.0, 72.0, 13.0, 13.0),
                    35,
                    &["rice", "lentils", "ghee", "dairy", "turmeric"],
                    "Well-spiced dal with grounding grains and healthy fat",
                ),
            ],
        );
        table.insert(
            Dosha::Vata,
            MealSlot::Evening,
            vec![
                template(
                    "Creamy Pumpkin Soup",
                    380.0,
                    (8.0, 46.0, 18.0, 8.0),
                    30,
                    &["pumpkin", "cream", "dairy", "nutmeg"],
                    "Soft and warm, supports restful evening digestion",
                ),
                template(
                    "Soft Khichdi",
                    400.0,
                    (16.0, 60.0, 11.0, 10.0),
                    35,
                    &["rice", "mung beans", "ghee", "dairy"],
                    "Light evening version of the midday staple",
                ),
                template(
                    "Baked Sweet Potato with Tahini",
                    360.0,
                    (9.0, 54.0, 13.0, 9.0),
                    50,
                    &["sweet potato", "tahini", "sesame"],
                    "Naturally sweet and grounding before sleep",
                ),
            ],
        );
        table.insert(
            Dosha::Vata,
            MealSlot::Snack,
            vec![
                template(
                    "Soaked Almonds and Raisins",
                    180.0,
                    (6.0, 18.0, 10.0, 4.0),
                    5,
                    &["almonds", "nuts", "raisins"],
                    "Soaked nuts nourish without taxing digestion",
                ),
                template(
                    "Golden Milk",
                    150.0,
                    (7.0, 14.0, 7.0, 0.0),
                    10,
                    &["milk", "dairy", "turmeric", "honey"],
                    "Calming warm drink for the late afternoon dip",
                ),
                template(
                    "Date and Nut Balls",
                    200.0,
                    (5.0, 26.0, 9.0, 4.0),
                    15,
                    &["dates", "almonds", "nuts", "coconut"],
                    "Quick sweet energy with building quality",
                ),
            ],
        );

        table.insert(
            Dosha::Pitta,
            MealSlot::Morning,
            vec![
                template(
                    "Coconut Rice Flakes",
                    300.0,
                    (6.0, 54.0, 7.0, 5.0),
                    10,
                    &["rice", "coconut", "cardamom"],
                    "Cooling grains temper Pitta's sharp morning appetite",
                ),
                template(
                    "Sweet Barley Porridge",
                    310.0,
                    (9.0, 58.0, 5.0, 9.0),
                    25,
                    &["barley", "gluten", "maple"],
                    "Barley's cool, dry quality balances internal heat",
                ),
                template(
                    "Melon Fruit Bowl",
                    220.0,
                    (3.0, 52.0, 1.0, 4.0),
                    5,
                    &["melon", "mint", "lime"],
                    "Sweet juicy fruit eaten alone, the ideal Pitta breakfast",
                ),
            ],
        );
        table.insert(
            Dosha::Pitta,
            MealSlot::Midday,
            vec![
                template(
                    "Cucumber Raita Bowl with Basmati",
                    380.0,
                    (13.0, 60.0, 9.0, 6.0),
                    20,
                    &["cucumber", "yogurt", "dairy", "rice", "coriander"],
                    "Cooling dairy and herbs at the hottest hour of digestion",
                ),
                template(
                    "Steamed Greens with Basmati",
                    400.0,
                    (12.0, 66.0, 9.0, 10.0),
                    25,
                    &["kale", "chard", "rice", "ghee", "dairy"],
                    "Bitter greens clear heat while rice sustains",
                ),
                template(
                    "Mung Bean Salad",
                    360.0,
                    (19.0, 55.0, 7.0, 12.0),
                    15,
                    &["mung beans", "cilantro", "lime", "coconut"],
                    "Light protein with cooling herbs, no fermentation",
                ),
            ],
        );
        table.insert(
            Dosha::Pitta,
            MealSlot::Evening,
            vec![
                template(
                    "Coriander Zucchini Curry",
                    350.0,
                    (9.0, 48.0, 13.0, 8.0),
                    30,
                    &["zucchini", "coconut", "coriander", "rice"],
                    "Mildly spiced vegetables that will not reheat the night",
                ),
                template(
                    "Sweet Corn and Cilantro Soup",
                    330.0,
                    (10.0, 52.0, 9.0, 7.0),
                    25,
                    &["corn", "cilantro", "lime"],
                    "Sweet and soothing, light enough for the evening",
                ),
                template(
                    "Asparagus and Fennel Risotto",
                    420.0,
                    (11.0, 64.0, 13.0, 7.0),
                    40,
                    &["asparagus", "fennel", "rice", "butter", "dairy"],
                    "Cooling vegetables in a satisfying evening grain",
                ),
            ],
        );
        table.insert(
            Dosha::Pitta,
            MealSlot::Snack,
            vec![
                template(
                    "Sweet Lassi",
                    190.0,
                    (8.0, 28.0, 5.0, 0.0),
                    5,
                    &["yogurt", "dairy", "rose", "cardamom"],
                    "Classic cooling digestive drink",
                ),
                template(
                    "Fresh Coconut Slices",
                    160.0,
                    (2.0, 7.0, 14.0, 4.0),
                    5,
                    &["coconut"],
                    "Naturally sweet and cooling between meals",
                ),
                template(
                    "Rose-Cardamom Fruit Salad",
                    170.0,
                    (2.0, 40.0, 1.0, 5.0),
                    10,
                    &["pear", "grapes", "rose", "cardamom"],
                    "Sweet ripe fruit pacifies afternoon intensity",
                ),
            ],
        );

        table.insert(
            Dosha::Kapha,
            MealSlot::Morning,
            vec![
                template(
                    "Spiced Millet Porridge",
                    280.0,
                    (8.0, 50.0, 5.0, 6.0),
                    20,
                    &["millet", "ginger", "cinnamon"],
                    "Light, dry grain with heating spices to counter heaviness",
                ),
                template(
                    "Ginger Tea with Puffed Rice",
                    200.0,
                    (4.0, 42.0, 2.0, 2.0),
                    10,
                    &["rice", "ginger", "honey"],
                    "A deliberately light breakfast for slow morning digestion",
                ),
                template(
                    "Warm Stewed Pears",
                    210.0,
                    (1.0, 50.0, 1.0, 7.0),
                    15,
                    &["pear", "clove", "ginger"],
                    "Astringent fruit cooked with stimulating spices",
                ),
            ],
        );
        table.insert(
            Dosha::Kapha,
            MealSlot::Midday,
            vec![
                template(
                    "Spicy Lentil Soup",
                    360.0,
                    (20.0, 54.0, 6.0, 14.0),
                    35,
                    &["lentils", "chili", "cumin", "garlic"],
                    "Hot, light protein at the day's strongest digestive hour",
                ),
                template(
                    "Barley Vegetable Pilaf",
                    380.0,
                    (11.0, 68.0, 7.0, 13.0),
                    40,
                    &["barley", "gluten", "carrot", "peas", "black pepper"],
                    "Rough, dry grain that scrapes accumulated Kapha",
                ),
                template(
                    "Steamed Kale with Chickpeas",
                    340.0,
                    (16.0, 50.0, 8.0, 13.0),
                    25,
                    &["kale", "chickpeas", "lemon", "turmeric"],
                    "Bitter greens and astringent legumes lighten the midday meal",
                ),
            ],
        );
        table.insert(
            Dosha::Kapha,
            MealSlot::Evening,
            vec![
                template(
                    "Clear Vegetable Broth with Tofu",
                    300.0,
                    (18.0, 32.0, 10.0, 6.0),
                    25,
                    &["tofu", "soy", "ginger", "scallion"],
                    "A warm, light supper that will not sit overnight",
                ),
                template(
                    "Roasted Cauliflower with Turmeric",
                    320.0,
                    (10.0, 40.0, 13.0, 10.0),
                    35,
                    &["cauliflower", "turmeric", "mustard seed"],
                    "Dry-roasted vegetables with heating spices",
                ),
                template(
                    "Bitter Greens Stir-Fry",
                    290.0,
                    (11.0, 36.0, 11.0, 9.0),
                    20,
                    &["mustard greens", "garlic", "chili"],
                    "Pungent and bitter tastes, the Kapha evening antidote",
                ),
            ],
        );
        table.insert(
            Dosha::Kapha,
            MealSlot::Snack,
            vec![
                template(
                    "Roasted Chickpeas",
                    150.0,
                    (8.0, 22.0, 4.0, 6.0),
                    15,
                    &["chickpeas", "paprika"],
                    "Dry, crunchy, and satisfying without heaviness",
                ),
                template(
                    "Pumpkin Seeds with Chili",
                    170.0,
                    (9.0, 6.0, 13.0, 3.0),
                    5,
                    &["pumpkin seeds", "seeds", "chili"],
                    "Light protein with warming spice",
                ),
                template(
                    "Honey Ginger Tea",
                    90.0,
                    (0.0, 23.0, 0.0, 0.0),
                    10,
                    &["honey", "ginger", "lemon"],
                    "Raw honey and ginger cut through afternoon dullness",
                ),
            ],
        );

        table
    }
}

/// Catalog entry builder; macros are `(protein_g, carbs_g, fat_g, fiber_g)`
fn template(
    name: &str,
    base_calories: f64,
    macros: (f64, f64, f64, f64),
    cook_time_minutes: u32,
    ingredient_tags: &[&str],
    benefit: &str,
) -> MealTemplate {
    let (protein_g, carbs_g, fat_g, fiber_g) = macros;
    MealTemplate {
        name: name.to_owned(),
        base_calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
        ingredient_tags: ingredient_tags.iter().map(|tag| (*tag).to_owned()).collect(),
        cook_time_minutes,
        benefit: benefit.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_key() {
        let table = RecommendationTable::builtin();
        for dosha in Dosha::ALL {
            for slot in MealSlot::ALL {
                assert!(
                    !table.candidates(dosha, slot).is_empty(),
                    "builtin catalog missing {dosha} {slot}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_key_yields_empty_slice() {
        let table = RecommendationTable::new();
        assert!(table.candidates(Dosha::Vata, MealSlot::Morning).is_empty());
        assert!(!table.has_dosha(Dosha::Vata));
    }

    #[test]
    fn test_template_nutrition_matches_fields() {
        let table = RecommendationTable::builtin();
        let first = &table.candidates(Dosha::Vata, MealSlot::Morning)[0];
        let nutrition = first.base_nutrition();
        assert!((nutrition.energy_kcal - first.base_calories).abs() < f64::EPSILON);
        assert!((nutrition.protein_g - first.protein_g).abs() < f64::EPSILON);
    }
}
