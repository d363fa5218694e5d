// ABOUTME: Recipe domain model with nutrition and taste attributes
// ABOUTME: Defines Recipe, Nutrition, TasteProfile, DishType, and DietType
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

use serde::{Deserialize, Serialize};

/// Meal category a recipe belongs to
///
/// Wire format is lowercase (`"breakfast"`, `"drink"`, ...), matching the
/// feed endpoint's query parameters and response payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishType {
    /// Morning meals
    Breakfast,
    /// Midday meals
    Lunch,
    /// Evening meals
    Dinner,
    /// Sweet courses
    Dessert,
    /// Beverages
    Drink,
}

impl DishType {
    /// All dish types in display order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Dessert,
        Self::Drink,
    ];

    /// Wire-format string for query parameters
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Dessert => "dessert",
            Self::Drink => "drink",
        }
    }
}

/// Dietary restriction tag attached to recipes and preference filters
///
/// Wire format matches the backend vocabulary exactly, including the
/// inconsistent spacing and hyphenation it ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    /// No meat or fish
    #[serde(rename = "Vegetarian")]
    Vegetarian,
    /// No gluten-containing ingredients
    #[serde(rename = "Gluten Free")]
    GlutenFree,
    /// Ketogenic
    #[serde(rename = "Keto")]
    Keto,
    /// No lactose
    #[serde(rename = "Lactose-Free")]
    LactoseFree,
}

impl DietType {
    /// Wire-format string for query parameters
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::GlutenFree => "Gluten Free",
            Self::Keto => "Keto",
            Self::LactoseFree => "Lactose-Free",
        }
    }
}

/// Macro-nutrient summary per serving
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kilocalories
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

/// Seven-attribute taste profile used by the ranking service
///
/// Each attribute is a unitless score; the backend normalizes to 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TasteProfile {
    /// Perceived sweetness
    pub sweetness: f64,
    /// Perceived saltiness
    pub saltiness: f64,
    /// Perceived sourness
    pub sourness: f64,
    /// Perceived bitterness
    pub bitterness: f64,
    /// Perceived savoriness (umami)
    pub savoriness: f64,
    /// Perceived fattiness
    pub fattiness: f64,
    /// Perceived spiciness
    pub spiciness: f64,
}

/// A single candidate recipe as served by the feed endpoint
///
/// Recipes are immutable values: once received they are never mutated, only
/// moved between the feed list, the persisted tail, and the liked set.
/// Identity is the `id` field; two recipes with the same id are the same
/// recipe regardless of payload differences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: i64,
    /// Display title
    pub title: String,
    /// Absolute URL of the hero image
    pub image_url: String,
    /// Ordered ingredient lines
    pub ingredients: Vec<String>,
    /// Newline-delimited preparation steps
    pub instructions: String,
    /// Kitchen equipment required
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Macro-nutrient summary
    pub nutrition: Nutrition,
    /// Dietary tags this recipe satisfies
    #[serde(default)]
    pub diets: Vec<DietType>,
    /// Meal categories this recipe fits, in server order
    #[serde(default)]
    pub dish_type: Vec<DishType>,
    /// Total cook time, when the source recipe provides one
    #[serde(default)]
    pub cook_time_minutes: Option<u32>,
    /// Taste attributes used by the ranking service
    #[serde(default)]
    pub taste: TasteProfile,
}

impl Recipe {
    /// Whether this recipe carries the given dietary tag
    #[must_use]
    pub fn satisfies_diet(&self, diet: DietType) -> bool {
        self.diets.contains(&diet)
    }

    /// Whether this recipe fits any of the given meal categories
    #[must_use]
    pub fn fits_any_category(&self, categories: &[DishType]) -> bool {
        self.dish_type.iter().any(|d| categories.contains(d))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: 7,
            title: "Shakshuka".into(),
            image_url: "https://img.example/shakshuka.jpg".into(),
            ingredients: vec!["eggs".into(), "tomatoes".into()],
            instructions: "Simmer sauce.\nPoach eggs.".into(),
            equipment: vec!["skillet".into()],
            nutrition: Nutrition {
                calories: 320.0,
                protein: 18.0,
                carbs: 14.0,
                fat: 21.0,
            },
            diets: vec![DietType::Vegetarian, DietType::GlutenFree],
            dish_type: vec![DishType::Breakfast, DishType::Dinner],
            cook_time_minutes: Some(25),
            taste: TasteProfile::default(),
        }
    }

    #[test]
    fn test_diet_type_wire_format() {
        let json = serde_json::to_string(&DietType::GlutenFree).unwrap();
        assert_eq!(json, "\"Gluten Free\"");
        let json = serde_json::to_string(&DietType::LactoseFree).unwrap();
        assert_eq!(json, "\"Lactose-Free\"");
    }

    #[test]
    fn test_dish_type_wire_format() {
        let json = serde_json::to_string(&DishType::Breakfast).unwrap();
        assert_eq!(json, "\"breakfast\"");
        let back: DishType = serde_json::from_str("\"drink\"").unwrap();
        assert_eq!(back, DishType::Drink);
    }

    #[test]
    fn test_recipe_round_trip() {
        let recipe = sample_recipe();
        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_recipe_missing_optional_fields() {
        // A minimal server payload without the optional attributes still parses
        let json = r#"{
            "id": 1,
            "title": "Toast",
            "image_url": "https://img.example/toast.jpg",
            "ingredients": ["bread"],
            "instructions": "Toast the bread.",
            "nutrition": {"calories": 90.0, "protein": 3.0, "carbs": 17.0, "fat": 1.0}
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert!(recipe.equipment.is_empty());
        assert!(recipe.diets.is_empty());
        assert_eq!(recipe.cook_time_minutes, None);
    }

    #[test]
    fn test_category_membership() {
        let recipe = sample_recipe();
        assert!(recipe.fits_any_category(&[DishType::Dinner, DishType::Drink]));
        assert!(!recipe.fits_any_category(&[DishType::Dessert]));
        assert!(recipe.satisfies_diet(DietType::Vegetarian));
        assert!(!recipe.satisfies_diet(DietType::Keto));
    }
}
