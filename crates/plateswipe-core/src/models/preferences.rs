// ABOUTME: User preference model for dish-type and diet filters
// ABOUTME: Pure value type with toggle helpers; persistence lives in the client crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

use serde::{Deserialize, Serialize};

use super::recipe::{DietType, DishType};

/// The user's active feed filters
///
/// Both fields have set semantics: order is not meaningful and duplicates are
/// never stored. Changing either field invalidates any cached feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Meal categories to include in the feed
    pub categories: Vec<DishType>,
    /// Dietary restrictions every served recipe must satisfy
    #[serde(default)]
    pub diets: Vec<DietType>,
}

impl Default for Preferences {
    /// New installs see every category and no diet restrictions
    fn default() -> Self {
        Self {
            categories: DishType::ALL.to_vec(),
            diets: Vec::new(),
        }
    }
}

impl Preferences {
    /// Replace the category set
    pub fn set_categories(&mut self, categories: Vec<DishType>) {
        self.categories = dedup(categories);
    }

    /// Replace the diet set
    pub fn set_diets(&mut self, diets: Vec<DietType>) {
        self.diets = dedup(diets);
    }

    /// Add the category if absent, remove it if present
    pub fn toggle_category(&mut self, category: DishType) {
        toggle(&mut self.categories, category);
    }

    /// Add the diet if absent, remove it if present
    pub fn toggle_diet(&mut self, diet: DietType) {
        toggle(&mut self.diets, diet);
    }
}

fn dedup<T: PartialEq>(values: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}
