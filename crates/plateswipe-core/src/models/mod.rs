// ABOUTME: Core data models for the Plateswipe client
// ABOUTME: Re-exports Recipe, Preferences, and the diet/dish-type enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! # Data Models
//!
//! Core data structures shared across the workspace. Everything here is a
//! plain serializable value: recipes arrive from the backend and are never
//! mutated afterwards, preferences are mutated only through their own
//! helpers and persisted in full.
//!
//! ## Core Models
//!
//! - `Recipe`: a single candidate recipe as served by the feed endpoint
//! - `Preferences`: the user's active dish-type and diet filters
//! - `DishType` / `DietType`: wire-format enums for the filter vocabulary

mod preferences;
mod recipe;

pub use preferences::Preferences;
pub use recipe::{DietType, DishType, Nutrition, Recipe, TasteProfile};
