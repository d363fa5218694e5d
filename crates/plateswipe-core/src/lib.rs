// ABOUTME: Foundation crate for the Plateswipe client platform
// ABOUTME: Domain models, unified error handling, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! # Plateswipe Core
//!
//! Foundation crate for the Plateswipe client. Contains the pieces every
//! other crate in the workspace builds on:
//!
//! - **models**: domain types (`Recipe`, `Preferences`, diet and dish enums)
//! - **errors**: unified error handling with `AppError` and `AppResult`
//! - **constants**: feed tuning values, gesture thresholds, storage keys
//!
//! This crate performs no I/O and has no async surface.

/// Shared constants and environment-based configuration values
pub mod constants;
/// Unified error handling with `AppError` and `AppResult`
pub mod errors;
/// Domain models for recipes and user preferences
pub mod models;

pub use errors::{AppError, AppResult};
pub use models::{DietType, DishType, Nutrition, Preferences, Recipe, TasteProfile};
