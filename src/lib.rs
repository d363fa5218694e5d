// ABOUTME: Main library entry point for the Plateswipe client core
// ABOUTME: Feed pipeline, swipe gesture engine, liked set, and local persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

#![deny(unsafe_code)]

//! # Plateswipe
//!
//! Client-side core of the Plateswipe recipe discovery app. The UI layer is
//! a thin observer on top of this crate: it renders the current card, feeds
//! raw drag deltas into the gesture state machine, and calls back into the
//! swipe coordinator when a card commits.
//!
//! ## Architecture
//!
//! - **feed**: the feed cache & pagination engine (lookahead window,
//!   staleness-gated cache adoption, dedup, background prefetch)
//! - **gesture**: the pure swipe gesture state machine and its visual
//!   feedback functions
//! - **swipe**: the commit protocol tying gesture, liked set, report client,
//!   and feed advancement together
//! - **liked**: the durable, order-preserving liked-recipe collection
//! - **preferences**: filter state with persistence and a change watcher
//! - **storage**: the key-value persistence seam with in-memory and
//!   file-backed implementations
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use plateswipe::feed::FeedEngine;
//! use plateswipe::preferences::PreferenceStore;
//! use plateswipe::storage::MemoryStore;
//! use plateswipe_providers::RestClient;
//!
//! # async fn example() {
//! let store = Arc::new(MemoryStore::new());
//! let client = Arc::new(RestClient::from_env());
//! let prefs = PreferenceStore::load(store.clone()).await;
//! let feed = FeedEngine::new(client, store, prefs.clone());
//! feed.load_or_fetch().await;
//! if let Some(recipe) = feed.snapshot().await.current_recipe() {
//!     println!("next card: {}", recipe.title);
//! }
//! # }
//! ```

// Re-export workspace foundation crates so consumers need only this crate.
pub use plateswipe_core::constants;
pub use plateswipe_core::errors;
pub use plateswipe_core::models;
pub use plateswipe_providers as providers;

/// Client configuration assembled from the environment
pub mod config;
/// Memoized per-device identity
pub mod device;
/// Feed cache & pagination engine
pub mod feed;
/// Swipe gesture state machine and visual feedback functions
pub mod gesture;
/// Durable liked-recipe collection
pub mod liked;
/// Structured logging configuration
pub mod logging;
/// Preference store and change watcher
pub mod preferences;
/// Persistent key-value storage seam
pub mod storage;
/// Swipe commit protocol coordinator
pub mod swipe;

pub use feed::{FeedEngine, FeedState};
pub use gesture::{SwipeDirection, SwipeGesture};
pub use liked::LikedRecipes;
pub use preferences::PreferenceStore;
pub use swipe::SwipeCoordinator;
