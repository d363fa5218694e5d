// ABOUTME: Preference store with persistence and change notification
// ABOUTME: Owns the active filters and feeds the watcher that reloads the feed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! # Preference Store & Watcher
//!
//! The store owns the user's active filters ([`Preferences`]), persists them
//! on every mutation, and publishes each new value on a watch channel. The
//! watcher task subscribes to that channel and keeps the feed consistent:
//! any change after the initial load discards the cached feed and refetches
//! with the new filters.
//!
//! The watch channel is level-triggered: rapid consecutive edits coalesce,
//! and the fetch that ultimately runs sees the latest value.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::constants::storage_keys;
use crate::feed::FeedEngine;
use crate::models::{DietType, DishType, Preferences};
use crate::storage::{load_json, store_json, KeyValueStore};

/// Owner of the user's active feed filters
///
/// Cloning is cheap; all clones share one value and one storage handle.
/// Mutation goes exclusively through the methods below, each of which
/// persists the full value and notifies subscribers.
#[derive(Clone)]
pub struct PreferenceStore {
    inner: Arc<PreferenceInner>,
}

struct PreferenceInner {
    store: Arc<dyn KeyValueStore>,
    tx: watch::Sender<Preferences>,
}

impl PreferenceStore {
    /// Load preferences from storage, falling back to defaults
    ///
    /// Missing or corrupt persisted data is never fatal: the store starts
    /// from [`Preferences::default`] and logs the problem.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let initial = match load_json::<Preferences>(&*store, storage_keys::PREFERENCES).await {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Preferences::default(),
            Err(e) => {
                warn!("failed to load preferences, using defaults: {e}");
                Preferences::default()
            }
        };

        let (tx, _rx) = watch::channel(initial);
        Self {
            inner: Arc::new(PreferenceInner { store, tx }),
        }
    }

    /// Current filter value
    #[must_use]
    pub fn current(&self) -> Preferences {
        self.inner.tx.borrow().clone()
    }

    /// Subscribe to filter changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.inner.tx.subscribe()
    }

    /// Replace the category set
    pub async fn set_categories(&self, categories: Vec<DishType>) {
        self.apply(|prefs| prefs.set_categories(categories)).await;
    }

    /// Replace the diet set
    pub async fn set_diets(&self, diets: Vec<DietType>) {
        self.apply(|prefs| prefs.set_diets(diets)).await;
    }

    /// Add the category if absent, remove it if present
    pub async fn toggle_category(&self, category: DishType) {
        self.apply(|prefs| prefs.toggle_category(category)).await;
    }

    /// Add the diet if absent, remove it if present
    pub async fn toggle_diet(&self, diet: DietType) {
        self.apply(|prefs| prefs.toggle_diet(diet)).await;
    }

    /// Mutate, persist, and publish; unchanged values are not republished
    async fn apply(&self, mutate: impl FnOnce(&mut Preferences)) {
        let mut next = self.current();
        mutate(&mut next);
        if next == self.current() {
            return;
        }

        if let Err(e) = store_json(&*self.inner.store, storage_keys::PREFERENCES, &next).await {
            warn!("failed to persist preferences: {e}");
        }
        // send_replace updates the value even when nobody subscribes yet
        self.inner.tx.send_replace(next);
    }
}

/// Spawn the preference watcher
///
/// Observes the store's watch channel and, for every change that lands after
/// the feed engine finished its initial load, discards the persisted feed
/// cache and refetches with the new filters. Changes arriving before the
/// engine is initialized are ignored so startup never double-fetches.
///
/// The task runs for the app's lifetime; abort the returned handle to stop
/// it early.
pub fn spawn_preference_watcher(feed: FeedEngine, prefs: &PreferenceStore) -> JoinHandle<()> {
    let mut rx = prefs.subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            // Mark the latest value seen; the engine reads the store itself
            // at fetch time, so intermediate edits coalesce here.
            rx.borrow_and_update();

            if !feed.is_initialized() {
                debug!("preference change before initial load, skipping refetch");
                continue;
            }
            feed.on_preferences_changed().await;
        }
    })
}
