// ABOUTME: Durable liked-recipe collection, newest first
// ABOUTME: Idempotent mutations with full persistence on every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! # Liked Recipes
//!
//! The deduplicated, order-preserving collection of recipes the user liked,
//! newest first. Full recipe objects are stored so the liked view works
//! offline without a lookup table; the id-only persisted format is legacy.
//!
//! Every mutation writes the whole set back to storage. Expected set sizes
//! make incremental diffing not worth its complexity.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::constants::storage_keys;
use crate::models::Recipe;
use crate::storage::{load_json, store_json, KeyValueStore};

/// Durable liked-recipe collection
///
/// Cloning is cheap; all clones share one list and one storage handle. This
/// collection is the source of truth for "liked" status across restarts.
#[derive(Clone)]
pub struct LikedRecipes {
    inner: Arc<LikedInner>,
}

struct LikedInner {
    store: Arc<dyn KeyValueStore>,
    recipes: RwLock<Vec<Recipe>>,
}

impl LikedRecipes {
    /// Load the liked set from storage
    ///
    /// Corrupt or unreadable persisted data falls back to an empty set and
    /// logs; initialization never fails.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let recipes = match load_json::<Vec<Recipe>>(&*store, storage_keys::LIKED_RECIPES).await {
            Ok(Some(recipes)) => recipes,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to load liked recipes, starting empty: {e}");
                Vec::new()
            }
        };

        Self {
            inner: Arc::new(LikedInner {
                store,
                recipes: RwLock::new(recipes),
            }),
        }
    }

    /// Add a recipe to the front of the set
    ///
    /// Idempotent: adding an id that is already present is a no-op and does
    /// not touch storage.
    pub async fn add(&self, recipe: Recipe) {
        let snapshot = {
            let mut recipes = self.inner.recipes.write().await;
            if recipes.iter().any(|r| r.id == recipe.id) {
                return;
            }
            recipes.insert(0, recipe);
            recipes.clone()
        };
        self.persist(&snapshot).await;
    }

    /// Remove the recipe with the given id; absent ids are a no-op
    pub async fn remove(&self, id: i64) {
        let snapshot = {
            let mut recipes = self.inner.recipes.write().await;
            let before = recipes.len();
            recipes.retain(|r| r.id != id);
            if recipes.len() == before {
                return;
            }
            recipes.clone()
        };
        self.persist(&snapshot).await;
    }

    /// Whether the given id is in the set
    pub async fn is_liked(&self, id: i64) -> bool {
        self.inner.recipes.read().await.iter().any(|r| r.id == id)
    }

    /// Empty the set
    pub async fn clear(&self) {
        {
            let mut recipes = self.inner.recipes.write().await;
            if recipes.is_empty() {
                return;
            }
            recipes.clear();
        }
        self.persist(&[]).await;
    }

    /// Snapshot of the collection, newest first
    pub async fn all(&self) -> Vec<Recipe> {
        self.inner.recipes.read().await.clone()
    }

    /// Number of liked recipes
    pub async fn len(&self) -> usize {
        self.inner.recipes.read().await.len()
    }

    /// Whether the set is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.recipes.read().await.is_empty()
    }

    /// Write the full set back to storage; failures are logged, not surfaced
    async fn persist(&self, recipes: &[Recipe]) {
        if let Err(e) = store_json(&*self.inner.store, storage_keys::LIKED_RECIPES, &recipes).await
        {
            warn!("failed to persist liked recipes: {e}");
        }
    }
}
