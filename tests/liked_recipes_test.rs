// ABOUTME: Tests for the durable liked-recipe collection
// ABOUTME: Idempotent add, newest-first order, persistence, corrupt-data fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::recipe;
use plateswipe::constants::storage_keys;
use plateswipe::liked::LikedRecipes;
use plateswipe::storage::{KeyValueStore, MemoryStore};

#[tokio::test]
async fn test_add_is_idempotent() {
    let liked = LikedRecipes::load(Arc::new(MemoryStore::new())).await;

    liked.add(recipe(1)).await;
    liked.add(recipe(1)).await;

    assert_eq!(liked.len().await, 1);
    assert!(liked.is_liked(1).await);
}

#[tokio::test]
async fn test_newest_first_order() {
    let liked = LikedRecipes::load(Arc::new(MemoryStore::new())).await;

    liked.add(recipe(1)).await;
    liked.add(recipe(2)).await;
    liked.add(recipe(3)).await;

    let ids: Vec<i64> = liked.all().await.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_remove_filters_by_id() {
    let liked = LikedRecipes::load(Arc::new(MemoryStore::new())).await;
    liked.add(recipe(1)).await;
    liked.add(recipe(2)).await;

    liked.remove(1).await;
    assert!(!liked.is_liked(1).await);
    assert!(liked.is_liked(2).await);

    // Absent id is a no-op
    liked.remove(99).await;
    assert_eq!(liked.len().await, 1);
}

#[tokio::test]
async fn test_set_survives_reload() {
    let store = Arc::new(MemoryStore::new());

    let liked = LikedRecipes::load(store.clone()).await;
    liked.add(recipe(1)).await;
    liked.add(recipe(2)).await;

    let reloaded = LikedRecipes::load(store).await;
    let ids: Vec<i64> = reloaded.all().await.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_corrupt_storage_starts_empty() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(storage_keys::LIKED_RECIPES, b"[{\"id\": oops".to_vec())
        .await
        .unwrap();

    let liked = LikedRecipes::load(store).await;
    assert!(liked.is_empty().await);
}

#[tokio::test]
async fn test_clear_empties_and_persists() {
    let store = Arc::new(MemoryStore::new());

    let liked = LikedRecipes::load(store.clone()).await;
    liked.add(recipe(1)).await;
    liked.add(recipe(2)).await;
    liked.clear().await;

    assert!(liked.is_empty().await);
    // The cleared state is what a relaunch sees
    let reloaded = LikedRecipes::load(store).await;
    assert!(reloaded.is_empty().await);
}

#[tokio::test]
async fn test_remove_then_readd_moves_to_front() {
    let liked = LikedRecipes::load(Arc::new(MemoryStore::new())).await;
    liked.add(recipe(1)).await;
    liked.add(recipe(2)).await;

    liked.remove(1).await;
    liked.add(recipe(1)).await;

    let ids: Vec<i64> = liked.all().await.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}
