// ABOUTME: Tests for the swipe commit protocol coordinator
// ABOUTME: Liked-set updates, fire-and-forget reporting, cursor advancement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{recipes, settle_tasks, MockFeedClient, MockSwipeClient};
use plateswipe::constants::gesture::SWIPE_THRESHOLD;
use plateswipe::feed::FeedEngine;
use plateswipe::gesture::{SwipeDirection, SwipeGesture};
use plateswipe::liked::LikedRecipes;
use plateswipe::preferences::PreferenceStore;
use plateswipe::storage::MemoryStore;
use plateswipe::swipe::SwipeCoordinator;

struct Harness {
    feed_client: Arc<MockFeedClient>,
    swipe_client: Arc<MockSwipeClient>,
    engine: FeedEngine,
    liked: LikedRecipes,
    coordinator: SwipeCoordinator,
}

async fn harness(page: Vec<plateswipe::models::Recipe>) -> Harness {
    let feed_client = Arc::new(MockFeedClient::new());
    feed_client.push_page(page).await;
    let swipe_client = Arc::new(MockSwipeClient::new());

    let store = Arc::new(MemoryStore::new());
    let prefs = PreferenceStore::load(store.clone()).await;
    let engine = FeedEngine::new(feed_client.clone(), store.clone(), prefs);
    engine.load_or_fetch().await;

    let liked = LikedRecipes::load(store).await;
    let coordinator = SwipeCoordinator::new(engine.clone(), liked.clone(), swipe_client.clone());

    Harness {
        feed_client,
        swipe_client,
        engine,
        liked,
        coordinator,
    }
}

#[tokio::test]
async fn test_right_swipe_likes_reports_and_advances() {
    let h = harness(recipes(1..=5)).await;

    let committed = h.coordinator.commit(SwipeDirection::Right).await;
    settle_tasks().await;

    assert_eq!(committed, Some(1));
    assert!(h.liked.is_liked(1).await);

    let records = h.swipe_client.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].recipe_id, 1);
    assert!(records[0].liked);
    assert!(!records[0].device_id.is_empty());

    assert_eq!(h.engine.snapshot().await.cursor, 1);
}

#[tokio::test]
async fn test_left_swipe_reports_without_liking() {
    let h = harness(recipes(1..=5)).await;

    h.coordinator.commit(SwipeDirection::Left).await;
    settle_tasks().await;

    assert!(h.liked.is_empty().await);
    let records = h.swipe_client.records().await;
    assert_eq!(records.len(), 1);
    assert!(!records[0].liked);
    assert_eq!(h.engine.snapshot().await.cursor, 1);
}

#[tokio::test]
async fn test_report_failure_does_not_block_like_or_advance() {
    let h = harness(recipes(1..=5)).await;
    h.swipe_client.fail_all();

    h.coordinator.commit(SwipeDirection::Right).await;
    settle_tasks().await;

    // The local like and the cursor advance both survived the failed report
    assert!(h.liked.is_liked(1).await);
    assert_eq!(h.engine.snapshot().await.cursor, 1);
    assert_eq!(h.swipe_client.records().await.len(), 1);
}

#[tokio::test]
async fn test_commit_on_exhausted_feed_is_a_noop() {
    let h = harness(Vec::new()).await;

    let committed = h.coordinator.commit(SwipeDirection::Right).await;
    settle_tasks().await;

    assert_eq!(committed, None);
    assert!(h.swipe_client.records().await.is_empty());
    assert_eq!(h.engine.snapshot().await.cursor, 0);
}

#[tokio::test]
async fn test_each_commit_reports_the_card_it_consumed() {
    let h = harness(recipes(1..=5)).await;

    h.coordinator.commit(SwipeDirection::Right).await;
    h.coordinator.commit(SwipeDirection::Left).await;
    h.coordinator.commit(SwipeDirection::Right).await;
    settle_tasks().await;

    let reported: Vec<(i64, bool)> = h
        .swipe_client
        .records()
        .await
        .iter()
        .map(|r| (r.recipe_id, r.liked))
        .collect();
    assert_eq!(reported, vec![(1, true), (2, false), (3, true)]);

    let liked_ids: Vec<i64> = h.liked.all().await.iter().map(|r| r.id).collect();
    assert_eq!(liked_ids, vec![3, 1]);
}

#[tokio::test]
async fn test_settle_drives_the_gesture_decision_exactly_once() {
    let h = harness(recipes(1..=5)).await;

    let mut gesture = SwipeGesture::new(400.0);
    gesture.touch_start();
    gesture.drag_move(SWIPE_THRESHOLD + 50.0, 0.0);
    gesture.release();

    let first = h.coordinator.settle(&mut gesture).await;
    let second = h.coordinator.settle(&mut gesture).await;
    settle_tasks().await;

    assert_eq!(first, Some(1));
    // The duplicate animation callback produced nothing
    assert_eq!(second, None);
    assert_eq!(h.swipe_client.records().await.len(), 1);
    assert_eq!(h.engine.snapshot().await.cursor, 1);
    assert_eq!(h.feed_client.calls(), 1);
}

#[tokio::test]
async fn test_snapback_never_reports() {
    let h = harness(recipes(1..=5)).await;

    let mut gesture = SwipeGesture::new(400.0);
    gesture.touch_start();
    gesture.drag_move(SWIPE_THRESHOLD, 0.0);
    gesture.release();

    let committed = h.coordinator.settle(&mut gesture).await;
    settle_tasks().await;

    assert_eq!(committed, None);
    assert!(h.swipe_client.records().await.is_empty());
    assert_eq!(h.engine.snapshot().await.cursor, 0);
}
