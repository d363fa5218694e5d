// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Recipe factories and scripted mock clients with call counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! Shared test utilities for `plateswipe`
//!
//! Scripted mocks stand in for the two backend collaborators. Pages and
//! failures are queued up front; every call is recorded with the filters it
//! carried so tests can assert on exactly what went over the wire.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use plateswipe::errors::{AppError, AppResult};
use plateswipe::models::{DietType, DishType, Nutrition, Recipe, TasteProfile};
use plateswipe::providers::{RecipeFeedClient, SwipeRecord, SwipeReportClient};

/// Build a minimal recipe with the given id
pub fn recipe(id: i64) -> Recipe {
    Recipe {
        id,
        title: format!("Recipe {id}"),
        image_url: format!("https://img.example/{id}.jpg"),
        ingredients: vec!["salt".into()],
        instructions: "Cook it.".into(),
        equipment: Vec::new(),
        nutrition: Nutrition {
            calories: 100.0,
            protein: 10.0,
            carbs: 10.0,
            fat: 5.0,
        },
        diets: Vec::new(),
        dish_type: vec![DishType::Dinner],
        cook_time_minutes: None,
        taste: TasteProfile::default(),
    }
}

/// Build recipes for a contiguous id range
pub fn recipes(ids: std::ops::RangeInclusive<i64>) -> Vec<Recipe> {
    ids.map(recipe).collect()
}

/// Filters captured from one `get_feed` call
#[derive(Debug, Clone)]
pub struct FeedRequest {
    pub limit: usize,
    pub categories: Vec<DishType>,
    pub diets: Vec<DietType>,
}

/// Scripted feed client
///
/// Pops one scripted result per call; an exhausted script serves empty
/// pages. A gate, when armed, blocks exactly one call until notified so
/// tests can hold a fetch in flight.
#[derive(Default)]
pub struct MockFeedClient {
    script: Mutex<VecDeque<AppResult<Vec<Recipe>>>>,
    requests: Mutex<Vec<FeedRequest>>,
    calls: AtomicUsize,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl MockFeedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful page
    pub async fn push_page(&self, page: Vec<Recipe>) {
        self.script.lock().await.push_back(Ok(page));
    }

    /// Queue a failing call
    pub async fn push_error(&self, message: &str) {
        self.script
            .lock()
            .await
            .push_back(Err(AppError::network(message)));
    }

    /// Block the next call until the returned handle is notified
    pub async fn arm_gate(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock().await = Some(notify.clone());
        notify
    }

    /// Total calls observed
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Filters captured per call, in order
    pub async fn requests(&self) -> Vec<FeedRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl RecipeFeedClient for MockFeedClient {
    async fn get_feed(
        &self,
        _device_id: &str,
        limit: usize,
        categories: &[DishType],
        diets: &[DietType],
    ) -> AppResult<Vec<Recipe>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().await.push(FeedRequest {
            limit,
            categories: categories.to_vec(),
            diets: diets.to_vec(),
        });

        let gate = self.gate.lock().await.take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.script
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Recording swipe client with optional failure injection
#[derive(Default)]
pub struct MockSwipeClient {
    records: Mutex<Vec<SwipeRecord>>,
    fail: AtomicBool,
}

impl MockSwipeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail
    pub fn fail_all(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// Swipes received so far, in order
    pub async fn records(&self) -> Vec<SwipeRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl SwipeReportClient for MockSwipeClient {
    async fn record_swipe(&self, swipe: &SwipeRecord) -> AppResult<()> {
        self.records.lock().await.push(swipe.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::network("simulated swipe report failure"));
        }
        Ok(())
    }
}

/// Let spawned tasks run to completion on the current-thread test runtime
pub async fn settle_tasks() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}
