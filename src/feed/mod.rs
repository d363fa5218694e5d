// ABOUTME: Feed cache & pagination engine with lookahead prefetch
// ABOUTME: Owns the candidate list, read cursor, staleness-gated cache, dedup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! # Feed Cache & Pagination Engine
//!
//! Presents a single "next card" to the UI with minimal latency. The engine
//! keeps a small lookahead window of candidate recipes: while at least
//! `REFETCH_THRESHOLD` cards remain the UI never waits on the network, and a
//! background prefetch tops the window up before it drains.
//!
//! ## Persistence
//!
//! Only the unconsumed tail (`recipes[cursor..]`) is ever written to
//! storage, with a save timestamp. Bounding the persisted window this way
//! also guarantees already-swiped recipes are never re-served after a
//! restart. A persisted tail older than `CACHE_TTL_SECS` is treated as
//! absent.
//!
//! ## Deduplication
//!
//! The recommendation endpoint does not guarantee disjoint pages, so every
//! append drops ids already present in the in-memory list. Consumed entries
//! deliberately stay in that list for the session: they keep the cursor
//! indexing stable and make the dedup check double as an already-swiped
//! filter. A refresh or preference change resets the list.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use plateswipe_providers::RecipeFeedClient;

use crate::constants::feed::{BATCH_SIZE, CACHE_TTL_SECS, REFETCH_THRESHOLD};
use crate::constants::storage_keys;
use crate::device::device_id;
use crate::models::Recipe;
use crate::preferences::PreferenceStore;
use crate::storage::{load_json, store_json, KeyValueStore};

/// Observable state of the feed pipeline
///
/// The UI renders from clones of this value and never mutates it; all
/// mutation goes through [`FeedEngine`] operations.
#[derive(Debug, Clone)]
pub struct FeedState {
    /// Candidate recipes in server order, unique by id
    pub recipes: Vec<Recipe>,
    /// Index of the next unconsumed recipe; always `<= recipes.len()`
    pub cursor: usize,
    /// Whether the server may have more recipes for the current filters
    pub has_more: bool,
    /// Whether an initial load is in progress
    pub is_loading: bool,
    /// Whether a background prefetch is in flight
    pub is_fetching_more: bool,
    /// User-visible error from the most recent initial load, if any
    pub error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            recipes: Vec::new(),
            cursor: 0,
            has_more: true,
            is_loading: true,
            is_fetching_more: false,
            error: None,
        }
    }
}

impl FeedState {
    /// The recipe under the cursor, if the feed is not exhausted
    #[must_use]
    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.recipes.get(self.cursor)
    }

    /// Number of unconsumed recipes
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.recipes.len() - self.cursor
    }
}

/// Persisted unconsumed feed tail with its save timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedCacheRecord {
    /// The unconsumed recipes at save time
    pub recipes: Vec<Recipe>,
    /// When the tail was written
    pub saved_at: DateTime<Utc>,
}

impl FeedCacheRecord {
    /// Create a record stamped with the current time
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            saved_at: Utc::now(),
        }
    }

    /// Whether the record is still within its TTL at `now`
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.saved_at <= Duration::seconds(CACHE_TTL_SECS)
    }
}

/// Feed cache & pagination engine
///
/// Cloning is cheap; all clones share one state. The engine is safe to hand
/// to background tasks (prefetch runs on a clone) and to the preference
/// watcher.
#[derive(Clone)]
pub struct FeedEngine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    state: RwLock<FeedState>,
    /// Guard: at most one background prefetch in flight
    fetching_more: AtomicBool,
    /// Set once `load_or_fetch` completes; gates the preference watcher
    initialized: AtomicBool,
    /// Bumped by every initial fetch; stale prefetch responses are dropped
    generation: AtomicU64,
    client: Arc<dyn RecipeFeedClient>,
    store: Arc<dyn KeyValueStore>,
    prefs: PreferenceStore,
}

impl FeedEngine {
    /// Create an engine over the given collaborators
    #[must_use]
    pub fn new(
        client: Arc<dyn RecipeFeedClient>,
        store: Arc<dyn KeyValueStore>,
        prefs: PreferenceStore,
    ) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                state: RwLock::new(FeedState::default()),
                fetching_more: AtomicBool::new(false),
                initialized: AtomicBool::new(false),
                generation: AtomicU64::new(0),
                client,
                store,
                prefs,
            }),
        }
    }

    /// Startup path: adopt a fresh cached tail or fetch from the network
    ///
    /// This is the only operation that may skip the network. The persisted
    /// record is adopted only when it is non-empty and within TTL; anything
    /// else (missing, stale, empty, corrupt) falls through to
    /// [`Self::fetch_initial`].
    pub async fn load_or_fetch(&self) {
        match load_json::<FeedCacheRecord>(&*self.inner.store, storage_keys::FEED_CACHE).await {
            Ok(Some(record)) if record.is_fresh(Utc::now()) && !record.recipes.is_empty() => {
                let count = record.recipes.len();
                let mut state = self.inner.state.write().await;
                state.recipes = record.recipes;
                state.cursor = 0;
                // Exhaustion is not recorded in the cache; the first
                // prefetch after adoption resolves it.
                state.has_more = true;
                state.is_loading = false;
                state.error = None;
                drop(state);
                info!(count, "adopted cached feed tail");
            }
            Ok(_) => {
                self.fetch_initial().await;
            }
            Err(e) => {
                warn!("failed to load cached feed, fetching fresh: {e}");
                self.fetch_initial().await;
            }
        }
        self.inner.initialized.store(true, Ordering::Release);
    }

    /// Fetch the first page for the current filters, replacing all state
    ///
    /// On success the entire recipe list is replaced, the cursor resets, and
    /// the new tail is persisted. On failure the previous list is left
    /// untouched and the error becomes user-visible state, retryable via
    /// [`Self::refresh`].
    pub async fn fetch_initial(&self) {
        {
            let mut state = self.inner.state.write().await;
            state.is_loading = true;
            state.error = None;
        }
        // Supersede any in-flight prefetch; its results would be merged
        // against a list this fetch is about to replace.
        self.inner.generation.fetch_add(1, Ordering::AcqRel);

        let prefs = self.inner.prefs.current();
        let result = self
            .inner
            .client
            .get_feed(device_id(), BATCH_SIZE, &prefs.categories, &prefs.diets)
            .await;

        match result {
            Ok(recipes) => {
                let has_more = recipes.len() == BATCH_SIZE;
                let tail = recipes.clone();
                {
                    let mut state = self.inner.state.write().await;
                    state.recipes = recipes;
                    state.cursor = 0;
                    state.has_more = has_more;
                    state.is_loading = false;
                }
                debug!(count = tail.len(), has_more, "initial feed page loaded");
                if !tail.is_empty() {
                    self.persist_tail(tail).await;
                }
            }
            Err(e) => {
                warn!("initial feed fetch failed: {e}");
                let mut state = self.inner.state.write().await;
                state.error = Some(e.to_string());
                state.is_loading = false;
            }
        }
    }

    /// Background prefetch of one more page
    ///
    /// A no-op when a fetch is already in flight or the server is exhausted.
    /// Failures are logged and swallowed; the guard always resets so the
    /// next threshold crossing can retry. A response that arrives after an
    /// initial fetch replaced the list is discarded.
    pub async fn fetch_more(&self) {
        if !self.inner.state.read().await.has_more {
            return;
        }
        if self.inner.fetching_more.swap(true, Ordering::AcqRel) {
            return;
        }

        let generation = self.inner.generation.load(Ordering::Acquire);
        let prefs = self.inner.prefs.current();
        let result = self
            .inner
            .client
            .get_feed(device_id(), BATCH_SIZE, &prefs.categories, &prefs.diets)
            .await;

        if self.inner.generation.load(Ordering::Acquire) != generation {
            debug!("discarding prefetch results from a superseded generation");
            self.inner.fetching_more.store(false, Ordering::Release);
            return;
        }

        match result {
            Ok(page) if page.is_empty() => {
                self.inner.state.write().await.has_more = false;
            }
            Ok(page) => {
                let page_len = page.len();
                let mut state = self.inner.state.write().await;
                let existing: HashSet<i64> = state.recipes.iter().map(|r| r.id).collect();
                let fresh: Vec<Recipe> =
                    page.into_iter().filter(|r| !existing.contains(&r.id)).collect();
                let appended = fresh.len();
                state.recipes.extend(fresh);
                state.has_more = page_len == BATCH_SIZE;
                drop(state);
                debug!(page_len, appended, "prefetched feed page");
            }
            Err(e) => {
                // Prefetch failures never interrupt the active card
                warn!("feed prefetch failed: {e}");
            }
        }

        self.inner.fetching_more.store(false, Ordering::Release);
    }

    /// Consume the current card after a committed swipe
    ///
    /// Advances the cursor, triggers a background prefetch when the
    /// lookahead window drops to `REFETCH_THRESHOLD`, and persists the new
    /// unconsumed tail. An empty tail is not persisted; whatever tail was
    /// written before simply ages out.
    pub async fn advance(&self) {
        let (tail, remaining, has_more) = {
            let mut state = self.inner.state.write().await;
            if state.cursor < state.recipes.len() {
                state.cursor += 1;
            }
            let tail = state.recipes[state.cursor..].to_vec();
            (tail, state.remaining_count(), state.has_more)
        };

        if remaining <= REFETCH_THRESHOLD
            && has_more
            && !self.inner.fetching_more.load(Ordering::Acquire)
        {
            let engine = self.clone();
            tokio::spawn(async move {
                engine.fetch_more().await;
            });
        }

        if !tail.is_empty() {
            self.persist_tail(tail).await;
        }
    }

    /// Discard state and refetch from scratch with the current filters
    pub async fn refresh(&self) {
        self.inner.state.write().await.cursor = 0;
        self.fetch_initial().await;
    }

    /// React to a preference change: drop the cache, refetch
    ///
    /// Ignored until [`Self::load_or_fetch`] has completed so startup never
    /// races a duplicate fetch.
    pub async fn on_preferences_changed(&self) {
        if !self.is_initialized() {
            return;
        }
        if let Err(e) = self.inner.store.remove(storage_keys::FEED_CACHE).await {
            warn!("failed to discard cached feed: {e}");
        }
        self.inner.state.write().await.cursor = 0;
        self.fetch_initial().await;
    }

    /// Clone of the current state for rendering
    pub async fn snapshot(&self) -> FeedState {
        let mut state = self.inner.state.read().await.clone();
        state.is_fetching_more = self.inner.fetching_more.load(Ordering::Acquire);
        state
    }

    /// Whether the startup load has completed
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.load(Ordering::Acquire)
    }

    /// Whether a background prefetch is currently in flight
    #[must_use]
    pub fn is_fetching_more(&self) -> bool {
        self.inner.fetching_more.load(Ordering::Acquire)
    }

    /// Persist the unconsumed tail with a fresh timestamp
    async fn persist_tail(&self, tail: Vec<Recipe>) {
        let record = FeedCacheRecord::new(tail);
        if let Err(e) =
            store_json(&*self.inner.store, storage_keys::FEED_CACHE, &record).await
        {
            warn!("failed to cache feed tail: {e}");
        }
    }
}
