// ABOUTME: Core client traits for the Plateswipe backend collaborators
// ABOUTME: Defines RecipeFeedClient, SwipeReportClient, SwipeRecord, ClientConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! # Client Traits
//!
//! The feed pipeline treats the backend as two independent collaborators:
//! a paged recommendation endpoint and a swipe recording endpoint. Both are
//! expressed as traits so the orchestration core can be driven by mocks in
//! tests and by [`crate::rest::RestClient`] in production.
//!
//! ## Contract
//!
//! - `get_feed` is idempotent per call and safe to retry, but successive
//!   pages are NOT guaranteed disjoint; the caller must deduplicate by id.
//! - `record_swipe` is fire-and-forget from the caller's perspective:
//!   failures are logged by the caller and never retried automatically.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::env_config;
use crate::errors::AppResult;
use crate::models::{DietType, DishType, Recipe};

/// Paged recommendation endpoint
#[async_trait]
pub trait RecipeFeedClient: Send + Sync {
    /// Request one page of recommended recipes for the given filters
    ///
    /// Pages from successive calls may overlap; callers deduplicate by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded. Retrying is always safe.
    async fn get_feed(
        &self,
        device_id: &str,
        limit: usize,
        categories: &[DishType],
        diets: &[DietType],
    ) -> AppResult<Vec<Recipe>>;
}

/// Swipe recording endpoint
#[async_trait]
pub trait SwipeReportClient: Send + Sync {
    /// Record a like/dislike decision for a recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; callers log and move on.
    async fn record_swipe(&self, swipe: &SwipeRecord) -> AppResult<()>;
}

/// A single like/dislike decision (shared request type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeRecord {
    /// Opaque per-device identity
    pub device_id: String,
    /// Recipe the decision applies to
    pub recipe_id: i64,
    /// `true` for a right swipe, `false` for a left swipe
    pub liked: bool,
}

/// Connection configuration for the REST client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: env_config::DEFAULT_API_BASE_URL.into(),
            timeout_secs: env_config::DEFAULT_HTTP_TIMEOUT_SECS,
            connect_timeout_secs: env_config::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `PLATESWIPE_*` environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: trim_trailing_slash(env_config::api_base_url()),
            timeout_secs: env_config::http_timeout_secs(),
            connect_timeout_secs: env_config::connect_timeout_secs(),
        }
    }

    /// Override the backend base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = trim_trailing_slash(base_url.into());
        self
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
