// ABOUTME: Shared constants and environment-based configuration for Plateswipe
// ABOUTME: Feed tuning values, gesture thresholds, storage keys, env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! # Constants Module
//!
//! Application constants and environment variable configuration. Hardcoded
//! values live in the topic submodules; anything deployment-dependent is read
//! through `env_config` with a compiled default.

use std::env;

/// Feed pipeline tuning values
pub mod feed {
    /// Number of recipes requested per feed page
    pub const BATCH_SIZE: usize = 5;

    /// Remaining-card count at or below which a prefetch is triggered
    pub const REFETCH_THRESHOLD: usize = 2;

    /// Maximum age of a persisted feed cache before it is treated as absent
    pub const CACHE_TTL_SECS: i64 = 5 * 60;

    /// Smallest page size the feed endpoint accepts
    pub const MIN_PAGE_LIMIT: usize = 1;

    /// Largest page size the feed endpoint accepts
    pub const MAX_PAGE_LIMIT: usize = 20;
}

/// Swipe gesture thresholds and animation parameters
pub mod gesture {
    /// Horizontal drag distance a release must exceed (strictly) to commit
    pub const SWIPE_THRESHOLD: f32 = 120.0;

    /// Horizontal distance below which a touch is not yet a drag
    pub const DRAG_DEADZONE: f32 = 10.0;

    /// Duration of the committed-card exit animation in milliseconds
    pub const EXIT_ANIMATION_MS: u64 = 250;

    /// Distance past the screen edge the exit animation travels
    pub const EXIT_OVERSHOOT: f32 = 100.0;

    /// Maximum card rotation at the edge of the rotation range, in degrees
    pub const ROTATION_MAX_DEGREES: f32 = 30.0;

    /// Rotation input range as a multiple of the screen width
    pub const ROTATION_RANGE_FACTOR: f32 = 1.5;
}

/// Logical keys for the persistent key-value store
pub mod storage_keys {
    /// Unconsumed feed tail with its save timestamp
    pub const FEED_CACHE: &str = "feed_cache";

    /// Full liked-recipe collection, newest first
    pub const LIKED_RECIPES: &str = "liked_recipes";

    /// Active dish-type and diet filters
    pub const PREFERENCES: &str = "preferences";
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Default backend base URL used when no override is present
    pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

    /// Default HTTP request timeout in seconds
    pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

    /// Default HTTP connect timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Get the backend base URL from `PLATESWIPE_API_BASE_URL` or default
    #[must_use]
    pub fn api_base_url() -> String {
        env::var("PLATESWIPE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into())
    }

    /// Get the HTTP request timeout from `PLATESWIPE_HTTP_TIMEOUT_SECS` or default
    #[must_use]
    pub fn http_timeout_secs() -> u64 {
        env::var("PLATESWIPE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
    }

    /// Get the HTTP connect timeout from `PLATESWIPE_CONNECT_TIMEOUT_SECS` or default
    #[must_use]
    pub fn connect_timeout_secs() -> u64 {
        env::var("PLATESWIPE_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS)
    }
}

/// Service names used in logs and error messages
pub mod service_names {
    /// The recipe feed endpoint
    pub const FEED: &str = "feed";

    /// The swipe recording endpoint
    pub const SWIPES: &str = "swipes";
}
