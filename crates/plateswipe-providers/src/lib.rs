// ABOUTME: External collaborator clients for the Plateswipe backend
// ABOUTME: Core client traits, shared HTTP client, retry utilities, REST implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! Clients for the two remote collaborators of the feed pipeline.
//!
//! The pipeline core depends only on the [`RecipeFeedClient`] and
//! [`SwipeReportClient`] traits; [`RestClient`] is the production
//! implementation speaking to the Plateswipe backend over HTTP.

// Re-export plateswipe-core modules so client code can keep `use crate::errors::*` etc.
pub use plateswipe_core::constants;
pub use plateswipe_core::errors;
pub use plateswipe_core::models;

/// Core client traits and shared request types
pub mod core;
/// Shared HTTP client for backend API calls
pub mod http_client;
/// REST implementation of the feed and swipe clients
pub mod rest;
/// Retry utilities for backend API calls
pub mod utils;

pub use self::core::{ClientConfig, RecipeFeedClient, SwipeRecord, SwipeReportClient};
pub use http_client::{initialize_shared_client, shared_client};
pub use rest::RestClient;
pub use utils::{clamp_page_limit, RetryConfig};
