// ABOUTME: Shared utilities for backend client implementations
// ABOUTME: Retry logic with exponential backoff and page-limit clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

use reqwest::{Response, StatusCode};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

use crate::constants::feed::{MAX_PAGE_LIMIT, MIN_PAGE_LIMIT};
use crate::errors::{AppError, AppResult};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial backoff delay in milliseconds
    pub initial_backoff_ms: u64,
    /// HTTP status codes that should trigger retries
    pub retryable_status_codes: Vec<StatusCode>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 1000,
            retryable_status_codes: vec![StatusCode::TOO_MANY_REQUESTS],
        }
    }
}

/// Clamp a requested page size to the range the feed endpoint accepts
#[must_use]
pub fn clamp_page_limit(limit: usize) -> usize {
    limit.clamp(MIN_PAGE_LIMIT, MAX_PAGE_LIMIT)
}

/// Issue a request with retry on rate-limit responses
///
/// `send` is invoked once per attempt; a response whose status is in
/// `retryable_status_codes` is retried with exponential backoff until
/// `max_retries` is reached. Any other response (success or failure) is
/// returned to the caller for interpretation.
///
/// # Errors
///
/// Returns an error if the transport fails or all retry attempts are
/// exhausted.
pub async fn send_with_retry<F, Fut>(
    service: &str,
    retry_config: &RetryConfig,
    send: F,
) -> AppResult<Response>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Response, reqwest::Error>>,
{
    let mut attempt = 0;
    loop {
        let response = send()
            .await
            .map_err(|e| AppError::network(format!("{service} request failed: {e}")))?;

        let status = response.status();
        if retry_config.retryable_status_codes.contains(&status) {
            attempt += 1;
            if attempt >= retry_config.max_retries {
                let max_retries = retry_config.max_retries;
                warn!("{service} rate limit exceeded - max retries ({max_retries}) reached");
                return Err(AppError::external_service(
                    service,
                    status.as_u16(),
                    "rate limit exceeded, max retries reached",
                ));
            }

            let backoff_ms = retry_config.initial_backoff_ms * 2_u64.pow(attempt - 1);
            let status_code = status.as_u16();
            warn!("{service} rate limit hit ({status_code}) - retry {attempt} after {backoff_ms}ms backoff");
            tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            continue;
        }

        return Ok(response);
    }
}
