// ABOUTME: REST implementation of the feed and swipe clients
// ABOUTME: Speaks to the Plateswipe backend over reqwest with retry on rate limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::constants::service_names;
use crate::core::{ClientConfig, RecipeFeedClient, SwipeRecord, SwipeReportClient};
use crate::errors::{AppError, AppResult};
use crate::http_client::shared_client;
use crate::models::{DietType, DishType, Recipe};
use crate::utils::{clamp_page_limit, send_with_retry, RetryConfig};

/// Production client for the Plateswipe backend
///
/// Implements both collaborator traits over the shared pooled HTTP client.
/// One instance serves the whole process; cloning is cheap.
#[derive(Debug, Clone)]
pub struct RestClient {
    config: ClientConfig,
    retry: RetryConfig,
}

impl RestClient {
    /// Create a client for the given backend
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            retry: RetryConfig::default(),
        }
    }

    /// Create a client configured from `PLATESWIPE_*` environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Override the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    fn http(&self) -> &'static Client {
        shared_client()
    }

    fn feed_url(&self) -> String {
        format!("{}/recipes/feed", self.config.base_url)
    }

    fn swipes_url(&self) -> String {
        format!("{}/swipes/", self.config.base_url)
    }
}

/// Build the repeated-key query for the feed endpoint
fn feed_query(
    device_id: &str,
    limit: usize,
    categories: &[DishType],
    diets: &[DietType],
) -> Vec<(&'static str, String)> {
    let mut query: Vec<(&'static str, String)> = Vec::with_capacity(2 + categories.len() + diets.len());
    query.push(("device_id", device_id.to_owned()));
    query.push(("limit", clamp_page_limit(limit).to_string()));
    for category in categories {
        query.push(("categories", category.as_str().to_owned()));
    }
    for diet in diets {
        query.push(("diets", diet.as_str().to_owned()));
    }
    query
}

#[async_trait]
impl RecipeFeedClient for RestClient {
    async fn get_feed(
        &self,
        device_id: &str,
        limit: usize,
        categories: &[DishType],
        diets: &[DietType],
    ) -> AppResult<Vec<Recipe>> {
        let url = self.feed_url();
        let query = feed_query(device_id, limit, categories, diets);
        debug!(limit, categories = categories.len(), diets = diets.len(), "requesting feed page");

        let response = send_with_retry(service_names::FEED, &self.retry, || {
            self.http().get(&url).query(&query).send()
        })
        .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                service_names::FEED,
                status.as_u16(),
                body,
            ));
        }

        let recipes: Vec<Recipe> = response
            .json()
            .await
            .map_err(|e| AppError::network(format!("feed response decode failed: {e}")))?;
        debug!(count = recipes.len(), "feed page received");
        Ok(recipes)
    }
}

#[async_trait]
impl SwipeReportClient for RestClient {
    async fn record_swipe(&self, swipe: &SwipeRecord) -> AppResult<()> {
        let url = self.swipes_url();

        let response = send_with_retry(service_names::SWIPES, &self.retry, || {
            self.http().post(&url).json(swipe).send()
        })
        .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                service_names::SWIPES,
                status.as_u16(),
                body,
            ));
        }

        // Success is 204 No Content; nothing to decode.
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_query_repeats_filter_keys() {
        let query = feed_query(
            "dev-1",
            5,
            &[DishType::Breakfast, DishType::Dinner],
            &[DietType::GlutenFree],
        );
        assert_eq!(
            query,
            vec![
                ("device_id", "dev-1".to_owned()),
                ("limit", "5".to_owned()),
                ("categories", "breakfast".to_owned()),
                ("categories", "dinner".to_owned()),
                ("diets", "Gluten Free".to_owned()),
            ]
        );
    }

    #[test]
    fn test_feed_query_clamps_limit() {
        let query = feed_query("dev-1", 999, &[], &[]);
        assert!(query.contains(&("limit", "20".to_owned())));
    }

    #[test]
    fn test_endpoint_urls() {
        let client = RestClient::new(ClientConfig::default().with_base_url("http://api.example"));
        assert_eq!(client.feed_url(), "http://api.example/recipes/feed");
        assert_eq!(client.swipes_url(), "http://api.example/swipes/");
    }
}
