// ABOUTME: Client configuration assembled from environment variables
// ABOUTME: Backend connection settings plus the local data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

use std::env;
use std::path::PathBuf;

use plateswipe_providers::ClientConfig;

/// Top-level client configuration
///
/// Everything deployment-dependent in one place: where the backend lives and
/// where local state is written. Loaded once at startup; components receive
/// the pieces they need by value.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend connection settings
    pub backend: ClientConfig,
    /// Directory for the file-backed key-value store
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// `PLATESWIPE_DATA_DIR` overrides the data directory; otherwise the
    /// platform data directory is used, falling back to the current
    /// directory on platforms without one.
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = env::var("PLATESWIPE_DATA_DIR").map_or_else(
            |_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("plateswipe")
            },
            PathBuf::from,
        );

        Self {
            backend: ClientConfig::from_env(),
            data_dir,
        }
    }
}
