// ABOUTME: Unified error types for the Plateswipe client
// ABOUTME: Defines AppError, AppResult, and the propagation taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! # Unified Error Handling
//!
//! Central error taxonomy for the client. Errors from external collaborators
//! (network, storage) are converted into `AppError` at the boundary of the
//! component that called them and never propagate further up: initial-load
//! fetch errors become user-visible state, everything else degrades to a
//! logged fallback.

use thiserror::Error;

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

/// Unified application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Network-level failure reaching a remote service
    #[error("network error: {0}")]
    Network(String),

    /// Remote service responded with a non-success status
    #[error("{service} error (status {status}): {message}")]
    ExternalService {
        /// Name of the remote service ("feed", "swipes")
        service: String,
        /// HTTP status code returned
        status: u16,
        /// Response body or description
        message: String,
    },

    /// Persistent key-value store failure
    #[error("storage error: {0}")]
    Storage(String),

    /// Malformed data encountered while (de)serializing
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid or missing configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Requested resource does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an external-service error
    pub fn external_service(service: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: service.into(),
            status,
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether retrying the originating call may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::ExternalService { status, .. } => {
                *status == 429 || *status >= 500
            }
            Self::Storage(_)
            | Self::Serialization(_)
            | Self::Config(_)
            | Self::NotFound(_)
            | Self::Internal(_) => false,
        }
    }
}
