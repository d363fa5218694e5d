// ABOUTME: Persistent key-value storage seam for the client
// ABOUTME: KeyValueStore trait plus JSON helpers shared by all callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! # Key-Value Storage
//!
//! Durable per-device storage behind a small trait. Three logical keys exist
//! (see [`plateswipe_core::constants::storage_keys`]): the unconsumed feed
//! tail, the liked set, and the preferences. Values are opaque byte blobs;
//! the JSON helpers below handle the (de)serialization every caller wants.
//!
//! Storage is treated as eventually-durable: read and write failures degrade
//! gracefully at each call site (empty-state fallback, logged) and are never
//! surfaced to the user.

/// File-backed store, one JSON blob per key
pub mod file;
/// In-memory store for tests and ephemeral sessions
pub mod memory;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppResult;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Pluggable persistent key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails; a missing key is
    /// `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous blob
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails.
    async fn set(&self, key: &str, value: Vec<u8>) -> AppResult<()>;

    /// Remove the blob stored under `key`; absent keys are a no-op
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails.
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Read and decode a JSON value stored under `key`
///
/// # Errors
///
/// Returns an error if the store fails or the stored blob is not valid JSON
/// for `T`. Callers treat decode failures as a cache miss.
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    match store.get(key).await? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`
///
/// # Errors
///
/// Returns an error if serialization or the store fails.
pub async fn store_json<T: Serialize + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let bytes = serde_json::to_vec(value)?;
    store.set(key, bytes).await
}
