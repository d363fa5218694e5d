// ABOUTME: File-backed key-value store implementation
// ABOUTME: One JSON blob per key under a data directory, written atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};

/// File-backed store
///
/// Each key maps to `<dir>/<key>.json`. Writes go through a temporary file
/// followed by a rename so a crash mid-write never leaves a torn blob for
/// the next launch to misparse.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::storage(format!("create {}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    /// Directory this store writes into
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("read {key}: {e}"))),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> AppResult<()> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)
            .await
            .map_err(|e| AppError::storage(format!("write {key}: {e}")))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| AppError::storage(format!("commit {key}: {e}")))
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("remove {key}: {e}"))),
        }
    }
}
