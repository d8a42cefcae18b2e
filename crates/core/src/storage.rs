// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Asynchronous key-value storage.
//!
//! The stores persist each collection as one serialized JSON document under
//! an opaque string key. The space is shared, unsynchronized, and last write
//! wins: there is no locking, no transactions, and no concurrency tokens.
//! Two store instances doing concurrent read-modify-write cycles over the
//! same key can lose one of the updates; that behavior is part of the
//! contract and is exercised by tests rather than fixed here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::{Error, Result};

/// Asynchronous key-value space holding serialized documents.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the document under `key`. A key that was never written reads
    /// as `None`.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the document under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the document under `key`. Absent keys are not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Reads a JSON array of records from `key`.
///
/// Fails open: an absent key yields an empty collection. A payload that does
/// not parse as the expected shape aborts the read with [`Error::Malformed`];
/// there is no per-record recovery.
pub async fn read_array<T, S>(storage: &S, key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
{
    match storage.get(key).await? {
        Some(payload) => decode_array(key, &payload),
        None => Ok(Vec::new()),
    }
}

/// Writes a full collection as a JSON array under `key`.
pub async fn write_array<T, S>(storage: &S, key: &str, records: &[T]) -> Result<()>
where
    T: Serialize,
    S: Storage + ?Sized,
{
    let payload = serde_json::to_string(records)?;
    storage.set(key, &payload).await
}

/// Decodes a JSON array payload read from `key`.
pub fn decode_array<T: DeserializeOwned>(key: &str, payload: &str) -> Result<Vec<T>> {
    serde_json::from_str(payload).map_err(|source| Error::Malformed {
        key: key.to_string(),
        source,
    })
}

/// File-backed storage: one UTF-8 JSON document per key under a root
/// directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `root`, creating the directory if missing.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(FileStorage { root })
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

/// Keys name files, so they are restricted to a filesystem-safe alphabet.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidKey(key.to_string()))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::write(&path, value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage backed by a shared map.
///
/// Cloning returns a handle onto the same map, which lets tests run several
/// store instances against one backend the way several mounted screens share
/// the device storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
