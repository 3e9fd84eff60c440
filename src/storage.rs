//! # Storage Module
//!
//! Key-value persistence for the grocery list. Backends only move opaque
//! strings; encoding the item list and the "corrupt means empty" read policy
//! live in [`load_list`] and [`save_list`].

use crate::errors::GroceryError;
use crate::grocery_model::GroceryItem;
use anyhow::Context;
use async_trait::async_trait;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A string key-value store
#[async_trait]
pub trait ListStorage: Send + Sync {
    /// Read the value under `key`; `Ok(None)` when nothing was ever written
    async fn read(&self, key: &str) -> Result<Option<String>, GroceryError>;

    /// Replace the value under `key`
    async fn write(&self, key: &str, value: &str) -> Result<(), GroceryError>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, GroceryError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(GroceryError::Storage(format!("Invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl ListStorage for JsonFileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, GroceryError> {
        let path = self.path_for(key)?;
        debug!("Reading list blob from {}", path.display());

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read {}", path.display()))
                .map_err(GroceryError::from),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), GroceryError> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", self.dir.display()))?;
        tokio::fs::write(&tmp_path, value)
            .await
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        info!("Saved list blob to {} ({} bytes)", path.display(), value.len());
        Ok(())
    }
}

/// Process-local storage, mainly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing encoding
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .lock()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw value currently stored under `key`
    pub fn raw_value(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds the last complete write
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ListStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, GroceryError> {
        Ok(self.raw_value(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), GroceryError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load the item list under `key`.
///
/// Missing, unreadable or corrupt data yields an empty list. Items without
/// sources are dropped.
pub async fn load_list<S: ListStorage + ?Sized>(storage: &S, key: &str) -> Vec<GroceryItem> {
    let blob = match storage.read(key).await {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!("No stored list under '{}'", key);
            return Vec::new();
        }
        Err(e) => {
            warn!("Could not read stored list '{}', starting empty: {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<GroceryItem>>(&blob) {
        Ok(items) => {
            let total = items.len();
            let items: Vec<GroceryItem> = items
                .into_iter()
                .filter(|item| !item.sources.is_empty())
                .collect();
            if items.len() != total {
                warn!(
                    "Dropped {} stored items without sources",
                    total - items.len()
                );
            }
            items
        }
        Err(e) => {
            warn!("Stored list '{}' is corrupt, starting empty: {}", key, e);
            Vec::new()
        }
    }
}

/// Encode and persist the item list under `key`
pub async fn save_list<S: ListStorage + ?Sized>(
    storage: &S,
    key: &str,
    items: &[GroceryItem],
) -> Result<(), GroceryError> {
    let blob = serde_json::to_string(items)?;
    storage.write(key, &blob).await
}
