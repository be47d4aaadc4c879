//! JSON file backed key-value store.
//!
//! All keys live in one JSON object on disk, the local analogue of browser
//! storage: it survives restarts and is private to one process.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error};

use business::domain::errors::RepositoryError;
use business::domain::storage::KeyValueStore;

type Entries = BTreeMap<String, String>;

pub struct KeyValueStoreFile {
    path: PathBuf,
    /// Serialises read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl KeyValueStoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// A missing or empty file holds no keys.
    async fn read_entries(&self) -> Result<Entries, RepositoryError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Cannot read storage file");
                return Err(RepositoryError::ReadFailed);
            }
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Storage file is not a JSON object of strings");
            RepositoryError::ReadFailed
        })
    }

    /// Replaces the file atomically through a sibling temp file.
    async fn write_entries(&self, entries: &Entries) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                error!(path = %parent.display(), error = %e, "Cannot create storage directory");
                RepositoryError::WriteFailed
            })?;
        }

        let content = serde_json::to_string_pretty(entries).map_err(|e| {
            error!(error = %e, "Cannot encode storage entries");
            RepositoryError::WriteFailed
        })?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, content).await.map_err(|e| {
            error!(path = %tmp.display(), error = %e, "Cannot write storage file");
            RepositoryError::WriteFailed
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Cannot replace storage file");
            RepositoryError::WriteFailed
        })?;

        debug!(path = %self.path.display(), keys = entries.len(), "Storage file written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for KeyValueStoreFile {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries).await
    }
}
