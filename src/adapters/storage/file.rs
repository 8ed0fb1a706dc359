//! JSON file key-value store
//!
//! All entries live in one JSON object. Every write rewrites the whole file
//! through a temporary sibling and a rename, so a crash never leaves a
//! half-written file behind.

use super::traits::KeyValueStore;
use crate::domain::{ChhanvError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

type Entries = BTreeMap<String, String>;

/// Durable storage backed by a single JSON file
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents; `None` when the file does not exist
    async fn read_contents(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ChhanvError::Storage(format!(
                "Failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn parse_entries(contents: &str) -> std::result::Result<Entries, serde_json::Error> {
        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(contents)
    }

    async fn read_entries(&self) -> Result<Entries> {
        let Some(contents) = self.read_contents().await? else {
            return Ok(Entries::new());
        };

        Self::parse_entries(&contents).map_err(|e| {
            ChhanvError::Storage(format!(
                "Session file {} is corrupted: {e}",
                self.path.display()
            ))
        })
    }

    /// Entries to start a write from, and whether the file must be rewritten
    ///
    /// A corrupted file is discarded so writes keep working.
    async fn entries_for_write(&self) -> Result<(Entries, bool)> {
        let Some(contents) = self.read_contents().await? else {
            return Ok((Entries::new(), false));
        };

        match Self::parse_entries(&contents) {
            Ok(entries) => Ok((entries, false)),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Session file is corrupted, rewriting it"
                );
                Ok((Entries::new(), true))
            }
        }
    }

    async fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    ChhanvError::Storage(format!(
                        "Failed to create directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        let temp_path = self.temp_path();

        tokio::fs::write(&temp_path, json).await.map_err(|e| {
            ChhanvError::Storage(format!("Failed to write {}: {e}", temp_path.display()))
        })?;
        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            ChhanvError::Storage(format!(
                "Failed to replace {}: {e}",
                self.path.display()
            ))
        })?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let (mut entries, _) = self.entries_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let (mut entries, corrupted) = self.entries_for_write().await?;
        if entries.remove(key).is_none() && !corrupted {
            return Ok(());
        }
        self.write_entries(&entries).await
    }
}
