//! Key-value storage trait
//!
//! Session identity is stored as plain string entries. Backends only need
//! to provide durable `get`/`set`/`remove`.

use crate::domain::Result;
use async_trait::async_trait;

/// String key-value storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key is not set
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a value
    ///
    /// # Errors
    ///
    /// Returns a storage error if the value cannot be persisted.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an unset key is not an error
    ///
    /// # Errors
    ///
    /// Returns a storage error if the change cannot be persisted.
    async fn remove(&self, key: &str) -> Result<()>;
}
