//! Session store
//!
//! Persists the logged-in identity across restarts. Storage failures are
//! logged and swallowed: a failed read looks like "not logged in" and a
//! failed write is retried on the next login.

use super::file::FileKeyValueStore;
use super::memory::MemoryKeyValueStore;
use super::traits::KeyValueStore;
use crate::config::{SessionBackend, SessionConfig};
use crate::domain::{PhoneNumber, Session, UserId};
use crate::log_error_with_context;
use std::sync::Arc;

/// Key holding the backend user id
pub const USER_ID_KEY: &str = "cid";

/// Key holding the phone number used to log in
pub const PHONE_NUMBER_KEY: &str = "mobile";

/// Durable session identity over a [`KeyValueStore`]
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKeyValueStore::new()))
    }

    /// Build the store selected by configuration
    pub fn from_config(config: &SessionConfig) -> Self {
        match config.backend {
            SessionBackend::File => {
                tracing::debug!(path = %config.path, "Using file session store");
                Self::new(Arc::new(FileKeyValueStore::new(&config.path)))
            }
            SessionBackend::Memory => {
                tracing::debug!("Using in-memory session store");
                Self::in_memory()
            }
        }
    }

    /// Overwrite `key`
    pub async fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value).await {
            log_error_with_context!(e, format!("Failed to store session key '{key}'"));
        }
    }

    /// Read `key`; unset, empty and unreadable all read as `None`
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(Some(value)) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(e) => {
                log_error_with_context!(e, format!("Failed to read session key '{key}'"));
                None
            }
        }
    }

    /// Remove `key`
    pub async fn clear(&self, key: &str) {
        if let Err(e) = self.store.remove(key).await {
            log_error_with_context!(e, format!("Failed to clear session key '{key}'"));
        }
    }

    pub async fn save_session(&self, session: &Session) {
        self.set(USER_ID_KEY, session.user_id.as_str()).await;
        self.set(PHONE_NUMBER_KEY, session.phone_number.as_str())
            .await;
        tracing::info!(user_id = %session.user_id, "Session saved");
    }

    pub async fn user_id(&self) -> Option<UserId> {
        let raw = self.get(USER_ID_KEY).await?;
        UserId::new(raw).ok()
    }

    pub async fn phone_number(&self) -> Option<PhoneNumber> {
        let raw = self.get(PHONE_NUMBER_KEY).await?;
        match PhoneNumber::new(raw) {
            Ok(phone) => Some(phone),
            Err(e) => {
                tracing::warn!(error = %e, "Stored phone number is not valid");
                None
            }
        }
    }

    /// Both identity entries, if both are present
    pub async fn session(&self) -> Option<Session> {
        let user_id = self.user_id().await?;
        let phone_number = self.phone_number().await?;
        Some(Session::new(user_id, phone_number))
    }

    pub async fn clear_session(&self) {
        self.clear(USER_ID_KEY).await;
        self.clear(PHONE_NUMBER_KEY).await;
        tracing::info!("Session cleared");
    }
}
