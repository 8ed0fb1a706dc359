//! External system integrations for Chhanv.
//!
//! - [`backend`] - the health-records backend (origins, transport, typed API)
//! - [`storage`] - durable key-value storage for the session identity
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits
//! ([`backend::HealthRecordsApi`], [`storage::KeyValueStore`]) so screen
//! controllers can be tested against in-memory implementations.
//!
//! ```rust,no_run
//! use chhanv::adapters::backend::{HttpHealthRecordsApi, ServerLocator, Transport};
//! use chhanv::config::ServerConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::default();
//! let origin = ServerLocator::from_config(&config)?.resolve().await;
//! println!("Using {origin}");
//!
//! let api = HttpHealthRecordsApi::new(Arc::new(Transport::from_config(&config)?));
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod storage;
