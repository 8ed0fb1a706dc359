//! Core client logic for Chhanv.
//!
//! # Modules
//!
//! - [`screens`] - per-screen controllers holding load state
//! - [`navigation`] - the screen stack
//! - [`shell`] - login/logout glue between the session and navigation
//!
//! # Example
//!
//! ```rust,no_run
//! use chhanv::adapters::backend::{HttpHealthRecordsApi, Transport};
//! use chhanv::adapters::storage::SessionStore;
//! use chhanv::config::ChhanvConfig;
//! use chhanv::core::screens::HomeController;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ChhanvConfig::default();
//! let transport = Arc::new(Transport::from_config(&config.server)?);
//! let api = Arc::new(HttpHealthRecordsApi::new(transport));
//! let session = SessionStore::from_config(&config.session);
//!
//! let home = HomeController::new(api, session, config.screens.recent_reports_limit);
//! home.load().await;
//! let snapshot = home.snapshot().await;
//! println!("{:?}", snapshot.current_camp());
//! # Ok(())
//! # }
//! ```

pub mod navigation;
pub mod screens;
pub mod shell;

pub use navigation::{Navigator, Screen};
pub use shell::AppShell;
