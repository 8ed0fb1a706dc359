// Chhanv - Health camp and report client
// Copyright (c) 2025 Chhanv Contributors
// Licensed under the MIT License

//! # Chhanv - Health camp and report client
//!
//! Chhanv is the connectivity and data-loading layer of the Project Chhanv
//! health-records client. Employees log in with their mobile number, see
//! upcoming health camps, browse their own and their family's health
//! reports, and manage family members.
//!
//! ## Overview
//!
//! This library provides:
//! - **Locating** a reachable backend origin with HTTPS preferred and HTTP as fallback
//! - **Transporting** JSON requests with per-request origin fallback
//! - **Persisting** the logged-in identity in a local key-value session store
//! - **Loading** screen data into settled, never-failing view state
//! - **Navigating** between screens in a stack
//!
//! ## Architecture
//!
//! Chhanv follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Screen controllers, navigation and the app shell
//! - [`adapters`] - Backend transport and local session storage
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chhanv::adapters::backend::{HttpHealthRecordsApi, Transport};
//! use chhanv::adapters::storage::SessionStore;
//! use chhanv::config::ChhanvConfig;
//! use chhanv::core::screens::{LoginController, LoginForm};
//! use chhanv::domain::secret_string;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ChhanvConfig::from_file("chhanv.toml")?;
//!
//!     let transport = Arc::new(Transport::from_config(&config.server)?);
//!     let api = Arc::new(HttpHealthRecordsApi::new(transport));
//!     let session = SessionStore::from_config(&config.session);
//!
//!     let login = LoginController::new(api, session);
//!     let form = LoginForm::new("9876543210", secret_string("password".to_string()));
//!     let outcome = login.submit(&form).await;
//!
//!     println!("Logged in: {}", outcome.is_success());
//!     Ok(())
//! }
//! ```
//!
//! ## Origin Fallback
//!
//! The locator probes each preferred origin with `HEAD` and settles on the
//! last configured origin when none answers:
//!
//! ```rust,no_run
//! use chhanv::adapters::backend::ServerLocator;
//! use chhanv::config::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let locator = ServerLocator::from_config(&ServerConfig::default())?;
//! let origin = locator.resolve().await;
//! println!("Using {origin} (secure: {})", origin.is_secure());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Chhanv uses the [`domain::ChhanvError`] type for all errors:
//!
//! ```rust,no_run
//! use chhanv::domain::ChhanvError;
//!
//! fn example() -> Result<(), ChhanvError> {
//!     let config = chhanv::config::ChhanvConfig::from_file("chhanv.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Chhanv uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Loading home screen");
//! warn!(origin = "https://165.22.208.62:8443/", "Origin unavailable");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
