//! Configuration management for Chhanv.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Chhanv uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CHHANV_*` environment overrides
//! - Default values for every setting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chhanv::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("chhanv.toml")?;
//! println!("Preferred origin: {}", config.server.origins[0]);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ServerConfig`] - Candidate origins, timeouts, TLS verification
//! - [`SessionConfig`] - Where the session identity is persisted
//! - [`ScreensConfig`] - Listing limits sent to the backend
//! - [`LoggingConfig`] - Optional JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "development"
//!
//! [application]
//! log_level = "info"
//!
//! [server]
//! origins = ["https://165.22.208.62:8443/", "http://165.22.208.62:8080/"]
//! probe_timeout_ms = 5000
//! request_timeout_ms = 15000
//! tls_verify = false
//!
//! [session]
//! path = "${HOME}/.chhanv/session.json"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, ChhanvConfig, Environment, LoggingConfig, ScreensConfig, ServerConfig,
    SessionBackend, SessionConfig,
};
