//! Configuration schema types
//!
//! This module defines the configuration structure for Chhanv. Every
//! section has defaults, so an empty file yields a working client pointed
//! at the production origins.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Preferred secure origin of the production backend
pub const DEFAULT_HTTPS_ORIGIN: &str = "https://165.22.208.62:8443/";

/// Plaintext fallback origin of the production backend
pub const DEFAULT_HTTP_ORIGIN: &str = "http://165.22.208.62:8080/";

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Where the session key-value entries are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// JSON file on disk
    #[default]
    File,
    /// Process memory only (nothing survives a restart)
    Memory,
}

/// Main Chhanv configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChhanvConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Backend origins and timeouts
    #[serde(default)]
    pub server: ServerConfig,

    /// Local session persistence
    #[serde(default)]
    pub session: SessionConfig,

    /// Screen data-loading parameters
    #[serde(default)]
    pub screens: ScreensConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ChhanvConfig {
    /// Load and validate a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unparsable or invalid.
    pub fn from_file(path: impl AsRef<Path>) -> crate::domain::Result<Self> {
        super::loader::load_config(path)
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.server.validate(&self.environment)?;
        self.session.validate()?;
        self.screens.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Backend server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Candidate origins in preference order; the last one is the fallback
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,

    /// Timeout of an availability probe in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// Timeout of one data-call attempt in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// TLS certificate verification enabled
    ///
    /// The production HTTPS origin is addressed by IP, so development setups
    /// commonly disable this. Production environments must keep it on.
    #[serde(default = "default_true")]
    pub tls_verify: bool,

    /// Endpoint used by the connection diagnostic
    #[serde(default = "default_connection_check_endpoint")]
    pub connection_check_endpoint: String,
}

impl ServerConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        if self.origins.is_empty() {
            return Err("server.origins cannot be empty".to_string());
        }

        for origin in &self.origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(format!(
                    "server.origins entry '{origin}' must start with http:// or https://"
                ));
            }
        }

        if self.probe_timeout_ms == 0 {
            return Err("server.probe_timeout_ms must be > 0".to_string());
        }

        if self.request_timeout_ms == 0 {
            return Err("server.request_timeout_ms must be > 0".to_string());
        }

        if *environment == Environment::Production && !self.tls_verify {
            return Err(
                "TLS certificate verification cannot be disabled in production environments. \
                Set 'tls_verify = true' or use environment = \"development\" for local testing."
                    .to_string(),
            );
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            origins: default_origins(),
            probe_timeout_ms: default_probe_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            tls_verify: true,
            connection_check_endpoint: default_connection_check_endpoint(),
        }
    }
}

/// Local session store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: SessionBackend,

    /// Path of the session file (file backend only)
    #[serde(default = "default_session_path")]
    pub path: String,
}

impl SessionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.backend == SessionBackend::File && self.path.trim().is_empty() {
            return Err("session.path cannot be empty when backend is 'file'".to_string());
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::File,
            path: default_session_path(),
        }
    }
}

/// Screen data-loading parameters (honoured server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreensConfig {
    /// `limit` sent to `get_recent_reports.php` by the home screen
    #[serde(default = "default_recent_reports_limit")]
    pub recent_reports_limit: u32,

    /// `limit` sent to `get_camp_app.php` by the reports screen
    #[serde(default = "default_camp_listing_limit")]
    pub camp_listing_limit: u32,
}

impl ScreensConfig {
    fn validate(&self) -> Result<(), String> {
        if self.recent_reports_limit == 0 {
            return Err("screens.recent_reports_limit must be > 0".to_string());
        }
        if self.camp_listing_limit == 0 {
            return Err("screens.camp_listing_limit must be > 0".to_string());
        }
        Ok(())
    }
}

impl Default for ScreensConfig {
    fn default() -> Self {
        Self {
            recent_reports_limit: default_recent_reports_limit(),
            camp_listing_limit: default_camp_listing_limit(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging next to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_origins() -> Vec<String> {
    vec![
        DEFAULT_HTTPS_ORIGIN.to_string(),
        DEFAULT_HTTP_ORIGIN.to_string(),
    ]
}

fn default_probe_timeout_ms() -> u64 {
    5000
}

fn default_request_timeout_ms() -> u64 {
    15000
}

fn default_true() -> bool {
    true
}

fn default_connection_check_endpoint() -> String {
    "show_doctor.php".to_string()
}

fn default_session_path() -> String {
    ".chhanv/session.json".to_string()
}

fn default_recent_reports_limit() -> u32 {
    3
}

fn default_camp_listing_limit() -> u32 {
    5
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
