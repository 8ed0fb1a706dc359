//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{ChhanvConfig, Environment, SessionBackend};
use crate::domain::errors::ChhanvError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ChhanvConfig
/// 4. Applies environment variable overrides (CHHANV_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced variable is
/// unset, parsing fails or validation fails.
///
/// # Examples
///
/// ```no_run
/// use chhanv::config::loader::load_config;
///
/// let config = load_config("chhanv.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ChhanvConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ChhanvError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ChhanvError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ChhanvConfig = toml::from_str(&contents)
        .map_err(|e| ChhanvError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;
    finish(config)
}

/// Loads the file if it exists, otherwise starts from built-in defaults
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ChhanvConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "Configuration file absent, using defaults");
    let mut config = ChhanvConfig::default();
    apply_env_overrides(&mut config)?;
    finish(config)
}

fn finish(config: ChhanvConfig) -> Result<ChhanvConfig> {
    config.validate().map_err(|e| {
        ChhanvError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = placeholder_pattern();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ChhanvError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using CHHANV_* prefix
///
/// Environment variables follow the pattern: CHHANV_<SECTION>_<KEY>.
/// `CHHANV_SERVER_ORIGINS` takes a comma-separated list.
fn apply_env_overrides(config: &mut ChhanvConfig) -> Result<()> {
    if let Ok(val) = std::env::var("CHHANV_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("CHHANV_ENVIRONMENT") {
        config.environment = match val.to_lowercase().as_str() {
            "development" => Environment::Development,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                return Err(ChhanvError::Configuration(format!(
                    "Invalid CHHANV_ENVIRONMENT '{other}'"
                )))
            }
        };
    }

    // Server overrides
    if let Ok(val) = std::env::var("CHHANV_SERVER_ORIGINS") {
        config.server.origins = val
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Ok(val) = std::env::var("CHHANV_SERVER_PROBE_TIMEOUT_MS") {
        if let Ok(ms) = val.parse() {
            config.server.probe_timeout_ms = ms;
        }
    }
    if let Ok(val) = std::env::var("CHHANV_SERVER_REQUEST_TIMEOUT_MS") {
        if let Ok(ms) = val.parse() {
            config.server.request_timeout_ms = ms;
        }
    }
    if let Ok(val) = std::env::var("CHHANV_SERVER_TLS_VERIFY") {
        config.server.tls_verify = val.parse().unwrap_or(true);
    }

    // Session overrides
    if let Ok(val) = std::env::var("CHHANV_SESSION_PATH") {
        config.session.path = val;
    }
    if let Ok(val) = std::env::var("CHHANV_SESSION_BACKEND") {
        config.session.backend = match val.to_lowercase().as_str() {
            "memory" => SessionBackend::Memory,
            _ => SessionBackend::File,
        };
    }

    // Screen overrides
    if let Ok(val) = std::env::var("CHHANV_SCREENS_RECENT_REPORTS_LIMIT") {
        if let Ok(limit) = val.parse() {
            config.screens.recent_reports_limit = limit;
        }
    }
    if let Ok(val) = std::env::var("CHHANV_SCREENS_CAMP_LISTING_LIMIT") {
        if let Ok(limit) = val.parse() {
            config.screens.camp_listing_limit = limit;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CHHANV_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("CHHANV_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
