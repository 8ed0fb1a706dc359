//! Shared setup for commands that talk to the backend

use crate::adapters::backend::{HealthRecordsApi, HttpHealthRecordsApi, ServerLocator, Transport};
use crate::adapters::storage::SessionStore;
use crate::cli::DEFAULT_CONFIG_PATH;
use crate::config::{load_config, load_config_or_default, ChhanvConfig};
use crate::domain::{ChhanvError, Result};
use std::sync::Arc;

/// Exit code for configuration errors
pub const EXIT_CONFIG: i32 = 2;

/// Exit code for connection errors
pub const EXIT_CONNECTION: i32 = 4;

/// Exit code for validation and login failures
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for unexpected failures
pub const EXIT_FATAL: i32 = 5;

/// Load configuration for a command
///
/// A missing file is only tolerated at the default path, where built-in
/// defaults apply.
pub fn load_for_cli(config_path: &str) -> Result<ChhanvConfig> {
    if config_path == DEFAULT_CONFIG_PATH {
        load_config_or_default(config_path)
    } else {
        load_config(config_path)
    }
}

/// Everything a screen command needs
pub struct AppContext {
    pub config: ChhanvConfig,
    pub session: SessionStore,
    pub api: Arc<dyn HealthRecordsApi>,
}

impl AppContext {
    pub fn load(config_path: &str) -> Result<Self> {
        Self::from_config(load_for_cli(config_path)?)
    }

    pub fn from_config(config: ChhanvConfig) -> Result<Self> {
        let transport = Arc::new(Transport::from_config(&config.server)?);
        let api: Arc<dyn HealthRecordsApi> = Arc::new(HttpHealthRecordsApi::new(transport));
        let session = SessionStore::from_config(&config.session);

        Ok(Self {
            config,
            session,
            api,
        })
    }

    pub fn locator(&self) -> Result<ServerLocator> {
        ServerLocator::from_config(&self.config.server)
    }
}

/// Load the context or print why it failed
///
/// Returns the exit code to use on failure.
pub fn load_context(config_path: &str) -> std::result::Result<AppContext, i32> {
    AppContext::load(config_path).map_err(|e| {
        println!("❌ Failed to load configuration");
        println!("   Error: {e}");
        match e {
            ChhanvError::Configuration(_) | ChhanvError::Transport(_) => EXIT_CONFIG,
            _ => EXIT_FATAL,
        }
    })
}

/// Print the hint shown when no session is stored
pub fn print_not_logged_in() {
    println!("⚠️  Not logged in");
    println!("   Run 'chhanv login --phone <number>' first");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_explicit_path_is_error() {
        assert!(load_for_cli("does-not-exist/custom.toml").is_err());
    }

    #[test]
    fn test_context_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[session]\nbackend = \"memory\"\n").unwrap();
        file.flush().unwrap();

        let context = AppContext::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(context.config.server.origins.len(), 2);
        assert!(context.locator().is_ok());
    }
}
