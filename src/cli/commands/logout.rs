//! Logout command implementation

use super::context::{load_for_cli, EXIT_CONFIG};
use crate::adapters::storage::SessionStore;
use crate::core::{AppShell, Screen};
use clap::Args;

/// Arguments for the logout command
#[derive(Args, Debug)]
pub struct LogoutArgs {}

impl LogoutArgs {
    /// Execute the logout command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_for_cli(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let session = SessionStore::from_config(&config.session);
        let was_logged_in = session.user_id().await.is_some();

        let mut shell = AppShell::new(session);
        shell.finish_splash();
        shell.logout().await;
        debug_assert_eq!(shell.current(), &Screen::Login);

        if was_logged_in {
            println!("👋 Logged out");
        } else {
            println!("ℹ️  No session was stored");
        }
        Ok(0)
    }
}
