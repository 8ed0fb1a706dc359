//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Chhanv configuration file.

use super::context::load_for_cli;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading already validates; a failure here covers both cases
        let config = match load_for_cli(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Environment: {:?}", config.environment);
                println!("  Log Level: {}", config.application.log_level);
                for (index, origin) in config.server.origins.iter().enumerate() {
                    let role = if index + 1 == config.server.origins.len() {
                        "fallback"
                    } else {
                        "probed"
                    };
                    println!("  Origin {}: {origin} ({role})", index + 1);
                }
                println!("  Probe Timeout: {} ms", config.server.probe_timeout_ms);
                println!("  Request Timeout: {} ms", config.server.request_timeout_ms);
                println!("  TLS Verify: {}", config.server.tls_verify);
                println!(
                    "  Session: {:?} ({})",
                    config.session.backend, config.session.path
                );
                println!(
                    "  Screens: {} recent reports, {} listed camps",
                    config.screens.recent_reports_limit, config.screens.camp_listing_limit
                );
                if config.logging.local_enabled {
                    println!(
                        "  File Logging: {} ({})",
                        config.logging.local_path, config.logging.local_rotation
                    );
                }
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }
}
