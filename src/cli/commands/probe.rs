//! Probe command implementation
//!
//! Checks every configured origin, then reports which one the client would
//! use right now.

use super::context::{load_for_cli, EXIT_CONFIG, EXIT_CONNECTION};
use crate::adapters::backend::ServerLocator;
use clap::Args;

/// Arguments for the probe command
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Also POST to the connection-check endpoint on the selected origin
    #[arg(long)]
    pub diagnose: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl ProbeArgs {
    /// Execute the probe command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_for_cli(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let locator = match ServerLocator::from_config(&config.server) {
            Ok(l) => l,
            Err(e) => {
                println!("❌ Failed to build HTTP client: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        if self.format == "json" {
            return self.print_json(&locator).await;
        }

        println!("🔍 Probing server origins");
        println!();

        let mut any_available = false;
        let origins = locator.strategy().origins();
        for origin in origins {
            if locator.check_availability(origin).await {
                any_available = true;
                println!("  ✅ {origin}");
            } else {
                println!("  ❌ {origin}");
            }
        }

        let selected = locator.resolve().await;
        println!();
        println!("Selected origin: {selected}");
        if !selected.is_secure() {
            println!("⚠️  Using plaintext HTTP");
        }

        if self.diagnose {
            let report = locator.test_connection().await;
            println!();
            if report.reachable {
                println!("✅ Connection check succeeded on {}", report.origin);
            } else {
                println!("❌ Connection check failed on {}", report.origin);
                if let Some(error) = &report.error {
                    println!("   Error: {error}");
                }
                return Ok(EXIT_CONNECTION);
            }
        }

        if any_available {
            Ok(0)
        } else {
            println!();
            println!("❌ No origin answered the availability probe");
            Ok(EXIT_CONNECTION)
        }
    }

    async fn print_json(&self, locator: &ServerLocator) -> anyhow::Result<i32> {
        let mut probes = Vec::new();
        let mut any_available = false;
        for origin in locator.strategy().origins() {
            let available = locator.check_availability(origin).await;
            any_available |= available;
            probes.push(serde_json::json!({
                "origin": origin.as_str(),
                "available": available,
            }));
        }

        let selected = locator.resolve().await;
        let diagnostic = if self.diagnose {
            Some(locator.test_connection().await)
        } else {
            None
        };
        let reachable = diagnostic.as_ref().map_or(any_available, |r| r.reachable);

        let output = serde_json::json!({
            "origins": probes,
            "selected": selected.as_str(),
            "connection_check": diagnostic,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);

        Ok(if reachable { 0 } else { EXIT_CONNECTION })
    }
}
