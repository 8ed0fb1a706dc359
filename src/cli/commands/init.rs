//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Chhanv configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} if your backend is not the default one", self.output);
                println!("  2. Validate configuration: chhanv validate-config");
                println!("  3. Check connectivity: chhanv probe");
                println!("  4. Log in: chhanv login --phone <number>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Chhanv Configuration File

environment = "development"

[application]
log_level = "info"

[server]
origins = ["https://165.22.208.62:8443/", "http://165.22.208.62:8080/"]

[session]
backend = "file"
path = ".chhanv/session.json"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Chhanv Configuration File
# Health camp and report client
#
# Values can reference environment variables as ${VAR_NAME}.
# Any key can also be overridden with CHHANV_<SECTION>_<KEY>,
# e.g. CHHANV_SERVER_TLS_VERIFY=false

# development, staging or production
environment = "development"

[application]
# trace, debug, info, warn, error
log_level = "info"

[server]
# Tried in order; the last origin is used without probing
origins = ["https://165.22.208.62:8443/", "http://165.22.208.62:8080/"]

# Timeout of one availability probe
probe_timeout_ms = 5000

# Timeout of one request attempt against one origin
request_timeout_ms = 15000

# The default HTTPS origin is addressed by IP; disable verification only
# for development. Production requires verification.
tls_verify = true

# Endpoint used by `chhanv probe --diagnose`
connection_check_endpoint = "show_doctor.php"

[session]
# file or memory
backend = "file"
path = ".chhanv/session.json"

[screens]
# Number of reports shown on the home screen
recent_reports_limit = 3

# Number of camps shown on the reports screen
camp_listing_limit = 5

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"
# daily or hourly
local_rotation = "daily"
"#
        .to_string()
    }
}
