//! CLI interface and argument parsing
//!
//! Each subcommand drives one screen controller and prints what the screen
//! would show.

pub mod commands;

use clap::{Parser, Subcommand};

/// Config file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "chhanv.toml";

/// Chhanv - health camp and report client
#[derive(Parser, Debug)]
#[command(name = "chhanv")]
#[command(version, about, long_about = None)]
#[command(author = "Project Chhanv Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "CHHANV_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CHHANV_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Check which server origin is reachable
    Probe(commands::probe::ProbeArgs),

    /// Log in with phone number and password
    Login(commands::login::LoginArgs),

    /// Forget the stored session
    Logout(commands::logout::LogoutArgs),

    /// Show upcoming camps and recent reports
    Home(commands::home::HomeArgs),

    /// Show health reports
    Reports(commands::reports::ReportsArgs),

    /// Show profile and family members
    Profile(commands::profile::ProfileArgs),

    /// Manage family members
    #[command(subcommand)]
    Family(commands::family::FamilyCommand),

    /// Show notifications
    Notifications(commands::notifications::NotificationsArgs),
}
