//! Logging and observability
//!
//! Structured logging with:
//! - Console output with configurable log levels
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use chhanv::logging::init_logging;
//! use chhanv::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log one attempt of a backend request against one origin
///
/// # Example
///
/// ```no_run
/// use chhanv::log_request_attempt;
///
/// let request_id = "5c1d2f0a";
/// log_request_attempt!(request_id, "POST", "chkusr.php", "https://165.22.208.62:8443/");
/// ```
#[macro_export]
macro_rules! log_request_attempt {
    ($request_id:expr, $method:expr, $path:expr, $origin:expr) => {
        tracing::info!(
            request_id = %$request_id,
            method = %$method,
            path = $path,
            origin = %$origin,
            "Sending request"
        );
    };
}

/// Log the origin chosen by the locator
///
/// # Example
///
/// ```no_run
/// use chhanv::log_origin_selected;
///
/// log_origin_selected!("http://165.22.208.62:8080/", false);
/// ```
#[macro_export]
macro_rules! log_origin_selected {
    ($origin:expr, $secure:expr) => {
        tracing::info!(
            origin = %$origin,
            secure = $secure,
            "Using server origin"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use chhanv::log_error_with_context;
/// use chhanv::domain::ChhanvError;
///
/// let error = ChhanvError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}
