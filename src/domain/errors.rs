//! Domain error types
//!
//! This module defines the error hierarchy for Chhanv.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Chhanv error type
///
/// This is the primary error type used throughout the library.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ChhanvError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Backend transport errors (network, timeout, non-2xx)
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Response body could not be parsed into the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Local key-value storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or unusable session identity
    #[error("Session error: {0}")]
    Session(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Transport-specific errors
///
/// Errors that occur while talking to a backend origin.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to connect to the origin
    #[error("Failed to connect to {origin}: {message}")]
    ConnectionFailed { origin: String, message: String },

    /// Attempt exceeded its timeout
    #[error("Request to {origin} timed out after {timeout_ms} ms")]
    Timeout { origin: String, timeout_ms: u64 },

    /// Origin answered with a non-success status
    #[error("{origin} responded with status {status}: {body}")]
    HttpStatus {
        origin: String,
        status: u16,
        body: String,
    },

    /// Origin or endpoint could not be turned into a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Response body could not be read
    #[error("Invalid response from {origin}: {message}")]
    InvalidResponse { origin: String, message: String },
}

impl TransportError {
    /// Whether the error came from the per-attempt timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout { .. })
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl ChhanvError {
    /// Borrow the transport error, if this is one
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            ChhanvError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ChhanvError {
    fn from(err: std::io::Error) -> Self {
        ChhanvError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ChhanvError {
    fn from(err: serde_json::Error) -> Self {
        ChhanvError::Parse(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ChhanvError {
    fn from(err: toml::de::Error) -> Self {
        ChhanvError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from reqwest errors raised outside a per-origin attempt
impl From<reqwest::Error> for ChhanvError {
    fn from(err: reqwest::Error) -> Self {
        let origin = err
            .url()
            .map(|u| u.origin().ascii_serialization())
            .unwrap_or_else(|| "unknown".to_string());
        if err.is_timeout() {
            ChhanvError::Transport(TransportError::Timeout {
                origin,
                timeout_ms: 0,
            })
        } else {
            ChhanvError::Transport(TransportError::ConnectionFailed {
                origin,
                message: err.to_string(),
            })
        }
    }
}

// Conversion from url parse errors
impl From<url::ParseError> for ChhanvError {
    fn from(err: url::ParseError) -> Self {
        ChhanvError::Transport(TransportError::InvalidUrl(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chhanv_error_display() {
        let err = ChhanvError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_transport_error_conversion() {
        let transport_err = TransportError::ConnectionFailed {
            origin: "http://localhost/".to_string(),
            message: "refused".to_string(),
        };
        let err: ChhanvError = transport_err.into();
        assert!(matches!(err, ChhanvError::Transport(_)));
        assert!(err.as_transport().is_some());
    }

    #[test]
    fn test_transport_error_helpers() {
        let timeout = TransportError::Timeout {
            origin: "https://example.org/".to_string(),
            timeout_ms: 15000,
        };
        assert!(timeout.is_timeout());
        assert_eq!(timeout.status(), None);

        let status = TransportError::HttpStatus {
            origin: "https://example.org/".to_string(),
            status: 503,
            body: String::new(),
        };
        assert!(!status.is_timeout());
        assert_eq!(status.status(), Some(503));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ChhanvError = io_err.into();
        assert!(matches!(err, ChhanvError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ChhanvError = json_err.into();
        assert!(matches!(err, ChhanvError::Parse(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ChhanvError = toml_err.into();
        assert!(matches!(err, ChhanvError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_url_error_conversion() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: ChhanvError = url_err.into();
        assert!(matches!(
            err,
            ChhanvError::Transport(TransportError::InvalidUrl(_))
        ));
    }
}
