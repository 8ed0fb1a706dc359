//! Transport client
//!
//! One logical request is attempted against each configured origin in order
//! until one answers with a 2xx status. Every attempt is logged with a
//! request id shared by all attempts of the same call.

use super::fallback::FallbackStrategy;
use super::origin::Origin;
use crate::config::ServerConfig;
use crate::domain::{ChhanvError, Result, TransportError};
use crate::log_request_attempt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

/// Per-call request options
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// POST with a JSON body
    pub fn post_json(body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::get()
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A successful response with its full body text
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Origin that answered
    pub origin: Origin,
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// Parse the body as JSON
    ///
    /// # Errors
    ///
    /// Returns `ChhanvError::Parse` when the body is not valid JSON of the
    /// expected shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            ChhanvError::Parse(format!("response from {} is not valid JSON: {e}", self.origin))
        })
    }
}

/// HTTP transport with ordered origin fallback
///
/// `Transport` is `Send + Sync`; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    strategy: FallbackStrategy,
    timeout_ms: u64,
}

impl Transport {
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(strategy: FallbackStrategy, timeout_ms: u64, tls_verify: bool) -> Result<Self> {
        Ok(Self {
            client: build_client(tls_verify)?,
            strategy,
            timeout_ms,
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Self::new(
            FallbackStrategy::from_config(config)?,
            config.request_timeout_ms,
            config.tls_verify,
        )
    }

    pub fn strategy(&self) -> &FallbackStrategy {
        &self.strategy
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Perform one logical request, falling back across origins
    ///
    /// # Errors
    ///
    /// Returns the last attempt's error once every origin has failed.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<TransportResponse> {
        let request_id = Uuid::new_v4();
        let options = &options;

        let result = self
            .strategy
            .execute(|origin| self.attempt(origin, path, options, request_id))
            .await;

        if let Err(ref e) = result {
            tracing::error!(
                request_id = %request_id,
                path = path,
                error = %e,
                "Request failed on every origin"
            );
        }

        result
    }

    async fn attempt(
        &self,
        origin: Origin,
        path: &str,
        options: &RequestOptions,
        request_id: Uuid,
    ) -> Result<TransportResponse> {
        let url = origin.endpoint(path)?;
        log_request_attempt!(request_id, options.method, path, origin);

        let mut request = self
            .client
            .request(options.method.clone(), url)
            .timeout(Duration::from_millis(self.timeout_ms))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_error(&origin, &e, self.timeout_ms))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    origin: origin.to_string(),
                    timeout_ms: self.timeout_ms,
                }
            } else {
                TransportError::InvalidResponse {
                    origin: origin.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        tracing::debug!(
            request_id = %request_id,
            path = path,
            origin = %origin,
            status = status.as_u16(),
            bytes = body.len(),
            "Response received"
        );

        if !status.is_success() {
            return Err(TransportError::HttpStatus {
                origin: origin.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(TransportResponse {
            origin,
            status: status.as_u16(),
            body,
        })
    }
}

/// Build the shared HTTP client
///
/// Certificate checks are skipped when `tls_verify` is false; the backend is
/// addressed by IP and serves a self-signed certificate in development.
pub(crate) fn build_client(tls_verify: bool) -> Result<Client> {
    let mut builder = ClientBuilder::new().connect_timeout(Duration::from_secs(10));

    if !tls_verify {
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder
        .build()
        .map_err(|e| ChhanvError::Configuration(format!("Failed to build HTTP client: {e}")))
}

/// Map a reqwest error from one attempt into a `TransportError`
pub(crate) fn classify_error(
    origin: &Origin,
    err: &reqwest::Error,
    timeout_ms: u64,
) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            origin: origin.to_string(),
            timeout_ms,
        }
    } else {
        TransportError::ConnectionFailed {
            origin: origin.to_string(),
            message: err.to_string(),
        }
    }
}
