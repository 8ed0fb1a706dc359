//! Server locator
//!
//! Decides which origin to talk to by probing the preferred ones with a
//! `HEAD` request. Nothing is cached: every `resolve` probes again.

use super::fallback::FallbackStrategy;
use super::origin::Origin;
use super::transport::build_client;
use crate::config::ServerConfig;
use crate::domain::Result;
use crate::log_origin_selected;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Outcome of the connection diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionReport {
    pub origin: String,
    pub reachable: bool,
    pub status: Option<u16>,
    pub error: Option<String>,
}

/// Probes origins and reports which one is usable
#[derive(Debug, Clone)]
pub struct ServerLocator {
    client: Client,
    strategy: FallbackStrategy,
    probe_timeout: Duration,
    check_endpoint: String,
}

impl ServerLocator {
    pub fn new(
        strategy: FallbackStrategy,
        probe_timeout_ms: u64,
        tls_verify: bool,
        check_endpoint: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(tls_verify)?,
            strategy,
            probe_timeout: Duration::from_millis(probe_timeout_ms),
            check_endpoint: check_endpoint.into(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Self::new(
            FallbackStrategy::from_config(config)?,
            config.probe_timeout_ms,
            config.tls_verify,
            config.connection_check_endpoint.clone(),
        )
    }

    pub fn strategy(&self) -> &FallbackStrategy {
        &self.strategy
    }

    /// `HEAD` the origin; true only for a 2xx answer within the timeout
    pub async fn check_availability(&self, origin: &Origin) -> bool {
        let result = self
            .client
            .head(origin.url().clone())
            .timeout(self.probe_timeout)
            .send()
            .await;

        match result {
            Ok(response) => {
                let available = response.status().is_success();
                tracing::debug!(
                    origin = %origin,
                    status = response.status().as_u16(),
                    available = available,
                    "Probe answered"
                );
                available
            }
            Err(e) => {
                tracing::debug!(origin = %origin, error = %e, "Probe failed");
                false
            }
        }
    }

    /// Pick the origin to use right now
    ///
    /// Falls back to the last configured origin when none of the preferred
    /// ones is available.
    pub async fn resolve(&self) -> Origin {
        let origin = self
            .strategy
            .select(|candidate| async move { self.check_availability(&candidate).await })
            .await;

        log_origin_selected!(origin, origin.is_secure());
        origin
    }

    /// POST an empty object to the check endpoint on the resolved origin
    pub async fn test_connection(&self) -> ConnectionReport {
        let origin = self.resolve().await;

        let url = match origin.endpoint(&self.check_endpoint) {
            Ok(url) => url,
            Err(e) => {
                return ConnectionReport {
                    origin: origin.to_string(),
                    reachable: false,
                    status: None,
                    error: Some(e.to_string()),
                }
            }
        };

        let result = self
            .client
            .post(url)
            .timeout(self.probe_timeout)
            .json(&serde_json::json!({}))
            .send()
            .await;

        let report = match result {
            Ok(response) if response.status().is_success() => ConnectionReport {
                origin: origin.to_string(),
                reachable: true,
                status: Some(response.status().as_u16()),
                error: None,
            },
            Ok(response) => {
                let status = response.status().as_u16();
                ConnectionReport {
                    origin: origin.to_string(),
                    reachable: false,
                    status: Some(status),
                    error: Some(format!("Server responded with status {status}")),
                }
            }
            Err(e) => ConnectionReport {
                origin: origin.to_string(),
                reachable: false,
                status: None,
                error: Some(describe_failure(&e).to_string()),
            },
        };

        tracing::info!(
            origin = %report.origin,
            reachable = report.reachable,
            error = report.error.as_deref().unwrap_or(""),
            "Connection test finished"
        );
        report
    }
}

fn describe_failure(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "Request timeout - slow network connection"
    } else if err.is_connect() {
        "Connection refused - backend server might be down"
    } else {
        "Network error - check if backend server is running"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator_for(origins: Vec<String>) -> ServerLocator {
        let parsed = origins
            .iter()
            .map(|o| Origin::parse(o).unwrap())
            .collect();
        ServerLocator::new(
            FallbackStrategy::new(parsed).unwrap(),
            1000,
            true,
            "show_doctor.php",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_check_availability_success() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("HEAD", "/").with_status(200).create_async().await;

        let locator = locator_for(vec![server.url()]);
        let origin = Origin::parse(&server.url()).unwrap();
        assert!(locator.check_availability(&origin).await);
    }

    #[tokio::test]
    async fn test_check_availability_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("HEAD", "/").with_status(403).create_async().await;

        let locator = locator_for(vec![server.url()]);
        let origin = Origin::parse(&server.url()).unwrap();
        assert!(!locator.check_availability(&origin).await);
    }

    #[tokio::test]
    async fn test_check_availability_unreachable() {
        let locator = locator_for(vec!["http://127.0.0.1:1/".to_string()]);
        let origin = Origin::parse("http://127.0.0.1:1/").unwrap();
        assert!(!locator.check_availability(&origin).await);
    }

    #[tokio::test]
    async fn test_resolve_prefers_first_available() {
        let mut primary = mockito::Server::new_async().await;
        let _mock = primary.mock("HEAD", "/").with_status(200).create_async().await;

        let locator =
            locator_for(vec![primary.url(), "http://127.0.0.1:1/".to_string()]);
        let origin = locator.resolve().await;
        assert_eq!(origin.to_string(), format!("{}/", primary.url()));
    }

    #[tokio::test]
    async fn test_resolve_falls_back_when_all_down() {
        let locator = locator_for(vec![
            "http://127.0.0.1:1/".to_string(),
            "http://127.0.0.1:2/".to_string(),
        ]);
        let origin = locator.resolve().await;
        assert_eq!(origin.as_str(), "http://127.0.0.1:2/");
    }

    #[tokio::test]
    async fn test_connection_reports_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/show_doctor.php")
            .with_status(503)
            .create_async()
            .await;

        let locator = locator_for(vec![server.url()]);
        let report = locator.test_connection().await;
        assert!(!report.reachable);
        assert_eq!(report.status, Some(503));
        assert_eq!(
            report.error.as_deref(),
            Some("Server responded with status 503")
        );
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let locator = locator_for(vec!["http://127.0.0.1:1/".to_string()]);
        let report = locator.test_connection().await;
        assert!(!report.reachable);
        assert_eq!(
            report.error.as_deref(),
            Some("Connection refused - backend server might be down")
        );
    }

    #[tokio::test]
    async fn test_connection_ok() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/show_doctor.php")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let locator = locator_for(vec![server.url()]);
        let report = locator.test_connection().await;
        assert!(report.reachable);
        assert!(report.error.is_none());
    }
}
