//! Ordered origin fallback
//!
//! Both the locator and the transport walk the same ordered list of origins,
//! trying each one at most once.

use super::origin::Origin;
use crate::config::ServerConfig;
use crate::domain::{ChhanvError, Result};
use std::future::Future;

/// Ordered candidate origins plus the try-each-once policy
#[derive(Debug, Clone)]
pub struct FallbackStrategy {
    origins: Vec<Origin>,
}

impl FallbackStrategy {
    /// # Errors
    ///
    /// Returns a configuration error if `origins` is empty.
    pub fn new(origins: Vec<Origin>) -> Result<Self> {
        if origins.is_empty() {
            return Err(ChhanvError::Configuration(
                "at least one server origin is required".to_string(),
            ));
        }
        Ok(Self { origins })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Self::new(Origin::parse_all(&config.origins)?)
    }

    pub fn origins(&self) -> &[Origin] {
        &self.origins
    }

    /// The last origin, used when nothing else answers
    pub fn fallback(&self) -> &Origin {
        // non-empty by construction
        &self.origins[self.origins.len() - 1]
    }

    /// Pick the first available origin
    ///
    /// Every origin except the last is probed in order. The last one is
    /// returned unprobed when none of the others is available.
    pub async fn select<F, Fut>(&self, probe: F) -> Origin
    where
        F: Fn(Origin) -> Fut,
        Fut: Future<Output = bool>,
    {
        let preferred = &self.origins[..self.origins.len() - 1];

        for origin in preferred {
            if probe(origin.clone()).await {
                return origin.clone();
            }
            tracing::debug!(origin = %origin, "Origin unavailable, trying next");
        }

        self.fallback().clone()
    }

    /// Run `operation` against each origin in order until one succeeds
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt when every origin fails.
    pub async fn execute<F, Fut, T>(&self, operation: F) -> Result<T>
    where
        F: Fn(Origin) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let total = self.origins.len();
        let mut last_error = None;

        for (index, origin) in self.origins.iter().enumerate() {
            match operation(origin.clone()).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if index + 1 < total {
                        tracing::warn!(
                            origin = %origin,
                            attempt = index + 1,
                            remaining = total - index - 1,
                            error = %e,
                            "Attempt failed, falling back to next origin"
                        );
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ChhanvError::Configuration("no server origins configured".to_string())
        }))
    }
}
