//! Backend origins
//!
//! An [`Origin`] is a validated `http`/`https` base URL that always ends in
//! `/`, so endpoint paths can be joined onto it directly.

use crate::domain::{ChhanvError, Result, TransportError};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// A candidate backend base URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin(Url);

impl Origin {
    /// Parse and normalise a base URL
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidUrl` for unparsable input or a scheme
    /// other than `http`/`https`.
    pub fn parse(input: &str) -> Result<Self> {
        let mut url = Url::parse(input.trim())?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ChhanvError::Transport(TransportError::InvalidUrl(format!(
                    "unsupported scheme '{other}' in {input}"
                ))))
            }
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self(url))
    }

    /// Parse a list of base URLs, keeping their order
    pub fn parse_all<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Self>> {
        inputs.iter().map(|s| Self::parse(s.as_ref())).collect()
    }

    pub fn is_secure(&self) -> bool {
        self.0.scheme() == "https"
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    /// Join an endpoint path onto this origin
    ///
    /// A leading `/` on `path` is ignored so the origin's own path prefix is
    /// kept.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.0.join(path.trim_start_matches('/'))?)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl FromStr for Origin {
    type Err = ChhanvError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
