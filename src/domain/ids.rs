//! Domain identifier types with validation
//!
//! Newtype wrappers for the identities the client persists between runs.
//! Backend-assigned ids are trusted verbatim; only emptiness is rejected.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Pattern for Indian mobile numbers accepted at login
/// (ASCII digits only; `\d` would also admit other Unicode digit scripts)
pub const PHONE_NUMBER_PATTERN: &str = r"^[6-9][0-9]{9}$";

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_NUMBER_PATTERN).expect("phone pattern is a valid regex"))
}

/// Returns true if `candidate` is a 10-digit number starting with 6-9
pub fn is_valid_phone_number(candidate: &str) -> bool {
    phone_regex().is_match(candidate)
}

/// Logged-in user identifier (the backend's `cid`)
///
/// # Examples
///
/// ```
/// use chhanv::domain::ids::UserId;
/// use std::str::FromStr;
///
/// let id = UserId::from_str("42").unwrap();
/// assert_eq!(id.as_str(), "42");
/// assert_eq!(id.as_numeric(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, rejecting blank input
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("User ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the user ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric form of the id, as sent in `add_family.php` bodies
    pub fn as_numeric(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Registered mobile number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a PhoneNumber, enforcing [`PHONE_NUMBER_PATTERN`]
    pub fn new(number: impl Into<String>) -> Result<Self, String> {
        let number = number.into();
        if !is_valid_phone_number(&number) {
            return Err(format!(
                "Invalid phone number '{number}'. Expected 10 digits starting with 6-9"
            ));
        }
        Ok(Self(number))
    }

    /// Returns the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
