//! User-facing alerts raised by interactive flows (login, add family member)

use serde::Serialize;
use std::fmt;

/// A title/message pair shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Generic error alert
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
