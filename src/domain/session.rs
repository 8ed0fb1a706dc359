//! Logged-in session identity

use super::ids::{PhoneNumber, UserId};
use serde::{Deserialize, Serialize};

/// Minimal identity persisted after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Backend user id (`cid`)
    pub user_id: UserId,

    /// Phone number used to log in (`mobile`)
    pub phone_number: PhoneNumber,
}

impl Session {
    /// Create a session from already-validated parts
    pub fn new(user_id: UserId, phone_number: PhoneNumber) -> Self {
        Self {
            user_id,
            phone_number,
        }
    }
}
