//! Employee profile
//!
//! `show_profile.php` returns a denormalized user row whose column names
//! drifted over time (`fullname` vs `name`, `familyMembers` vs
//! `familymember`, ...). [`UserData::from_raw`] reconciles them by taking
//! the first non-empty source.

use super::lenient::{value_to_i64, value_to_string};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Designation shown for every profile; the backend does not store one
pub const DEFAULT_DESIGNATION: &str = "Employee";

/// Raw `posts[]` row, kept as loose JSON because field names vary
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct UserDataRaw(pub serde_json::Map<String, Value>);

impl UserDataRaw {
    /// First candidate field holding a non-empty value, as a string
    fn first_string(&self, keys: &[&str]) -> String {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .map(value_to_string)
            .find(|s| !s.trim().is_empty())
            .unwrap_or_default()
    }

    /// First candidate field holding a non-zero integer
    fn first_int(&self, keys: &[&str]) -> i64 {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .filter_map(value_to_i64)
            .find(|n| *n != 0)
            .unwrap_or_default()
    }

    /// `"yes"` or boolean `true`
    fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "yes",
            _ => false,
        }
    }
}

/// Profile of the logged-in employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub department: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub blood_group: String,
    pub date_of_birth: String,
    pub age: i64,
    pub gender: String,
    /// Count of family members as recorded on the user row
    pub family_members: i64,
    pub has_abha_id: bool,
    pub has_ayushman_card: bool,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            designation: DEFAULT_DESIGNATION.to_string(),
            department: String::new(),
            phone_number: String::new(),
            email: String::new(),
            address: String::new(),
            blood_group: String::new(),
            date_of_birth: String::new(),
            age: 0,
            gender: String::new(),
            family_members: 0,
            has_abha_id: false,
            has_ayushman_card: false,
        }
    }
}

impl UserData {
    /// Merge a raw backend row into a profile
    pub fn from_raw(raw: &UserDataRaw) -> Self {
        Self {
            id: raw.first_string(&["id"]),
            name: raw.first_string(&["fullname", "name"]),
            designation: DEFAULT_DESIGNATION.to_string(),
            department: raw.first_string(&["department"]),
            phone_number: raw.first_string(&["phoneNumber", "phone"]),
            email: raw.first_string(&["email"]),
            address: raw.first_string(&["address"]),
            blood_group: raw.first_string(&["bloodGroup"]),
            date_of_birth: raw.first_string(&["dateOfBirth"]),
            age: raw.first_int(&["age"]),
            gender: raw.first_string(&["gender"]),
            family_members: raw.first_int(&["familyMembers", "familymember"]),
            has_abha_id: raw.flag("hasAbhaId"),
            has_ayushman_card: raw.flag("hasAyushmanCard"),
        }
    }
}
