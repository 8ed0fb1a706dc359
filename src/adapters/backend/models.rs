//! Response envelopes returned by the backend endpoints
//!
//! Every listing endpoint wraps its payload in `{ success, ... }`. Missing
//! collections deserialize as empty.

use crate::domain::lenient;
use crate::domain::{
    Camp, FamilyMember, FamilyMemberRaw, HealthReport, UserData, UserDataRaw, UserId,
};
use serde::Deserialize;
use serde_json::Value;

/// Body returned by `chkusr.php` for a failed login
pub const LOGIN_REJECTED_SENTINEL: &str = "0";

/// Interpreted `chkusr.php` reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginReply {
    Rejected,
    Accepted { user_id: UserId, user_name: String },
}

impl LoginReply {
    /// Interpret the JSON value returned by the login endpoint
    ///
    /// `"0"` is a rejection. Any other string is `"<id>,<name>"`, split at
    /// the first comma so the name keeps any later commas. Non-string
    /// values and blank ids are treated as rejections.
    pub fn from_value(value: &Value) -> Self {
        let text = match value {
            Value::String(s) => s.trim(),
            _ => return LoginReply::Rejected,
        };

        if text == LOGIN_REJECTED_SENTINEL {
            return LoginReply::Rejected;
        }

        let (id, name) = text.split_once(',').unwrap_or((text, ""));
        match UserId::new(id.trim()) {
            Ok(user_id) => LoginReply::Accepted {
                user_id,
                user_name: name.trim().to_string(),
            },
            Err(_) => LoginReply::Rejected,
        }
    }
}

/// `get_camps1.php` and `get_camp_app.php`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub camps: Vec<Camp>,
}

/// `get_recent_reports.php`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentReportsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub reports: Vec<HealthReport>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub message: Option<String>,
}

/// `get_health_reports.php`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReportsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub reports: Vec<HealthReport>,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub employee_reports: Vec<HealthReport>,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub family_reports: Vec<HealthReport>,
}

/// `get_family_members.php`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMembersEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub family_members: Vec<FamilyMemberRaw>,
}

impl FamilyMembersEnvelope {
    /// Members in backend order
    pub fn members(&self) -> Vec<FamilyMember> {
        self.family_members
            .iter()
            .cloned()
            .map(FamilyMember::from)
            .collect()
    }
}

/// `add_family.php`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddFamilyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub message: Option<String>,
}

/// `show_profile.php`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub posts: Vec<UserDataRaw>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub message: Option<String>,
}

impl ProfileEnvelope {
    /// Profile built from the first record, if the call succeeded
    pub fn user_data(&self) -> Option<UserData> {
        if !self.success {
            return None;
        }
        self.posts.first().map(UserData::from_raw)
    }
}
