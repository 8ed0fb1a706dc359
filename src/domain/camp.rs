//! Health camp model
//!
//! A camp is a scheduled health event with a location, a time window and
//! the doctors attending. Camps are read-only snapshots fetched on every
//! screen mount.

use super::lenient;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Scheduled health camp
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camp {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: i64,

    /// Camp date as sent by the backend (ISO 8601)
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub services: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub doctors: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub start_time: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub end_time: String,

    /// Only present in the `get_camp_app` listing
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub camp_name: Option<String>,

    /// Only present in the `get_camp_app` listing
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
}

impl Camp {
    /// Camp date rendered as `dd/mm/yyyy`
    pub fn display_date(&self) -> String {
        format_display_date(&self.date)
    }

    /// Time window rendered as `start To end`
    pub fn time_window(&self) -> String {
        format!("{} To {}", self.start_time, self.end_time)
    }
}

/// Format an ISO date (`YYYY-MM-DD`, optionally with a time part) as `dd/mm/yyyy`
///
/// Input that cannot be parsed is returned unchanged.
///
/// # Examples
///
/// ```
/// use chhanv::domain::camp::format_display_date;
///
/// assert_eq!(format_display_date("2025-03-07"), "07/03/2025");
/// assert_eq!(format_display_date("2025-03-07T10:00:00+05:30"), "07/03/2025");
/// assert_eq!(format_display_date("soon"), "soon");
/// ```
pub fn format_display_date(iso_date: &str) -> String {
    let trimmed = iso_date.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.date_naive().format("%d/%m/%Y").to_string();
    }

    // Date prefix of "YYYY-MM-DD HH:MM:SS" (MySQL DATETIME) or a bare date
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => iso_date.to_string(),
    }
}
