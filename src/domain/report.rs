//! Health report model
//!
//! A health report is the structured record of one clinical visit for one
//! patient (the employee or one of their relatives). Reports arrive already
//! partitioned into employee and family subsets by the backend.

use super::lenient;
use serde::{Deserialize, Serialize};

/// Status literal the backend uses for a normal result ("normal")
pub const STATUS_NORMAL: &str = "सामान्य";

/// Status literal the backend uses for a borderline result ("pay attention")
pub const STATUS_ATTENTION: &str = "ध्यान दें";

/// Severity badge derived from a free-text test status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestSeverity {
    Normal,
    Attention,
    Critical,
}

impl TestSeverity {
    /// Classify a status label; anything unrecognised is `Critical`
    pub fn classify(status: &str) -> Self {
        match status {
            STATUS_NORMAL => TestSeverity::Normal,
            STATUS_ATTENTION => TestSeverity::Attention,
            _ => TestSeverity::Critical,
        }
    }

    /// Short label for terminal rendering
    pub fn label(self) -> &'static str {
        match self {
            TestSeverity::Normal => "normal",
            TestSeverity::Attention => "attention",
            TestSeverity::Critical => "critical",
        }
    }
}

/// Report category used to pick the card icon and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    /// "व्यापक" (comprehensive) check-ups
    Comprehensive,
    /// "संपूर्ण" (complete) or "पारिवारिक" (family) check-ups
    Complete,
    /// "मल्टी" / "स्पेशलिटी" (multi-specialty) camps
    MultiSpecialty,
    General,
}

impl ReportCategory {
    /// Classify a report type by substring, first match wins
    pub fn classify(report_type: &str) -> Self {
        if report_type.contains("व्यापक") {
            ReportCategory::Comprehensive
        } else if report_type.contains("संपूर्ण") || report_type.contains("पारिवारिक") {
            ReportCategory::Complete
        } else if report_type.contains("मल्टी") || report_type.contains("स्पेशलिटी") {
            ReportCategory::MultiSpecialty
        } else {
            ReportCategory::General
        }
    }
}

/// A single lab/test result nested in a report
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub value: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub normal_range: String,

    /// Free-text status, compared against fixed literals only
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
}

impl Test {
    pub fn severity(&self) -> TestSeverity {
        TestSeverity::classify(&self.status)
    }
}

/// Camp information embedded in a detailed report
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampDetails {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub coordinator: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub services: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
}

/// Structured record of one clinical visit
///
/// The recent-reports endpoint returns a summary shape (`type`, `date`,
/// `doctor`, `location`, `status`); those spellings are accepted as aliases
/// so both endpoints decode into this one type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient::int")]
    pub patient_id: i64,

    /// Set when the report belongs to a relative rather than the employee
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub relative_id: Option<i64>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub campname: String,

    #[serde(default, alias = "date", deserialize_with = "lenient::string")]
    pub campdate: String,

    #[serde(default, alias = "type", deserialize_with = "lenient::string")]
    pub reporttype: String,

    #[serde(default, alias = "doctor", deserialize_with = "lenient::string")]
    pub doctor_name: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub reports: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub symptoms: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub diagnosis: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub medicines: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub condition: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub notes: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub patient_name: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub relation: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub gender: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub blood_group: String,

    #[serde(default, deserialize_with = "lenient::int")]
    pub age: i64,

    #[serde(default, deserialize_with = "lenient::vec")]
    pub tests: Vec<Test>,

    #[serde(default)]
    pub camp_details: Option<CampDetails>,

    /// Summary status shown on the recent-report card
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,

    /// Summary location shown on the recent-report card
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub updated_at: Option<String>,
}

impl HealthReport {
    /// Whether this report is for a relative of the logged-in user
    pub fn is_family(&self) -> bool {
        self.relative_id.is_some()
    }

    pub fn category(&self) -> ReportCategory {
        ReportCategory::classify(&self.reporttype)
    }

    /// True when the summary status is the "normal" literal
    pub fn is_normal(&self) -> bool {
        self.status.as_deref() == Some(STATUS_NORMAL)
    }
}
