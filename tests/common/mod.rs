//! Shared helpers for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chhanv::adapters::backend::models::{
    AddFamilyResponse, CampsEnvelope, FamilyMembersEnvelope, HealthReportsEnvelope, LoginReply,
    ProfileEnvelope, RecentReportsEnvelope,
};
use chhanv::adapters::backend::HealthRecordsApi;
use chhanv::adapters::storage::SessionStore;
use chhanv::domain::{
    AddFamilyRequest, ChhanvError, PhoneNumber, Result, SecretString, Session, TransportError,
    UserId,
};
use serde_json::{json, Value};
use std::sync::Mutex;

/// Canned answer for one stubbed endpoint
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    /// Every origin refused the connection
    Down,
    /// Body was not the expected JSON
    Malformed,
}

impl<T: Clone> Reply<T> {
    fn produce(&self) -> Result<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Down => Err(ChhanvError::Transport(TransportError::ConnectionFailed {
                origin: "http://stub.invalid/".to_string(),
                message: "connection refused".to_string(),
            })),
            Reply::Malformed => Err(ChhanvError::Parse("expected value at line 1".to_string())),
        }
    }
}

pub fn envelope<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("stub envelope must deserialize")
}

/// In-process backend whose answers are set per test
pub struct StubApi {
    pub login: Mutex<Reply<LoginReply>>,
    pub camps: Mutex<Reply<CampsEnvelope>>,
    pub recent_reports: Mutex<Reply<RecentReportsEnvelope>>,
    pub health_reports: Mutex<Reply<HealthReportsEnvelope>>,
    pub camp_listing: Mutex<Reply<CampsEnvelope>>,
    pub family_members: Mutex<Reply<FamilyMembersEnvelope>>,
    pub add_family: Mutex<Reply<AddFamilyResponse>>,
    pub profile: Mutex<Reply<ProfileEnvelope>>,
    pub calls: Mutex<Vec<String>>,
    pub added: Mutex<Vec<AddFamilyRequest>>,
}

impl StubApi {
    /// Every endpoint answers `success: true` with realistic data
    pub fn healthy() -> Self {
        Self {
            login: Mutex::new(Reply::Ok(LoginReply::from_value(&json!("42,Ravi Kumar")))),
            camps: Mutex::new(Reply::Ok(envelope(json!({
                "success": true,
                "camps": [sample_camp(1, "2025-11-03"), sample_camp(2, "2025-11-10")]
            })))),
            recent_reports: Mutex::new(Reply::Ok(envelope(json!({
                "success": true,
                "reports": [
                    {"id": 11, "type": "व्यापक जांच", "date": "2025-09-01", "doctor": "Dr. Sharma", "status": "सामान्य"}
                ]
            })))),
            health_reports: Mutex::new(Reply::Ok(envelope(json!({
                "success": true,
                "reports": [sample_report(11, None), sample_report(12, None), sample_report(21, Some(7))],
                "employeeReports": [sample_report(11, None), sample_report(12, None)],
                "familyReports": [sample_report(21, Some(7))]
            })))),
            camp_listing: Mutex::new(Reply::Ok(envelope(json!({
                "success": true,
                "camps": [sample_camp(5, "2025-12-01")]
            })))),
            family_members: Mutex::new(Reply::Ok(envelope(json!({
                "success": true,
                "familyMembers": [sample_member(7, "Meena Kumar")]
            })))),
            add_family: Mutex::new(Reply::Ok(envelope(json!({"success": true})))),
            profile: Mutex::new(Reply::Ok(envelope(json!({
                "success": true,
                "posts": [{
                    "id": "42",
                    "fullname": "Ravi Kumar",
                    "department": "Rajasva",
                    "phoneNumber": "9876543210",
                    "familymember": "3",
                    "hasAbhaId": "yes"
                }]
            })))),
            calls: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
        }
    }

    pub fn set<T>(slot: &Mutex<Reply<T>>, reply: Reply<T>) {
        *slot.lock().unwrap() = reply;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl HealthRecordsApi for StubApi {
    async fn check_user(&self, phone: &str, _password: &SecretString) -> Result<LoginReply> {
        self.record(format!("check_user:{phone}"));
        self.login.lock().unwrap().produce()
    }

    async fn camps(&self) -> Result<CampsEnvelope> {
        self.record("camps");
        self.camps.lock().unwrap().produce()
    }

    async fn recent_reports(&self, patient_id: &UserId, limit: u32) -> Result<RecentReportsEnvelope> {
        self.record(format!("recent_reports:{patient_id}:{limit}"));
        self.recent_reports.lock().unwrap().produce()
    }

    async fn health_reports(&self, patient_id: &UserId) -> Result<HealthReportsEnvelope> {
        self.record(format!("health_reports:{patient_id}"));
        self.health_reports.lock().unwrap().produce()
    }

    async fn camp_listing(&self, limit: u32) -> Result<CampsEnvelope> {
        self.record(format!("camp_listing:{limit}"));
        self.camp_listing.lock().unwrap().produce()
    }

    async fn family_members(&self, user_id: &UserId) -> Result<FamilyMembersEnvelope> {
        self.record(format!("family_members:{user_id}"));
        self.family_members.lock().unwrap().produce()
    }

    async fn add_family_member(&self, request: &AddFamilyRequest) -> Result<AddFamilyResponse> {
        self.record("add_family_member");
        self.added.lock().unwrap().push(request.clone());
        self.add_family.lock().unwrap().produce()
    }

    async fn profile(&self, phone: &PhoneNumber) -> Result<ProfileEnvelope> {
        self.record(format!("profile:{phone}"));
        self.profile.lock().unwrap().produce()
    }
}

pub fn sample_camp(id: i64, date: &str) -> Value {
    json!({
        "id": id,
        "date": date,
        "services": "नेत्र जांच, रक्त जांच",
        "location": "Collectorate, Raipur",
        "doctors": "Dr. Sharma",
        "startTime": "10:00",
        "endTime": "16:00"
    })
}

pub fn sample_report(id: i64, relative_id: Option<i64>) -> Value {
    json!({
        "id": id,
        "patientId": 42,
        "relativeId": relative_id,
        "campname": "Raipur Camp",
        "campdate": "2025-09-01",
        "reporttype": "व्यापक जांच",
        "doctorName": "Dr. Sharma",
        "diagnosis": "Healthy",
        "patientName": if relative_id.is_some() { "Meena Kumar" } else { "Ravi Kumar" },
        "relation": if relative_id.is_some() { "Spouse" } else { "" },
        "tests": [{"name": "Hb", "value": "13.5", "normalRange": "12-16", "status": "सामान्य"}]
    })
}

pub fn sample_member(id: i64, name: &str) -> Value {
    json!({
        "r_id": id,
        "fullName": name,
        "relation": "Spouse",
        "dateOfBirth": "1991-01-01",
        "age": "34",
        "bloodGroup": "B+",
        "gender": "Female",
        "phoneNumber": "9876500000"
    })
}

/// Session store already holding a logged-in identity
pub async fn logged_in_session() -> SessionStore {
    let session = SessionStore::in_memory();
    session
        .save_session(&Session::new(
            UserId::new("42").unwrap(),
            PhoneNumber::new("9876543210").unwrap(),
        ))
        .await;
    session
}
