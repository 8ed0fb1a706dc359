//! Health records API trait
//!
//! Screen controllers depend on this trait rather than on HTTP directly, so
//! they can be driven by a stub in tests.

use super::models::{
    AddFamilyResponse, CampsEnvelope, FamilyMembersEnvelope, HealthReportsEnvelope, LoginReply,
    ProfileEnvelope, RecentReportsEnvelope,
};
use crate::domain::{AddFamilyRequest, PhoneNumber, Result, SecretString, UserId};
use async_trait::async_trait;

/// Typed operations over the backend endpoints
///
/// Errors follow the taxonomy of [`crate::domain::ChhanvError`]: transport
/// failures surface as `Transport`, unparsable bodies as `Parse`. A
/// `success: false` envelope is returned as `Ok` for the caller to inspect.
#[async_trait]
pub trait HealthRecordsApi: Send + Sync {
    /// `POST chkusr.php` with `{t1: phone, t2: password}`
    async fn check_user(&self, phone: &str, password: &SecretString) -> Result<LoginReply>;

    /// `GET get_camps1.php`
    async fn camps(&self) -> Result<CampsEnvelope>;

    /// `GET get_recent_reports.php?patientId=&limit=`
    async fn recent_reports(&self, patient_id: &UserId, limit: u32)
        -> Result<RecentReportsEnvelope>;

    /// `GET get_health_reports.php?patientId=`
    async fn health_reports(&self, patient_id: &UserId) -> Result<HealthReportsEnvelope>;

    /// `GET get_camp_app.php?limit=`
    async fn camp_listing(&self, limit: u32) -> Result<CampsEnvelope>;

    /// `GET get_family_members.php?userId=`
    async fn family_members(&self, user_id: &UserId) -> Result<FamilyMembersEnvelope>;

    /// `POST add_family.php`
    async fn add_family_member(&self, request: &AddFamilyRequest) -> Result<AddFamilyResponse>;

    /// `GET show_profile.php?phoneNumber=`
    async fn profile(&self, phone: &PhoneNumber) -> Result<ProfileEnvelope>;
}
