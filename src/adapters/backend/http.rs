//! HTTP implementation of [`HealthRecordsApi`]

use super::api::HealthRecordsApi;
use super::models::{
    AddFamilyResponse, CampsEnvelope, FamilyMembersEnvelope, HealthReportsEnvelope, LoginReply,
    ProfileEnvelope, RecentReportsEnvelope,
};
use super::transport::{RequestOptions, Transport};
use crate::domain::{AddFamilyRequest, PhoneNumber, Result, SecretString, UserId};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub const LOGIN_ENDPOINT: &str = "chkusr.php";
pub const CAMPS_ENDPOINT: &str = "get_camps1.php";
pub const RECENT_REPORTS_ENDPOINT: &str = "get_recent_reports.php";
pub const HEALTH_REPORTS_ENDPOINT: &str = "get_health_reports.php";
pub const CAMP_LISTING_ENDPOINT: &str = "get_camp_app.php";
pub const FAMILY_MEMBERS_ENDPOINT: &str = "get_family_members.php";
pub const ADD_FAMILY_ENDPOINT: &str = "add_family.php";
pub const PROFILE_ENDPOINT: &str = "show_profile.php";

/// Backend API over the fallback transport
///
/// # Example
///
/// ```no_run
/// use chhanv::adapters::backend::{HealthRecordsApi, HttpHealthRecordsApi, Transport};
/// use chhanv::config::ServerConfig;
/// use std::sync::Arc;
///
/// # async fn example() -> chhanv::domain::Result<()> {
/// let transport = Arc::new(Transport::from_config(&ServerConfig::default())?);
/// let api = HttpHealthRecordsApi::new(transport);
/// let camps = api.camps().await?;
/// println!("{} camps", camps.camps.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpHealthRecordsApi {
    transport: Arc<Transport>,
}

impl HttpHealthRecordsApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        self.transport.request(path, options).await?.json()
    }
}

#[async_trait]
impl HealthRecordsApi for HttpHealthRecordsApi {
    async fn check_user(&self, phone: &str, password: &SecretString) -> Result<LoginReply> {
        let body = serde_json::json!({
            "t1": phone,
            "t2": password.expose_secret().as_str(),
        });
        let value: serde_json::Value = self
            .fetch(LOGIN_ENDPOINT, RequestOptions::post_json(body))
            .await?;
        Ok(LoginReply::from_value(&value))
    }

    async fn camps(&self) -> Result<CampsEnvelope> {
        self.fetch(CAMPS_ENDPOINT, RequestOptions::get()).await
    }

    async fn recent_reports(
        &self,
        patient_id: &UserId,
        limit: u32,
    ) -> Result<RecentReportsEnvelope> {
        let options = RequestOptions::get()
            .with_query("patientId", patient_id)
            .with_query("limit", limit);
        self.fetch(RECENT_REPORTS_ENDPOINT, options).await
    }

    async fn health_reports(&self, patient_id: &UserId) -> Result<HealthReportsEnvelope> {
        let options = RequestOptions::get().with_query("patientId", patient_id);
        self.fetch(HEALTH_REPORTS_ENDPOINT, options).await
    }

    async fn camp_listing(&self, limit: u32) -> Result<CampsEnvelope> {
        let options = RequestOptions::get().with_query("limit", limit);
        self.fetch(CAMP_LISTING_ENDPOINT, options).await
    }

    async fn family_members(&self, user_id: &UserId) -> Result<FamilyMembersEnvelope> {
        let options = RequestOptions::get().with_query("userId", user_id);
        self.fetch(FAMILY_MEMBERS_ENDPOINT, options).await
    }

    async fn add_family_member(&self, request: &AddFamilyRequest) -> Result<AddFamilyResponse> {
        let body = serde_json::to_value(request)?;
        self.fetch(ADD_FAMILY_ENDPOINT, RequestOptions::post_json(body))
            .await
    }

    async fn profile(&self, phone: &PhoneNumber) -> Result<ProfileEnvelope> {
        let options = RequestOptions::get().with_query("phoneNumber", phone.as_str());
        self.fetch(PROFILE_ENDPOINT, options).await
    }
}
