//! Profile screen controller: user profile, family members, add-member form

use super::state::{settle, LoadState, StateCell};
use crate::adapters::backend::HealthRecordsApi;
use crate::adapters::storage::SessionStore;
use crate::domain::{Alert, FamilyMember, NewFamilyMember, UserData};
use chrono::NaiveDate;
use std::sync::Arc;

const TITLE_ERROR: &str = "त्रुटि";
const TITLE_SUCCESS: &str = "सफलता";
const MSG_FILL_REQUIRED: &str = "कृपया सभी आवश्यक फील्ड भरें।";
const MSG_NO_USER_ID: &str = "User ID नहीं मिला। कृपया दोबारा लॉगिन करें।";
const MSG_MEMBER_ADDED: &str = "परिवारिक सदस्य सफलतापूर्वक जोड़ा गया।";
const MSG_ADD_REJECTED: &str = "परिवारिक सदस्य जोड़ने में समस्या हुई।";

/// Result of submitting the add-family-member form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddFamilyOutcome {
    /// Required fields are blank; nothing was sent
    Invalid {
        missing: Vec<&'static str>,
        alert: Alert,
    },
    /// No usable user id in the session
    NotLoggedIn(Alert),
    /// Backend accepted the member; the family list was reloaded
    Added(Alert),
    /// Backend answered `success: false`
    Rejected(Alert),
    /// Transport or parse failure
    Failed(Alert),
}

impl AddFamilyOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddFamilyOutcome::Added(_))
    }

    pub fn alert(&self) -> &Alert {
        match self {
            AddFamilyOutcome::Invalid { alert, .. }
            | AddFamilyOutcome::NotLoggedIn(alert)
            | AddFamilyOutcome::Added(alert)
            | AddFamilyOutcome::Rejected(alert)
            | AddFamilyOutcome::Failed(alert) => alert,
        }
    }
}

/// Rendered view of the profile screen
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSnapshot {
    pub profile: LoadState<UserData>,
    pub family_members: LoadState<Vec<FamilyMember>>,
}

pub struct ProfileController {
    api: Arc<dyn HealthRecordsApi>,
    session: SessionStore,
    profile: StateCell<UserData>,
    family_members: StateCell<Vec<FamilyMember>>,
}

impl ProfileController {
    pub fn new(api: Arc<dyn HealthRecordsApi>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            profile: StateCell::new(),
            family_members: StateCell::new(),
        }
    }

    /// Fetch the profile and the family list concurrently
    pub async fn load(&self) {
        futures::join!(self.load_profile(), self.load_family_members());
    }

    /// Profile is looked up by the stored phone number
    pub async fn load_profile(&self) {
        let Some(phone) = self.session.phone_number().await else {
            tracing::info!("No stored phone number, profile stays empty");
            self.profile.set(LoadState::empty()).await;
            return;
        };

        self.profile.begin().await;
        let result = self.api.profile(&phone).await;
        let state = settle(
            "profile",
            result,
            |e| e.success && !e.posts.is_empty(),
            |e| e.user_data().unwrap_or_default(),
        );
        self.profile.set(state).await;
    }

    /// Family members are looked up by the stored user id
    pub async fn load_family_members(&self) {
        let Some(user_id) = self.session.user_id().await else {
            tracing::info!("No stored user id, family list stays empty");
            self.family_members.set(LoadState::empty()).await;
            return;
        };

        self.family_members.begin().await;
        let result = self.api.family_members(&user_id).await;
        let state = settle("family_members", result, |e| e.success, |e| e.members());
        tracing::info!(
            user_id = %user_id,
            family_members = state.data().map_or(0, Vec::len),
            "Family members loaded"
        );
        self.family_members.set(state).await;
    }

    /// Submit the form, dating a blank date of birth from today
    pub async fn add_family_member(&self, form: &NewFamilyMember) -> AddFamilyOutcome {
        self.add_family_member_on(form, chrono::Local::now().date_naive())
            .await
    }

    /// Submit the form with an explicit current date
    pub async fn add_family_member_on(
        &self,
        form: &NewFamilyMember,
        today: NaiveDate,
    ) -> AddFamilyOutcome {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return AddFamilyOutcome::Invalid {
                missing,
                alert: Alert::new(TITLE_ERROR, MSG_FILL_REQUIRED),
            };
        }

        let Some(user_id) = self.session.user_id().await else {
            return AddFamilyOutcome::NotLoggedIn(Alert::new(TITLE_ERROR, MSG_NO_USER_ID));
        };

        let request = match form.to_request(&user_id, today) {
            Ok(request) => request,
            Err(message) => {
                tracing::warn!(error = %message, "Add family member form could not be sent");
                return AddFamilyOutcome::Failed(Alert::new(
                    TITLE_ERROR,
                    format!("परिवारिक सदस्य जोड़ने में समस्या: {message}"),
                ));
            }
        };

        match self.api.add_family_member(&request).await {
            Ok(response) if response.success => {
                tracing::info!(user_id = %user_id, relation = %request.relation, "Family member added");
                self.load_family_members().await;
                AddFamilyOutcome::Added(Alert::new(TITLE_SUCCESS, MSG_MEMBER_ADDED))
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| MSG_ADD_REJECTED.to_string());
                tracing::warn!(error = %message, "Backend rejected family member");
                AddFamilyOutcome::Rejected(Alert::new(TITLE_ERROR, message))
            }
            Err(e) => {
                tracing::error!(error = %e, "Add family member request failed");
                AddFamilyOutcome::Failed(Alert::new(
                    TITLE_ERROR,
                    format!("परिवारिक सदस्य जोड़ने में समस्या: {e}"),
                ))
            }
        }
    }

    pub async fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            profile: self.profile.snapshot().await,
            family_members: self.family_members.snapshot().await,
        }
    }
}
