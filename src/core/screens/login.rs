//! Login screen controller
//!
//! Validates the form locally, then exchanges the credentials for a user id
//! via `chkusr.php`. The identity is persisted only on success.

use crate::adapters::backend::{HealthRecordsApi, LoginReply};
use crate::adapters::storage::SessionStore;
use crate::domain::ids::is_valid_phone_number;
use crate::domain::{Alert, ChhanvError, PhoneNumber, SecretString, Session, UserId};
use secrecy::ExposeSecret;
use std::sync::Arc;

/// Maximum digits accepted by the phone field
pub const PHONE_NUMBER_LENGTH: usize = 10;

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

const MSG_PHONE_REQUIRED: &str = "फोन नंबर आवश्यक है";
const MSG_PHONE_INVALID: &str = "कृपया 10 अंकों का वैध फोन नंबर दर्ज करें";
const MSG_PASSWORD_REQUIRED: &str = "पासवर्ड आवश्यक है";
const MSG_PASSWORD_SHORT: &str = "पासवर्ड कम से कम 6 अक्षर का होना चाहिए";

const TITLE_ERROR: &str = "त्रुटि";
const TITLE_LOGIN_FAILED: &str = "लॉगिन असफल";
const MSG_INVALID_CREDENTIALS: &str = "अमान्य फोन नंबर या पासवर्ड";
const MSG_MALFORMED_RESPONSE: &str = "सर्वर से अमान्य जवाब मिला। कृपया पुनः प्रयास करें।";
const MSG_LOGIN_FAILED: &str = "लॉगिन करने में समस्या हुई। कृपया पुनः प्रयास करें।";

/// Keep ASCII digits only, at most ten of them
///
/// # Examples
///
/// ```
/// use chhanv::core::screens::login::sanitize_phone_input;
///
/// assert_eq!(sanitize_phone_input("+91 98765-43210"), "9198765432");
/// assert_eq!(sanitize_phone_input("98765 43210"), "9876543210");
/// ```
pub fn sanitize_phone_input(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_NUMBER_LENGTH)
        .collect()
}

/// Drop spaces and dashes from a phone number given in one piece
///
/// Unlike [`sanitize_phone_input`] nothing else is removed and nothing is
/// truncated, so a country code or an extra digit still fails validation.
///
/// # Examples
///
/// ```
/// use chhanv::core::screens::login::strip_phone_separators;
///
/// assert_eq!(strip_phone_separators(" 98765-43210 "), "9876543210");
/// assert_eq!(strip_phone_separators("+91 98765 43210"), "+919876543210");
/// ```
pub fn strip_phone_separators(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Credentials as typed
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub phone: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn new(phone: impl Into<String>, password: SecretString) -> Self {
        Self {
            phone: phone.into(),
            password,
        }
    }
}

/// Inline messages per form field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.password.is_none()
    }

    /// Messages in field order
    pub fn messages(&self) -> Vec<&str> {
        [self.phone.as_deref(), self.password.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Result of submitting the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Blocked locally; no request was sent
    Invalid(FieldErrors),
    /// Backend answered the `"0"` sentinel or an unusable reply
    Rejected(Alert),
    /// Backend body was not JSON
    MalformedResponse(Alert),
    /// Transport failed on every origin
    Failed(Alert),
    Success { user_id: UserId, user_name: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success { .. })
    }

    /// The alert to show, for every non-success outcome
    pub fn alert(&self) -> Option<Alert> {
        match self {
            LoginOutcome::Invalid(errors) => Some(Alert::new(
                TITLE_ERROR,
                errors.messages().join("\n"),
            )),
            LoginOutcome::Rejected(alert)
            | LoginOutcome::MalformedResponse(alert)
            | LoginOutcome::Failed(alert) => Some(alert.clone()),
            LoginOutcome::Success { .. } => None,
        }
    }
}

/// Drives the login form
pub struct LoginController {
    api: Arc<dyn HealthRecordsApi>,
    session: SessionStore,
}

impl LoginController {
    pub fn new(api: Arc<dyn HealthRecordsApi>, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// Check both fields; every failing field gets a message
    pub fn validate(form: &LoginForm) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        let phone = form.phone.trim();
        if phone.is_empty() {
            errors.phone = Some(MSG_PHONE_REQUIRED.to_string());
        } else if !is_valid_phone_number(phone) {
            errors.phone = Some(MSG_PHONE_INVALID.to_string());
        }

        let password = form.password.expose_secret();
        if password.is_blank() {
            errors.password = Some(MSG_PASSWORD_REQUIRED.to_string());
        } else if password.char_count() < MIN_PASSWORD_LENGTH {
            errors.password = Some(MSG_PASSWORD_SHORT.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, call the backend and persist the session on success
    pub async fn submit(&self, form: &LoginForm) -> LoginOutcome {
        if let Err(errors) = Self::validate(form) {
            tracing::debug!(errors = ?errors, "Login form rejected locally");
            return LoginOutcome::Invalid(errors);
        }

        let phone = form.phone.trim();
        let reply = match self.api.check_user(phone, &form.password).await {
            Ok(reply) => reply,
            Err(ChhanvError::Parse(message)) => {
                tracing::error!(error = %message, "Login response was not valid JSON");
                return LoginOutcome::MalformedResponse(Alert::new(
                    TITLE_ERROR,
                    MSG_MALFORMED_RESPONSE,
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "Login request failed");
                return LoginOutcome::Failed(Alert::new(TITLE_ERROR, MSG_LOGIN_FAILED));
            }
        };

        match reply {
            LoginReply::Rejected => {
                tracing::info!("Login rejected by backend");
                LoginOutcome::Rejected(Alert::new(TITLE_LOGIN_FAILED, MSG_INVALID_CREDENTIALS))
            }
            LoginReply::Accepted { user_id, user_name } => {
                // validated above, so this only fails on a logic error
                let phone_number = match PhoneNumber::new(phone) {
                    Ok(phone_number) => phone_number,
                    Err(e) => {
                        return LoginOutcome::Failed(Alert::new(TITLE_ERROR, e));
                    }
                };

                self.session
                    .save_session(&Session::new(user_id.clone(), phone_number))
                    .await;
                tracing::info!(user_id = %user_id, "Login succeeded");
                LoginOutcome::Success { user_id, user_name }
            }
        }
    }
}
