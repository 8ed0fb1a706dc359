//! Login, session persistence and navigation working together

mod common;

use chhanv::adapters::backend::LoginReply;
use chhanv::adapters::storage::{FileKeyValueStore, SessionStore, PHONE_NUMBER_KEY, USER_ID_KEY};
use chhanv::core::screens::{strip_phone_separators, LoginController, LoginForm, LoginOutcome};
use chhanv::core::{AppShell, Screen};
use chhanv::domain::secret_string;
use common::{Reply, StubApi};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

fn form(phone: &str, password: &str) -> LoginForm {
    LoginForm::new(phone, secret_string(password.to_string()))
}

fn file_session(dir: &TempDir) -> SessionStore {
    SessionStore::new(Arc::new(FileKeyValueStore::new(
        dir.path().join("session.json"),
    )))
}

#[tokio::test]
async fn test_successful_login_persists_session_and_navigates_home() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(StubApi::healthy());
    let session = file_session(&dir);

    let controller = LoginController::new(api.clone(), session.clone());
    let outcome = controller.submit(&form("9876543210", "secret1")).await;

    assert!(outcome.is_success());
    assert!(outcome.alert().is_none());
    assert_eq!(api.calls(), vec!["check_user:9876543210".to_string()]);

    let mut shell = AppShell::new(session.clone());
    shell.finish_splash();
    assert!(shell.on_login(&outcome));
    assert_eq!(
        shell.current(),
        &Screen::Home {
            user_name: "Ravi Kumar".to_string()
        }
    );
    assert_eq!(shell.navigator().depth(), 1);

    // A fresh store over the same file sees the identity
    let reopened = file_session(&dir);
    assert_eq!(reopened.get(USER_ID_KEY).await.as_deref(), Some("42"));
    assert_eq!(
        reopened.get(PHONE_NUMBER_KEY).await.as_deref(),
        Some("9876543210")
    );
}

#[tokio::test]
async fn test_login_recovers_from_corrupted_session_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("session.json"), "{not json").unwrap();

    let api = Arc::new(StubApi::healthy());
    let session = file_session(&dir);
    let controller = LoginController::new(api, session.clone());
    let outcome = controller.submit(&form("9876543210", "secret1")).await;
    assert!(outcome.is_success());

    let reopened = file_session(&dir);
    assert_eq!(reopened.get(USER_ID_KEY).await.as_deref(), Some("42"));

    std::fs::write(dir.path().join("session.json"), "{not json").unwrap();
    let mut shell = AppShell::new(reopened.clone());
    shell.logout().await;
    assert!(reopened.session().await.is_none());
    let contents = std::fs::read_to_string(dir.path().join("session.json")).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&contents).is_ok());
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let api = Arc::new(StubApi::healthy());
    let session = SessionStore::in_memory();
    let controller = LoginController::new(api.clone(), session.clone());

    let outcome = controller.submit(&form("12345", "abc")).await;
    match &outcome {
        LoginOutcome::Invalid(errors) => {
            assert!(errors.phone.is_some());
            assert!(errors.password.is_some());
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(api.calls().is_empty());
    assert!(session.session().await.is_none());
}

#[tokio::test]
async fn test_malformed_phone_argument_sends_nothing() {
    let api = Arc::new(StubApi::healthy());
    let session = SessionStore::in_memory();
    let controller = LoginController::new(api.clone(), session.clone());

    for phone in ["+91 98765 43210", "98765432101"] {
        let outcome = controller
            .submit(&form(&strip_phone_separators(phone), "secret1"))
            .await;
        assert!(matches!(outcome, LoginOutcome::Invalid(_)), "{phone}");
    }
    assert!(api.calls().is_empty());
    assert!(session.session().await.is_none());
}

#[tokio::test]
async fn test_rejected_login_keeps_session_empty() {
    let api = Arc::new(StubApi::healthy());
    StubApi::set(&api.login, Reply::Ok(LoginReply::from_value(&json!("0"))));
    let session = SessionStore::in_memory();

    let controller = LoginController::new(api, session.clone());
    let outcome = controller.submit(&form("9876543210", "wrongpass")).await;

    assert!(matches!(outcome, LoginOutcome::Rejected(_)));
    assert!(outcome.alert().is_some());
    assert!(session.user_id().await.is_none());

    let mut shell = AppShell::new(session);
    shell.finish_splash();
    assert!(!shell.on_login(&outcome));
    assert_eq!(shell.current(), &Screen::Login);
}

#[tokio::test]
async fn test_transport_and_parse_failures_are_distinguished() {
    let api = Arc::new(StubApi::healthy());
    let controller = LoginController::new(api.clone(), SessionStore::in_memory());

    StubApi::set(&api.login, Reply::Down);
    let outcome = controller.submit(&form("9876543210", "secret1")).await;
    assert!(matches!(outcome, LoginOutcome::Failed(_)));

    StubApi::set(&api.login, Reply::Malformed);
    let outcome = controller.submit(&form("9876543210", "secret1")).await;
    assert!(matches!(outcome, LoginOutcome::MalformedResponse(_)));
}

#[tokio::test]
async fn test_logout_clears_session_and_returns_to_login() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(StubApi::healthy());
    let session = file_session(&dir);

    let outcome = LoginController::new(api, session.clone())
        .submit(&form("9876543210", "secret1"))
        .await;

    let mut shell = AppShell::new(session.clone());
    shell.finish_splash();
    shell.on_login(&outcome);
    shell.navigator_mut().push(Screen::Profile);
    assert_eq!(shell.navigator().depth(), 2);

    shell.logout().await;
    assert_eq!(shell.current(), &Screen::Login);
    assert!(!shell.navigator_mut().go_back());
    assert_eq!(shell.current(), &Screen::Login);
    assert!(session.session().await.is_none());
    assert!(file_session(&dir).user_id().await.is_none());
}
