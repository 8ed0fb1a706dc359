//! End-to-end origin fallback against local mock servers
//!
//! `127.0.0.1:1` stands in for an origin that refuses connections; a
//! listener that accepts and never answers stands in for one that hangs.

use chhanv::adapters::backend::{
    FallbackStrategy, HealthRecordsApi, HttpHealthRecordsApi, Origin, RequestOptions,
    ServerLocator, Transport,
};
use chhanv::adapters::storage::SessionStore;
use chhanv::core::screens::{HomeController, LoginController, LoginForm};
use chhanv::domain::{secret_string, ChhanvError, TransportError};
use mockito::Matcher;
use std::sync::Arc;

const DEAD_ORIGIN: &str = "http://127.0.0.1:1/";

fn strategy(origins: &[&str]) -> FallbackStrategy {
    FallbackStrategy::new(Origin::parse_all(origins).unwrap()).unwrap()
}

/// An origin that accepts connections and never sends a byte back
async fn silent_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{addr}/")
}

fn api(origins: &[&str]) -> Arc<HttpHealthRecordsApi> {
    let transport = Transport::new(strategy(origins), 2000, true).unwrap();
    Arc::new(HttpHealthRecordsApi::new(Arc::new(transport)))
}

#[tokio::test]
async fn test_login_falls_back_to_second_origin() {
    let mut server = mockito::Server::new_async().await;
    let login = server
        .mock("POST", "/chkusr.php")
        .match_body(Matcher::Json(serde_json::json!({
            "t1": "9876543210",
            "t2": "secret1"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#""42,Ravi Kumar""#)
        .expect(1)
        .create_async()
        .await;

    let fallback = format!("{}/", server.url());
    let session = SessionStore::in_memory();
    let controller = LoginController::new(api(&[DEAD_ORIGIN, fallback.as_str()]), session.clone());

    let outcome = controller
        .submit(&LoginForm::new(
            "9876543210",
            secret_string("secret1".to_string()),
        ))
        .await;

    assert!(outcome.is_success());
    assert_eq!(session.user_id().await.map(|id| id.to_string()), Some("42".to_string()));
    login.assert_async().await;
}

#[tokio::test]
async fn test_preferred_origin_is_used_when_healthy() {
    let mut preferred = mockito::Server::new_async().await;
    let mut fallback = mockito::Server::new_async().await;

    let preferred_mock = preferred
        .mock("GET", "/get_camps1.php")
        .with_status(200)
        .with_body(r#"{"success":true,"camps":[{"id":"3","date":"2025-11-03"}]}"#)
        .expect(1)
        .create_async()
        .await;
    let fallback_mock = fallback
        .mock("GET", "/get_camps1.php")
        .expect(0)
        .create_async()
        .await;

    let first = format!("{}/", preferred.url());
    let second = format!("{}/", fallback.url());
    let envelope = api(&[first.as_str(), second.as_str()]).camps().await.unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.camps[0].id, 3);
    preferred_mock.assert_async().await;
    fallback_mock.assert_async().await;
}

#[tokio::test]
async fn test_http_error_moves_to_next_origin() {
    let mut broken = mockito::Server::new_async().await;
    let mut healthy = mockito::Server::new_async().await;

    let _broken = broken
        .mock("GET", "/get_camp_app.php")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;
    let healthy_mock = healthy
        .mock("GET", "/get_camp_app.php")
        .match_query(Matcher::UrlEncoded("limit".into(), "5".into()))
        .with_status(200)
        .with_body(r#"{"success":true,"camps":[]}"#)
        .create_async()
        .await;

    let first = format!("{}/", broken.url());
    let second = format!("{}/", healthy.url());
    let envelope = api(&[first.as_str(), second.as_str()]).camp_listing(5).await.unwrap();

    assert!(envelope.success);
    healthy_mock.assert_async().await;
}

#[tokio::test]
async fn test_all_origins_down_surfaces_transport_error() {
    let err = api(&[DEAD_ORIGIN, "http://127.0.0.1:2/"])
        .camps()
        .await
        .unwrap_err();
    assert!(matches!(err, ChhanvError::Transport(_)));
}

#[tokio::test]
async fn test_home_screen_survives_total_outage() {
    let session = SessionStore::in_memory();
    session.set("cid", "42").await;

    let home = HomeController::new(api(&[DEAD_ORIGIN]), session, 3);
    home.load().await;
    let snapshot = home.snapshot().await;

    assert!(snapshot.camps.is_degraded());
    assert!(snapshot.recent_reports.is_degraded());
}

#[tokio::test]
async fn test_locator_prefers_available_origin_and_falls_back() {
    let mut server = mockito::Server::new_async().await;
    let _head = server
        .mock("HEAD", "/")
        .with_status(200)
        .create_async()
        .await;
    let available = format!("{}/", server.url());

    let locator = ServerLocator::new(strategy(&[available.as_str(), DEAD_ORIGIN]), 2000, true, "show_doctor.php")
        .unwrap();
    assert_eq!(locator.resolve().await.as_str(), available);

    // Nothing answers the probe: the last origin is chosen without probing it
    let locator = ServerLocator::new(strategy(&[DEAD_ORIGIN, available.as_str()]), 500, true, "show_doctor.php")
        .unwrap();
    let origin = locator.resolve().await;
    assert_eq!(origin.as_str(), available);
    assert!(!origin.is_secure());
}

#[tokio::test]
async fn test_timeout_moves_to_next_origin() {
    let hanging = silent_origin().await;
    let mut server = mockito::Server::new_async().await;
    let camps = server
        .mock("GET", "/get_camps1.php")
        .with_status(200)
        .with_body(r#"{"success":true,"camps":[{"id":"8","date":"2025-12-01"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let fallback = format!("{}/", server.url());
    let transport = Transport::new(strategy(&[hanging.as_str(), fallback.as_str()]), 300, true)
        .unwrap();
    let api = HttpHealthRecordsApi::new(Arc::new(transport));

    let envelope = api.camps().await.unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.camps[0].id, 8);
    camps.assert_async().await;
}

#[tokio::test]
async fn test_single_hanging_origin_reports_timeout() {
    let hanging = silent_origin().await;
    let transport = Transport::new(strategy(&[hanging.as_str()]), 300, true).unwrap();

    let err = transport
        .request("get_camps1.php", RequestOptions::get())
        .await
        .unwrap_err();

    match err {
        ChhanvError::Transport(TransportError::Timeout { origin, timeout_ms }) => {
            assert_eq!(origin, hanging);
            assert_eq!(timeout_ms, 300);
        }
        other => panic!("expected a timeout, got {other:?}"),
    }
}
