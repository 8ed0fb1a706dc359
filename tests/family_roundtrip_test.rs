//! Adding a family member through the profile controller

mod common;

use chhanv::adapters::storage::SessionStore;
use chhanv::core::screens::{AddFamilyOutcome, ProfileController};
use chhanv::domain::NewFamilyMember;
use chrono::NaiveDate;
use common::{envelope, logged_in_session, sample_member, Reply, StubApi};
use serde_json::json;
use std::sync::Arc;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
}

fn form() -> NewFamilyMember {
    NewFamilyMember {
        name: " Aarav Kumar ".to_string(),
        relation: "Son".to_string(),
        date_of_birth: String::new(),
        age: "8".to_string(),
        blood_group: String::new(),
        gender: "Male".to_string(),
        phone_number: "9876500001".to_string(),
    }
}

#[tokio::test]
async fn test_added_member_reloads_family_list() {
    let api = Arc::new(StubApi::healthy());
    let profile = ProfileController::new(api.clone(), logged_in_session().await);
    profile.load().await;
    assert_eq!(profile.snapshot().await.family_members.data_or_default().len(), 1);

    StubApi::set(
        &api.family_members,
        Reply::Ok(envelope(json!({
            "success": true,
            "familyMembers": [sample_member(7, "Meena Kumar"), sample_member(8, "Aarav Kumar")]
        }))),
    );

    let outcome = profile.add_family_member_on(&form(), today()).await;
    assert!(outcome.is_added());

    let sent = api.added.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].user_id, 42);
    assert_eq!(sent[0].full_name, "Aarav Kumar");
    assert_eq!(sent[0].date_of_birth, "2017-01-01");
    assert_eq!(sent[0].blood_group, None);

    let members = profile.snapshot().await.family_members.data_or_default();
    assert_eq!(members.len(), 2);
    assert_eq!(members[1].name, "Aarav Kumar");
}

#[tokio::test]
async fn test_missing_fields_are_reported_without_request() {
    let api = Arc::new(StubApi::healthy());
    let profile = ProfileController::new(api.clone(), logged_in_session().await);

    let mut incomplete = form();
    incomplete.name = "  ".to_string();
    incomplete.gender = String::new();

    match profile.add_family_member_on(&incomplete, today()).await {
        AddFamilyOutcome::Invalid { missing, .. } => {
            assert_eq!(missing, vec!["name", "gender"]);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_not_logged_in() {
    let api = Arc::new(StubApi::healthy());
    let profile = ProfileController::new(api.clone(), SessionStore::in_memory());

    let outcome = profile.add_family_member_on(&form(), today()).await;
    assert!(matches!(outcome, AddFamilyOutcome::NotLoggedIn(_)));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_backend_rejection_carries_message() {
    let api = Arc::new(StubApi::healthy());
    StubApi::set(
        &api.add_family,
        Reply::Ok(envelope(json!({"success": false, "message": "Duplicate member"}))),
    );
    let profile = ProfileController::new(api.clone(), logged_in_session().await);

    let outcome = profile.add_family_member_on(&form(), today()).await;
    assert!(matches!(outcome, AddFamilyOutcome::Rejected(_)));
    assert_eq!(outcome.alert().message, "Duplicate member");
    // No reload after a rejection
    assert!(!api.calls().iter().any(|c| c.starts_with("family_members")));
}

#[tokio::test]
async fn test_transport_failure_and_bad_age() {
    let api = Arc::new(StubApi::healthy());
    StubApi::set(&api.add_family, Reply::Down);
    let profile = ProfileController::new(api.clone(), logged_in_session().await);

    let outcome = profile.add_family_member_on(&form(), today()).await;
    assert!(matches!(outcome, AddFamilyOutcome::Failed(_)));

    let mut bad_age = form();
    bad_age.age = "eight".to_string();
    let outcome = profile.add_family_member_on(&bad_age, today()).await;
    assert!(matches!(outcome, AddFamilyOutcome::Failed(_)));
    assert_eq!(api.added.lock().unwrap().len(), 1);
}
