//! Current and next semester integration tests.

mod common;

use axum::http::StatusCode;
use common::{error_message, TestHarness};
use serde_json::{json, Value};

#[tokio::test]
async fn unassigned_current_semester_is_not_found() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/v1/terms/current").await;

    response.assert_status(StatusCode::NOT_FOUND);
    error_message(&response.json(), "not_found");
}

#[tokio::test]
async fn seeded_terms_are_spring_and_fall() {
    let harness = TestHarness::seeded().await;

    let current: Value = harness.server.get("/v1/terms/current").await.json();
    assert_eq!(current["semester"], "Spring");
    assert_eq!(current["year"], 2021);
    assert!(current["date_added"].is_string());

    let next: Value = harness.server.get("/v1/terms/next").await.json();
    assert_eq!(next["semester"], "Fall");
    assert_eq!(next["year"], 2021);
}

#[tokio::test]
async fn latest_assignment_wins() {
    let harness = TestHarness::seeded().await;

    harness
        .server
        .put("/v1/terms/current")
        .json(&json!({ "semester": "Summer", "year": 2021 }))
        .await
        .assert_status_ok();

    let current: Value = harness.server.get("/v1/terms/current").await.json();
    assert_eq!(current["semester"], "Summer");
}

#[tokio::test]
async fn next_cannot_equal_current() {
    let harness = TestHarness::seeded().await;

    let response = harness
        .server
        .put("/v1/terms/next")
        .json(&json!({ "semester": "Spring", "year": 2021 }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let message = error_message(&response.json(), "rule_violation");
    assert_eq!(message, "Next semester cannot be current semester");

    // Nothing was appended
    let next: Value = harness.server.get("/v1/terms/next").await.json();
    assert_eq!(next["semester"], "Fall");
}

#[tokio::test]
async fn same_label_in_another_year_is_a_valid_next() {
    let harness = TestHarness::seeded().await;

    harness
        .server
        .put("/v1/terms/next")
        .json(&json!({ "semester": "Spring", "year": 2022 }))
        .await
        .assert_status_ok();

    let next: Value = harness.server.get("/v1/terms/next").await.json();
    assert_eq!(next["semester"], "Spring");
    assert_eq!(next["year"], 2022);
}

#[tokio::test]
async fn next_without_current_is_allowed() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/v1/semesters")
        .json(&json!({ "name": "Fall" }))
        .await
        .assert_status_ok();

    harness
        .server
        .put("/v1/terms/next")
        .json(&json!({ "semester": "Fall", "year": 2021 }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn unknown_semester_label_is_rejected_by_the_store() {
    let harness = TestHarness::seeded().await;

    let response = harness
        .server
        .put("/v1/terms/current")
        .json(&json!({ "semester": "Autumn", "year": 2021 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = error_message(&response.json(), "rejected");
    assert!(message.contains("FOREIGN KEY"), "{message}");
}
