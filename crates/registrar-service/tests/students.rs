//! Student standing integration tests.

mod common;

use axum::http::StatusCode;
use common::{error_message, TestHarness};
use serde_json::{json, Value};

#[tokio::test]
async fn new_student_starts_registered_without_credits() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/v1/students")
        .json(&json!({ "id": 789, "name": "Lin Park", "ssn": 222_333_444 }))
        .await
        .assert_status_ok();

    let body: Value = harness.server.get("/v1/students").await.json();
    assert_eq!(
        body,
        json!([{
            "id": 789,
            "name": "Lin Park",
            "credits": 0,
            "registered": true,
            "probation": false,
            "ssn": 222_333_444,
        }])
    );
}

#[tokio::test]
async fn duplicate_student_is_rejected() {
    let harness = TestHarness::seeded().await;

    let response = harness
        .server
        .post("/v1/students")
        .json(&json!({ "id": 123, "name": "Someone Else", "ssn": 1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    error_message(&response.json(), "rejected");
}

// ============================================================================
// Graduation
// ============================================================================

#[tokio::test]
async fn graduating_unknown_student_reports_no_matching_id() {
    let harness = TestHarness::seeded().await;

    let response = harness.server.post("/v1/students/999/graduation").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let message = error_message(&response.json(), "rule_violation");
    assert_eq!(message, "No matching id");
}

#[tokio::test]
async fn graduation_clears_registration_once() {
    let harness = TestHarness::seeded().await;

    harness
        .server
        .post("/v1/students/123/graduation")
        .await
        .assert_status_ok();

    let body: Value = harness.server.get("/v1/students").await.json();
    assert_eq!(body[0]["id"], 123);
    assert_eq!(body[0]["registered"], false);

    let response = harness.server.post("/v1/students/123/graduation").await;
    response.assert_status(StatusCode::CONFLICT);
    let message = error_message(&response.json(), "rule_violation");
    assert_eq!(message, "Not registered as a student anymore");
}

#[tokio::test]
async fn student_on_probation_cannot_graduate() {
    let harness = TestHarness::seeded().await;

    harness
        .server
        .post("/v1/students/456/probation")
        .await
        .assert_status_ok();

    let response = harness.server.post("/v1/students/456/graduation").await;

    response.assert_status(StatusCode::CONFLICT);
    let message = error_message(&response.json(), "rule_violation");
    assert_eq!(message, "Student on probation");
}

// ============================================================================
// Probation
// ============================================================================

#[tokio::test]
async fn probation_cannot_be_assigned_twice() {
    let harness = TestHarness::seeded().await;

    harness
        .server
        .post("/v1/students/456/probation")
        .await
        .assert_status_ok();

    let response = harness.server.post("/v1/students/456/probation").await;

    response.assert_status(StatusCode::CONFLICT);
    let message = error_message(&response.json(), "rule_violation");
    assert_eq!(message, "Student already on probation");
}

#[tokio::test]
async fn graduated_student_cannot_be_placed_on_probation() {
    let harness = TestHarness::seeded().await;

    harness
        .server
        .post("/v1/students/123/graduation")
        .await
        .assert_status_ok();

    let response = harness.server.post("/v1/students/123/probation").await;

    response.assert_status(StatusCode::CONFLICT);
    let message = error_message(&response.json(), "rule_violation");
    assert_eq!(message, "Student not registered anymore");
}

#[tokio::test]
async fn probation_can_be_lifted() {
    let harness = TestHarness::seeded().await;

    harness
        .server
        .post("/v1/students/456/probation")
        .await
        .assert_status_ok();
    harness
        .server
        .delete("/v1/students/456/probation")
        .await
        .assert_status_ok();

    let response = harness.server.delete("/v1/students/456/probation").await;
    response.assert_status(StatusCode::CONFLICT);
    let message = error_message(&response.json(), "rule_violation");
    assert_eq!(message, "Student not on probation");

    // Lifting probation makes graduation possible again
    harness
        .server
        .post("/v1/students/456/graduation")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn non_numeric_student_id_is_a_client_error() {
    let harness = TestHarness::seeded().await;

    let response = harness.server.post("/v1/students/abc/graduation").await;

    assert!(response.status_code().is_client_error());
}
