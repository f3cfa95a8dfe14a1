//! Catalog integration tests: account types, departments, grades, semester
//! labels, instructors and courses.

mod common;

use axum::http::StatusCode;
use common::{error_message, TestHarness};
use serde_json::{json, Value};

// ============================================================================
// Account Types
// ============================================================================

#[tokio::test]
async fn empty_listing_is_an_empty_array() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/v1/account-types").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_account_type_success() {
    let harness = TestHarness::new().await;

    let response = harness
        .server
        .post("/v1/account-types")
        .json(&json!({ "name": "Student" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let body: Value = harness.server.get("/v1/account-types").await.json();
    assert_eq!(body, json!([{ "name": "Student" }]));
}

#[tokio::test]
async fn duplicate_account_type_is_rejected_with_store_message() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/v1/account-types")
        .json(&json!({ "name": "Student" }))
        .await
        .assert_status_ok();

    let response = harness
        .server
        .post("/v1/account-types")
        .json(&json!({ "name": "Student" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = error_message(&response.json(), "rejected");
    assert!(message.contains("UNIQUE constraint failed"), "{message}");
}

#[tokio::test]
async fn delete_missing_account_type_affects_no_rows() {
    let harness = TestHarness::new().await;

    let response = harness.server.delete("/v1/account-types/Nobody").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let message = error_message(&response.json(), "no_rows_affected");
    assert_eq!(message, "No rows affected");
}

#[tokio::test]
async fn delete_account_type_success() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/v1/account-types")
        .json(&json!({ "name": "Instructor" }))
        .await
        .assert_status_ok();

    harness
        .server
        .delete("/v1/account-types/Instructor")
        .await
        .assert_status_ok();

    let body: Value = harness.server.get("/v1/account-types").await.json();
    assert_eq!(body, json!([]));
}

// ============================================================================
// Departments
// ============================================================================

#[tokio::test]
async fn department_without_id_gets_one_assigned() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/v1/departments")
        .json(&json!({ "id": 4, "name": "Physics" }))
        .await
        .assert_status_ok();
    harness
        .server
        .post("/v1/departments")
        .json(&json!({ "name": "Chemistry" }))
        .await
        .assert_status_ok();

    let body: Value = harness.server.get("/v1/departments").await.json();
    assert_eq!(
        body,
        json!([
            { "id": 4, "name": "Physics" },
            { "id": 5, "name": "Chemistry" },
        ])
    );
}

#[tokio::test]
async fn duplicate_department_id_is_rejected() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/v1/departments")
        .json(&json!({ "id": 1, "name": "Computer Science" }))
        .await
        .assert_status_ok();

    let response = harness
        .server
        .post("/v1/departments")
        .json(&json!({ "id": 1, "name": "Mathematics" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = error_message(&response.json(), "rejected");
    assert!(message.contains("UNIQUE constraint failed"), "{message}");

    let body: Value = harness.server.get("/v1/departments").await.json();
    assert_eq!(body, json!([{ "id": 1, "name": "Computer Science" }]));
}

#[tokio::test]
async fn delete_department_by_id() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/v1/departments")
        .json(&json!({ "id": 9, "name": "Biology" }))
        .await
        .assert_status_ok();

    harness
        .server
        .delete("/v1/departments/9")
        .await
        .assert_status_ok();

    harness
        .server
        .delete("/v1/departments/9")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn department_in_use_cannot_be_deleted() {
    let harness = TestHarness::seeded().await;

    let response = harness.server.delete("/v1/departments/1").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = error_message(&response.json(), "rejected");
    assert!(message.contains("FOREIGN KEY"), "{message}");
}

// ============================================================================
// Grades and semester labels
// ============================================================================

#[tokio::test]
async fn grades_are_listed_in_name_order() {
    let harness = TestHarness::new().await;

    for name in ["C", "A", "B"] {
        harness
            .server
            .post("/v1/grades")
            .json(&json!({ "name": name }))
            .await
            .assert_status_ok();
    }

    let body: Value = harness.server.get("/v1/grades").await.json();
    assert_eq!(body, json!([{ "name": "A" }, { "name": "B" }, { "name": "C" }]));
}

#[tokio::test]
async fn semester_label_lifecycle() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/v1/semesters")
        .json(&json!({ "name": "Winter" }))
        .await
        .assert_status_ok();
    harness
        .server
        .delete("/v1/semesters/Winter")
        .await
        .assert_status_ok();
    harness
        .server
        .delete("/v1/semesters/Winter")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Instructors and courses
// ============================================================================

#[tokio::test]
async fn instructor_email_must_be_unique() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/v1/instructors")
        .json(&json!({ "id": 10, "name": "Ada", "email": "ada@example.edu" }))
        .await
        .assert_status_ok();

    let response = harness
        .server
        .post("/v1/instructors")
        .json(&json!({ "id": 11, "name": "Grace", "email": "ada@example.edu" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    error_message(&response.json(), "rejected");
}

#[tokio::test]
async fn instructor_name_and_email_are_optional() {
    let harness = TestHarness::new().await;

    harness
        .server
        .post("/v1/instructors")
        .json(&json!({ "id": 12 }))
        .await
        .assert_status_ok();

    let body: Value = harness.server.get("/v1/instructors").await.json();
    assert_eq!(body[0]["id"], 12);
    assert!(body[0]["name"].is_null());
}

#[tokio::test]
async fn course_requires_existing_department() {
    let harness = TestHarness::new().await;

    let response = harness
        .server
        .post("/v1/courses")
        .json(&json!({
            "id": 1,
            "title": "Compilers",
            "dept": 42,
            "credits": 4,
            "cost": 1200.00,
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    error_message(&response.json(), "rejected");
}

#[tokio::test]
async fn duplicate_course_id_is_rejected() {
    let harness = TestHarness::seeded().await;

    let response = harness
        .server
        .post("/v1/courses")
        .json(&json!({
            "id": 1,
            "title": "Operating Systems",
            "dept": 1,
            "credits": 3,
            "cost": 1000.00,
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = error_message(&response.json(), "rejected");
    assert!(message.contains("UNIQUE constraint failed"), "{message}");

    let body: Value = harness.server.get("/v1/courses").await.json();
    assert_eq!(body[0]["title"], "Database Systems");
}

#[tokio::test]
async fn decimal_cost_is_stored_in_cents() {
    let harness = TestHarness::seeded().await;

    harness
        .server
        .post("/v1/courses")
        .json(&json!({
            "id": 4,
            "title": "Compilers",
            "dept": 1,
            "credits": 4,
            "cost": 1234.56,
        }))
        .await
        .assert_status_ok();

    let body: Value = harness.server.get("/v1/courses").await.json();
    assert_eq!(body[3]["cost_cents"], 123_456);
    assert_eq!(body[3]["cost_formatted"], "$1234.56");
}

#[tokio::test]
async fn cost_with_fractional_cents_is_a_bad_request() {
    let harness = TestHarness::seeded().await;

    let response = harness
        .server
        .post("/v1/courses")
        .json(&json!({
            "id": 5,
            "title": "Compilers",
            "dept": 1,
            "credits": 4,
            "cost": 10.005,
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    error_message(&response.json(), "bad_request");
}

#[tokio::test]
async fn negative_cost_is_a_bad_request() {
    let harness = TestHarness::seeded().await;

    let response = harness
        .server
        .post("/v1/courses")
        .json(&json!({
            "id": 7,
            "title": "Compilers",
            "dept": 1,
            "credits": 4,
            "cost": -0.01,
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    error_message(&response.json(), "bad_request");
}

#[tokio::test]
async fn update_course_overwrites_every_field() {
    let harness = TestHarness::seeded().await;

    harness
        .server
        .put("/v1/courses/2")
        .json(&json!({
            "title": "Advanced Data Structures",
            "dept": 3,
            "credits": 4,
            "cost": 1500.50,
        }))
        .await
        .assert_status_ok();

    let body: Value = harness.server.get("/v1/courses").await.json();
    assert_eq!(
        body[1],
        json!({
            "id": 2,
            "title": "Advanced Data Structures",
            "dept": 3,
            "credits": 4,
            "cost_cents": 150_050,
            "cost_formatted": "$1500.50",
        })
    );
}

#[tokio::test]
async fn update_missing_course_affects_no_rows() {
    let harness = TestHarness::seeded().await;

    let response = harness
        .server
        .put("/v1/courses/99")
        .json(&json!({
            "title": "Nothing",
            "dept": 1,
            "credits": 1,
            "cost": 0,
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    error_message(&response.json(), "no_rows_affected");
}
