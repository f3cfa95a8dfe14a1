//! Common test utilities for registrar integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use registrar_service::{create_router, seed, AppState, Administration, ServiceConfig};
use registrar_store::SqliteStore;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The façade over the same store the server uses.
    pub admin: Administration<SqliteStore>,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh database.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = SqliteStore::open(temp_dir.path().join("registrar.db"))
            .await
            .expect("Failed to open store");
        let store = Arc::new(store);

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            database_url: "sqlite::memory:".into(),
            database_max_connections: 1,
            seed_on_start: false,
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let admin = Administration::new(Arc::clone(&store));
        let state = AppState::new(store, config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            admin,
            _temp_dir: temp_dir,
        }
    }

    /// Create a harness over a database holding the bootstrap data set.
    pub async fn seeded() -> Self {
        let harness = Self::new().await;
        let summary = seed(&harness.admin).await;
        assert_eq!(summary.rejected, 0, "fresh seed should apply every step");
        harness
    }
}

/// Assert an error body's code and return its message.
pub fn error_message(body: &Value, code: &str) -> String {
    assert_eq!(body["error"]["code"], code, "unexpected error body: {body}");
    body["error"]["message"]
        .as_str()
        .expect("error message should be a string")
        .to_string()
}

/// A class body for course 1 taught by instructor 1.
pub fn class_body(section: &str, semester: &str, year: i32) -> Value {
    json!({
        "course_id": 1,
        "section": section,
        "instructor": 1,
        "year": year,
        "semester": semester,
    })
}
