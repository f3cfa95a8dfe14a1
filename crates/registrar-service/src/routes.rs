//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{catalog, classes, health, students, terms};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Catalog
/// - `GET|POST /v1/account-types`, `DELETE /v1/account-types/:name`
/// - `GET|POST /v1/departments`, `DELETE /v1/departments/:id`
/// - `GET|POST /v1/grades`, `DELETE /v1/grades/:name`
/// - `GET|POST /v1/semesters`, `DELETE /v1/semesters/:name`
/// - `GET|POST /v1/instructors`, `DELETE /v1/instructors/:id`
/// - `GET|POST /v1/courses`, `PUT|DELETE /v1/courses/:id`
///
/// ## Terms
/// - `GET|PUT /v1/terms/current` - Active current semester
/// - `GET|PUT /v1/terms/next` - Active next semester
///
/// ## Classes
/// - `GET|POST|PUT|DELETE /v1/classes` - Update and delete take the class key
///   in the body
/// - `GET /v1/classes/current`, `GET /v1/classes/next`
///
/// ## Students
/// - `GET|POST /v1/students`
/// - `POST /v1/students/:id/graduation`
/// - `POST|DELETE /v1/students/:id/probation`
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    Router::new()
        // Health (public)
        .route("/health", get(health::health))
        // Catalog
        .route(
            "/v1/account-types",
            get(catalog::list_account_types).post(catalog::create_account_type),
        )
        .route(
            "/v1/account-types/:name",
            delete(catalog::delete_account_type),
        )
        .route(
            "/v1/departments",
            get(catalog::list_departments).post(catalog::create_department),
        )
        .route("/v1/departments/:id", delete(catalog::delete_department))
        .route(
            "/v1/grades",
            get(catalog::list_grades).post(catalog::create_grade),
        )
        .route("/v1/grades/:name", delete(catalog::delete_grade))
        .route(
            "/v1/semesters",
            get(catalog::list_semesters).post(catalog::create_semester),
        )
        .route("/v1/semesters/:name", delete(catalog::delete_semester))
        .route(
            "/v1/instructors",
            get(catalog::list_instructors).post(catalog::create_instructor),
        )
        .route("/v1/instructors/:id", delete(catalog::delete_instructor))
        .route(
            "/v1/courses",
            get(catalog::list_courses).post(catalog::create_course),
        )
        .route(
            "/v1/courses/:id",
            put(catalog::update_course).delete(catalog::delete_course),
        )
        // Terms
        .route(
            "/v1/terms/current",
            get(terms::get_current).put(terms::assign_current),
        )
        .route(
            "/v1/terms/next",
            get(terms::get_next).put(terms::assign_next),
        )
        // Classes
        .route(
            "/v1/classes",
            get(classes::list_classes)
                .post(classes::create_class)
                .put(classes::update_class)
                .delete(classes::delete_class),
        )
        .route("/v1/classes/current", get(classes::list_current_classes))
        .route("/v1/classes/next", get(classes::list_next_classes))
        // Students
        .route(
            "/v1/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/v1/students/:id/graduation",
            post(students::assign_graduation),
        )
        .route(
            "/v1/students/:id/probation",
            post(students::assign_probation).delete(students::remove_probation),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
