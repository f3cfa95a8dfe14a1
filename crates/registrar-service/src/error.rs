//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use registrar_core::{AdminError, RuleViolation};

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request - invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The store rejected the statement; the message is the store's.
    #[error("rejected: {0}")]
    Rejected(String),

    /// A delete or update matched nothing.
    #[error("No rows affected")]
    NoRowsAffected,

    /// A business rule prevented the write.
    #[error(transparent)]
    Rule(RuleViolation),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            Self::Rejected(msg) => (StatusCode::BAD_REQUEST, "rejected", msg.clone()),
            Self::NoRowsAffected => (
                StatusCode::NOT_FOUND,
                "no_rows_affected",
                self.to_string(),
            ),
            Self::Rule(RuleViolation::NoMatchingId) => {
                (StatusCode::NOT_FOUND, "rule_violation", self.to_string())
            }
            Self::Rule(_) => (StatusCode::CONFLICT, "rule_violation", self.to_string()),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<AdminError> for ApiError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::Rejected(msg) => Self::Rejected(msg),
            AdminError::NoRowsAffected => Self::NoRowsAffected,
            AdminError::Rule(violation) => Self::Rule(violation),
            AdminError::QueryFailed => Self::Internal("query failed".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_violations_map_to_conflict_except_unknown_id() {
        let response = ApiError::from(AdminError::Rule(RuleViolation::NextIsCurrent)).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = ApiError::from(AdminError::Rule(RuleViolation::NoMatchingId)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_outcomes_map_to_client_errors() {
        let response = ApiError::from(AdminError::Rejected("UNIQUE constraint failed".into()))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::from(AdminError::NoRowsAffected).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::from(AdminError::QueryFailed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
