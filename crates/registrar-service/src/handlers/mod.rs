//! API handlers.
//!
//! Each handler unpacks the request, calls one `Administration` operation and
//! maps the outcome. Listing endpoints answer with a JSON array; mutations
//! answer with `{"success": true}` or an error body.

use axum::Json;
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod classes;
pub mod health;
pub mod students;
pub mod terms;

/// Body of a successful mutation.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
}

/// The response of a successful mutation.
pub(crate) fn success() -> Json<SuccessResponse> {
    Json(SuccessResponse { success: true })
}

/// Request body naming a single record.
#[derive(Debug, Deserialize)]
pub struct NameRequest {
    /// The record's name.
    pub name: String,
}
