//! Registrar administration service.
//!
//! This crate provides the administrative façade over the registrar store
//! and a thin HTTP API in front of it:
//!
//! - Catalog management (account types, departments, grades, semester
//!   labels, instructors, courses)
//! - Current and next semester assignment
//! - Class scheduling bounded by the active semesters
//! - Student graduation and probation
//!
//! Every operation answers with a value or an [`registrar_core::AdminError`];
//! the HTTP layer maps those onto status codes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result

pub mod admin;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use admin::{seed, Administration, SeedSummary};
pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
