//! Application state.

use std::sync::Arc;

use registrar_store::SqliteStore;

use crate::admin::Administration;
use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The administrative façade over the store.
    pub admin: Administration<SqliteStore>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<SqliteStore>, config: ServiceConfig) -> Self {
        Self {
            admin: Administration::new(store),
            config,
        }
    }
}
