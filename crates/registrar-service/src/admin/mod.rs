//! The administrative façade.
//!
//! `Administration` gathers every registrar operation behind one surface.
//! Plain catalog operations delegate straight to the store; semester-bounded
//! and standing-bounded operations read first, check the rule, then write.
//!
//! The read and the write are separate round trips with no transaction
//! around them, so a concurrent writer can change the semester logs or a
//! student's standing in between.

use std::sync::Arc;

use registrar_core::{AdminError, Result};
use registrar_store::Store;

mod catalog;
mod classes;
mod seed;
mod students;
mod terms;

pub use seed::{seed, SeedSummary};

/// Every administrative operation over a shared store.
pub struct Administration<S> {
    store: Arc<S>,
}

impl<S> Clone for Administration<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> Administration<S> {
    /// Create a façade over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Turn an affected-row count into success or `NoRowsAffected`.
fn affected(count: u64) -> Result<()> {
    if count > 0 {
        Ok(())
    } else {
        Err(AdminError::NoRowsAffected)
    }
}

/// Collapse a failed listing into the detail-less `QueryFailed`.
fn listed<T>(entity: &'static str, result: registrar_store::Result<Vec<T>>) -> Result<Vec<T>> {
    result.map_err(|err| {
        tracing::warn!(entity, error = %err, "Listing query failed");
        AdminError::QueryFailed
    })
}
