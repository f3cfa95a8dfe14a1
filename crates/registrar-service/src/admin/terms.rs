//! Current and next semester assignment.

use chrono::Utc;

use registrar_core::{guard, AdminError, Result, SemesterEntry, Term};
use registrar_store::Store;

use super::Administration;

impl<S: Store> Administration<S> {
    /// Make `term` the current semester by appending it to the log.
    ///
    /// # Errors
    ///
    /// `AdminError::Rejected` if the semester label does not exist.
    pub async fn assign_current_semester(&self, term: &Term) -> Result<()> {
        self.store.append_current_semester(term, Utc::now()).await?;
        tracing::info!(%term, "Current semester assigned");
        Ok(())
    }

    /// Make `term` the next semester.
    ///
    /// The active current semester is read first; the next semester may not
    /// be the same term.
    ///
    /// # Errors
    ///
    /// - `RuleViolation::NextIsCurrent` if `term` is the current semester.
    /// - `AdminError::Rejected` if the store refuses the read or the insert.
    pub async fn assign_next_semester(&self, term: &Term) -> Result<()> {
        let current = self.store.latest_current_semester().await?;

        if let Err(violation) = guard::check_next_semester(current.as_ref().map(|e| &e.term), term)
        {
            tracing::warn!(%term, rule = %violation, "Next semester assignment rejected");
            return Err(violation.into());
        }

        self.store.append_next_semester(term, Utc::now()).await?;
        tracing::info!(%term, "Next semester assigned");
        Ok(())
    }

    /// The active current semester entry, if one was ever assigned.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if the query fails.
    pub async fn current_semester(&self) -> Result<Option<SemesterEntry>> {
        self.store.latest_current_semester().await.map_err(|err| {
            tracing::warn!(error = %err, "Reading current semester failed");
            AdminError::QueryFailed
        })
    }

    /// The active next semester entry, if one was ever assigned.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if the query fails.
    pub async fn next_semester(&self) -> Result<Option<SemesterEntry>> {
        self.store.latest_next_semester().await.map_err(|err| {
            tracing::warn!(error = %err, "Reading next semester failed");
            AdminError::QueryFailed
        })
    }

    /// The active current and next terms, read in that order.
    pub(super) async fn active_terms(&self) -> Result<(Option<Term>, Option<Term>)> {
        let current = self.store.latest_current_semester().await?;
        let next = self.store.latest_next_semester().await?;
        Ok((current.map(|e| e.term), next.map(|e| e.term)))
    }
}
