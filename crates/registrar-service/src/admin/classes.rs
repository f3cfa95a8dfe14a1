//! Class scheduling, bounded by the active semesters.

use registrar_core::{guard, Class, ClassChanges, ClassKey, NewClass, Result};
use registrar_store::Store;

use super::{affected, listed, Administration};

impl<S: Store> Administration<S> {
    /// Create a class in the current or next semester.
    ///
    /// # Errors
    ///
    /// - `RuleViolation::TermNotActive` if the class's term is neither the
    ///   current nor the next semester.
    /// - `AdminError::Rejected` if the store refuses the insert (unknown
    ///   course, instructor or semester, duplicate class).
    pub async fn create_class(&self, class: &NewClass) -> Result<()> {
        let target = class.term();
        let (current, next) = self.active_terms().await?;

        if let Err(violation) = guard::check_class_target(current.as_ref(), next.as_ref(), &target)
        {
            tracing::warn!(term = %target, rule = %violation, "Class creation rejected");
            return Err(violation.into());
        }

        self.store.insert_class(class).await?;
        tracing::debug!(
            course_id = %class.course_id,
            section = %class.section,
            term = %target,
            "Class created"
        );
        Ok(())
    }

    /// List every class.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if the query fails.
    pub async fn list_classes(&self) -> Result<Vec<Class>> {
        listed("class", self.store.list_classes().await)
    }

    /// List the classes of the active current semester; empty when none is assigned.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if a query fails.
    pub async fn list_current_classes(&self) -> Result<Vec<Class>> {
        match self.current_semester().await? {
            Some(entry) => listed("class", self.store.list_classes_in(&entry.term).await),
            None => Ok(Vec::new()),
        }
    }

    /// List the classes of the active next semester; empty when none is assigned.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if a query fails.
    pub async fn list_next_classes(&self) -> Result<Vec<Class>> {
        match self.next_semester().await? {
            Some(entry) => listed("class", self.store.list_classes_in(&entry.term).await),
            None => Ok(Vec::new()),
        }
    }

    /// Change the section, instructor or term of an existing class.
    ///
    /// Only the new term is checked: it must be the current or next semester.
    ///
    /// # Errors
    ///
    /// - `RuleViolation::TermNotActive` if the new term is not active.
    /// - `AdminError::NoRowsAffected` if `key` matches no class.
    /// - `AdminError::Rejected` if the store refuses the update.
    pub async fn update_class(&self, key: &ClassKey, changes: &ClassChanges) -> Result<()> {
        let target = changes.term();
        let (current, next) = self.active_terms().await?;

        if let Err(violation) = guard::check_class_target(current.as_ref(), next.as_ref(), &target)
        {
            tracing::warn!(term = %target, rule = %violation, "Class update rejected");
            return Err(violation.into());
        }

        affected(self.store.update_class(key, changes).await?)
    }

    /// Delete a class of the next semester.
    ///
    /// Classes of the current or past semesters cannot be deleted.
    ///
    /// # Errors
    ///
    /// - `RuleViolation::TermNotNext` if the class is not in the next semester.
    /// - `AdminError::NoRowsAffected` if `key` matches no class.
    pub async fn delete_class(&self, key: &ClassKey) -> Result<()> {
        let existing = key.term();
        let next = self.store.latest_next_semester().await?.map(|e| e.term);

        if let Err(violation) = guard::check_class_removal(next.as_ref(), &existing) {
            tracing::warn!(term = %existing, rule = %violation, "Class deletion rejected");
            return Err(violation.into());
        }

        affected(self.store.delete_class(key).await?)
    }
}
