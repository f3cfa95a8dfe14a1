//! Student records, graduation and probation.

use registrar_core::{guard, NewStudent, Result, Student, StudentId};
use registrar_store::Store;

use super::{affected, listed, Administration};

impl<S: Store> Administration<S> {
    /// Create a student: zero credits, registered, not on probation.
    ///
    /// # Errors
    ///
    /// `AdminError::Rejected` if the id is already taken.
    pub async fn create_student(&self, student: &NewStudent) -> Result<()> {
        self.store.insert_student(student).await?;
        Ok(())
    }

    /// List every student.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if the query fails.
    pub async fn list_students(&self) -> Result<Vec<Student>> {
        listed("student", self.store.list_students().await)
    }

    /// Graduate a registered student who is not on probation.
    ///
    /// # Errors
    ///
    /// In order: `NoMatchingId`, `GraduationNotRegistered`,
    /// `GraduationOnProbation`; then `NoRowsAffected` if the update matched nothing.
    pub async fn assign_graduation(&self, id: StudentId) -> Result<()> {
        let standing = self.store.student_standing(id).await?;

        if let Err(violation) = guard::check_graduation(standing) {
            tracing::warn!(student_id = %id, rule = %violation, "Graduation rejected");
            return Err(violation.into());
        }

        affected(self.store.set_registered(id, false).await?)?;
        tracing::info!(student_id = %id, "Student graduated");
        Ok(())
    }

    /// Place a registered student on probation.
    ///
    /// # Errors
    ///
    /// In order: `NoMatchingId`, `ProbationNotRegistered`,
    /// `AlreadyOnProbation`; then `NoRowsAffected` if the update matched nothing.
    pub async fn assign_probation(&self, id: StudentId) -> Result<()> {
        let standing = self.store.student_standing(id).await?;

        if let Err(violation) = guard::check_probation(standing) {
            tracing::warn!(student_id = %id, rule = %violation, "Probation rejected");
            return Err(violation.into());
        }

        affected(self.store.set_probation(id, true).await?)?;
        tracing::info!(student_id = %id, "Student placed on probation");
        Ok(())
    }

    /// Lift a registered student's probation.
    ///
    /// # Errors
    ///
    /// In order: `NoMatchingId`, `ProbationNotRegistered`, `NotOnProbation`;
    /// then `NoRowsAffected` if the update matched nothing.
    pub async fn remove_probation(&self, id: StudentId) -> Result<()> {
        let standing = self.store.student_standing(id).await?;

        if let Err(violation) = guard::check_probation_removal(standing) {
            tracing::warn!(student_id = %id, rule = %violation, "Probation removal rejected");
            return Err(violation.into());
        }

        affected(self.store.set_probation(id, false).await?)?;
        tracing::info!(student_id = %id, "Student probation lifted");
        Ok(())
    }
}
