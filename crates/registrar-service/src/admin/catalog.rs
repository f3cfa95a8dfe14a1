//! Reference data: account types, departments, grades, semester labels,
//! instructors and courses. One statement per operation, no guards.

use registrar_core::{
    AccountType, Course, CourseId, Department, DepartmentId, Grade, Instructor, InstructorId,
    Result, Semester,
};
use registrar_store::Store;

use super::{affected, listed, Administration};

impl<S: Store> Administration<S> {
    // =========================================================================
    // Account Types
    // =========================================================================

    /// Create an account type (e.g. "Student").
    ///
    /// # Errors
    ///
    /// `AdminError::Rejected` if the store refuses the insert (duplicate name).
    pub async fn create_account_type(&self, name: &str) -> Result<()> {
        self.store.insert_account_type(name).await?;
        Ok(())
    }

    /// List every account type; empty when there are none.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if the query fails.
    pub async fn list_account_types(&self) -> Result<Vec<AccountType>> {
        listed("account_type", self.store.list_account_types().await)
    }

    /// Delete an account type by name.
    ///
    /// # Errors
    ///
    /// `AdminError::NoRowsAffected` if no such account type exists.
    pub async fn delete_account_type(&self, name: &str) -> Result<()> {
        affected(self.store.delete_account_type(name).await?)
    }

    // =========================================================================
    // Departments
    // =========================================================================

    /// Create a department; the store assigns the id when `id` is `None`.
    ///
    /// # Errors
    ///
    /// `AdminError::Rejected` if the id is already taken.
    pub async fn create_department(&self, id: Option<DepartmentId>, name: &str) -> Result<()> {
        self.store.insert_department(id, name).await?;
        Ok(())
    }

    /// List every department.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if the query fails.
    pub async fn list_departments(&self) -> Result<Vec<Department>> {
        listed("department", self.store.list_departments().await)
    }

    /// Delete a department by id.
    ///
    /// # Errors
    ///
    /// `AdminError::NoRowsAffected` if no such department exists;
    /// `AdminError::Rejected` if courses still belong to it.
    pub async fn delete_department(&self, id: DepartmentId) -> Result<()> {
        affected(self.store.delete_department(id).await?)
    }

    // =========================================================================
    // Grades
    // =========================================================================

    /// Create a grade.
    ///
    /// # Errors
    ///
    /// `AdminError::Rejected` on a duplicate grade.
    pub async fn create_grade(&self, name: &str) -> Result<()> {
        self.store.insert_grade(name).await?;
        Ok(())
    }

    /// List every grade.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if the query fails.
    pub async fn list_grades(&self) -> Result<Vec<Grade>> {
        listed("grade", self.store.list_grades().await)
    }

    /// Delete a grade by name.
    ///
    /// # Errors
    ///
    /// `AdminError::NoRowsAffected` if no such grade exists.
    pub async fn delete_grade(&self, name: &str) -> Result<()> {
        affected(self.store.delete_grade(name).await?)
    }

    // =========================================================================
    // Semester labels
    // =========================================================================

    /// Create a semester label (e.g. "Fall").
    ///
    /// # Errors
    ///
    /// `AdminError::Rejected` on a duplicate label.
    pub async fn create_semester(&self, name: &str) -> Result<()> {
        self.store.insert_semester(name).await?;
        Ok(())
    }

    /// List every semester label.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if the query fails.
    pub async fn list_semesters(&self) -> Result<Vec<Semester>> {
        listed("semester", self.store.list_semesters().await)
    }

    /// Delete a semester label.
    ///
    /// # Errors
    ///
    /// `AdminError::NoRowsAffected` if the label does not exist;
    /// `AdminError::Rejected` if classes or semester logs still use it.
    pub async fn delete_semester(&self, name: &str) -> Result<()> {
        affected(self.store.delete_semester(name).await?)
    }

    // =========================================================================
    // Instructors
    // =========================================================================

    /// Create an instructor.
    ///
    /// # Errors
    ///
    /// `AdminError::Rejected` if the id or email is already in use.
    pub async fn create_instructor(&self, instructor: &Instructor) -> Result<()> {
        self.store.insert_instructor(instructor).await?;
        Ok(())
    }

    /// List every instructor.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if the query fails.
    pub async fn list_instructors(&self) -> Result<Vec<Instructor>> {
        listed("instructor", self.store.list_instructors().await)
    }

    /// Delete an instructor by id.
    ///
    /// # Errors
    ///
    /// `AdminError::NoRowsAffected` if no such instructor exists.
    pub async fn delete_instructor(&self, id: InstructorId) -> Result<()> {
        affected(self.store.delete_instructor(id).await?)
    }

    // =========================================================================
    // Courses
    // =========================================================================

    /// Create a course.
    ///
    /// # Errors
    ///
    /// `AdminError::Rejected` if the id is taken or the department is unknown.
    pub async fn create_course(&self, course: &Course) -> Result<()> {
        self.store.insert_course(course).await?;
        Ok(())
    }

    /// List every course.
    ///
    /// # Errors
    ///
    /// `AdminError::QueryFailed` if the query fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        listed("course", self.store.list_courses().await)
    }

    /// Replace the title, department, credits and cost of `course.id`.
    ///
    /// # Errors
    ///
    /// `AdminError::NoRowsAffected` if no course has that id.
    pub async fn update_course(&self, course: &Course) -> Result<()> {
        affected(self.store.update_course(course).await?)
    }

    /// Delete a course by id.
    ///
    /// # Errors
    ///
    /// `AdminError::NoRowsAffected` if no such course exists.
    pub async fn delete_course(&self, id: CourseId) -> Result<()> {
        affected(self.store.delete_course(id).await?)
    }
}
