//! SQLite storage layer for the registrar.
//!
//! This crate is the query executor of the registrar: every `Store` method
//! issues exactly one parameterized statement and hands back rows, an
//! affected-row count, or the database's rejection message.
//!
//! # Architecture
//!
//! The schema lives in the embedded migrations and has one table per entity:
//!
//! - `AccountType`, `Grade`, `Semester`: name-keyed reference data
//! - `Department`, `Instructor`, `Course`, `Student`: id-keyed records
//! - `Class`: course sections, unique on `(CourseId, Section, Year, Semester)`
//! - `CurrentSemester`, `NextSemester`: append-only logs whose latest row is active
//!
//! Business rules are not enforced here; callers check them before writing.
//!
//! # Example
//!
//! ```no_run
//! use registrar_store::{SqliteStore, Store};
//!
//! # async fn example() -> registrar_store::Result<()> {
//! let store = SqliteStore::open("/tmp/registrar.db").await?;
//!
//! store.insert_account_type("Administrator").await?;
//! let types = store.list_account_types().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod sqlite;

pub use error::{Result, StoreError};
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use registrar_core::{
    AccountType, Class, ClassChanges, ClassKey, Course, CourseId, Department, DepartmentId,
    Grade, Instructor, InstructorId, NewClass, NewStudent, Semester, SemesterEntry, Standing,
    Student, StudentId, Term,
};

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer so the administrative façade can be
/// driven by any implementation. Mutating methods that target existing rows
/// return the affected-row count and leave its interpretation to the caller.
#[async_trait]
pub trait Store: Send + Sync {
    // =========================================================================
    // Account Types
    // =========================================================================

    /// Insert an account type.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the name already exists.
    async fn insert_account_type(&self, name: &str) -> Result<()>;

    /// List all account types.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn list_account_types(&self) -> Result<Vec<AccountType>>;

    /// Delete an account type by name, returning the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is rejected.
    async fn delete_account_type(&self, name: &str) -> Result<u64>;

    // =========================================================================
    // Departments
    // =========================================================================

    /// Insert a department. Without an id the database assigns one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the id already exists.
    async fn insert_department(&self, id: Option<DepartmentId>, name: &str) -> Result<()>;

    /// List all departments.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn list_departments(&self) -> Result<Vec<Department>>;

    /// Delete a department by id, returning the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is rejected (e.g. courses still reference it).
    async fn delete_department(&self, id: DepartmentId) -> Result<u64>;

    // =========================================================================
    // Grades
    // =========================================================================

    /// Insert a grade.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the grade already exists.
    async fn insert_grade(&self, name: &str) -> Result<()>;

    /// List all grades.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn list_grades(&self) -> Result<Vec<Grade>>;

    /// Delete a grade by name, returning the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is rejected.
    async fn delete_grade(&self, name: &str) -> Result<u64>;

    // =========================================================================
    // Semesters
    // =========================================================================

    /// Insert a semester label.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the label already exists.
    async fn insert_semester(&self, name: &str) -> Result<()>;

    /// List all semester labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn list_semesters(&self) -> Result<Vec<Semester>>;

    /// Delete a semester label, returning the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is rejected (e.g. classes still reference it).
    async fn delete_semester(&self, name: &str) -> Result<u64>;

    /// Append an entry to the current semester log.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the semester label does not exist.
    async fn append_current_semester(&self, term: &Term, date_added: DateTime<Utc>) -> Result<()>;

    /// Append an entry to the next semester log.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the semester label does not exist.
    async fn append_next_semester(&self, term: &Term, date_added: DateTime<Utc>) -> Result<()>;

    /// Get the active (most recently added) current semester entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn latest_current_semester(&self) -> Result<Option<SemesterEntry>>;

    /// Get the active (most recently added) next semester entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn latest_next_semester(&self) -> Result<Option<SemesterEntry>>;

    // =========================================================================
    // Instructors
    // =========================================================================

    /// Insert an instructor.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the id or email is already taken.
    async fn insert_instructor(&self, instructor: &Instructor) -> Result<()>;

    /// List all instructors.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn list_instructors(&self) -> Result<Vec<Instructor>>;

    /// Delete an instructor by id, returning the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is rejected.
    async fn delete_instructor(&self, id: InstructorId) -> Result<u64>;

    // =========================================================================
    // Courses
    // =========================================================================

    /// Insert a course.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the id exists or the department does not.
    async fn insert_course(&self, course: &Course) -> Result<()>;

    /// List all courses.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// Overwrite the title, department, credits and cost of the course with
    /// `course.id`, returning the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is rejected.
    async fn update_course(&self, course: &Course) -> Result<u64>;

    /// Delete a course by id, returning the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is rejected.
    async fn delete_course(&self, id: CourseId) -> Result<u64>;

    // =========================================================================
    // Classes
    // =========================================================================

    /// Insert a class. Without an id the database assigns one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if a referenced row is missing or the
    /// class already exists.
    async fn insert_class(&self, class: &NewClass) -> Result<()>;

    /// List all classes.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn list_classes(&self) -> Result<Vec<Class>>;

    /// List the classes running in `term`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn list_classes_in(&self, term: &Term) -> Result<Vec<Class>>;

    /// Apply `changes` to the class identified by `key`, returning the
    /// affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is rejected.
    async fn update_class(&self, key: &ClassKey, changes: &ClassChanges) -> Result<u64>;

    /// Delete the class identified by `key`, returning the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is rejected.
    async fn delete_class(&self, key: &ClassKey) -> Result<u64>;

    // =========================================================================
    // Students
    // =========================================================================

    /// Insert a student with zero credits, registered and not on probation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the id already exists.
    async fn insert_student(&self, student: &NewStudent) -> Result<()>;

    /// List all students.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn list_students(&self) -> Result<Vec<Student>>;

    /// Read the registration and probation flags of a student.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn student_standing(&self, id: StudentId) -> Result<Option<Standing>>;

    /// Set the registered flag, returning the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is rejected.
    async fn set_registered(&self, id: StudentId, registered: bool) -> Result<u64>;

    /// Set the probation flag, returning the affected-row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement is rejected.
    async fn set_probation(&self, id: StudentId, probation: bool) -> Result<u64>;
}
