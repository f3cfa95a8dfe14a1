//! SQLite storage implementation.
//!
//! This module provides the `SqliteStore` implementation of the `Store` trait.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use registrar_core::{
    AccountType, Class, ClassChanges, ClassId, ClassKey, Course, CourseId, Department,
    DepartmentId, Grade, Instructor, InstructorId, NewClass, NewStudent, Semester, SemesterEntry,
    Standing, Student, StudentId, Term,
};

use crate::error::Result;
use crate::Store;

/// Pool size for file databases when none is configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// SQLite-backed storage implementation.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open or create a database file at the given path and apply migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        Self::connect_with(options, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Open a fresh in-memory database and apply migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created or migrated.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        Self::connect_with(options, 1).await
    }

    /// Connect using a `sqlite:` URL and apply migrations.
    ///
    /// In-memory URLs always get a single connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the database cannot be opened
    /// or migrated.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let max_connections = if is_memory_url(url) {
            1
        } else {
            max_connections.max(1)
        };

        Self::connect_with(options, max_connections).await
    }

    async fn connect_with(options: SqliteConnectOptions, max_connections: u32) -> Result<Self> {
        // An in-memory database is dropped with its last connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!(max_connections, "SQLite store ready");

        Ok(Self { pool })
    }

    /// The underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

// =============================================================================
// Row decoding
// =============================================================================

fn account_type_from_row(row: &SqliteRow) -> Result<AccountType> {
    Ok(AccountType {
        name: row.try_get("Name")?,
    })
}

fn department_from_row(row: &SqliteRow) -> Result<Department> {
    Ok(Department {
        id: DepartmentId::new(row.try_get("Id")?),
        name: row.try_get("Name")?,
    })
}

fn grade_from_row(row: &SqliteRow) -> Result<Grade> {
    Ok(Grade {
        name: row.try_get("Name")?,
    })
}

fn semester_from_row(row: &SqliteRow) -> Result<Semester> {
    Ok(Semester {
        name: row.try_get("Name")?,
    })
}

fn semester_entry_from_row(row: &SqliteRow) -> Result<SemesterEntry> {
    Ok(SemesterEntry {
        term: Term::new(row.try_get::<String, _>("Name")?, row.try_get("Year")?),
        date_added: row.try_get::<DateTime<Utc>, _>("DateAdded")?,
    })
}

fn instructor_from_row(row: &SqliteRow) -> Result<Instructor> {
    Ok(Instructor {
        id: InstructorId::new(row.try_get("Id")?),
        name: row.try_get("Name")?,
        email: row.try_get("Email")?,
    })
}

fn course_from_row(row: &SqliteRow) -> Result<Course> {
    Ok(Course {
        id: CourseId::new(row.try_get("Id")?),
        title: row.try_get("Title")?,
        dept: DepartmentId::new(row.try_get("Dept")?),
        credits: row.try_get("Credits")?,
        cost_cents: row.try_get("CostCents")?,
    })
}

fn class_from_row(row: &SqliteRow) -> Result<Class> {
    Ok(Class {
        id: ClassId::new(row.try_get("Id")?),
        course_id: CourseId::new(row.try_get("CourseId")?),
        section: row.try_get("Section")?,
        instructor: InstructorId::new(row.try_get("Instructor")?),
        year: row.try_get("Year")?,
        semester: row.try_get("Semester")?,
    })
}

fn student_from_row(row: &SqliteRow) -> Result<Student> {
    Ok(Student {
        id: StudentId::new(row.try_get("Id")?),
        name: row.try_get("Name")?,
        credits: row.try_get("Credits")?,
        registered: row.try_get("Registered")?,
        probation: row.try_get("Probation")?,
        ssn: row.try_get("SSN")?,
    })
}

fn decode_all<T>(rows: &[SqliteRow], decode: fn(&SqliteRow) -> Result<T>) -> Result<Vec<T>> {
    rows.iter().map(decode).collect()
}

#[async_trait]
impl Store for SqliteStore {
    // =========================================================================
    // Account Types
    // =========================================================================

    async fn insert_account_type(&self, name: &str) -> Result<()> {
        sqlx::query("INSERT INTO AccountType (Name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_account_types(&self) -> Result<Vec<AccountType>> {
        let rows = sqlx::query("SELECT Name FROM AccountType ORDER BY Name")
            .fetch_all(&self.pool)
            .await?;
        decode_all(&rows, account_type_from_row)
    }

    async fn delete_account_type(&self, name: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM AccountType WHERE Name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Departments
    // =========================================================================

    async fn insert_department(&self, id: Option<DepartmentId>, name: &str) -> Result<()> {
        let query = match id {
            Some(id) => sqlx::query("INSERT INTO Department (Id, Name) VALUES (?1, ?2)")
                .bind(id.get())
                .bind(name),
            None => sqlx::query("INSERT INTO Department (Name) VALUES (?1)").bind(name),
        };
        query.execute(&self.pool).await?;
        Ok(())
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        let rows = sqlx::query("SELECT Id, Name FROM Department ORDER BY Id")
            .fetch_all(&self.pool)
            .await?;
        decode_all(&rows, department_from_row)
    }

    async fn delete_department(&self, id: DepartmentId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM Department WHERE Id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Grades
    // =========================================================================

    async fn insert_grade(&self, name: &str) -> Result<()> {
        sqlx::query("INSERT INTO Grade (Name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_grades(&self) -> Result<Vec<Grade>> {
        let rows = sqlx::query("SELECT Name FROM Grade ORDER BY Name")
            .fetch_all(&self.pool)
            .await?;
        decode_all(&rows, grade_from_row)
    }

    async fn delete_grade(&self, name: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM Grade WHERE Name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Semesters
    // =========================================================================

    async fn insert_semester(&self, name: &str) -> Result<()> {
        sqlx::query("INSERT INTO Semester (Name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_semesters(&self) -> Result<Vec<Semester>> {
        let rows = sqlx::query("SELECT Name FROM Semester ORDER BY Name")
            .fetch_all(&self.pool)
            .await?;
        decode_all(&rows, semester_from_row)
    }

    async fn delete_semester(&self, name: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM Semester WHERE Name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn append_current_semester(&self, term: &Term, date_added: DateTime<Utc>) -> Result<()> {
        sqlx::query("INSERT INTO CurrentSemester (Name, Year, DateAdded) VALUES (?1, ?2, ?3)")
            .bind(&term.name)
            .bind(term.year)
            .bind(date_added)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn append_next_semester(&self, term: &Term, date_added: DateTime<Utc>) -> Result<()> {
        sqlx::query("INSERT INTO NextSemester (Name, Year, DateAdded) VALUES (?1, ?2, ?3)")
            .bind(&term.name)
            .bind(term.year)
            .bind(date_added)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn latest_current_semester(&self) -> Result<Option<SemesterEntry>> {
        sqlx::query(
            "SELECT Name, Year, DateAdded FROM CurrentSemester
             ORDER BY DateAdded DESC, Id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?
        .as_ref()
        .map(semester_entry_from_row)
        .transpose()
    }

    async fn latest_next_semester(&self) -> Result<Option<SemesterEntry>> {
        sqlx::query(
            "SELECT Name, Year, DateAdded FROM NextSemester
             ORDER BY DateAdded DESC, Id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?
        .as_ref()
        .map(semester_entry_from_row)
        .transpose()
    }

    // =========================================================================
    // Instructors
    // =========================================================================

    async fn insert_instructor(&self, instructor: &Instructor) -> Result<()> {
        sqlx::query("INSERT INTO Instructor (Id, Name, Email) VALUES (?1, ?2, ?3)")
            .bind(instructor.id.get())
            .bind(&instructor.name)
            .bind(&instructor.email)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_instructors(&self) -> Result<Vec<Instructor>> {
        let rows = sqlx::query("SELECT Id, Name, Email FROM Instructor ORDER BY Id")
            .fetch_all(&self.pool)
            .await?;
        decode_all(&rows, instructor_from_row)
    }

    async fn delete_instructor(&self, id: InstructorId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM Instructor WHERE Id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Courses
    // =========================================================================

    async fn insert_course(&self, course: &Course) -> Result<()> {
        sqlx::query(
            "INSERT INTO Course (Id, Title, Dept, Credits, CostCents)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(course.id.get())
        .bind(&course.title)
        .bind(course.dept.get())
        .bind(course.credits)
        .bind(course.cost_cents)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        let rows =
            sqlx::query("SELECT Id, Title, Dept, Credits, CostCents FROM Course ORDER BY Id")
                .fetch_all(&self.pool)
                .await?;
        decode_all(&rows, course_from_row)
    }

    async fn update_course(&self, course: &Course) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE Course
             SET Title = ?1, Dept = ?2, Credits = ?3, CostCents = ?4
             WHERE Id = ?5",
        )
        .bind(&course.title)
        .bind(course.dept.get())
        .bind(course.credits)
        .bind(course.cost_cents)
        .bind(course.id.get())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_course(&self, id: CourseId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM Course WHERE Id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Classes
    // =========================================================================

    async fn insert_class(&self, class: &NewClass) -> Result<()> {
        let query = match class.id {
            Some(id) => sqlx::query(
                "INSERT INTO Class (Id, CourseId, Section, Instructor, Year, Semester)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .bind(id.get()),
            None => sqlx::query(
                "INSERT INTO Class (CourseId, Section, Instructor, Year, Semester)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            ),
        };
        query
            .bind(class.course_id.get())
            .bind(&class.section)
            .bind(class.instructor.get())
            .bind(class.year)
            .bind(&class.semester)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_classes(&self) -> Result<Vec<Class>> {
        let rows = sqlx::query(
            "SELECT Id, CourseId, Section, Instructor, Year, Semester FROM Class ORDER BY Id",
        )
        .fetch_all(&self.pool)
        .await?;
        decode_all(&rows, class_from_row)
    }

    async fn list_classes_in(&self, term: &Term) -> Result<Vec<Class>> {
        let rows = sqlx::query(
            "SELECT Id, CourseId, Section, Instructor, Year, Semester FROM Class
             WHERE Year = ?1 AND Semester = ?2
             ORDER BY CourseId, Section",
        )
        .bind(term.year)
        .bind(&term.name)
        .fetch_all(&self.pool)
        .await?;
        decode_all(&rows, class_from_row)
    }

    async fn update_class(&self, key: &ClassKey, changes: &ClassChanges) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE Class
             SET Section = ?1, Instructor = ?2, Year = ?3, Semester = ?4
             WHERE CourseId = ?5 AND Section = ?6 AND Year = ?7 AND Semester = ?8",
        )
        .bind(&changes.section)
        .bind(changes.instructor.get())
        .bind(changes.year)
        .bind(&changes.semester)
        .bind(key.course_id.get())
        .bind(&key.section)
        .bind(key.year)
        .bind(&key.semester)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_class(&self, key: &ClassKey) -> Result<u64> {
        let result = sqlx::query(
            "DELETE FROM Class
             WHERE CourseId = ?1 AND Section = ?2 AND Year = ?3 AND Semester = ?4",
        )
        .bind(key.course_id.get())
        .bind(&key.section)
        .bind(key.year)
        .bind(&key.semester)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Students
    // =========================================================================

    async fn insert_student(&self, student: &NewStudent) -> Result<()> {
        sqlx::query(
            "INSERT INTO Student (Id, Name, Credits, Registered, Probation, SSN)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(student.id.get())
        .bind(&student.name)
        .bind(0_i32)
        .bind(true)
        .bind(false)
        .bind(student.ssn)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        let rows = sqlx::query(
            "SELECT Id, Name, Credits, Registered, Probation, SSN FROM Student ORDER BY Id",
        )
        .fetch_all(&self.pool)
        .await?;
        decode_all(&rows, student_from_row)
    }

    async fn student_standing(&self, id: StudentId) -> Result<Option<Standing>> {
        let row = sqlx::query("SELECT Registered, Probation FROM Student WHERE Id = ?1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Standing {
                registered: row.try_get("Registered")?,
                probation: row.try_get("Probation")?,
            })),
            None => Ok(None),
        }
    }

    async fn set_registered(&self, id: StudentId, registered: bool) -> Result<u64> {
        let result = sqlx::query("UPDATE Student SET Registered = ?1 WHERE Id = ?2")
            .bind(registered)
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn set_probation(&self, id: StudentId, probation: bool) -> Result<u64> {
        let result = sqlx::query("UPDATE Student SET Probation = ?1 WHERE Id = ?2")
            .bind(probation)
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
