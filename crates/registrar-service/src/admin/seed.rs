//! Bootstrap data for a fresh database.
//!
//! Seeding goes through the façade, so every guard applies. Each step is
//! independent: a rejected step is logged and counted, and the next one runs.

use registrar_core::{
    ClassId, Course, CourseId, DepartmentId, Instructor, InstructorId, NewClass, NewStudent,
    Result, StudentId, Term,
};
use registrar_store::Store;

use super::Administration;

/// Outcome of a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Steps that were written.
    pub applied: usize,
    /// Steps that failed, typically because the row already exists.
    pub rejected: usize,
}

impl SeedSummary {
    fn record(&mut self, step: &str, result: Result<()>) {
        match result {
            Ok(()) => self.applied += 1,
            Err(err) => {
                tracing::debug!(step, error = %err, "Seed step skipped");
                self.rejected += 1;
            }
        }
    }
}

/// Populate the store with the default catalog, semesters, staff and students.
pub async fn seed<S: Store>(admin: &Administration<S>) -> SeedSummary {
    let mut summary = SeedSummary::default();

    for name in ["Administrator", "Instructor", "Student"] {
        summary.record("account_type", admin.create_account_type(name).await);
    }

    for (id, name) in [
        (1, "Computer Science"),
        (2, "Electrical Engineering"),
        (3, "Computer Engineering"),
    ] {
        summary.record(
            "department",
            admin
                .create_department(Some(DepartmentId::new(id)), name)
                .await,
        );
    }

    for name in ["A", "B", "C", "D", "F"] {
        summary.record("grade", admin.create_grade(name).await);
    }

    for name in ["Winter", "Spring", "Summer", "Fall"] {
        summary.record("semester", admin.create_semester(name).await);
    }

    summary.record(
        "current_semester",
        admin
            .assign_current_semester(&Term::new("Spring", 2021))
            .await,
    );
    summary.record(
        "next_semester",
        admin.assign_next_semester(&Term::new("Fall", 2021)).await,
    );

    for (id, name, email) in [
        (1, "John Connor", "john.anthony.connor@gmail.com"),
        (2, "Hesham Auda", "hauda@ccny.cuny.edu"),
        (3, "Akbar Islam", "nysaifulislam@gmail.com"),
        (4, "Akira Kawaguchi", "akawaguchi@ccny.cuny.edu"),
    ] {
        let instructor = Instructor {
            id: InstructorId::new(id),
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        };
        summary.record("instructor", admin.create_instructor(&instructor).await);
    }

    for (id, title) in [
        (1, "Database Systems"),
        (2, "Data Structures"),
        (3, "Algorithms"),
    ] {
        let course = Course {
            id: CourseId::new(id),
            title: title.to_string(),
            dept: DepartmentId::new(1),
            credits: 3,
            cost_cents: 100_000,
        };
        summary.record("course", admin.create_course(&course).await);
    }

    for (id, section, instructor, semester) in [
        (32157, "H", 1, "Spring"),
        (32179, "M", 2, "Spring"),
        (34280, "A", 4, "Fall"),
    ] {
        let class = NewClass {
            id: Some(ClassId::new(id)),
            course_id: CourseId::new(1),
            section: section.to_string(),
            instructor: InstructorId::new(instructor),
            year: 2021,
            semester: semester.to_string(),
        };
        summary.record("class", admin.create_class(&class).await);
    }

    for (id, name, ssn) in [
        (123, "Saiful Islam", 123_456_789),
        (456, "Akbar Haider", 111_111_111),
    ] {
        let student = NewStudent {
            id: StudentId::new(id),
            name: name.to_string(),
            ssn,
        };
        summary.record("student", admin.create_student(&student).await);
    }

    tracing::info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "Seed finished"
    );

    summary
}
