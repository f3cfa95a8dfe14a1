//! Catalog records: the reference data administrators maintain.
//!
//! None of these records carry lifecycle state. They are created, listed and
//! deleted; `Course` is the only one that can also be updated in place.

use serde::{Deserialize, Serialize};

use crate::ids::{CourseId, DepartmentId, InstructorId};

/// A kind of account (e.g. Administrator, Instructor, Student).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountType {
    /// Unique account type name.
    pub name: String,
}

/// An academic department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department identifier.
    pub id: DepartmentId,
    /// Display name (e.g. "Computer Science").
    pub name: String,
}

/// A letter grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    /// Unique grade name (e.g. "A").
    pub name: String,
}

/// A semester label, independent of year (e.g. "Spring").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Unique semester name.
    pub name: String,
}

/// An instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    /// Instructor identifier.
    pub id: InstructorId,
    /// Full name, if known.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address; unique across instructors when present.
    #[serde(default)]
    pub email: Option<String>,
}

/// A course offered by a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier.
    pub id: CourseId,
    /// Course title.
    pub title: String,
    /// Owning department.
    pub dept: DepartmentId,
    /// Credit hours.
    pub credits: i32,
    /// Cost in cents.
    pub cost_cents: i64,
}

impl Course {
    /// Format the cost as dollars with two fractional digits.
    #[must_use]
    pub fn cost_formatted(&self) -> String {
        let sign = if self.cost_cents < 0 { "-" } else { "" };
        let cents = self.cost_cents.unsigned_abs();
        format!("{sign}${}.{:02}", cents / 100, cents % 100)
    }
}
