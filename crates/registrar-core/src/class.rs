//! Class (course section) records.
//!
//! A class is addressed by its natural key `(course_id, section, year,
//! semester)` for updates and deletion; the numeric `ClassId` is only used at
//! creation time.

use serde::{Deserialize, Serialize};

use crate::ids::{ClassId, CourseId, InstructorId};
use crate::term::Term;

/// A scheduled section of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Class identifier.
    pub id: ClassId,
    /// Course this class is a section of.
    pub course_id: CourseId,
    /// Section label (e.g. "H").
    pub section: String,
    /// Teaching instructor.
    pub instructor: InstructorId,
    /// Year the class takes place.
    pub year: i32,
    /// Semester the class takes place.
    pub semester: String,
}

/// Input for creating a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClass {
    /// Explicit class id; the store assigns one when absent.
    #[serde(default)]
    pub id: Option<ClassId>,
    /// Course this class is a section of.
    pub course_id: CourseId,
    /// Section label.
    pub section: String,
    /// Teaching instructor.
    pub instructor: InstructorId,
    /// Year the class takes place.
    pub year: i32,
    /// Semester the class takes place.
    pub semester: String,
}

impl NewClass {
    /// The term the class would run in.
    #[must_use]
    pub fn term(&self) -> Term {
        Term::new(self.semester.clone(), self.year)
    }
}

/// Natural key of an existing class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassKey {
    /// Course id.
    pub course_id: CourseId,
    /// Section label.
    pub section: String,
    /// Year.
    pub year: i32,
    /// Semester name.
    pub semester: String,
}

impl ClassKey {
    /// The term the keyed class currently runs in.
    #[must_use]
    pub fn term(&self) -> Term {
        Term::new(self.semester.clone(), self.year)
    }
}

/// New values for an existing class. Every field is written; pass the
/// current value to keep it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassChanges {
    /// New section label.
    pub section: String,
    /// New instructor.
    pub instructor: InstructorId,
    /// New year.
    pub year: i32,
    /// New semester name.
    pub semester: String,
}

impl ClassChanges {
    /// The term the class is moved to.
    #[must_use]
    pub fn term(&self) -> Term {
        Term::new(self.semester.clone(), self.year)
    }
}
