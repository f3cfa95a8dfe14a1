//! Core types and business rules for the registrar.
//!
//! This crate provides the foundational types used throughout the registrar backend:
//!
//! - **Identifiers**: `DepartmentId`, `InstructorId`, `CourseId`, `ClassId`, `StudentId`
//! - **Catalog**: `AccountType`, `Department`, `Grade`, `Semester`, `Instructor`, `Course`
//! - **Terms**: `Term`, `SemesterEntry`
//! - **Classes**: `Class`, `NewClass`, `ClassKey`, `ClassChanges`
//! - **Students**: `Student`, `NewStudent`, `Standing`
//! - **Guards**: the temporal and standing checks run before semester-bounded writes
//!
//! # Money
//!
//! Course costs are decimals with at most two fractional digits. They are
//! stored as `i64` cents (`cost_cents`) to avoid floating point precision issues.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod class;
pub mod error;
pub mod guard;
pub mod ids;
pub mod student;
pub mod term;

pub use catalog::{AccountType, Course, Department, Grade, Instructor, Semester};
pub use class::{Class, ClassChanges, ClassKey, NewClass};
pub use error::{AdminError, Result, RuleViolation};
pub use ids::{ClassId, CourseId, DepartmentId, IdError, InstructorId, StudentId};
pub use student::{NewStudent, Standing, Student};
pub use term::{SemesterEntry, Term};
