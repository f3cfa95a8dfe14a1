//! Terms and the current/next semester logs.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A semester label paired with a year, e.g. Spring 2021.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    /// Semester name; must exist in the semester catalog.
    #[serde(rename = "semester")]
    pub name: String,
    /// Calendar year.
    pub year: i32,
}

impl Term {
    /// Create a new term.
    #[must_use]
    pub fn new(name: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            year,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.year)
    }
}

/// One row of the append-only current or next semester log.
///
/// The active entry of a log is the one with the latest `date_added`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterEntry {
    /// The term this entry designates.
    #[serde(flatten)]
    pub term: Term,
    /// When the entry was appended.
    pub date_added: DateTime<Utc>,
}
