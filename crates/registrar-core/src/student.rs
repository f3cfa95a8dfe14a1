//! Student records and standing.

use serde::{Deserialize, Serialize};

use crate::ids::StudentId;

/// A student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Student identifier.
    pub id: StudentId,
    /// Full name.
    pub name: String,
    /// Credits earned.
    pub credits: i32,
    /// Whether the student is still enrolled; cleared on graduation.
    pub registered: bool,
    /// Whether the student is on academic probation.
    pub probation: bool,
    /// Social security number.
    pub ssn: i64,
}

/// Input for creating a student.
///
/// New students start with zero credits, registered and not on probation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    /// Student identifier.
    pub id: StudentId,
    /// Full name.
    pub name: String,
    /// Social security number.
    pub ssn: i64,
}

/// The flags graduation and probation decisions depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Still enrolled.
    pub registered: bool,
    /// On academic probation.
    pub probation: bool,
}
