//! Error types for registrar operations.

/// Result type for registrar operations.
pub type Result<T> = std::result::Result<T, AdminError>;

/// Errors an administrative operation resolves to.
///
/// Failures are values: the façade never panics or retries, it hands one of
/// these back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminError {
    /// The store rejected the statement (constraint violation, type mismatch, ...).
    ///
    /// The message is the store's own, passed through verbatim.
    #[error("{0}")]
    Rejected(String),

    /// A delete or update matched zero rows.
    #[error("No rows affected")]
    NoRowsAffected,

    /// A business rule checked before the write failed.
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    /// A listing query failed. Carries no detail.
    #[error("query failed")]
    QueryFailed,
}

impl AdminError {
    /// The human-readable detail attached to this failure, if any.
    ///
    /// Listing failures have no detail.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::QueryFailed => None,
            other => Some(other.to_string()),
        }
    }
}

/// Business rules enforced before semester-bounded or standing-bounded writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    /// The requested next semester is the active current semester.
    #[error("Next semester cannot be current semester")]
    NextIsCurrent,

    /// A class targets a term other than the active current or next semester.
    #[error("Desired year or semester does not belong to the current or next semesters")]
    TermNotActive,

    /// A class outside the active next semester cannot be deleted.
    #[error("Year or semester does not belong to the next semester")]
    TermNotNext,

    /// No student has the given id.
    #[error("No matching id")]
    NoMatchingId,

    /// Graduation requested for a student who already left.
    #[error("Not registered as a student anymore")]
    GraduationNotRegistered,

    /// Graduation requested for a student on probation.
    #[error("Student on probation")]
    GraduationOnProbation,

    /// Probation change requested for a student who already left.
    #[error("Student not registered anymore")]
    ProbationNotRegistered,

    /// Probation requested for a student already on probation.
    #[error("Student already on probation")]
    AlreadyOnProbation,

    /// Probation removal requested for a student not on probation.
    #[error("Student not on probation")]
    NotOnProbation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_passes_store_message_through() {
        let err = AdminError::Rejected("UNIQUE constraint failed: AccountType.Name".into());
        assert_eq!(
            err.detail().as_deref(),
            Some("UNIQUE constraint failed: AccountType.Name")
        );
    }

    #[test]
    fn listing_failure_has_no_detail() {
        assert_eq!(AdminError::QueryFailed.detail(), None);
    }

    #[test]
    fn rule_violation_detail_is_the_fixed_literal() {
        let err = AdminError::from(RuleViolation::TermNotActive);
        assert_eq!(
            err.detail().as_deref(),
            Some("Desired year or semester does not belong to the current or next semesters")
        );
        assert_eq!(
            AdminError::NoRowsAffected.detail().as_deref(),
            Some("No rows affected")
        );
    }
}
