//! Checks run between the read and the write of a guard-then-write operation.
//!
//! Each function takes what the read step returned and decides whether the
//! write may proceed. They are pure: fetching the active semester entries or
//! a student's standing is the caller's job.
//!
//! An absent log entry never matches a candidate term.

use crate::error::RuleViolation;
use crate::student::Standing;
use crate::term::Term;

/// Check a candidate for the next semester against the active current semester.
///
/// # Errors
///
/// `RuleViolation::NextIsCurrent` if the candidate is the current semester.
pub fn check_next_semester(current: Option<&Term>, candidate: &Term) -> Result<(), RuleViolation> {
    if current == Some(candidate) {
        return Err(RuleViolation::NextIsCurrent);
    }
    Ok(())
}

/// Check that a class being created or moved targets an active term.
///
/// # Errors
///
/// `RuleViolation::TermNotActive` unless the target is the current or the next semester.
pub fn check_class_target(
    current: Option<&Term>,
    next: Option<&Term>,
    target: &Term,
) -> Result<(), RuleViolation> {
    if current == Some(target) || next == Some(target) {
        return Ok(());
    }
    Err(RuleViolation::TermNotActive)
}

/// Check that an existing class may be deleted.
///
/// Only classes of the next semester can be deleted; past and current classes
/// are kept.
///
/// # Errors
///
/// `RuleViolation::TermNotNext` unless the class runs in the next semester.
pub fn check_class_removal(next: Option<&Term>, existing: &Term) -> Result<(), RuleViolation> {
    if next == Some(existing) {
        return Ok(());
    }
    Err(RuleViolation::TermNotNext)
}

/// Check that a student may graduate.
///
/// # Errors
///
/// In order: `NoMatchingId`, `GraduationNotRegistered`, `GraduationOnProbation`.
pub fn check_graduation(standing: Option<Standing>) -> Result<(), RuleViolation> {
    let standing = standing.ok_or(RuleViolation::NoMatchingId)?;
    if !standing.registered {
        return Err(RuleViolation::GraduationNotRegistered);
    }
    if standing.probation {
        return Err(RuleViolation::GraduationOnProbation);
    }
    Ok(())
}

/// Check that a student may be placed on probation.
///
/// # Errors
///
/// In order: `NoMatchingId`, `ProbationNotRegistered`, `AlreadyOnProbation`.
pub fn check_probation(standing: Option<Standing>) -> Result<(), RuleViolation> {
    let standing = standing.ok_or(RuleViolation::NoMatchingId)?;
    if !standing.registered {
        return Err(RuleViolation::ProbationNotRegistered);
    }
    if standing.probation {
        return Err(RuleViolation::AlreadyOnProbation);
    }
    Ok(())
}

/// Check that a student's probation may be lifted.
///
/// # Errors
///
/// In order: `NoMatchingId`, `ProbationNotRegistered`, `NotOnProbation`.
pub fn check_probation_removal(standing: Option<Standing>) -> Result<(), RuleViolation> {
    let standing = standing.ok_or(RuleViolation::NoMatchingId)?;
    if !standing.registered {
        return Err(RuleViolation::ProbationNotRegistered);
    }
    if !standing.probation {
        return Err(RuleViolation::NotOnProbation);
    }
    Ok(())
}
