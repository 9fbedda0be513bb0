//! Input validation for scheduling simulations.
//!
//! Checks process sets and policy parameters before a run. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Missing priorities (priority scheduling only)
//! - Non-positive round-robin quanta
//! - Process sets whose total schedule length does not fit in [`Time`]
//!
//! All problems are collected; a run never starts on partially valid input.

use crate::models::{Process, Time};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative service.
    NonPositiveBurst,
    /// Priority scheduling was given a process without a priority.
    MissingPriority,
    /// Round-robin quantum is zero or negative.
    NonPositiveQuantum,
    /// A generator range is empty or out of domain.
    InvalidRange,
    /// A metric was asked for a process no simulation has completed.
    Incomplete,
    /// Latest arrival plus total burst exceeds the range of [`Time`].
    Overflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every arrival time is >= 0
/// 3. Every burst time is > 0
/// 4. Latest arrival + sum of bursts fits in [`Time`], which bounds the clock
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    if schedule_bound(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::Overflow,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }

    into_result(errors)
}

/// Upper bound on any clock value a simulation of `processes` can reach.
fn schedule_bound(processes: &[Process]) -> Option<Time> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time.max(0)).max()?;
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)))
}

/// Validates that every process carries a priority.
pub fn validate_priorities(processes: &[Process]) -> ValidationResult {
    let errors = processes
        .iter()
        .filter(|p| p.priority.is_none())
        .map(|p| {
            ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.id),
            )
        })
        .collect();

    into_result(errors)
}

/// Validates a round-robin time quantum.
pub fn validate_quantum(quantum: Time) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        )])
    }
}

/// Merges several validation passes, keeping every error.
pub fn merge(results: impl IntoIterator<Item = ValidationResult>) -> ValidationResult {
    let errors: Vec<ValidationError> = results
        .into_iter()
        .filter_map(Result::err)
        .flatten()
        .collect();
    into_result(errors)
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
