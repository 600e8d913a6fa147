//! Field-level validation errors
//!
//! Every schema in the workspace reports failures through [`ValidationError`],
//! which always names the offending field(s) and the constraint each one
//! violated. Construction code gathers problems with a [`Violations`]
//! accumulator so that a single failure lists *every* bad field instead of
//! stopping at the first.

use std::fmt;
use thiserror::Error;

/// A single violated constraint on a named field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the field that failed
    pub field: String,
    /// Human-readable description of the violated constraint
    pub constraint: String,
}

impl FieldViolation {
    /// Create a new violation
    pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

/// One or more fields failed their constraints
///
/// A `ValidationError` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} validation error(s): {}", .violations.len(), render(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

fn render(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Create an error for a single field
    pub fn single(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation::new(field, constraint)],
        }
    }

    /// All violations, in the order they were found
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Names of the failing fields, in the order they were found
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    /// Whether the given field is among the failures
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Accumulates violations while a value is being checked
#[derive(Debug, Default)]
pub struct Violations {
    violations: Vec<FieldViolation>,
}

impl Violations {
    /// Start with no violations
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    pub fn push(&mut self, field: impl Into<String>, constraint: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, constraint));
    }

    /// Record a violation unless `ok` holds
    pub fn check(&mut self, ok: bool, field: &str, constraint: impl Into<String>) {
        if !ok {
            self.push(field, constraint);
        }
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Turn the accumulated violations into a result
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}
