//! Error types for the domain layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that occur while validating constraint input.
///
/// Always field-addressable: one error names exactly one offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValidationError {
    #[error("Field '{field}' must be an integer, got {actual}")]
    NotAnInteger { field: String, actual: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },
}

impl ValidationError {
    /// Creates a not-an-integer validation error.
    pub fn not_an_integer(field: impl Into<String>, actual: impl Into<String>) -> Self {
        ValidationError::NotAnInteger {
            field: field.into(),
            actual: actual.into(),
        }
    }

    /// Creates an out-of-range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::NotAnInteger { field, .. } => field,
            ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_an_integer_displays_correctly() {
        let err = ValidationError::not_an_integer("risk_tolerance", "5.5");
        assert_eq!(
            format!("{}", err),
            "Field 'risk_tolerance' must be an integer, got 5.5"
        );
    }

    #[test]
    fn out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("cost_sensitivity", 1, 10, 11);
        assert_eq!(
            format!("{}", err),
            "Field 'cost_sensitivity' must be between 1 and 10, got 11"
        );
    }

    #[test]
    fn field_returns_offending_field_name() {
        assert_eq!(
            ValidationError::not_an_integer("business_agility", "\"high\"").field(),
            "business_agility"
        );
        assert_eq!(
            ValidationError::out_of_range("risk_tolerance", 1, 10, 0).field(),
            "risk_tolerance"
        );
    }
}
