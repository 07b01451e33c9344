//! Error types for interactive modification sessions.
//!
//! Unlike malformed organizational input, these represent invalid API
//! usage and are raised synchronously, leaving session state unchanged.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Invalid use of the modification session API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidValue(#[from] ValidationError),

    #[error("Modification step {index} is out of range; history holds {len} steps")]
    StepOutOfRange { index: usize, len: usize },

    #[error("Batch modification list is empty")]
    EmptyBatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_out_of_range_displays_bounds() {
        let err = SessionError::StepOutOfRange { index: 5, len: 2 };
        assert_eq!(
            format!("{}", err),
            "Modification step 5 is out of range; history holds 2 steps"
        );
    }

    #[test]
    fn invalid_value_wraps_validation_error() {
        let err: SessionError = ValidationError::out_of_range("risk_tolerance", 1, 10, 15).into();
        assert!(format!("{}", err).contains("risk_tolerance"));
    }
}
