//! Profile module - Constraint input validation and materialization.

mod constraints;
mod validator;

pub use constraints::{Assumption, AssumptionSeverity, ConstraintProfile};
pub use validator::{
    validate_and_build, validate_and_build_json, ProfileValidation, RawProfileInput,
    ValidationResult, ValidationWarning,
};
