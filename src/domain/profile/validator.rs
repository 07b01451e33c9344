//! Constraint profile validator - the unknown-typed input boundary.
//!
//! Malformed business input never raises: invalid fields are reported as
//! field-scoped errors and defaulted, absent fields are defaulted with an
//! assumption disclosure, and a completely uninterpretable input degrades
//! to an all-defaults profile with a single high-severity assumption.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::conflicts::CONFLICT_RULES;
use crate::domain::foundation::{ConstraintField, ConstraintValue, ValidationError};

use super::{Assumption, ConstraintProfile};

/// Raw, unknown-typed input: up to six named fields of arbitrary JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProfileInput {
    fields: BTreeMap<String, Value>,
}

impl RawProfileInput {
    /// Creates an empty input (every field will be defaulted).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets a field to an arbitrary JSON value.
    pub fn set(mut self, field: ConstraintField, value: impl Into<Value>) -> Self {
        self.fields.insert(field.key().to_string(), value.into());
        self
    }

    /// Sets a raw key to an arbitrary JSON value (for boundary testing).
    pub fn set_raw(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Builds an input from explicit integer values.
    pub fn from_values(values: &[(ConstraintField, i64)]) -> Self {
        let mut input = Self::empty();
        for (field, value) in values {
            input = input.set(*field, *value);
        }
        input
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn unknown_keys(&self) -> Vec<&str> {
        self.fields
            .keys()
            .filter(|key| ConstraintField::ALL.iter().all(|f| f.key() != key.as_str()))
            .map(|key| key.as_str())
            .collect()
    }
}

/// Advisory finding attached to an otherwise usable profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValidationWarning {
    /// Two supplied priorities pull in opposite directions.
    Contradiction {
        first: ConstraintField,
        second: ConstraintField,
        message: String,
    },
    /// A key in the input map matched no constraint field.
    UnknownField { key: String },
}

/// Outcome of hard validation plus advisory checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A materialized profile together with its validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileValidation {
    pub profile: ConstraintProfile,
    pub validation: ValidationResult,
    pub assumptions: Vec<Assumption>,
}

/// Validates raw input and materializes a complete profile.
///
/// Always returns a usable profile: offending fields are defaulted and the
/// substitution disclosed as an assumption.
pub fn validate_and_build(input: &RawProfileInput) -> ProfileValidation {
    let mut values = [ConstraintValue::MODERATE; 6];
    let mut assumptions = Vec::new();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut valid_count = 0usize;

    for (i, field) in ConstraintField::ALL.iter().enumerate() {
        match input.get(field.key()) {
            None => assumptions.push(Assumption::default_for(*field)),
            Some(raw) => match coerce_integer(*field, raw) {
                Ok(value) => {
                    values[i] = value;
                    valid_count += 1;
                }
                Err(err) => {
                    debug!(field = field.key(), error = %err, "constraint field failed validation");
                    errors.push(err);
                    assumptions.push(Assumption::default_for(*field));
                }
            },
        }
    }

    for key in input.unknown_keys() {
        warnings.push(ValidationWarning::UnknownField {
            key: key.to_string(),
        });
    }

    let profile = ConstraintProfile::reconstitute(values, valid_count == 6, assumptions.clone());
    warnings.extend(contradiction_warnings(&profile));

    ProfileValidation {
        validation: ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        },
        assumptions,
        profile,
    }
}

/// Validates an arbitrary JSON value as profile input.
///
/// Anything other than an object degrades to the all-defaults profile with
/// a single high-severity assumption.
pub fn validate_and_build_json(value: &Value) -> ProfileValidation {
    match value {
        Value::Object(map) => {
            let input = RawProfileInput {
                fields: map.clone().into_iter().collect(),
            };
            validate_and_build(&input)
        }
        other => fallback_validation(type_name(other)),
    }
}

fn fallback_validation(reason: &str) -> ProfileValidation {
    let assumption = Assumption::whole_input_failure(format!("expected an object, got {}", reason));
    ProfileValidation {
        profile: ConstraintProfile::reconstitute(
            [ConstraintValue::MODERATE; 6],
            false,
            vec![assumption.clone()],
        ),
        validation: ValidationResult {
            is_valid: false,
            errors: Vec::new(),
            warnings: Vec::new(),
        },
        assumptions: vec![assumption],
    }
}

/// Coerces a raw JSON value into a constraint value, field-scoped on error.
fn coerce_integer(field: ConstraintField, raw: &Value) -> Result<ConstraintValue, ValidationError> {
    match raw {
        Value::Number(n) => match n.as_i64() {
            Some(int) => ConstraintValue::try_for_field(field, int),
            None => Err(ValidationError::not_an_integer(field.key(), n.to_string())),
        },
        other => Err(ValidationError::not_an_integer(
            field.key(),
            other.to_string(),
        )),
    }
}

/// Scans the fixed constraint pairs for contradictory priorities.
///
/// Advisory only: these warnings never block scoring.
fn contradiction_warnings(profile: &ConstraintProfile) -> Vec<ValidationWarning> {
    CONFLICT_RULES
        .iter()
        .filter(|rule| rule.fires(profile))
        .map(|rule| {
            let (first, second) = rule.fields();
            ValidationWarning::Contradiction {
                first,
                second,
                message: format!(
                    "{} ({} = {}, {} = {}); a stakeholder discussion is recommended before \
                     committing to these priorities",
                    rule.title,
                    first.key(),
                    profile.value(first).value(),
                    second.key(),
                    profile.value(second).value(),
                ),
            }
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
