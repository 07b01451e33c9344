//! Constraint value object (1-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ConstraintField, ValidationError};

/// An organizational constraint rating between 1 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintValue(u8);

impl ConstraintValue {
    /// Lowest valid rating.
    pub const MIN: u8 = 1;

    /// Highest valid rating.
    pub const MAX: u8 = 10;

    /// The documented default substituted for a missing field.
    pub const MODERATE: Self = Self(5);

    /// Creates a ConstraintValue, returning a field-scoped error if the
    /// value is outside [1, 10].
    pub fn try_for_field(field: ConstraintField, value: i64) -> Result<Self, ValidationError> {
        if !(Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            return Err(ValidationError::out_of_range(
                field.key(),
                Self::MIN as i64,
                Self::MAX as i64,
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value normalized to [0.1, 1.0].
    pub fn norm(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Returns the inverted value normalized to [0.1, 1.0]:
    /// 1 maps to 1.0, 10 maps to 0.1.
    pub fn inverse_norm(&self) -> f64 {
        f64::from(11 - self.0) / 10.0
    }

    /// Returns true for extreme ratings (<= 2 or >= 9), which reduce
    /// scoring confidence.
    pub fn is_extreme(&self) -> bool {
        self.0 <= 2 || self.0 >= 9
    }
}

impl Default for ConstraintValue {
    fn default() -> Self {
        Self::MODERATE
    }
}

impl fmt::Display for ConstraintValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_for_field_accepts_boundary_values() {
        assert_eq!(
            ConstraintValue::try_for_field(ConstraintField::RiskTolerance, 1)
                .unwrap()
                .value(),
            1
        );
        assert_eq!(
            ConstraintValue::try_for_field(ConstraintField::RiskTolerance, 10)
                .unwrap()
                .value(),
            10
        );
    }

    #[test]
    fn try_for_field_rejects_out_of_range() {
        assert!(ConstraintValue::try_for_field(ConstraintField::RiskTolerance, 0).is_err());
        assert!(ConstraintValue::try_for_field(ConstraintField::RiskTolerance, 11).is_err());
        assert!(ConstraintValue::try_for_field(ConstraintField::RiskTolerance, -3).is_err());
    }

    #[test]
    fn error_names_the_field() {
        let err = ConstraintValue::try_for_field(ConstraintField::CostSensitivity, 0).unwrap_err();
        assert_eq!(err.field(), "cost_sensitivity");
    }

    #[test]
    fn norm_scales_to_tenths() {
        let v = ConstraintValue::try_for_field(ConstraintField::RiskTolerance, 7).unwrap();
        assert!((v.norm() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn inverse_norm_flips_the_scale() {
        let low = ConstraintValue::try_for_field(ConstraintField::RiskTolerance, 1).unwrap();
        let high = ConstraintValue::try_for_field(ConstraintField::RiskTolerance, 10).unwrap();
        assert!((low.inverse_norm() - 1.0).abs() < 1e-12);
        assert!((high.inverse_norm() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn is_extreme_flags_tails_only() {
        for raw in 1..=10_i64 {
            let v = ConstraintValue::try_for_field(ConstraintField::RiskTolerance, raw).unwrap();
            assert_eq!(v.is_extreme(), raw <= 2 || raw >= 9, "value {}", raw);
        }
    }

    #[test]
    fn default_is_moderate() {
        assert_eq!(ConstraintValue::default().value(), 5);
    }
}
