//! Constraint profile aggregate - the six-field organizational input.
//!
//! # Invariants
//!
//! - Every field always carries a value (explicit or defaulted).
//! - The profile is immutable; `with_value` produces a new profile.
//! - Assumptions are ordered by field declaration order.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConstraintField, ConstraintValue};

/// How strongly an assumption should be surfaced to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssumptionSeverity {
    /// Routine default substitution for one missing field.
    Info,
    /// Whole-input failure; the entire profile was defaulted.
    High,
}

/// A recorded statement that a default was substituted for missing input.
///
/// `field` is None only for the whole-input failure case, where every
/// constraint was defaulted at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assumption {
    pub field: Option<ConstraintField>,
    pub assumed_value: ConstraintValue,
    pub rationale: String,
    pub severity: AssumptionSeverity,
}

impl Assumption {
    /// Creates the routine default-substitution assumption for a field.
    pub fn default_for(field: ConstraintField) -> Self {
        Self {
            field: Some(field),
            assumed_value: ConstraintValue::MODERATE,
            rationale: field.assumption_rationale().to_string(),
            severity: AssumptionSeverity::Info,
        }
    }

    /// Creates the single high-severity assumption recorded when the whole
    /// input could not be interpreted.
    pub fn whole_input_failure(reason: impl Into<String>) -> Self {
        Self {
            field: None,
            assumed_value: ConstraintValue::MODERATE,
            rationale: format!(
                "Input could not be interpreted ({}); all six constraints were set to moderate defaults",
                reason.into()
            ),
            severity: AssumptionSeverity::High,
        }
    }
}

/// The organization's six-dimensional constraint profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintProfile {
    risk_tolerance: ConstraintValue,
    compliance_strictness: ConstraintValue,
    cost_sensitivity: ConstraintValue,
    user_experience_priority: ConstraintValue,
    operational_maturity: ConstraintValue,
    business_agility: ConstraintValue,

    /// True iff all six fields were explicitly supplied with valid values.
    input_completeness: bool,

    /// One entry per defaulted field, in field declaration order.
    assumptions: Vec<Assumption>,
}

impl ConstraintProfile {
    /// Creates a fully specified profile (no assumptions).
    pub fn complete(values: [ConstraintValue; 6]) -> Self {
        Self {
            risk_tolerance: values[0],
            compliance_strictness: values[1],
            cost_sensitivity: values[2],
            user_experience_priority: values[3],
            operational_maturity: values[4],
            business_agility: values[5],
            input_completeness: true,
            assumptions: Vec::new(),
        }
    }

    /// Creates the all-moderate profile, fully specified.
    pub fn balanced() -> Self {
        Self::complete([ConstraintValue::MODERATE; 6])
    }

    /// Reconstitutes a profile from validated parts.
    pub(crate) fn reconstitute(
        values: [ConstraintValue; 6],
        input_completeness: bool,
        assumptions: Vec<Assumption>,
    ) -> Self {
        Self {
            risk_tolerance: values[0],
            compliance_strictness: values[1],
            cost_sensitivity: values[2],
            user_experience_priority: values[3],
            operational_maturity: values[4],
            business_agility: values[5],
            input_completeness,
            assumptions,
        }
    }

    /// Returns the value of one field.
    pub fn value(&self, field: ConstraintField) -> ConstraintValue {
        match field {
            ConstraintField::RiskTolerance => self.risk_tolerance,
            ConstraintField::ComplianceStrictness => self.compliance_strictness,
            ConstraintField::CostSensitivity => self.cost_sensitivity,
            ConstraintField::UserExperiencePriority => self.user_experience_priority,
            ConstraintField::OperationalMaturity => self.operational_maturity,
            ConstraintField::BusinessAgility => self.business_agility,
        }
    }

    /// Returns all six values in field declaration order.
    pub fn values(&self) -> [(ConstraintField, ConstraintValue); 6] {
        ConstraintField::ALL.map(|f| (f, self.value(f)))
    }

    /// Produces a new profile with one field overridden.
    ///
    /// The overridden field becomes explicit: its assumption (if any) is
    /// dropped and completeness is recomputed.
    pub fn with_value(&self, field: ConstraintField, value: ConstraintValue) -> Self {
        let mut next = self.clone();
        match field {
            ConstraintField::RiskTolerance => next.risk_tolerance = value,
            ConstraintField::ComplianceStrictness => next.compliance_strictness = value,
            ConstraintField::CostSensitivity => next.cost_sensitivity = value,
            ConstraintField::UserExperiencePriority => next.user_experience_priority = value,
            ConstraintField::OperationalMaturity => next.operational_maturity = value,
            ConstraintField::BusinessAgility => next.business_agility = value,
        }
        next.assumptions.retain(|a| a.field != Some(field));
        next.input_completeness = next.assumptions.is_empty();
        next
    }

    /// True iff all six fields were explicitly supplied with valid values.
    pub fn input_completeness(&self) -> bool {
        self.input_completeness
    }

    /// Returns the recorded assumptions.
    pub fn assumptions(&self) -> &[Assumption] {
        &self.assumptions
    }

    /// Returns the number of recorded assumptions.
    pub fn assumption_count(&self) -> usize {
        self.assumptions.len()
    }

    /// Counts constraint values at the extremes (<= 2 or >= 9).
    pub fn extreme_value_count(&self) -> usize {
        ConstraintField::ALL
            .iter()
            .filter(|f| self.value(**f).is_extreme())
            .count()
    }

    /// Canonical serialization of the six values, used as a memoization key.
    pub fn canonical_key(&self) -> String {
        ConstraintField::ALL
            .map(|f| self.value(f).value().to_string())
            .join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(raw: i64) -> ConstraintValue {
        ConstraintValue::try_for_field(ConstraintField::RiskTolerance, raw).unwrap()
    }

    #[test]
    fn balanced_profile_is_complete_with_no_assumptions() {
        let profile = ConstraintProfile::balanced();
        assert!(profile.input_completeness());
        assert_eq!(profile.assumption_count(), 0);
        for (_, v) in profile.values() {
            assert_eq!(v.value(), 5);
        }
    }

    #[test]
    fn with_value_returns_new_profile_and_leaves_original_unchanged() {
        let original = ConstraintProfile::balanced();
        let modified = original.with_value(ConstraintField::CostSensitivity, value(9));

        assert_eq!(original.value(ConstraintField::CostSensitivity).value(), 5);
        assert_eq!(modified.value(ConstraintField::CostSensitivity).value(), 9);
    }

    #[test]
    fn with_value_clears_the_assumption_for_that_field() {
        let profile = ConstraintProfile::reconstitute(
            [ConstraintValue::MODERATE; 6],
            false,
            vec![Assumption::default_for(ConstraintField::BusinessAgility)],
        );
        assert!(!profile.input_completeness());

        let explicit = profile.with_value(ConstraintField::BusinessAgility, value(8));
        assert_eq!(explicit.assumption_count(), 0);
        assert!(explicit.input_completeness());
    }

    #[test]
    fn extreme_value_count_counts_tails() {
        let profile = ConstraintProfile::complete([
            value(1),
            value(9),
            value(5),
            value(2),
            value(8),
            value(10),
        ]);
        assert_eq!(profile.extreme_value_count(), 4);
    }

    #[test]
    fn canonical_key_orders_fields_by_declaration() {
        let profile = ConstraintProfile::complete([
            value(1),
            value(2),
            value(3),
            value(4),
            value(5),
            value(6),
        ]);
        assert_eq!(profile.canonical_key(), "1|2|3|4|5|6");
    }

    #[test]
    fn profile_roundtrips_through_json() {
        let profile = ConstraintProfile::balanced();
        let json = serde_json::to_string(&profile).unwrap();
        let back: ConstraintProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
