//! The six organizational constraint fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six constraint dimensions an organization rates from 1 to 10.
///
/// Declaration order is load-bearing: assumption disclosure and canonical
/// serialization both follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintField {
    RiskTolerance,
    ComplianceStrictness,
    CostSensitivity,
    UserExperiencePriority,
    OperationalMaturity,
    BusinessAgility,
}

impl ConstraintField {
    /// All fields in declaration order.
    pub const ALL: [ConstraintField; 6] = [
        ConstraintField::RiskTolerance,
        ConstraintField::ComplianceStrictness,
        ConstraintField::CostSensitivity,
        ConstraintField::UserExperiencePriority,
        ConstraintField::OperationalMaturity,
        ConstraintField::BusinessAgility,
    ];

    /// Returns the snake_case key used in input maps and error messages.
    pub fn key(&self) -> &'static str {
        match self {
            ConstraintField::RiskTolerance => "risk_tolerance",
            ConstraintField::ComplianceStrictness => "compliance_strictness",
            ConstraintField::CostSensitivity => "cost_sensitivity",
            ConstraintField::UserExperiencePriority => "user_experience_priority",
            ConstraintField::OperationalMaturity => "operational_maturity",
            ConstraintField::BusinessAgility => "business_agility",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ConstraintField::RiskTolerance => "Risk Tolerance",
            ConstraintField::ComplianceStrictness => "Compliance Strictness",
            ConstraintField::CostSensitivity => "Cost Sensitivity",
            ConstraintField::UserExperiencePriority => "User Experience Priority",
            ConstraintField::OperationalMaturity => "Operational Maturity",
            ConstraintField::BusinessAgility => "Business Agility",
        }
    }

    /// Returns the rationale recorded when this field is defaulted.
    pub fn assumption_rationale(&self) -> &'static str {
        match self {
            ConstraintField::RiskTolerance => {
                "No risk tolerance supplied; assuming a moderate appetite for security risk"
            }
            ConstraintField::ComplianceStrictness => {
                "No compliance strictness supplied; assuming a moderate regulatory burden"
            }
            ConstraintField::CostSensitivity => {
                "No cost sensitivity supplied; assuming a moderate budget constraint"
            }
            ConstraintField::UserExperiencePriority => {
                "No user experience priority supplied; assuming user friction is a moderate concern"
            }
            ConstraintField::OperationalMaturity => {
                "No operational maturity supplied; assuming a moderately experienced operations team"
            }
            ConstraintField::BusinessAgility => {
                "No business agility supplied; assuming a moderate pace of organizational change"
            }
        }
    }
}

impl fmt::Display for ConstraintField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ConstraintField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstraintField::ALL
            .iter()
            .find(|f| f.key() == s)
            .copied()
            .ok_or_else(|| format!("unknown constraint field '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_six_fields_in_declaration_order() {
        assert_eq!(ConstraintField::ALL.len(), 6);
        assert_eq!(ConstraintField::ALL[0], ConstraintField::RiskTolerance);
        assert_eq!(ConstraintField::ALL[5], ConstraintField::BusinessAgility);
    }

    #[test]
    fn keys_roundtrip_through_from_str() {
        for field in ConstraintField::ALL {
            assert_eq!(field.key().parse::<ConstraintField>().unwrap(), field);
        }
    }

    #[test]
    fn from_str_rejects_unknown_field() {
        assert!("riskTolerance".parse::<ConstraintField>().is_err());
        assert!("".parse::<ConstraintField>().is_err());
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&ConstraintField::UserExperiencePriority).unwrap();
        assert_eq!(json, "\"user_experience_priority\"");
    }
}
