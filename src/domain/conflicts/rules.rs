//! The built-in constraint tension rules.
//!
//! Rules are declarative data: each one is a conjunction of two field
//! thresholds plus fixed explanation text. Evaluation order is declaration
//! order, and rules are not mutually exclusive.

use crate::domain::foundation::ConstraintField;
use crate::domain::profile::ConstraintProfile;

/// Direction of a rule threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    AtLeast,
    AtMost,
}

/// One side of a tension rule: a field compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCondition {
    pub field: ConstraintField,
    pub comparison: Comparison,
    pub threshold: u8,
}

impl RuleCondition {
    /// Returns true if the profile's value satisfies this condition.
    pub fn matches(&self, profile: &ConstraintProfile) -> bool {
        let value = profile.value(self.field).value();
        match self.comparison {
            Comparison::AtLeast => value >= self.threshold,
            Comparison::AtMost => value <= self.threshold,
        }
    }
}

/// A known tension pattern between two constraint priorities.
#[derive(Debug, Clone, Copy)]
pub struct ConflictRule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub first: RuleCondition,
    pub second: RuleCondition,
    pub implications: &'static [&'static str],
    pub resolutions: &'static [&'static str],
}

impl ConflictRule {
    /// Returns true if both conditions hold for the profile.
    pub fn fires(&self, profile: &ConstraintProfile) -> bool {
        self.first.matches(profile) && self.second.matches(profile)
    }

    /// Returns the two fields this rule watches.
    pub fn fields(&self) -> (ConstraintField, ConstraintField) {
        (self.first.field, self.second.field)
    }
}

/// The fixed rule set, in evaluation order.
pub const CONFLICT_RULES: &[ConflictRule] = &[
    ConflictRule {
        id: "compliance-cost-conflict",
        title: "Strict compliance vs. tight budget",
        description: "High compliance strictness demands extensive audit tooling, logging, \
                      and review processes, while high cost sensitivity pushes toward minimal \
                      spend. These priorities work against each other.",
        first: RuleCondition {
            field: ConstraintField::ComplianceStrictness,
            comparison: Comparison::AtLeast,
            threshold: 8,
        },
        second: RuleCondition {
            field: ConstraintField::CostSensitivity,
            comparison: Comparison::AtLeast,
            threshold: 8,
        },
        implications: &[
            "Compliance tooling and audit storage carry recurring costs that a tight budget cannot absorb",
            "Cutting compliance spend raises the risk of audit findings and regulatory penalties",
        ],
        resolutions: &[
            "Agree on a minimum compliance baseline with the budget owner before selecting tooling",
            "Phase compliance capabilities so high-impact controls land before nice-to-have automation",
        ],
    },
    ConflictRule {
        id: "risk-ux-conflict",
        title: "Low risk appetite vs. frictionless experience",
        description: "Very low risk tolerance calls for frequent verification challenges, \
                      while a high user experience priority calls for minimal interruptions. \
                      One of the two must bend.",
        first: RuleCondition {
            field: ConstraintField::RiskTolerance,
            comparison: Comparison::AtMost,
            threshold: 3,
        },
        second: RuleCondition {
            field: ConstraintField::UserExperiencePriority,
            comparison: Comparison::AtLeast,
            threshold: 8,
        },
        implications: &[
            "Step-up authentication frequency trades directly against perceived friction",
            "Teams often quietly weaken controls when users escalate friction complaints",
        ],
        resolutions: &[
            "Define which user journeys justify friction and which must stay seamless",
            "Consider risk-based step-up that concentrates friction on anomalous sessions",
        ],
    },
    ConflictRule {
        id: "agility-maturity-conflict",
        title: "High agility vs. limited operational maturity",
        description: "Fast-moving business change generates constant policy churn that an \
                      immature operations team will struggle to absorb safely.",
        first: RuleCondition {
            field: ConstraintField::BusinessAgility,
            comparison: Comparison::AtLeast,
            threshold: 8,
        },
        second: RuleCondition {
            field: ConstraintField::OperationalMaturity,
            comparison: Comparison::AtMost,
            threshold: 3,
        },
        implications: &[
            "Frequent policy updates without mature change control invite outages and misconfigurations",
            "Operational debt compounds as shortcuts accumulate under delivery pressure",
        ],
        resolutions: &[
            "Invest in runbook and automation maturity before widening the change surface",
            "Stage rollouts so the operations team grows into the change cadence",
        ],
    },
    ConflictRule {
        id: "compliance-agility-conflict",
        title: "Strict compliance vs. rapid change",
        description: "High compliance strictness imposes review gates and evidence capture \
                      that slow the rapid iteration a high-agility organization expects.",
        first: RuleCondition {
            field: ConstraintField::ComplianceStrictness,
            comparison: Comparison::AtLeast,
            threshold: 8,
        },
        second: RuleCondition {
            field: ConstraintField::BusinessAgility,
            comparison: Comparison::AtLeast,
            threshold: 8,
        },
        implications: &[
            "Release cadence slows when every change requires compliance evidence",
            "Pressure to ship fast encourages undocumented exceptions that surface at audit time",
        ],
        resolutions: &[
            "Automate evidence capture inside the delivery pipeline rather than as a manual gate",
            "Pre-approve change classes so routine updates bypass full review",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ConstraintValue;

    fn profile_with(pairs: &[(ConstraintField, i64)]) -> ConstraintProfile {
        let mut profile = ConstraintProfile::balanced();
        for (field, raw) in pairs {
            let value = ConstraintValue::try_for_field(*field, *raw).unwrap();
            profile = profile.with_value(*field, value);
        }
        profile
    }

    #[test]
    fn rule_table_has_four_rules_with_unique_ids() {
        assert_eq!(CONFLICT_RULES.len(), 4);
        for a in CONFLICT_RULES {
            assert_eq!(
                CONFLICT_RULES.iter().filter(|b| b.id == a.id).count(),
                1,
                "duplicate rule id {}",
                a.id
            );
        }
    }

    #[test]
    fn compliance_cost_rule_fires_on_both_high() {
        let rule = &CONFLICT_RULES[0];
        assert!(rule.fires(&profile_with(&[
            (ConstraintField::ComplianceStrictness, 9),
            (ConstraintField::CostSensitivity, 9),
        ])));
    }

    #[test]
    fn compliance_cost_rule_requires_both_sides() {
        let rule = &CONFLICT_RULES[0];
        assert!(!rule.fires(&profile_with(&[(
            ConstraintField::ComplianceStrictness,
            9
        )])));
        assert!(!rule.fires(&profile_with(&[(ConstraintField::CostSensitivity, 9)])));
    }

    #[test]
    fn risk_ux_rule_uses_at_most_on_risk() {
        let rule = &CONFLICT_RULES[1];
        assert!(rule.fires(&profile_with(&[
            (ConstraintField::RiskTolerance, 3),
            (ConstraintField::UserExperiencePriority, 8),
        ])));
        assert!(!rule.fires(&profile_with(&[
            (ConstraintField::RiskTolerance, 4),
            (ConstraintField::UserExperiencePriority, 8),
        ])));
    }

    #[test]
    fn no_rule_fires_on_balanced_profile() {
        let profile = ConstraintProfile::balanced();
        assert!(CONFLICT_RULES.iter().all(|r| !r.fires(&profile)));
    }

    #[test]
    fn threshold_boundaries_are_inclusive() {
        let rule = &CONFLICT_RULES[3];
        assert!(rule.fires(&profile_with(&[
            (ConstraintField::ComplianceStrictness, 8),
            (ConstraintField::BusinessAgility, 8),
        ])));
    }
}
