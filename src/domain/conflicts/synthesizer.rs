//! Conflict synthesizer - runs the tension rules over a profile.
//!
//! Rule evaluation never escapes as an error: a malformed rule table is
//! caught at this boundary and converted into a tagged fallback result
//! carrying a single manual-review warning.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

use crate::domain::foundation::ConstraintField;
use crate::domain::profile::ConstraintProfile;

use super::rules::{ConflictRule, CONFLICT_RULES};

/// Fields the manual-review fallback heuristic inspects for extremes.
const FALLBACK_WATCH_FIELDS: [ConstraintField; 4] = [
    ConstraintField::ComplianceStrictness,
    ConstraintField::CostSensitivity,
    ConstraintField::RiskTolerance,
    ConstraintField::BusinessAgility,
];

/// Internal rule-evaluation failure. Never crosses the component boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("Conflict rule table is malformed: {reason}")]
    MalformedRuleTable { reason: String },
}

/// A surfaced tension between two constraint priorities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictWarning {
    pub conflict_id: String,
    pub title: String,
    pub description: String,
    pub implications: Vec<String>,
    pub resolution_suggestions: Vec<String>,
    /// The field values that triggered the rule, echoed verbatim.
    pub triggering_constraints: BTreeMap<ConstraintField, u8>,
}

impl ConflictWarning {
    fn from_rule(rule: &ConflictRule, profile: &ConstraintProfile) -> Self {
        let (first, second) = rule.fields();
        let mut triggering = BTreeMap::new();
        triggering.insert(first, profile.value(first).value());
        triggering.insert(second, profile.value(second).value());

        Self {
            conflict_id: rule.id.to_string(),
            title: rule.title.to_string(),
            description: rule.description.to_string(),
            implications: rule.implications.iter().map(|s| s.to_string()).collect(),
            resolution_suggestions: rule.resolutions.iter().map(|s| s.to_string()).collect(),
            triggering_constraints: triggering,
        }
    }
}

/// Result of a conflict detection pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictAnalysis {
    pub conflicts: Vec<ConflictWarning>,
    pub has_conflicts: bool,
    pub is_fallback: bool,
}

impl ConflictAnalysis {
    /// Returns the conflict ids in evaluation order.
    pub fn conflict_ids(&self) -> Vec<&str> {
        self.conflicts.iter().map(|c| c.conflict_id.as_str()).collect()
    }
}

/// Runs the built-in rule set over the profile.
pub fn detect_conflicts(profile: &ConstraintProfile) -> ConflictAnalysis {
    detect_conflicts_with(profile, CONFLICT_RULES)
}

/// Runs an explicit rule set over the profile.
///
/// A malformed rule table degrades to the manual-review fallback instead of
/// propagating an error.
pub fn detect_conflicts_with(profile: &ConstraintProfile, rules: &[ConflictRule]) -> ConflictAnalysis {
    match evaluate_rules(profile, rules) {
        Ok(conflicts) => ConflictAnalysis {
            has_conflicts: !conflicts.is_empty(),
            conflicts,
            is_fallback: false,
        },
        Err(err) => {
            warn!(error = %err, "conflict rule evaluation failed; falling back to manual-review heuristic");
            ConflictAnalysis {
                conflicts: vec![fallback_warning(profile)],
                has_conflicts: true,
                is_fallback: true,
            }
        }
    }
}

fn evaluate_rules(
    profile: &ConstraintProfile,
    rules: &[ConflictRule],
) -> Result<Vec<ConflictWarning>, SynthesisError> {
    validate_rule_table(rules)?;
    Ok(rules
        .iter()
        .filter(|rule| rule.fires(profile))
        .map(|rule| ConflictWarning::from_rule(rule, profile))
        .collect())
}

fn validate_rule_table(rules: &[ConflictRule]) -> Result<(), SynthesisError> {
    for (i, rule) in rules.iter().enumerate() {
        if rule.id.is_empty() {
            return Err(SynthesisError::MalformedRuleTable {
                reason: format!("rule at position {} has an empty id", i),
            });
        }
        for condition in [rule.first, rule.second] {
            if !(1..=10).contains(&condition.threshold) {
                return Err(SynthesisError::MalformedRuleTable {
                    reason: format!(
                        "rule '{}' has threshold {} outside [1, 10]",
                        rule.id, condition.threshold
                    ),
                });
            }
        }
        if rules.iter().filter(|other| other.id == rule.id).count() > 1 {
            return Err(SynthesisError::MalformedRuleTable {
                reason: format!("duplicate rule id '{}'", rule.id),
            });
        }
    }
    Ok(())
}

/// Builds the heuristic manual-review warning used when rule evaluation
/// is unavailable.
fn fallback_warning(profile: &ConstraintProfile) -> ConflictWarning {
    let mut triggering = BTreeMap::new();
    for field in FALLBACK_WATCH_FIELDS {
        let value = profile.value(field).value();
        if value >= 8 {
            triggering.insert(field, value);
        }
    }

    let description = if triggering.is_empty() {
        "Automated conflict analysis was unavailable for this profile.".to_string()
    } else {
        let named: Vec<String> = triggering
            .iter()
            .map(|(field, value)| format!("{} = {}", field.key(), value))
            .collect();
        format!(
            "Automated conflict analysis was unavailable, and the profile carries strongly \
             weighted priorities ({}) that commonly conflict.",
            named.join(", ")
        )
    };

    ConflictWarning {
        conflict_id: "manual-review-required".to_string(),
        title: "Manual review required".to_string(),
        description,
        implications: vec![
            "Constraint tensions may exist that this analysis could not surface".to_string(),
        ],
        resolution_suggestions: vec![
            "Review the constraint priorities with stakeholders manually".to_string(),
        ],
        triggering_constraints: triggering,
    }
}
