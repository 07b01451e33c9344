//! The seven quality dimensions architectures are scored on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A quality axis on which every architecture is scored.
///
/// All dimensions read "higher is better"; for OperationalComplexity a high
/// score means low operational burden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    IdentityVerification,
    BehavioralAnalytics,
    OperationalComplexity,
    UserExperience,
    ComplianceAuditability,
    ScalabilityPerformance,
    CostEfficiency,
}

impl Dimension {
    /// All dimensions in declaration order.
    pub const ALL: [Dimension; 7] = [
        Dimension::IdentityVerification,
        Dimension::BehavioralAnalytics,
        Dimension::OperationalComplexity,
        Dimension::UserExperience,
        Dimension::ComplianceAuditability,
        Dimension::ScalabilityPerformance,
        Dimension::CostEfficiency,
    ];

    /// Returns the snake_case key.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::IdentityVerification => "identity_verification",
            Dimension::BehavioralAnalytics => "behavioral_analytics",
            Dimension::OperationalComplexity => "operational_complexity",
            Dimension::UserExperience => "user_experience",
            Dimension::ComplianceAuditability => "compliance_auditability",
            Dimension::ScalabilityPerformance => "scalability_performance",
            Dimension::CostEfficiency => "cost_efficiency",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::IdentityVerification => "Identity Verification",
            Dimension::BehavioralAnalytics => "Behavioral Analytics",
            Dimension::OperationalComplexity => "Operational Simplicity",
            Dimension::UserExperience => "User Experience",
            Dimension::ComplianceAuditability => "Compliance & Auditability",
            Dimension::ScalabilityPerformance => "Scalability & Performance",
            Dimension::CostEfficiency => "Cost Efficiency",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_seven_dimensions() {
        assert_eq!(Dimension::ALL.len(), 7);
    }

    #[test]
    fn keys_are_unique() {
        for a in Dimension::ALL {
            for b in Dimension::ALL {
                if a != b {
                    assert_ne!(a.key(), b.key());
                }
            }
        }
    }
}
