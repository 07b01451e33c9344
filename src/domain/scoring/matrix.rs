//! Architecture score matrix - static per-architecture base scores.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ArchitectureType, Dimension};

/// Comparative quality scores across the seven dimensions, each in [1, 10].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub identity_verification: u8,
    pub behavioral_analytics: u8,
    pub operational_complexity: u8,
    pub user_experience: u8,
    pub compliance_auditability: u8,
    pub scalability_performance: u8,
    pub cost_efficiency: u8,
}

impl DimensionScores {
    /// Returns the score for one dimension.
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::IdentityVerification => self.identity_verification,
            Dimension::BehavioralAnalytics => self.behavioral_analytics,
            Dimension::OperationalComplexity => self.operational_complexity,
            Dimension::UserExperience => self.user_experience,
            Dimension::ComplianceAuditability => self.compliance_auditability,
            Dimension::ScalabilityPerformance => self.scalability_performance,
            Dimension::CostEfficiency => self.cost_efficiency,
        }
    }

    /// Returns all scores in dimension declaration order.
    pub fn rows(&self) -> [(Dimension, u8); 7] {
        Dimension::ALL.map(|d| (d, self.get(d)))
    }

    /// Plain average of the seven scores, used by the scoring fallback.
    pub fn simple_average(&self) -> f64 {
        let sum: u32 = Dimension::ALL.iter().map(|d| u32::from(self.get(*d))).sum();
        f64::from(sum) / 7.0
    }
}

/// Static reference row for one architecture pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureProfile {
    pub architecture: ArchitectureType,
    pub display_name: String,
    pub summary: String,
    /// Dimensions this pattern is strongest on.
    pub strengths: Vec<Dimension>,
    pub base_scores: DimensionScores,
}

static ARCHITECTURE_PROFILES: Lazy<BTreeMap<ArchitectureType, ArchitectureProfile>> =
    Lazy::new(|| {
        let mut profiles = BTreeMap::new();

        profiles.insert(
            ArchitectureType::IrmHeavy,
            ArchitectureProfile {
                architecture: ArchitectureType::IrmHeavy,
                display_name: "IRM-Heavy".to_string(),
                summary: "Identity-centric: every access decision anchors on strong identity \
                          verification and entitlement management."
                    .to_string(),
                strengths: vec![
                    Dimension::IdentityVerification,
                    Dimension::ComplianceAuditability,
                ],
                base_scores: DimensionScores {
                    identity_verification: 9,
                    behavioral_analytics: 4,
                    operational_complexity: 6,
                    user_experience: 6,
                    compliance_auditability: 9,
                    scalability_performance: 7,
                    cost_efficiency: 6,
                },
            },
        );

        profiles.insert(
            ArchitectureType::UrmHeavy,
            ArchitectureProfile {
                architecture: ArchitectureType::UrmHeavy,
                display_name: "URM-Heavy".to_string(),
                summary: "Behavior-centric: continuous analytics over user and entity activity \
                          drive adaptive access decisions."
                    .to_string(),
                strengths: vec![Dimension::BehavioralAnalytics, Dimension::UserExperience],
                base_scores: DimensionScores {
                    identity_verification: 5,
                    behavioral_analytics: 9,
                    operational_complexity: 4,
                    user_experience: 8,
                    compliance_auditability: 6,
                    scalability_performance: 6,
                    cost_efficiency: 5,
                },
            },
        );

        profiles.insert(
            ArchitectureType::Hybrid,
            ArchitectureProfile {
                architecture: ArchitectureType::Hybrid,
                display_name: "Hybrid".to_string(),
                summary: "Blended: strong identity verification layered with behavioral \
                          analytics, at the price of operational breadth."
                    .to_string(),
                strengths: vec![
                    Dimension::IdentityVerification,
                    Dimension::BehavioralAnalytics,
                    Dimension::ComplianceAuditability,
                ],
                base_scores: DimensionScores {
                    identity_verification: 8,
                    behavioral_analytics: 8,
                    operational_complexity: 3,
                    user_experience: 7,
                    compliance_auditability: 8,
                    scalability_performance: 6,
                    cost_efficiency: 4,
                },
            },
        );

        profiles
    });

/// Pure lookup of the static row for an architecture type.
pub fn architecture_profile(architecture: ArchitectureType) -> &'static ArchitectureProfile {
    &ARCHITECTURE_PROFILES[&architecture]
}

/// Returns the unweighted base scores for an architecture type.
pub fn base_scores(architecture: ArchitectureType) -> &'static DimensionScores {
    &architecture_profile(architecture).base_scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_architecture_has_a_profile_row() {
        for architecture in ArchitectureType::ALL {
            let profile = architecture_profile(architecture);
            assert_eq!(profile.architecture, architecture);
            assert_eq!(profile.display_name, architecture.label());
        }
    }

    #[test]
    fn all_base_scores_are_in_range() {
        for architecture in ArchitectureType::ALL {
            for (dimension, score) in base_scores(architecture).rows() {
                assert!(
                    (1..=10).contains(&score),
                    "{} {} = {}",
                    architecture,
                    dimension,
                    score
                );
            }
        }
    }

    #[test]
    fn irm_heavy_leads_on_identity_verification() {
        let irm = base_scores(ArchitectureType::IrmHeavy).identity_verification;
        let urm = base_scores(ArchitectureType::UrmHeavy).identity_verification;
        assert!(irm > urm);
        assert_eq!(irm, 9);
    }

    #[test]
    fn urm_heavy_leads_on_behavioral_analytics() {
        assert_eq!(base_scores(ArchitectureType::UrmHeavy).behavioral_analytics, 9);
        assert_eq!(base_scores(ArchitectureType::IrmHeavy).behavioral_analytics, 4);
    }

    #[test]
    fn hybrid_pays_for_breadth_with_operational_complexity() {
        let hybrid = base_scores(ArchitectureType::Hybrid);
        assert_eq!(hybrid.operational_complexity, 3);
        assert_eq!(hybrid.cost_efficiency, 4);
    }

    #[test]
    fn simple_average_matches_hand_computation() {
        let irm = base_scores(ArchitectureType::IrmHeavy);
        // (9 + 4 + 6 + 6 + 9 + 7 + 6) / 7 = 47 / 7
        assert!((irm.simple_average() - 47.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn strengths_reference_top_scoring_dimensions() {
        for architecture in ArchitectureType::ALL {
            let profile = architecture_profile(architecture);
            for strength in &profile.strengths {
                assert!(profile.base_scores.get(*strength) >= 7);
            }
        }
    }
}
