//! Dimension weight derivation from the constraint profile.
//!
//! Each dimension weight is a fixed linear combination of two constraint
//! inputs plus a neutral base term, with coefficients summing to 1.0. The
//! coefficient table is part of the scoring contract: test fixtures assert
//! exact numeric outputs, so the formulas must not be adjusted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ConstraintField, Dimension};
use crate::domain::profile::ConstraintProfile;

/// Neutral mixing level for the base term of every formula.
pub const BASE_MIX: f64 = 0.5;

/// One input to a weight formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightInput {
    /// The field value normalized to [0.1, 1.0].
    Direct(ConstraintField),
    /// The inverted field value: 1 maps to 1.0, 10 maps to 0.1.
    Inverse(ConstraintField),
    /// The constant neutral level.
    Base,
}

/// A coefficient applied to one weight input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTerm {
    pub coefficient: f64,
    pub input: WeightInput,
}

/// The full formula for one dimension's weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightFormula {
    pub dimension: Dimension,
    pub terms: [WeightTerm; 3],
}

/// The coefficient table, one formula per dimension in declaration order.
pub const WEIGHT_FORMULAS: [WeightFormula; 7] = [
    WeightFormula {
        dimension: Dimension::IdentityVerification,
        terms: [
            WeightTerm {
                coefficient: 0.4,
                input: WeightInput::Inverse(ConstraintField::RiskTolerance),
            },
            WeightTerm {
                coefficient: 0.3,
                input: WeightInput::Direct(ConstraintField::ComplianceStrictness),
            },
            WeightTerm {
                coefficient: 0.3,
                input: WeightInput::Base,
            },
        ],
    },
    WeightFormula {
        dimension: Dimension::BehavioralAnalytics,
        terms: [
            WeightTerm {
                coefficient: 0.4,
                input: WeightInput::Direct(ConstraintField::RiskTolerance),
            },
            WeightTerm {
                coefficient: 0.3,
                input: WeightInput::Direct(ConstraintField::OperationalMaturity),
            },
            WeightTerm {
                coefficient: 0.3,
                input: WeightInput::Base,
            },
        ],
    },
    WeightFormula {
        dimension: Dimension::OperationalComplexity,
        terms: [
            WeightTerm {
                coefficient: 0.5,
                input: WeightInput::Inverse(ConstraintField::OperationalMaturity),
            },
            WeightTerm {
                coefficient: 0.2,
                input: WeightInput::Direct(ConstraintField::CostSensitivity),
            },
            WeightTerm {
                coefficient: 0.3,
                input: WeightInput::Base,
            },
        ],
    },
    WeightFormula {
        dimension: Dimension::UserExperience,
        terms: [
            WeightTerm {
                coefficient: 0.6,
                input: WeightInput::Direct(ConstraintField::UserExperiencePriority),
            },
            WeightTerm {
                coefficient: 0.1,
                input: WeightInput::Direct(ConstraintField::BusinessAgility),
            },
            WeightTerm {
                coefficient: 0.3,
                input: WeightInput::Base,
            },
        ],
    },
    WeightFormula {
        dimension: Dimension::ComplianceAuditability,
        terms: [
            WeightTerm {
                coefficient: 0.6,
                input: WeightInput::Direct(ConstraintField::ComplianceStrictness),
            },
            WeightTerm {
                coefficient: 0.1,
                input: WeightInput::Inverse(ConstraintField::RiskTolerance),
            },
            WeightTerm {
                coefficient: 0.3,
                input: WeightInput::Base,
            },
        ],
    },
    WeightFormula {
        dimension: Dimension::ScalabilityPerformance,
        terms: [
            WeightTerm {
                coefficient: 0.4,
                input: WeightInput::Direct(ConstraintField::BusinessAgility),
            },
            WeightTerm {
                coefficient: 0.3,
                input: WeightInput::Direct(ConstraintField::OperationalMaturity),
            },
            WeightTerm {
                coefficient: 0.3,
                input: WeightInput::Base,
            },
        ],
    },
    WeightFormula {
        dimension: Dimension::CostEfficiency,
        terms: [
            WeightTerm {
                coefficient: 0.6,
                input: WeightInput::Direct(ConstraintField::CostSensitivity),
            },
            WeightTerm {
                coefficient: 0.1,
                input: WeightInput::Inverse(ConstraintField::BusinessAgility),
            },
            WeightTerm {
                coefficient: 0.3,
                input: WeightInput::Base,
            },
        ],
    },
];

/// Ephemeral dimension-to-weight mapping computed once per analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    weights: BTreeMap<Dimension, f64>,
}

impl DimensionWeights {
    /// Wraps an explicit weight map (used for injection in tests and
    /// fallback exercises).
    pub fn from_map(weights: BTreeMap<Dimension, f64>) -> Self {
        Self { weights }
    }

    /// Returns the weight for a dimension, if present.
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.weights.get(&dimension).copied()
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Iterates weights in dimension declaration order.
    pub fn rows(&self) -> Vec<(Dimension, f64)> {
        Dimension::ALL
            .iter()
            .filter_map(|d| self.get(*d).map(|w| (*d, w)))
            .collect()
    }

    /// True when every dimension carries a finite, strictly positive weight.
    pub fn is_well_formed(&self) -> bool {
        Dimension::ALL.iter().all(|d| {
            self.get(*d)
                .map(|w| w.is_finite() && w > 0.0)
                .unwrap_or(false)
        }) && self.total() > 0.0
    }
}

impl WeightInput {
    fn evaluate(&self, profile: &ConstraintProfile) -> f64 {
        match self {
            WeightInput::Direct(field) => profile.value(*field).norm(),
            WeightInput::Inverse(field) => profile.value(*field).inverse_norm(),
            WeightInput::Base => BASE_MIX,
        }
    }
}

/// Derives the seven dimension weights for a profile.
///
/// Pure and deterministic: identical profiles produce bit-identical weights.
pub fn derive_weights(profile: &ConstraintProfile) -> DimensionWeights {
    let mut weights = BTreeMap::new();
    for formula in &WEIGHT_FORMULAS {
        let weight: f64 = formula
            .terms
            .iter()
            .map(|term| term.coefficient * term.input.evaluate(profile))
            .sum();
        weights.insert(formula.dimension, weight);
    }
    DimensionWeights { weights }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn coefficients_sum_to_one_per_dimension() {
        for formula in &WEIGHT_FORMULAS {
            let sum: f64 = formula.terms.iter().map(|t| t.coefficient).sum();
            assert_close(sum, 1.0);
        }
    }

    #[test]
    fn every_dimension_has_exactly_one_formula() {
        for dimension in Dimension::ALL {
            assert_eq!(
                WEIGHT_FORMULAS
                    .iter()
                    .filter(|f| f.dimension == dimension)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn balanced_profile_produces_documented_weights() {
        let weights = derive_weights(&crate::domain::profile::ConstraintProfile::balanced());

        assert_close(weights.get(Dimension::IdentityVerification).unwrap(), 0.54);
        assert_close(weights.get(Dimension::BehavioralAnalytics).unwrap(), 0.50);
        assert_close(weights.get(Dimension::OperationalComplexity).unwrap(), 0.55);
        assert_close(weights.get(Dimension::UserExperience).unwrap(), 0.50);
        assert_close(weights.get(Dimension::ComplianceAuditability).unwrap(), 0.51);
        assert_close(weights.get(Dimension::ScalabilityPerformance).unwrap(), 0.50);
        assert_close(weights.get(Dimension::CostEfficiency).unwrap(), 0.51);
        assert_close(weights.total(), 3.61);
    }

    #[test]
    fn derived_weights_are_always_well_formed() {
        use crate::domain::foundation::{ConstraintField, ConstraintValue};
        use crate::domain::profile::ConstraintProfile;

        for raw in [1_i64, 2, 5, 9, 10] {
            let mut profile = ConstraintProfile::balanced();
            for field in ConstraintField::ALL {
                profile =
                    profile.with_value(field, ConstraintValue::try_for_field(field, raw).unwrap());
            }
            assert!(derive_weights(&profile).is_well_formed(), "raw {}", raw);
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let profile = crate::domain::profile::ConstraintProfile::balanced();
        assert_eq!(derive_weights(&profile), derive_weights(&profile));
    }

    #[test]
    fn missing_dimension_makes_map_ill_formed() {
        let mut map = BTreeMap::new();
        map.insert(Dimension::IdentityVerification, 0.5);
        assert!(!DimensionWeights::from_map(map).is_well_formed());
    }

    #[test]
    fn non_finite_weight_makes_map_ill_formed() {
        let mut map = BTreeMap::new();
        for dimension in Dimension::ALL {
            map.insert(dimension, 0.5);
        }
        map.insert(Dimension::CostEfficiency, f64::NAN);
        assert!(!DimensionWeights::from_map(map).is_well_formed());
    }
}
