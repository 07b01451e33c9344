//! Scoring module - Weighted architecture scoring and near-tie detection.
//!
//! The tuning constants below are preserved literally from the documented
//! decision model; behavioral tests depend on their exact values. They are
//! collected here as the single surface an operator would adjust.

mod engine;
mod matrix;
mod tie;
mod weights;

/// Gap below which two ranked scores are treated as a near-tie.
pub const NEAR_TIE_THRESHOLD: f64 = 0.3;

/// Point total every profile starts from before deductions.
pub const CONFIDENCE_START_POINTS: i32 = 100;

/// Deduction applied once when any constraint field was defaulted.
pub const INCOMPLETE_INPUT_PENALTY: i32 = 20;

/// Deduction per constraint value at the extremes (<= 2 or >= 9).
pub const EXTREME_VALUE_PENALTY: i32 = 5;

/// Deduction per recorded assumption.
pub const ASSUMPTION_PENALTY: i32 = 3;

/// Distance from the threshold below which tie classification is reported
/// with reduced confidence.
pub const TIE_DETECTION_MARGIN: f64 = 0.15;

pub use engine::{
    confidence_for_profile, confidence_points, round2, score_architectures, score_with_weights,
    ArchitectureScore, ScoringError, ScoringResults,
};
pub use matrix::{architecture_profile, base_scores, ArchitectureProfile, DimensionScores};
pub use tie::{detect_near_tie, NearTieResult, TieMessaging, TieType};
pub use weights::{
    derive_weights, DimensionWeights, WeightFormula, WeightInput, WeightTerm, BASE_MIX,
    WEIGHT_FORMULAS,
};
