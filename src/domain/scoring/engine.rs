//! Weighted scoring engine - combines base scores and derived weights.
//!
//! Internal calculation failure never escapes: a malformed weight map is
//! caught at this boundary and converted into a tagged fallback result
//! built from plain dimension averages, with confidence forced to Low.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::conflicts::{detect_conflicts, ConflictAnalysis};
use crate::domain::foundation::{ArchitectureType, ConfidenceLevel, Dimension};
use crate::domain::profile::ConstraintProfile;

use super::matrix::{base_scores, DimensionScores};
use super::tie::{detect_near_tie, NearTieResult};
use super::weights::{derive_weights, DimensionWeights};
use super::{
    ASSUMPTION_PENALTY, CONFIDENCE_START_POINTS, EXTREME_VALUE_PENALTY, INCOMPLETE_INPUT_PENALTY,
};

/// Internal scoring failure. Never crosses the component boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Dimension weight map is malformed: {reason}")]
    MalformedWeights { reason: String },
}

/// One architecture's scored outcome for a single analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureScore {
    pub architecture: ArchitectureType,
    /// Unweighted base scores, echoed for transparency.
    pub base_scores: DimensionScores,
    /// Weighted score in [1, 10], rounded to 2 decimals.
    pub weighted_score: f64,
    pub confidence: ConfidenceLevel,
}

/// Full output of one scoring pass, ranked best-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResults {
    pub scores: Vec<ArchitectureScore>,
    /// The weight map used, as a methodology trace.
    pub weights: DimensionWeights,
    pub near_tie: NearTieResult,
    pub trade_offs: ConflictAnalysis,
    pub overall_confidence: ConfidenceLevel,
    pub interpretation: Vec<String>,
    pub is_fallback: bool,
    pub fallback_reason: Option<String>,
}

impl ScoringResults {
    /// Returns the top-ranked score.
    pub fn top(&self) -> &ArchitectureScore {
        &self.scores[0]
    }

    /// Returns the score entry for one architecture.
    pub fn score_for(&self, architecture: ArchitectureType) -> Option<&ArchitectureScore> {
        self.scores.iter().find(|s| s.architecture == architecture)
    }

    /// Returns the ranking as architecture types, best first.
    pub fn ranking(&self) -> Vec<ArchitectureType> {
        self.scores.iter().map(|s| s.architecture).collect()
    }
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Confidence point total for a profile under the deduction system.
pub fn confidence_points(profile: &ConstraintProfile) -> i32 {
    let mut points = CONFIDENCE_START_POINTS;
    if !profile.input_completeness() {
        points -= INCOMPLETE_INPUT_PENALTY;
    }
    points -= EXTREME_VALUE_PENALTY * profile.extreme_value_count() as i32;
    points -= ASSUMPTION_PENALTY * profile.assumption_count() as i32;
    points
}

/// Confidence tier for a profile.
pub fn confidence_for_profile(profile: &ConstraintProfile) -> ConfidenceLevel {
    ConfidenceLevel::from_points(confidence_points(profile))
}

/// Scores the three architectures against a profile.
pub fn score_architectures(profile: &ConstraintProfile) -> ScoringResults {
    score_with_weights(profile, derive_weights(profile))
}

/// Scores with an explicit weight map (injection seam for tests and the
/// fallback exercise). A malformed map degrades to simple averages.
pub fn score_with_weights(profile: &ConstraintProfile, weights: DimensionWeights) -> ScoringResults {
    match weighted_scores(profile, &weights) {
        Ok(scores) => {
            debug!(top = %scores[0].architecture, "weighted scoring completed");
            assemble(profile, weights, scores, false, None)
        }
        Err(err) => {
            warn!(error = %err, "weighted scoring failed; falling back to simple averages");
            let scores = fallback_scores();
            assemble(profile, weights, scores, true, Some(err.to_string()))
        }
    }
}

fn weighted_scores(
    profile: &ConstraintProfile,
    weights: &DimensionWeights,
) -> Result<Vec<ArchitectureScore>, ScoringError> {
    if !weights.is_well_formed() {
        return Err(ScoringError::MalformedWeights {
            reason: "weights must be finite, positive, and cover all seven dimensions".to_string(),
        });
    }

    let confidence = confidence_for_profile(profile);
    let total = weights.total();
    let mut scores = Vec::with_capacity(ArchitectureType::ALL.len());

    for architecture in ArchitectureType::ALL {
        let base = base_scores(architecture);
        let mut numerator = 0.0;
        for dimension in Dimension::ALL {
            let weight = weights.get(dimension).ok_or_else(|| {
                ScoringError::MalformedWeights {
                    reason: format!("missing weight for {}", dimension),
                }
            })?;
            numerator += f64::from(base.get(dimension)) * weight;
        }
        scores.push(ArchitectureScore {
            architecture,
            base_scores: *base,
            weighted_score: round2(numerator / total),
            confidence,
        });
    }

    sort_ranked(&mut scores);
    Ok(scores)
}

/// Unweighted fallback: plain averages, confidence forced to Low.
fn fallback_scores() -> Vec<ArchitectureScore> {
    let mut scores: Vec<ArchitectureScore> = ArchitectureType::ALL
        .map(|architecture| {
            let base = base_scores(architecture);
            ArchitectureScore {
                architecture,
                base_scores: *base,
                weighted_score: round2(base.simple_average()),
                confidence: ConfidenceLevel::Low,
            }
        })
        .into();
    sort_ranked(&mut scores);
    scores
}

/// Descending by score; declaration order breaks exact ties (stable sort
/// over a declaration-ordered input).
fn sort_ranked(scores: &mut [ArchitectureScore]) {
    scores.sort_by(|a, b| {
        b.weighted_score
            .partial_cmp(&a.weighted_score)
            .unwrap_or(Ordering::Equal)
    });
}

fn assemble(
    profile: &ConstraintProfile,
    weights: DimensionWeights,
    scores: Vec<ArchitectureScore>,
    is_fallback: bool,
    fallback_reason: Option<String>,
) -> ScoringResults {
    let near_tie = detect_near_tie(&scores);
    let trade_offs = detect_conflicts(profile);
    let overall_confidence = if is_fallback {
        ConfidenceLevel::Low
    } else {
        confidence_for_profile(profile)
    };
    let interpretation =
        interpretation_guidance(&scores, &near_tie, overall_confidence, is_fallback);

    ScoringResults {
        scores,
        weights,
        near_tie,
        trade_offs,
        overall_confidence,
        interpretation,
        is_fallback,
        fallback_reason,
    }
}

fn interpretation_guidance(
    scores: &[ArchitectureScore],
    near_tie: &NearTieResult,
    confidence: ConfidenceLevel,
    is_fallback: bool,
) -> Vec<String> {
    let mut guidance = Vec::new();

    if is_fallback {
        guidance.push(
            "Weighted scoring was unavailable; the ranking uses plain dimension averages \
             and requires manual evaluation."
                .to_string(),
        );
    }

    if let Some(top) = scores.first() {
        guidance.push(format!(
            "{} ranks first at {:.2} for this constraint profile.",
            top.architecture, top.weighted_score
        ));
    }

    if near_tie.is_near_tie {
        guidance.push(
            "The leading scores are inside the near-tie band; treat the ranking as a \
             shortlist and decide on qualitative trade-offs."
                .to_string(),
        );
    } else {
        guidance.push(format!(
            "The {:.2} gap to the runner-up is outside the near-tie threshold of {:.2}.",
            near_tie.score_difference, near_tie.threshold_used
        ));
    }

    match confidence {
        ConfidenceLevel::High => {}
        ConfidenceLevel::Medium => guidance.push(
            "Confidence is Medium: defaulted fields or extreme ratings reduce trust in the \
             precision of the result."
                .to_string(),
        ),
        ConfidenceLevel::Low => guidance.push(
            "Confidence is Low: validate these results with stakeholders before acting on them."
                .to_string(),
        ),
    }

    guidance
}
