//! Near-tie detection over the ranked architecture scores.
//!
//! Pure function of the three sorted scores; never touches the constraint
//! profile. When scores sit inside the threshold the messaging steers the
//! reader toward qualitative trade-offs instead of the numeric ranking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ArchitectureType, ConfidenceLevel};

use super::engine::ArchitectureScore;
use super::{NEAR_TIE_THRESHOLD, TIE_DETECTION_MARGIN};

/// Classification of how separated the ranked scores are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieType {
    NoTie,
    TwoWayTie,
    ThreeWayTie,
}

/// Structured guidance attached to a tie classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieMessaging {
    pub primary: String,
    pub explanation: String,
    /// Present whenever a tie was detected.
    pub score_warning: Option<String>,
    pub guidance: Vec<String>,
}

/// Outcome of near-tie detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearTieResult {
    pub is_near_tie: bool,
    pub tie_type: TieType,
    pub tied_architectures: Vec<ArchitectureType>,
    /// Gap between the top two scores, regardless of tie type.
    pub score_difference: f64,
    pub threshold_used: f64,
    pub detection_confidence: ConfidenceLevel,
    pub messaging: TieMessaging,
}

/// Classifies the separation of the ranked scores.
///
/// Expects the scores sorted descending; fewer than two entries counts as
/// a clear result.
pub fn detect_near_tie(scores: &[ArchitectureScore]) -> NearTieResult {
    if scores.len() < 2 {
        return clear_result(scores, 0.0);
    }

    let top_gap = scores[0].weighted_score - scores[1].weighted_score;
    let full_spread = scores
        .last()
        .map(|last| scores[0].weighted_score - last.weighted_score)
        .unwrap_or(top_gap);

    if scores.len() >= 3 && full_spread < NEAR_TIE_THRESHOLD {
        three_way_result(scores, top_gap)
    } else if top_gap < NEAR_TIE_THRESHOLD {
        two_way_result(scores, top_gap)
    } else {
        clear_result(scores, top_gap)
    }
}

/// High when the top gap sits comfortably away from the threshold, Medium
/// when it is close enough that small input changes could flip the class.
fn detection_confidence(top_gap: f64) -> ConfidenceLevel {
    if (top_gap - NEAR_TIE_THRESHOLD).abs() >= TIE_DETECTION_MARGIN {
        ConfidenceLevel::High
    } else {
        ConfidenceLevel::Medium
    }
}

fn score_warning() -> String {
    "Do not use the raw numeric scores to break this tie; at this separation the \
     ranking order is not meaningful."
        .to_string()
}

fn clear_result(scores: &[ArchitectureScore], top_gap: f64) -> NearTieResult {
    let leader = scores.first();
    let primary = match leader {
        Some(top) => format!(
            "{} leads with a {:.2} point margin.",
            top.architecture, top_gap
        ),
        None => "No architecture scores were available.".to_string(),
    };

    NearTieResult {
        is_near_tie: false,
        tie_type: TieType::NoTie,
        tied_architectures: Vec::new(),
        score_difference: top_gap,
        threshold_used: NEAR_TIE_THRESHOLD,
        detection_confidence: detection_confidence(top_gap),
        messaging: TieMessaging {
            primary,
            explanation: format!(
                "The separation exceeds the near-tie threshold of {:.2}, so the numeric \
                 ranking is meaningful for this profile.",
                NEAR_TIE_THRESHOLD
            ),
            score_warning: None,
            guidance: vec![
                "Validate the leader's top strengths against your two highest-rated constraints"
                    .to_string(),
                "Review the trade-off warnings before finalizing the selection".to_string(),
            ],
        },
    }
}

fn two_way_result(scores: &[ArchitectureScore], top_gap: f64) -> NearTieResult {
    let first = scores[0].architecture;
    let second = scores[1].architecture;
    let excluded = scores.get(2).map(|s| s.architecture);

    let explanation = match excluded {
        Some(third) => format!(
            "{} and {} are closer than the {:.2} threshold, while {} is clearly separated \
             and can be set aside on numeric grounds.",
            first, second, NEAR_TIE_THRESHOLD, third
        ),
        None => format!(
            "{} and {} are closer than the {:.2} threshold.",
            first, second, NEAR_TIE_THRESHOLD
        ),
    };

    NearTieResult {
        is_near_tie: true,
        tie_type: TieType::TwoWayTie,
        tied_architectures: vec![first, second],
        score_difference: top_gap,
        threshold_used: NEAR_TIE_THRESHOLD,
        detection_confidence: detection_confidence(top_gap),
        messaging: TieMessaging {
            primary: format!(
                "{} and {} are effectively tied ({:.2} points apart).",
                first, second, top_gap
            ),
            explanation,
            score_warning: Some(score_warning()),
            guidance: vec![
                format!(
                    "Compare the qualitative strengths of {} and {} against your hardest constraint",
                    first, second
                ),
                "Pilot the decision-critical capability of each finalist before committing"
                    .to_string(),
                "Prefer the finalist whose operational demands match your current maturity"
                    .to_string(),
            ],
        },
    }
}

fn three_way_result(scores: &[ArchitectureScore], top_gap: f64) -> NearTieResult {
    NearTieResult {
        is_near_tie: true,
        tie_type: TieType::ThreeWayTie,
        tied_architectures: scores.iter().map(|s| s.architecture).collect(),
        score_difference: top_gap,
        threshold_used: NEAR_TIE_THRESHOLD,
        detection_confidence: detection_confidence(top_gap),
        messaging: TieMessaging {
            primary: format!(
                "All three architectures score within {:.2} of each other.",
                NEAR_TIE_THRESHOLD
            ),
            explanation: "The constraint profile does not separate the candidates numerically; \
                          differences this small are inside the model's precision."
                .to_string(),
            score_warning: Some(score_warning()),
            guidance: vec![
                "Walk through the qualitative strengths of each architecture against your \
                 hardest constraint"
                    .to_string(),
                "Run a tabletop exercise for a high-impact incident under each architecture"
                    .to_string(),
                "Weigh operational familiarity: the pattern your team can run well beats a \
                 marginal score edge"
                    .to_string(),
                "Revisit the constraint ratings with stakeholders; small input changes may \
                 produce a clearer separation"
                    .to_string(),
            ],
        },
    }
}
