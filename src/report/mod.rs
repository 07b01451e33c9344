//! Report module - plain-text rendering of engine results.
//!
//! Thin consumer of the engine's structured output. Fallback results are
//! rendered distinctly so degraded numbers are never presented as precise.

use std::fmt::Write;

use crate::domain::analysis::AnalysisResult;
use crate::domain::profile::ValidationResult;
use crate::domain::scoring::ScoringResults;
use crate::domain::session::ImpactAnalysis;

const FALLBACK_BANNER: &str =
    "!! MANUAL EVALUATION REQUIRED - automated analysis degraded to a fallback path !!";

/// Renders a full analysis result for the console.
pub fn render_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();

    if result.is_fallback {
        let _ = writeln!(out, "{}\n", FALLBACK_BANNER);
    }

    let _ = writeln!(out, "Architecture ranking");
    let _ = writeln!(out, "--------------------");
    for (rank, score) in result.scores.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {:<10} {:>5.2}  (confidence: {})",
            rank + 1,
            score.architecture.label(),
            score.weighted_score,
            score.confidence
        );
    }

    let _ = writeln!(out, "\n{}", result.near_tie.messaging.primary);
    if let Some(warning) = &result.near_tie.messaging.score_warning {
        let _ = writeln!(out, "Note: {}", warning);
    }

    if !result.assumptions.is_empty() {
        let _ = writeln!(out, "\nAssumptions");
        let _ = writeln!(out, "-----------");
        for assumption in &result.assumptions {
            match assumption.field {
                Some(field) => {
                    let _ = writeln!(
                        out,
                        "- {} defaulted to {}: {}",
                        field.key(),
                        assumption.assumed_value,
                        assumption.rationale
                    );
                }
                None => {
                    let _ = writeln!(out, "- {}", assumption.rationale);
                }
            }
        }
    }

    let _ = writeln!(out, "\nTrade-offs");
    let _ = writeln!(out, "----------");
    let _ = writeln!(out, "{}", result.trade_off_summary);
    for conflict in &result.conflicts.conflicts {
        let _ = writeln!(out, "\n[{}] {}", conflict.conflict_id, conflict.title);
        let _ = writeln!(out, "{}", conflict.description);
        for implication in &conflict.implications {
            let _ = writeln!(out, "  * {}", implication);
        }
        for suggestion in &conflict.resolution_suggestions {
            let _ = writeln!(out, "  > {}", suggestion);
        }
    }

    let _ = writeln!(out, "\nInterpretation");
    let _ = writeln!(out, "--------------");
    for line in &result.interpretation {
        let _ = writeln!(out, "- {}", line);
    }

    let _ = writeln!(
        out,
        "\nAnalyzed at {} (engine v{})",
        result.analyzed_at, result.engine_version
    );

    out
}

/// Renders validation findings, if any.
pub fn render_validation(validation: &ValidationResult) -> String {
    let mut out = String::new();

    for error in &validation.errors {
        let _ = writeln!(out, "error: {}", error);
    }
    for warning in &validation.warnings {
        match warning {
            crate::domain::profile::ValidationWarning::Contradiction { message, .. } => {
                let _ = writeln!(out, "warning: {}", message);
            }
            crate::domain::profile::ValidationWarning::UnknownField { key } => {
                let _ = writeln!(out, "warning: unknown field '{}' ignored", key);
            }
        }
    }

    out
}

/// Renders a compact ranking line for interactive use.
pub fn render_ranking(results: &ScoringResults) -> String {
    let mut out = String::new();
    if results.is_fallback {
        let _ = writeln!(out, "{}", FALLBACK_BANNER);
    }
    for score in &results.scores {
        let _ = write!(
            out,
            "{} {:.2}   ",
            score.architecture.label(),
            score.weighted_score
        );
    }
    let _ = writeln!(out, "(confidence: {})", results.overall_confidence);
    out
}

/// Renders the before/after impact of one modification.
pub fn render_impact(impact: &ImpactAnalysis) -> String {
    let mut out = String::new();

    for line in &impact.change_summary {
        let _ = writeln!(out, "{}", line);
    }
    let _ = writeln!(out, "\nRecommendations:");
    for recommendation in &impact.recommendations {
        let _ = writeln!(out, "- {}", recommendation);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::AnalysisEngine;
    use crate::domain::profile::{validate_and_build, ConstraintProfile, RawProfileInput};
    use crate::domain::foundation::ConstraintField;
    use crate::domain::session::ModificationSession;

    #[test]
    fn analysis_report_lists_all_three_architectures() {
        let mut engine = AnalysisEngine::new();
        let result = engine.analyze(&RawProfileInput::empty());
        let report = render_analysis(&result);

        assert!(report.contains("IRM-Heavy"));
        assert!(report.contains("URM-Heavy"));
        assert!(report.contains("Hybrid"));
        assert!(report.contains("Assumptions"));
    }

    #[test]
    fn clean_result_has_no_fallback_banner() {
        let mut engine = AnalysisEngine::new();
        let result = engine.analyze_profile(&ConstraintProfile::balanced());
        assert!(!render_analysis(&result).contains("MANUAL EVALUATION REQUIRED"));
    }

    #[test]
    fn validation_report_names_offending_fields() {
        let input = RawProfileInput::empty().set(ConstraintField::RiskTolerance, 0);
        let validation = validate_and_build(&input);
        let report = render_validation(&validation.validation);

        assert!(report.contains("risk_tolerance"));
        assert!(report.starts_with("error:"));
    }

    #[test]
    fn impact_report_shows_change_and_recommendations() {
        let mut session = ModificationSession::start(ConstraintProfile::balanced());
        let impact = session
            .modify(ConstraintField::ComplianceStrictness, 9, None)
            .unwrap();
        let report = render_impact(&impact);

        assert!(report.contains("compliance_strictness: 5 -> 9"));
        assert!(report.contains("Recommendations:"));
    }
}
