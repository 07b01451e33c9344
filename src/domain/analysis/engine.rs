//! Analysis engine - validation, scoring, and conflict detection in one call.
//!
//! Results are memoized per engine instance, keyed by the canonical
//! serialization of the six constraint values plus the profile's derived
//! metadata (the metadata changes confidence, so it must key the cache too).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::domain::conflicts::ConflictAnalysis;
use crate::domain::foundation::Timestamp;
use crate::domain::profile::{
    validate_and_build, validate_and_build_json, Assumption, ConstraintProfile, RawProfileInput,
};
use crate::domain::scoring::{score_architectures, ArchitectureScore, NearTieResult};

/// Version stamped into every analysis result.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Aggregate root returned by a top-level analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub profile: ConstraintProfile,
    /// Ranked best-first; always exactly three entries.
    pub scores: Vec<ArchitectureScore>,
    pub conflicts: ConflictAnalysis,
    pub trade_off_summary: String,
    pub near_tie: NearTieResult,
    pub assumptions: Vec<Assumption>,
    pub interpretation: Vec<String>,
    pub analyzed_at: Timestamp,
    pub engine_version: String,
    /// True when any component degraded to its fallback path.
    pub is_fallback: bool,
}

/// Stateful front door: validates input, scores, and caches by profile.
#[derive(Debug, Default)]
pub struct AnalysisEngine {
    cache: HashMap<String, AnalysisResult>,
}

impl AnalysisEngine {
    /// Creates an engine with an empty memoization cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates raw input and analyzes the materialized profile.
    pub fn analyze(&mut self, input: &RawProfileInput) -> AnalysisResult {
        let validation = validate_and_build(input);
        self.analyze_profile(&validation.profile)
    }

    /// Analyzes arbitrary JSON input; uninterpretable input degrades to the
    /// all-defaults profile rather than raising.
    pub fn analyze_json(&mut self, value: &serde_json::Value) -> AnalysisResult {
        let validation = validate_and_build_json(value);
        self.analyze_profile(&validation.profile)
    }

    /// Analyzes a materialized profile, reusing a cached result when the
    /// same profile was analyzed before in this session.
    pub fn analyze_profile(&mut self, profile: &ConstraintProfile) -> AnalysisResult {
        let key = cache_key(profile);
        if let Some(cached) = self.cache.get(&key) {
            debug!(key = %key, "analysis cache hit");
            return cached.clone();
        }

        let result = compute_analysis(profile);
        self.cache.insert(key, result.clone());
        result
    }

    /// Number of distinct profiles analyzed in this session.
    pub fn cached_profiles(&self) -> usize {
        self.cache.len()
    }
}

fn cache_key(profile: &ConstraintProfile) -> String {
    format!(
        "{}#{}#{}",
        profile.canonical_key(),
        profile.input_completeness(),
        profile.assumption_count()
    )
}

fn compute_analysis(profile: &ConstraintProfile) -> AnalysisResult {
    let scoring = score_architectures(profile);
    let is_fallback = scoring.is_fallback || scoring.trade_offs.is_fallback;

    AnalysisResult {
        profile: profile.clone(),
        trade_off_summary: trade_off_summary(&scoring.trade_offs),
        assumptions: profile.assumptions().to_vec(),
        scores: scoring.scores,
        conflicts: scoring.trade_offs,
        near_tie: scoring.near_tie,
        interpretation: scoring.interpretation,
        analyzed_at: Timestamp::now(),
        engine_version: ENGINE_VERSION.to_string(),
        is_fallback,
    }
}

fn trade_off_summary(conflicts: &ConflictAnalysis) -> String {
    if conflicts.is_fallback {
        return "Conflict analysis fell back to a manual-review heuristic.".to_string();
    }
    match conflicts.conflicts.len() {
        0 => "No constraint tensions detected.".to_string(),
        1 => format!(
            "1 constraint tension detected: {}.",
            conflicts.conflicts[0].title
        ),
        n => {
            let titles: Vec<&str> = conflicts.conflicts.iter().map(|c| c.title.as_str()).collect();
            format!("{} constraint tensions detected: {}.", n, titles.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ConstraintField;
    use serde_json::json;

    #[test]
    fn analysis_carries_three_scores_and_version() {
        let mut engine = AnalysisEngine::new();
        let result = engine.analyze(&RawProfileInput::empty());

        assert_eq!(result.scores.len(), 3);
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(result.assumptions.len(), 6);
        assert!(!result.is_fallback);
    }

    #[test]
    fn repeated_analysis_hits_the_cache() {
        let mut engine = AnalysisEngine::new();
        let first = engine.analyze(&RawProfileInput::empty());
        let second = engine.analyze(&RawProfileInput::empty());

        assert_eq!(engine.cached_profiles(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_profiles_are_cached_separately() {
        let mut engine = AnalysisEngine::new();
        engine.analyze(&RawProfileInput::empty());
        engine.analyze(&RawProfileInput::empty().set(ConstraintField::RiskTolerance, 9));

        assert_eq!(engine.cached_profiles(), 2);
    }

    #[test]
    fn same_values_with_different_metadata_do_not_collide() {
        let mut engine = AnalysisEngine::new();
        // All-defaults via empty input: moderate values, 6 assumptions.
        let defaulted = engine.analyze(&RawProfileInput::empty());
        // Explicit moderate values: same numbers, no assumptions.
        let explicit = engine.analyze_profile(&ConstraintProfile::balanced());

        assert_eq!(engine.cached_profiles(), 2);
        assert_ne!(
            defaulted.scores[0].confidence,
            explicit.scores[0].confidence
        );
    }

    #[test]
    fn uninterpretable_json_degrades_instead_of_raising() {
        let mut engine = AnalysisEngine::new();
        let result = engine.analyze_json(&json!("not an object"));

        assert_eq!(result.scores.len(), 3);
        assert_eq!(result.assumptions.len(), 1);
    }

    #[test]
    fn trade_off_summary_names_fired_tensions() {
        let mut engine = AnalysisEngine::new();
        let result = engine.analyze(&RawProfileInput::from_values(&[
            (ConstraintField::ComplianceStrictness, 9),
            (ConstraintField::CostSensitivity, 9),
        ]));

        assert!(result
            .trade_off_summary
            .contains("Strict compliance vs. tight budget"));
    }

    #[test]
    fn balanced_profile_summary_reports_no_tensions() {
        let mut engine = AnalysisEngine::new();
        let result = engine.analyze_profile(&ConstraintProfile::balanced());
        assert_eq!(result.trade_off_summary, "No constraint tensions detected.");
    }
}
