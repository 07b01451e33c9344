//! Interactive modification session - what-if analysis over a profile.
//!
//! Modifications apply strictly sequentially, each producing a before/after
//! scoring pair. The in-memory history is the system's only audit trail.
//!
//! # Invariants
//!
//! - A failed modification leaves history and current constraints untouched.
//! - `history[k].constraints_after` equals the profile produced by applying
//!   the first k+1 modifications to the initial profile.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{ConstraintField, ConstraintValue, SessionId, Timestamp};
use crate::domain::profile::ConstraintProfile;
use crate::domain::scoring::{score_architectures, ScoringResults};

use super::SessionError;

/// One requested constraint change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintModification {
    pub field: ConstraintField,
    pub new_value: i64,
    pub reason: Option<String>,
}

/// An applied modification, with the resulting constraint snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModificationRecord {
    pub step: usize,
    pub field: ConstraintField,
    pub old_value: ConstraintValue,
    pub new_value: ConstraintValue,
    pub reason: Option<String>,
    pub applied_at: Timestamp,
    /// Constraint state after this step; revert restores these snapshots.
    pub constraints_after: ConstraintProfile,
}

/// Before/after impact of a single modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactAnalysis {
    pub field: ConstraintField,
    pub old_value: ConstraintValue,
    pub new_value: ConstraintValue,
    pub before: ScoringResults,
    pub after: ScoringResults,
    pub ranking_changed: bool,
    pub change_summary: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Comparison of the current session state against its starting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionComparison {
    pub initial: ScoringResults,
    pub current: ScoringResults,
    pub changed_fields: Vec<FieldChange>,
    pub ranking_changed: bool,
    pub summary: Vec<String>,
}

/// One field that differs from the initial profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: ConstraintField,
    pub initial_value: ConstraintValue,
    pub current_value: ConstraintValue,
}

/// A sequential what-if session over one starting profile.
#[derive(Debug, Clone)]
pub struct ModificationSession {
    id: SessionId,
    started_at: Timestamp,
    initial_constraints: ConstraintProfile,
    initial_results: ScoringResults,
    current_constraints: ConstraintProfile,
    current_results: ScoringResults,
    history: Vec<ModificationRecord>,
}

impl ModificationSession {
    /// Starts a session, computing the baseline scoring once.
    pub fn start(profile: ConstraintProfile) -> Self {
        let results = score_architectures(&profile);
        Self {
            id: SessionId::new(),
            started_at: Timestamp::now(),
            initial_constraints: profile.clone(),
            initial_results: results.clone(),
            current_constraints: profile,
            current_results: results,
            history: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns when the session started.
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Returns the starting profile.
    pub fn initial_constraints(&self) -> &ConstraintProfile {
        &self.initial_constraints
    }

    /// Returns the current profile.
    pub fn current_constraints(&self) -> &ConstraintProfile {
        &self.current_constraints
    }

    /// Returns the baseline scoring.
    pub fn initial_results(&self) -> &ScoringResults {
        &self.initial_results
    }

    /// Returns the scoring for the current profile.
    pub fn current_results(&self) -> &ScoringResults {
        &self.current_results
    }

    /// Returns the applied modifications, oldest first.
    pub fn history(&self) -> &[ModificationRecord] {
        &self.history
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Applies one constraint change.
    ///
    /// # Errors
    ///
    /// `InvalidValue` if the value is outside [1, 10]; the session is left
    /// exactly as it was.
    pub fn modify(
        &mut self,
        field: ConstraintField,
        new_value: i64,
        reason: Option<String>,
    ) -> Result<ImpactAnalysis, SessionError> {
        let value = ConstraintValue::try_for_field(field, new_value)?;
        Ok(self.apply_validated(field, value, reason))
    }

    /// Applies a batch of changes sequentially.
    ///
    /// Atomic: every entry is validated before any is applied, so an
    /// invalid entry rejects the whole batch with state unchanged.
    pub fn batch_modify(
        &mut self,
        modifications: &[ConstraintModification],
    ) -> Result<Vec<ImpactAnalysis>, SessionError> {
        if modifications.is_empty() {
            return Err(SessionError::EmptyBatch);
        }

        let mut validated = Vec::with_capacity(modifications.len());
        for modification in modifications {
            let value = ConstraintValue::try_for_field(modification.field, modification.new_value)?;
            validated.push((modification.field, value, modification.reason.clone()));
        }

        Ok(validated
            .into_iter()
            .map(|(field, value, reason)| self.apply_validated(field, value, reason))
            .collect())
    }

    /// Restores the constraint state after modification `index`, dropping
    /// all later history.
    ///
    /// # Errors
    ///
    /// `StepOutOfRange` if no such step exists; state is unchanged.
    pub fn revert_to_step(&mut self, index: usize) -> Result<ScoringResults, SessionError> {
        if index >= self.history.len() {
            return Err(SessionError::StepOutOfRange {
                index,
                len: self.history.len(),
            });
        }

        self.current_constraints = self.history[index].constraints_after.clone();
        self.history.truncate(index + 1);
        self.current_results = score_architectures(&self.current_constraints);
        debug!(step = index, "session reverted");
        Ok(self.current_results.clone())
    }

    /// Discards all modifications and returns to the starting profile.
    pub fn reset_to_initial(&mut self) {
        self.current_constraints = self.initial_constraints.clone();
        self.current_results = self.initial_results.clone();
        self.history.clear();
    }

    /// Compares the current state against the starting point.
    pub fn compare_with_initial(&self) -> SessionComparison {
        let changed_fields: Vec<FieldChange> = ConstraintField::ALL
            .iter()
            .filter_map(|field| {
                let initial_value = self.initial_constraints.value(*field);
                let current_value = self.current_constraints.value(*field);
                (initial_value != current_value).then(|| FieldChange {
                    field: *field,
                    initial_value,
                    current_value,
                })
            })
            .collect();

        let ranking_changed = self.initial_results.ranking() != self.current_results.ranking();

        let mut summary = Vec::new();
        if changed_fields.is_empty() {
            summary.push("No constraints differ from the starting profile.".to_string());
        } else {
            for change in &changed_fields {
                summary.push(format!(
                    "{}: {} -> {}",
                    change.field.key(),
                    change.initial_value,
                    change.current_value
                ));
            }
        }
        summary.extend(score_movements(&self.initial_results, &self.current_results));
        if ranking_changed {
            summary.push(format!(
                "Recommended architecture changed from {} to {}.",
                self.initial_results.top().architecture,
                self.current_results.top().architecture
            ));
        }

        SessionComparison {
            initial: self.initial_results.clone(),
            current: self.current_results.clone(),
            changed_fields,
            ranking_changed,
            summary,
        }
    }

    fn apply_validated(
        &mut self,
        field: ConstraintField,
        value: ConstraintValue,
        reason: Option<String>,
    ) -> ImpactAnalysis {
        let old_value = self.current_constraints.value(field);
        let before = self.current_results.clone();

        let next_constraints = self.current_constraints.with_value(field, value);
        let after = score_architectures(&next_constraints);

        self.history.push(ModificationRecord {
            step: self.history.len(),
            field,
            old_value,
            new_value: value,
            reason,
            applied_at: Timestamp::now(),
            constraints_after: next_constraints.clone(),
        });
        self.current_constraints = next_constraints;
        self.current_results = after.clone();

        build_impact(field, old_value, value, before, after)
    }
}

fn build_impact(
    field: ConstraintField,
    old_value: ConstraintValue,
    new_value: ConstraintValue,
    before: ScoringResults,
    after: ScoringResults,
) -> ImpactAnalysis {
    let ranking_changed = before.ranking() != after.ranking();

    let mut change_summary = vec![format!(
        "{}: {} -> {}",
        field.key(),
        old_value,
        new_value
    )];
    change_summary.extend(score_movements(&before, &after));
    if ranking_changed {
        change_summary.push(format!(
            "Recommended architecture changed from {} to {}.",
            before.top().architecture,
            after.top().architecture
        ));
    }
    if !before.near_tie.is_near_tie && after.near_tie.is_near_tie {
        change_summary.push("The result is now inside the near-tie band.".to_string());
    } else if before.near_tie.is_near_tie && !after.near_tie.is_near_tie {
        change_summary.push("The result is no longer inside the near-tie band.".to_string());
    }

    let mut recommendations = Vec::new();
    if ranking_changed {
        recommendations.push(format!(
            "Revisit the qualitative trade-offs for {} before adopting the new ranking.",
            after.top().architecture
        ));
    }
    if after.near_tie.is_near_tie {
        recommendations.push(
            "Scores sit inside the near-tie band; use the tie guidance rather than the raw \
             ranking."
                .to_string(),
        );
    }
    if after.trade_offs.has_conflicts && !before.trade_offs.has_conflicts {
        recommendations
            .push("This change introduced a constraint tension; review the conflict warnings."
                .to_string());
    }
    if recommendations.is_empty() {
        recommendations
            .push("The change does not alter the recommendation; no further action needed."
                .to_string());
    }

    ImpactAnalysis {
        field,
        old_value,
        new_value,
        before,
        after,
        ranking_changed,
        change_summary,
        recommendations,
    }
}

fn score_movements(before: &ScoringResults, after: &ScoringResults) -> Vec<String> {
    after
        .scores
        .iter()
        .filter_map(|score| {
            let previous = before.score_for(score.architecture)?;
            let delta = score.weighted_score - previous.weighted_score;
            (delta.abs() >= 0.005).then(|| {
                format!(
                    "{}: {:.2} -> {:.2} ({:+.2})",
                    score.architecture, previous.weighted_score, score.weighted_score, delta
                )
            })
        })
        .collect()
}
