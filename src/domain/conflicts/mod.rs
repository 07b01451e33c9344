//! Conflict module - Trade-off detection over constraint profiles.
//!
//! A fixed, ordered rule set surfaces known tension patterns (for example
//! strict compliance against a tight budget) with structured explanations.

pub mod rules;
mod synthesizer;

pub use rules::{Comparison, ConflictRule, RuleCondition, CONFLICT_RULES};
pub use synthesizer::{
    detect_conflicts, detect_conflicts_with, ConflictAnalysis, ConflictWarning, SynthesisError,
};
