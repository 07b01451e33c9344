//! Confidence tier assigned to scoring output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much trust to place in a computed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Maps a deduction-based point total to a tier.
    ///
    /// High at 80 points or more, Medium at 60 or more, Low otherwise.
    pub fn from_points(points: i32) -> Self {
        if points >= 80 {
            ConfidenceLevel::High
        } else if points >= 60 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
