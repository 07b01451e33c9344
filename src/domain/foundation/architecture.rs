//! The three zero-trust architecture patterns under comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A predefined security-architecture pattern.
///
/// Declaration order doubles as the stable secondary sort when weighted
/// scores tie exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchitectureType {
    /// Identity-centric: strong verification at every access decision.
    IrmHeavy,
    /// Behavior-centric: continuous analytics over user and entity activity.
    UrmHeavy,
    /// Blend of identity verification and behavioral analytics.
    Hybrid,
}

impl ArchitectureType {
    /// All architecture types in declaration order.
    pub const ALL: [ArchitectureType; 3] = [
        ArchitectureType::IrmHeavy,
        ArchitectureType::UrmHeavy,
        ArchitectureType::Hybrid,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ArchitectureType::IrmHeavy => "IRM-Heavy",
            ArchitectureType::UrmHeavy => "URM-Heavy",
            ArchitectureType::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for ArchitectureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_three_architectures() {
        assert_eq!(ArchitectureType::ALL.len(), 3);
    }

    #[test]
    fn labels_match_pattern_identifiers() {
        assert_eq!(ArchitectureType::IrmHeavy.label(), "IRM-Heavy");
        assert_eq!(ArchitectureType::UrmHeavy.label(), "URM-Heavy");
        assert_eq!(ArchitectureType::Hybrid.label(), "Hybrid");
    }

    #[test]
    fn serializes_as_kebab_case() {
        let json = serde_json::to_string(&ArchitectureType::IrmHeavy).unwrap();
        assert_eq!(json, "\"irm-heavy\"");
    }
}
