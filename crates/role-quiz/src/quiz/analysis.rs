//! Derived fields computed by callers from a [`ScoringResult`], not by the
//! engine itself: the dominance score and its qualitative confidence band.

use serde::{Deserialize, Serialize};

use super::scoring::RoleStanding;

/// Top-ranked total minus second-ranked total. Zero when fewer than two
/// standings exist.
pub fn dominance_score(ranked: &[RoleStanding]) -> i32 {
    match (ranked.first(), ranked.get(1)) {
        (Some(top), Some(second)) => top.total - second.total,
        _ => 0,
    }
}

/// Cutoffs for bucketing dominance into bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    pub strong: i32,
    pub clear: i32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self { strong: 6, clear: 3 }
    }
}

/// Qualitative read of how decisive a result is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    Strong,
    Clear,
    Split,
    Hybrid,
}

impl ConfidenceBand {
    pub fn classify(dominance: i32, tie_detected: bool, thresholds: &ConfidenceThresholds) -> Self {
        if tie_detected {
            ConfidenceBand::Hybrid
        } else if dominance >= thresholds.strong {
            ConfidenceBand::Strong
        } else if dominance >= thresholds.clear {
            ConfidenceBand::Clear
        } else {
            ConfidenceBand::Split
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceBand::Strong => "strong",
            ConfidenceBand::Clear => "clear",
            ConfidenceBand::Split => "split",
            ConfidenceBand::Hybrid => "hybrid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::domain::Role;
    use super::*;

    fn ranked(top: i32, second: i32) -> Vec<RoleStanding> {
        vec![
            RoleStanding {
                role: Role::Be,
                total: top,
                strong_signals: 0,
                rank: 1,
            },
            RoleStanding {
                role: Role::Fe,
                total: second,
                strong_signals: 0,
                rank: 2,
            },
        ]
    }

    #[test]
    fn dominance_is_top_minus_second() {
        assert_eq!(dominance_score(&ranked(10, 4)), 6);
        assert_eq!(dominance_score(&[]), 0);
    }

    #[test]
    fn bands_bucket_dominance() {
        let thresholds = ConfidenceThresholds::default();
        assert_eq!(
            ConfidenceBand::classify(7, false, &thresholds),
            ConfidenceBand::Strong
        );
        assert_eq!(
            ConfidenceBand::classify(4, false, &thresholds),
            ConfidenceBand::Clear
        );
        assert_eq!(
            ConfidenceBand::classify(1, false, &thresholds),
            ConfidenceBand::Split
        );
    }

    #[test]
    fn ties_always_classify_as_hybrid() {
        let thresholds = ConfidenceThresholds::default();
        assert_eq!(
            ConfidenceBand::classify(0, true, &thresholds),
            ConfidenceBand::Hybrid
        );
    }
}
