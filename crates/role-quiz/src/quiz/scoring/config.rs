use serde::{Deserialize, Serialize};

/// Dials for the scoring pass. Defaults match the shipped question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Minimum single-role value an option must award before it counts as a
    /// strong signal. Checked per role independently: every role meeting the
    /// threshold gets its count incremented.
    pub strong_signal_threshold: i32,
    /// Whether multi-select options can qualify as strong signals.
    pub multi_select_strong_signals: bool,
    /// Maximum number of evidence highlights retained in a result.
    pub evidence_limit: usize,
    /// The secondary role is mentioned in the narrative when the gap to the
    /// leader is within this percentage of the observed score range.
    pub secondary_margin_percent: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            strong_signal_threshold: 2,
            multi_select_strong_signals: true,
            evidence_limit: 5,
            secondary_margin_percent: 20,
        }
    }
}
