//! The scoring engine: a pure function from a response map and a question
//! bank to a [`ScoringResult`]. No I/O, no clock, no randomness; repeated
//! calls over the same input produce identical results. It is server-side
//! only and never trusts the client: malformed input degrades to
//! skip-and-continue rather than an error.

mod config;
mod narrative;
mod ranking;
mod rules;

pub use config::ScoringConfig;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Question, QuestionId, ResponseMap, Role, RoleAssignment};

/// Stateless scorer parameterized by a [`ScoringConfig`].
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a (possibly empty, possibly partial) response map against the
    /// bank. Total over well-formed input: it never fails, it only skips.
    pub fn score(&self, responses: &ResponseMap, bank: &[Question]) -> ScoringResult {
        let acc = rules::accumulate(responses, bank, &self.config);

        let ranked = ranking::rank_roles(&acc.totals, &acc.strong_signal_counts);
        let (primary, secondary, tie_detected) = ranking::assign_primary(&ranked);

        let mut evidence_highlights = acc.evidence;
        evidence_highlights.sort_by(|a, b| b.score.cmp(&a.score));
        evidence_highlights.truncate(self.config.evidence_limit);

        let narrative = narrative::compose(
            &primary,
            secondary,
            tie_detected,
            &ranked,
            &acc.contributions,
            self.config.secondary_margin_percent,
        );

        ScoringResult {
            totals: acc.totals,
            strong_signal_counts: acc.strong_signal_counts,
            ranked,
            primary,
            secondary,
            tie_detected,
            skill_profile: acc.skill_profile,
            evidence_highlights,
            contributions: acc.contributions,
            narrative,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// One row of the ranking: competition rank semantics, tied entries share a
/// rank number (1, 1, 3, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStanding {
    pub role: Role,
    pub total: i32,
    pub strong_signals: u32,
    pub rank: usize,
}

/// A selected option recorded because it qualified as a strong signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceHighlight {
    pub question_id: QuestionId,
    pub prompt: String,
    pub option_text: String,
    pub evidence: String,
    pub tags: Vec<String>,
    pub score: i32,
}

/// Per-question winning role and score, kept for narrative generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionContribution {
    pub question_id: QuestionId,
    pub prompt: String,
    pub role: Role,
    pub score: i32,
}

/// The engine's complete output, produced fresh on every call and copied
/// verbatim into whatever submission record the caller persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub totals: BTreeMap<Role, i32>,
    pub strong_signal_counts: BTreeMap<Role, u32>,
    pub ranked: Vec<RoleStanding>,
    pub primary: RoleAssignment,
    pub secondary: Option<Role>,
    pub tie_detected: bool,
    pub skill_profile: BTreeMap<String, u32>,
    pub evidence_highlights: Vec<EvidenceHighlight>,
    pub contributions: Vec<QuestionContribution>,
    pub narrative: String,
}

impl ScoringResult {
    pub fn primary_label(&self) -> String {
        self.primary.label()
    }
}
