//! The role-affinity quiz: domain types, the static question bank, the pure
//! scoring engine, derived analytics, bonus selection, and the submission
//! workflow wrapped around them.

pub mod analysis;
pub mod bank;
pub mod bonus;
pub mod domain;
pub mod scoring;
pub mod submissions;

pub use analysis::{dominance_score, ConfidenceBand, ConfidenceThresholds};
pub use bonus::BonusSelector;
pub use domain::{
    Question, QuestionId, QuestionKind, QuestionOption, Response, ResponseMap, Role,
    RoleAssignment, RoleScores,
};
pub use scoring::{
    EvidenceHighlight, QuestionContribution, RoleStanding, ScoringConfig, ScoringEngine,
    ScoringResult,
};
