//! Quiz submission intake, validation, scoring, and persistence plumbing
//! around the pure scoring engine.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{QuizSubmissionRequest, RequestMetadata, SubmissionId};
pub use repository::{
    RankedView, RepositoryError, SubmissionRecord, SubmissionRepository, SubmissionView,
};
pub use router::quiz_router;
pub use service::{
    BonusRound, QuizSubmissionService, SkillCount, SubmissionServiceError, SubmissionSummary,
};
pub use validation::{ResponseValidator, ValidationViolation};
