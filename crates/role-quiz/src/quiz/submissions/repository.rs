use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::analysis::ConfidenceBand;
use super::super::domain::ResponseMap;
use super::super::scoring::ScoringResult;
use super::domain::{RequestMetadata, SubmissionId};

/// Persisted record: the raw responses, the engine's output copied verbatim,
/// and the caller-derived analytics fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub submission_id: SubmissionId,
    pub respondent: String,
    pub team: Option<String>,
    pub responses: ResponseMap,
    pub result: ScoringResult,
    pub dominance_score: i32,
    pub confidence_band: ConfidenceBand,
    pub metadata: RequestMetadata,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Sanitized projection for API responses: no raw responses, no metadata.
    pub fn view(&self) -> SubmissionView {
        SubmissionView {
            submission_id: self.submission_id.clone(),
            respondent: self.respondent.clone(),
            team: self.team.clone(),
            primary_role: self.result.primary_label(),
            secondary_role: self.result.secondary.map(|role| role.code().to_string()),
            tie_detected: self.result.tie_detected,
            dominance_score: self.dominance_score,
            confidence_band: self.confidence_band,
            totals: self
                .result
                .ranked
                .iter()
                .map(|standing| RankedView {
                    role: standing.role.code().to_string(),
                    total: standing.total,
                    rank: standing.rank,
                })
                .collect(),
            narrative: self.result.narrative.clone(),
        }
    }
}

/// Exposed status of a stored submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionView {
    pub submission_id: SubmissionId,
    pub respondent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    pub primary_role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_role: Option<String>,
    pub tie_detected: bool,
    pub dominance_score: i32,
    pub confidence_band: ConfidenceBand,
    pub totals: Vec<RankedView>,
    pub narrative: String,
}

/// One ranked row in a view payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedView {
    pub role: String,
    pub total: i32,
    pub rank: usize,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<SubmissionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
