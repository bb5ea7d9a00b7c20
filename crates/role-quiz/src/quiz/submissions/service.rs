use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::super::analysis::{dominance_score, ConfidenceBand, ConfidenceThresholds};
use super::super::bonus::BonusSelector;
use super::super::domain::{Question, ResponseMap, Role};
use super::super::scoring::{ScoringConfig, ScoringEngine};
use super::domain::{QuizSubmissionRequest, RequestMetadata, SubmissionId};
use super::repository::{RepositoryError, SubmissionRecord, SubmissionRepository};
use super::validation::{ResponseValidator, ValidationViolation};

/// Service composing the validator, the scoring engine, the bonus selector,
/// and the repository.
pub struct QuizSubmissionService<R> {
    validator: Arc<ResponseValidator>,
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
    selector: BonusSelector,
    thresholds: ConfidenceThresholds,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("sub-{id:06}"))
}

impl<R> QuizSubmissionService<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        Self::with_validator(ResponseValidator::standard(), repository, config)
    }

    pub fn with_validator(
        validator: ResponseValidator,
        repository: Arc<R>,
        config: ScoringConfig,
    ) -> Self {
        Self {
            validator: Arc::new(validator),
            repository,
            engine: Arc::new(ScoringEngine::new(config)),
            selector: BonusSelector::default(),
            thresholds: ConfidenceThresholds::default(),
        }
    }

    /// The core questions a client should present.
    pub fn questions(&self) -> &[Question] {
        self.validator.core_questions()
    }

    /// Validate, score, derive the analytics fields, and persist.
    pub fn submit(
        &self,
        request: QuizSubmissionRequest,
        metadata: RequestMetadata,
    ) -> Result<SubmissionRecord, SubmissionServiceError> {
        let responses = self.validator.validate(&request.responses, true)?;
        let result = self.engine.score(&responses, self.validator.bank());

        let dominance = dominance_score(&result.ranked);
        let band = ConfidenceBand::classify(dominance, result.tie_detected, &self.thresholds);

        let record = SubmissionRecord {
            submission_id: next_submission_id(),
            respondent: request.respondent,
            team: request.team,
            responses,
            result,
            dominance_score: dominance,
            confidence_band: band,
            metadata,
            submitted_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            submission = %stored.submission_id.0,
            primary = %stored.result.primary_label(),
            band = band.label(),
            "quiz submission scored"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &SubmissionId) -> Result<SubmissionRecord, SubmissionServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Score a partial response set and decide which bonus questions to
    /// present. The caller folds bonus answers into the same map and submits
    /// the enlarged set; totals accumulate monotonically.
    pub fn bonus_round(
        &self,
        responses: &ResponseMap,
    ) -> Result<BonusRound, SubmissionServiceError> {
        let sanitized = self.validator.validate(responses, false)?;
        let preliminary = self.engine.score(&sanitized, self.validator.bank());
        let questions = self
            .selector
            .select(&preliminary, self.validator.bonus_questions());

        Ok(BonusRound {
            preliminary_totals: preliminary.totals,
            tie_detected: preliminary.tie_detected,
            questions,
        })
    }

    /// Aggregate view over all stored submissions for the admin surface.
    pub fn summary(&self) -> Result<SubmissionSummary, SubmissionServiceError> {
        let records = self.repository.list()?;

        let mut primary_roles: BTreeMap<String, u32> = BTreeMap::new();
        let mut confidence_bands: BTreeMap<String, u32> = BTreeMap::new();
        let mut skills: BTreeMap<String, u32> = BTreeMap::new();

        for record in &records {
            *primary_roles
                .entry(record.result.primary_label())
                .or_insert(0) += 1;
            *confidence_bands
                .entry(record.confidence_band.label().to_string())
                .or_insert(0) += 1;
            for (tag, count) in &record.result.skill_profile {
                *skills.entry(tag.clone()).or_insert(0) += count;
            }
        }

        let mut top_skills: Vec<SkillCount> = skills
            .into_iter()
            .map(|(tag, count)| SkillCount { tag, count })
            .collect();
        top_skills.sort_by(|a, b| b.count.cmp(&a.count).then(a.tag.cmp(&b.tag)));
        top_skills.truncate(10);

        Ok(SubmissionSummary {
            submissions: records.len(),
            primary_roles,
            confidence_bands,
            top_skills,
        })
    }
}

/// The bonus-round contract: preliminary totals plus the questions to fold in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusRound {
    pub preliminary_totals: BTreeMap<Role, i32>,
    pub tie_detected: bool,
    pub questions: Vec<Question>,
}

/// Admin aggregate over stored submissions. Rendering is the dashboard's
/// problem; this is just the numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionSummary {
    pub submissions: usize,
    pub primary_roles: BTreeMap<String, u32>,
    pub confidence_bands: BTreeMap<String, u32>,
    pub top_skills: Vec<SkillCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCount {
    pub tag: String,
    pub count: u32,
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
