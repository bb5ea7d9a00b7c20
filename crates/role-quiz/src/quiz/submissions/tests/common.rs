use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::quiz::domain::{Response as QuizResponse, ResponseMap};
use crate::quiz::scoring::ScoringConfig;
use crate::quiz::submissions::domain::{QuizSubmissionRequest, RequestMetadata, SubmissionId};
use crate::quiz::submissions::repository::{
    RepositoryError, SubmissionRecord, SubmissionRepository,
};
use crate::quiz::submissions::service::QuizSubmissionService;

/// A complete core-bank response set with every answer favoring BE:
/// strong options on the forced/scale questions, the BE-leaning option on
/// the multi-selects, and the neutral rung on the non-BE scales.
pub(super) fn be_heavy_responses() -> ResponseMap {
    [
        (1u32, QuizResponse::Single(0)),
        (2, QuizResponse::Single(0)),
        (3, QuizResponse::Single(0)),
        (4, QuizResponse::Single(2)),
        (5, QuizResponse::Single(2)),
        (6, QuizResponse::Single(2)),
        (7, QuizResponse::Single(0)),
        (8, QuizResponse::Multi(vec![0])),
        (9, QuizResponse::Multi(vec![0])),
        (10, QuizResponse::Single(0)),
    ]
    .into_iter()
    .collect()
}

pub(super) fn request(responses: ResponseMap) -> QuizSubmissionRequest {
    QuizSubmissionRequest {
        respondent: "Sam Adebayo".to_string(),
        team: Some("Platform".to_string()),
        responses,
    }
}

pub(super) fn metadata() -> RequestMetadata {
    RequestMetadata::from_parts(Some("test-agent/1.0".to_string()), Some("203.0.113.9"))
}

pub(super) fn build_service() -> (
    QuizSubmissionService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = QuizSubmissionService::new(repository.clone(), ScoringConfig::default());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SubmissionId, SubmissionRecord>>>,
}

impl SubmissionRepository for MemoryRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.submission_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.submission_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<SubmissionRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.submission_id.cmp(&b.submission_id));
        Ok(records)
    }
}

pub(super) struct ConflictRepository;

impl SubmissionRepository for ConflictRepository {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl SubmissionRepository for UnavailableRepository {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
