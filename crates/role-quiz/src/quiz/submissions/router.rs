use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::super::domain::ResponseMap;
use super::domain::{QuizSubmissionRequest, RequestMetadata, SubmissionId};
use super::repository::{RepositoryError, SubmissionRepository};
use super::service::{QuizSubmissionService, SubmissionServiceError};

/// Router builder exposing the quiz intake, lookup, bonus, and admin
/// aggregate endpoints.
pub fn quiz_router<R>(service: Arc<QuizSubmissionService<R>>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler::<R>))
        .route("/api/v1/quiz/submissions", post(submit_handler::<R>))
        .route(
            "/api/v1/quiz/submissions/:submission_id",
            get(lookup_handler::<R>),
        )
        .route("/api/v1/quiz/bonus", post(bonus_handler::<R>))
        .route("/api/v1/quiz/summary", get(summary_handler::<R>))
        .with_state(service)
}

fn metadata_from_headers(headers: &HeaderMap) -> RequestMetadata {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let origin = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok());
    RequestMetadata::from_parts(user_agent, origin)
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<QuizSubmissionService<R>>>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.questions().to_vec())).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<QuizSubmissionService<R>>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<QuizSubmissionRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let metadata = metadata_from_headers(&headers);
    match service.submit(request, metadata) {
        Ok(record) => {
            let view = record.view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(SubmissionServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(SubmissionServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "submission already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn lookup_handler<R>(
    State(service): State<Arc<QuizSubmissionService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let id = SubmissionId(submission_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(SubmissionServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "submission_id": id.0,
                "error": "submission not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Body for the bonus endpoint: the partial response map gathered so far.
#[derive(Debug, Deserialize)]
pub(crate) struct BonusRoundRequest {
    pub(crate) responses: ResponseMap,
}

pub(crate) async fn bonus_handler<R>(
    State(service): State<Arc<QuizSubmissionService<R>>>,
    axum::Json(request): axum::Json<BonusRoundRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.bonus_round(&request.responses) {
        Ok(round) => (StatusCode::OK, axum::Json(round)).into_response(),
        Err(SubmissionServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<QuizSubmissionService<R>>>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.summary() {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
