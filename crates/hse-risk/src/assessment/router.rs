use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response as HttpResponse},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CompanyId, Response};
use super::questionnaire::questionnaire;
use super::repository::AssessmentRepository;
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing the assessment endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/questionnaire", get(questionnaire_handler))
        .route("/api/v1/companies", post(register_company_handler::<R>))
        .route("/api/v1/assessments", post(submit_handler::<R>))
        .route(
            "/api/v1/companies/:company_id/assessments",
            get(assessments_handler::<R>),
        )
        .route(
            "/api/v1/companies/:company_id/report",
            get(report_handler::<R>),
        )
        .route(
            "/api/v1/companies/:company_id/progress",
            get(progress_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterCompanyRequest {
    pub(crate) company_id: String,
    pub(crate) name: String,
    pub(crate) total_employees: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmitAssessmentRequest {
    pub(crate) company_id: String,
    pub(crate) responses: Vec<Response>,
}

pub(crate) async fn questionnaire_handler() -> Json<serde_json::Value> {
    Json(json!({ "questions": questionnaire() }))
}

pub(crate) async fn register_company_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(request): Json<RegisterCompanyRequest>,
) -> HttpResponse
where
    R: AssessmentRepository + 'static,
{
    let company_id = CompanyId(request.company_id);
    match service.register_company(company_id, request.name, request.total_employees) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(request): Json<SubmitAssessmentRequest>,
) -> HttpResponse
where
    R: AssessmentRepository + 'static,
{
    let company_id = CompanyId(request.company_id);
    match service.submit(&company_id, request.responses) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn assessments_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(company_id): Path<String>,
) -> HttpResponse
where
    R: AssessmentRepository + 'static,
{
    match service.assessments(&CompanyId(company_id)) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(company_id): Path<String>,
) -> HttpResponse
where
    R: AssessmentRepository + 'static,
{
    match service.company_report(&CompanyId(company_id)) {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn progress_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(company_id): Path<String>,
) -> HttpResponse
where
    R: AssessmentRepository + 'static,
{
    match service.progress(&CompanyId(company_id)) {
        Ok(progress) => (StatusCode::OK, Json(progress)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AssessmentServiceError) -> HttpResponse {
    let status = match &err {
        AssessmentServiceError::UnknownCompany(_) | AssessmentServiceError::NoAssessments(_) => {
            StatusCode::NOT_FOUND
        }
        AssessmentServiceError::QuotaExhausted(_) => StatusCode::CONFLICT,
        AssessmentServiceError::NoEmployees(_) | AssessmentServiceError::Scoring(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AssessmentServiceError::Repository(
            super::repository::RepositoryError::Conflict,
        ) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
