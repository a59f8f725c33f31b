use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response as HttpResponse;
use serde_json::Value;

use crate::assessment::domain::{CompanyId, Response};
use crate::assessment::repository::{
    AssessmentRecord, AssessmentRepository, CompanyRecord, RepositoryError,
};
use crate::assessment::scoring::ScoringEngine;
use crate::assessment::service::AssessmentService;

pub(super) const DEMO_COMPANY: &str = "acme";

#[derive(Default)]
pub(super) struct MemoryRepository {
    companies: Mutex<HashMap<CompanyId, CompanyRecord>>,
    assessments: Mutex<Vec<AssessmentRecord>>,
}

impl AssessmentRepository for MemoryRepository {
    fn register_company(&self, record: CompanyRecord) -> Result<(), RepositoryError> {
        let mut guard = self.companies.lock().expect("company mutex poisoned");
        if guard.contains_key(&record.company_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.company_id.clone(), record);
        Ok(())
    }

    fn company(&self, company_id: &CompanyId) -> Result<Option<CompanyRecord>, RepositoryError> {
        let guard = self.companies.lock().expect("company mutex poisoned");
        Ok(guard.get(company_id).cloned())
    }

    fn record_completion(&self, company_id: &CompanyId) -> Result<CompanyRecord, RepositoryError> {
        let mut guard = self.companies.lock().expect("company mutex poisoned");
        let record = guard.get_mut(company_id).ok_or(RepositoryError::NotFound)?;
        record.assessments_completed += 1;
        Ok(record.clone())
    }

    fn insert_assessment(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.assessments.lock().expect("assessment mutex poisoned");
        guard.push(record);
        Ok(())
    }

    fn assessments_for(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.assessments.lock().expect("assessment mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.company_id == company_id)
            .cloned()
            .collect())
    }
}

/// Repository that fails every operation, for infrastructure error paths.
pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn register_company(&self, _record: CompanyRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn company(&self, _company_id: &CompanyId) -> Result<Option<CompanyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn record_completion(
        &self,
        _company_id: &CompanyId,
    ) -> Result<CompanyRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn insert_assessment(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn assessments_for(
        &self,
        _company_id: &CompanyId,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) fn company_id() -> CompanyId {
    CompanyId(DEMO_COMPANY.to_string())
}

/// Every question answered with the same Likert value.
pub(super) fn complete_submission(value: u8) -> Vec<Response> {
    (1..=35).map(|id| Response::new(id, value)).collect()
}

/// DEMANDA answered 1,2,2,3,3,3,4 (mean exactly 2.5); everything else 5.
pub(super) fn demanda_mixed_submission() -> Vec<Response> {
    let demanda_values = [1u8, 2, 2, 3, 3, 3, 4];
    let mut responses: Vec<Response> = demanda_values
        .iter()
        .enumerate()
        .map(|(index, value)| Response::new(index as u16 + 1, *value))
        .collect();
    responses.extend((8..=35).map(|id| Response::new(id, 5)));
    responses
}

/// Service over a fresh in-memory repository with one registered company.
pub(super) fn build_service(
    total_employees: u32,
) -> (Arc<AssessmentService<MemoryRepository>>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(AssessmentService::new(
        repository.clone(),
        ScoringEngine::hse_reference(),
    ));
    service
        .register_company(company_id(), "Acme Ltda".to_string(), total_employees)
        .expect("demo company registers");
    (service, repository)
}

pub(super) async fn read_json(response: HttpResponse) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("response body readable");
    let value = serde_json::from_slice(&body).expect("response body is JSON");
    (status, value)
}
