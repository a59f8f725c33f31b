use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use hse_risk::assessment::{
    AssessmentRecord, AssessmentRepository, CompanyId, CompanyRecord, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local storage backing the service. A hosted database adapter
/// replaces this in deployments that need durability.
#[derive(Default)]
pub(crate) struct InMemoryAssessmentRepository {
    companies: Mutex<HashMap<CompanyId, CompanyRecord>>,
    assessments: Mutex<Vec<AssessmentRecord>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
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
