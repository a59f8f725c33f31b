use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{AssessmentId, CompanyId, DomainResult, Response};
use super::progress::{participation_progress, ParticipationProgress, DEFAULT_REQUIRED_COVERAGE};
use super::repository::{AssessmentRecord, AssessmentRepository, CompanyRecord, RepositoryError};
use super::scoring::{ScoringEngine, ScoringError};

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("hse-{id:06}"))
}

/// Service composing the shared scoring engine with company registration,
/// quota enforcement, persistence, and progress tracking.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
    required_coverage: f64,
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: ScoringEngine) -> Self {
        Self::with_required_coverage(repository, engine, DEFAULT_REQUIRED_COVERAGE)
    }

    pub fn with_required_coverage(
        repository: Arc<R>,
        engine: ScoringEngine,
        required_coverage: f64,
    ) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
            required_coverage,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Register a company, granting one assessment slot per employee.
    pub fn register_company(
        &self,
        company_id: CompanyId,
        name: String,
        total_employees: u32,
    ) -> Result<CompanyRecord, AssessmentServiceError> {
        if total_employees == 0 {
            return Err(AssessmentServiceError::NoEmployees(company_id));
        }

        let record = CompanyRecord {
            company_id: company_id.clone(),
            name,
            total_employees,
            assessments_available: total_employees,
            assessments_completed: 0,
        };
        self.repository.register_company(record.clone())?;
        info!(company = %company_id, employees = total_employees, "company registered");
        Ok(record)
    }

    /// Submit one respondent's answers: enforce the company quota, score,
    /// persist the record, and advance the completion counter.
    pub fn submit(
        &self,
        company_id: &CompanyId,
        responses: Vec<Response>,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let company = self.lookup_company(company_id)?;
        if company.quota_exhausted() {
            return Err(AssessmentServiceError::QuotaExhausted(company_id.clone()));
        }

        let results = self.engine.score(&responses)?;
        let record = AssessmentRecord {
            assessment_id: next_assessment_id(),
            company_id: company_id.clone(),
            responses,
            results,
            created_at: Utc::now(),
        };

        self.repository.insert_assessment(record.clone())?;
        let company = self.repository.record_completion(company_id)?;
        info!(
            company = %company_id,
            assessment = %record.assessment_id,
            completed = company.assessments_completed,
            "assessment scored"
        );
        Ok(record)
    }

    /// Stored assessments for a company, oldest first.
    pub fn assessments(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        self.lookup_company(company_id)?;
        Ok(self.repository.assessments_for(company_id)?)
    }

    /// Aggregate per-domain report pooling every stored submission.
    pub fn company_report(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<DomainResult>, AssessmentServiceError> {
        let records = self.assessments(company_id)?;
        if records.is_empty() {
            return Err(AssessmentServiceError::NoAssessments(company_id.clone()));
        }

        let submissions: Vec<Vec<Response>> = records
            .into_iter()
            .map(|record| record.responses)
            .collect();
        Ok(self.engine.score_pooled(&submissions)?)
    }

    /// Participation snapshot against the configured coverage threshold.
    pub fn progress(
        &self,
        company_id: &CompanyId,
    ) -> Result<ParticipationProgress, AssessmentServiceError> {
        let company = self.lookup_company(company_id)?;
        Ok(participation_progress(&company, self.required_coverage))
    }

    fn lookup_company(
        &self,
        company_id: &CompanyId,
    ) -> Result<CompanyRecord, AssessmentServiceError> {
        self.repository
            .company(company_id)?
            .ok_or_else(|| AssessmentServiceError::UnknownCompany(company_id.clone()))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("company {0} is not registered")]
    UnknownCompany(CompanyId),
    #[error("company {0} must declare at least one employee")]
    NoEmployees(CompanyId),
    #[error("assessment limit reached for company {0}")]
    QuotaExhausted(CompanyId),
    #[error("no assessments recorded for company {0}")]
    NoAssessments(CompanyId),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
