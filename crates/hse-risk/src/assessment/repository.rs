use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, CompanyId, DomainResult, Response};

/// Registered company together with its assessment quota counters. One
/// assessment slot is purchased per employee; the completed counter only ever
/// moves forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub company_id: CompanyId,
    pub name: String,
    pub total_employees: u32,
    pub assessments_available: u32,
    pub assessments_completed: u32,
}

impl CompanyRecord {
    pub fn quota_exhausted(&self) -> bool {
        self.assessments_completed >= self.assessments_available
    }
}

/// A scored submission as persisted and returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub company_id: CompanyId,
    pub responses: Vec<Response>,
    pub results: Vec<DomainResult>,
    pub created_at: DateTime<Utc>,
}

/// Storage abstraction so the assessment service can be exercised in
/// isolation. The API binary ships an in-memory implementation; a hosted
/// database adapter satisfies the same contract.
pub trait AssessmentRepository: Send + Sync {
    fn register_company(&self, record: CompanyRecord) -> Result<(), RepositoryError>;
    fn company(&self, company_id: &CompanyId) -> Result<Option<CompanyRecord>, RepositoryError>;
    /// Increment the completed-assessment counter, returning the updated record.
    fn record_completion(&self, company_id: &CompanyId) -> Result<CompanyRecord, RepositoryError>;
    fn insert_assessment(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn assessments_for(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError>;
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
