//! HSE-IT questionnaire intake, scoring, and participation tracking.
//!
//! The scoring pipeline lives in [`scoring`] and is deliberately the only
//! place in the system that classifies risk; the service and router delegate
//! to it rather than reimplementing the thresholds per call site.

pub mod domain;
mod progress;
pub mod questionnaire;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod taxonomy;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentId, CompanyId, DomainResult, Response, RiskBand, RiskDomain, RiskLevel,
};
pub use progress::{participation_progress, ParticipationProgress, DEFAULT_REQUIRED_COVERAGE};
pub use questionnaire::{questionnaire, Question};
pub use repository::{AssessmentRecord, AssessmentRepository, CompanyRecord, RepositoryError};
pub use router::assessment_router;
pub use scoring::{RecommendationTable, ScoringEngine, ScoringError, FALLBACK_RECOMMENDATION};
pub use service::{AssessmentService, AssessmentServiceError};
pub use taxonomy::{Taxonomy, TaxonomyError};
