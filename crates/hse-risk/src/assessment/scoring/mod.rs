mod classify;
mod recommendations;

pub use recommendations::{RecommendationTable, FALLBACK_RECOMMENDATION};

use super::domain::{DomainResult, Response, RiskDomain};
use super::taxonomy::Taxonomy;
use classify::classify;
use std::collections::HashSet;

/// Validation and scoring failures. All are caller errors surfaced
/// immediately; the engine performs no retries and never emits a partial
/// result list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("response value {value} for question {question_id} is outside the 1..=5 scale")]
    InvalidResponseValue { question_id: u16, value: u8 },
    #[error("question id {0} is not part of the questionnaire")]
    UnknownQuestionId(u16),
    #[error("question id {0} was answered more than once")]
    DuplicateResponse(u16),
    #[error("submission has no responses for the {} domain", .0.label())]
    IncompleteSubmission(RiskDomain),
}

/// The shared scoring pipeline: filter responses per domain, average,
/// classify, and attach recommendations.
///
/// Stateless after construction and free of interior mutability, so a single
/// instance can be shared across request handlers without locking.
pub struct ScoringEngine {
    taxonomy: Taxonomy,
    recommendations: RecommendationTable,
}

impl ScoringEngine {
    pub fn new(taxonomy: Taxonomy, recommendations: RecommendationTable) -> Self {
        Self {
            taxonomy,
            recommendations,
        }
    }

    /// Engine wired with the reference HSE-IT taxonomy and curated table.
    pub fn hse_reference() -> Self {
        Self::new(Taxonomy::hse_it(), RecommendationTable::reference())
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Score one complete submission, producing one result per domain in
    /// taxonomy order. Deterministic; any per-domain failure aborts the call.
    pub fn score(&self, responses: &[Response]) -> Result<Vec<DomainResult>, ScoringError> {
        self.validate(responses)?;
        self.assemble(responses)
    }

    /// Score a batch of submissions by pooling every respondent's answers
    /// into a single per-domain mean. Each submission is validated on its
    /// own; ids may repeat across submissions but not within one.
    pub fn score_pooled(
        &self,
        submissions: &[Vec<Response>],
    ) -> Result<Vec<DomainResult>, ScoringError> {
        let mut pooled = Vec::new();
        for submission in submissions {
            self.validate(submission)?;
            pooled.extend_from_slice(submission);
        }
        self.assemble(&pooled)
    }

    fn validate(&self, responses: &[Response]) -> Result<(), ScoringError> {
        let mut seen = HashSet::with_capacity(responses.len());
        for response in responses {
            if !(1..=5).contains(&response.value) {
                return Err(ScoringError::InvalidResponseValue {
                    question_id: response.question_id,
                    value: response.value,
                });
            }
            if !self.taxonomy.contains_question(response.question_id) {
                return Err(ScoringError::UnknownQuestionId(response.question_id));
            }
            if !seen.insert(response.question_id) {
                return Err(ScoringError::DuplicateResponse(response.question_id));
            }
        }
        Ok(())
    }

    fn assemble(&self, responses: &[Response]) -> Result<Vec<DomainResult>, ScoringError> {
        let mut results = Vec::with_capacity(RiskDomain::ordered().len());
        for domain in self.taxonomy.domains() {
            let average = self.domain_average(responses, domain)?;
            let risk_level = classify(average);
            let recommendations = self.recommendations.resolve(domain, risk_level.level);

            results.push(DomainResult {
                domain,
                average,
                risk_level,
                recommendations,
            });
        }
        Ok(results)
    }

    /// Mean of the responses belonging to `domain`. A domain with zero
    /// matching responses is an explicit error rather than a NaN that would
    /// otherwise flow silently through classification.
    fn domain_average(
        &self,
        responses: &[Response],
        domain: RiskDomain,
    ) -> Result<f64, ScoringError> {
        let question_ids = self.taxonomy.questions_of(domain);
        let mut sum = 0u64;
        let mut count = 0u64;
        for response in responses {
            if question_ids.contains(&response.question_id) {
                sum += u64::from(response.value);
                count += 1;
            }
        }

        if count == 0 {
            return Err(ScoringError::IncompleteSubmission(domain));
        }

        Ok(sum as f64 / count as f64)
    }
}
