use super::domain::RiskDomain;
use super::questionnaire::questionnaire;

/// Immutable mapping from each risk domain to the question ids it owns.
///
/// Construction enforces the coverage invariant: every domain appears exactly
/// once with at least one question, no id belongs to two domains, and the ids
/// together form the dense range `1..=n`. Violations are construction errors
/// so a miswired taxonomy can never reach the scoring path.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: Vec<(RiskDomain, Vec<u16>)>,
}

/// Construction-time violations of the taxonomy coverage invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    #[error("domain {} is missing from the taxonomy", .0.label())]
    MissingDomain(RiskDomain),
    #[error("domain {} is declared more than once", .0.label())]
    DuplicateDomain(RiskDomain),
    #[error("domain {} has no questions assigned", .0.label())]
    EmptyDomain(RiskDomain),
    #[error("question id {0} is assigned to more than one domain")]
    DuplicateQuestion(u16),
    #[error("question ids are not the dense range 1..={expected_max}: id {missing} is absent")]
    GapInCoverage { expected_max: u16, missing: u16 },
    #[error("question id 0 is not a valid identifier")]
    ZeroQuestionId,
}

impl Taxonomy {
    /// Build a taxonomy, validating the coverage invariant. Entries keep
    /// their declaration order; that order drives all per-domain iteration.
    pub fn new(entries: Vec<(RiskDomain, Vec<u16>)>) -> Result<Self, TaxonomyError> {
        for expected in RiskDomain::ordered() {
            let declared = entries
                .iter()
                .filter(|(domain, _)| *domain == expected)
                .count();
            if declared == 0 {
                return Err(TaxonomyError::MissingDomain(expected));
            }
            if declared > 1 {
                return Err(TaxonomyError::DuplicateDomain(expected));
            }
        }

        let mut all_ids: Vec<u16> = Vec::new();
        for (domain, ids) in &entries {
            if ids.is_empty() {
                return Err(TaxonomyError::EmptyDomain(*domain));
            }
            all_ids.extend_from_slice(ids);
        }

        if all_ids.contains(&0) {
            return Err(TaxonomyError::ZeroQuestionId);
        }

        let mut sorted = all_ids.clone();
        sorted.sort_unstable();
        for window in sorted.windows(2) {
            if window[0] == window[1] {
                return Err(TaxonomyError::DuplicateQuestion(window[0]));
            }
        }

        let expected_max = sorted.len() as u16;
        for (index, id) in sorted.iter().enumerate() {
            let expected = index as u16 + 1;
            if *id != expected {
                return Err(TaxonomyError::GapInCoverage {
                    expected_max,
                    missing: expected,
                });
            }
        }

        Ok(Self { entries })
    }

    /// The reference HSE-IT taxonomy, derived from the questionnaire catalog.
    pub fn hse_it() -> Self {
        let entries = RiskDomain::ordered()
            .into_iter()
            .map(|domain| {
                let ids = questionnaire()
                    .iter()
                    .filter(|question| question.domain == domain)
                    .map(|question| question.id)
                    .collect();
                (domain, ids)
            })
            .collect();

        Self::new(entries).expect("reference HSE-IT taxonomy satisfies the coverage invariant")
    }

    /// Domains in declaration order.
    pub fn domains(&self) -> impl Iterator<Item = RiskDomain> + '_ {
        self.entries.iter().map(|(domain, _)| *domain)
    }

    /// Question ids owned by `domain`. Total over the seven domains.
    pub fn questions_of(&self, domain: RiskDomain) -> &[u16] {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == domain)
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_question(&self, question_id: u16) -> bool {
        self.entries
            .iter()
            .any(|(_, ids)| ids.contains(&question_id))
    }

    pub fn question_count(&self) -> usize {
        self.entries.iter().map(|(_, ids)| ids.len()).sum()
    }
}
