use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use hse_risk::assessment::{
    participation_progress, AssessmentRecord, AssessmentRepository, AssessmentService, CompanyId,
    CompanyRecord, RepositoryError, Response, RiskBand, RiskDomain, ScoringEngine, ScoringError,
    Taxonomy, FALLBACK_RECOMMENDATION,
};

#[derive(Default)]
struct MemoryRepository {
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

fn uniform_submission(value: u8) -> Vec<Response> {
    (1..=35).map(|id| Response::new(id, value)).collect()
}

#[test]
fn full_campaign_flow_scores_and_tracks_participation() {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository, ScoringEngine::hse_reference());
    let company = CompanyId("empresa-01".to_string());

    service
        .register_company(company.clone(), "Empresa Um".to_string(), 5)
        .expect("company registers");

    let record = service
        .submit(&company, uniform_submission(5))
        .expect("submission accepted");
    assert_eq!(record.results.len(), 7);
    assert!(record
        .results
        .iter()
        .all(|result| result.risk_level.level == RiskBand::Baixo));
    assert_eq!(
        record.results[0].recommendations,
        vec!["Manter práticas atuais de gestão de demanda".to_string()]
    );
    assert!(record.results[1..]
        .iter()
        .all(|result| result.recommendations == vec![FALLBACK_RECOMMENDATION.to_string()]));

    service
        .submit(&company, uniform_submission(1))
        .expect("second respondent accepted");

    let report = service
        .company_report(&company)
        .expect("pooled report computed");
    for result in &report {
        assert!((result.average - 3.0).abs() < f64::EPSILON);
        assert_eq!(result.risk_level.level, RiskBand::Moderado);
    }

    let progress = service.progress(&company).expect("progress computed");
    assert_eq!(progress.required_assessments, 4);
    assert_eq!(progress.completed_assessments, 2);
    assert!((progress.progress_percentage - 50.0).abs() < 1e-9);
    assert!(!progress.threshold_met);
}

#[test]
fn engine_rejects_a_submission_missing_one_domain() {
    let engine = ScoringEngine::hse_reference();
    let submission: Vec<Response> = uniform_submission(2)
        .into_iter()
        .filter(|response| !(8..=12).contains(&response.question_id))
        .collect();

    let err = engine
        .score(&submission)
        .expect_err("missing domain aborts scoring");
    assert_eq!(err, ScoringError::IncompleteSubmission(RiskDomain::Controle));
}

#[test]
fn reference_taxonomy_is_total_and_disjoint() {
    let taxonomy = Taxonomy::hse_it();
    assert_eq!(taxonomy.question_count(), 35);

    let mut seen = Vec::new();
    for domain in taxonomy.domains() {
        seen.extend_from_slice(taxonomy.questions_of(domain));
    }
    seen.sort_unstable();
    let expected: Vec<u16> = (1..=35).collect();
    assert_eq!(seen, expected);
}

#[test]
fn progress_rounds_required_count_up() {
    let company = CompanyRecord {
        company_id: CompanyId("empresa-02".to_string()),
        name: "Empresa Dois".to_string(),
        total_employees: 7,
        assessments_available: 7,
        assessments_completed: 6,
    };

    let progress = participation_progress(&company, 0.8);
    assert_eq!(progress.required_assessments, 6);
    assert!(progress.threshold_met);
    assert!((progress.progress_percentage - 100.0).abs() < 1e-9);
}
