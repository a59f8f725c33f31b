use super::common::{build_service, company_id, complete_submission, UnavailableRepository};
use crate::assessment::domain::{CompanyId, RiskBand};
use crate::assessment::repository::AssessmentRepository;
use crate::assessment::scoring::ScoringEngine;
use crate::assessment::service::{AssessmentService, AssessmentServiceError};
use std::sync::Arc;

#[test]
fn submit_scores_and_advances_completion_counter() {
    let (service, repository) = build_service(10);

    let record = service
        .submit(&company_id(), complete_submission(5))
        .expect("submission accepted");

    assert_eq!(record.company_id, company_id());
    assert_eq!(record.results.len(), 7);
    assert!(record
        .results
        .iter()
        .all(|result| result.risk_level.level == RiskBand::Baixo));

    let company = repository
        .company(&company_id())
        .expect("repository reachable")
        .expect("company present");
    assert_eq!(company.assessments_completed, 1);

    let stored = service
        .assessments(&company_id())
        .expect("stored assessments listed");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].assessment_id, record.assessment_id);
}

#[test]
fn submit_enforces_the_company_quota() {
    let (service, _) = build_service(1);

    service
        .submit(&company_id(), complete_submission(3))
        .expect("first submission fits the quota");
    let err = service
        .submit(&company_id(), complete_submission(3))
        .expect_err("second submission exceeds the quota");

    assert!(matches!(err, AssessmentServiceError::QuotaExhausted(_)));
}

#[test]
fn rejected_submission_does_not_consume_quota() {
    let (service, repository) = build_service(5);

    let incomplete: Vec<_> = complete_submission(3)
        .into_iter()
        .filter(|response| response.question_id > 12)
        .collect();
    service
        .submit(&company_id(), incomplete)
        .expect_err("incomplete submission rejected");

    let company = repository
        .company(&company_id())
        .expect("repository reachable")
        .expect("company present");
    assert_eq!(company.assessments_completed, 0);
    assert!(service
        .assessments(&company_id())
        .expect("listing works")
        .is_empty());
}

#[test]
fn unknown_company_is_surfaced() {
    let (service, _) = build_service(3);
    let missing = CompanyId("ghost".to_string());

    let err = service
        .submit(&missing, complete_submission(3))
        .expect_err("unknown company rejected");
    assert!(matches!(err, AssessmentServiceError::UnknownCompany(_)));
}

#[test]
fn registration_requires_employees() {
    let (service, _) = build_service(3);
    let err = service
        .register_company(CompanyId("empty".to_string()), "Empty SA".to_string(), 0)
        .expect_err("zero employees rejected");
    assert!(matches!(err, AssessmentServiceError::NoEmployees(_)));
}

#[test]
fn duplicate_registration_conflicts() {
    let (service, _) = build_service(3);
    let err = service
        .register_company(company_id(), "Acme Ltda".to_string(), 3)
        .expect_err("duplicate registration rejected");
    assert!(matches!(err, AssessmentServiceError::Repository(_)));
}

#[test]
fn company_report_pools_stored_submissions() {
    let (service, _) = build_service(10);

    service
        .submit(&company_id(), complete_submission(1))
        .expect("first respondent accepted");
    service
        .submit(&company_id(), complete_submission(5))
        .expect("second respondent accepted");

    let report = service
        .company_report(&company_id())
        .expect("pooled report computed");
    for result in &report {
        assert!((result.average - 3.0).abs() < f64::EPSILON);
        assert_eq!(result.risk_level.level, RiskBand::Moderado);
    }
}

#[test]
fn company_report_requires_at_least_one_assessment() {
    let (service, _) = build_service(10);
    let err = service
        .company_report(&company_id())
        .expect_err("empty report rejected");
    assert!(matches!(err, AssessmentServiceError::NoAssessments(_)));
}

#[test]
fn progress_tracks_the_coverage_threshold() {
    let (service, _) = build_service(10);

    let progress = service.progress(&company_id()).expect("progress computed");
    assert_eq!(progress.total_employees, 10);
    assert_eq!(progress.required_assessments, 8);
    assert_eq!(progress.completed_assessments, 0);
    assert!(!progress.threshold_met);

    for _ in 0..2 {
        service
            .submit(&company_id(), complete_submission(4))
            .expect("submission accepted");
    }

    let progress = service.progress(&company_id()).expect("progress computed");
    assert_eq!(progress.completed_assessments, 2);
    assert!((progress.progress_percentage - 25.0).abs() < 1e-9);
    assert!(!progress.threshold_met);
}

#[test]
fn progress_respects_custom_coverage() {
    let repository = Arc::new(super::common::MemoryRepository::default());
    let service = AssessmentService::with_required_coverage(
        repository,
        ScoringEngine::hse_reference(),
        0.5,
    );
    service
        .register_company(company_id(), "Acme Ltda".to_string(), 9)
        .expect("company registers");

    let progress = service.progress(&company_id()).expect("progress computed");
    assert_eq!(progress.required_assessments, 5);
}

#[test]
fn repository_outage_maps_to_repository_error() {
    let service = AssessmentService::new(
        Arc::new(UnavailableRepository),
        ScoringEngine::hse_reference(),
    );

    let err = service
        .submit(&company_id(), complete_submission(3))
        .expect_err("outage surfaces");
    assert!(matches!(err, AssessmentServiceError::Repository(_)));
}
