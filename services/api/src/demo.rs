use clap::Args;
use std::sync::Arc;

use crate::infra::InMemoryAssessmentRepository;
use hse_risk::assessment::{
    questionnaire, AssessmentService, CompanyId, DomainResult, Response, RiskDomain, ScoringEngine,
};
use hse_risk::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of employees for the synthetic company
    #[arg(long, default_value_t = 10)]
    pub(crate) employees: u32,
    /// Print each respondent's individual results, not only the pooled report
    #[arg(long)]
    pub(crate) per_respondent: bool,
}

/// One synthetic respondent: each domain answered with a fixed Likert value.
fn respondent(values: [u8; 7]) -> Vec<Response> {
    let value_of = |domain: RiskDomain| {
        let index = RiskDomain::ordered()
            .iter()
            .position(|candidate| *candidate == domain)
            .unwrap_or(0);
        values[index]
    };

    questionnaire()
        .iter()
        .map(|question| Response::new(question.id, value_of(question.domain)))
        .collect()
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let service = AssessmentService::new(repository, ScoringEngine::hse_reference());
    let company = CompanyId("demo".to_string());

    println!("HSE-IT assessment campaign demo");
    match service.register_company(company.clone(), "Empresa Demo".to_string(), args.employees) {
        Ok(record) => println!(
            "- Registered company 'demo' with {} employees ({} assessment slots)",
            record.total_employees, record.assessments_available
        ),
        Err(err) => {
            println!("- Registration rejected: {err}");
            return Ok(());
        }
    }

    // Demanda under pressure, weak controle, the rest mid-scale.
    let profiles = [
        ("overloaded analyst", respondent([1, 2, 3, 3, 4, 4, 3])),
        ("steady operator", respondent([4, 4, 4, 4, 4, 4, 4])),
        ("team in transition", respondent([3, 3, 4, 4, 4, 3, 2])),
    ];

    for (label, responses) in profiles {
        match service.submit(&company, responses) {
            Ok(record) => {
                println!("- Scored respondent '{label}' ({})", record.assessment_id);
                if args.per_respondent {
                    render_results(&record.results, "  ");
                }
            }
            Err(err) => println!("- Respondent '{label}' rejected: {err}"),
        }
    }

    match service.company_report(&company) {
        Ok(report) => {
            println!("\nPooled company report");
            render_results(&report, "");
        }
        Err(err) => println!("\nPooled report unavailable: {err}"),
    }

    match service.progress(&company) {
        Ok(progress) => {
            println!(
                "\nParticipation: {}/{} required ({:.0}%), threshold met: {}",
                progress.completed_assessments,
                progress.required_assessments,
                progress.progress_percentage,
                progress.threshold_met
            );
        }
        Err(err) => println!("\nProgress unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn run_questionnaire() -> Result<(), AppError> {
    println!("HSE-IT questionnaire (35 items, Likert 1-5)");
    for domain in RiskDomain::ordered() {
        println!("\n{}", domain.label());
        for question in questionnaire()
            .iter()
            .filter(|question| question.domain == domain)
        {
            println!("  {:>2}. {}", question.id, question.text);
        }
    }
    Ok(())
}

fn render_results(results: &[DomainResult], indent: &str) {
    for result in results {
        println!(
            "{indent}- {:<18} media {:.2} -> {}",
            result.domain.label(),
            result.average,
            result.risk_level.level.label()
        );
        for recommendation in &result.recommendations {
            println!("{indent}    * {recommendation}");
        }
    }
}
