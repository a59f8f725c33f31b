use serde::Serialize;

use super::repository::CompanyRecord;

/// Share of the workforce that must complete the questionnaire before the
/// aggregate report is considered representative.
pub const DEFAULT_REQUIRED_COVERAGE: f64 = 0.8;

/// Participation snapshot for a company's assessment campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationProgress {
    pub total_employees: u32,
    pub completed_assessments: u32,
    pub required_assessments: u32,
    pub progress_percentage: f64,
    pub threshold_met: bool,
}

/// Compute participation against `required_coverage` (a ratio in (0, 1]).
/// Required count rounds up, so a 10-person company at 0.8 coverage needs 8
/// completed questionnaires.
pub fn participation_progress(
    company: &CompanyRecord,
    required_coverage: f64,
) -> ParticipationProgress {
    let required = (f64::from(company.total_employees) * required_coverage).ceil() as u32;
    let progress_percentage = if required == 0 {
        100.0
    } else {
        f64::from(company.assessments_completed) / f64::from(required) * 100.0
    };

    ParticipationProgress {
        total_employees: company.total_employees,
        completed_assessments: company.assessments_completed,
        required_assessments: required,
        progress_percentage,
        threshold_met: company.assessments_completed >= required,
    }
}
