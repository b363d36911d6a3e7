mod pdf;
pub mod views;

pub use pdf::{PdfReportRenderer, RenderedReport, ReportError, ReportRenderer};
pub use views::{CriterionLine, EligibilityReport, InstitutionLine, ReportField};

use chrono::NaiveDate;

use super::domain::{year_unit, ApplicantProfile};
use super::evaluation::EligibilityVerdict;

pub const REPORT_TITLE: &str = "Study Abroad Eligibility Report";

/// Build the report payload. Institutions are only listed for eligible verdicts.
pub fn format_report(
    profile: &ApplicantProfile,
    verdict: &EligibilityVerdict,
    generated_on: NaiveDate,
) -> EligibilityReport {
    let fields = vec![
        ReportField {
            label: "CGPA",
            value: profile.cgpa.to_string(),
        },
        ReportField {
            label: "Work Experience",
            value: format!(
                "{} {}",
                profile.work_experience_years,
                year_unit(profile.work_experience_years)
            ),
        },
        ReportField {
            label: "English Score",
            value: format!("{} ({})", profile.english_score, profile.english_test),
        },
        ReportField {
            label: "Target Country",
            value: profile
                .target_country
                .map(|country| country.label().to_string())
                .unwrap_or_else(|| "Not selected".to_string()),
        },
    ];

    let criteria = verdict
        .criteria
        .iter()
        .map(|criterion| CriterionLine {
            requirement: criterion.requirement,
            description: criterion.description.clone(),
            satisfied: criterion.satisfied,
        })
        .collect();

    let institutions = if verdict.eligible {
        verdict
            .recommended_institutions
            .iter()
            .map(|institution| InstitutionLine {
                name: institution.name.clone(),
                website_url: institution.website_url.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    EligibilityReport {
        title: REPORT_TITLE,
        fields,
        status: verdict.status(),
        criteria,
        institutions,
        generated_on,
    }
}
