use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::eligibility::domain::{ApplicantProfile, EnglishTest, ProfileSubmission, TargetCountry};
use crate::eligibility::report::{EligibilityReport, ReportError, ReportRenderer};
use crate::eligibility::{EligibilityEvaluator, EligibilityService, InstitutionCatalog};

pub(super) fn profile(
    cgpa: f64,
    work_experience_years: f64,
    english_score: f64,
    english_test: EnglishTest,
    target_country: Option<TargetCountry>,
) -> ApplicantProfile {
    ApplicantProfile {
        cgpa,
        work_experience_years,
        english_score,
        english_test,
        target_country,
    }
}

pub(super) fn strong_usa_profile() -> ApplicantProfile {
    profile(3.2, 2.0, 7.0, EnglishTest::Ielts, Some(TargetCountry::Usa))
}

pub(super) fn weak_canada_profile() -> ApplicantProfile {
    profile(2.5, 0.0, 90.0, EnglishTest::Toefl, Some(TargetCountry::Canada))
}

pub(super) fn submission(country: Option<&str>) -> ProfileSubmission {
    ProfileSubmission {
        cgpa: 3.2,
        work_experience_years: 2.0,
        english_score: 7.0,
        english_test: EnglishTest::Ielts,
        target_country: country.map(str::to_string),
    }
}

pub(super) fn evaluator() -> EligibilityEvaluator {
    EligibilityEvaluator::new(InstitutionCatalog::standard())
}

pub(super) fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 7).expect("valid report date")
}

/// Renderer that writes the text lines, so assertions can read the output.
#[derive(Debug, Default)]
pub(super) struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn content_type(&self) -> &'static str {
        "text/plain"
    }

    fn render(&self, report: &EligibilityReport) -> Result<Vec<u8>, ReportError> {
        Ok(report.lines().join("\n").into_bytes())
    }
}

#[derive(Debug, Default)]
pub(super) struct FailingRenderer;

impl ReportRenderer for FailingRenderer {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn render(&self, _report: &EligibilityReport) -> Result<Vec<u8>, ReportError> {
        Err(ReportError::Render("renderer offline".to_string()))
    }
}

pub(super) fn text_service() -> Arc<EligibilityService<TextRenderer>> {
    Arc::new(EligibilityService::new(
        InstitutionCatalog::standard(),
        Arc::new(TextRenderer),
        "eligibility-report.pdf",
    ))
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}
