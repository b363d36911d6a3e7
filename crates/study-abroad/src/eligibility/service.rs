use std::sync::Arc;

use chrono::NaiveDate;

use super::catalog::InstitutionCatalog;
use super::domain::ProfileSubmission;
use super::evaluation::EligibilityEvaluator;
use super::intake::{IntakeGuard, IntakeViolation};
use super::report::{format_report, RenderedReport, ReportError, ReportRenderer};
use super::session::Assessment;

/// Service composing the intake guard, evaluator, and report renderer.
pub struct EligibilityService<R> {
    guard: IntakeGuard,
    evaluator: Arc<EligibilityEvaluator>,
    renderer: Arc<R>,
    report_file_name: String,
}

impl<R> EligibilityService<R>
where
    R: ReportRenderer + 'static,
{
    pub fn new(catalog: InstitutionCatalog, renderer: Arc<R>, report_file_name: &str) -> Self {
        Self::with_guard(IntakeGuard::default(), catalog, renderer, report_file_name)
    }

    pub fn with_guard(
        guard: IntakeGuard,
        catalog: InstitutionCatalog,
        renderer: Arc<R>,
        report_file_name: &str,
    ) -> Self {
        Self {
            guard,
            evaluator: Arc::new(EligibilityEvaluator::new(catalog)),
            renderer,
            report_file_name: report_file_name.to_string(),
        }
    }

    pub fn evaluator(&self) -> &EligibilityEvaluator {
        &self.evaluator
    }

    /// Validate and evaluate a raw submission.
    pub fn assess(
        &self,
        submission: ProfileSubmission,
    ) -> Result<Assessment, EligibilityServiceError> {
        let profile = self.guard.profile_from_submission(submission)?;
        let verdict = self.evaluator.evaluate(&profile);
        Ok(Assessment { profile, verdict })
    }

    /// Render an already computed assessment into a downloadable document.
    pub fn export(
        &self,
        assessment: &Assessment,
        generated_on: NaiveDate,
    ) -> Result<RenderedReport, EligibilityServiceError> {
        let report = format_report(&assessment.profile, &assessment.verdict, generated_on);
        let bytes = self.renderer.render(&report)?;
        tracing::info!(
            file_name = %self.report_file_name,
            bytes = bytes.len(),
            "eligibility report rendered"
        );

        Ok(RenderedReport {
            file_name: self.report_file_name.clone(),
            content_type: self.renderer.content_type(),
            bytes,
        })
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Report(#[from] ReportError),
}
