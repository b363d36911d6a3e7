//! Study abroad eligibility: intake validation, rule evaluation, and report export.
//!
//! Evaluation is a pure function of the applicant profile and the static country rule
//! tables. Reports are formatted into a renderer-neutral payload before a
//! [`ReportRenderer`] turns them into a document.

pub mod catalog;
pub mod domain;
pub(crate) mod evaluation;
pub mod import;
pub mod intake;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, InstitutionCatalog};
pub use domain::{ApplicantProfile, EnglishTest, Institution, ProfileSubmission, TargetCountry};
pub use evaluation::{
    Criterion, EligibilityEvaluator, EligibilityStatus, EligibilityVerdict, Requirement, Rule,
};
pub use import::{ImportedProfile, ProfileImportError, ProfileImporter, RowRejection};
pub use intake::{IntakeGuard, IntakePolicy, IntakeViolation};
pub use report::{
    format_report, EligibilityReport, PdfReportRenderer, RenderedReport, ReportError,
    ReportRenderer,
};
pub use router::{eligibility_router, AssessmentView};
pub use scoring::ielts_equivalent;
pub use service::{EligibilityService, EligibilityServiceError};
pub use session::{Assessment, EligibilitySession, SessionError};
