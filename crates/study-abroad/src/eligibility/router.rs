use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Serialize;
use serde_json::json;

use super::domain::{ApplicantProfile, Institution, ProfileSubmission, TargetCountry};
use super::evaluation::{EligibilityStatus, EligibilityVerdict};
use super::report::ReportRenderer;
use super::scoring::ielts_equivalent;
use super::service::EligibilityService;
use super::session::Assessment;
use crate::error::AppError;

/// JSON body returned by the evaluate endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub profile: ApplicantProfile,
    pub ielts_equivalent: f64,
    pub status: EligibilityStatus,
    pub status_label: &'static str,
    pub verdict: EligibilityVerdict,
}

impl From<Assessment> for AssessmentView {
    fn from(assessment: Assessment) -> Self {
        let Assessment { profile, verdict } = assessment;
        let status = verdict.status();
        Self {
            ielts_equivalent: ielts_equivalent(profile.english_score, profile.english_test),
            status,
            status_label: status.label(),
            profile,
            verdict,
        }
    }
}

/// Router builder exposing HTTP endpoints for evaluation and report export.
pub fn eligibility_router<R>(service: Arc<EligibilityService<R>>) -> Router
where
    R: ReportRenderer + 'static,
{
    Router::new()
        .route("/api/v1/eligibility/evaluate", post(evaluate_handler::<R>))
        .route("/api/v1/eligibility/report", post(report_handler::<R>))
        .route(
            "/api/v1/eligibility/institutions/:country",
            get(institutions_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn evaluate_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    axum::Json(submission): axum::Json<ProfileSubmission>,
) -> Result<Response, AppError>
where
    R: ReportRenderer + 'static,
{
    let view = AssessmentView::from(service.assess(submission)?);
    Ok((StatusCode::OK, axum::Json(view)).into_response())
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    axum::Json(submission): axum::Json<ProfileSubmission>,
) -> Result<Response, AppError>
where
    R: ReportRenderer + 'static,
{
    let assessment = service.assess(submission)?;
    let report = service.export(&assessment, Local::now().date_naive())?;

    let headers = [
        (header::CONTENT_TYPE, report.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", report.file_name),
        ),
    ];
    Ok((StatusCode::OK, headers, report.bytes).into_response())
}

pub(crate) async fn institutions_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(country): Path<String>,
) -> Response
where
    R: ReportRenderer + 'static,
{
    let Some(target) = TargetCountry::from_code(&country) else {
        let payload = json!({
            "error": format!("no institutions registered for '{country}'"),
        });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    };

    let institutions: Vec<Institution> = service
        .evaluator()
        .catalog()
        .institutions_for(target)
        .to_vec();
    let payload = json!({
        "country": target,
        "institutions": institutions,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
