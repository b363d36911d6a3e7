use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use study_abroad::eligibility::{eligibility_router, EligibilityService, ReportRenderer};

pub(crate) fn with_eligibility_routes<R>(service: Arc<EligibilityService<R>>) -> axum::Router
where
    R: ReportRenderer + 'static,
{
    eligibility_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use study_abroad::eligibility::{InstitutionCatalog, PdfReportRenderer};
    use tower::ServiceExt;

    fn service() -> Arc<EligibilityService<PdfReportRenderer>> {
        Arc::new(EligibilityService::new(
            InstitutionCatalog::standard(),
            Arc::new(PdfReportRenderer),
            "eligibility-report.pdf",
        ))
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn report_route_returns_pdf_attachment() {
        let app = with_eligibility_routes(service());
        let payload = json!({
            "cgpa": 3.2,
            "work_experience_years": 2,
            "english_score": 7.0,
            "english_test": "IELTS",
            "target_country": "USA"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/eligibility/report")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_by_extractor() {
        let app = with_eligibility_routes(service());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/eligibility/evaluate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"cgpa": "high"}"#))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn readiness_and_metrics_routes_use_app_state() {
        let readiness = Arc::new(AtomicBool::new(false));
        let state = AppState {
            readiness: readiness.clone(),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let app = with_eligibility_routes(service()).layer(Extension(state));

        let get = |uri: &str| {
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request builds")
        };

        let response = app
            .clone()
            .oneshot(get("/ready"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["status"], "initializing");

        readiness.store(true, Ordering::Release);
        let response = app
            .clone()
            .oneshot(get("/ready"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get("/metrics"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE]
            .to_str()
            .expect("ascii header");
        assert!(content_type.starts_with("text/plain"));
    }
}
