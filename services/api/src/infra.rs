use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use study_abroad::config::AppConfig;
use study_abroad::eligibility::{
    EligibilityService, EnglishTest, InstitutionCatalog, PdfReportRenderer,
};
use study_abroad::error::AppError;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Standard catalog unless `APP_INSTITUTION_CATALOG` points at a JSON file.
pub(crate) fn load_catalog(config: &AppConfig) -> Result<InstitutionCatalog, AppError> {
    match &config.institution_catalog {
        Some(path) => {
            let catalog = InstitutionCatalog::from_path(path)?;
            info!(path = %path.display(), "loaded institution catalog");
            Ok(catalog)
        }
        None => Ok(InstitutionCatalog::standard()),
    }
}

pub(crate) fn build_service(
    config: &AppConfig,
) -> Result<EligibilityService<PdfReportRenderer>, AppError> {
    let catalog = load_catalog(config)?;
    Ok(EligibilityService::new(
        catalog,
        Arc::new(PdfReportRenderer),
        &config.report.file_name,
    ))
}

pub(crate) fn parse_english_test(raw: &str) -> Result<EnglishTest, String> {
    EnglishTest::from_code(raw)
        .ok_or_else(|| format!("unknown score type '{raw}' (expected IELTS or TOEFL)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_english_test_is_case_insensitive() {
        assert_eq!(parse_english_test("IELTS"), Ok(EnglishTest::Ielts));
        assert_eq!(parse_english_test("toefl"), Ok(EnglishTest::Toefl));
        assert!(parse_english_test("gre")
            .expect_err("unknown test")
            .contains("gre"));
    }

    #[test]
    fn build_service_uses_configured_catalog() {
        let config = AppConfig::from_lookup(|key: &str| match key {
            "APP_INSTITUTION_CATALOG" => Some("missing-catalog.json".to_string()),
            _ => None,
        })
        .expect("config loads");

        assert!(matches!(build_service(&config), Err(AppError::Catalog(_))));
    }
}
