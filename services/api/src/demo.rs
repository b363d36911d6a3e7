use crate::infra::{build_service, load_catalog, parse_english_test};
use chrono::Local;
use clap::Args;
use std::path::{Path, PathBuf};
use study_abroad::config::AppConfig;
use study_abroad::eligibility::{
    ielts_equivalent, ApplicantProfile, Assessment, AssessmentView, EligibilityEvaluator,
    EligibilityReport, EligibilityServiceError, EligibilitySession, EnglishTest, IntakeGuard,
    PdfReportRenderer, ProfileImporter, ProfileSubmission, ReportRenderer, RowRejection,
    TargetCountry,
};
use study_abroad::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Cumulative GPA on a 0-5 scale
    #[arg(long)]
    pub(crate) cgpa: f64,
    /// Years of full-time work experience
    #[arg(long = "work-experience")]
    pub(crate) work_experience: f64,
    /// Raw English test score
    #[arg(long)]
    pub(crate) english_score: f64,
    /// English test the score belongs to (IELTS or TOEFL)
    #[arg(long, default_value = "IELTS", value_parser = parse_english_test)]
    pub(crate) score_type: EnglishTest,
    /// Destination country (USA or Canada)
    #[arg(long)]
    pub(crate) country: Option<String>,
    /// Write the PDF report after evaluating
    #[arg(long)]
    pub(crate) report: bool,
    /// Override the report destination (defaults to APP_REPORT_DIR/APP_REPORT_FILE)
    #[arg(long, requires = "report")]
    pub(crate) output: Option<PathBuf>,
    /// Print the assessment as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV with cgpa, work_experience_years, english_score, score_type, target_country columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print one JSON assessment per valid row
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Directory to write one PDF per scenario into
    #[arg(long)]
    pub(crate) report_dir: Option<PathBuf>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        cgpa,
        work_experience,
        english_score,
        score_type,
        country,
        report,
        output,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = build_service(&config)?;

    let assessment = service.assess(ProfileSubmission {
        cgpa,
        work_experience_years: work_experience,
        english_score,
        english_test: score_type,
        target_country: country,
    })?;

    if json {
        print_json(&AssessmentView::from(assessment.clone()));
    } else {
        render_assessment(&assessment);
    }

    if report {
        let rendered = service.export(&assessment, Local::now().date_naive())?;
        let path = output.unwrap_or_else(|| config.report.output_path());
        write_report(&path, &rendered.bytes)?;
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { csv, json } = args;

    let config = AppConfig::load()?;
    let evaluator = EligibilityEvaluator::new(load_catalog(&config)?);
    let rows = ProfileImporter::from_path(&csv, &IntakeGuard::default())?;

    let mut eligible = 0usize;
    let mut rejected = 0usize;
    for row in &rows {
        match &row.outcome {
            Ok(profile) => {
                let verdict = evaluator.evaluate(profile);
                if verdict.eligible {
                    eligible += 1;
                }
                let assessment = Assessment {
                    profile: profile.clone(),
                    verdict,
                };
                if json {
                    print_json(&AssessmentView::from(assessment));
                } else {
                    println!(
                        "- row {}: {} | {}",
                        row.row,
                        country_label(profile.target_country),
                        assessment.verdict.status().label()
                    );
                }
            }
            Err(rejection) => {
                rejected += 1;
                let notice = rejection_notice(row.row, rejection);
                if json {
                    eprintln!("{notice}");
                } else {
                    println!("- {notice}");
                }
            }
        }
    }

    if !json {
        println!(
            "\n{} profiles read | {} eligible | {} rejected",
            rows.len(),
            eligible,
            rejected
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { report_dir } = args;
    let today = Local::now().date_naive();

    println!("Study abroad eligibility demo");
    let mut session = EligibilitySession::new(EligibilityEvaluator::default());

    for (slug, profile) in demo_profiles() {
        println!();
        let assessment = session.submit(profile);
        render_assessment(assessment);

        let report = session.report(today)?;
        match &report_dir {
            Some(dir) => {
                let bytes = PdfReportRenderer
                    .render(&report)
                    .map_err(EligibilityServiceError::from)?;
                write_report(&dir.join(format!("eligibility-report-{slug}.pdf")), &bytes)?;
            }
            None => render_report_preview(&report),
        }
    }

    Ok(())
}

fn demo_profiles() -> [(&'static str, ApplicantProfile); 2] {
    [
        (
            "usa",
            ApplicantProfile {
                cgpa: 3.2,
                work_experience_years: 2.0,
                english_score: 7.0,
                english_test: EnglishTest::Ielts,
                target_country: Some(TargetCountry::Usa),
            },
        ),
        (
            "canada",
            ApplicantProfile {
                cgpa: 2.5,
                work_experience_years: 0.0,
                english_score: 90.0,
                english_test: EnglishTest::Toefl,
                target_country: Some(TargetCountry::Canada),
            },
        ),
    ]
}

/// Printed to stderr under `--json`.
fn rejection_notice(row: usize, rejection: &RowRejection) -> String {
    format!("row {row}: rejected ({rejection})")
}

fn render_assessment(assessment: &Assessment) {
    let Assessment { profile, verdict } = assessment;

    println!(
        "Profile: CGPA {} | {} years experience | {} {} (IELTS equivalent {}) | {}",
        profile.cgpa,
        profile.work_experience_years,
        profile.english_test,
        profile.english_score,
        ielts_equivalent(profile.english_score, profile.english_test),
        country_label(profile.target_country)
    );
    println!("Status: {}", verdict.status().label());

    if verdict.criteria.is_empty() {
        println!("Criteria: none (no supported country selected)");
    } else {
        println!("Criteria");
        for criterion in &verdict.criteria {
            let marker = if criterion.satisfied { "✓" } else { "✗" };
            println!("  {} {}", marker, criterion.description);
        }
    }

    if !verdict.recommended_institutions.is_empty() {
        println!("Recommended institutions");
        for institution in &verdict.recommended_institutions {
            match &institution.website_url {
                Some(url) => println!("  - {} ({})", institution.name, url),
                None => println!("  - {}", institution.name),
            }
        }
    }
}

fn render_report_preview(report: &EligibilityReport) {
    println!("Report preview");
    for line in report.lines() {
        println!("  | {line}");
    }
}

fn country_label(country: Option<TargetCountry>) -> &'static str {
    country.map(|country| country.label()).unwrap_or("no country")
}

fn write_report(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    println!("Report written to {}", path.display());
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("assessment payload unavailable: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_profiles_cover_both_outcomes() {
        let evaluator = EligibilityEvaluator::default();
        let outcomes: Vec<bool> = demo_profiles()
            .iter()
            .map(|(_, profile)| evaluator.evaluate(profile).eligible)
            .collect();
        assert_eq!(outcomes, [true, false]);
    }

    #[test]
    fn country_label_defaults_when_missing() {
        assert_eq!(country_label(None), "no country");
        assert_eq!(country_label(Some(TargetCountry::Canada)), "Canada");
    }

    #[test]
    fn rejection_notice_names_row_and_reason() {
        let notice = rejection_notice(3, &RowRejection::UnknownScoreType("GRE".to_string()));
        assert_eq!(notice, "row 3: rejected (unknown score type 'GRE')");
    }
}
