use chrono::NaiveDate;
use serde::Serialize;

use super::super::evaluation::{EligibilityStatus, Requirement};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionLine {
    pub requirement: Requirement,
    pub description: String,
    pub satisfied: bool,
}

impl CriterionLine {
    pub fn marker(&self) -> &'static str {
        if self.satisfied {
            "✓"
        } else {
            "✗"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstitutionLine {
    pub name: String,
    pub website_url: Option<String>,
}

/// Renderer-neutral payload for an eligibility report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityReport {
    pub title: &'static str,
    pub fields: Vec<ReportField>,
    pub status: EligibilityStatus,
    pub criteria: Vec<CriterionLine>,
    pub institutions: Vec<InstitutionLine>,
    pub generated_on: NaiveDate,
}

impl EligibilityReport {
    pub fn status_line(&self) -> String {
        format!("Status: {}", self.status.label())
    }

    pub fn footer(&self) -> String {
        format!("Generated on: {}", self.generated_on.format("%-m/%-d/%Y"))
    }

    /// Plain-text rendering in payload order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.to_string()];
        lines.extend(
            self.fields
                .iter()
                .map(|field| format!("{}: {}", field.label, field.value)),
        );
        lines.push(self.status_line());

        if !self.criteria.is_empty() {
            lines.push("Criteria:".to_string());
            lines.extend(
                self.criteria
                    .iter()
                    .map(|line| format!("{} {}", line.marker(), line.description)),
            );
        }

        if !self.institutions.is_empty() {
            lines.push("Recommended Institutions:".to_string());
            lines.extend(self.institutions.iter().map(|line| match &line.website_url {
                Some(url) => format!("- {} ({})", line.name, url),
                None => format!("- {}", line.name),
            }));
        }

        lines.push(self.footer());
        lines
    }
}
