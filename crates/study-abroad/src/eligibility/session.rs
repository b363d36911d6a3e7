use chrono::NaiveDate;
use serde::Serialize;

use super::domain::ApplicantProfile;
use super::evaluation::{EligibilityEvaluator, EligibilityVerdict};
use super::report::{format_report, EligibilityReport};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no eligibility verdict yet; submit a profile before exporting a report")]
    NotEvaluated,
}

/// A profile together with the verdict computed from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub profile: ApplicantProfile,
    pub verdict: EligibilityVerdict,
}

/// Presentation-side state: the latest assessment, replaced wholesale on every submit.
#[derive(Debug, Clone, Default)]
pub struct EligibilitySession {
    evaluator: EligibilityEvaluator,
    latest: Option<Assessment>,
}

impl EligibilitySession {
    pub fn new(evaluator: EligibilityEvaluator) -> Self {
        Self {
            evaluator,
            latest: None,
        }
    }

    pub fn submit(&mut self, profile: ApplicantProfile) -> &Assessment {
        let verdict = self.evaluator.evaluate(&profile);
        self.latest.insert(Assessment { profile, verdict })
    }

    pub fn latest(&self) -> Option<&Assessment> {
        self.latest.as_ref()
    }

    pub fn report(&self, generated_on: NaiveDate) -> Result<EligibilityReport, SessionError> {
        let assessment = self.latest.as_ref().ok_or(SessionError::NotEvaluated)?;
        Ok(format_report(
            &assessment.profile,
            &assessment.verdict,
            generated_on,
        ))
    }
}
