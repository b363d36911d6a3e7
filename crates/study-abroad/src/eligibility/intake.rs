use tracing::warn;

use super::domain::{ApplicantProfile, ProfileSubmission, TargetCountry};

/// Validation errors raised before a submission reaches the evaluator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("cgpa must be between 0 and {max} (found {found})")]
    CgpaOutOfRange { max: f64, found: f64 },
    #[error("cgpa must use increments of {step} (found {found})")]
    CgpaPrecision { step: f64, found: f64 },
    #[error("work experience cannot be negative (found {found})")]
    NegativeWorkExperience { found: f64 },
    #[error("english score cannot be negative (found {found})")]
    NegativeEnglishScore { found: f64 },
    #[error("english score must use increments of {step} (found {found})")]
    EnglishScorePrecision { step: f64, found: f64 },
}

const DEFAULT_CGPA_MAX: f64 = 5.0;
const DEFAULT_CGPA_STEP: f64 = 0.01;
const DEFAULT_ENGLISH_STEP: f64 = 0.5;
const STEP_TOLERANCE: f64 = 1e-6;

/// Numeric constraints of the input form.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakePolicy {
    cgpa_max: f64,
    cgpa_step: f64,
    english_step: f64,
}

impl IntakePolicy {
    pub fn new(cgpa_max: f64, cgpa_step: f64, english_step: f64) -> Self {
        Self {
            cgpa_max: positive_or(cgpa_max, DEFAULT_CGPA_MAX),
            cgpa_step: positive_or(cgpa_step, DEFAULT_CGPA_STEP),
            english_step: positive_or(english_step, DEFAULT_ENGLISH_STEP),
        }
    }

    pub fn cgpa_max(&self) -> f64 {
        self.cgpa_max
    }

    pub fn cgpa_step(&self) -> f64 {
        self.cgpa_step
    }

    pub fn english_step(&self) -> f64 {
        self.english_step
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CGPA_MAX, DEFAULT_CGPA_STEP, DEFAULT_ENGLISH_STEP)
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn on_step(value: f64, step: f64) -> bool {
    let ratio = value / step;
    (ratio - ratio.round()).abs() < STEP_TOLERANCE
}

/// Guard responsible for producing `ApplicantProfile` instances from raw form input.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Validate a submission. Blank or unrecognised countries are kept as `None`.
    pub fn profile_from_submission(
        &self,
        submission: ProfileSubmission,
    ) -> Result<ApplicantProfile, IntakeViolation> {
        self.check(&submission).inspect_err(|violation| {
            warn!(%violation, "profile submission rejected");
        })?;

        Ok(ApplicantProfile {
            cgpa: submission.cgpa,
            work_experience_years: submission.work_experience_years,
            english_score: submission.english_score,
            english_test: submission.english_test,
            target_country: submission
                .target_country
                .as_deref()
                .and_then(TargetCountry::from_code),
        })
    }

    fn check(&self, submission: &ProfileSubmission) -> Result<(), IntakeViolation> {
        for (field, value) in [
            ("cgpa", submission.cgpa),
            ("work_experience_years", submission.work_experience_years),
            ("english_score", submission.english_score),
        ] {
            if !value.is_finite() {
                return Err(IntakeViolation::NonFinite { field });
            }
        }

        let cgpa = submission.cgpa;
        if !(0.0..=self.policy.cgpa_max).contains(&cgpa) {
            return Err(IntakeViolation::CgpaOutOfRange {
                max: self.policy.cgpa_max,
                found: cgpa,
            });
        }
        if !on_step(cgpa, self.policy.cgpa_step) {
            return Err(IntakeViolation::CgpaPrecision {
                step: self.policy.cgpa_step,
                found: cgpa,
            });
        }

        if submission.work_experience_years < 0.0 {
            return Err(IntakeViolation::NegativeWorkExperience {
                found: submission.work_experience_years,
            });
        }

        let english = submission.english_score;
        if english < 0.0 {
            return Err(IntakeViolation::NegativeEnglishScore { found: english });
        }
        if !on_step(english, self.policy.english_step) {
            return Err(IntakeViolation::EnglishScorePrecision {
                step: self.policy.english_step,
                found: english,
            });
        }

        Ok(())
    }
}
