mod policy;
mod rules;

pub use policy::EligibilityStatus;
pub use rules::{Requirement, Rule};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::catalog::InstitutionCatalog;
use super::domain::{ApplicantProfile, Institution};
use super::scoring::ielts_equivalent;
use policy::decide_eligibility;

/// Pure evaluator applying the country rule tables to a profile.
#[derive(Debug, Clone)]
pub struct EligibilityEvaluator {
    catalog: InstitutionCatalog,
}

impl Default for EligibilityEvaluator {
    fn default() -> Self {
        Self::new(InstitutionCatalog::standard())
    }
}

impl EligibilityEvaluator {
    pub fn new(catalog: InstitutionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &InstitutionCatalog {
        &self.catalog
    }

    pub fn evaluate(&self, profile: &ApplicantProfile) -> EligibilityVerdict {
        let Some(country) = profile.target_country else {
            debug!("no supported target country selected; denying by default");
            return EligibilityVerdict::default();
        };

        let english = ielts_equivalent(profile.english_score, profile.english_test);
        let criteria: Vec<Criterion> = country
            .rules()
            .iter()
            .map(|rule| rule.assess(profile, english))
            .collect();

        for criterion in &criteria {
            debug!(
                requirement = ?criterion.requirement,
                satisfied = criterion.satisfied,
                "criterion assessed"
            );
        }

        let eligible = decide_eligibility(&criteria);
        let recommended_institutions = if eligible {
            self.catalog.institutions_for(country).to_vec()
        } else {
            Vec::new()
        };

        info!(
            country = country.label(),
            ielts_equivalent = english,
            eligible,
            "eligibility evaluated"
        );

        EligibilityVerdict {
            eligible,
            criteria,
            recommended_institutions,
        }
    }
}

/// Named pass/fail rule outcome, kept in rule-table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub requirement: Requirement,
    pub description: String,
    pub satisfied: bool,
}

/// Complete evaluation output; the default value is the deny verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub criteria: Vec<Criterion>,
    pub recommended_institutions: Vec<Institution>,
}

impl EligibilityVerdict {
    pub fn status(&self) -> EligibilityStatus {
        EligibilityStatus::from(self.eligible)
    }
}
