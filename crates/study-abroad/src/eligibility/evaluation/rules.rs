use serde::{Deserialize, Serialize};

use super::super::domain::{year_unit, ApplicantProfile, TargetCountry};
use super::Criterion;

/// Profile dimension a rule compares against its minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Cgpa,
    EnglishProficiency,
    WorkExperience,
}

/// One ordered entry of a country's rule table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub requirement: Requirement,
    pub minimum: f64,
}

const USA_RULES: [Rule; 3] = [
    Rule {
        requirement: Requirement::Cgpa,
        minimum: 3.0,
    },
    Rule {
        requirement: Requirement::EnglishProficiency,
        minimum: 6.5,
    },
    Rule {
        requirement: Requirement::WorkExperience,
        minimum: 1.0,
    },
];

// Work experience is intentionally absent for Canada.
const CANADA_RULES: [Rule; 2] = [
    Rule {
        requirement: Requirement::Cgpa,
        minimum: 2.8,
    },
    Rule {
        requirement: Requirement::EnglishProficiency,
        minimum: 6.0,
    },
];

impl TargetCountry {
    /// Ordered rule table evaluated for applicants targeting this country.
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            TargetCountry::Usa => &USA_RULES,
            TargetCountry::Canada => &CANADA_RULES,
        }
    }
}

impl Rule {
    pub fn description(&self) -> String {
        match self.requirement {
            Requirement::Cgpa => format!("CGPA requirement (≥{:.1})", self.minimum),
            Requirement::EnglishProficiency => {
                format!("English proficiency requirement (≥{:.1} IELTS)", self.minimum)
            }
            Requirement::WorkExperience => {
                format!(
                    "Work experience requirement (≥{} {})",
                    self.minimum,
                    year_unit(self.minimum)
                )
            }
        }
    }

    /// `>=` on f64 is false for NaN, so malformed input reads as unmet.
    pub(crate) fn assess(&self, profile: &ApplicantProfile, ielts_equivalent: f64) -> Criterion {
        let observed = match self.requirement {
            Requirement::Cgpa => profile.cgpa,
            Requirement::EnglishProficiency => ielts_equivalent,
            Requirement::WorkExperience => profile.work_experience_years,
        };

        Criterion {
            requirement: self.requirement,
            description: self.description(),
            satisfied: observed >= self.minimum,
        }
    }
}
