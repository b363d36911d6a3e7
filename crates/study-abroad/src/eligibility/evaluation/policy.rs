use serde::{Deserialize, Serialize};

use super::Criterion;

/// Banner shown above the criteria list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Eligible,
    NotEligible,
}

impl EligibilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EligibilityStatus::Eligible => "Eligible",
            EligibilityStatus::NotEligible => "Not Eligible",
        }
    }
}

impl From<bool> for EligibilityStatus {
    fn from(eligible: bool) -> Self {
        if eligible {
            Self::Eligible
        } else {
            Self::NotEligible
        }
    }
}

/// An empty rule list never grants eligibility.
pub(crate) fn decide_eligibility(criteria: &[Criterion]) -> bool {
    !criteria.is_empty() && criteria.iter().all(|criterion| criterion.satisfied)
}
