use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Standardized English test the applicant reported a score for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnglishTest {
    #[default]
    #[serde(rename = "IELTS", alias = "ielts")]
    Ielts,
    #[serde(rename = "TOEFL", alias = "toefl")]
    Toefl,
}

impl EnglishTest {
    pub fn label(&self) -> &'static str {
        match self {
            EnglishTest::Ielts => "IELTS",
            EnglishTest::Toefl => "TOEFL",
        }
    }

    /// Case-insensitive lookup used by the CLI and CSV import.
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ielts" => Some(Self::Ielts),
            "toefl" => Some(Self::Toefl),
            _ => None,
        }
    }
}

impl fmt::Display for EnglishTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Destination countries with a registered rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TargetCountry {
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "Canada")]
    Canada,
}

impl TargetCountry {
    pub const ALL: [TargetCountry; 2] = [TargetCountry::Usa, TargetCountry::Canada];

    pub fn label(&self) -> &'static str {
        match self {
            TargetCountry::Usa => "USA",
            TargetCountry::Canada => "Canada",
        }
    }

    /// Unknown or blank codes resolve to `None`, which the evaluator treats as default deny.
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "usa" => Some(Self::Usa),
            "canada" => Some(Self::Canada),
            _ => None,
        }
    }
}

impl fmt::Display for TargetCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Academic profile evaluated against a country's rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub cgpa: f64,
    pub work_experience_years: f64,
    pub english_score: f64,
    pub english_test: EnglishTest,
    #[serde(default, deserialize_with = "lenient_country")]
    pub target_country: Option<TargetCountry>,
}

/// Raw form capture prior to intake validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub cgpa: f64,
    pub work_experience_years: f64,
    pub english_score: f64,
    #[serde(default, alias = "score_type")]
    pub english_test: EnglishTest,
    #[serde(default)]
    pub target_country: Option<String>,
}

/// Recommended destination shown to eligible applicants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    #[serde(default)]
    pub website_url: Option<String>,
}

impl Institution {
    pub fn new(name: &str, website_url: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            website_url: website_url.map(str::to_string),
        }
    }
}

pub(crate) fn year_unit(years: f64) -> &'static str {
    if years == 1.0 {
        "year"
    } else {
        "years"
    }
}

pub(crate) fn lenient_country<'de, D>(deserializer: D) -> Result<Option<TargetCountry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(TargetCountry::from_code))
}
