use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{ApplicantProfile, EnglishTest, ProfileSubmission};
use super::intake::{IntakeGuard, IntakeViolation};

#[derive(Debug)]
pub enum ProfileImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ProfileImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileImportError::Io(err) => write!(f, "failed to read profile export: {}", err),
            ProfileImportError::Csv(err) => write!(f, "invalid profile CSV data: {}", err),
        }
    }
}

impl std::error::Error for ProfileImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileImportError::Io(err) => Some(err),
            ProfileImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ProfileImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ProfileImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Why a single CSV row did not yield a profile.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowRejection {
    #[error("malformed row: {0}")]
    Malformed(String),
    #[error("unknown score type '{0}'")]
    UnknownScoreType(String),
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
}

/// Outcome of one data row, numbered from 1 after the header.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedProfile {
    pub row: usize,
    pub outcome: Result<ApplicantProfile, RowRejection>,
}

pub struct ProfileImporter;

impl ProfileImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        guard: &IntakeGuard,
    ) -> Result<Vec<ImportedProfile>, ProfileImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, guard)
    }

    /// Row-level problems are collected; only I/O failures abort the import.
    pub fn from_reader<R: Read>(
        reader: R,
        guard: &IntakeGuard,
    ) -> Result<Vec<ImportedProfile>, ProfileImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut imported = Vec::new();

        for (index, record) in csv_reader.deserialize::<ProfileRow>().enumerate() {
            let outcome = match record {
                Ok(row) => row.into_submission().and_then(|submission| {
                    guard
                        .profile_from_submission(submission)
                        .map_err(RowRejection::from)
                }),
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => Err(RowRejection::Malformed(err.to_string())),
            };

            imported.push(ImportedProfile {
                row: index + 1,
                outcome,
            });
        }

        Ok(imported)
    }
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    cgpa: f64,
    work_experience_years: f64,
    english_score: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    score_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    target_country: Option<String>,
}

impl ProfileRow {
    fn into_submission(self) -> Result<ProfileSubmission, RowRejection> {
        let english_test = match self.score_type {
            Some(raw) => EnglishTest::from_code(&raw).ok_or(RowRejection::UnknownScoreType(raw))?,
            None => EnglishTest::default(),
        };

        Ok(ProfileSubmission {
            cgpa: self.cgpa,
            work_experience_years: self.work_experience_years,
            english_score: self.english_score,
            english_test,
            target_country: self.target_country,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
