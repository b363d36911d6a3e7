use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{Institution, TargetCountry};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read institution catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid institution catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Country keyed reference list of recommended institutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstitutionCatalog {
    entries: BTreeMap<TargetCountry, Vec<Institution>>,
}

impl InstitutionCatalog {
    pub fn new(entries: BTreeMap<TargetCountry, Vec<Institution>>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            TargetCountry::Usa,
            vec![
                Institution::new("MIT", Some("https://www.mit.edu")),
                Institution::new("Stanford", Some("https://www.stanford.edu")),
                Institution::new("Harvard", Some("https://www.harvard.edu")),
            ],
        );
        entries.insert(
            TargetCountry::Canada,
            vec![
                Institution::new("University of Toronto", Some("https://www.utoronto.ca")),
                Institution::new(
                    "University of British Columbia",
                    Some("https://www.ubc.ca"),
                ),
                Institution::new("McGill University", Some("https://www.mcgill.ca")),
            ],
        );
        Self { entries }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Ordered institutions for a country, empty when none are registered.
    pub fn institutions_for(&self, country: TargetCountry) -> &[Institution] {
        self.entries
            .get(&country)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for InstitutionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
