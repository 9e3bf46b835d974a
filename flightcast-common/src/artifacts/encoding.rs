//! Destination-country frequency encoding

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Immutable mapping from destination-country name to the relative
/// frequency of that country in the model's training data.
///
/// Lookup is total: a country absent from the table resolves to 0.0.
/// That silent fallback is the documented behavior of the trained model's
/// encoding step, not an error path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryEncoding {
    frequencies: BTreeMap<String, f64>,
}

impl CountryEncoding {
    /// Load the frequency-encoding artifact from disk
    pub fn load(path: &Path) -> Result<CountryEncoding> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Artifact(format!("Failed to read {}: {}", path.display(), e)))?;
        let encoding: CountryEncoding = serde_json::from_str(&content)
            .map_err(|e| Error::Artifact(format!("Failed to parse {}: {}", path.display(), e)))?;
        encoding.validate(path)?;
        Ok(encoding)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.frequencies.is_empty() {
            return Err(Error::Artifact(format!(
                "Frequency table {} is empty",
                path.display()
            )));
        }
        for (country, freq) in &self.frequencies {
            if country.trim().is_empty() {
                return Err(Error::Artifact(format!(
                    "Frequency table {} contains a blank country name",
                    path.display()
                )));
            }
            if !freq.is_finite() || *freq < 0.0 {
                return Err(Error::Artifact(format!(
                    "Frequency for '{}' in {} is not a non-negative number",
                    country,
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Frequency for a destination country, 0.0 when unknown
    pub fn frequency(&self, country: &str) -> f64 {
        self.frequencies.get(country).copied().unwrap_or(0.0)
    }

    /// Country names in lexicographic order, for form display
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.frequencies.keys().map(String::as_str)
    }

    /// Number of countries in the table
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}
