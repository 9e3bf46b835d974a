//! Ordered feature-name schema

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Ordered list of feature names defining the predictor's expected input
/// vector layout. The assembler reorders its named values strictly by this
/// list; the order comes from the training pipeline and must never be
/// rearranged locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Load the feature-name artifact from disk
    pub fn load(path: &Path) -> Result<FeatureSchema> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Artifact(format!("Failed to read {}: {}", path.display(), e)))?;
        let schema: FeatureSchema = serde_json::from_str(&content)
            .map_err(|e| Error::Artifact(format!("Failed to parse {}: {}", path.display(), e)))?;
        schema.validate(path)?;
        Ok(schema)
    }

    /// Build a schema from an explicit name list (test fixtures)
    pub fn from_names<I, S>(names: I) -> FeatureSchema
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FeatureSchema {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.names.is_empty() {
            return Err(Error::Artifact(format!(
                "Feature schema {} is empty",
                path.display()
            )));
        }
        let mut seen = HashSet::new();
        for name in &self.names {
            if name.trim().is_empty() {
                return Err(Error::Artifact(format!(
                    "Feature schema {} contains a blank name",
                    path.display()
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::Artifact(format!(
                    "Feature schema {} lists '{}' twice",
                    path.display(),
                    name
                )));
            }
        }
        Ok(())
    }

    /// Feature names in predictor order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
