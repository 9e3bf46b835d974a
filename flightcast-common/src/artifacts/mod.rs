//! Trained model artifacts
//!
//! Three serialized artifacts define the forecasting model: the regression
//! predictor, the destination-country frequency encoding, and the ordered
//! feature schema. All three are loaded exactly once at startup and shared
//! read-only for the rest of the session. Any missing, unreadable, or
//! internally inconsistent artifact is startup-fatal.

mod encoding;
mod predictor;
mod schema;

pub use encoding::CountryEncoding;
pub use predictor::Predictor;
pub use schema::FeatureSchema;

use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// File name of the serialized regression predictor
pub const MODEL_FILE: &str = "demand_model.json";
/// File name of the country frequency-encoding table
pub const FREQUENCIES_FILE: &str = "country_frequencies.json";
/// File name of the ordered feature-name list
pub const FEATURES_FILE: &str = "feature_names.json";

/// The complete set of model artifacts, loaded once per process
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub predictor: Predictor,
    pub encoding: CountryEncoding,
    pub schema: FeatureSchema,
}

impl ArtifactSet {
    /// Load all three artifacts from a folder and cross-validate them.
    ///
    /// The predictor's coefficient count must equal the schema length:
    /// a mismatch would otherwise produce silently wrong forecasts, so it
    /// is rejected at load time.
    pub fn load(folder: &Path) -> Result<ArtifactSet> {
        if !folder.is_dir() {
            return Err(Error::Artifact(format!(
                "Artifacts folder not found: {}",
                folder.display()
            )));
        }

        let predictor = Predictor::load(&folder.join(MODEL_FILE))?;
        let encoding = CountryEncoding::load(&folder.join(FREQUENCIES_FILE))?;
        let schema = FeatureSchema::load(&folder.join(FEATURES_FILE))?;

        if predictor.n_features() != schema.len() {
            return Err(Error::Artifact(format!(
                "Predictor expects {} features but schema lists {}",
                predictor.n_features(),
                schema.len()
            )));
        }

        info!(
            "Loaded model artifacts: {} ({} features, {} countries)",
            predictor.model_type(),
            schema.len(),
            encoding.len()
        );

        Ok(ArtifactSet {
            predictor,
            encoding,
            schema,
        })
    }
}
