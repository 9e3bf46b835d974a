//! Serialized regression predictor

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Trained regression model mapping a fixed-order feature vector to a
/// scalar flight-demand forecast.
///
/// The artifact is opaque from the dashboard's point of view: it was
/// produced by an external training pipeline and is only ever invoked,
/// never inspected or retrained here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predictor {
    model_type: String,
    intercept: f64,
    coefficients: Vec<f64>,
}

impl Predictor {
    /// Load a predictor artifact from disk
    pub fn load(path: &Path) -> Result<Predictor> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Artifact(format!("Failed to read {}: {}", path.display(), e)))?;
        let predictor: Predictor = serde_json::from_str(&content)
            .map_err(|e| Error::Artifact(format!("Failed to parse {}: {}", path.display(), e)))?;
        predictor.validate(path)?;
        Ok(predictor)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(Error::Artifact(format!(
                "Predictor {} has no coefficients",
                path.display()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::Artifact(format!(
                "Predictor {} contains non-finite weights",
                path.display()
            )));
        }
        Ok(())
    }

    /// Model type tag carried by the artifact (e.g. "linear_regression")
    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    /// Number of input features the predictor expects
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Run the regression on an assembled feature vector.
    ///
    /// Deterministic for a fixed artifact. Errors on a length mismatch or
    /// non-finite input; the caller treats either as fatal for that
    /// submission (no retry, no fallback value).
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(Error::Prediction(format!(
                "Feature vector has {} values, predictor expects {}",
                features.len(),
                self.coefficients.len()
            )));
        }
        if let Some(pos) = features.iter().position(|v| !v.is_finite()) {
            return Err(Error::Prediction(format!(
                "Feature at index {} is not finite",
                pos
            )));
        }

        let prediction = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>();

        if !prediction.is_finite() {
            return Err(Error::Prediction("Predictor produced a non-finite value".to_string()));
        }
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(intercept: f64, coefficients: Vec<f64>) -> Predictor {
        Predictor {
            model_type: "linear_regression".to_string(),
            intercept,
            coefficients,
        }
    }

    #[test]
    fn test_predict_linear_combination() {
        let predictor = fixture(10.0, vec![2.0, 0.5]);
        let result = predictor.predict(&[3.0, 4.0]).unwrap();
        assert_eq!(result, 10.0 + 6.0 + 2.0);
    }

    #[test]
    fn test_predict_deterministic() {
        let predictor = fixture(1.0, vec![0.25, -1.5, 3.0]);
        let features = [100.0, 0.12, 42.0];
        assert_eq!(
            predictor.predict(&features).unwrap(),
            predictor.predict(&features).unwrap()
        );
    }

    #[test]
    fn test_predict_shape_mismatch() {
        let predictor = fixture(0.0, vec![1.0, 1.0, 1.0]);
        let result = predictor.predict(&[1.0, 2.0]);
        assert!(matches!(result, Err(Error::Prediction(_))));
    }

    #[test]
    fn test_predict_rejects_nan_input() {
        let predictor = fixture(0.0, vec![1.0, 1.0]);
        let result = predictor.predict(&[1.0, f64::NAN]);
        assert!(matches!(result, Err(Error::Prediction(_))));
    }

    #[test]
    fn test_predict_rejects_infinite_input() {
        let predictor = fixture(0.0, vec![1.0, 1.0]);
        let result = predictor.predict(&[f64::INFINITY, 0.0]);
        assert!(matches!(result, Err(Error::Prediction(_))));
    }

    #[test]
    fn test_load_rejects_missing_file() {
        let result = Predictor::load(Path::new("/nonexistent/demand_model.json"));
        assert!(matches!(result, Err(Error::Artifact(_))));
    }
}
