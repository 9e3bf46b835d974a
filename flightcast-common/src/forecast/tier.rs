//! Demand tier classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative demand label derived from the scalar forecast.
///
/// The thresholds are a business rule: fewer than 100 flights is low,
/// 100 up to (but not including) 500 is moderate, 500 and above is high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandTier {
    Low,
    Moderate,
    High,
}

impl DemandTier {
    /// Classify a scalar forecast
    pub fn from_prediction(prediction: f64) -> DemandTier {
        if prediction < 100.0 {
            DemandTier::Low
        } else if prediction < 500.0 {
            DemandTier::Moderate
        } else {
            DemandTier::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DemandTier::Low => "low",
            DemandTier::Moderate => "moderate",
            DemandTier::High => "high",
        }
    }
}

impl fmt::Display for DemandTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
