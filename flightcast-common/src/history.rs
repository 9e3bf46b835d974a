//! Session prediction history
//!
//! The ledger is the only mutable state in the system. It lives for one
//! interactive session, grows by one record per successful prediction, and
//! is cleared only by the explicit reset action. Nothing removes a single
//! record.

use crate::forecast::{ForecastInputs, Season};
use serde::{Deserialize, Serialize};

/// One successful prediction. Created after the predictor returns,
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Minute-resolution timestamp ("YYYY-MM-DD HH:MM")
    pub timestamp: String,
    /// Forecasted flight count
    pub prediction: f64,
    /// Destination country as submitted
    pub country: String,
    /// Travel season as submitted
    pub season: Season,
    /// Raw form snapshot the prediction was computed from
    pub inputs: ForecastInputs,
}

/// Append-only, session-lifetime sequence of prediction records
#[derive(Debug, Default)]
pub struct HistoryLedger {
    records: Vec<PredictionRecord>,
}

impl HistoryLedger {
    pub fn new() -> HistoryLedger {
        HistoryLedger::default()
    }

    /// Append a record. Always succeeds.
    pub fn append(&mut self, record: PredictionRecord) {
        self.records.push(record);
    }

    /// Clear every record. Irreversible within the session.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Last `n` records, most recent first, for the sidebar panel
    pub fn tail(&self, n: usize) -> Vec<&PredictionRecord> {
        self.records.iter().rev().take(n).collect()
    }

    /// Full history in chronological order, for export and charting
    pub fn all(&self) -> &[PredictionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
