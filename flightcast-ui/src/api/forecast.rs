//! Forecast submission endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flightcast_common::forecast::{assemble, DemandTier, ForecastInputs};
use flightcast_common::history::PredictionRecord;
use flightcast_common::time;
use flightcast_common::Error;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::AppState;

/// One assembled feature, echoed back for the "input data used" panel
#[derive(Debug, Serialize)]
pub struct FeatureValue {
    pub name: String,
    pub value: f64,
}

/// Forecast response
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub timestamp: String,
    pub prediction: f64,
    pub tier: DemandTier,
    pub country: String,
    pub season: String,
    pub previous_flights: u32,
    pub total_predictions: usize,
    pub features: Vec<FeatureValue>,
}

/// POST /api/forecast
///
/// Validates the submitted snapshot, assembles the feature vector, invokes
/// the predictor, and appends the record to the session history. The
/// append happens strictly after a successful prediction; a failed
/// submission leaves the ledger untouched and the user may retry.
pub async fn submit_forecast(
    State(state): State<AppState>,
    Json(inputs): Json<ForecastInputs>,
) -> Result<Json<ForecastResponse>, ForecastError> {
    inputs.validate()?;

    let features = assemble(&inputs, &state.artifacts.encoding, &state.artifacts.schema)?;

    // Cosmetic "processing" pause; no effect on the computed value
    if state.reveal_delay_ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(state.reveal_delay_ms)).await;
    }

    let prediction = state.artifacts.predictor.predict(&features)?;
    let timestamp = time::minute_stamp(&time::now());
    let tier = DemandTier::from_prediction(prediction);

    let record = PredictionRecord {
        timestamp: timestamp.clone(),
        prediction,
        country: inputs.country.clone(),
        season: inputs.season,
        inputs: inputs.clone(),
    };

    let mut history = state.history.write().await;
    history.append(record);
    let total_predictions = history.len();
    drop(history);

    info!(
        "Forecast #{}: {} -> {} -> {:.0} flights ({})",
        total_predictions, inputs.season, inputs.country, prediction, tier
    );

    let feature_names = state.artifacts.schema.names();
    let features = feature_names
        .iter()
        .zip(&features)
        .map(|(name, value)| FeatureValue {
            name: name.clone(),
            value: *value,
        })
        .collect();

    Ok(Json(ForecastResponse {
        timestamp,
        prediction,
        tier,
        country: inputs.country,
        season: inputs.season.label().to_string(),
        previous_flights: inputs.previous_flights,
        total_predictions,
        features,
    }))
}

/// Forecast API errors
#[derive(Debug)]
pub enum ForecastError {
    /// Out-of-bounds or malformed submission
    InvalidInput(String),
    /// Feature assembly or predictor failure for this submission
    PredictionFailed(String),
}

impl From<Error> for ForecastError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => ForecastError::InvalidInput(msg),
            other => ForecastError::PredictionFailed(other.to_string()),
        }
    }
}

impl IntoResponse for ForecastError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ForecastError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ForecastError::PredictionFailed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
