//! History endpoints: sidebar panel, reset, chart series, CSV export

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use flightcast_common::export::history_to_csv;
use flightcast_common::forecast::Season;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::info;

use crate::AppState;

/// Default number of entries in the sidebar panel
const SIDEBAR_LIMIT: usize = 5;

/// Query parameters for the history panel
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Number of most-recent entries to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    SIDEBAR_LIMIT
}

/// One sidebar entry
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    /// 1-based position in the ledger ("Prediction #n")
    pub index: usize,
    pub timestamp: String,
    pub prediction: f64,
    pub country: String,
    pub season: Season,
}

/// History panel response
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub total: usize,
    pub entries: Vec<HistoryEntry>,
}

/// GET /api/history?limit=n
///
/// Last n records, most recent first.
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryResponse> {
    let history = state.history.read().await;
    let total = history.len();

    let entries = history
        .tail(query.limit)
        .into_iter()
        .enumerate()
        .map(|(i, record)| HistoryEntry {
            index: total - i,
            timestamp: record.timestamp.clone(),
            prediction: record.prediction,
            country: record.country.clone(),
            season: record.season,
        })
        .collect();

    Json(HistoryResponse { total, entries })
}

/// POST /api/history/reset
///
/// Clears the entire session history. Irreversible.
pub async fn reset_history(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut history = state.history.write().await;
    let cleared = history.len();
    history.reset();
    info!("History reset ({} records cleared)", cleared);

    Json(json!({
        "cleared": cleared,
        "total": 0,
    }))
}

/// One chart point
#[derive(Debug, Serialize)]
pub struct SeriesPoint {
    pub timestamp: String,
    pub prediction: f64,
}

/// One chart series (one destination country)
#[derive(Debug, Serialize)]
pub struct CountrySeries {
    pub country: String,
    pub points: Vec<SeriesPoint>,
}

/// Chart payload
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    /// False until the ledger holds at least two records
    pub available: bool,
    pub total_points: usize,
    pub series: Vec<CountrySeries>,
}

/// GET /api/history/series
///
/// Chart data, one series per destination country. Gated on ledger
/// length: with fewer than two records no chart is drawn.
pub async fn get_series(State(state): State<AppState>) -> Json<SeriesResponse> {
    let history = state.history.read().await;

    if history.len() < 2 {
        return Json(SeriesResponse {
            available: false,
            total_points: 0,
            series: Vec::new(),
        });
    }

    let mut grouped: BTreeMap<String, Vec<SeriesPoint>> = BTreeMap::new();
    for record in history.all() {
        grouped
            .entry(record.country.clone())
            .or_default()
            .push(SeriesPoint {
                timestamp: record.timestamp.clone(),
                prediction: record.prediction,
            });
    }

    Json(SeriesResponse {
        available: true,
        total_points: history.len(),
        series: grouped
            .into_iter()
            .map(|(country, points)| CountrySeries { country, points })
            .collect(),
    })
}

/// GET /api/history/export
///
/// Full history as a CSV download.
pub async fn export_history(State(state): State<AppState>) -> Result<Response, ExportError> {
    let history = state.history.read().await;
    let csv = history_to_csv(history.all()).map_err(|e| ExportError(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"flight_predictions.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

/// CSV export failure
#[derive(Debug)]
pub struct ExportError(String);

impl IntoResponse for ExportError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.0,
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
