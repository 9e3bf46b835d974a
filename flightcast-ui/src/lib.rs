//! flightcast-ui library - Flight Demand Forecasting dashboard
//!
//! Exposes the application state and router for integration testing.

use axum::routing::{get, post};
use axum::Router;
use flightcast_common::artifacts::ArtifactSet;
use flightcast_common::history::HistoryLedger;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod api;

/// Application state shared across HTTP handlers
///
/// The artifacts are loaded once at startup and read-only thereafter.
/// The history ledger is the only mutable state; the lock serves the
/// async runtime, the session model itself is single-user.
#[derive(Clone)]
pub struct AppState {
    /// Trained model artifacts (predictor, country encoding, feature schema)
    pub artifacts: Arc<ArtifactSet>,
    /// Session prediction history
    pub history: Arc<RwLock<HistoryLedger>>,
    /// Cosmetic delay before revealing a forecast (0 in tests)
    pub reveal_delay_ms: u64,
}

impl AppState {
    /// Create new application state around a loaded artifact set
    pub fn new(artifacts: Arc<ArtifactSet>, reveal_delay_ms: u64) -> Self {
        Self {
            artifacts,
            history: Arc::new(RwLock::new(HistoryLedger::new())),
            reveal_delay_ms,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/meta", get(api::get_meta))
        .route("/api/forecast", post(api::submit_forecast))
        .route("/api/history", get(api::get_history))
        .route("/api/history/reset", post(api::reset_history))
        .route("/api/history/series", get(api::get_series))
        .route("/api/history/export", get(api::export_history))
        .merge(api::health_routes())
        .with_state(state)
}
