//! flightcast-ui - Flight Demand Forecasting dashboard
//!
//! Serves a single-session browser dashboard that collects market
//! parameters for a flight route and forecasts seasonal demand with a
//! pretrained regression model. All three model artifacts are loaded
//! once at startup; a missing or corrupt artifact aborts startup.

use anyhow::{Context, Result};
use clap::Parser;
use flightcast_common::artifacts::ArtifactSet;
use flightcast_common::config;
use flightcast_ui::{build_router, AppState};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "flightcast-ui", about = "Flight demand forecasting dashboard")]
struct Args {
    /// Folder containing the model artifacts
    #[arg(long)]
    artifacts: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Flightcast dashboard (flightcast-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let service_config = config::resolve(args.artifacts.as_deref(), args.port)
        .context("Failed to resolve configuration")?;
    info!("Artifacts folder: {}", service_config.artifacts_folder.display());

    // Fail fast: no artifacts, no dashboard
    let artifacts = ArtifactSet::load(&service_config.artifacts_folder)
        .context("Failed to load model artifacts")?;
    info!("✓ Model artifacts loaded");

    let state = AppState::new(Arc::new(artifacts), service_config.reveal_delay_ms);
    let app = build_router(state);

    let addr = format!("{}:{}", service_config.host, service_config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("flightcast-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
