//! Staged sale event indexer: entry point.
//!
//! Starts a background task that polls Soroban `getEvents` for the sale
//! contract's events and persists them to SQLite, and serves them over a
//! small Axum REST API. Ctrl-C stops both.

mod api;
mod config;
mod db;
mod errors;
mod events;
mod indexer;
mod rpc;
mod xdr;

use std::sync::Arc;

use axum::{routing::get, Router};
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use indexer::IndexerState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load optional .env file (ignored if missing) before reading RUST_LOG.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("{e}"))?;

    let pool = db::init_pool(&config.database_url).await?;

    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let shutdown = CancellationToken::new();

    // ─── Background indexer ───────────────────────────────
    let indexer_state = Arc::new(IndexerState {
        pool: pool.clone(),
        config: config.clone(),
        client,
    });
    let indexer_task = tokio::spawn(indexer::run(indexer_state, shutdown.clone()));

    // ─── REST API ─────────────────────────────────────────
    let api_state = Arc::new(api::ApiState { pool });

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/events", get(api::get_all_events))
        .route("/stages/:index/events", get(api::get_stage_events))
        .route(
            "/participants/:address/events",
            get(api::get_participant_events),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(api_state);

    let addr = format!("0.0.0.0:{}", config.api_port);
    info!("API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown.clone()))
        .await?;

    shutdown.cancel();
    if let Err(e) = indexer_task.await {
        warn!("Indexer task ended abnormally: {e}");
    }
    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!("Failed to listen for ctrl-c: {e}");
            }
            info!("Shutdown requested");
            shutdown.cancel();
        }
        _ = shutdown.cancelled() => {}
    }
}
