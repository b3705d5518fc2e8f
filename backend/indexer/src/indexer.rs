//! Long-running background task that polls the Soroban RPC and writes
//! decoded sale events to the database.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::Config;
use crate::db;
use crate::rpc;

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Poll until `shutdown` is cancelled.
pub async fn run(state: Arc<IndexerState>, shutdown: CancellationToken) {
    info!("Indexer starting, sale contract: {}", state.config.contract_id);

    // Resume from the stored cursor; fall back to the configured start ledger.
    let last_ledger = db::get_last_ledger(&state.pool).await.unwrap_or(0);
    let mut cursor = db::get_cursor_string(&state.pool).await.unwrap_or(None);

    let mut current_ledger = if last_ledger > 0 {
        last_ledger as u32
    } else {
        state.config.start_ledger
    };

    info!("Resuming from ledger {current_ledger}");

    loop {
        match poll_once(
            &state.pool,
            &state.client,
            &state.config,
            current_ledger,
            cursor.as_deref(),
        )
        .await
        {
            Ok((next_ledger, next_cursor)) => {
                current_ledger = next_ledger;
                cursor = next_cursor;
            }
            Err(e) => {
                error!("Indexer poll error: {e}");
            }
        }

        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("Indexer stopped at ledger {current_ledger}");
                return;
            }
            _ = tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)) => {}
        }
    }
}

/// Perform a single poll iteration.
///
/// Returns `(next_start_ledger, next_cursor)`.
async fn poll_once(
    pool: &SqlitePool,
    client: &Client,
    config: &Config,
    start_ledger: u32,
    cursor: Option<&str>,
) -> crate::errors::Result<(u32, Option<String>)> {
    let (raw_events, next_cursor, latest_ledger) = rpc::fetch_events(
        client,
        &config.rpc_url,
        &config.contract_id,
        start_ledger,
        cursor,
        config.events_per_page,
    )
    .await?;

    if !raw_events.is_empty() {
        let decoded = rpc::decode_events(&raw_events, &config.contract_id);
        let inserted = db::insert_events(pool, &decoded).await?;
        info!(
            "Polled {} raw events → {} new sale records stored",
            raw_events.len(),
            inserted
        );
    }

    let next_ledger = next_start_ledger(start_ledger, latest_ledger);
    db::save_cursor(pool, next_ledger as i64, next_cursor.as_deref()).await?;

    Ok((next_ledger, next_cursor))
}

/// The ledger never moves backwards, even if the RPC reports an older tip.
fn next_start_ledger(start_ledger: u32, latest_ledger: Option<u64>) -> u32 {
    latest_ledger
        .and_then(|l| u32::try_from(l).ok())
        .map(|l| l.max(start_ledger))
        .unwrap_or(start_ledger)
}
