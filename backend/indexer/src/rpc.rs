//! Soroban RPC client: polls `getEvents` and decodes staged sale events.
//!
//! ## Resilience
//!
//! * Exponential back-off is applied when the RPC returns an error or rate-limit
//!   response, up to [`MAX_BACKOFF_SECS`] seconds.
//! * Transient network errors (connection reset, timeout) are retried silently.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{EventKind, SaleEvent};
use crate::xdr;

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawEvent {
    /// Topic list, JSON-rendered or base64 XDR
    pub topic: Vec<String>,
    /// Event data as rendered by the RPC
    pub value: Value,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// Fetch a page of events from the RPC.
///
/// * `start_ledger`: the ledger sequence to scan from (inclusive).
/// * `cursor`: optional opaque pagination cursor from a previous response.
/// * `limit`: maximum number of events to return.
///
/// Returns `(events, next_cursor, latest_ledger)`.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_id: &str,
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<(Vec<RawEvent>, Option<String>, Option<u64>)> {
    let mut backoff = INITIAL_BACKOFF_SECS;

    loop {
        let params = build_params(contract_id, start_ledger, cursor, limit);

        let response = client
            .post(rpc_url)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getEvents",
                "params": params,
            }))
            .send()
            .await;

        let resp = match response {
            Err(e) => {
                warn!("RPC request failed (will retry in {backoff}s): {e}");
                backoff = back_off(backoff).await;
                continue;
            }
            Ok(resp) => resp,
        };

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate-limited by RPC (will retry in {backoff}s)");
            backoff = back_off(backoff).await;
            continue;
        }

        let body: RpcResponse = resp.json().await?;

        if let Some(err) = body.error {
            // Invalid request / unknown method will never succeed on retry.
            if err.code == -32600 || err.code == -32601 {
                return Err(IndexerError::EventParse(format!(
                    "RPC hard error {}: {}",
                    err.code, err.message
                )));
            }
            warn!(
                "RPC soft error (will retry in {backoff}s): {} {}",
                err.code, err.message
            );
            backoff = back_off(backoff).await;
            continue;
        }

        let result = body.result.ok_or_else(|| {
            IndexerError::EventParse("Empty result from getEvents".to_string())
        })?;

        debug!(
            "Fetched {} events (latest_ledger={:?})",
            result.events.len(),
            result.latest_ledger
        );

        return Ok((result.events, result.cursor, result.latest_ledger));
    }
}

/// Sleep for `current` seconds and return the next back-off delay.
async fn back_off(current: u64) -> u64 {
    tokio::time::sleep(Duration::from_secs(current)).await;
    (current * 2).min(MAX_BACKOFF_SECS)
}

fn build_params(contract_id: &str, start_ledger: u32, cursor: Option<&str>, limit: u32) -> Value {
    let mut params = json!({
        "filters": [
            {
                "type": "contract",
                "contractIds": [contract_id]
            }
        ],
        "pagination": {
            "limit": limit
        }
    });

    if let Some(cur) = cursor {
        params["pagination"]["cursor"] = json!(cur);
    } else {
        params["startLedger"] = json!(start_ledger);
    }

    params
}

// ─────────────────────────────────────────────────────────
// Event decoding
// ─────────────────────────────────────────────────────────

/// Decode a list of raw RPC events into [`SaleEvent`] structs.
///
/// Events from failed contract calls are dropped.
pub fn decode_events(raw: &[RawEvent], contract_id: &str) -> Vec<SaleEvent> {
    raw.iter()
        .filter(|e| e.in_successful_contract_call.unwrap_or(true))
        .filter_map(|e| decode_single(e, contract_id))
        .collect()
}

fn decode_single(raw: &RawEvent, contract_id: &str) -> Option<SaleEvent> {
    let first_topic = raw.topic.first()?;
    let kind = EventKind::from_topic(&extract_symbol(first_topic));

    let ledger = raw.ledger.unwrap_or(0) as i64;
    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);

    let stage = if kind.has_stage_topic() {
        raw.topic.get(1).and_then(|t| extract_u32(t)).map(i64::from)
    } else {
        stage_from_data(&raw.value, &kind)
    };

    let (actor, amount) = decode_data(&raw.value, &kind);

    Some(SaleEvent {
        event_type: kind.as_str().to_string(),
        stage,
        actor,
        amount,
        ledger,
        timestamp,
        contract_id: raw
            .contract_id
            .clone()
            .unwrap_or_else(|| contract_id.to_string()),
        tx_hash: raw.tx_hash.as_deref().map(normalize_tx_hash),
    })
}

/// Pull `(actor, amount)` out of the JSON `value` blob for each event kind.
fn decode_data(value: &Value, kind: &EventKind) -> (Option<String>, Option<String>) {
    match kind {
        EventKind::SaleInitialized => (
            extract_field(value, &["admin"]),
            extract_field(value, &["hard_cap"]),
        ),
        EventKind::Whitelisted => (
            extract_field(value, &["participant"]),
            extract_field(value, &["allowance"]),
        ),
        EventKind::TokensPurchased => (
            extract_field(value, &["beneficiary", "buyer"]),
            extract_field(value, &["amount"]),
        ),
        EventKind::StageActivated | EventKind::SaleFinalized => {
            (None, extract_field(value, &["funds_raised"]))
        }
        EventKind::FundsWithdrawn
        | EventKind::TeamVestingReleased
        | EventKind::AdvisorVestingReleased => (
            extract_field(value, &["wallet"]),
            extract_field(value, &["amount"]),
        ),
        EventKind::Refunded => (
            extract_field(value, &["participant"]),
            extract_field(value, &["amount"]),
        ),
        EventKind::AdminTransferred => (extract_field(value, &["admin"]), None),
        EventKind::SalePaused | EventKind::SaleUnpaused => {
            // Data is the bare admin address.
            let actor = value
                .as_str()
                .map(String::from)
                .or_else(|| extract_field(value, &["address"]));
            (actor, None)
        }
        EventKind::Unknown => (None, None),
    }
}

fn stage_from_data(value: &Value, kind: &EventKind) -> Option<i64> {
    match kind {
        EventKind::StageActivated => value.get("stage").and_then(Value::as_i64),
        _ => None,
    }
}

fn extract_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Extract a Soroban Symbol from a topic entry.
///
/// The RPC may return `{"type":"symbol","value":"purchase"}`, base64 XDR, or
/// just the raw string.
fn extract_symbol(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        if let Some(s) = v.get("value").and_then(|x| x.as_str()) {
            return s.to_string();
        }
    }
    xdr::decode_symbol(raw).unwrap_or_else(|| raw.to_string())
}

/// Extract a stage index from a topic entry.
fn extract_u32(raw: &str) -> Option<u32> {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        let inner = v.get("value").unwrap_or(&v);
        return match inner {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.parse().ok(),
            _ => None,
        };
    }
    xdr::decode_u32(raw).or_else(|| raw.parse().ok())
}

/// Lower-case 32-byte hashes; anything else is kept verbatim.
fn normalize_tx_hash(raw: &str) -> String {
    match hex::decode(raw) {
        Ok(bytes) if bytes.len() == 32 => hex::encode(bytes),
        _ => raw.to_string(),
    }
}

/// Parse an ISO-8601 timestamp string into a Unix epoch (seconds).
fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
