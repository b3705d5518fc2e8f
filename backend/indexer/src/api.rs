//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::errors::Result;
use crate::events::EventRecord;

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StageEventsResponse {
    pub stage: i64,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct ParticipantEventsResponse {
    pub address: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `200` with the serialized body, or `500` with the error message.
fn respond<T: Serialize>(result: Result<T>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /events`
///
/// Returns every indexed sale event.
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> Response {
    let result = db::get_all_events(&state.pool)
        .await
        .map(|events| AllEventsResponse {
            count: events.len(),
            events,
        });
    respond(result)
}

/// `GET /stages/:index/events`
///
/// Purchases made in, and the activation of, one stage.
pub async fn get_stage_events(
    State(state): State<Arc<ApiState>>,
    Path(stage): Path<i64>,
) -> Response {
    let result = db::get_events_for_stage(&state.pool, stage)
        .await
        .map(|events| StageEventsResponse {
            stage,
            count: events.len(),
            events,
        });
    respond(result)
}

/// `GET /participants/:address/events`
pub async fn get_participant_events(
    State(state): State<Arc<ApiState>>,
    Path(address): Path<String>,
) -> Response {
    let result = db::get_events_for_participant(&state.pool, &address)
        .await
        .map(|events| ParticipantEventsResponse {
            address,
            count: events.len(),
            events,
        });
    respond(result)
}
