//! REST API endpoint handlers for the telemetry server.
//!
//! All handlers go through the injected
//! [`TelemetrySource`](liftlog_core::TelemetrySource) in the shared
//! [`AppState`]; none touch the database directly.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/states` | List all state snapshots |
//! | `POST` | `/api/states` | Append a state snapshot |
//! | `GET` | `/api/demands` | List all demand events |
//! | `POST` | `/api/demands` | Append a demand event |
//! | `GET` | `/api/dataset` | Paired training dataset |
//! | `GET` | `/api/dataset/events` | Unified tagged event stream |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use chrono::{DateTime, Utc};
use liftlog_core::{DatasetBuilder, TelemetrySource};

use crate::error::ApiError;
use crate::state::{AppState, FloorRange};

// ---------------------------------------------------------------------------
// Request body structs
// ---------------------------------------------------------------------------

/// Body of the `POST /api/states` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct CreateStateRequest {
    /// The floor the elevator was observed at.
    pub floor: i32,
    /// Observation time; omitted means now.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Whether the cab was empty.
    pub vacant: bool,
    /// Whether the cab was in motion.
    pub moving: bool,
}

/// Body of the `POST /api/demands` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct CreateDemandRequest {
    /// The floor the call was made from.
    pub floor: i32,
    /// Call time; omitted means now.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Reject floors the building does not serve before they reach storage.
fn check_floor(floors: FloorRange, floor: i32) -> Result<(), ApiError> {
    if floors.contains(floor) {
        Ok(())
    } else {
        Err(ApiError::InvalidInput(format!(
            "floor {floor} outside served range {}..={}",
            floors.min, floors.max
        )))
    }
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status, stream sizes, and
/// API links.
pub async fn index<S>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError>
where
    S: TelemetrySource + Send + Sync,
{
    let state_count = state.source.list_states().await.map_err(ApiError::store)?.len();
    let demand_count = state.source.list_demands().await.map_err(ApiError::store)?.len();

    Ok(Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Liftlog</title>
    <style>
        body {{
            font-family: -apple-system, 'Segoe UI', Roboto, sans-serif;
            background: #fafaf7;
            color: #1f2328;
            max-width: 44rem;
            margin: 3rem auto;
            padding: 0 1rem;
            line-height: 1.5;
        }}
        h1 {{ font-size: 1.6rem; margin-bottom: 0; }}
        h1 + p {{ color: #6b7280; margin-top: 0.2rem; }}
        table {{ border-collapse: collapse; margin: 1.5rem 0; }}
        td, th {{
            border-bottom: 1px solid #d6d3cd;
            padding: 0.4rem 1.2rem 0.4rem 0;
            text-align: left;
        }}
        th {{ font-weight: 600; }}
        code {{ background: #efede8; padding: 0.1rem 0.3rem; border-radius: 3px; }}
        a {{ color: #0b57d0; }}
    </style>
</head>
<body>
    <h1>Liftlog</h1>
    <p>Elevator telemetry and training-dataset server &mdash; running</p>

    <table>
        <tr><th>Stream</th><th>Records</th></tr>
        <tr><td>State snapshots</td><td>{state_count}</td></tr>
        <tr><td>Demands</td><td>{demand_count}</td></tr>
    </table>

    <table>
        <tr><th>Endpoint</th><th>Purpose</th></tr>
        <tr><td>GET/POST <a href="/api/states"><code>/api/states</code></a></td>
            <td>elevator state snapshots</td></tr>
        <tr><td>GET/POST <a href="/api/demands"><code>/api/demands</code></a></td>
            <td>floor-call demands</td></tr>
        <tr><td>GET <a href="/api/dataset"><code>/api/dataset</code></a></td>
            <td>paired training dataset</td></tr>
        <tr><td>GET <a href="/api/dataset/events"><code>/api/dataset/events</code></a></td>
            <td>unified tagged event stream</td></tr>
    </table>
</body>
</html>"#
    )))
}

// ---------------------------------------------------------------------------
// GET /api/states -- list state snapshots
// ---------------------------------------------------------------------------

/// List every stored state snapshot in insertion order.
pub async fn list_states<S>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError>
where
    S: TelemetrySource + Send + Sync,
{
    let states = state.source.list_states().await.map_err(ApiError::store)?;

    Ok(Json(serde_json::json!({
        "count": states.len(),
        "states": states,
    })))
}

// ---------------------------------------------------------------------------
// POST /api/states -- append a state snapshot
// ---------------------------------------------------------------------------

/// Append a state snapshot and return the stored record.
///
/// An omitted `timestamp` defaults to now. Floors outside the served
/// range are rejected with `400 Bad Request`.
pub async fn create_state<S>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<CreateStateRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: TelemetrySource + Send + Sync,
{
    check_floor(state.floors, body.floor)?;

    let snapshot = state
        .source
        .append_state(body.floor, body.timestamp, body.vacant, body.moving)
        .await
        .map_err(ApiError::store)?;

    tracing::debug!(id = %snapshot.id, floor = snapshot.floor, "State snapshot logged");
    Ok((StatusCode::CREATED, Json(snapshot)))
}

// ---------------------------------------------------------------------------
// GET /api/demands -- list demand events
// ---------------------------------------------------------------------------

/// List every stored demand event in insertion order.
pub async fn list_demands<S>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError>
where
    S: TelemetrySource + Send + Sync,
{
    let demands = state.source.list_demands().await.map_err(ApiError::store)?;

    Ok(Json(serde_json::json!({
        "count": demands.len(),
        "demands": demands,
    })))
}

// ---------------------------------------------------------------------------
// POST /api/demands -- append a demand event
// ---------------------------------------------------------------------------

/// Append a demand event and return the stored record.
///
/// An omitted `timestamp` defaults to now. Floors outside the served
/// range are rejected with `400 Bad Request`.
pub async fn create_demand<S>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<CreateDemandRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: TelemetrySource + Send + Sync,
{
    check_floor(state.floors, body.floor)?;

    let demand = state
        .source
        .append_demand(body.floor, body.timestamp)
        .await
        .map_err(ApiError::store)?;

    tracing::debug!(id = %demand.id, floor = demand.floor, "Demand logged");
    Ok((StatusCode::CREATED, Json(demand)))
}

// ---------------------------------------------------------------------------
// GET /api/dataset -- paired training dataset
// ---------------------------------------------------------------------------

/// Return the paired dataset: one record per demand that has a qualifying
/// prior resting snapshot, ascending by demand time.
///
/// A complete sequence or an error -- never a partial result.
pub async fn get_paired_dataset<S>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError>
where
    S: TelemetrySource + Send + Sync,
{
    let builder = DatasetBuilder::new(&state.source);
    let records = builder.paired_dataset().await.map_err(ApiError::store)?;

    Ok(Json(serde_json::json!({
        "count": records.len(),
        "records": records,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/dataset/events -- unified tagged event stream
// ---------------------------------------------------------------------------

/// Return the unified event stream: resting snapshots and demands in one
/// sequence, ascending by time.
pub async fn get_tagged_events<S>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError>
where
    S: TelemetrySource + Send + Sync,
{
    let builder = DatasetBuilder::new(&state.source);
    let events = builder
        .tagged_event_stream()
        .await
        .map_err(ApiError::store)?;

    Ok(Json(serde_json::json!({
        "count": events.len(),
        "events": events,
    })))
}
