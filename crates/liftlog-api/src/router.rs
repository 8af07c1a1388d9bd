//! Axum router construction for the telemetry API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled so dashboards and training pipelines on other origins can read
//! the dataset.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use liftlog_core::TelemetrySource;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the telemetry API.
///
/// The router includes:
/// - `GET  /` -- minimal HTML status page
/// - `GET  /api/states` / `POST /api/states` -- state snapshots
/// - `GET  /api/demands` / `POST /api/demands` -- demand events
/// - `GET  /api/dataset` -- paired training dataset
/// - `GET  /api/dataset/events` -- unified tagged event stream
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router<S>(state: Arc<AppState<S>>) -> Router
where
    S: TelemetrySource + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index::<S>))
        // Telemetry streams
        .route(
            "/api/states",
            get(handlers::list_states::<S>).post(handlers::create_state::<S>),
        )
        .route(
            "/api/demands",
            get(handlers::list_demands::<S>).post(handlers::create_demand::<S>),
        )
        // Derived datasets
        .route("/api/dataset", get(handlers::get_paired_dataset::<S>))
        .route("/api/dataset/events", get(handlers::get_tagged_events::<S>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
