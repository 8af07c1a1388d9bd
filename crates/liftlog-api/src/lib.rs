//! Telemetry API server for the Liftlog service.
//!
//! This crate provides an Axum HTTP server exposing:
//!
//! - **Append endpoints** for the two telemetry streams (state snapshots,
//!   floor-call demands), with floor validation and default-to-now
//!   timestamps
//! - **List endpoints** returning each stream in insertion order
//! - **Dataset endpoints** serving the two derived shapes computed by
//!   [`liftlog_core`]: the paired training dataset and the unified tagged
//!   event stream
//! - **Minimal HTML status page** (`GET /`) linking the endpoints
//!
//! # Architecture
//!
//! Handlers are generic over the injected
//! [`TelemetrySource`](liftlog_core::TelemetrySource): production wires in
//! the `PostgreSQL` store, while the API tests run against the in-memory
//! source with no database at all. Each dataset response is computed from
//! a fresh read of the full store content; nothing is cached across
//! requests.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::{AppState, FloorRange};
