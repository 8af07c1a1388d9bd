//! Data layer (`PostgreSQL`) for the Liftlog telemetry service.
//!
//! `PostgreSQL` is the durable store for the two append-only telemetry
//! streams: elevator state snapshots and floor-call demands. This crate
//! provides the connection pool, schema migrations, and the
//! [`TelemetryStore`] implementing the core's
//! [`TelemetrySource`](liftlog_core::TelemetrySource) collaborator
//! interface.
//!
//! # Modules
//!
//! - [`postgres`] -- Connection pool, configuration, and migrations
//! - [`telemetry_store`] -- Append and list operations on both streams
//! - [`error`] -- Shared error types

pub mod error;
pub mod postgres;
pub mod telemetry_store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use postgres::{PostgresConfig, PostgresPool};
pub use telemetry_store::{DemandRow, StateRow, TelemetryStore};
