//! Dataset-construction logic for the Liftlog telemetry service.
//!
//! Given the two independently timestamped streams an elevator produces
//! (state snapshots and floor-call demands), this crate derives the
//! time-ordered views used to train a demand-prediction model: either a
//! unified tagged event stream, or demand/resting-state pairs ("the
//! elevator was resting at floor F when floor G called").
//!
//! The store is an injected collaborator behind [`TelemetrySource`], never
//! a global; [`MemoryTelemetry`] substitutes for `PostgreSQL` in tests.
//! The merge and resolve functions are pure and hold no state across
//! calls, so they are safe to invoke concurrently.
//!
//! # Modules
//!
//! - [`source`] -- The telemetry-source trait and its in-memory form
//! - [`merge`] -- Chronological merge of both streams into tagged events
//! - [`resolve`] -- Demand-to-resting-snapshot association
//! - [`dataset`] -- Orchestration over a source, exposing both shapes

pub mod dataset;
pub mod merge;
pub mod resolve;
pub mod source;

// Re-export primary entry points for convenience.
pub use dataset::DatasetBuilder;
pub use merge::merge;
pub use resolve::resolve;
pub use source::{MemoryTelemetry, TelemetrySource};
