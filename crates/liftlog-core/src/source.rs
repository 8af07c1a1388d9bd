//! The telemetry-source collaborator interface and its in-memory form.
//!
//! The dataset logic never talks to a concrete database. It depends on
//! [`TelemetrySource`], the abstract append/list capability set, so the
//! `PostgreSQL` store and the in-memory store used in tests are freely
//! substitutable.

use std::convert::Infallible;
use std::future::Future;

use chrono::{DateTime, Utc};
use liftlog_types::{DemandEvent, DemandId, StateId, StateSnapshot};
use tokio::sync::RwLock;

/// Append and list operations over the two telemetry streams.
///
/// Implementations own persistence of [`StateSnapshot`] and [`DemandEvent`]
/// records. List results may be in insertion order or unordered; callers
/// sort. Appends with a `None` timestamp record the current time.
pub trait TelemetrySource {
    /// Error type produced by the backing store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append a state snapshot, assigning a fresh id. A `None` timestamp
    /// defaults to now.
    fn append_state(
        &self,
        floor: i32,
        timestamp: Option<DateTime<Utc>>,
        vacant: bool,
        moving: bool,
    ) -> impl Future<Output = Result<StateSnapshot, Self::Error>> + Send;

    /// Append a demand event, assigning a fresh id. A `None` timestamp
    /// defaults to now.
    fn append_demand(
        &self,
        floor: i32,
        timestamp: Option<DateTime<Utc>>,
    ) -> impl Future<Output = Result<DemandEvent, Self::Error>> + Send;

    /// Return every stored state snapshot.
    fn list_states(&self) -> impl Future<Output = Result<Vec<StateSnapshot>, Self::Error>> + Send;

    /// Return every stored demand event.
    fn list_demands(&self) -> impl Future<Output = Result<Vec<DemandEvent>, Self::Error>> + Send;
}

/// In-memory [`TelemetrySource`] holding both streams in vectors.
///
/// Used by the API tests and local runs where no database is available.
/// Appends are insertion-ordered and infallible.
#[derive(Debug, Default)]
pub struct MemoryTelemetry {
    states: RwLock<Vec<StateSnapshot>>,
    demands: RwLock<Vec<DemandEvent>>,
}

impl MemoryTelemetry {
    /// Create an empty in-memory source.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TelemetrySource for MemoryTelemetry {
    type Error = Infallible;

    async fn append_state(
        &self,
        floor: i32,
        timestamp: Option<DateTime<Utc>>,
        vacant: bool,
        moving: bool,
    ) -> Result<StateSnapshot, Infallible> {
        let snapshot = StateSnapshot {
            id: StateId::new(),
            floor,
            timestamp: timestamp.unwrap_or_else(Utc::now),
            vacant,
            moving,
        };
        self.states.write().await.push(snapshot.clone());
        Ok(snapshot)
    }

    async fn append_demand(
        &self,
        floor: i32,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<DemandEvent, Infallible> {
        let demand = DemandEvent {
            id: DemandId::new(),
            floor,
            timestamp: timestamp.unwrap_or_else(Utc::now),
        };
        self.demands.write().await.push(demand.clone());
        Ok(demand)
    }

    async fn list_states(&self) -> Result<Vec<StateSnapshot>, Infallible> {
        Ok(self.states.read().await.clone())
    }

    async fn list_demands(&self) -> Result<Vec<DemandEvent>, Infallible> {
        Ok(self.demands.read().await.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn appends_assign_distinct_ids() {
        let source = MemoryTelemetry::new();
        let a = source.append_state(1, None, true, false).await.unwrap();
        let b = source.append_state(1, None, true, false).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn omitted_timestamp_defaults_to_now() {
        let source = MemoryTelemetry::new();
        let before = Utc::now();
        let demand = source.append_demand(4, None).await.unwrap();
        let after = Utc::now();
        assert!(demand.timestamp >= before && demand.timestamp <= after);
    }

    #[tokio::test]
    async fn lists_preserve_insertion_order() {
        let source = MemoryTelemetry::new();
        let first = source.append_demand(1, None).await.unwrap();
        let second = source.append_demand(2, None).await.unwrap();

        let listed = source.list_demands().await.unwrap();
        assert_eq!(listed, vec![first, second]);
    }
}
