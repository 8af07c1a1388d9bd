//! Store operations for the two telemetry streams.
//!
//! Both tables are append-only: rows are inserted with an app-side UUID v7
//! id and never updated or deleted in normal operation. Reads come back in
//! insertion order; chronological ordering is the dataset layer's job.

use chrono::{DateTime, Utc};
use liftlog_core::TelemetrySource;
use liftlog_types::{DemandEvent, DemandId, StateId, StateSnapshot};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Operations on the `states` and `demands` tables.
#[derive(Clone)]
pub struct TelemetryStore {
    pool: PgPool,
}

impl TelemetryStore {
    /// Create a telemetry store over a connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Query state snapshots recorded within the half-open range
    /// `[from, to)`, ascending by time.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_states_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<StateSnapshot>, DbError> {
        let rows = sqlx::query_as::<_, StateRow>(
            r"SELECT id, floor, recorded_at, vacant, moving
              FROM states
              WHERE recorded_at >= $1 AND recorded_at < $2
              ORDER BY recorded_at, id",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StateRow::into_snapshot).collect())
    }

    /// Query demand events recorded within the half-open range `[from, to)`,
    /// ascending by time.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_demands_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<DemandEvent>, DbError> {
        let rows = sqlx::query_as::<_, DemandRow>(
            r"SELECT id, floor, requested_at
              FROM demands
              WHERE requested_at >= $1 AND requested_at < $2
              ORDER BY requested_at, id",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DemandRow::into_event).collect())
    }
}

impl TelemetrySource for TelemetryStore {
    type Error = DbError;

    async fn append_state(
        &self,
        floor: i32,
        timestamp: Option<DateTime<Utc>>,
        vacant: bool,
        moving: bool,
    ) -> Result<StateSnapshot, DbError> {
        let snapshot = StateSnapshot {
            id: StateId::new(),
            floor,
            timestamp: timestamp.unwrap_or_else(Utc::now),
            vacant,
            moving,
        };

        sqlx::query(
            r"INSERT INTO states (id, floor, recorded_at, vacant, moving)
              VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(snapshot.id.into_inner())
        .bind(snapshot.floor)
        .bind(snapshot.timestamp)
        .bind(snapshot.vacant)
        .bind(snapshot.moving)
        .execute(&self.pool)
        .await?;

        tracing::debug!(id = %snapshot.id, floor = snapshot.floor, "State snapshot appended");
        Ok(snapshot)
    }

    async fn append_demand(
        &self,
        floor: i32,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<DemandEvent, DbError> {
        let demand = DemandEvent {
            id: DemandId::new(),
            floor,
            timestamp: timestamp.unwrap_or_else(Utc::now),
        };

        sqlx::query(
            r"INSERT INTO demands (id, floor, requested_at)
              VALUES ($1, $2, $3)",
        )
        .bind(demand.id.into_inner())
        .bind(demand.floor)
        .bind(demand.timestamp)
        .execute(&self.pool)
        .await?;

        tracing::debug!(id = %demand.id, floor = demand.floor, "Demand appended");
        Ok(demand)
    }

    async fn list_states(&self) -> Result<Vec<StateSnapshot>, DbError> {
        let rows = sqlx::query_as::<_, StateRow>(
            r"SELECT id, floor, recorded_at, vacant, moving
              FROM states
              ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StateRow::into_snapshot).collect())
    }

    async fn list_demands(&self) -> Result<Vec<DemandEvent>, DbError> {
        let rows = sqlx::query_as::<_, DemandRow>(
            r"SELECT id, floor, requested_at
              FROM demands
              ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DemandRow::into_event).collect())
    }
}

/// A row from the `states` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StateRow {
    /// Snapshot id.
    pub id: Uuid,
    /// Observed floor.
    pub floor: i32,
    /// Observation time.
    pub recorded_at: DateTime<Utc>,
    /// Whether the cab was empty.
    pub vacant: bool,
    /// Whether the cab was in motion.
    pub moving: bool,
}

impl StateRow {
    /// Convert the raw row into the shared record type.
    pub const fn into_snapshot(self) -> StateSnapshot {
        StateSnapshot {
            id: StateId(self.id),
            floor: self.floor,
            timestamp: self.recorded_at,
            vacant: self.vacant,
            moving: self.moving,
        }
    }
}

/// A row from the `demands` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DemandRow {
    /// Demand id.
    pub id: Uuid,
    /// Calling floor.
    pub floor: i32,
    /// Call time.
    pub requested_at: DateTime<Utc>,
}

impl DemandRow {
    /// Convert the raw row into the shared record type.
    pub const fn into_event(self) -> DemandEvent {
        DemandEvent {
            id: DemandId(self.id),
            floor: self.floor,
            timestamp: self.requested_at,
        }
    }
}
