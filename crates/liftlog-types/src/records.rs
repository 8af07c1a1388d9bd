//! Telemetry record structs for the Liftlog service.
//!
//! Two record kinds are persisted: [`StateSnapshot`] (an observed elevator
//! condition at an instant) and [`DemandEvent`] (a floor call). Two derived
//! shapes are computed on demand and never stored: [`AssociationRecord`]
//! (a demand paired with the most recent prior resting snapshot) and
//! [`TaggedEvent`] (both streams unified into one chronological sequence).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{DemandId, StateId};

// ---------------------------------------------------------------------------
// Persisted records
// ---------------------------------------------------------------------------

/// A snapshot of the elevator's condition at an instant.
///
/// `vacant` and `moving` are independent observations reported by the cab
/// telemetry unit. The combination `vacant && !moving` is the resting
/// condition the dataset logic cares about. Snapshots are immutable once
/// stored and are never deleted in normal operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Unique identifier assigned at append time.
    pub id: StateId,
    /// The floor the elevator was at (or passing) when observed.
    pub floor: i32,
    /// When the condition was observed.
    pub timestamp: DateTime<Utc>,
    /// Whether the cab was empty.
    pub vacant: bool,
    /// Whether the cab was in motion.
    pub moving: bool,
}

impl StateSnapshot {
    /// Whether this snapshot shows the elevator at rest: vacant and not
    /// moving.
    pub const fn is_resting(&self) -> bool {
        self.vacant && !self.moving
    }
}

/// A call for the elevator originating at a floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandEvent {
    /// Unique identifier assigned at append time.
    pub id: DemandId,
    /// The floor the call was made from.
    pub floor: i32,
    /// When the call was recorded.
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Derived records (computed per response, never persisted)
// ---------------------------------------------------------------------------

/// A demand paired with the most recent resting snapshot at or before it.
///
/// Invariant: `resting_time <= demand_time`, and `resting_time` is the
/// maximum timestamp among all resting snapshots satisfying that bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationRecord {
    /// Floor the elevator was resting at.
    pub resting_floor: i32,
    /// When the resting condition was observed.
    pub resting_time: DateTime<Utc>,
    /// Floor the demand originated from.
    pub demand_floor: i32,
    /// When the demand was recorded.
    pub demand_time: DateTime<Utc>,
}

impl AssociationRecord {
    /// Pair a resting snapshot with the demand it preceded.
    pub const fn pair(state: &StateSnapshot, demand: &DemandEvent) -> Self {
        Self {
            resting_floor: state.floor,
            resting_time: state.timestamp,
            demand_floor: demand.floor,
            demand_time: demand.timestamp,
        }
    }
}

/// One entry of the unified event stream: a resting snapshot or a demand,
/// tagged with its kind and ordered by time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedEvent {
    /// `true` for a resting state snapshot, `false` for a demand.
    pub is_resting: bool,
    /// The floor the entry refers to.
    pub floor: i32,
    /// When the entry was recorded.
    pub time: DateTime<Utc>,
}

impl TaggedEvent {
    /// Build the stream entry for a resting snapshot.
    pub const fn resting(state: &StateSnapshot) -> Self {
        Self {
            is_resting: true,
            floor: state.floor,
            time: state.timestamp,
        }
    }

    /// Build the stream entry for a demand.
    pub const fn demand(event: &DemandEvent) -> Self {
        Self {
            is_resting: false,
            floor: event.floor,
            time: event.timestamp,
        }
    }
}
