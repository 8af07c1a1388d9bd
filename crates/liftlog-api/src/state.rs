//! Shared application state for the telemetry API server.
//!
//! [`AppState`] holds the injected telemetry source and the building's
//! floor range used to validate appends. It is generic over the source so
//! the `PostgreSQL` store and the in-memory store are interchangeable --
//! the API tests run entirely against the latter.

/// Lowest floor accepted by default (basement levels are negative).
const DEFAULT_MIN_FLOOR: i32 = -2;

/// Highest floor accepted by default.
const DEFAULT_MAX_FLOOR: i32 = 60;

/// Inclusive range of floors a building serves.
///
/// Appends with a floor outside this range are rejected before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorRange {
    /// Lowest served floor (inclusive).
    pub min: i32,
    /// Highest served floor (inclusive).
    pub max: i32,
}

impl FloorRange {
    /// Whether `floor` falls within the served range.
    pub const fn contains(self, floor: i32) -> bool {
        floor >= self.min && floor <= self.max
    }
}

impl Default for FloorRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_FLOOR,
            max: DEFAULT_MAX_FLOOR,
        }
    }
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Debug)]
pub struct AppState<S> {
    /// The telemetry source backing all reads and writes.
    pub source: S,
    /// Floor range used to validate appended records.
    pub floors: FloorRange,
}

impl<S> AppState<S> {
    /// Create application state over a telemetry source.
    pub const fn new(source: S, floors: FloorRange) -> Self {
        Self { source, floors }
    }
}
