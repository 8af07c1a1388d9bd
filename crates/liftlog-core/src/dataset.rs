//! Dataset construction over a telemetry source.
//!
//! [`DatasetBuilder`] is the orchestration layer: it reads the full current
//! content of the injected [`TelemetrySource`] once per call and hands the
//! two streams to [`merge`](crate::merge::merge) or
//! [`resolve`](crate::resolve::resolve). Each call is all-or-nothing; a
//! store failure propagates and no partial sequence is returned.

use liftlog_types::{AssociationRecord, TaggedEvent};

use crate::merge::merge;
use crate::resolve::resolve;
use crate::source::TelemetrySource;

/// Builds the two dataset shapes from a telemetry source.
pub struct DatasetBuilder<'a, S> {
    source: &'a S,
}

impl<'a, S: TelemetrySource> DatasetBuilder<'a, S> {
    /// Create a builder bound to a telemetry source.
    pub const fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Build the paired dataset: one [`AssociationRecord`] per demand that
    /// has a qualifying prior resting snapshot, ascending by demand time.
    ///
    /// Reflects store content at call time; concurrent writes may or may
    /// not be visible.
    ///
    /// # Errors
    ///
    /// Propagates the source's error when either stream cannot be read.
    pub async fn paired_dataset(&self) -> Result<Vec<AssociationRecord>, S::Error> {
        let states = self.source.list_states().await?;
        let demands = self.source.list_demands().await?;
        Ok(resolve(&states, &demands))
    }

    /// Build the unified tagged event stream: resting snapshots and demands
    /// in one sequence, ascending by time.
    ///
    /// # Errors
    ///
    /// Propagates the source's error when either stream cannot be read.
    pub async fn tagged_event_stream(&self) -> Result<Vec<TaggedEvent>, S::Error> {
        let states = self.source.list_states().await?;
        let demands = self.source.list_demands().await?;
        Ok(merge(&states, &demands))
    }
}
