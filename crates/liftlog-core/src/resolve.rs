//! Pairing of each demand with the elevator's prior resting condition.
//!
//! For every demand the resolver selects the most recent resting snapshot
//! recorded at or before the demand. Demands raised before the first
//! resting snapshot have no pairing and are omitted from the output.
//!
//! The naive formulation scans the full snapshot set per demand. Because
//! both streams are processed in time order, the resolver instead sorts
//! once and sweeps both sequences with a single cursor, which keeps the
//! most-recent-at-or-before selection exact at `O((n + m) log (n + m))`.

use liftlog_types::{AssociationRecord, DemandEvent, StateSnapshot};

/// Pair each demand with the most recent prior resting snapshot.
///
/// Demands are emitted in ascending demand-time order regardless of input
/// order. A snapshot qualifies when it is resting and its timestamp is at
/// or before the demand's (`<=`, so a snapshot recorded at exactly the
/// demand instant counts). Demands with no qualifying snapshot contribute
/// no record; the omitted count is logged at debug level.
///
/// Pure function: no side effects beyond the log line, safe to call
/// concurrently.
pub fn resolve(states: &[StateSnapshot], demands: &[DemandEvent]) -> Vec<AssociationRecord> {
    let mut resting: Vec<&StateSnapshot> =
        states.iter().filter(|state| state.is_resting()).collect();
    resting.sort_by_key(|state| state.timestamp);

    let mut ordered: Vec<&DemandEvent> = demands.iter().collect();
    ordered.sort_by_key(|demand| demand.timestamp);

    let mut records = Vec::with_capacity(ordered.len());
    let mut unmatched = 0_usize;
    let mut cursor = 0_usize;
    let mut latest: Option<&StateSnapshot> = None;

    for demand in ordered {
        // Advance past every resting snapshot at or before this demand.
        // Demands are ascending, so the cursor never moves backwards.
        while let Some(state) = resting.get(cursor).copied() {
            if state.timestamp > demand.timestamp {
                break;
            }
            latest = Some(state);
            cursor = cursor.saturating_add(1);
        }

        match latest {
            Some(state) => records.push(AssociationRecord::pair(state, demand)),
            None => unmatched = unmatched.saturating_add(1),
        }
    }

    if unmatched > 0 {
        tracing::debug!(unmatched, "demands without a prior resting snapshot were omitted");
    }

    records
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{DateTime, Utc};
    use liftlog_types::{DemandId, StateId};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn state(floor: i32, secs: i64, vacant: bool, moving: bool) -> StateSnapshot {
        StateSnapshot {
            id: StateId::new(),
            floor,
            timestamp: at(secs),
            vacant,
            moving,
        }
    }

    fn demand(floor: i32, secs: i64) -> DemandEvent {
        DemandEvent {
            id: DemandId::new(),
            floor,
            timestamp: at(secs),
        }
    }

    /// Reference implementation: per-demand scan over the full state set,
    /// as the store-level query would express it.
    fn naive(states: &[StateSnapshot], demands: &[DemandEvent]) -> Vec<AssociationRecord> {
        let mut ordered: Vec<&DemandEvent> = demands.iter().collect();
        ordered.sort_by_key(|d| d.timestamp);
        ordered
            .into_iter()
            .filter_map(|d| {
                states
                    .iter()
                    .filter(|s| s.is_resting() && s.timestamp <= d.timestamp)
                    .max_by_key(|s| s.timestamp)
                    .map(|s| AssociationRecord::pair(s, d))
            })
            .collect()
    }

    #[test]
    fn picks_the_most_recent_qualifying_snapshot() {
        let states = vec![state(1, 100, true, false), state(6, 200, true, false)];
        let demands = vec![demand(3, 250)];

        let records = resolve(&states, &demands);
        assert_eq!(records.len(), 1);
        let record = records.first().unwrap();
        assert_eq!(record.resting_floor, 6);
        assert_eq!(record.resting_time, at(200));
    }

    #[test]
    fn never_selects_a_future_snapshot() {
        let states = vec![state(1, 100, true, false), state(9, 300, true, false)];
        let demands = vec![demand(3, 250)];

        let records = resolve(&states, &demands);
        assert_eq!(records.first().unwrap().resting_floor, 1);
    }

    #[test]
    fn demand_with_no_prior_resting_snapshot_is_omitted() {
        let states = vec![state(5, 500, true, false)];
        let demands = vec![demand(3, 100)];

        assert!(resolve(&states, &demands).is_empty());
    }

    #[test]
    fn snapshot_at_the_demand_instant_qualifies() {
        let states = vec![state(2, 250, true, false)];
        let demands = vec![demand(3, 250)];

        let records = resolve(&states, &demands);
        assert_eq!(records.first().unwrap().resting_time, at(250));
    }

    #[test]
    fn occupied_or_moving_snapshots_never_qualify() {
        let states = vec![
            state(1, 100, true, false),
            state(4, 150, false, false),
            state(5, 180, true, true),
            state(6, 200, false, true),
        ];
        let demands = vec![demand(3, 250)];

        // Only the resting snapshot at t=100 qualifies, despite three
        // later snapshots.
        let records = resolve(&states, &demands);
        assert_eq!(records.first().unwrap().resting_floor, 1);
    }

    #[test]
    fn output_follows_ascending_demand_time_regardless_of_input_order() {
        let states = vec![state(1, 0, true, false)];
        let demands = vec![demand(7, 300), demand(4, 100), demand(5, 200)];

        let records = resolve(&states, &demands);
        let demand_floors: Vec<i32> = records.iter().map(|r| r.demand_floor).collect();
        assert_eq!(demand_floors, vec![4, 5, 7]);
    }

    #[test]
    fn one_resting_snapshot_can_serve_many_demands() {
        let states = vec![state(2, 50, true, false)];
        let demands = vec![demand(3, 100), demand(8, 200)];

        let records = resolve(&states, &demands);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.resting_floor == 2));
    }

    #[test]
    fn resting_then_moving_then_demand() {
        // Resting at floor 2, ten minutes before the demand; moving at
        // floor 5 two minutes before. The moving snapshot is excluded.
        let states = vec![state(2, 400, true, false), state(5, 880, false, true)];
        let demands = vec![demand(4, 1000)];

        let records = resolve(&states, &demands);
        assert_eq!(records.len(), 1);
        let record = records.first().unwrap();
        assert_eq!(record.resting_floor, 2);
        assert_eq!(record.resting_time, at(400));
        assert_eq!(record.demand_floor, 4);
        assert_eq!(record.demand_time, at(1000));
    }

    #[test]
    fn empty_inputs_produce_empty_output() {
        assert!(resolve(&[], &[]).is_empty());
        assert!(resolve(&[], &[demand(1, 10)]).is_empty());
        assert!(resolve(&[state(1, 10, true, false)], &[]).is_empty());
    }

    #[test]
    fn sweep_matches_the_per_demand_scan() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            // A narrow timestamp range forces plenty of collisions.
            let states: Vec<StateSnapshot> = (0..100)
                .map(|_| {
                    state(
                        rng.random_range(0..=10),
                        rng.random_range(0..50),
                        rng.random_bool(0.5),
                        rng.random_bool(0.5),
                    )
                })
                .collect();
            let demands: Vec<DemandEvent> = (0..40)
                .map(|_| demand(rng.random_range(0..=10), rng.random_range(0..50)))
                .collect();

            assert_eq!(resolve(&states, &demands), naive(&states, &demands));
        }
    }
}
