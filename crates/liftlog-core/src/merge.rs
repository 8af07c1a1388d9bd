//! Chronological merge of the two telemetry streams.
//!
//! Resting snapshots and demands are combined into one sequence ordered
//! ascending by time. Snapshots that are not resting (occupied or in
//! motion) carry no signal for the training dataset and are dropped here.

use liftlog_types::{DemandEvent, StateSnapshot, TaggedEvent};

/// Merge resting snapshots and demands into one time-ordered stream.
///
/// Snapshots are filtered to the resting condition (`vacant && !moving`);
/// every demand passes through. The result is sorted ascending by time.
/// At identical timestamps a resting entry sorts before a demand, and
/// entries of the same kind keep their input order (stable sort).
///
/// Pure function: no side effects, safe to call concurrently.
pub fn merge(states: &[StateSnapshot], demands: &[DemandEvent]) -> Vec<TaggedEvent> {
    let mut events: Vec<TaggedEvent> = states
        .iter()
        .filter(|state| state.is_resting())
        .map(TaggedEvent::resting)
        .collect();
    events.extend(demands.iter().map(TaggedEvent::demand));

    // Secondary key breaks timestamp ties: resting (false) before demand (true).
    events.sort_by_key(|event| (event.time, !event.is_resting));
    events
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

    #[test]
    fn output_is_non_decreasing_in_time() {
        let states = vec![
            state(5, 300, true, false),
            state(1, 100, true, false),
            state(3, 200, true, false),
        ];
        let demands = vec![demand(2, 250), demand(4, 50)];

        let merged = merge(&states, &demands);
        assert_eq!(merged.len(), 5);
        assert!(merged.windows(2).all(|w| match w {
            [a, b] => a.time <= b.time,
            _ => true,
        }));
    }

    #[test]
    fn only_resting_states_survive_filtering() {
        let mut rng = SmallRng::seed_from_u64(7);
        let states: Vec<StateSnapshot> = (0..200)
            .map(|i| state(rng.random_range(0..=10), i, rng.random_bool(0.5), rng.random_bool(0.5)))
            .collect();
        let resting_count = states.iter().filter(|s| s.is_resting()).count();

        let merged = merge(&states, &[]);
        assert_eq!(merged.len(), resting_count);
        assert!(merged.iter().all(|event| event.is_resting));
    }

    #[test]
    fn demands_always_pass_through() {
        let demands: Vec<DemandEvent> = (0..20).map(|i| demand(8, i64::from(i))).collect();
        let merged = merge(&[], &demands);
        assert_eq!(merged.len(), demands.len());
        assert!(merged.iter().all(|event| !event.is_resting));
    }

    #[test]
    fn resting_sorts_before_demand_at_equal_timestamp() {
        let states = vec![state(2, 100, true, false)];
        let demands = vec![demand(6, 100)];

        let merged = merge(&states, &demands);
        let kinds: Vec<bool> = merged.iter().map(|e| e.is_resting).collect();
        assert_eq!(kinds, vec![true, false]);
    }

    #[test]
    fn same_kind_keeps_input_order_at_equal_timestamp() {
        let demands = vec![demand(1, 100), demand(2, 100), demand(3, 100)];
        let merged = merge(&[], &demands);
        let floors: Vec<i32> = merged.iter().map(|e| e.floor).collect();
        assert_eq!(floors, vec![1, 2, 3]);
    }

    #[test]
    fn moving_state_is_absent_from_the_stream() {
        // Resting at floor 2 ten minutes before the demand; a moving state
        // two minutes before must not appear.
        let states = vec![state(2, 400, true, false), state(5, 880, false, true)];
        let demands = vec![demand(4, 1000)];

        let merged = merge(&states, &demands);
        assert_eq!(merged.len(), 2);

        let first = merged.first().unwrap();
        assert!(first.is_resting);
        assert_eq!(first.floor, 2);
        assert_eq!(first.time, at(400));

        let second = merged.get(1).unwrap();
        assert!(!second.is_resting);
        assert_eq!(second.floor, 4);
        assert_eq!(second.time, at(1000));
    }
}
