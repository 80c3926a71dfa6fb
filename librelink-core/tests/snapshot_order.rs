mod common;

use common::record;
use librelink_core::{LibreError, PatientId, PollSnapshot};
use proptest::prelude::*;

#[test]
fn patients_are_sorted_by_id() {
    let snap = PollSnapshot::new(vec![record("3", 100, 3), record("1", 100, 3), record("2", 100, 3)]);
    let ids: Vec<&str> = snap.ids().collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn integer_ids_sort_numerically() {
    let snap = PollSnapshot::new(vec![record("9", 100, 3), record("10", 100, 3), record("x", 100, 3)]);
    let ids: Vec<&str> = snap.ids().collect();
    assert_eq!(ids, ["9", "10", "x"]);
    assert!(snap.get("10").is_some());
    assert!(snap.get("x").is_some());
}

#[test]
fn lookup_by_id_ignores_position() {
    let snap = PollSnapshot::new(vec![record("b", 120, 3), record("a", 90, 2)]);
    assert_eq!(snap.get("b").map(|p| p.glucose_measurement.value_in_mg_per_dl), Some(120));
    assert!(snap.get("zzz").is_none());
    assert!(matches!(snap.require("zzz"), Err(LibreError::NotFound { .. })));
}

#[test]
fn empty_snapshot() {
    let snap = PollSnapshot::default();
    assert!(snap.is_empty());
    assert_eq!(snap.len(), 0);
    assert!(snap.get("1").is_none());
}

proptest! {
    #[test]
    fn same_patient_set_yields_same_order(
        ids in proptest::collection::hash_set("[a-z0-9]{1,8}", 0..20),
        seed in any::<u64>(),
    ) {
        let forward: Vec<_> = ids.iter().map(|id| record(id, 100, 3)).collect();
        let mut shuffled = forward.clone();
        // deterministic rotation stands in for an arbitrary vendor order
        if !shuffled.is_empty() {
            let k = usize::try_from(seed % shuffled.len() as u64).unwrap_or(0);
            shuffled.rotate_left(k);
            shuffled.reverse();
        }

        let a = PollSnapshot::new(forward);
        let b = PollSnapshot::new(shuffled);
        prop_assert_eq!(a.ids().collect::<Vec<_>>(), b.ids().collect::<Vec<_>>());

        let ids_sorted: Vec<PatientId> = a.ids().map(PatientId::from).collect();
        prop_assert!(ids_sorted.windows(2).all(|w| w[0] <= w[1]));
        for id in &ids {
            prop_assert!(a.get(id).is_some());
        }
    }
}
