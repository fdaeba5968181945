//! Property-based tests for `ObservableHashSet`.
//!
//! Checks the set-algebra laws against `std::collections::HashSet` as the
//! reference model, and the batching invariants of the notification model.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use observable_set::{ObservableHashSet, SetChange};
use proptest::prelude::*;

fn elements() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(0i32..32, 0..24)
}

proptest! {
    #[test]
    fn membership_matches_reference_model(input in elements()) {
        let set: ObservableHashSet<i32> = input.iter().copied().collect();
        let model: HashSet<i32> = input.iter().copied().collect();

        prop_assert_eq!(set.len(), model.len());
        for element in 0..32 {
            prop_assert_eq!(set.contains(&element), model.contains(&element));
        }
    }

    #[test]
    fn subset_superset_duality(a in elements(), b in elements()) {
        let set_a: ObservableHashSet<i32> = a.iter().copied().collect();
        let set_b: ObservableHashSet<i32> = b.iter().copied().collect();

        prop_assert_eq!(set_a.is_subset_of(b.iter()), set_b.is_superset_of(a.iter()));
        prop_assert_eq!(
            set_a.is_proper_subset_of(b.iter()),
            set_b.is_proper_superset_of(a.iter())
        );
    }

    #[test]
    fn set_equals_is_mutual_subset(a in elements(), b in elements()) {
        let set_a: ObservableHashSet<i32> = a.iter().copied().collect();
        let set_b: ObservableHashSet<i32> = b.iter().copied().collect();

        prop_assert_eq!(
            set_a.set_equals(b.iter()),
            set_a.is_subset_of(b.iter()) && set_b.is_subset_of(a.iter())
        );
    }

    #[test]
    fn proper_subset_is_subset_but_not_equal(a in elements(), b in elements()) {
        let set_a: ObservableHashSet<i32> = a.iter().copied().collect();

        prop_assert_eq!(
            set_a.is_proper_subset_of(b.iter()),
            set_a.is_subset_of(b.iter()) && !set_a.set_equals(b.iter())
        );
    }

    #[test]
    fn overlaps_matches_nonempty_intersection(a in elements(), b in elements()) {
        let set_a: ObservableHashSet<i32> = a.iter().copied().collect();
        let model_a: HashSet<i32> = a.iter().copied().collect();
        let model_b: HashSet<i32> = b.iter().copied().collect();

        prop_assert_eq!(
            set_a.overlaps(b.iter()),
            model_a.intersection(&model_b).next().is_some()
        );
    }

    #[test]
    fn insert_then_remove_is_identity_on_membership(seed in elements(), x in 0i32..32) {
        let set: ObservableHashSet<i32> = seed.iter().copied().collect();
        let was_present = set.contains(&x);
        let len_before = set.len();

        let inserted = set.insert(x);
        prop_assert_eq!(inserted, !was_present);
        if inserted {
            prop_assert!(set.remove(&x));
        }

        prop_assert_eq!(set.contains(&x), was_present);
        prop_assert_eq!(set.len(), len_before);
    }

    #[test]
    fn batch_insert_event_carries_exactly_the_new_elements(
        seed in elements(),
        input in elements(),
    ) {
        let set: ObservableHashSet<i32> = seed.iter().copied().collect();
        let before: HashSet<i32> = seed.iter().copied().collect();

        let added = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&added);
        set.subscribe(move |change| {
            if let SetChange::Added(items) = change {
                sink.lock().unwrap().push(items.to_vec());
            }
        });

        set.insert_all(input.iter().copied());

        let events = added.lock().unwrap();
        // Exactly one event per batch call, no matter the input.
        prop_assert_eq!(events.len(), 1);

        let reported: HashSet<i32> = events[0].iter().copied().collect();
        let expected: HashSet<i32> = input
            .iter()
            .copied()
            .filter(|element| !before.contains(element))
            .collect();
        prop_assert_eq!(&reported, &expected);
        // No duplicates inside the event payload.
        prop_assert_eq!(events[0].len(), reported.len());
    }

    #[test]
    fn batch_remove_event_carries_exactly_the_removed_elements(
        seed in elements(),
        input in elements(),
    ) {
        let set: ObservableHashSet<i32> = seed.iter().copied().collect();
        let before: HashSet<i32> = seed.iter().copied().collect();

        let removed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&removed);
        set.subscribe(move |change| {
            if let SetChange::Removed(items) = change {
                sink.lock().unwrap().push(items.to_vec());
            }
        });

        set.remove_all(input.iter());

        let events = removed.lock().unwrap();
        prop_assert_eq!(events.len(), 1);

        let reported: HashSet<i32> = events[0].iter().copied().collect();
        let expected: HashSet<i32> = input
            .iter()
            .copied()
            .filter(|element| before.contains(element))
            .collect();
        prop_assert_eq!(&reported, &expected);
        prop_assert_eq!(events[0].len(), reported.len());

        let survivors: HashSet<i32> = set.to_vec().into_iter().collect();
        let expected_survivors: HashSet<i32> =
            before.difference(&expected).copied().collect();
        prop_assert_eq!(&survivors, &expected_survivors);
    }
}
