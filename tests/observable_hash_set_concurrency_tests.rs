//! Concurrency tests for `ObservableHashSet`.
//!
//! Multi-threaded stress tests exercising the locking discipline: no lost
//! updates under concurrent mutation, notification atomicity, and the
//! blocking contract of the synchronized iterator.
//!
//! These use ordinary std threads with repeat loops, which gives good
//! coverage for the races the single-mutex design has to exclude.

use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use observable_set::{ObservableHashSet, SetChange};

const ELEMENTS_PER_THREAD: i32 = 1000;

/// Two threads inserting disjoint ranges never lose an update, and each
/// thread observes every one of its own inserts succeed.
#[test]
fn test_concurrent_disjoint_inserts_lose_nothing() {
    for _ in 0..20 {
        let set: Arc<ObservableHashSet<i32>> = Arc::new(ObservableHashSet::new());

        let handles: Vec<_> = [0, ELEMENTS_PER_THREAD]
            .into_iter()
            .map(|offset| {
                let set = Arc::clone(&set);
                thread::spawn(move || {
                    (offset..offset + ELEMENTS_PER_THREAD).all(|element| set.insert(element))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap(), "every insert must report success");
        }

        assert_eq!(set.len(), 2 * ELEMENTS_PER_THREAD as usize);
    }
}

/// A single observer sees every effective change exactly once, regardless of
/// which thread performed it.
#[test]
fn test_observer_counts_all_concurrent_inserts() {
    for _ in 0..10 {
        let set: Arc<ObservableHashSet<i32>> = Arc::new(ObservableHashSet::new());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        set.subscribe(move |change| {
            if let SetChange::Added(items) = change {
                sink.lock().unwrap().extend_from_slice(items);
            }
        });

        let handles: Vec<_> = [0, ELEMENTS_PER_THREAD, 2 * ELEMENTS_PER_THREAD]
            .into_iter()
            .map(|offset| {
                let set = Arc::clone(&set);
                thread::spawn(move || {
                    set.insert_all(offset..offset + ELEMENTS_PER_THREAD);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3 * ELEMENTS_PER_THREAD as usize);
        let distinct: HashSet<i32> = seen.iter().copied().collect();
        assert_eq!(distinct.len(), seen.len(), "no element reported twice");
    }
}

/// A mirror set maintained purely from dispatched events converges to the
/// container's final membership: events are serialized with their mutations.
#[test]
fn test_event_stream_replays_to_final_state() {
    for _ in 0..10 {
        let set: Arc<ObservableHashSet<i32>> = Arc::new(ObservableHashSet::new());
        set.insert_all(0..ELEMENTS_PER_THREAD);

        let mirror = Arc::new(Mutex::new(
            (0..ELEMENTS_PER_THREAD).collect::<HashSet<i32>>(),
        ));
        let sink = Arc::clone(&mirror);
        set.subscribe(move |change| {
            let mut mirror = sink.lock().unwrap();
            match change {
                SetChange::Added(items) => {
                    for element in items {
                        mirror.insert(*element);
                    }
                }
                SetChange::Removed(items) => {
                    for element in items {
                        mirror.remove(element);
                    }
                }
                SetChange::Reset => mirror.clear(),
            }
        });

        let adder = {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                for element in ELEMENTS_PER_THREAD..2 * ELEMENTS_PER_THREAD {
                    set.insert(element);
                }
            })
        };
        let remover = {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                for element in 0..ELEMENTS_PER_THREAD {
                    set.remove(&element);
                }
            })
        };

        adder.join().unwrap();
        remover.join().unwrap();

        let final_state: HashSet<i32> = set.to_vec().into_iter().collect();
        assert_eq!(*mirror.lock().unwrap(), final_state);
        assert_eq!(final_state.len(), ELEMENTS_PER_THREAD as usize);
    }
}

/// A held iterator keeps the lock, so a concurrent insert blocks until the
/// iterator is dropped, then proceeds and succeeds.
#[test]
fn test_iterator_blocks_concurrent_insert_until_dropped() {
    let set: Arc<ObservableHashSet<i32>> = Arc::new(ObservableHashSet::new());
    set.insert_all([1, 2, 3]);

    let iter = set.iter();

    let (done_tx, done_rx) = mpsc::channel();
    let writer = {
        let set = Arc::clone(&set);
        thread::spawn(move || {
            let inserted = set.insert(4);
            done_tx.send(()).unwrap();
            inserted
        })
    };

    // The writer must stay blocked on the lock while the iterator lives.
    assert_eq!(
        done_rx.recv_timeout(Duration::from_millis(200)),
        Err(mpsc::RecvTimeoutError::Timeout),
        "insert completed while the iterator held the lock"
    );

    let snapshot: Vec<i32> = iter.collect();
    assert_eq!(snapshot.len(), 3, "snapshot must not observe the blocked insert");

    // Consuming the iterator dropped it and released the lock.
    done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("insert must proceed once the iterator is dropped");
    assert!(writer.join().unwrap());
    assert!(set.contains(&4));
}

/// Subscribing and unsubscribing race cleanly with concurrent mutation: the
/// registry is guarded by the same lock as the store.
#[test]
fn test_subscription_races_with_mutation() {
    for _ in 0..10 {
        let set: Arc<ObservableHashSet<i32>> = Arc::new(ObservableHashSet::new());

        let mutator = {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                for element in 0..200 {
                    set.insert(element);
                    set.remove(&element);
                }
            })
        };
        let subscriber = {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                for _ in 0..200 {
                    let id = set.subscribe(|_| {});
                    assert!(set.unsubscribe(id));
                }
            })
        };

        mutator.join().unwrap();
        subscriber.join().unwrap();
        assert!(set.is_empty());
    }
}
