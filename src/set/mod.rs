//! Thread-safe observable hash set.
//!
//! This module provides [`ObservableHashSet`], a mutable unique-element
//! container guarded by a single exclusive lock that dispatches a
//! [`SetChange`] notification to registered observers whenever its
//! membership actually changes.
//!
//! # Overview
//!
//! Every public operation — mutating or read-only — acquires the container's
//! mutex before touching the store and releases it on every exit path.
//! There is no reader/writer distinction: pure queries take the same
//! exclusive lock, which keeps batched mutation plus notification atomic
//! relative to any concurrent query.
//!
//! - Effective single-element mutations dispatch one event carrying the one
//!   affected element.
//! - Batch mutations ([`insert_all`](ObservableHashSet::insert_all),
//!   [`remove_all`](ObservableHashSet::remove_all)) traverse their input
//!   once under one lock acquisition, collect the elements whose membership
//!   actually changed into a scope-bound scratch buffer, and dispatch
//!   exactly one event — unconditionally, even when nothing changed.
//! - [`clear`](ObservableHashSet::clear) always dispatches
//!   [`SetChange::Reset`], even on an already-empty set.
//!
//! # Locking contract
//!
//! The mutex is **not reentrant**. Calling back into the same container from
//! inside an observer, or from the thread that holds a live [`Iter`],
//! deadlocks. Observers run inside the critical section and block all
//! concurrent access for their duration, so they should be short and must
//! not call the container.
//!
//! # Examples
//!
//! ```rust
//! use observable_set::{ObservableHashSet, SetChange};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let set: ObservableHashSet<&str> = ObservableHashSet::new();
//!
//! let removed = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&removed);
//! set.subscribe(move |change| {
//!     if let SetChange::Removed(items) = change {
//!         counter.fetch_add(items.len(), Ordering::SeqCst);
//!     }
//! });
//!
//! set.insert_all(["a", "b", "c"]);
//! set.remove_all(["a", "z"]); // only "a" is present
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(removed.load(Ordering::SeqCst), 1);
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use parking_lot::{Mutex, MutexGuard};
use smallvec::SmallVec;

use crate::observe::{BoxedObserver, ObserverRegistry, SetChange, SubscriptionId};

// =============================================================================
// Scratch buffer
// =============================================================================

/// Inline capacity of the batch scratch buffer, and the capacity hint used
/// when the input sequence's length is unknown.
const SCRATCH_INLINE_CAPACITY: usize = 4;

/// The transient buffer that collects effective changes during a batch call.
///
/// Scope-bound to one `insert_all`/`remove_all` invocation; only a `&[T]`
/// view of it is handed to observers, inside the same critical section.
type Scratch<T> = SmallVec<[T; SCRATCH_INLINE_CAPACITY]>;

fn scratch<T>(size_hint: usize) -> Scratch<T> {
    Scratch::with_capacity(size_hint.max(SCRATCH_INLINE_CAPACITY))
}

// =============================================================================
// Guarded state
// =============================================================================

/// Everything behind the container's mutex: the element store and the
/// observer registry, so one lock acquisition serializes store mutation,
/// registry mutation, and dispatch.
struct Inner<T, S> {
    items: HashSet<T, S>,
    observers: ObserverRegistry<T>,
}

impl<T, S> Inner<T, S> {
    fn notify(&mut self, change: SetChange<'_, T>) {
        self.observers.notify(change);
    }
}

/// Outcome of relating the store to an arbitrary input sequence.
///
/// Computed in a single traversal of the input: `matched` counts the
/// *distinct* elements of the input that are present in the store,
/// `unmatched` records whether the input contained any element absent from
/// the store, and `len` is the store's size at the time of the call.
struct Relation {
    matched: usize,
    unmatched: bool,
    len: usize,
}

// =============================================================================
// ObservableHashSet
// =============================================================================

/// A thread-safe hash set that notifies observers of membership changes.
///
/// All methods take `&self`; share the container between threads with
/// `Arc`. Iteration order is unspecified and may differ from insertion
/// order.
///
/// # Time Complexity
///
/// | Operation       | Complexity                              |
/// |-----------------|-----------------------------------------|
/// | `insert`        | O(1) amortized + dispatch               |
/// | `remove`        | O(1) amortized + dispatch               |
/// | `contains`      | O(1) amortized                          |
/// | `len`           | O(1)                                    |
/// | `clear`         | O(n) + dispatch                         |
/// | `insert_all`    | O(m) + one dispatch                     |
/// | `remove_all`    | O(m) + one dispatch                     |
/// | set relations   | O(m) probes of the store                |
/// | `iter`          | O(n) snapshot, lock held until dropped  |
///
/// where n is the set's size and m the input sequence's length. "Dispatch"
/// runs every registered observer synchronously.
///
/// # Examples
///
/// ```rust
/// use observable_set::ObservableHashSet;
///
/// let set = ObservableHashSet::from([1, 2, 3]);
/// assert!(set.contains(&2));
/// assert!(set.is_subset_of([1, 2, 3, 4]));
/// assert!(!set.is_read_only());
/// ```
pub struct ObservableHashSet<T, S = RandomState> {
    inner: Mutex<Inner<T, S>>,
}

impl<T> ObservableHashSet<T, RandomState> {
    /// Creates an empty set with no observers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set: ObservableHashSet<i32> = ObservableHashSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: HashSet::new(),
                observers: ObserverRegistry::new(),
            }),
        }
    }

    /// Creates an empty set with at least the given capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set: ObservableHashSet<i32> = ObservableHashSet::with_capacity(64);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: HashSet::with_capacity(capacity),
                observers: ObserverRegistry::new(),
            }),
        }
    }
}

impl<T, S> ObservableHashSet<T, S> {
    /// Creates an empty set using the given hasher.
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: HashSet::with_hasher(hash_builder),
                observers: ObserverRegistry::new(),
            }),
        }
    }

    /// Creates an empty set with at least the given capacity, using the
    /// given hasher.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: HashSet::with_capacity_and_hasher(capacity, hash_builder),
                observers: ObserverRegistry::new(),
            }),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// Acquires the lock, so the value is consistent with any concurrent
    /// mutation-plus-notification sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().items.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set: ObservableHashSet<i32> = ObservableHashSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().items.is_empty()
    }

    /// Always returns `false`.
    ///
    /// Present for parity with collection contracts that expose a read-only
    /// flag; this container is always mutable.
    #[inline]
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        false
    }

    /// Removes all elements and dispatches [`SetChange::Reset`].
    ///
    /// The reset event fires unconditionally, even when the set was already
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.items.clear();
        inner.notify(SetChange::Reset);
    }

    /// Registers a change observer and returns its subscription token.
    ///
    /// Observers run synchronously on the mutating thread, inside the
    /// container's critical section and in registration order. They must not
    /// call back into this container (the lock is not reentrant) and should
    /// not perform long-running work. A panic in an observer propagates to
    /// the caller of the triggering mutation; the mutation itself has
    /// already been applied and the container stays usable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let set: ObservableHashSet<i32> = ObservableHashSet::new();
    /// let events = Arc::new(AtomicUsize::new(0));
    ///
    /// let counter = Arc::clone(&events);
    /// set.subscribe(move |_| {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    /// });
    ///
    /// set.insert(1);
    /// set.insert(1); // no-op, no event
    /// assert_eq!(events.load(Ordering::SeqCst), 1);
    /// ```
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: FnMut(SetChange<'_, T>) + Send + 'static,
    {
        self.inner
            .lock()
            .observers
            .subscribe(Box::new(observer) as BoxedObserver<T>)
    }

    /// Removes the observer registered under `id`.
    ///
    /// Returns `false` if the token is unknown or already unsubscribed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set: ObservableHashSet<i32> = ObservableHashSet::new();
    /// let id = set.subscribe(|_| {});
    /// assert!(set.unsubscribe(id));
    /// assert!(!set.unsubscribe(id));
    /// ```
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.lock().observers.unsubscribe(id)
    }
}

impl<T, S> ObservableHashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Returns `true` if the set contains the given element.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// `Hash` and `Eq` on the borrowed form must match those for the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from(["hello".to_string()]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().items.contains(element)
    }

    /// Returns a clone of the canonical stored instance equal to `element`,
    /// if present.
    ///
    /// Useful when equality is coarser than identity (e.g. interning, or
    /// types whose `Eq` ignores some fields): the returned value is the
    /// instance the set actually stores, not the probe. Takes the lock like
    /// every other query.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([String::from("canonical")]);
    /// assert_eq!(set.try_get("canonical"), Some(String::from("canonical")));
    /// assert_eq!(set.try_get("missing"), None);
    /// ```
    #[must_use]
    pub fn try_get<Q>(&self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().items.get(element).cloned()
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` and dispatches [`SetChange::Added`] carrying the one
    /// element if it was not already present. Returns `false` without
    /// dispatching anything if it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set: ObservableHashSet<i32> = ObservableHashSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&self, element: T) -> bool {
        let mut inner = self.inner.lock();
        if !inner.items.insert(element.clone()) {
            return false;
        }
        inner.notify(SetChange::Added(std::slice::from_ref(&element)));
        true
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` and dispatches [`SetChange::Removed`] carrying the
    /// canonical stored instance if it was present. Returns `false` without
    /// dispatching anything if it was not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1, 2]);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut inner = self.inner.lock();
        let Some(removed) = inner.items.take(element) else {
            return false;
        };
        inner.notify(SetChange::Removed(std::slice::from_ref(&removed)));
        true
    }

    /// Inserts every element of a sequence, dispatching exactly one
    /// [`SetChange::Added`] event for the whole call.
    ///
    /// The input is traversed once inside a single lock acquisition, so the
    /// batch is atomic with respect to observers and concurrent callers: no
    /// partial-batch state is ever visible. The event carries only the
    /// elements that were actually inserted (duplicates within the input
    /// collapse, already-present elements are skipped) and fires even when
    /// that collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::{ObservableHashSet, SetChange};
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let set: ObservableHashSet<i32> = ObservableHashSet::new();
    /// set.insert(2);
    ///
    /// let added = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&added);
    /// set.subscribe(move |change| {
    ///     if let SetChange::Added(items) = change {
    ///         counter.fetch_add(items.len(), Ordering::SeqCst);
    ///     }
    /// });
    ///
    /// set.insert_all([1, 2, 3, 1]);
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(added.load(Ordering::SeqCst), 2); // only 1 and 3 were new
    /// ```
    pub fn insert_all<I>(&self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter();
        let mut inner = self.inner.lock();
        let mut changed = scratch::<T>(elements.size_hint().0);
        for element in elements {
            if inner.items.insert(element.clone()) {
                changed.push(element);
            }
        }
        inner.notify(SetChange::Added(&changed));
    }

    /// Removes every element of a sequence, dispatching exactly one
    /// [`SetChange::Removed`] event for the whole call.
    ///
    /// Mirrors [`insert_all`](Self::insert_all): one traversal of the input
    /// under one lock acquisition, an event carrying the canonical stored
    /// instances that were actually removed, fired unconditionally even when
    /// nothing was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1, 2, 3]);
    /// set.remove_all([2, 3, 4]);
    /// assert_eq!(set.to_vec(), vec![1]);
    /// ```
    pub fn remove_all<I>(&self, elements: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let elements = elements.into_iter();
        let mut inner = self.inner.lock();
        let mut changed = scratch::<T>(elements.size_hint().0);
        for element in elements {
            if let Some(removed) = inner.items.take(element.borrow()) {
                changed.push(removed);
            }
        }
        inner.notify(SetChange::Removed(&changed));
    }

    // =========================================================================
    // Set-algebra queries
    // =========================================================================

    /// Relates the store to `other` in one traversal of `other`.
    fn relate<I>(&self, other: I) -> Relation
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let inner = self.inner.lock();
        let mut matched: HashSet<&T> = HashSet::new();
        let mut unmatched = false;
        for element in other {
            match inner.items.get(element.borrow()) {
                Some(canonical) => {
                    matched.insert(canonical);
                }
                None => unmatched = true,
            }
        }
        Relation {
            matched: matched.len(),
            unmatched,
            len: inner.items.len(),
        }
    }

    /// Returns `true` if every element of the set is contained in `other`.
    ///
    /// Duplicates in `other` are ignored; the empty set is a subset of
    /// everything. Never mutates and never notifies.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1, 2]);
    /// assert!(set.is_subset_of([1, 2, 3]));
    /// assert!(set.is_subset_of([2, 1]));
    /// assert!(!set.is_subset_of([1, 3]));
    /// ```
    #[must_use]
    pub fn is_subset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let relation = self.relate(other);
        relation.matched == relation.len
    }

    /// Returns `true` if the set is a subset of `other` and `other`
    /// contains at least one element not in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1, 2]);
    /// assert!(set.is_proper_subset_of([1, 2, 3]));
    /// assert!(!set.is_proper_subset_of([1, 2]));
    /// ```
    #[must_use]
    pub fn is_proper_subset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let relation = self.relate(other);
        relation.matched == relation.len && relation.unmatched
    }

    /// Returns `true` if every element of `other` is contained in the set.
    ///
    /// Traverses `other` once with early exit; an empty `other` makes any
    /// set a superset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1, 2, 3]);
    /// assert!(set.is_superset_of([1, 3]));
    /// assert!(!set.is_superset_of([1, 4]));
    /// ```
    #[must_use]
    pub fn is_superset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let inner = self.inner.lock();
        other
            .into_iter()
            .all(|element| inner.items.contains(element.borrow()))
    }

    /// Returns `true` if the set is a superset of `other` and contains at
    /// least one element not in `other`.
    ///
    /// Duplicates in `other` are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1, 2, 3]);
    /// assert!(set.is_proper_superset_of([1, 2]));
    /// assert!(!set.is_proper_superset_of([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn is_proper_superset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let relation = self.relate(other);
        !relation.unmatched && relation.matched < relation.len
    }

    /// Returns `true` if the set and `other` share at least one element.
    ///
    /// Traverses `other` once with early exit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1, 2]);
    /// assert!(set.overlaps([2, 9]));
    /// assert!(!set.overlaps([3, 4]));
    /// ```
    #[must_use]
    pub fn overlaps<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let inner = self.inner.lock();
        if inner.items.is_empty() {
            return false;
        }
        other
            .into_iter()
            .any(|element| inner.items.contains(element.borrow()))
    }

    /// Returns `true` if the set and `other` contain exactly the same
    /// distinct elements.
    ///
    /// Duplicates in `other` are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1, 2]);
    /// assert!(set.set_equals([2, 1, 1]));
    /// assert!(!set.set_equals([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn set_equals<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let relation = self.relate(other);
        !relation.unmatched && relation.matched == relation.len
    }
}

impl<T: Clone, S> ObservableHashSet<T, S> {
    /// Returns a snapshot-stable iterator over clones of the current
    /// elements, in unspecified order.
    ///
    /// The iterator acquires the container's lock at creation and holds it
    /// until dropped, so the traversal can never observe a concurrent
    /// mutation — at the cost of blocking **every** other operation on the
    /// container, mutations and queries alike, for the iterator's entire
    /// lifetime. Consume or drop it promptly; calling any method of the
    /// same container from the holding thread deadlocks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1, 2, 3]);
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, S> {
        let guard = self.inner.lock();
        let snapshot: Vec<T> = guard.items.iter().cloned().collect();
        Iter {
            snapshot: snapshot.into_iter(),
            _guard: guard,
        }
    }

    /// Returns a vector of clones of the current elements, in unspecified
    /// order.
    ///
    /// Unlike [`iter`](Self::iter), the lock is released before this method
    /// returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::ObservableHashSet;
    ///
    /// let set = ObservableHashSet::from([1]);
    /// assert_eq!(set.to_vec(), vec![1]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.lock().items.iter().cloned().collect()
    }
}

// =============================================================================
// Synchronized iterator
// =============================================================================

/// A snapshot-stable iterator over an [`ObservableHashSet`].
///
/// Holds the container's lock from creation until dropped; see
/// [`ObservableHashSet::iter`] for the blocking contract. Yields clones of
/// the elements.
pub struct Iter<'a, T, S = RandomState> {
    snapshot: std::vec::IntoIter<T>,
    _guard: MutexGuard<'a, Inner<T, S>>,
}

impl<T, S> Iterator for Iter<'_, T, S> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.snapshot.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.snapshot.size_hint()
    }
}

impl<T, S> ExactSizeIterator for Iter<'_, T, S> {
    #[inline]
    fn len(&self) -> usize {
        self.snapshot.len()
    }
}

impl<T, S> std::iter::FusedIterator for Iter<'_, T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Iter<'_, T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Iter")
            .field("remaining", &self.snapshot.len())
            .finish()
    }
}

impl<'a, T: Clone, S> IntoIterator for &'a ObservableHashSet<T, S> {
    type Item = T;
    type IntoIter = Iter<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<T, S: Default> Default for ObservableHashSet<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> fmt::Debug for ObservableHashSet<T, S>
where
    T: fmt::Debug,
{
    /// Acquires the lock; do not call from an observer or while holding an
    /// [`Iter`] on the same thread.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        formatter
            .debug_struct("ObservableHashSet")
            .field("items", &inner.items)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

impl<T, S> Clone for ObservableHashSet<T, S>
where
    T: Clone,
    S: Clone,
{
    /// Clones the membership only; observers are not carried over. The
    /// clone starts with an empty registry.
    fn clone(&self) -> Self {
        let inner = self.inner.lock();
        Self {
            inner: Mutex::new(Inner {
                items: inner.items.clone(),
                observers: ObserverRegistry::new(),
            }),
        }
    }
}

impl<T, S> FromIterator<T> for ObservableHashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    /// Builds a set from a sequence, collapsing duplicates per equality.
    /// No events fire during construction; there is nothing subscribed yet.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: iter.into_iter().collect(),
                observers: ObserverRegistry::new(),
            }),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for ObservableHashSet<T, RandomState>
where
    T: Eq + Hash,
{
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, S> Extend<T> for ObservableHashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Delegates to [`insert_all`](ObservableHashSet::insert_all): one
    /// batched [`SetChange::Added`] event per `extend` call.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

// =============================================================================
// Hasher aliases
// =============================================================================

/// An [`ObservableHashSet`] using the `rustc-hash` Fx hasher.
#[cfg(feature = "fxhash")]
pub type FxObservableHashSet<T> = ObservableHashSet<T, rustc_hash::FxBuildHasher>;

/// An [`ObservableHashSet`] using the `ahash` hasher.
#[cfg(feature = "ahash")]
pub type AHashObservableHashSet<T> = ObservableHashSet<T, ahash::RandomState>;

// The container is shared between threads by design.
static_assertions::assert_impl_all!(ObservableHashSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(ObservableHashSet<String>: Send, Sync);
