//! Observer registry: subscription tokens and synchronous dispatch.

use std::fmt;

use super::SetChange;

/// An opaque token identifying one registered observer.
///
/// Returned by
/// [`ObservableHashSet::subscribe`](crate::ObservableHashSet::subscribe) and
/// redeemed by
/// [`ObservableHashSet::unsubscribe`](crate::ObservableHashSet::unsubscribe).
/// Tokens are unique for the lifetime of the owning container and are never
/// reused, so a stale token simply fails to unsubscribe.
///
/// # Examples
///
/// ```rust
/// use observable_set::ObservableHashSet;
///
/// let set: ObservableHashSet<i32> = ObservableHashSet::new();
/// let id = set.subscribe(|_| {});
///
/// assert!(set.unsubscribe(id));
/// assert!(!set.unsubscribe(id)); // already gone
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A registered change observer.
///
/// Observers must be `Send` because they are owned by the container and the
/// container is shared between threads. They run synchronously on whichever
/// thread performed the mutation, inside the container's critical section.
pub(crate) type BoxedObserver<T> = Box<dyn FnMut(SetChange<'_, T>) + Send>;

/// The observer list owned by a container.
///
/// Lives behind the same mutex as the element store, so subscription
/// changes, dispatch, and set mutation are all serialized. Dispatch is in
/// registration order. Zero observers is the common case and needs no
/// special handling.
pub(crate) struct ObserverRegistry<T> {
    entries: Vec<(SubscriptionId, BoxedObserver<T>)>,
    next_id: u64,
}

impl<T> ObserverRegistry<T> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers an observer and returns its token.
    pub(crate) fn subscribe(&mut self, observer: BoxedObserver<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Removes the observer registered under `id`.
    ///
    /// Returns `false` if the token was never issued by this registry or was
    /// already unsubscribed. Registration order of the remaining observers
    /// is preserved.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Dispatches one change to every observer, in registration order.
    ///
    /// A panic in an observer propagates to the caller; observers registered
    /// after the panicking one do not run for this change.
    pub(crate) fn notify(&mut self, change: SetChange<'_, T>) {
        for (_, observer) in &mut self.entries {
            observer(change);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> fmt::Debug for ObserverRegistry<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ObserverRegistry")
            .field("observers", &self.entries.len())
            .finish()
    }
}
