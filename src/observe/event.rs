//! The change-event type dispatched to observers.

/// A description of one structural modification to an
/// [`ObservableHashSet`](crate::ObservableHashSet).
///
/// Events borrow the affected elements from the container's internal
/// scratch buffer (or from the single affected element) and are consumed
/// synchronously by every observer during dispatch; they never outlive a
/// single dispatch call. Observers that need the elements beyond the
/// callback must clone them.
///
/// Because a hash set has no linear ordering, events carry no positional
/// information: the item slice is the whole payload, in an unspecified
/// order.
///
/// # Variants
///
/// - [`Added`](Self::Added): the elements that were actually inserted by an
///   `insert`/`insert_all` call. A batch call fires even when nothing was
///   inserted, so the slice may be empty.
/// - [`Removed`](Self::Removed): the canonical stored instances that were
///   actually removed by a `remove`/`remove_all` call. May likewise be
///   empty for a batch call.
/// - [`Reset`](Self::Reset): the set was cleared. Fired by every `clear`
///   call, including on an already-empty set.
///
/// # Examples
///
/// ```rust
/// use observable_set::{ObservableHashSet, SetChange};
/// use std::sync::Arc;
/// use std::sync::Mutex;
///
/// let set: ObservableHashSet<i32> = ObservableHashSet::new();
/// let log = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&log);
/// set.subscribe(move |change| {
///     let entry = match change {
///         SetChange::Added(items) => format!("+{}", items.len()),
///         SetChange::Removed(items) => format!("-{}", items.len()),
///         SetChange::Reset => "reset".to_string(),
///     };
///     sink.lock().unwrap().push(entry);
/// });
///
/// set.insert(1);
/// set.remove(&1);
/// set.clear();
///
/// assert_eq!(*log.lock().unwrap(), vec!["+1", "-1", "reset"]);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub enum SetChange<'a, T> {
    /// Elements that were inserted into the set.
    Added(&'a [T]),
    /// Elements that were removed from the set.
    Removed(&'a [T]),
    /// The set was emptied in one operation.
    Reset,
}

// Manual impls: the derives would bound `T: Clone`/`T: Copy`, but the event
// only holds shared references and is copyable for any element type.
impl<T> Clone for SetChange<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SetChange<'_, T> {}

impl<'a, T> SetChange<'a, T> {
    /// Returns the elements affected by this change.
    ///
    /// For [`Reset`](Self::Reset) the affected elements are not enumerated;
    /// an empty slice is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::SetChange;
    ///
    /// let change = SetChange::Added(&[1, 2]);
    /// assert_eq!(change.items(), &[1, 2]);
    ///
    /// let reset: SetChange<'_, i32> = SetChange::Reset;
    /// assert!(reset.items().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn items(&self) -> &'a [T] {
        match *self {
            Self::Added(items) | Self::Removed(items) => items,
            Self::Reset => &[],
        }
    }

    /// Returns `true` if this change is a full reset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use observable_set::SetChange;
    ///
    /// assert!(SetChange::<i32>::Reset.is_reset());
    /// assert!(!SetChange::Added(&[1]).is_reset());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_reset(&self) -> bool {
        matches!(self, Self::Reset)
    }
}
