//! Change notification model.
//!
//! This module provides the types observers interact with:
//!
//! - [`SetChange`]: a borrowed description of one structural modification
//!   (additions, removals, or a full reset) dispatched synchronously to
//!   every registered observer.
//! - [`SubscriptionId`]: an opaque token returned by
//!   [`ObservableHashSet::subscribe`](crate::ObservableHashSet::subscribe)
//!   and accepted by
//!   [`ObservableHashSet::unsubscribe`](crate::ObservableHashSet::unsubscribe).
//!
//! The registry that owns the observer callbacks is an implementation detail
//! of the container: it lives behind the same mutex as the element store, so
//! dispatch, subscription changes, and set mutation are all serialized.

mod event;
mod registry;

pub use event::SetChange;
pub use registry::SubscriptionId;

pub(crate) use registry::{BoxedObserver, ObserverRegistry};
