//! # observable-set
//!
//! A thread-safe hash set that emits structured change notifications when
//! its membership changes.
//!
//! ## Overview
//!
//! [`ObservableHashSet`] behaves like a standard unique-element collection,
//! but every effective mutation additionally dispatches a [`SetChange`]
//! notification to registered observers, so reactive layers, derived views,
//! and caches can react to additions, removals, and full resets without
//! polling or diffing.
//!
//! The container is built around three pieces:
//!
//! - **Guarded store**: a `HashSet` plus one exclusive `parking_lot::Mutex`
//!   that serializes every read and write, so each mutation and its
//!   notification appear atomic to all other threads.
//! - **Batched mutation**: [`ObservableHashSet::insert_all`] and
//!   [`ObservableHashSet::remove_all`] coalesce any number of membership
//!   changes into exactly one notification carrying only the elements that
//!   actually changed state.
//! - **Synchronized iteration**: [`ObservableHashSet::iter`] holds the lock
//!   for the iterator's whole lifetime, guaranteeing a snapshot-stable view.
//!
//! ## Feature Flags
//!
//! - `fxhash`: [`FxObservableHashSet`] alias using `rustc-hash`
//! - `ahash`: [`AHashObservableHashSet`] alias using `ahash`
//!
//! ## Example
//!
//! ```rust
//! use observable_set::{ObservableHashSet, SetChange};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let set: ObservableHashSet<i32> = ObservableHashSet::new();
//!
//! let added = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&added);
//! set.subscribe(move |change| {
//!     if let SetChange::Added(items) = change {
//!         counter.fetch_add(items.len(), Ordering::SeqCst);
//!     }
//! });
//!
//! set.insert(1);
//! set.insert_all([2, 3, 3]); // one notification, duplicates collapsed
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(added.load(Ordering::SeqCst), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use observable_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::observe::{SetChange, SubscriptionId};
    pub use crate::set::ObservableHashSet;
}

pub mod observe;
pub mod set;

pub use observe::{SetChange, SubscriptionId};
pub use set::{Iter, ObservableHashSet};

#[cfg(feature = "fxhash")]
pub use set::FxObservableHashSet;

#[cfg(feature = "ahash")]
pub use set::AHashObservableHashSet;
