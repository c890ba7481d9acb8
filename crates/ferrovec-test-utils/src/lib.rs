//! Instrumented element types for ferrovec lifecycle tests.
//!
//! Containers are judged by what they do to their elements: how many get
//! constructed, cloned, and dropped. [`DropCounter`] hands out [`Tracked`]
//! values that report those events back to a shared counter so tests can
//! assert "every element dropped exactly once" directly.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{numbered_strings, FailingClone};

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Counts {
    created: AtomicUsize,
    cloned: AtomicUsize,
    dropped: AtomicUsize,
}

/// Shared event counter for [`Tracked`] values.
///
/// Cloning a `DropCounter` shares the same counts.
#[derive(Clone, Default)]
pub struct DropCounter {
    counts: Arc<Counts>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so its clones and drops are recorded here.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.counts.created.fetch_add(1, Ordering::Relaxed);
        Tracked {
            value,
            counter: self.clone(),
        }
    }

    /// Values created through [`track`](Self::track) or cloning.
    pub fn created(&self) -> usize {
        self.counts.created.load(Ordering::Relaxed)
    }

    /// Values created by `Clone::clone`.
    pub fn cloned(&self) -> usize {
        self.counts.cloned.load(Ordering::Relaxed)
    }

    pub fn dropped(&self) -> usize {
        self.counts.dropped.load(Ordering::Relaxed)
    }

    /// Values created but not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

impl fmt::Debug for DropCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropCounter")
            .field("created", &self.created())
            .field("cloned", &self.cloned())
            .field("dropped", &self.dropped())
            .finish()
    }
}

/// A value whose clones and drops are counted by a [`DropCounter`].
pub struct Tracked<T> {
    value: T,
    counter: DropCounter,
}

impl<T> Tracked<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.counter.counts.cloned.fetch_add(1, Ordering::Relaxed);
        self.counter.track(self.value.clone())
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.counter.counts.dropped.fetch_add(1, Ordering::Relaxed);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
