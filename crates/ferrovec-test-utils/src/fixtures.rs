//! Reusable element fixtures.
//!
//! - [`FailingClone`] — panics deterministically after N successful clones.
//! - [`numbered_strings`] — heap-owning values with predictable contents.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::{DropCounter, Tracked};

/// An element whose `Clone` panics after a configurable number of successes.
///
/// All values built by one [`FailingClone::batch`] call share the same clone
/// budget, so "the 3rd clone of any element fails" is easy to set up. Every
/// value also carries a [`Tracked`] marker, so leaks and double drops show
/// up in the associated [`DropCounter`].
pub struct FailingClone {
    pub id: usize,
    succeed_count: usize,
    call_count: Arc<AtomicUsize>,
    _tracked: Tracked<()>,
}

impl FailingClone {
    /// Build `len` values (ids `0..len`) that together allow `succeed_count`
    /// clones before panicking.
    pub fn batch(counter: &DropCounter, len: usize, succeed_count: usize) -> Vec<Self> {
        let call_count = Arc::new(AtomicUsize::new(0));
        (0..len)
            .map(|id| Self {
                id,
                succeed_count,
                call_count: Arc::clone(&call_count),
                _tracked: counter.track(()),
            })
            .collect()
    }

    /// How many times `clone()` has been attempted across the batch.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the shared clone counter.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }
}

impl Clone for FailingClone {
    fn clone(&self) -> Self {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            panic!(
                "deliberate clone failure after {} successful clones",
                self.succeed_count
            );
        }
        Self {
            id: self.id,
            succeed_count: self.succeed_count,
            call_count: Arc::clone(&self.call_count),
            _tracked: self._tracked.clone(),
        }
    }
}

/// `["test0", "test1", ...]`, `len` entries.
pub fn numbered_strings(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("test{i}")).collect()
}
