//! Bulk element transfer between blocks.
//!
//! These helpers move, clone, or drop runs of elements addressed by raw
//! pointers. They never allocate; the caller owns both ends.

#![allow(unsafe_code)]

use std::mem;
use std::ptr;

/// Relocate `count` values from `src` into the uninitialized slots at `dst`.
///
/// A Rust move is a bitwise copy, so after this call the `src` slots hold no
/// live values and must not be dropped.
///
/// # Safety
///
/// `src` must point to `count` live values, `dst` to `count` writable slots,
/// and the two ranges must not overlap.
pub(crate) unsafe fn relocate<T>(src: *const T, dst: *mut T, count: usize) {
    // SAFETY: upheld by the caller.
    unsafe { ptr::copy_nonoverlapping(src, dst, count) };
}

/// Clone every element of `src` into consecutive slots starting at `dst`.
///
/// If a clone panics, the elements already written are dropped before the
/// panic continues, so `dst` is left fully uninitialized.
///
/// # Safety
///
/// `dst` must point to at least `src.len()` writable, uninitialized slots
/// that do not overlap `src`.
pub(crate) unsafe fn clone_into<T: Clone>(src: &[T], dst: *mut T) {
    let mut guard = CloneGuard {
        dst,
        initialized: 0,
    };
    for item in src {
        // SAFETY: `initialized < src.len()`, within the caller's slots.
        unsafe { dst.add(guard.initialized).write(item.clone()) };
        guard.initialized += 1;
    }
    mem::forget(guard);
}

/// Drop `count` live values starting at `ptr`.
///
/// # Safety
///
/// `ptr` must point to `count` live values that are not used again.
pub(crate) unsafe fn drop_run<T>(ptr: *mut T, count: usize) {
    if mem::needs_drop::<T>() {
        // SAFETY: upheld by the caller.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, count)) };
    }
}

/// Drops the cloned prefix if [`clone_into`] unwinds.
struct CloneGuard<T> {
    dst: *mut T,
    initialized: usize,
}

impl<T> Drop for CloneGuard<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `initialized` slots from `dst` were written.
        unsafe { drop_run(self.dst, self.initialized) };
    }
}
